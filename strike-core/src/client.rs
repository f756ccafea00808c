//! Booking endpoint abstraction.

use crate::request::{BookingRequest, BookingResponse};
use thiserror::Error;

/// Why a validated booking could not be completed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("booking request failed: {0}")]
    Transport(String),
    #[error("booking endpoint answered with status {code}")]
    Status { code: u16 },
    #[error("booking response could not be decoded: {0}")]
    Decode(String),
}

/// Trait for abstracting the booking endpoint.
/// Platform-specific implementations should provide this
#[async_trait::async_trait(?Send)]
pub trait BookingClient {
    /// Submit a validated booking.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable response body.
    async fn book(&self, request: &BookingRequest) -> Result<BookingResponse, SubmissionError>;
}

/// Map an HTTP status to a submission outcome.
///
/// # Errors
///
/// Returns [`SubmissionError::Status`] for anything outside `200..=299`.
pub const fn check_status(code: u16) -> Result<(), SubmissionError> {
    if code >= 200 && code < 300 {
        Ok(())
    } else {
        Err(SubmissionError::Status { code })
    }
}
