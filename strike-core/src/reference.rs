//! In-process stand-in for the booking backend.
//!
//! Echoes `when`, `people` and `lanes`, hands out a configurable booking id and
//! prices the booking with the reference rule. Used by tests and by the
//! tester's offline mode.

use crate::client::{BookingClient, SubmissionError};
use crate::confirmation::ConfirmationRecord;
use crate::request::{BookingRequest, BookingResponse};
use std::cell::RefCell;

pub const PRICE_PER_PLAYER: u64 = 120;
pub const PRICE_PER_LANE: u64 = 100;
pub const DEFAULT_BOOKING_ID: &str = "TEST-12345";

/// Reference price: 120 per player plus 100 per lane, `None` on overflow.
#[must_use]
pub const fn reference_price(people: u64, lanes: u64) -> Option<u64> {
    match (
        PRICE_PER_PLAYER.checked_mul(people),
        PRICE_PER_LANE.checked_mul(lanes),
    ) {
        (Some(players), Some(lanes)) => players.checked_add(lanes),
        _ => None,
    }
}

#[derive(Debug)]
pub struct ReferenceBackend {
    booking_id: String,
    fail_status: Option<u16>,
    requests: RefCell<Vec<BookingRequest>>,
}

impl Default for ReferenceBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            booking_id: DEFAULT_BOOKING_ID.to_string(),
            fail_status: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_booking_id(mut self, booking_id: impl Into<String>) -> Self {
        self.booking_id = booking_id.into();
        self
    }

    /// Answer every request with the given non-success status.
    #[must_use]
    pub const fn failing_with(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<BookingRequest> {
        self.requests.borrow().clone()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<BookingRequest> {
        self.requests.borrow().last().cloned()
    }

    /// Build the response the reference backend gives for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Decode`] when `people` or `lanes` is not numeric
    /// or the price does not fit in a `u64`.
    pub fn respond(&self, request: &BookingRequest) -> Result<BookingResponse, SubmissionError> {
        let people = request
            .people
            .value()
            .ok_or_else(|| SubmissionError::Decode(format!("people: {}", request.people)))?;
        let lanes = request
            .lanes
            .value()
            .ok_or_else(|| SubmissionError::Decode(format!("lanes: {}", request.lanes)))?;
        let price = reference_price(people, lanes).ok_or_else(|| {
            SubmissionError::Decode(format!("price overflow: {people} players, {lanes} lanes"))
        })?;
        Ok(BookingResponse {
            booking_details: ConfirmationRecord {
                when: request.when.clone(),
                people: request.people.clone(),
                lanes: request.lanes.clone(),
                booking_id: self.booking_id.clone(),
                price: price.into(),
            },
        })
    }
}

#[async_trait::async_trait(?Send)]
impl BookingClient for ReferenceBackend {
    async fn book(&self, request: &BookingRequest) -> Result<BookingResponse, SubmissionError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(code) = self.fail_status {
            return Err(SubmissionError::Status { code });
        }
        self.respond(request)
    }
}
