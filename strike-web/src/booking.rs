//! Browser implementations of the booking traits
//!
//! This module provides web-specific implementations of the strike-core
//! traits and re-exports the core booking types.

use gloo::net::http::Request;
use gloo::storage::errors::StorageError;
use gloo::storage::{SessionStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

// Re-export all types from strike-core
pub use strike_core::*;

/// Booking endpoint reached with `fetch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebBookingClient {
    url: String,
}

impl WebBookingClient {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Client for the endpoint configured at build time.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(crate::paths::booking_url())
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait(?Send)]
impl BookingClient for WebBookingClient {
    async fn book(&self, request: &BookingRequest) -> Result<BookingResponse, SubmissionError> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| SubmissionError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        check_status(response.status())?;
        response
            .json::<BookingResponse>()
            .await
            .map_err(|e| SubmissionError::Decode(e.to_string()))
    }
}

/// Confirmation slot backed by `sessionStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebSessionStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SessionStore for WebSessionStore {
    type Error = WebStorageError;

    fn get<T>(&self, key: &str) -> Result<Option<T>, Self::Error>
    where
        T: DeserializeOwned,
    {
        match SessionStorage::get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => Err(WebStorageError::Serialization(e)),
            Err(e) => Err(WebStorageError::Storage(e.to_string())),
        }
    }

    fn set<T>(&self, key: &str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        SessionStorage::set(key, value).map_err(|e| WebStorageError::Storage(e.to_string()))
    }

    fn clear(&self, key: &str) {
        SessionStorage::delete(key);
    }
}

pub type WebBookingEngine = BookingEngine<WebBookingClient, WebSessionStore>;

/// Create a browser booking engine with `WebBookingClient` and `WebSessionStore`
#[must_use]
pub fn create_web_booking_engine() -> WebBookingEngine {
    BookingEngine::new(WebBookingClient::from_config(), WebSessionStore)
}

/// Message shown on the form for a failed submit, in the current language.
#[must_use]
pub fn error_message(err: &BookingError) -> String {
    crate::i18n::t(err.message_key())
}
