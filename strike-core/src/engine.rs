//! Submit-and-confirm flow shared by the web front end and the tester.

use crate::client::{BookingClient, SubmissionError};
use crate::confirmation::{
    CONFIRMATION_KEY, ConfirmationRecord, load_confirmation, store_confirmation,
};
use crate::draft::BookingDraft;
use crate::request::BookingRequest;
use crate::storage::SessionStore;
use crate::validation::ValidationError;
use thiserror::Error;

pub const SUBMISSION_MESSAGE_KEY: &str = "booking.errors.submission";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl BookingError {
    /// Translation key of the message shown on the form.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.message_key(),
            Self::Submission(_) => SUBMISSION_MESSAGE_KEY,
        }
    }
}

/// Validates drafts, submits them and keeps the latest confirmation
pub struct BookingEngine<C, S>
where
    C: BookingClient,
    S: SessionStore,
{
    client: C,
    store: S,
}

impl<C, S> BookingEngine<C, S>
where
    C: BookingClient,
    S: SessionStore,
{
    /// Create a new engine with the provided endpoint client and session store
    pub const fn new(client: C, store: S) -> Self {
        Self { client, store }
    }

    pub const fn client(&self) -> &C {
        &self.client
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Validate `draft`, submit it and record the confirmation.
    ///
    /// Nothing is sent unless every rule passes. On success the confirmation
    /// replaces whatever the session store held; a failed write is logged and
    /// does not fail the booking, since the backend has already accepted it.
    ///
    /// # Errors
    ///
    /// Returns the first validation rule the draft breaks, or the submission
    /// failure reported by the client.
    pub async fn validate_and_submit(
        &self,
        draft: &BookingDraft,
    ) -> Result<ConfirmationRecord, BookingError> {
        let request = match BookingRequest::from_draft(draft) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("Booking draft rejected: {err}");
                return Err(err.into());
            }
        };

        let response = match self.client.book(&request).await {
            Ok(response) => response,
            Err(err) => {
                log::error!("Booking submission failed: {err}");
                return Err(err.into());
            }
        };

        let record = response.booking_details;
        if let Err(err) = store_confirmation(&self.store, &record) {
            log::error!("Could not persist confirmation {}: {err}", record.booking_id);
        }
        log::info!(
            "Booking {} confirmed for {} players on {} lanes",
            record.booking_id,
            record.people,
            record.lanes
        );
        Ok(record)
    }

    /// Confirmation to show, preferring the navigation payload over storage.
    pub fn load_confirmation(
        &self,
        navigation: Option<&ConfirmationRecord>,
    ) -> Option<ConfirmationRecord> {
        load_confirmation(navigation, &self.store)
    }

    pub fn clear_confirmation(&self) {
        self.store.clear(CONFIRMATION_KEY);
    }
}
