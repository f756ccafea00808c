//! Strike booking core
//!
//! Platform-agnostic logic behind the bowling-lane booking form: draft editing,
//! the validation rule set, request/response mapping and the confirmation
//! hand-off between views. This crate has no UI or browser dependencies;
//! the endpoint and session storage are supplied through traits.

pub mod client;
pub mod confirmation;
pub mod draft;
pub mod engine;
pub mod reference;
pub mod request;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use client::{BookingClient, SubmissionError, check_status};
pub use confirmation::{
    CONFIRMATION_KEY, CURRENCY, ConfirmationRecord, load_confirmation, store_confirmation,
};
pub use draft::{BookingDraft, DraftField, ShoeEntry, ShoeId};
pub use engine::{BookingEngine, BookingError, SUBMISSION_MESSAGE_KEY};
pub use reference::{DEFAULT_BOOKING_ID, ReferenceBackend, reference_price};
pub use request::{BookingRequest, BookingResponse, Count};
pub use storage::{MemoryStore, SessionStore};
pub use validation::{MAX_PLAYERS_PER_LANE, ValidatedCounts, ValidationError, validate};
