//! Confirmed bookings and how the confirmation view finds them.

use crate::request::{Count, format_amount};
use crate::storage::SessionStore;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Session storage key holding the latest confirmed booking.
pub const CONFIRMATION_KEY: &str = "confirmation";

/// Currency suffix printed after the total price.
pub const CURRENCY: &str = "SEK";

/// A booking as confirmed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRecord {
    pub when: String,
    pub people: Count,
    pub lanes: Count,
    pub booking_id: String,
    /// Total in kronor. Kept as the JSON number the backend sent, so `580`
    /// and `580.0` both load.
    pub price: Number,
}

impl ConfirmationRecord {
    /// `YYYY-MM-DD HH:mm` rendering of the stored `YYYY-MM-DDTHH:mm` timestamp.
    #[must_use]
    pub fn display_when(&self) -> String {
        match self.when.split_once('T') {
            Some((date, time)) => format!("{date} {time}"),
            None => self.when.clone(),
        }
    }

    /// The `Total: <price> SEK` line. Whole amounts print without decimals.
    #[must_use]
    pub fn total_line(&self) -> String {
        format!("Total: {} {CURRENCY}", format_amount(&self.price))
    }
}

/// Resolve the confirmation to show.
///
/// The record handed over by navigation wins; otherwise the last record
/// written to session storage is used. A stored value that cannot be decoded
/// is logged and treated as absent.
pub fn load_confirmation<S>(
    navigation: Option<&ConfirmationRecord>,
    store: &S,
) -> Option<ConfirmationRecord>
where
    S: SessionStore,
{
    if let Some(record) = navigation {
        return Some(record.clone());
    }
    match store.get::<ConfirmationRecord>(CONFIRMATION_KEY) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("Ignoring unreadable stored confirmation: {err}");
            None
        }
    }
}

/// Persist `record` as the latest confirmation, replacing any earlier one.
///
/// # Errors
///
/// Returns an error if the store cannot encode or write the record.
pub fn store_confirmation<S>(store: &S, record: &ConfirmationRecord) -> Result<(), S::Error>
where
    S: SessionStore,
{
    store.set(CONFIRMATION_KEY, record)
}
