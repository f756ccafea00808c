//! Booking form rule set.
//!
//! Rules are evaluated in a fixed order and the first failure wins, so a draft
//! that breaks several rules always reports the same message.

use crate::draft::BookingDraft;
use serde::Serialize;
use thiserror::Error;

pub const MAX_PLAYERS_PER_LANE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum ValidationError {
    #[error("all fields must be filled in")]
    MissingFields,
    #[error("number of shoes must match number of players")]
    ShoeCountMismatch,
    #[error("all shoes must be filled in")]
    IncompleteShoes,
    #[error("maximum 4 players per lane")]
    LaneCapacity,
}

impl ValidationError {
    /// Translation key of the user-facing message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::MissingFields => "booking.errors.missing_fields",
            Self::ShoeCountMismatch => "booking.errors.shoe_count",
            Self::IncompleteShoes => "booking.errors.incomplete_shoes",
            Self::LaneCapacity => "booking.errors.lane_capacity",
        }
    }
}

/// Party and lane counts of a draft that passed every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedCounts {
    pub people: u32,
    pub lanes: u32,
}

/// Parse a count field; blank and non-numeric values count as missing.
fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Run the rule set against a draft.
///
/// # Errors
///
/// Returns the first rule the draft violates.
pub fn validate(draft: &BookingDraft) -> Result<ValidatedCounts, ValidationError> {
    let people = parse_count(&draft.people);
    let lanes = parse_count(&draft.lanes);
    let (Some(people), Some(lanes)) = (people, lanes) else {
        return Err(ValidationError::MissingFields);
    };
    // A party of nobody is an unfilled players field. Zero lanes is left to
    // the capacity rule.
    if people == 0 {
        return Err(ValidationError::MissingFields);
    }
    if draft.date.trim().is_empty() || draft.time.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let shoes = draft.shoes();
    if !shoes.is_empty() && shoes.len() != people as usize {
        return Err(ValidationError::ShoeCountMismatch);
    }
    if shoes.iter().any(|entry| !entry.is_filled()) {
        return Err(ValidationError::IncompleteShoes);
    }

    if u64::from(people) > u64::from(lanes) * u64::from(MAX_PLAYERS_PER_LANE) {
        return Err(ValidationError::LaneCapacity);
    }

    Ok(ValidatedCounts { people, lanes })
}
