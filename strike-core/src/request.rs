//! Wire types exchanged with the booking endpoint.

use crate::confirmation::ConfirmationRecord;
use crate::draft::BookingDraft;
use crate::validation::{ValidationError, validate};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// A party or lane count as it travels over the wire.
///
/// The form sends counts as strings and the endpoint echoes them back, but
/// records written by other clients may carry plain numbers, integral or not.
/// Either form is accepted and re-serialized unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(Number),
    Text(String),
}

impl Count {
    /// Numeric value, when the count is a non-negative whole number.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::Number(n) => whole_number(n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_amount(n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Count {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Count {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// `n` as a `u64` when it is non-negative and has no fractional part.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn whole_number(n: &Number) -> Option<u64> {
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })
}

/// Render a JSON number for display, dropping the `.0` of whole floats.
pub(crate) fn format_amount(n: &Number) -> String {
    if n.is_f64() {
        if let Some(whole) = whole_number(n) {
            return whole.to_string();
        }
    }
    n.to_string()
}

/// Body of `POST <booking-url>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub when: String,
    pub people: Count,
    pub lanes: Count,
    pub shoes: Vec<String>,
}

impl BookingRequest {
    /// Validate a draft and build the outbound payload from it.
    ///
    /// # Errors
    ///
    /// Returns the first rule the draft violates.
    pub fn from_draft(draft: &BookingDraft) -> Result<Self, ValidationError> {
        validate(draft)?;
        Ok(Self {
            when: draft.when(),
            people: Count::Text(draft.people.trim().to_string()),
            lanes: Count::Text(draft.lanes.trim().to_string()),
            shoes: draft
                .shoes()
                .iter()
                .filter(|entry| entry.is_filled())
                .map(|entry| entry.size.trim().to_string())
                .collect(),
        })
    }
}

/// Success body returned by the booking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_details: ConfirmationRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftField;
    use serde_json::json;

    #[test]
    fn request_serializes_counts_as_typed() {
        let mut draft = BookingDraft::new()
            .with_field(DraftField::Date, "2025-12-24")
            .with_field(DraftField::Time, "18:00")
            .with_field(DraftField::People, "2")
            .with_field(DraftField::Lanes, "1");
        for size in ["41", "42"] {
            let id = draft.add_shoe();
            draft.set_shoe_size(id, size);
        }
        let request = BookingRequest::from_draft(&draft).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "when": "2025-12-24T18:00",
                "people": "2",
                "lanes": "1",
                "shoes": ["41", "42"],
            })
        );
    }

    #[test]
    fn invalid_draft_never_builds_a_request() {
        let err = BookingRequest::from_draft(&BookingDraft::new()).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[test]
    fn count_accepts_numbers_and_strings() {
        let numeric: Count = serde_json::from_value(json!(4)).unwrap();
        let textual: Count = serde_json::from_value(json!("4")).unwrap();
        assert_eq!(numeric.value(), Some(4));
        assert_eq!(textual.value(), Some(4));
        assert_eq!(numeric.to_string(), "4");
        assert_eq!(serde_json::to_value(&textual).unwrap(), json!("4"));
        assert_eq!(Count::from("x").value(), None);
    }

    #[test]
    fn count_accepts_float_numbers() {
        let whole: Count = serde_json::from_value(json!(4.0)).unwrap();
        assert_eq!(whole.value(), Some(4));
        assert_eq!(whole.to_string(), "4");
        assert_eq!(serde_json::to_value(&whole).unwrap(), json!(4.0));
        let fraction: Count = serde_json::from_value(json!(2.5)).unwrap();
        assert_eq!(fraction.value(), None);
        assert_eq!(fraction.to_string(), "2.5");
    }

    #[test]
    fn amounts_keep_fractions_and_drop_trailing_zero() {
        assert_eq!(format_amount(&Number::from(580u64)), "580");
        assert_eq!(format_amount(&serde_json::from_str("580.0").unwrap()), "580");
        assert_eq!(format_amount(&serde_json::from_str("580.5").unwrap()), "580.5");
        assert_eq!(format_amount(&serde_json::from_str("-3").unwrap()), "-3");
    }

    #[test]
    fn response_reads_booking_details() {
        let body = json!({
            "bookingDetails": {
                "when": "2025-12-24T18:00",
                "people": "4",
                "lanes": "1",
                "bookingId": "TEST-12345",
                "price": 580
            }
        });
        let response: BookingResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.booking_details.booking_id, "TEST-12345");
        assert_eq!(response.booking_details.price, Number::from(580u64));
    }

    #[test]
    fn response_accepts_float_price() {
        let body = json!({
            "bookingDetails": {
                "when": "2025-12-24T18:00",
                "people": 4,
                "lanes": 1.0,
                "bookingId": "TEST-12345",
                "price": 580.0
            }
        });
        let response: BookingResponse = serde_json::from_value(body).unwrap();
        let record = response.booking_details;
        assert_eq!(record.total_line(), "Total: 580 SEK");
        assert_eq!(record.lanes.value(), Some(1));
        assert_eq!(record.people.to_string(), "4");
    }
}
