//! Booking scenario catalogue
//!
//! Each scenario drives `strike-core` the way a visitor drives the booking
//! form and checks what comes back. Booked scenarios run against either the
//! in-process reference backend or a live endpoint.

use chrono::{Days, Local};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strike_core::{
    BookingClient, BookingDraft, BookingEngine, BookingError, CONFIRMATION_KEY,
    ConfirmationRecord, Count, DraftField, MemoryStore, ReferenceBackend, SessionStore,
    ValidationError, load_confirmation, reference_price,
};
use thiserror::Error;

use crate::http::HttpBookingClient;

/// Where booked scenarios send their requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Reference,
    Endpoint(String),
}

impl Target {
    pub fn label(&self) -> &str {
        match self {
            Self::Reference => "reference",
            Self::Endpoint(url) => url.as_str(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckFailure {
    #[error("{what}: expected {expected}, got {actual}")]
    Mismatch {
        what: &'static str,
        expected: String,
        actual: String,
    },
    #[error("draft was accepted, expected rejection: {0}")]
    Accepted(ValidationError),
    #[error("booking failed: {0}")]
    Booking(#[from] BookingError),
}

fn expect_eq<T>(what: &'static str, expected: T, actual: T) -> Result<(), CheckFailure>
where
    T: PartialEq + std::fmt::Display,
{
    if expected == actual {
        Ok(())
    } else {
        Err(CheckFailure::Mismatch {
            what,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Check {
    Rejected {
        draft: fn(BookingDraft) -> BookingDraft,
        error: ValidationError,
    },
    ShoeRows {
        edit: fn(&mut BookingDraft),
        rows: usize,
    },
    Booked {
        draft: fn(BookingDraft) -> BookingDraft,
        shoes: &'static [&'static str],
    },
    Confirmation {
        from_navigation: bool,
        stored: bool,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    check: Check,
}

fn with_shoes(mut draft: BookingDraft, sizes: &[&str]) -> BookingDraft {
    for size in sizes {
        let id = draft.add_shoe();
        draft.set_shoe_size(id, *size);
    }
    draft
}

pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario {
            key: "empty-form",
            description: "All fields empty is rejected",
            check: Check::Rejected {
                draft: |_| BookingDraft::new(),
                error: ValidationError::MissingFields,
            },
        },
        Scenario {
            key: "missing-lanes",
            description: "Missing lane count is rejected",
            check: Check::Rejected {
                draft: |draft| draft.with_field(DraftField::Lanes, ""),
                error: ValidationError::MissingFields,
            },
        },
        Scenario {
            key: "shoe-count-mismatch",
            description: "Players and shoes must match",
            check: Check::Rejected {
                draft: |draft| with_shoes(draft.with_field(DraftField::People, "2"), &["42"]),
                error: ValidationError::ShoeCountMismatch,
            },
        },
        Scenario {
            key: "incomplete-shoes",
            description: "Every shoe needs a size",
            check: Check::Rejected {
                draft: |draft| with_shoes(draft.with_field(DraftField::People, "2"), &["42", ""]),
                error: ValidationError::IncompleteShoes,
            },
        },
        Scenario {
            key: "lane-capacity",
            description: "More than four players per lane is rejected",
            check: Check::Rejected {
                draft: |draft| {
                    with_shoes(
                        draft.with_field(DraftField::People, "5"),
                        &["41", "42", "43", "44", "45"],
                    )
                },
                error: ValidationError::LaneCapacity,
            },
        },
        Scenario {
            key: "zero-lanes",
            description: "Players with no lanes are over capacity",
            check: Check::Rejected {
                draft: |draft| {
                    draft
                        .with_field(DraftField::People, "1")
                        .with_field(DraftField::Lanes, "0")
                },
                error: ValidationError::LaneCapacity,
            },
        },
        Scenario {
            key: "add-shoe",
            description: "The + control adds a shoe row",
            check: Check::ShoeRows {
                edit: |draft| {
                    draft.add_shoe();
                },
                rows: 1,
            },
        },
        Scenario {
            key: "remove-shoe",
            description: "The - control removes its own shoe row",
            check: Check::ShoeRows {
                edit: |draft| {
                    let first = draft.add_shoe();
                    draft.add_shoe();
                    draft.remove_shoe(first);
                },
                rows: 1,
            },
        },
        Scenario {
            key: "successful-booking",
            description: "Valid booking is sent and its confirmation stored",
            check: Check::Booked {
                draft: |draft| with_shoes(draft, &["41", "42", "43", "44"]),
                shoes: &["41", "42", "43", "44"],
            },
        },
        Scenario {
            key: "removed-shoe-payload",
            description: "A removed shoe row is not sent",
            check: Check::Booked {
                draft: |draft| {
                    let mut draft = with_shoes(draft.with_field(DraftField::People, "1"), &["42"]);
                    let extra = draft.add_shoe();
                    draft.set_shoe_size(extra, "38");
                    draft.remove_shoe(extra);
                    draft
                },
                shoes: &["42"],
            },
        },
        Scenario {
            key: "confirmation-from-navigation",
            description: "Navigation record wins over the stored one",
            check: Check::Confirmation {
                from_navigation: true,
                stored: true,
            },
        },
        Scenario {
            key: "confirmation-from-storage",
            description: "Stored record is shown when navigation carries none",
            check: Check::Confirmation {
                from_navigation: false,
                stored: true,
            },
        },
        Scenario {
            key: "no-confirmation",
            description: "Nothing to show without a record",
            check: Check::Confirmation {
                from_navigation: false,
                stored: false,
            },
        },
    ]
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .into_iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

pub fn find_scenario(key: &str) -> Option<Scenario> {
    catalog().into_iter().find(|scenario| scenario.key == key)
}

/// Tomorrow, so a live endpoint never sees a booking in the past.
fn booking_date() -> String {
    let today = Local::now().date_naive();
    today
        .checked_add_days(Days::new(1))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

fn filled_form() -> BookingDraft {
    BookingDraft::new()
        .with_field(DraftField::Date, booking_date())
        .with_field(DraftField::Time, "18:00")
        .with_field(DraftField::People, "4")
        .with_field(DraftField::Lanes, "1")
}

fn sample_record(booking_id: &str) -> ConfirmationRecord {
    ConfirmationRecord {
        when: format!("{}T18:00", booking_date()),
        people: Count::from(2),
        lanes: Count::from(1),
        booking_id: booking_id.to_string(),
        price: 340_u64.into(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub description: String,
    pub target: String,
    pub passed: bool,
    pub failure: Option<String>,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

pub async fn run_scenario(scenario: &Scenario, target: &Target) -> ScenarioResult {
    let start = Instant::now();
    let outcome = check(scenario.check, target).await;
    let duration = start.elapsed();
    if let Err(err) = &outcome {
        log::warn!("{} failed against {}: {err}", scenario.key, target.label());
    } else {
        log::debug!("{} passed in {duration:?}", scenario.key);
    }
    ScenarioResult {
        scenario_name: scenario.key.to_string(),
        description: scenario.description.to_string(),
        target: target.label().to_string(),
        passed: outcome.is_ok(),
        failure: outcome.err().map(|err| err.to_string()),
        duration,
    }
}

async fn check(check: Check, target: &Target) -> Result<(), CheckFailure> {
    match check {
        Check::Rejected { draft, error } => {
            let draft = draft(filled_form());
            match target {
                Target::Reference => {
                    let engine = BookingEngine::new(ReferenceBackend::new(), MemoryStore::new());
                    expect_rejection(&engine, &draft, error).await?;
                    expect_eq("requests sent", 0, engine.client().requests().len())
                }
                Target::Endpoint(url) => {
                    let engine =
                        BookingEngine::new(HttpBookingClient::new(url.clone()), MemoryStore::new());
                    expect_rejection(&engine, &draft, error).await
                }
            }
        }
        Check::ShoeRows { edit, rows } => {
            let mut draft = filled_form();
            edit(&mut draft);
            expect_eq("shoe rows", rows, draft.shoes().len())?;
            expect_eq("row numbers", rows, draft.shoe_rows().count())
        }
        Check::Booked { draft, shoes } => {
            let draft = draft(filled_form());
            match target {
                Target::Reference => {
                    let engine = BookingEngine::new(ReferenceBackend::new(), MemoryStore::new());
                    let record = book(&engine, &draft).await?;
                    let sent = engine
                        .client()
                        .last_request()
                        .map(|request| request.shoes)
                        .unwrap_or_default();
                    expect_eq("shoes sent", shoes.join(","), sent.join(","))?;
                    let people = record.people.value().unwrap_or_default();
                    let lanes = record.lanes.value().unwrap_or_default();
                    let expected = reference_price(people, lanes)
                        .map_or_else(|| "overflow".to_string(), |price| price.to_string());
                    expect_eq("price", expected, record.price.to_string())
                }
                Target::Endpoint(url) => {
                    let engine =
                        BookingEngine::new(HttpBookingClient::new(url.clone()), MemoryStore::new());
                    book(&engine, &draft).await.map(|_| ())
                }
            }
        }
        Check::Confirmation {
            from_navigation,
            stored,
        } => {
            let store = MemoryStore::new();
            let stored_record = sample_record("STORED-1");
            if stored {
                store
                    .set(CONFIRMATION_KEY, &stored_record)
                    .map_err(|err| CheckFailure::Mismatch {
                        what: "stored record",
                        expected: "written".to_string(),
                        actual: err.to_string(),
                    })?;
            }
            let navigation = from_navigation.then(|| sample_record("NAV-1"));
            let shown = load_confirmation(navigation.as_ref(), &store)
                .map_or_else(|| "none".to_string(), |record| record.booking_id);
            let expected = match (navigation, stored) {
                (Some(record), _) => record.booking_id,
                (None, true) => stored_record.booking_id,
                (None, false) => "none".to_string(),
            };
            expect_eq("shown booking", expected, shown)
        }
    }
}

async fn expect_rejection<C>(
    engine: &BookingEngine<C, MemoryStore>,
    draft: &BookingDraft,
    expected: ValidationError,
) -> Result<(), CheckFailure>
where
    C: BookingClient,
{
    match engine.validate_and_submit(draft).await {
        Err(BookingError::Validation(actual)) => {
            expect_eq("rejection", expected, actual)?;
            expect_eq("stored records", true, engine.store().is_empty())
        }
        Err(other) => Err(other.into()),
        Ok(_) => Err(CheckFailure::Accepted(expected)),
    }
}

async fn book<C>(
    engine: &BookingEngine<C, MemoryStore>,
    draft: &BookingDraft,
) -> Result<ConfirmationRecord, CheckFailure>
where
    C: BookingClient,
{
    let record = engine.validate_and_submit(draft).await?;
    expect_eq("when", draft.when(), record.when.clone())?;
    expect_eq("people", draft.people.trim().to_string(), record.people.to_string())?;
    expect_eq("lanes", draft.lanes.trim().to_string(), record.lanes.to_string())?;
    expect_eq("booking id present", true, !record.booking_id.trim().is_empty())?;
    let stored = engine
        .load_confirmation(None)
        .map(|stored| stored.booking_id)
        .unwrap_or_default();
    expect_eq("stored booking id", record.booking_id.clone(), stored)?;
    Ok(record)
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_keys_are_unique() {
        let keys: HashSet<_> = catalog().iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), catalog().len());
        assert_eq!(catalog().len(), 13);
    }

    #[test]
    fn every_scenario_passes_against_reference_backend() {
        for scenario in catalog() {
            let result = tokio_test::block_on(run_scenario(&scenario, &Target::Reference));
            assert!(result.passed, "{}: {:?}", result.scenario_name, result.failure);
            assert_eq!(result.target, "reference");
        }
    }

    #[test]
    fn find_scenario_by_key() {
        assert!(find_scenario("lane-capacity").is_some());
        assert!(find_scenario("zero-lanes").is_some());
        assert!(find_scenario("nope").is_none());
    }

    #[test]
    fn booking_date_is_iso_formatted() {
        let date = booking_date();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert!(filled_form().when().starts_with(&date));
    }

    #[test]
    fn mismatch_reports_both_sides() {
        let err = expect_eq("people", 2, 3).unwrap_err();
        assert_eq!(err.to_string(), "people: expected 2, got 3");
    }
}
