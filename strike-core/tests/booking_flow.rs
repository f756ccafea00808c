use futures::executor::block_on;
use serde_json::Value;
use strike_core::{
    BookingDraft, BookingEngine, BookingError, CONFIRMATION_KEY, DraftField, MemoryStore,
    ReferenceBackend, ValidationError,
};

fn engine() -> BookingEngine<ReferenceBackend, MemoryStore> {
    BookingEngine::new(ReferenceBackend::new(), MemoryStore::new())
}

fn filled_form() -> BookingDraft {
    BookingDraft::new()
        .with_field(DraftField::Date, "2025-12-24")
        .with_field(DraftField::Time, "18:00")
        .with_field(DraftField::People, "4")
        .with_field(DraftField::Lanes, "1")
}

fn add_shoes(draft: &mut BookingDraft, count: usize) {
    for _ in 0..count {
        draft.add_shoe();
    }
}

fn fill_shoe(draft: &mut BookingDraft, number: usize, size: &str) {
    let id = draft.shoe_id_at(number).expect("shoe row exists");
    draft.set_shoe_size(id, size);
}

fn submit(
    engine: &BookingEngine<ReferenceBackend, MemoryStore>,
    draft: &BookingDraft,
) -> BookingError {
    block_on(engine.validate_and_submit(draft)).expect_err("draft should be rejected")
}

#[test]
fn all_fields_empty_is_rejected() {
    let engine = engine();
    assert_eq!(
        submit(&engine, &BookingDraft::new()),
        BookingError::Validation(ValidationError::MissingFields)
    );
}

#[test]
fn missing_lanes_is_rejected() {
    let engine = engine();
    let draft = filled_form().with_field(DraftField::Lanes, "");
    assert_eq!(
        submit(&engine, &draft),
        BookingError::Validation(ValidationError::MissingFields)
    );
}

#[test]
fn players_and_shoes_must_match() {
    let engine = engine();
    let mut draft = filled_form().with_field(DraftField::People, "2");
    add_shoes(&mut draft, 1);
    fill_shoe(&mut draft, 1, "42");
    assert_eq!(
        submit(&engine, &draft),
        BookingError::Validation(ValidationError::ShoeCountMismatch)
    );
}

#[test]
fn every_shoe_needs_a_size() {
    let engine = engine();
    let mut draft = filled_form().with_field(DraftField::People, "2");
    add_shoes(&mut draft, 2);
    fill_shoe(&mut draft, 1, "42");
    assert_eq!(
        submit(&engine, &draft),
        BookingError::Validation(ValidationError::IncompleteShoes)
    );
}

#[test]
fn more_than_four_players_per_lane_is_rejected() {
    let engine = engine();
    let mut draft = filled_form().with_field(DraftField::People, "5");
    add_shoes(&mut draft, 5);
    for number in 1..=5 {
        fill_shoe(&mut draft, number, &(40 + number).to_string());
    }
    assert_eq!(
        submit(&engine, &draft),
        BookingError::Validation(ValidationError::LaneCapacity)
    );
    assert!(engine.client().requests().is_empty());
}

#[test]
fn zero_lanes_is_a_capacity_error() {
    let engine = engine();
    let draft = filled_form()
        .with_field(DraftField::People, "1")
        .with_field(DraftField::Lanes, "0");
    assert_eq!(
        submit(&engine, &draft),
        BookingError::Validation(ValidationError::LaneCapacity)
    );
    assert!(engine.client().requests().is_empty());
}

#[test]
fn successful_booking_stores_confirmation() {
    let engine = engine();
    let mut draft = filled_form();
    add_shoes(&mut draft, 4);
    for number in 1..=4 {
        fill_shoe(&mut draft, number, &(40 + number).to_string());
    }

    let record = block_on(engine.validate_and_submit(&draft)).expect("booking succeeds");
    assert_eq!(record.display_when(), "2025-12-24 18:00");
    assert_eq!(record.people.to_string(), "4");
    assert_eq!(record.lanes.to_string(), "1");
    assert_eq!(record.booking_id, "TEST-12345");
    assert_eq!(record.total_line(), "Total: 580 SEK");

    let stored: Value =
        serde_json::from_str(&engine.store().raw(CONFIRMATION_KEY).expect("stored")).unwrap();
    assert_eq!(stored["when"], "2025-12-24T18:00");
    assert_eq!(stored["people"], "4");
    assert_eq!(stored["lanes"], "1");
    assert_eq!(stored["bookingId"], "TEST-12345");

    let sent = engine.client().last_request().expect("request sent");
    assert_eq!(sent.shoes, vec!["41", "42", "43", "44"]);
}

#[test]
fn removed_shoe_is_not_in_the_payload() {
    let engine = BookingEngine::new(
        ReferenceBackend::new().with_booking_id("SHOES-TEST"),
        MemoryStore::new(),
    );
    let mut draft = filled_form().with_field(DraftField::People, "2");
    add_shoes(&mut draft, 2);
    fill_shoe(&mut draft, 1, "42");
    let second = draft.shoe_id_at(2).expect("second row");
    assert!(draft.remove_shoe(second));
    draft.set_field(DraftField::People, "1");

    let record = block_on(engine.validate_and_submit(&draft)).expect("booking succeeds");
    assert_eq!(record.booking_id, "SHOES-TEST");
    let sent = engine.client().last_request().expect("request sent");
    assert_eq!(sent.shoes, vec!["42"]);
}

#[test]
fn each_success_overwrites_the_stored_confirmation() {
    let store = MemoryStore::new();
    let first = BookingEngine::new(ReferenceBackend::new().with_booking_id("ONE"), store.clone());
    let second = BookingEngine::new(ReferenceBackend::new().with_booking_id("TWO"), store);
    let draft = filled_form();
    block_on(first.validate_and_submit(&draft)).unwrap();
    block_on(second.validate_and_submit(&draft)).unwrap();
    assert_eq!(first.load_confirmation(None).unwrap().booking_id, "TWO");
}
