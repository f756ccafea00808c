#![cfg(target_arch = "wasm32")]

use strike_web::booking::{
    BookingDraft, BookingEngine, CONFIRMATION_KEY, ConfirmationRecord, Count, DraftField,
    ReferenceBackend, SessionStore, WebSessionStore,
};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn sample_record() -> ConfirmationRecord {
    ConfirmationRecord {
        when: "2025-12-24T18:00".to_string(),
        people: Count::from("2"),
        lanes: Count::from("1"),
        booking_id: "WEB-1".to_string(),
        price: 340_u64.into(),
    }
}

#[wasm_bindgen_test]
fn missing_key_reads_as_absent() {
    let store = WebSessionStore;
    store.clear(CONFIRMATION_KEY);
    let loaded: Option<ConfirmationRecord> = store.get(CONFIRMATION_KEY).expect("readable");
    assert!(loaded.is_none());
}

#[wasm_bindgen_test]
fn record_survives_session_storage() {
    let store = WebSessionStore;
    store.set(CONFIRMATION_KEY, &sample_record()).expect("writable");
    let loaded: Option<ConfirmationRecord> = store.get(CONFIRMATION_KEY).expect("readable");
    assert_eq!(loaded, Some(sample_record()));
    store.clear(CONFIRMATION_KEY);
}

#[wasm_bindgen_test]
fn corrupted_record_is_treated_as_absent() {
    let storage = strike_web::dom::window()
        .session_storage()
        .expect("session storage")
        .expect("session storage available");
    storage
        .set_item(CONFIRMATION_KEY, "{not json")
        .expect("raw write");
    assert!(strike_web::booking::load_confirmation(None, &WebSessionStore).is_none());
    WebSessionStore.clear(CONFIRMATION_KEY);
}

#[wasm_bindgen_test]
async fn engine_writes_confirmation_to_session_storage() {
    WebSessionStore.clear(CONFIRMATION_KEY);
    let backend = ReferenceBackend::new().with_booking_id("WEB-2");
    let engine = BookingEngine::new(backend, WebSessionStore);
    let draft = BookingDraft::new()
        .with_field(DraftField::Date, "2025-12-24")
        .with_field(DraftField::Time, "18:00")
        .with_field(DraftField::People, "2")
        .with_field(DraftField::Lanes, "1");

    let record = engine.validate_and_submit(&draft).await.expect("booking succeeds");
    assert_eq!(record.booking_id, "WEB-2");
    assert_eq!(engine.load_confirmation(None), Some(record));
    engine.clear_confirmation();
    assert!(engine.load_confirmation(None).is_none());
}
