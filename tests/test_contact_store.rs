//! Behavioral tests for the contact store.
//!
//! These tests drive the store the way the form and table do, through a
//! mock persistence collaborator that records every save.

mod mocks;

use contact_book::domain::{
    ValidationError, INVALID_EMAIL_MESSAGE, INVALID_PHONE_MESSAGE, MISSING_FIELD_NOTICE,
};
use contact_book::store::{ContactStore, FormState, IndexMode};
use contact_book::view::{SortDirection, SortKey};
use contact_book::{Contact, StoreError};
use mocks::MockPersistence;

fn three_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Charlie", "0603", "charlie@example.com"),
        Contact::new("Alice", "0601", "alice@example.com"),
        Contact::new("Bob", "0602", "bob@example.com"),
    ]
}

fn open(mock: &MockPersistence) -> ContactStore {
    ContactStore::open(Box::new(mock.clone())).unwrap()
}

fn fill(store: &mut ContactStore, name: &str, phone: &str, email: &str) {
    store.set_name(name);
    store.set_phone(phone);
    store.set_email(email);
}

#[test]
fn test_open_loads_once() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let store = open(&mock);

    assert_eq!(store.contacts(), three_contacts().as_slice());
    assert_eq!(mock.get_call_count("load"), 1);
    assert_eq!(mock.get_call_count("save"), 0);
}

#[test]
fn test_add_grows_by_one_and_appends() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let mut store = open(&mock);

    fill(&mut store, "Dana", "0604", "dana@example.com");
    store.submit().unwrap();

    let expected = Contact::new("Dana", "0604", "dana@example.com");
    assert_eq!(store.contacts().len(), 4);
    assert_eq!(store.contacts().last(), Some(&expected));
    assert_eq!(mock.saved(), store.contacts());
}

#[test]
fn test_add_does_not_deduplicate() {
    let mock = MockPersistence::new();
    let mut store = open(&mock);

    for _ in 0..2 {
        fill(&mut store, "Same", "1", "same@x.io");
        store.submit().unwrap();
    }

    assert_eq!(store.contacts().len(), 2);
    assert_eq!(store.contacts()[0], store.contacts()[1]);
}

#[test]
fn test_edit_replaces_only_target() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let mut store = open(&mock);
    store.handle_sort(SortKey::Phone);

    // Display order by phone: Alice, Bob, Charlie. Row 1 is Bob, stored at 2.
    let draft = store.begin_edit(1).unwrap().clone();
    assert_eq!(draft.name, "Bob");
    assert_eq!(store.editing_target(), Some(2));

    fill(&mut store, "Robert", "0699", "robert@example.com");
    store.submit().unwrap();

    let contacts = store.contacts();
    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[0], three_contacts()[0]);
    assert_eq!(contacts[1], three_contacts()[1]);
    assert_eq!(contacts[2], Contact::new("Robert", "0699", "robert@example.com"));
    assert_eq!(mock.saved(), contacts);
}

#[test]
fn test_submit_clears_draft_and_target() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let mut store = open(&mock);

    store.begin_edit(0).unwrap();
    assert!(matches!(store.form_state(), FormState::ComposingEdit { .. }));

    store.submit().unwrap();
    assert_eq!(store.form_state(), FormState::Idle);
    assert!(store.draft().is_empty());
    assert_eq!(store.editing_target(), None);
}

#[test]
fn test_begin_edit_overwrites_previous_edit() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let mut store = open(&mock);

    store.begin_edit(0).unwrap();
    store.begin_edit(2).unwrap();

    // Name ascending: Alice, Bob, Charlie
    assert_eq!(store.draft().name, "Charlie");
    assert_eq!(store.editing_target(), Some(0));
}

#[test]
fn test_missing_field_rejects_with_notice() {
    let mock = MockPersistence::new();
    let mut store = open(&mock);
    store.set_name("Alice");
    store.set_phone("0601");

    let err = store.submit().unwrap_err();
    let validation = err.as_validation().unwrap();
    assert_eq!(validation, &ValidationError::MissingField);
    assert_eq!(validation.notice(), Some(MISSING_FIELD_NOTICE));

    assert_eq!(store.draft().name, "Alice");
    assert_eq!(store.draft().phone, "0601");
    assert_eq!(mock.get_call_count("save"), 0);
}

#[test]
fn test_invalid_fields_reject_silently() {
    let mock = MockPersistence::new();
    let mut store = open(&mock);

    fill(&mut store, "Alice", "06-01", "alice@example.com");
    assert_eq!(store.phone_error(), Some(INVALID_PHONE_MESSAGE));
    let err = store.submit().unwrap_err();
    assert_eq!(err.as_validation().and_then(|v| v.notice()), None);

    store.set_phone("0601");
    store.set_email("alice@example");
    assert_eq!(store.email_error(), Some(INVALID_EMAIL_MESSAGE));
    assert!(store.submit().is_err());

    assert!(store.contacts().is_empty());
    assert_eq!(mock.get_call_count("save"), 0);
}

#[test]
fn test_search_matches_name_case_insensitively() {
    let mock = MockPersistence::with_contacts(vec![
        Contact::new("John", "0601", "j@x.io"),
        Contact::new("Mary", "0602", "m@x.io"),
    ]);
    let mut store = open(&mock);

    store.set_search_term("JOH");
    let view = store.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "John");
}

#[test]
fn test_sort_name_toggle_twice_restores_order() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let mut store = open(&mock);

    let initial = store.view();
    let names: Vec<&str> = initial.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    store.handle_sort(SortKey::Name);
    assert_eq!(store.sort_state().direction, SortDirection::Desc);
    assert_eq!(store.view()[0].name, "Charlie");

    store.handle_sort(SortKey::Name);
    assert_eq!(store.sort_state().direction, SortDirection::Asc);
    assert_eq!(store.view(), initial);
}

#[test]
fn test_delete_removes_displayed_row_and_persists() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let mut store = open(&mock);

    // Row 1 in name order is Bob
    let removed = store.delete(1).unwrap();
    assert_eq!(removed.name, "Bob");

    let saved = mock.saved();
    assert_eq!(saved.len(), 2);
    assert!(saved.iter().all(|c| c.name != "Bob"));
    assert_eq!(mock.save_history().len(), 1);
}

#[test]
fn test_delete_in_storage_mode_uses_stored_position() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let mut store =
        ContactStore::open_with_mode(Box::new(mock.clone()), IndexMode::Storage).unwrap();

    // Row 1 displays Bob, but position 1 holds Alice
    let removed = store.delete(1).unwrap();
    assert_eq!(removed.name, "Alice");
    assert_eq!(mock.saved().len(), 2);
}

#[test]
fn test_delete_with_filter_active() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let mut store = open(&mock);
    store.set_search_term("charlie");

    let removed = store.delete(0).unwrap();
    assert_eq!(removed.name, "Charlie");
    assert!(store.view().is_empty());
}

#[test]
fn test_failed_save_leaves_state_unchanged() {
    let mock = MockPersistence::with_contacts(three_contacts());
    let mut store = open(&mock);
    mock.set_fail_saves(true);

    fill(&mut store, "Dana", "0604", "dana@example.com");
    let err = store.submit().unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
    assert_eq!(store.contacts(), three_contacts().as_slice());
    assert_eq!(store.draft().name, "Dana");

    assert!(store.delete(0).is_err());
    assert_eq!(store.contacts().len(), 3);

    mock.set_fail_saves(false);
    store.submit().unwrap();
    assert_eq!(mock.saved().len(), 4);
}
