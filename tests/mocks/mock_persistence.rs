use contact_book::error::{StoreError, StoreResult};
use contact_book::models::Contact;
use contact_book::persistence::ContactPersistence;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact persistence for testing.
///
/// Keeps the saved sequence in memory, records every save, and can be told
/// to fail the next saves. Clones share state, so a test keeps one handle
/// while the store owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockPersistence {
    saved: Arc<Mutex<Vec<Contact>>>,
    history: Arc<Mutex<Vec<Vec<Contact>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockPersistence {
    /// Create a new empty MockPersistence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose stored sequence is `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let mock = Self::new();
        *mock.saved.lock().unwrap() = contacts;
        mock
    }

    /// The sequence as last saved.
    pub fn saved(&self) -> Vec<Contact> {
        self.saved.lock().unwrap().clone()
    }

    /// Every sequence passed to `save`, oldest first.
    pub fn save_history(&self) -> Vec<Vec<Contact>> {
        self.history.lock().unwrap().clone()
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactPersistence for MockPersistence {
    fn load(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("load");
        Ok(self.saved())
    }

    fn save(&mut self, contacts: &[Contact]) -> StoreResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StoreError::Persistence("disk full".to_string()));
        }

        *self.saved.lock().unwrap() = contacts.to_vec();
        self.history.lock().unwrap().push(contacts.to_vec());
        Ok(())
    }
}
