use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::persistence::traits::{ContactPersistence, KeyValueStore};

/// Key under which the contact list is stored by default.
pub const DEFAULT_STORAGE_KEY: &str = "contacts";

/// Contact persistence on top of a key-value store.
///
/// The whole sequence lives under a single key as a JSON array of
/// `{name, phone, email}` objects, in stored order.
#[derive(Debug, Clone)]
pub struct KeyValuePersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyValuePersistence<S> {
    /// Persist contacts in `store` under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Persist contacts in `store` under [`DEFAULT_STORAGE_KEY`].
    pub fn with_default_key(store: S) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    /// Borrow the underlying key-value store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> ContactPersistence for KeyValuePersistence<S> {
    fn load(&self) -> StoreResult<Vec<Contact>> {
        match self.store.get(&self.key)? {
            // An empty value is treated the same as an absent one
            Some(raw) if raw.is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::CorruptData {
                key: self.key.clone(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, contacts: &[Contact]) -> StoreResult<()> {
        let raw = serde_json::to_string(contacts)?;
        self.store.set(&self.key, &raw)
    }
}
