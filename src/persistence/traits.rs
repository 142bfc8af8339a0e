use crate::error::StoreResult;
use crate::models::Contact;

/// Raw key-value storage holding string values.
///
/// This is the primitive the contact list is written to: one key, one
/// serialized value, synchronous reads and writes.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Persistence collaborator for the contact store.
///
/// Abstracts how the full contact sequence is loaded and saved, enabling
/// different implementations (key-value backed, mock, in-memory).
pub trait ContactPersistence: Send {
    /// Load the stored sequence, or an empty one if nothing was saved yet.
    fn load(&self) -> StoreResult<Vec<Contact>>;

    /// Overwrite the stored sequence with `contacts`.
    fn save(&mut self, contacts: &[Contact]) -> StoreResult<()>;
}
