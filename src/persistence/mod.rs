//! Persistence layer for the contact list.
//!
//! The store talks to a [`ContactPersistence`] collaborator. The provided
//! implementation serializes the list under one key of a [`KeyValueStore`],
//! which is either in memory or a JSON file on disk.

mod file_store;
mod key_value_persistence;
mod memory_store;
mod traits;

pub use file_store::FileKeyValueStore;
pub use key_value_persistence::{KeyValuePersistence, DEFAULT_STORAGE_KEY};
pub use memory_store::MemoryKeyValueStore;
pub use traits::{ContactPersistence, KeyValueStore};
