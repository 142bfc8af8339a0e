//! Contact Book - a local contact list manager exposed over the Model Context Protocol.
//!
//! Contacts (name, phone, email) are added, edited, deleted, searched and
//! sorted through a single [`ContactStore`], which writes the full list
//! through to a key-value store after every change.
//!
//! # Architecture
//!
//! - **domain**: Phone and email value objects, field validation errors
//! - **models**: The contact record
//! - **view**: Search filtering and column sorting
//! - **store**: The contact store and its draft form state machine
//! - **persistence**: Key-value storage (memory or JSON file) for the list
//! - **services**: Session-level access to the store
//! - **server**: MCP tools bound to store operations
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod persistence;
pub mod server;
pub mod services;
pub mod store;
pub mod view;

pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, StoreError, StoreResult};
pub use models::{Contact, ContactField};
pub use persistence::{
    ContactPersistence, FileKeyValueStore, KeyValuePersistence, KeyValueStore,
    MemoryKeyValueStore,
};
pub use server::ContactBookServer;
pub use services::{ContactService, ContactServiceImpl, ContactView, DraftSnapshot};
pub use store::{ContactStore, Draft, FieldErrors, FormState, IndexMode};
pub use view::{derive_view, SortDirection, SortKey, SortState};
