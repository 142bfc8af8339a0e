//! Contact store and draft form state.

mod contact_store;
mod draft;

pub use contact_store::{ContactStore, IndexMode};
pub use draft::{Draft, FieldErrors, FormState};
