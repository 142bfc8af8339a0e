//! Application service layer.
//!
//! Services sit between the MCP handlers and the contact store. They own
//! the store for the session and provide a clean boundary between protocol
//! concerns and contact logic.

mod contact_service;

pub use contact_service::{
    ColumnHeader, ContactService, ContactServiceImpl, ContactView, DraftSnapshot, DraftUpdate,
    ViewRow,
};
