//! Display view: search filtering and column sorting.

pub mod derive;
pub mod sort;

pub use derive::{derive_positions, derive_view};
pub use sort::{SortDirection, SortKey, SortState};
