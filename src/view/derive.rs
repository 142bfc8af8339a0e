//! Filtered and sorted view over the contact list.
//!
//! The view is a pure function of the contact sequence, the search term and
//! the sort state. It is recomputed in full whenever it is read; lists are
//! small enough that caching would only add invalidation bugs.

use super::sort::{SortDirection, SortKey};
use crate::models::Contact;

/// Name and email are compared case-insensitively (`folded` is the
/// lower-cased term), the phone verbatim.
fn matches_folded(contact: &Contact, term: &str, folded: &str) -> bool {
    contact.name.to_lowercase().contains(folded)
        || contact.phone.contains(term)
        || contact.email.to_lowercase().contains(folded)
}

/// Positions (in `contacts`) of the rows shown by the view, in display order.
///
/// Entry `i` of the result is the storage position of display row `i`.
/// Sorting compares field text by code point and is stable, so contacts
/// with equal keys keep their stored order in both directions.
pub fn derive_positions(
    contacts: &[Contact],
    search_term: &str,
    sort_key: SortKey,
    direction: SortDirection,
) -> Vec<usize> {
    let folded = search_term.to_lowercase();

    let mut positions: Vec<usize> = contacts
        .iter()
        .enumerate()
        .filter(|(_, contact)| matches_folded(contact, search_term, &folded))
        .map(|(position, _)| position)
        .collect();

    positions.sort_by(|&a, &b| {
        let left = contacts[a].field(sort_key);
        let right = contacts[b].field(sort_key);
        direction.apply(left.cmp(right))
    });

    positions
}

/// Contacts shown by the view, in display order.
pub fn derive_view(
    contacts: &[Contact],
    search_term: &str,
    sort_key: SortKey,
    direction: SortDirection,
) -> Vec<Contact> {
    derive_positions(contacts, search_term, sort_key, direction)
        .into_iter()
        .map(|position| contacts[position].clone())
        .collect()
}
