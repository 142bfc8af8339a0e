//! The contact store: in-memory list, draft form, and view state.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use crate::domain::{INVALID_EMAIL_MESSAGE, INVALID_PHONE_MESSAGE};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::persistence::ContactPersistence;
use crate::store::draft::{Draft, FieldErrors, FormState};
use crate::view::{derive_positions, derive_view, SortKey, SortState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// How a row index passed to `begin_edit` or `delete` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexMode {
    /// The index is a row of the current filtered and sorted view, and is
    /// mapped back to the stored contact shown on that row.
    #[default]
    View,

    /// The index is applied to the stored sequence directly, whatever the
    /// view shows. With a search term or a non-trivial sort active this
    /// targets a different contact than the row that was picked; it exists
    /// only for compatibility with lists managed that way.
    Storage,
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View => f.write_str("view"),
            Self::Storage => f.write_str("storage"),
        }
    }
}

impl FromStr for IndexMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "view" => Ok(Self::View),
            "storage" => Ok(Self::Storage),
            other => Err(format!(
                "Unknown index mode '{}', expected view or storage",
                other
            )),
        }
    }
}

/// Contact list with write-through persistence.
///
/// Holds the stored sequence, the draft form and its inline errors, the
/// editing target, and the search/sort state the view is derived from.
/// The in-memory sequence is only replaced after the persistence
/// collaborator accepted the new one, so it always equals what is stored.
pub struct ContactStore {
    contacts: Vec<Contact>,
    persistence: Box<dyn ContactPersistence>,
    index_mode: IndexMode,
    draft: Draft,
    /// Storage position of the contact being edited
    editing_target: Option<usize>,
    search_term: String,
    sort: SortState,
    errors: FieldErrors,
}

impl fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactStore")
            .field("contacts", &self.contacts.len())
            .field("index_mode", &self.index_mode)
            .field("editing_target", &self.editing_target)
            .field("search_term", &self.search_term)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}

impl ContactStore {
    /// Open a store, loading the persisted sequence.
    ///
    /// # Errors
    ///
    /// Fails if the persisted value cannot be read or parsed; a corrupt
    /// list is never replaced by an empty one.
    pub fn open(persistence: Box<dyn ContactPersistence>) -> StoreResult<Self> {
        Self::open_with_mode(persistence, IndexMode::default())
    }

    /// Open a store with an explicit row index interpretation.
    pub fn open_with_mode(
        persistence: Box<dyn ContactPersistence>,
        index_mode: IndexMode,
    ) -> StoreResult<Self> {
        let contacts = persistence.load()?;
        debug!(
            "Loaded {} contact(s), index mode: {}",
            contacts.len(),
            index_mode
        );

        Ok(Self {
            contacts,
            persistence,
            index_mode,
            draft: Draft::default(),
            editing_target: None,
            search_term: String::new(),
            sort: SortState::default(),
            errors: FieldErrors::default(),
        })
    }

    /// The stored sequence, in stored order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Storage position of the contact being edited, if any.
    pub fn editing_target(&self) -> Option<usize> {
        self.editing_target
    }

    pub fn form_state(&self) -> FormState {
        match self.editing_target {
            Some(target) => FormState::ComposingEdit { target },
            None if self.draft.is_empty() => FormState::Idle,
            None => FormState::ComposingNew,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn index_mode(&self) -> IndexMode {
        self.index_mode
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phone_error(&self) -> Option<&str> {
        self.errors.phone.as_deref()
    }

    pub fn email_error(&self) -> Option<&str> {
        self.errors.email.as_deref()
    }

    /// Validate a phone number and update its inline error.
    pub fn validate_phone(&mut self, text: &str) -> bool {
        let valid = PhoneNumber::is_valid(text);
        self.errors.phone = (!valid).then(|| INVALID_PHONE_MESSAGE.to_string());
        valid
    }

    /// Validate an email address and update its inline error.
    pub fn validate_email(&mut self, text: &str) -> bool {
        let valid = EmailAddress::is_valid(text);
        self.errors.email = (!valid).then(|| INVALID_EMAIL_MESSAGE.to_string());
        valid
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Replace the draft phone and validate it immediately.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> bool {
        self.draft.phone = phone.into();
        let phone = self.draft.phone.clone();
        self.validate_phone(&phone)
    }

    /// Replace the draft email and validate it immediately.
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        self.draft.email = email.into();
        let email = self.draft.email.clone();
        self.validate_email(&email)
    }

    /// Submit the draft: append a new contact, or overwrite the one being
    /// edited.
    ///
    /// On success the sequence is persisted, the draft is cleared and the
    /// form returns to idle. Returns the new stored sequence.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingField` if any field is empty (no
    ///   validator runs, nothing changes).
    /// - `ValidationError::InvalidPhone` / `InvalidEmail` if a field fails
    ///   its check; the matching inline error is set. The email is not
    ///   checked when the phone already failed.
    /// - Any persistence error; the in-memory list and the draft are then
    ///   left untouched.
    pub fn submit(&mut self) -> StoreResult<&[Contact]> {
        if self.draft.has_missing_field() {
            warn!("Submit rejected: missing field");
            return Err(ValidationError::MissingField.into());
        }

        let phone = match PhoneNumber::new(self.draft.phone.clone()) {
            Ok(phone) => phone,
            Err(err) => {
                self.errors.phone = Some(INVALID_PHONE_MESSAGE.to_string());
                warn!("Submit rejected: invalid phone");
                return Err(err.into());
            }
        };
        self.errors.phone = None;

        let email = match EmailAddress::new(self.draft.email.clone()) {
            Ok(email) => email,
            Err(err) => {
                self.errors.email = Some(INVALID_EMAIL_MESSAGE.to_string());
                warn!("Submit rejected: invalid email");
                return Err(err.into());
            }
        };
        self.errors.email = None;

        let contact = Contact::new(
            self.draft.name.clone(),
            phone.into_inner(),
            email.into_inner(),
        );
        let mut next = self.contacts.clone();
        match self.editing_target {
            Some(target) => {
                let len = next.len();
                let slot = next.get_mut(target).ok_or(StoreError::NoSuchContact {
                    index: target,
                    len,
                })?;
                *slot = contact;
                info!("Updated contact at position {}", target);
            }
            None => {
                next.push(contact);
                info!("Added contact at position {}", next.len() - 1);
            }
        }

        self.commit(next)?;
        self.draft.clear();
        self.editing_target = None;

        Ok(&self.contacts)
    }

    /// Load the contact shown at `index` into the draft and mark it as the
    /// editing target.
    ///
    /// Replaces any draft in progress, including another edit. Inline
    /// errors are left as they are.
    pub fn begin_edit(&mut self, index: usize) -> StoreResult<&Draft> {
        let position = self.resolve(index)?;
        self.draft.load(&self.contacts[position]);
        self.editing_target = Some(position);
        debug!("Editing contact at position {} (row {})", position, index);
        Ok(&self.draft)
    }

    /// Remove the contact shown at `index` and persist immediately.
    ///
    /// If that contact was being edited, the edit target is dropped and the
    /// draft becomes a new contact. A target stored after it is shifted so
    /// it still names the same contact.
    pub fn delete(&mut self, index: usize) -> StoreResult<Contact> {
        let position = self.resolve(index)?;

        let mut next = self.contacts.clone();
        let removed = next.remove(position);
        self.commit(next)?;

        self.editing_target = match self.editing_target {
            Some(target) if target == position => None,
            Some(target) if target > position => Some(target - 1),
            other => other,
        };

        info!("Deleted contact at position {} (row {})", position, index);
        Ok(removed)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Sort by `key`, flipping the direction if it is already active.
    pub fn handle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        debug!("Sorting by {} {}", self.sort.key, self.sort.direction);
    }

    /// The filtered and sorted contacts, in display order.
    pub fn view(&self) -> Vec<Contact> {
        derive_view(
            &self.contacts,
            &self.search_term,
            self.sort.key,
            self.sort.direction,
        )
    }

    /// Storage positions of the displayed rows, in display order.
    pub fn view_positions(&self) -> Vec<usize> {
        derive_positions(
            &self.contacts,
            &self.search_term,
            self.sort.key,
            self.sort.direction,
        )
    }

    fn resolve(&self, index: usize) -> StoreResult<usize> {
        match self.index_mode {
            IndexMode::View => {
                let positions = self.view_positions();
                positions
                    .get(index)
                    .copied()
                    .ok_or(StoreError::NoSuchContact {
                        index,
                        len: positions.len(),
                    })
            }
            IndexMode::Storage if index < self.contacts.len() => Ok(index),
            IndexMode::Storage => Err(StoreError::NoSuchContact {
                index,
                len: self.contacts.len(),
            }),
        }
    }

    fn commit(&mut self, next: Vec<Contact>) -> StoreResult<()> {
        self.persistence.save(&next)?;
        self.contacts = next;
        Ok(())
    }
}
