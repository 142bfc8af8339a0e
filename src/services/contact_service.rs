//! Contact service layer.
//!
//! Serializes access to the single contact store of a session and turns its
//! state into snapshots the tool handlers can return.

use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactField};
use crate::store::{ContactStore, Draft, FieldErrors, FormState};
use crate::view::SortState;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One displayed row of the contact table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRow {
    /// Row number, the index accepted by edit and delete
    pub index: usize,
    pub contact: Contact,
}

/// One column header of the contact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub column: ContactField,
    /// Sort arrow, only on the active column
    pub indicator: Option<&'static str>,
}

/// The contact table as currently displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub rows: Vec<ViewRow>,
    pub total: usize,
    pub search_term: String,
    pub sort: SortState,
    /// Headers in column order
    pub headers: Vec<ColumnHeader>,
    pub form: FormState,
}

/// The contact form as currently displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftSnapshot {
    pub draft: Draft,
    pub errors: FieldErrors,
    pub form: FormState,
    pub submit_label: &'static str,
}

/// Partial edit of the draft form; absent fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct DraftUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Current table view.
    async fn list_contacts(&self) -> ContactView;

    /// Change the search term and return the filtered view.
    async fn set_search_term(&self, term: String) -> ContactView;

    /// Click a column header and return the re-sorted view.
    async fn sort_by(&self, column: ContactField) -> ContactView;

    /// Apply field edits to the draft, validating phone and email inline.
    async fn update_draft(&self, update: DraftUpdate) -> DraftSnapshot;

    /// Submit the draft as a new or edited contact.
    async fn submit(&self) -> StoreResult<ContactView>;

    /// Fill the draft with a new contact and submit it in one step.
    ///
    /// Refused while an edit is in progress, so this can only append.
    async fn add_contact(
        &self,
        name: String,
        phone: String,
        email: String,
    ) -> StoreResult<ContactView>;

    /// Load the contact on row `index` into the draft for editing.
    async fn begin_edit(&self, index: usize) -> StoreResult<DraftSnapshot>;

    /// Delete the contact on row `index`.
    async fn delete_contact(&self, index: usize) -> StoreResult<(Contact, ContactView)>;

    /// Current draft form.
    async fn draft(&self) -> DraftSnapshot;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    store: Arc<Mutex<ContactStore>>,
}

impl ContactServiceImpl {
    /// Create a new contact service owning `store`.
    pub fn new(store: ContactStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn view_of(store: &ContactStore) -> ContactView {
        let sort = store.sort_state();
        let rows = store
            .view()
            .into_iter()
            .enumerate()
            .map(|(index, contact)| ViewRow { index, contact })
            .collect();

        ContactView {
            rows,
            total: store.contacts().len(),
            search_term: store.search_term().to_string(),
            sort,
            headers: ContactField::ALL
                .iter()
                .map(|&column| ColumnHeader {
                    column,
                    indicator: sort.indicator_for(column),
                })
                .collect(),
            form: store.form_state(),
        }
    }

    fn draft_of(store: &ContactStore) -> DraftSnapshot {
        let form = store.form_state();
        DraftSnapshot {
            draft: store.draft().clone(),
            errors: store.field_errors().clone(),
            form,
            submit_label: form.submit_label(),
        }
    }

    fn apply_update(store: &mut ContactStore, update: DraftUpdate) {
        if let Some(name) = update.name {
            store.set_name(name);
        }
        if let Some(phone) = update.phone {
            store.set_phone(phone);
        }
        if let Some(email) = update.email {
            store.set_email(email);
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ContactView {
        let store = self.store.lock().await;
        Self::view_of(&store)
    }

    async fn set_search_term(&self, term: String) -> ContactView {
        let mut store = self.store.lock().await;
        store.set_search_term(term);
        Self::view_of(&store)
    }

    async fn sort_by(&self, column: ContactField) -> ContactView {
        let mut store = self.store.lock().await;
        store.handle_sort(column);
        Self::view_of(&store)
    }

    async fn update_draft(&self, update: DraftUpdate) -> DraftSnapshot {
        let mut store = self.store.lock().await;
        Self::apply_update(&mut store, update);
        Self::draft_of(&store)
    }

    async fn submit(&self) -> StoreResult<ContactView> {
        let mut store = self.store.lock().await;
        store.submit()?;
        Ok(Self::view_of(&store))
    }

    async fn add_contact(
        &self,
        name: String,
        phone: String,
        email: String,
    ) -> StoreResult<ContactView> {
        let mut store = self.store.lock().await;
        if store.form_state().is_editing() {
            return Err(StoreError::EditInProgress);
        }

        Self::apply_update(
            &mut store,
            DraftUpdate {
                name: Some(name),
                phone: Some(phone),
                email: Some(email),
            },
        );
        store.submit()?;
        Ok(Self::view_of(&store))
    }

    async fn begin_edit(&self, index: usize) -> StoreResult<DraftSnapshot> {
        let mut store = self.store.lock().await;
        store.begin_edit(index)?;
        Ok(Self::draft_of(&store))
    }

    async fn delete_contact(&self, index: usize) -> StoreResult<(Contact, ContactView)> {
        let mut store = self.store.lock().await;
        let removed = store.delete(index)?;
        Ok((removed, Self::view_of(&store)))
    }

    async fn draft(&self) -> DraftSnapshot {
        let store = self.store.lock().await;
        Self::draft_of(&store)
    }
}
