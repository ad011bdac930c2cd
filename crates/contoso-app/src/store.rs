//! Contact storage.

use std::collections::BTreeMap;
use std::path::Path;

use contoso_core::contact::{Contact, ContactId};
use contoso_core::error::{CoreError, CoreResult};
use salvo::async_trait;
use tokio::sync::RwLock;

use crate::error::AppResult;

/// Storage backend for contacts.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Returns every contact ordered by last name, then first name, then id.
    async fn list(&self) -> Vec<Contact>;

    async fn get(&self, id: &ContactId) -> Option<Contact>;

    /// ## Summary
    /// Adds a contact.
    ///
    /// ## Errors
    /// Returns `CoreError::Conflict` if a contact with the same id exists.
    async fn insert(&self, contact: Contact) -> CoreResult<Contact>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: RwLock<BTreeMap<ContactId, Contact>>,
}

impl InMemoryContactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given contacts. Later duplicates replace earlier ones.
    #[must_use]
    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let map = contacts
            .into_iter()
            .map(|contact| (contact.id.clone(), contact))
            .collect();
        Self {
            contacts: RwLock::new(map),
        }
    }

    /// ## Summary
    /// Loads a JSON array of contacts from disk.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or is not a JSON array of contacts.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let contacts: Vec<Contact> = serde_json::from_str(&text)?;

        tracing::info!(path = %path.display(), count = contacts.len(), "Seeded contact store");

        Ok(Self::with_contacts(contacts))
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn list(&self) -> Vec<Contact> {
        let mut contacts: Vec<Contact> = self.contacts.read().await.values().cloned().collect();
        contacts.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
                .then_with(|| a.id.cmp(&b.id))
        });
        contacts
    }

    async fn get(&self, id: &ContactId) -> Option<Contact> {
        self.contacts.read().await.get(id).cloned()
    }

    async fn insert(&self, contact: Contact) -> CoreResult<Contact> {
        let mut contacts = self.contacts.write().await;

        if contacts.contains_key(&contact.id) {
            return Err(CoreError::Conflict(format!(
                "contact {} already exists",
                contact.id
            )));
        }

        contacts.insert(contact.id.clone(), contact.clone());
        Ok(contact)
    }
}
