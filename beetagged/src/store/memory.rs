//! In-memory contact store
//!
//! HashMap behind a tokio RwLock. The default backend for tests, demos,
//! and embedded use; data lives only as long as the process.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::Contact;
use crate::store::errors::StorageError;
use crate::store::traits::{ContactFilter, ContactStore};

/// Contact store backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self {
            contacts: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn save(&self, contact: Contact) -> Result<Contact, StorageError> {
        if !contact.has_name() {
            return Err(StorageError::Validation(
                "contact name cannot be empty".to_string(),
            ));
        }

        let mut contacts = self.contacts.write().await;
        contacts.insert(contact.id.clone(), contact.clone());
        Ok(contact)
    }

    async fn save_batch(&self, batch: Vec<Contact>) -> Result<Vec<Contact>, StorageError> {
        for contact in &batch {
            if !contact.has_name() {
                return Err(StorageError::Validation(format!(
                    "contact {} has no name",
                    contact.id
                )));
            }
        }

        let mut contacts = self.contacts.write().await;
        for contact in &batch {
            contacts.insert(contact.id.clone(), contact.clone());
        }
        debug!(saved = batch.len(), total = contacts.len(), "saved contact batch");
        Ok(batch)
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, StorageError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(id).cloned())
    }

    async fn find(&self, filter: ContactFilter) -> Result<Vec<Contact>, StorageError> {
        let mut matched = self.all().await?;
        matched.retain(|contact| filter.matches(contact));
        Ok(matched)
    }

    async fn all(&self) -> Result<Vec<Contact>, StorageError> {
        let contacts = self.contacts.read().await;
        let mut all: Vec<Contact> = contacts.values().cloned().collect();
        // Insertion-time order keeps downstream greedy grouping stable
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut contacts = self.contacts.write().await;
        Ok(contacts.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.len())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut contacts = self.contacts.write().await;
        let dropped = contacts.len();
        contacts.clear();
        debug!(dropped, "cleared contact store");
        Ok(())
    }
}
