//! Trait definitions for contact persistence

use async_trait::async_trait;
use std::fmt::Debug;

use crate::models::{Contact, SourceNetwork};
use crate::store::errors::StorageError;

/// Filter criteria for contact queries; empty filter matches everything
#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    /// Restrict to a single source network
    pub source: Option<SourceNetwork>,

    /// Substring of the contact name, case-insensitive
    pub name_contains: Option<String>,

    /// Substring of the effective company, case-insensitive
    pub company_contains: Option<String>,

    /// Substring of the effective location, case-insensitive
    pub location_contains: Option<String>,

    /// Exact tag value, case-insensitive
    pub tag_value: Option<String>,
}

impl ContactFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: SourceNetwork) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name_contains = Some(name.into());
        self
    }

    pub fn with_company<S: Into<String>>(mut self, company: S) -> Self {
        self.company_contains = Some(company.into());
        self
    }

    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location_contains = Some(location.into());
        self
    }

    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag_value = Some(tag.into());
        self
    }

    /// Whether a contact passes every populated criterion
    pub fn matches(&self, contact: &Contact) -> bool {
        if let Some(source) = self.source
            && contact.source != source
        {
            return false;
        }

        if let Some(needle) = &self.name_contains
            && !contact.name.to_lowercase().contains(&needle.to_lowercase())
        {
            return false;
        }

        if let Some(needle) = &self.company_contains {
            let matched = contact
                .effective_company()
                .is_some_and(|company| company.to_lowercase().contains(&needle.to_lowercase()));
            if !matched {
                return false;
            }
        }

        if let Some(needle) = &self.location_contains {
            let matched = contact
                .effective_location()
                .is_some_and(|location| location.to_lowercase().contains(&needle.to_lowercase()));
            if !matched {
                return false;
            }
        }

        if let Some(needle) = &self.tag_value {
            let matched = contact
                .tags
                .iter()
                .any(|tag| tag.value.eq_ignore_ascii_case(needle));
            if !matched {
                return false;
            }
        }

        true
    }
}

/// Persistence boundary for contact records
///
/// Implementations must treat the contact ID as the storage key: saving a
/// contact with an existing ID replaces the stored record.
#[async_trait]
pub trait ContactStore: Send + Sync + 'static + Debug {
    /// Insert or replace a contact, keyed by its ID
    async fn save(&self, contact: Contact) -> std::result::Result<Contact, StorageError>;

    /// Save several contacts in one call
    async fn save_batch(
        &self,
        contacts: Vec<Contact>,
    ) -> std::result::Result<Vec<Contact>, StorageError>;

    /// Get a contact by its ID
    async fn get(&self, id: &str) -> std::result::Result<Option<Contact>, StorageError>;

    /// List contacts matching a filter
    async fn find(&self, filter: ContactFilter)
        -> std::result::Result<Vec<Contact>, StorageError>;

    /// List every stored contact in a stable order
    async fn all(&self) -> std::result::Result<Vec<Contact>, StorageError>;

    /// Delete a contact by its ID, returning whether it existed
    async fn delete(&self, id: &str) -> std::result::Result<bool, StorageError>;

    /// Number of stored contacts
    async fn count(&self) -> std::result::Result<usize, StorageError>;

    /// Remove all stored contacts
    async fn clear(&self) -> std::result::Result<(), StorageError>;
}
