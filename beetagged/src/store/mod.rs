//! Contact persistence
//!
//! The [`ContactStore`] trait is the storage boundary for the crate; every
//! component above it works on plain contact lists. [`InMemoryContactStore`]
//! is the bundled implementation.

pub mod errors;
pub mod memory;
pub mod traits;

pub use errors::{StorageError, StorageResult};
pub use memory::InMemoryContactStore;
pub use traits::{ContactFilter, ContactStore};
