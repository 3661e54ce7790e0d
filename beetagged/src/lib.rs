//! # BeeTagged
//!
//! Contact search and relevance-ranking engine. Ingests contacts from CSV
//! exports and social-platform profiles, enriches them with auto-generated
//! tags, and answers free-text or structured queries with ranked, explained
//! result lists. Includes duplicate detection with merge resolution, conflict
//! detection between two source profiles of the same person, and cross-source
//! profile linking.
//!
//! ## Quick Start
//!
//! ```rust
//! use beetagged::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Initialize with defaults - in-memory store, default ranking weights
//!     let bee = BeeTagged::new(BeeConfig::default())?;
//!
//!     // Import contacts - tags are generated and duplicates grouped on the way in
//!     let contacts = vec![
//!         ContactBuilder::new("Ada Stern")
//!             .company("Stripe")
//!             .position("Software Engineer")
//!             .location("Seattle, WA")
//!             .build(),
//!     ];
//!     bee.import_contacts(contacts, DuplicateResolution::Consolidate).await?;
//!
//!     // Free-text search: intent is parsed, contacts are ranked with reasons
//!     let response = bee.search("who works at Stripe").await?;
//!     for result in &response.results {
//!         println!("{} ({}): {:?}", result.name(), result.relevance_score, result.match_reasons);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Pure core**: tag generation, similarity primitives, duplicate grouping,
//!   conflict detection, intent parsing, and relevance ranking are all pure
//!   functions over in-memory contact lists - no I/O, no shared state.
//! - **Store boundary**: persistence lives behind the [`store::ContactStore`]
//!   trait; an in-memory implementation ships with the crate.
//! - **Facade**: [`core::BeeTagged`] wires config, store, and components into
//!   ingestion and query pipelines.

pub mod config;
pub mod conflict;
pub mod core;
pub mod logging;
pub mod matching;
pub mod models;
pub mod search;
pub mod store;
pub mod tags;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    // Re-export the facade (recommended entry point)
    pub use crate::core::{BeeTagged, ImportReport, SearchResponse};

    // Re-export config types
    pub use crate::config::{BeeConfig, ConfigBuilder, ConfigLoader, LogFormat, LogLevel};

    // Re-export model types
    pub use crate::models::{
        Contact, ContactBuilder, SourceNetwork, Tag, TagCategory,
    };

    // Re-export matching types
    pub use crate::matching::{
        DuplicateGroup, DuplicateResolution, LinkMatch, LinkMethod,
    };

    // Re-export conflict types
    pub use crate::conflict::{
        ConflictCategory, ConflictPriority, ConflictQuestion, SourceProfile,
    };

    // Re-export search types
    pub use crate::search::{
        FilterQuery, IntentKind, IntentParser, MatchResult, RelevanceRanker, SearchIntent,
    };

    // Re-export storage types for advanced usage
    pub use crate::store::{ContactFilter, ContactStore, InMemoryContactStore, StorageError};

    // Re-export essential result type
    pub use crate::{BeeError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for BeeTagged operations with helpful recovery suggestions
#[derive(Debug, thiserror::Error)]
pub enum BeeError {
    /// Error during storage operations
    #[error("Storage error: {0}")]
    Storage(#[from] crate::store::StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// A contact record failed validation at an ingest boundary
    #[error("Invalid contact: {0}. Records without a name cannot be indexed; fix the source data or drop the record")]
    InvalidContact(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for BeeError {
    fn from(err: crate::config::ConfigError) -> Self {
        BeeError::Configuration(err.to_string())
    }
}

/// Result type for BeeTagged operations
pub type Result<T> = std::result::Result<T, BeeError>;

/// Initialize BeeTagged with default configuration
///
/// Sets up logging per the default config and returns a [`core::BeeTagged`]
/// engine backed by the in-memory contact store.
///
/// # Examples
///
/// ```rust
/// use beetagged::prelude::*;
///
/// async fn example() -> Result<()> {
///     let bee = beetagged::init_with_defaults()?;
///     let response = bee.search("engineers in Seattle").await?;
///     Ok(())
/// }
/// ```
pub fn init_with_defaults() -> Result<core::BeeTagged> {
    let config = config::ConfigBuilder::new().build()?;
    init(config)
}

/// Initialize BeeTagged with the provided configuration
///
/// # Arguments
/// * `config` - The configuration for the engine
///
/// # Examples
///
/// ```rust
/// use beetagged::prelude::*;
///
/// async fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_result_limit(20)
///         .with_log_level(LogLevel::Debug)
///         .build()?;
///     let bee = beetagged::init(config)?;
///     Ok(())
/// }
/// ```
pub fn init(config: config::BeeConfig) -> Result<core::BeeTagged> {
    // Ignore errors if tracing is already initialized
    let _ = logging::init(&config.logging);

    core::BeeTagged::new(config)
}
