//! Conflict detection between source profiles
//!
//! When a contact exists on both Facebook and LinkedIn the two networks
//! often disagree (employer, title, location, schools, even the name). This
//! module turns those disagreements into prioritized questions a user can
//! answer to clean up the record.

pub mod detector;
pub mod types;

pub use detector::{detect_all_conflicts, prioritize_conflicts};
pub use types::{
    ConflictCategory, ConflictKind, ConflictOption, ConflictPriority, ConflictQuestion,
    ConflictSource, SourceProfile,
};
