//! Domain models for contacts and tags

pub mod contact;
pub mod tag;

// Re-export important models
pub use contact::{
    Contact, ContactBuilder, Education, Employment, EmploymentRecord, LocationInfo, Social,
    SourceNetwork,
};
pub use tag::{Tag, TagCategory};
