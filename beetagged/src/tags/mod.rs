//! Tag generation from raw contact fields
//!
//! Pure keyword-table lookups: raw company/position/location values become
//! tags themselves, and fixed tables derive industry, role, and canonical
//! city tags from them. No I/O, deterministic, absent fields skipped.

pub mod generator;
pub mod tables;

pub use generator::{apply_auto_tags, extract_skills, generate_tags};
