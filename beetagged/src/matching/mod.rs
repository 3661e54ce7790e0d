//! Contact matching: similarity primitives, duplicate detection, and
//! cross-source profile linking

pub mod duplicates;
pub mod linker;
pub mod similarity;

pub use duplicates::{
    detect_duplicates, merge_group, resolve_duplicates, DuplicateDetector, DuplicateGroup,
    DuplicateResolution,
};
pub use linker::{link_profiles, LinkMatch, LinkMethod, ProfileLinker};
pub use similarity::{
    is_similar_company_name, is_similar_job_title, is_similar_location, is_similar_name,
    is_similar_school_name, name_word_overlap, normalize_name, normalize_phone, similarity,
};
