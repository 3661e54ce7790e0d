//! Tag model for derived contact metadata

use serde::{Deserialize, Serialize};

use super::contact::SourceNetwork;

/// Categories a tag can belong to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TagCategory {
    /// Raw company name
    Company,
    /// Industry derived from the company (Technology, Finance, Consulting)
    Industry,
    /// Raw position or derived role category (Engineering, Sales, ...)
    Role,
    /// Raw location or canonical city name
    Location,
    /// Technology or domain skill
    Skill,
    /// Hobby or activity interest
    Interest,
    /// Custom tag category
    Custom(String),
}

impl std::fmt::Display for TagCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Company => write!(f, "company"),
            Self::Industry => write!(f, "industry"),
            Self::Role => write!(f, "role"),
            Self::Location => write!(f, "location"),
            Self::Skill => write!(f, "skill"),
            Self::Interest => write!(f, "interest"),
            Self::Custom(s) => write!(f, "custom:{}", s),
        }
    }
}

impl TagCategory {
    /// Convert a string to a TagCategory
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "company" => Self::Company,
            "industry" => Self::Industry,
            "role" => Self::Role,
            "location" => Self::Location,
            "skill" => Self::Skill,
            "interest" => Self::Interest,
            _ => {
                if let Some(stripped) = s.strip_prefix("custom:") {
                    Self::Custom(stripped.to_string())
                } else {
                    Self::Custom(s.to_string())
                }
            }
        }
    }

    /// Whether this category describes professional data (company or industry)
    pub fn is_professional(&self) -> bool {
        matches!(self, Self::Company | Self::Industry)
    }
}

/// A derived tag on a contact
///
/// Tags are derived metadata, never the primary key for identity. The same
/// semantic fact may be tagged more than once from different sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Tag text shown to users and matched by search
    pub value: String,

    /// What the tag describes
    pub category: TagCategory,

    /// How reliable the derivation is, 0.0 to 1.0
    pub confidence: f64,

    /// Which network the underlying data came from
    pub source: SourceNetwork,
}

impl Tag {
    /// Create a new tag
    pub fn new<S: Into<String>>(
        value: S,
        category: TagCategory,
        confidence: f64,
        source: SourceNetwork,
    ) -> Self {
        Self {
            value: value.into(),
            category,
            confidence: confidence.clamp(0.0, 1.0),
            source,
        }
    }

    /// Case-insensitive value equality, used for deduplication
    pub fn same_value(&self, other: &Tag) -> bool {
        self.value.eq_ignore_ascii_case(&other.value)
    }
}
