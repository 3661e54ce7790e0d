//! Conflict question types

use serde::{Deserialize, Serialize};

use crate::models::EmploymentRecord;

/// Which field two source profiles disagree about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConflictKind {
    Employer,
    JobTitle,
    CurrentLocation,
    HometownVsCurrent,
    Education,
    FullName,
}

impl ConflictKind {
    /// Stable field identifier for serialized questions
    pub fn field(&self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::JobTitle => "job_title",
            Self::CurrentLocation => "current_location",
            Self::HometownVsCurrent => "hometown_location",
            Self::Education => "education",
            Self::FullName => "name",
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field())
    }
}

/// Which network an answer option came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConflictSource {
    Facebook,
    LinkedIn,
    /// Both profiles combined into one answer
    Both,
}

impl std::fmt::Display for ConflictSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Facebook => write!(f, "facebook"),
            Self::LinkedIn => write!(f, "linkedin"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// How urgently a conflict should be resolved
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConflictPriority {
    High,
    Medium,
    Low,
}

impl ConflictPriority {
    /// Numeric rank used for ordering; higher sorts first
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl std::fmt::Display for ConflictPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Broad grouping for presentation and filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConflictCategory {
    Professional,
    Location,
    Education,
    Personal,
}

impl std::fmt::Display for ConflictCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Professional => write!(f, "professional"),
            Self::Location => write!(f, "location"),
            Self::Education => write!(f, "education"),
            Self::Personal => write!(f, "personal"),
        }
    }
}

/// One answer a user can pick for a conflict question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictOption {
    /// The candidate value
    pub value: String,
    /// Where the value came from
    pub source: ConflictSource,
    /// Prior confidence that this source is right for this field
    pub confidence: f64,
    /// Short provenance note shown alongside the value
    pub context: String,
}

impl ConflictOption {
    pub fn new<V, C>(value: V, source: ConflictSource, confidence: f64, context: C) -> Self
    where
        V: Into<String>,
        C: Into<String>,
    {
        Self {
            value: value.into(),
            source,
            confidence,
            context: context.into(),
        }
    }
}

/// A disagreement between two source profiles, phrased as a question the
/// user can answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictQuestion {
    /// What kind of disagreement this is
    pub kind: ConflictKind,
    /// Stable field identifier, mirrors `kind`
    pub field: String,
    /// Human-readable question text
    pub question: String,
    /// Candidate answers, one per source (plus combined where applicable)
    pub options: Vec<ConflictOption>,
    /// Resolution urgency
    pub priority: ConflictPriority,
    /// Presentation grouping
    pub category: ConflictCategory,
    /// Points granted for answering, used to order the review queue
    pub reward: u32,
}

/// Per-source snapshot of one person, the detector's input.
///
/// Typically assembled from a raw network export before enrichment; only
/// the fields a given network actually provides are populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceProfile {
    /// Full name as the network reports it
    pub name: Option<String>,
    /// Employer when the network provides it directly
    pub employer: Option<String>,
    /// Job title when the network provides it directly
    pub job_title: Option<String>,
    /// Current location string
    pub location: Option<String>,
    /// Hometown, mostly a Facebook field
    pub hometown: Option<String>,
    /// Work history, most recent first by convention
    pub work_history: Vec<EmploymentRecord>,
    /// Schools attended
    pub schools: Vec<String>,
}

impl SourceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_employer<S: Into<String>>(mut self, employer: S) -> Self {
        self.employer = Some(employer.into());
        self
    }

    pub fn with_job_title<S: Into<String>>(mut self, title: S) -> Self {
        self.job_title = Some(title.into());
        self
    }

    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_hometown<S: Into<String>>(mut self, hometown: S) -> Self {
        self.hometown = Some(hometown.into());
        self
    }

    pub fn with_work_record(mut self, record: EmploymentRecord) -> Self {
        self.work_history.push(record);
        self
    }

    pub fn with_school<S: Into<String>>(mut self, school: S) -> Self {
        self.schools.push(school.into());
        self
    }

    /// The record treated as current: first with no end year, else the first
    pub fn current_employment(&self) -> Option<&EmploymentRecord> {
        self.work_history
            .iter()
            .find(|record| record.end_year.is_none())
            .or_else(|| self.work_history.first())
    }

    /// Employer of the current engagement, falling back to the direct field
    pub fn current_employer(&self) -> Option<&str> {
        self.current_employment()
            .map(|record| record.employer.as_str())
            .or(self.employer.as_deref())
            .filter(|v| !v.trim().is_empty())
    }

    /// Title of the current engagement, falling back to the direct field
    pub fn current_title(&self) -> Option<&str> {
        self.current_employment()
            .and_then(|record| record.title.as_deref())
            .or(self.job_title.as_deref())
            .filter(|v| !v.trim().is_empty())
    }

    /// Current location, empty strings treated as absent
    pub fn current_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|v| !v.trim().is_empty())
    }
}
