//! Contact model representing one person across data sources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tag::Tag;

/// Where a contact record (or a piece of its data) came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SourceNetwork {
    /// Facebook profile or friend list
    Facebook,
    /// LinkedIn profile or connection export
    LinkedIn,
    /// CSV import
    Csv,
    /// Manually entered
    Manual,
    /// Produced by consolidating duplicate records
    Merged,
}

impl Default for SourceNetwork {
    fn default() -> Self {
        Self::Manual
    }
}

impl std::fmt::Display for SourceNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Facebook => write!(f, "facebook"),
            Self::LinkedIn => write!(f, "linkedin"),
            Self::Csv => write!(f, "csv"),
            Self::Manual => write!(f, "manual"),
            Self::Merged => write!(f, "merged"),
        }
    }
}

impl SourceNetwork {
    /// Convert a string to a SourceNetwork, defaulting to Manual
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "facebook" | "fb" => Self::Facebook,
            "linkedin" | "li" => Self::LinkedIn,
            "csv" => Self::Csv,
            "merged" => Self::Merged,
            _ => Self::Manual,
        }
    }
}

/// One employment engagement, current or past
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmploymentRecord {
    /// Employer name
    pub employer: String,

    /// Job function category if known (e.g. "engineering")
    pub job_function: Option<String>,

    /// Job title as written on the profile
    pub title: Option<String>,

    /// Where the job was located
    pub location: Option<String>,

    /// Year the engagement started
    pub start_year: Option<i32>,

    /// Year the engagement ended; `None` means ongoing
    pub end_year: Option<i32>,
}

impl EmploymentRecord {
    /// Create a record for an ongoing engagement
    pub fn current<S: Into<String>>(employer: S) -> Self {
        Self {
            employer: employer.into(),
            ..Default::default()
        }
    }

    /// Whether the engagement is ongoing
    pub fn is_current(&self) -> bool {
        self.end_year.is_none()
    }
}

/// Employment section of a contact
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Employment {
    /// Current engagement if resolved at ingestion
    pub current: Option<EmploymentRecord>,

    /// Past engagements, most recent first
    pub history: Vec<EmploymentRecord>,
}

impl Employment {
    /// Resolve the current engagement: the explicit one, else the first
    /// history record without an end year, else the first history record.
    pub fn effective_current(&self) -> Option<&EmploymentRecord> {
        self.current
            .as_ref()
            .or_else(|| self.history.iter().find(|record| record.is_current()))
            .or_else(|| self.history.first())
    }
}

/// Location section of a contact
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationInfo {
    /// Where the person lives now
    pub current: Option<String>,

    /// Where the person grew up
    pub hometown: Option<String>,

    /// Cities associated with past or present jobs
    pub work_locations: Vec<String>,
}

/// Education section of a contact
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Education {
    /// Schools attended
    pub schools: Vec<String>,

    /// Degrees earned
    pub degrees: Vec<String>,

    /// Professional certifications
    pub certifications: Vec<String>,
}

/// Social section of a contact
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Social {
    /// Interest topics from social profiles
    pub interests: Vec<String>,

    /// Hobbies and activities
    pub hobbies: Vec<String>,

    /// Mutual friends on the social network, if known
    pub mutual_friends: Option<u32>,

    /// Connection count on the professional network, if known
    pub connections: Option<u32>,

    /// How many times the user has interacted with this contact
    pub interaction_count: u32,
}

/// A contact record
///
/// All nested data is resolved into explicit optional fields at ingestion;
/// search and matching never probe dynamic paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Unique identifier
    pub id: String,

    /// Display name; records without a name are rejected at ingest boundaries
    pub name: String,

    /// Email address
    pub email: Option<String>,

    /// Phone number, stored as provided (normalized only for matching)
    pub phone: Option<String>,

    /// Flat company field from imports; mirrors employment when resolved
    pub company: Option<String>,

    /// Flat position/title field from imports
    pub position: Option<String>,

    /// Flat location field from imports
    pub location: Option<String>,

    /// Structured employment data
    pub employment: Employment,

    /// Structured location data
    pub locations: LocationInfo,

    /// Structured education data
    pub education: Education,

    /// Structured social data
    pub social: Social,

    /// Skills, explicit or extracted
    pub skills: Vec<String>,

    /// Derived tags
    pub tags: Vec<Tag>,

    /// Primary source of this record
    pub source: SourceNetwork,

    /// Facebook profile id when linked
    pub facebook_id: Option<String>,

    /// LinkedIn profile id when linked
    pub linkedin_id: Option<String>,

    /// Confidence of the cross-source link that enriched this record
    pub match_confidence: Option<f64>,

    /// Last time the user interacted with this contact
    pub last_interaction: Option<DateTime<Utc>>,

    /// Last time the record was enriched from an external source
    pub last_enriched: Option<DateTime<Utc>>,

    /// Last time tags were auto-generated for this record
    pub last_auto_tagged: Option<DateTime<Utc>>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new contact with a generated id
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: None,
            phone: None,
            company: None,
            position: None,
            location: None,
            employment: Employment::default(),
            locations: LocationInfo::default(),
            education: Education::default(),
            social: Social::default(),
            skills: Vec::new(),
            tags: Vec::new(),
            source: SourceNetwork::default(),
            facebook_id: None,
            linkedin_id: None,
            match_confidence: None,
            last_interaction: None,
            last_enriched: None,
            last_auto_tagged: None,
            created_at: Utc::now(),
        }
    }

    /// Create a builder for more complex contact creation
    pub fn builder<S: Into<String>>(name: S) -> ContactBuilder {
        ContactBuilder::new(name)
    }

    /// Whether the record carries the minimum data to be indexed
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// The company to match against: the flat field, else current employment
    pub fn effective_company(&self) -> Option<&str> {
        self.company
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or_else(|| {
                self.employment
                    .effective_current()
                    .map(|record| record.employer.as_str())
            })
    }

    /// The location to match against: the structured current, else the flat field
    pub fn effective_location(&self) -> Option<&str> {
        self.locations
            .current
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .or(self.location.as_deref())
    }

    /// The title to match against: the flat field, else current employment title
    pub fn effective_title(&self) -> Option<&str> {
        self.position
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| {
                self.employment
                    .effective_current()
                    .and_then(|record| record.title.as_deref())
            })
    }

    /// Add a tag, skipping values already present (case-insensitive)
    pub fn add_tag(&mut self, tag: Tag) {
        if !self.tags.iter().any(|existing| existing.same_value(&tag)) {
            self.tags.push(tag);
        }
    }

    /// Add a skill if not already present (case-insensitive)
    pub fn add_skill<S: Into<String>>(&mut self, skill: S) {
        let skill = skill.into();
        if !self
            .skills
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&skill))
        {
            self.skills.push(skill);
        }
    }

    /// Record an interaction with this contact
    pub fn record_interaction(&mut self) {
        self.last_interaction = Some(Utc::now());
        self.social.interaction_count += 1;
    }
}

/// Builder for creating Contact instances
pub struct ContactBuilder {
    contact: Contact,
}

impl ContactBuilder {
    /// Create a new contact builder with an auto-generated id
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            contact: Contact::new(name),
        }
    }

    /// Set an explicit id (imports that carry stable ids)
    pub fn id<S: Into<String>>(mut self, id: S) -> Self {
        self.contact.id = id.into();
        self
    }

    /// Set the email address
    pub fn email<S: Into<String>>(mut self, email: S) -> Self {
        self.contact.email = Some(email.into());
        self
    }

    /// Set the phone number
    pub fn phone<S: Into<String>>(mut self, phone: S) -> Self {
        self.contact.phone = Some(phone.into());
        self
    }

    /// Set the flat company field
    pub fn company<S: Into<String>>(mut self, company: S) -> Self {
        self.contact.company = Some(company.into());
        self
    }

    /// Set the flat position field
    pub fn position<S: Into<String>>(mut self, position: S) -> Self {
        self.contact.position = Some(position.into());
        self
    }

    /// Set the flat location field
    pub fn location<S: Into<String>>(mut self, location: S) -> Self {
        self.contact.location = Some(location.into());
        self
    }

    /// Set the current location (structured)
    pub fn current_location<S: Into<String>>(mut self, location: S) -> Self {
        self.contact.locations.current = Some(location.into());
        self
    }

    /// Set the hometown
    pub fn hometown<S: Into<String>>(mut self, hometown: S) -> Self {
        self.contact.locations.hometown = Some(hometown.into());
        self
    }

    /// Set the current employment record
    pub fn current_employment(mut self, record: EmploymentRecord) -> Self {
        self.contact.employment.current = Some(record);
        self
    }

    /// Append a past employment record
    pub fn past_employment(mut self, record: EmploymentRecord) -> Self {
        self.contact.employment.history.push(record);
        self
    }

    /// Add a school
    pub fn school<S: Into<String>>(mut self, school: S) -> Self {
        self.contact.education.schools.push(school.into());
        self
    }

    /// Add an interest
    pub fn interest<S: Into<String>>(mut self, interest: S) -> Self {
        self.contact.social.interests.push(interest.into());
        self
    }

    /// Add a hobby
    pub fn hobby<S: Into<String>>(mut self, hobby: S) -> Self {
        self.contact.social.hobbies.push(hobby.into());
        self
    }

    /// Set the mutual friends count
    pub fn mutual_friends(mut self, count: u32) -> Self {
        self.contact.social.mutual_friends = Some(count);
        self
    }

    /// Set the professional connection count
    pub fn connections(mut self, count: u32) -> Self {
        self.contact.social.connections = Some(count);
        self
    }

    /// Set the interaction count
    pub fn interaction_count(mut self, count: u32) -> Self {
        self.contact.social.interaction_count = count;
        self
    }

    /// Add a skill
    pub fn skill<S: Into<String>>(mut self, skill: S) -> Self {
        self.contact.skills.push(skill.into());
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: Tag) -> Self {
        self.contact.tags.push(tag);
        self
    }

    /// Set the record source
    pub fn source(mut self, source: SourceNetwork) -> Self {
        self.contact.source = source;
        self
    }

    /// Set the Facebook profile id
    pub fn facebook_id<S: Into<String>>(mut self, id: S) -> Self {
        self.contact.facebook_id = Some(id.into());
        self
    }

    /// Set the LinkedIn profile id
    pub fn linkedin_id<S: Into<String>>(mut self, id: S) -> Self {
        self.contact.linkedin_id = Some(id.into());
        self
    }

    /// Set the cross-source match confidence
    pub fn match_confidence(mut self, confidence: f64) -> Self {
        self.contact.match_confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }

    /// Set the last interaction timestamp
    pub fn last_interaction(mut self, at: DateTime<Utc>) -> Self {
        self.contact.last_interaction = Some(at);
        self
    }

    /// Set the last enrichment timestamp
    pub fn last_enriched(mut self, at: DateTime<Utc>) -> Self {
        self.contact.last_enriched = Some(at);
        self
    }

    /// Build the final Contact instance
    pub fn build(self) -> Contact {
        self.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let contact = Contact::builder("Ada Stern")
            .email("ada@example.com")
            .company("Stripe")
            .position("Software Engineer")
            .location("Seattle, WA")
            .build();

        assert_eq!(contact.name, "Ada Stern");
        assert_eq!(contact.email.as_deref(), Some("ada@example.com"));
        assert_eq!(contact.effective_company(), Some("Stripe"));
        assert!(!contact.id.is_empty());
    }

    #[test]
    fn test_effective_company_falls_back_to_employment() {
        let contact = Contact::builder("Ada Stern")
            .current_employment(EmploymentRecord::current("Stripe"))
            .build();
        assert_eq!(contact.effective_company(), Some("Stripe"));
    }

    #[test]
    fn test_effective_current_prefers_open_ended_history() {
        let employment = Employment {
            current: None,
            history: vec![
                EmploymentRecord {
                    employer: "Acme".to_string(),
                    end_year: Some(2020),
                    ..Default::default()
                },
                EmploymentRecord::current("Stripe"),
            ],
        };
        assert_eq!(employment.effective_current().unwrap().employer, "Stripe");
    }

    #[test]
    fn test_effective_current_falls_back_to_first_record() {
        let employment = Employment {
            current: None,
            history: vec![EmploymentRecord {
                employer: "Acme".to_string(),
                end_year: Some(2020),
                ..Default::default()
            }],
        };
        assert_eq!(employment.effective_current().unwrap().employer, "Acme");
    }

    #[test]
    fn test_add_tag_deduplicates_by_value() {
        use crate::models::tag::TagCategory;

        let mut contact = Contact::new("Ada Stern");
        contact.add_tag(Tag::new("Seattle", TagCategory::Location, 0.9, SourceNetwork::Csv));
        contact.add_tag(Tag::new("seattle", TagCategory::Location, 0.8, SourceNetwork::Facebook));
        assert_eq!(contact.tags.len(), 1);
    }

    #[test]
    fn test_source_network_roundtrip() {
        assert_eq!(SourceNetwork::from_str("facebook"), SourceNetwork::Facebook);
        assert_eq!(SourceNetwork::from_str("LI"), SourceNetwork::LinkedIn);
        assert_eq!(SourceNetwork::from_str("anything"), SourceNetwork::Manual);
        assert_eq!(SourceNetwork::from_str(&SourceNetwork::Merged.to_string()), SourceNetwork::Merged);
    }

    #[test]
    fn test_record_interaction_bumps_count() {
        let mut contact = Contact::new("Ada Stern");
        assert!(contact.last_interaction.is_none());
        contact.record_interaction();
        contact.record_interaction();
        assert_eq!(contact.social.interaction_count, 2);
        assert!(contact.last_interaction.is_some());
    }
}
