//! Duplicate contact detection and resolution

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::similarity::name_word_overlap;
use crate::models::{Contact, SourceNetwork};

/// Default word-overlap ratio above which two names are considered the same
/// person when their companies also match
pub const DEFAULT_NAME_OVERLAP_THRESHOLD: f64 = 0.8;

/// How a batch of duplicate groups should be resolved
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DuplicateResolution {
    /// Merge each group into a single contact
    Consolidate,
    /// Keep every contact as-is
    Separate,
    /// Defer to individual review; behaves as Separate here since interactive
    /// review is a caller concern
    Review,
}

impl std::fmt::Display for DuplicateResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Consolidate => write!(f, "consolidate"),
            Self::Separate => write!(f, "separate"),
            Self::Review => write!(f, "review"),
        }
    }
}

/// A set of contacts believed to represent one real person
///
/// Created during bulk import before persistence and resolved synchronously;
/// groups do not outlive the import that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// The grouped contacts, in input order; always at least two
    pub members: Vec<Contact>,
}

impl DuplicateGroup {
    /// Ids of the grouped contacts
    pub fn member_ids(&self) -> Vec<&str> {
        self.members.iter().map(|c| c.id.as_str()).collect()
    }

    /// Number of contacts in the group
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group is empty (never true for detector output)
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Pairwise duplicate detector over import batches
#[derive(Debug, Clone)]
pub struct DuplicateDetector {
    name_overlap_threshold: f64,
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DuplicateDetector {
    /// Create a detector with the default name-overlap threshold
    pub fn new() -> Self {
        Self {
            name_overlap_threshold: DEFAULT_NAME_OVERLAP_THRESHOLD,
        }
    }

    /// Create a detector with a custom name-overlap threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            name_overlap_threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Group contacts that appear to be the same person.
    ///
    /// O(n²) pairwise comparison; import batches are expected to be bounded
    /// (typically hundreds of records). Grouping is greedy in input order:
    /// each unprocessed contact collects all later unprocessed contacts that
    /// pair-match it. Transitivity is NOT enforced: when A~B and B~C but not
    /// A~C, C stays outside A's group. Known limitation, kept intentionally.
    ///
    /// Contacts without a name are skipped with a warning; the rest of the
    /// batch is still processed.
    pub fn detect(&self, contacts: &[Contact]) -> Vec<DuplicateGroup> {
        let mut groups = Vec::new();
        let mut processed = vec![false; contacts.len()];

        for i in 0..contacts.len() {
            if processed[i] {
                continue;
            }
            if !contacts[i].has_name() {
                warn!(contact_id = %contacts[i].id, "skipping contact without a name in duplicate detection");
                processed[i] = true;
                continue;
            }

            let mut members = vec![contacts[i].clone()];
            for j in (i + 1)..contacts.len() {
                if processed[j] {
                    continue;
                }
                if self.is_duplicate(&contacts[i], &contacts[j]) {
                    members.push(contacts[j].clone());
                    processed[j] = true;
                }
            }

            if members.len() > 1 {
                processed[i] = true;
                debug!(group_size = members.len(), anchor = %contacts[i].name, "duplicate group found");
                groups.push(DuplicateGroup { members });
            }
        }

        groups
    }

    /// Whether two contacts appear to be the same person.
    ///
    /// True when ANY of: names equal case-insensitively after trimming,
    /// emails equal case-insensitively after trimming, or name word overlap
    /// exceeds the threshold while companies match case-insensitively.
    pub fn is_duplicate(&self, a: &Contact, b: &Contact) -> bool {
        if a.has_name() && b.has_name() {
            let name_a = a.name.trim().to_lowercase();
            let name_b = b.name.trim().to_lowercase();
            if name_a == name_b {
                return true;
            }

            if let (Some(company_a), Some(company_b)) = (a.effective_company(), b.effective_company())
            {
                let overlap = name_word_overlap(&name_a, &name_b);
                if overlap > self.name_overlap_threshold
                    && company_a.trim().to_lowercase() == company_b.trim().to_lowercase()
                {
                    return true;
                }
            }
        }

        if let (Some(email_a), Some(email_b)) = (&a.email, &b.email) {
            let email_a = email_a.trim().to_lowercase();
            let email_b = email_b.trim().to_lowercase();
            if !email_a.is_empty() && email_a == email_b {
                return true;
            }
        }

        false
    }
}

/// Group contacts using the default detector
pub fn detect_duplicates(contacts: &[Contact]) -> Vec<DuplicateGroup> {
    DuplicateDetector::new().detect(contacts)
}

/// Apply a resolution to detected groups.
///
/// Consolidate replaces each group's members with one merged contact;
/// Separate and Review pass every contact through unchanged.
pub fn resolve_duplicates(
    contacts: Vec<Contact>,
    groups: &[DuplicateGroup],
    action: DuplicateResolution,
) -> Vec<Contact> {
    match action {
        DuplicateResolution::Separate | DuplicateResolution::Review => contacts,
        DuplicateResolution::Consolidate => {
            let grouped_ids: std::collections::HashSet<&str> = groups
                .iter()
                .flat_map(|group| group.member_ids())
                .collect();

            let mut resolved: Vec<Contact> = contacts
                .into_iter()
                .filter(|contact| !grouped_ids.contains(contact.id.as_str()))
                .collect();

            for group in groups {
                if let Some(merged) = merge_group(group) {
                    resolved.push(merged);
                }
            }

            resolved
        }
    }
}

/// Merge a group into a single contact.
///
/// Scalar fields take the first non-empty value in group order, except
/// company, position, and location where the longest non-empty value wins
/// (longer assumed more descriptive). Tags and skills are unioned. Structured
/// sections take the first member's populated section. Returns None for an
/// empty group.
pub fn merge_group(group: &DuplicateGroup) -> Option<Contact> {
    let first = group.members.first()?;
    let mut merged = first.clone();
    merged.source = SourceNetwork::Merged;

    for contact in group.members.iter().skip(1) {
        if merged.email.as_deref().is_none_or(str::is_empty) {
            merged.email = contact.email.clone();
        }
        if merged.phone.as_deref().is_none_or(str::is_empty) {
            merged.phone = contact.phone.clone();
        }
        if merged.facebook_id.is_none() {
            merged.facebook_id = contact.facebook_id.clone();
        }
        if merged.linkedin_id.is_none() {
            merged.linkedin_id = contact.linkedin_id.clone();
        }

        merged.company = longest_of(merged.company.take(), contact.company.clone());
        merged.position = longest_of(merged.position.take(), contact.position.clone());
        merged.location = longest_of(merged.location.take(), contact.location.clone());

        if merged.employment.current.is_none() && merged.employment.history.is_empty() {
            merged.employment = contact.employment.clone();
        }
        if merged.locations.current.is_none() && merged.locations.hometown.is_none() {
            merged.locations = contact.locations.clone();
        }
        if merged.education.schools.is_empty() {
            merged.education = contact.education.clone();
        }
        if merged.social.connections.is_none() && merged.social.mutual_friends.is_none() {
            merged.social.connections = contact.social.connections;
            merged.social.mutual_friends = contact.social.mutual_friends;
        }
        merged.social.interaction_count =
            merged.social.interaction_count.max(contact.social.interaction_count);

        for tag in &contact.tags {
            merged.add_tag(tag.clone());
        }
        for skill in &contact.skills {
            merged.add_skill(skill.clone());
        }

        merged.match_confidence = match (merged.match_confidence, contact.match_confidence) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        merged.last_interaction = merged.last_interaction.max(contact.last_interaction);
        merged.last_enriched = merged.last_enriched.max(contact.last_enriched);
        merged.last_auto_tagged = merged.last_auto_tagged.max(contact.last_auto_tagged);
        merged.created_at = merged.created_at.min(contact.created_at);
    }

    Some(merged)
}

fn longest_of(current: Option<String>, candidate: Option<String>) -> Option<String> {
    let current = current.filter(|v| !v.trim().is_empty());
    let candidate = candidate.filter(|v| !v.trim().is_empty());
    match (current, candidate) {
        (Some(a), Some(b)) => Some(if b.len() > a.len() { b } else { a }),
        (a, b) => a.or(b),
    }
}
