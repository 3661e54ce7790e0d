//! Cross-source profile linking
//!
//! Matches incoming profiles (e.g. a LinkedIn export) against already-stored
//! contacts so enrichment lands on the right record instead of creating a
//! duplicate. Strategies run in decreasing-confidence order and the first hit
//! wins: phone, then email, then exact normalized name, then fuzzy name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::similarity::{name_word_overlap, normalize_name, normalize_phone};
use crate::models::Contact;

/// Confidence assigned to a normalized phone number match
pub const PHONE_CONFIDENCE: f64 = 0.95;
/// Confidence assigned to an email match
pub const EMAIL_CONFIDENCE: f64 = 0.90;
/// Confidence assigned to an exact normalized-name match
pub const NAME_EXACT_CONFIDENCE: f64 = 0.75;
/// Factor applied to the fuzzy overlap score to produce a confidence
pub const FUZZY_CONFIDENCE_FACTOR: f64 = 0.7;

/// Minimum fuzzy name overlap for a link to be proposed
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Which strategy produced a link
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LinkMethod {
    Phone,
    Email,
    NameExact,
    NameFuzzy,
}

impl std::fmt::Display for LinkMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Phone => write!(f, "phone"),
            Self::Email => write!(f, "email"),
            Self::NameExact => write!(f, "name_exact"),
            Self::NameFuzzy => write!(f, "name_fuzzy"),
        }
    }
}

/// A proposed link between an incoming profile and a stored contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkMatch {
    /// Id of the incoming profile
    pub incoming_id: String,
    /// Id of the stored contact it matched
    pub existing_id: String,
    /// Strategy that produced the match
    pub method: LinkMethod,
    /// Confidence in [0.0, 1.0]
    pub confidence: f64,
}

/// Links incoming profiles to stored contacts
#[derive(Debug, Clone)]
pub struct ProfileLinker {
    fuzzy_threshold: f64,
}

impl Default for ProfileLinker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileLinker {
    /// Create a linker with the default fuzzy threshold
    pub fn new() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    /// Create a linker with a custom fuzzy threshold
    pub fn with_fuzzy_threshold(threshold: f64) -> Self {
        Self {
            fuzzy_threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Match each incoming profile against the stored contacts.
    ///
    /// At most one link per incoming profile. Profiles with no name, email,
    /// or phone are skipped with a warning. Phone and email lookups use
    /// normalized exact maps; ties go to the first stored contact seen.
    pub fn link(&self, incoming: &[Contact], existing: &[Contact]) -> Vec<LinkMatch> {
        let mut by_phone: HashMap<String, &Contact> = HashMap::new();
        let mut by_email: HashMap<String, &Contact> = HashMap::new();
        let mut by_name: HashMap<String, &Contact> = HashMap::new();

        for contact in existing {
            if let Some(phone) = contact.phone.as_deref() {
                let normalized = normalize_phone(phone);
                if !normalized.is_empty() {
                    by_phone.entry(normalized).or_insert(contact);
                }
            }
            if let Some(email) = contact.email.as_deref() {
                let normalized = email.trim().to_lowercase();
                if !normalized.is_empty() {
                    by_email.entry(normalized).or_insert(contact);
                }
            }
            if contact.has_name() {
                by_name.entry(normalize_name(&contact.name)).or_insert(contact);
            }
        }

        let mut links = Vec::new();
        for profile in incoming {
            let has_identifier = profile.has_name()
                || profile.email.as_deref().is_some_and(|e| !e.trim().is_empty())
                || profile.phone.as_deref().is_some_and(|p| !p.trim().is_empty());
            if !has_identifier {
                warn!(profile_id = %profile.id, "skipping profile with no identifying fields");
                continue;
            }

            if let Some(link) = self.match_one(profile, &by_phone, &by_email, &by_name, existing) {
                debug!(
                    incoming = %link.incoming_id,
                    existing = %link.existing_id,
                    method = %link.method,
                    confidence = link.confidence,
                    "profile linked"
                );
                links.push(link);
            }
        }

        links
    }

    fn match_one(
        &self,
        profile: &Contact,
        by_phone: &HashMap<String, &Contact>,
        by_email: &HashMap<String, &Contact>,
        by_name: &HashMap<String, &Contact>,
        existing: &[Contact],
    ) -> Option<LinkMatch> {
        if let Some(phone) = profile.phone.as_deref() {
            let normalized = normalize_phone(phone);
            if let Some(found) = by_phone.get(&normalized) {
                return Some(LinkMatch {
                    incoming_id: profile.id.clone(),
                    existing_id: found.id.clone(),
                    method: LinkMethod::Phone,
                    confidence: PHONE_CONFIDENCE,
                });
            }
        }

        if let Some(email) = profile.email.as_deref() {
            if let Some(found) = by_email.get(&email.trim().to_lowercase()) {
                return Some(LinkMatch {
                    incoming_id: profile.id.clone(),
                    existing_id: found.id.clone(),
                    method: LinkMethod::Email,
                    confidence: EMAIL_CONFIDENCE,
                });
            }
        }

        if !profile.has_name() {
            return None;
        }
        let normalized = normalize_name(&profile.name);
        if let Some(found) = by_name.get(&normalized) {
            return Some(LinkMatch {
                incoming_id: profile.id.clone(),
                existing_id: found.id.clone(),
                method: LinkMethod::NameExact,
                confidence: NAME_EXACT_CONFIDENCE,
            });
        }

        let mut best: Option<(&Contact, f64)> = None;
        for candidate in existing {
            if !candidate.has_name() {
                continue;
            }
            let score = name_word_overlap(&normalized, &normalize_name(&candidate.name));
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((found, score)) if score > self.fuzzy_threshold => Some(LinkMatch {
                incoming_id: profile.id.clone(),
                existing_id: found.id.clone(),
                method: LinkMethod::NameFuzzy,
                confidence: score * FUZZY_CONFIDENCE_FACTOR,
            }),
            _ => None,
        }
    }
}

/// Link profiles using the default linker
pub fn link_profiles(incoming: &[Contact], existing: &[Contact]) -> Vec<LinkMatch> {
    ProfileLinker::new().link(incoming, existing)
}
