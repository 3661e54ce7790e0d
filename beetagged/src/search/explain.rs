//! Human-readable search explanations and follow-up suggestions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::intent::{IntentKind, SearchIntent};
use crate::models::Contact;

/// How many distinct values each suggestion bucket holds
const SUGGESTION_CAP: usize = 5;
/// How many recently contacted names to surface
const RECENT_CAP: usize = 3;

/// One-line summary of what a search looked for and how much it found
pub fn explain(intent: &SearchIntent, result_count: usize) -> String {
    let mut explanation = format!("Found {} contacts", result_count);

    match (intent.function.as_deref(), intent.location.as_deref()) {
        (Some(function), Some(location)) => {
            explanation.push_str(&format!(
                " who work in {} and are located in {}",
                function, location
            ));
        }
        (Some(function), None) => {
            explanation.push_str(&format!(" who work in {}", function));
        }
        (None, Some(location)) => {
            explanation.push_str(&format!(" who are located in {}", location));
        }
        (None, None) => {
            if let Some(company) = intent.company.as_deref() {
                explanation.push_str(&format!(" who work at {}", company));
            } else if let Some(interest) = intent.interest.as_deref() {
                explanation.push_str(&format!(" who are interested in {}", interest));
            }
        }
    }

    if intent.modifiers.historical {
        explanation.push_str(" (including past positions)");
    }
    explanation
}

/// Example follow-up queries for narrowing or rephrasing a search
pub fn suggest(intent: &SearchIntent) -> Vec<String> {
    match intent.kind {
        IntentKind::Function => match intent.function.as_deref() {
            Some(function) => vec![
                format!("Try adding location: \"{} in Austin\"", function),
                format!("Try specific company: \"{} at Google\"", function),
            ],
            None => Vec::new(),
        },
        IntentKind::Location => match intent.location.as_deref() {
            Some(location) => vec![
                format!("Try adding role: \"marketing in {}\"", location),
                format!("Try adding interest: \"{} and music\"", location),
            ],
            None => Vec::new(),
        },
        IntentKind::General => vec![
            "Try job functions: \"marketing\", \"engineering\", \"design\"".to_string(),
            "Try locations: \"Austin\", \"San Francisco\", \"New York\"".to_string(),
            "Try companies: \"who works at Google\"".to_string(),
        ],
        _ => Vec::new(),
    }
}

/// Starting-point queries derived from the contact list itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartSuggestions {
    /// Locations worth asking about
    pub travel: Vec<String>,
    /// Companies worth asking about
    pub job_search: Vec<String>,
    /// Skills worth asking about
    pub skill_help: Vec<String>,
    /// Names of recently contacted people
    pub recent: Vec<String>,
}

/// Scan the contact list for suggestion material.
///
/// Values keep the casing of their first appearance; duplicates are
/// folded case-insensitively. An empty contact list yields empty buckets.
pub fn smart_suggestions(contacts: &[Contact]) -> SmartSuggestions {
    let mut suggestions = SmartSuggestions::default();

    for contact in contacts {
        if let Some(location) = contact.effective_location() {
            push_distinct(&mut suggestions.travel, location, SUGGESTION_CAP);
        }
        if let Some(company) = contact.effective_company() {
            push_distinct(&mut suggestions.job_search, company, SUGGESTION_CAP);
        }
        if let Some(skill) = contact.skills.first() {
            push_distinct(&mut suggestions.skill_help, skill, SUGGESTION_CAP);
        }
    }

    let mut recent: Vec<(&Contact, DateTime<Utc>)> = contacts
        .iter()
        .filter_map(|c| c.last_interaction.map(|at| (c, at)))
        .collect();
    recent.sort_by(|a, b| b.1.cmp(&a.1));
    suggestions.recent = recent
        .into_iter()
        .take(RECENT_CAP)
        .map(|(contact, _)| contact.name.clone())
        .collect();

    suggestions
}

fn push_distinct(values: &mut Vec<String>, value: &str, cap: usize) {
    let trimmed = value.trim();
    if trimmed.is_empty() || values.len() >= cap {
        return;
    }
    let lower = trimmed.to_lowercase();
    if !values.iter().any(|existing| existing.to_lowercase() == lower) {
        values.push(trimmed.to_string());
    }
}
