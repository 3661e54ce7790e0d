//! Cross-source conflict detection
//!
//! Compares the Facebook and LinkedIn views of one person and emits a
//! question for each field where the two disagree. Confidence priors are a
//! fixed policy table: the professional network is trusted more for
//! professional fields, the social network more for personal and location
//! fields.

use tracing::debug;

use super::types::{
    ConflictCategory, ConflictKind, ConflictOption, ConflictPriority, ConflictQuestion,
    ConflictSource, SourceProfile,
};
use crate::matching::{
    is_similar_company_name, is_similar_job_title, is_similar_location, is_similar_name,
    is_similar_school_name,
};

const EMPLOYER_FACEBOOK_PRIOR: f64 = 0.7;
const EMPLOYER_LINKEDIN_PRIOR: f64 = 0.8;
const TITLE_FACEBOOK_PRIOR: f64 = 0.6;
const TITLE_LINKEDIN_PRIOR: f64 = 0.9;
const LOCATION_FACEBOOK_PRIOR: f64 = 0.8;
const LOCATION_LINKEDIN_PRIOR: f64 = 0.7;
const HOMETOWN_COMBINED_PRIOR: f64 = 0.8;
const HOMETOWN_FACEBOOK_PRIOR: f64 = 0.6;
const EDUCATION_FACEBOOK_PRIOR: f64 = 0.7;
const EDUCATION_LINKEDIN_PRIOR: f64 = 0.8;
const EDUCATION_COMBINED_PRIOR: f64 = 0.9;
const NAME_FACEBOOK_PRIOR: f64 = 0.8;
const NAME_LINKEDIN_PRIOR: f64 = 0.9;

const EMPLOYER_REWARD: u32 = 10;
const TITLE_REWARD: u32 = 8;
const LOCATION_REWARD: u32 = 5;
const HOMETOWN_REWARD: u32 = 3;
const EDUCATION_REWARD: u32 = 6;
const NAME_REWARD: u32 = 12;

/// Detect every conflict between two source profiles.
///
/// Pure and deterministic: the same profiles always yield the same questions
/// in the same order. Results are sorted by priority (high first), ties
/// broken by descending reward; the sort is stable for equal keys.
pub fn detect_all_conflicts(
    facebook: &SourceProfile,
    linkedin: &SourceProfile,
    contact_name: &str,
) -> Vec<ConflictQuestion> {
    let mut conflicts = Vec::new();

    conflicts.extend(detect_employer_conflict(facebook, linkedin, contact_name));
    conflicts.extend(detect_title_conflict(facebook, linkedin, contact_name));
    conflicts.extend(detect_location_conflict(facebook, linkedin, contact_name));
    conflicts.extend(detect_hometown_conflict(facebook, linkedin, contact_name));
    conflicts.extend(detect_education_conflict(facebook, linkedin, contact_name));
    conflicts.extend(detect_name_conflict(facebook, linkedin));

    debug!(count = conflicts.len(), contact = contact_name, "conflicts detected");
    prioritize_conflicts(conflicts)
}

/// Order questions by priority rank, then reward, both descending
pub fn prioritize_conflicts(mut conflicts: Vec<ConflictQuestion>) -> Vec<ConflictQuestion> {
    conflicts.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then(b.reward.cmp(&a.reward))
    });
    conflicts
}

fn question(
    kind: ConflictKind,
    text: String,
    options: Vec<ConflictOption>,
    priority: ConflictPriority,
    category: ConflictCategory,
    reward: u32,
) -> ConflictQuestion {
    ConflictQuestion {
        kind,
        field: kind.field().to_string(),
        question: text,
        options,
        priority,
        category,
        reward,
    }
}

fn detect_employer_conflict(
    facebook: &SourceProfile,
    linkedin: &SourceProfile,
    name: &str,
) -> Option<ConflictQuestion> {
    let fb_employer = facebook.current_employer()?;
    let li_employer = linkedin.current_employer()?;
    if is_similar_company_name(fb_employer, li_employer) {
        return None;
    }

    let fb_context = facebook
        .current_title()
        .map(|title| format!("as {}", title))
        .unwrap_or_else(|| "Facebook profile".to_string());
    let li_context = linkedin
        .current_title()
        .map(|title| format!("as {}", title))
        .unwrap_or_else(|| "LinkedIn profile".to_string());

    Some(question(
        ConflictKind::Employer,
        format!("Where does {} currently work?", name),
        vec![
            ConflictOption::new(
                fb_employer,
                ConflictSource::Facebook,
                EMPLOYER_FACEBOOK_PRIOR,
                fb_context,
            ),
            ConflictOption::new(
                li_employer,
                ConflictSource::LinkedIn,
                EMPLOYER_LINKEDIN_PRIOR,
                li_context,
            ),
        ],
        ConflictPriority::High,
        ConflictCategory::Professional,
        EMPLOYER_REWARD,
    ))
}

fn detect_title_conflict(
    facebook: &SourceProfile,
    linkedin: &SourceProfile,
    name: &str,
) -> Option<ConflictQuestion> {
    let fb_title = facebook.current_title()?;
    let li_title = linkedin.current_title()?;
    if is_similar_job_title(fb_title, li_title) {
        return None;
    }

    let fb_context = facebook
        .current_employer()
        .map(|employer| format!("at {}", employer))
        .unwrap_or_else(|| "Facebook profile".to_string());
    let li_context = linkedin
        .current_employer()
        .map(|employer| format!("at {}", employer))
        .unwrap_or_else(|| "LinkedIn profile".to_string());

    Some(question(
        ConflictKind::JobTitle,
        format!("What is {}'s current job title?", name),
        vec![
            ConflictOption::new(
                fb_title,
                ConflictSource::Facebook,
                TITLE_FACEBOOK_PRIOR,
                fb_context,
            ),
            ConflictOption::new(
                li_title,
                ConflictSource::LinkedIn,
                TITLE_LINKEDIN_PRIOR,
                li_context,
            ),
        ],
        ConflictPriority::High,
        ConflictCategory::Professional,
        TITLE_REWARD,
    ))
}

fn detect_location_conflict(
    facebook: &SourceProfile,
    linkedin: &SourceProfile,
    name: &str,
) -> Option<ConflictQuestion> {
    let fb_location = facebook.current_location()?;
    let li_location = linkedin.current_location()?;
    if is_similar_location(fb_location, li_location) {
        return None;
    }

    Some(question(
        ConflictKind::CurrentLocation,
        format!("Where is {} currently located?", name),
        vec![
            ConflictOption::new(
                fb_location,
                ConflictSource::Facebook,
                LOCATION_FACEBOOK_PRIOR,
                "Personal profile location",
            ),
            ConflictOption::new(
                li_location,
                ConflictSource::LinkedIn,
                LOCATION_LINKEDIN_PRIOR,
                "Professional profile location",
            ),
        ],
        ConflictPriority::Medium,
        ConflictCategory::Location,
        LOCATION_REWARD,
    ))
}

fn detect_hometown_conflict(
    facebook: &SourceProfile,
    linkedin: &SourceProfile,
    name: &str,
) -> Option<ConflictQuestion> {
    let hometown = facebook.hometown.as_deref().filter(|v| !v.trim().is_empty())?;
    let li_location = linkedin.current_location()?;
    if is_similar_location(hometown, li_location) {
        return None;
    }

    Some(question(
        ConflictKind::HometownVsCurrent,
        format!(
            "Is {} originally from {} but now in {}?",
            name, hometown, li_location
        ),
        vec![
            ConflictOption::new(
                format!("Originally from {}, now in {}", hometown, li_location),
                ConflictSource::Both,
                HOMETOWN_COMBINED_PRIOR,
                "Combined Facebook hometown + LinkedIn current location",
            ),
            ConflictOption::new(
                format!("Lives in {}", hometown),
                ConflictSource::Facebook,
                HOMETOWN_FACEBOOK_PRIOR,
                "Facebook location only",
            ),
        ],
        ConflictPriority::Low,
        ConflictCategory::Location,
        HOMETOWN_REWARD,
    ))
}

fn detect_education_conflict(
    facebook: &SourceProfile,
    linkedin: &SourceProfile,
    name: &str,
) -> Option<ConflictQuestion> {
    if facebook.schools.is_empty() || linkedin.schools.is_empty() {
        return None;
    }

    let disagreement = facebook.schools.iter().any(|fb_school| {
        linkedin
            .schools
            .iter()
            .all(|li_school| !is_similar_school_name(fb_school, li_school))
    });
    if !disagreement {
        return None;
    }

    let mut combined: Vec<String> = Vec::new();
    for school in facebook.schools.iter().chain(linkedin.schools.iter()) {
        let trimmed = school.trim();
        if !trimmed.is_empty()
            && !combined.iter().any(|seen| seen.eq_ignore_ascii_case(trimmed))
        {
            combined.push(trimmed.to_string());
        }
    }

    Some(question(
        ConflictKind::Education,
        format!("Which schools did {} attend?", name),
        vec![
            ConflictOption::new(
                facebook.schools.join(", "),
                ConflictSource::Facebook,
                EDUCATION_FACEBOOK_PRIOR,
                "Facebook education history",
            ),
            ConflictOption::new(
                linkedin.schools.join(", "),
                ConflictSource::LinkedIn,
                EDUCATION_LINKEDIN_PRIOR,
                "LinkedIn education history",
            ),
            ConflictOption::new(
                combined.join(", "),
                ConflictSource::Both,
                EDUCATION_COMBINED_PRIOR,
                "Combined education from both sources",
            ),
        ],
        ConflictPriority::Medium,
        ConflictCategory::Education,
        EDUCATION_REWARD,
    ))
}

fn detect_name_conflict(
    facebook: &SourceProfile,
    linkedin: &SourceProfile,
) -> Option<ConflictQuestion> {
    let fb_name = facebook.name.as_deref().filter(|v| !v.trim().is_empty())?;
    let li_name = linkedin.name.as_deref().filter(|v| !v.trim().is_empty())?;
    if fb_name == li_name || is_similar_name(fb_name, li_name) {
        return None;
    }

    Some(question(
        ConflictKind::FullName,
        "What is the correct name for this contact?".to_string(),
        vec![
            ConflictOption::new(
                fb_name,
                ConflictSource::Facebook,
                NAME_FACEBOOK_PRIOR,
                "Personal social profile",
            ),
            ConflictOption::new(
                li_name,
                ConflictSource::LinkedIn,
                NAME_LINKEDIN_PRIOR,
                "Professional profile",
            ),
        ],
        ConflictPriority::High,
        ConflictCategory::Personal,
        NAME_REWARD,
    ))
}
