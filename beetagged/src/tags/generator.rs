//! Tag generation

use chrono::Utc;

use super::tables;
use crate::models::{Contact, Tag, TagCategory};
use crate::search::keywords::keyword_hits;

// Confidence assigned to tags that repeat a raw field value verbatim
const RAW_FIELD_CONFIDENCE: f64 = 0.95;

// Confidence assigned to industry/role tags derived by keyword lookup
const DERIVED_CATEGORY_CONFIDENCE: f64 = 0.85;

// Confidence assigned to canonical city tags
const CANONICAL_CITY_CONFIDENCE: f64 = 0.90;

/// Generate tags for a contact from its company, position, and location.
///
/// Deterministic and pure: the raw field values become tags themselves, and
/// the keyword tables in [`tables`] derive industry, role category, and
/// canonical city tags. Output is deduplicated by value (case-insensitive)
/// in insertion order. Absent or empty fields are skipped.
pub fn generate_tags(contact: &Contact) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::new();
    let source = contact.source;

    if let Some(company) = non_empty(contact.effective_company()) {
        push_unique(
            &mut tags,
            Tag::new(company, TagCategory::Company, RAW_FIELD_CONFIDENCE, source),
        );

        let lower = company.to_lowercase();
        if let Some(industry) = tables::first_match(tables::INDUSTRY_TABLES, &lower) {
            push_unique(
                &mut tags,
                Tag::new(
                    industry,
                    TagCategory::Industry,
                    DERIVED_CATEGORY_CONFIDENCE,
                    source,
                ),
            );
        }
    }

    if let Some(position) = non_empty(contact.effective_title()) {
        push_unique(
            &mut tags,
            Tag::new(position, TagCategory::Role, RAW_FIELD_CONFIDENCE, source),
        );

        let lower = position.to_lowercase();
        if let Some(role) = tables::first_match(tables::ROLE_TABLES, &lower) {
            push_unique(
                &mut tags,
                Tag::new(role, TagCategory::Role, DERIVED_CATEGORY_CONFIDENCE, source),
            );
        }
    }

    if let Some(location) = non_empty(contact.effective_location()) {
        push_unique(
            &mut tags,
            Tag::new(location, TagCategory::Location, RAW_FIELD_CONFIDENCE, source),
        );

        let lower = location.to_lowercase();
        if let Some(city) = tables::first_match(tables::CITY_TABLES, &lower) {
            push_unique(
                &mut tags,
                Tag::new(city, TagCategory::Location, CANONICAL_CITY_CONFIDENCE, source),
            );
        }
    }

    tags
}

/// Extract technology skills mentioned in the position and company text
pub fn extract_skills(contact: &Contact) -> Vec<String> {
    let text = format!(
        "{} {}",
        contact.effective_title().unwrap_or(""),
        contact.effective_company().unwrap_or("")
    )
    .to_lowercase();

    tables::TECH_SKILLS
        .iter()
        .filter(|skill| keyword_hits(&text, skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// Generate and attach tags and skills in place, stamping the auto-tag time.
///
/// Existing tags are kept; generated values already present are skipped.
pub fn apply_auto_tags(contact: &mut Contact) {
    for tag in generate_tags(contact) {
        contact.add_tag(tag);
    }
    for skill in extract_skills(contact) {
        contact.add_skill(skill);
    }
    contact.last_auto_tagged = Some(Utc::now());
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn push_unique(tags: &mut Vec<Tag>, tag: Tag) {
    if !tags.iter().any(|existing| existing.same_value(&tag)) {
        tags.push(tag);
    }
}
