//! Precomputed per-contact match index
//!
//! Built once per ranking pass so the scorers do plain substring and set
//! lookups instead of re-normalizing (or worse, re-compiling patterns) for
//! every candidate.

use crate::models::{Contact, TagCategory};

/// Lowercased projections of one contact's searchable fields
pub(crate) struct ContactIndex<'a> {
    pub contact: &'a Contact,
    pub name: String,
    pub email: String,
    pub company: String,
    pub title: String,
    /// Current role: job function, else title, else the flat position
    pub current_function: String,
    /// Same value with original casing, for match reasons
    pub current_function_display: String,
    pub current_location: String,
    /// Original casing, for match reasons
    pub current_location_display: String,
    pub hometown: String,
    pub work_locations: Vec<String>,
    pub history_employers: Vec<String>,
    pub history_functions: Vec<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    /// Lowercased tag values with their categories
    pub tags: Vec<(String, TagCategory)>,
}

impl<'a> ContactIndex<'a> {
    pub fn build(contact: &'a Contact) -> Self {
        let current = contact.employment.effective_current();
        let current_function_display = current
            .and_then(|record| record.job_function.as_deref().or(record.title.as_deref()))
            .or(contact.position.as_deref())
            .unwrap_or_default()
            .to_string();
        let current_location_display = contact.effective_location().unwrap_or_default().to_string();

        let mut work_locations: Vec<String> = contact
            .employment
            .history
            .iter()
            .filter_map(|record| record.location.as_deref())
            .map(str::to_lowercase)
            .collect();
        work_locations.extend(contact.locations.work_locations.iter().map(|l| l.to_lowercase()));

        Self {
            contact,
            name: contact.name.to_lowercase(),
            email: contact.email.as_deref().unwrap_or_default().to_lowercase(),
            company: contact.effective_company().unwrap_or_default().to_lowercase(),
            title: contact.effective_title().unwrap_or_default().to_lowercase(),
            current_function: current_function_display.to_lowercase(),
            current_function_display,
            current_location: current_location_display.to_lowercase(),
            current_location_display,
            hometown: contact
                .locations
                .hometown
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            work_locations,
            history_employers: contact
                .employment
                .history
                .iter()
                .map(|record| record.employer.to_lowercase())
                .collect(),
            history_functions: contact
                .employment
                .history
                .iter()
                .filter_map(|record| record.job_function.as_deref().or(record.title.as_deref()))
                .map(str::to_lowercase)
                .collect(),
            skills: contact.skills.iter().map(|s| s.to_lowercase()).collect(),
            interests: contact
                .social
                .interests
                .iter()
                .chain(contact.social.hobbies.iter())
                .map(|i| i.to_lowercase())
                .collect(),
            tags: contact
                .tags
                .iter()
                .map(|tag| (tag.value.to_lowercase(), tag.category.clone()))
                .collect(),
        }
    }

    /// Count of tags in categories passing `category_matches` whose value
    /// contains `needle`
    pub fn matching_tags<F>(&self, needle: &str, category_matches: F) -> usize
    where
        F: Fn(&TagCategory) -> bool,
    {
        if needle.is_empty() {
            return 0;
        }
        self.tags
            .iter()
            .filter(|(value, category)| category_matches(category) && value.contains(needle))
            .count()
    }

    /// Count of tags (any category) whose value contains `needle`
    pub fn any_tag_matches(&self, needle: &str) -> usize {
        self.matching_tags(needle, |_| true)
    }

    /// Whether a non-empty field contains a non-empty needle
    pub fn field_contains(field: &str, needle: &str) -> bool {
        !field.is_empty() && !needle.is_empty() && field.contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactBuilder, EmploymentRecord, SourceNetwork, Tag};

    #[test]
    fn test_index_lowercases_fields() {
        let contact = ContactBuilder::new("Jane DOE")
            .company("Acme Corp")
            .position("Staff Engineer")
            .location("Austin, TX")
            .build();

        let index = ContactIndex::build(&contact);
        assert_eq!(index.name, "jane doe");
        assert_eq!(index.company, "acme corp");
        assert_eq!(index.title, "staff engineer");
        assert_eq!(index.current_location, "austin, tx");
        assert_eq!(index.current_location_display, "Austin, TX");
    }

    #[test]
    fn test_current_function_falls_back_to_position() {
        let contact = ContactBuilder::new("Jane Doe")
            .position("Marketing Manager")
            .build();
        let index = ContactIndex::build(&contact);
        assert_eq!(index.current_function, "marketing manager");
        assert_eq!(index.current_function_display, "Marketing Manager");
    }

    #[test]
    fn test_history_projection() {
        let contact = ContactBuilder::new("Jane Doe")
            .past_employment(EmploymentRecord {
                employer: "Globex".to_string(),
                job_function: Some("Engineering".to_string()),
                location: Some("Seattle".to_string()),
                end_year: Some(2020),
                ..Default::default()
            })
            .build();

        let index = ContactIndex::build(&contact);
        assert_eq!(index.history_employers, vec!["globex".to_string()]);
        assert_eq!(index.history_functions, vec!["engineering".to_string()]);
        assert_eq!(index.work_locations, vec!["seattle".to_string()]);
    }

    #[test]
    fn test_tag_matching_by_category() {
        let contact = ContactBuilder::new("Jane Doe")
            .tag(Tag::new("Austin", TagCategory::Location, 0.9, SourceNetwork::Manual))
            .tag(Tag::new("Stripe", TagCategory::Company, 0.9, SourceNetwork::Manual))
            .build();

        let index = ContactIndex::build(&contact);
        assert_eq!(index.matching_tags("austin", |c| *c == TagCategory::Location), 1);
        assert_eq!(index.matching_tags("austin", TagCategory::is_professional), 0);
        assert_eq!(index.matching_tags("stripe", TagCategory::is_professional), 1);
        assert_eq!(index.any_tag_matches("austin"), 1);
        assert_eq!(index.any_tag_matches(""), 0);
    }

    #[test]
    fn test_empty_optional_fields_index_empty() {
        let contact = ContactBuilder::new("Jane Doe").build();
        let index = ContactIndex::build(&contact);
        assert!(index.company.is_empty());
        assert!(index.email.is_empty());
        assert!(!ContactIndex::field_contains(&index.company, "acme"));
    }
}
