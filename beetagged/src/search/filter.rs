//! Structured filter search
//!
//! An alternative front door to the ranker for callers that already know
//! which fields they want to constrain. No intent parsing happens here;
//! each populated field contributes its own weighted signals and the
//! results flow through the same positive-score filter, ordering, and cap
//! as free-text search.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::index::ContactIndex;
use super::ranker::{MatchResult, RelevanceRanker};
use crate::models::{Contact, TagCategory};

/// Field-level search constraints; empty fields are ignored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Free text matched against name, email, company, and title
    pub text: Option<String>,
    /// Current employer
    pub company: Option<String>,
    /// Job function or title fragment
    pub job_function: Option<String>,
    /// Current location fragment
    pub location: Option<String>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_company<S: Into<String>>(mut self, company: S) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_function<S: Into<String>>(mut self, function: S) -> Self {
        self.job_function = Some(function.into());
        self
    }

    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into());
        self
    }

    /// True when no field carries a usable value
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, |v| v.trim().is_empty())
        }
        blank(&self.text) && blank(&self.company) && blank(&self.job_function) && blank(&self.location)
    }
}

impl RelevanceRanker {
    /// Rank contacts against field-level filters.
    ///
    /// Shares the ordering contract with [`rank`](Self::rank): score
    /// descending, name ascending on ties, capped at the configured limit.
    /// An empty filter matches nothing.
    pub fn rank_filter(&self, contacts: &[Contact], filter: &FilterQuery) -> Vec<MatchResult> {
        if filter.is_empty() {
            return Vec::new();
        }

        let now = chrono::Utc::now();
        let results = contacts
            .iter()
            .filter_map(|contact| {
                let index = ContactIndex::build(contact);
                let mut score = 0.0;
                let mut reasons = Vec::new();
                self.score_filter(&index, filter, &mut score, &mut reasons);
                self.apply_boosts(&index, now, &mut score, &mut reasons);
                self.result_for(contact, score, reasons)
            })
            .collect();
        let results = self.finalize(results);

        debug!(candidates = contacts.len(), results = results.len(), "filtered contacts");
        results
    }

    fn score_filter(
        &self,
        index: &ContactIndex<'_>,
        filter: &FilterQuery,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        let weights = self.filter_weights();

        if let Some(text) = lowered(&filter.text) {
            if index.name.contains(&text) {
                *score += weights.text_name;
                reasons.push("matches name".to_string());
            }
            if ContactIndex::field_contains(&index.email, &text) {
                *score += weights.text_email;
                reasons.push("matches email".to_string());
            }
            if ContactIndex::field_contains(&index.company, &text) {
                *score += weights.text_company;
                reasons.push("matches company".to_string());
            }
            if ContactIndex::field_contains(&index.title, &text) {
                *score += weights.text_title;
                reasons.push("matches job title".to_string());
            }
        }

        if let Some(company) = lowered(&filter.company) {
            if ContactIndex::field_contains(&index.company, &company) {
                *score += weights.company;
                reasons.push(format!("works at {}", company));
            }
        }

        if let Some(function) = lowered(&filter.job_function) {
            if ContactIndex::field_contains(&index.title, &function)
                || ContactIndex::field_contains(&index.current_function, &function)
            {
                *score += weights.function_title;
                reasons.push(format!("works in {}", function));
            }
            if index.matching_tags(&function, |c| *c == TagCategory::Industry) > 0 {
                *score += weights.function_industry_tag;
                reasons.push(format!("tagged {}", function));
            }
        }

        if let Some(location) = lowered(&filter.location) {
            if ContactIndex::field_contains(&index.current_location, &location) {
                *score += weights.location;
                reasons.push(format!("located in {}", location));
            }
        }
    }
}

fn lowered(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactBuilder, SourceNetwork, Tag};

    #[test]
    fn test_empty_filter_detection() {
        assert!(FilterQuery::new().is_empty());
        assert!(FilterQuery::new().with_text("   ").is_empty());
        assert!(!FilterQuery::new().with_company("Stripe").is_empty());
    }

    #[test]
    fn test_text_filter_scores_all_matching_fields() {
        let contact = ContactBuilder::new("Stripe Santos")
            .email("santos@stripe.com")
            .company("Stripe")
            .position("Stripe Evangelist")
            .build();

        let filter = FilterQuery::new().with_text("stripe");
        let results = RelevanceRanker::new().rank_filter(&[contact], &filter);

        assert_eq!(results.len(), 1);
        // Name 10, email 8, company 7, title 6.
        assert_eq!(results[0].relevance_score, 31.0);
        assert_eq!(results[0].match_reasons.len(), 4);
    }

    #[test]
    fn test_company_filter_weight_and_reason() {
        let contact = ContactBuilder::new("Jane Doe").company("Google Inc.").build();
        let filter = FilterQuery::new().with_company("google");
        let results = RelevanceRanker::new().rank_filter(&[contact], &filter);

        assert_eq!(results[0].relevance_score, 15.0);
        assert_eq!(results[0].match_reasons, vec!["works at google".to_string()]);
    }

    #[test]
    fn test_function_filter_matches_title_and_industry_tag() {
        let contact = ContactBuilder::new("Jane Doe")
            .position("Marketing Manager")
            .tag(Tag::new(
                "Marketing",
                TagCategory::Industry,
                0.9,
                SourceNetwork::LinkedIn,
            ))
            .build();

        let filter = FilterQuery::new().with_function("marketing");
        let results = RelevanceRanker::new().rank_filter(&[contact], &filter);

        // Title 12 plus industry tag 8.
        assert_eq!(results[0].relevance_score, 20.0);
        assert_eq!(
            results[0].match_reasons,
            vec!["works in marketing".to_string(), "tagged marketing".to_string()]
        );
    }

    #[test]
    fn test_combined_filters_are_additive() {
        let both = ContactBuilder::new("Both")
            .company("Stripe")
            .current_location("Austin, TX")
            .build();
        let company_only = ContactBuilder::new("Company Only").company("Stripe").build();

        let filter = FilterQuery::new().with_company("stripe").with_location("austin");
        let results = RelevanceRanker::new().rank_filter(&[company_only, both], &filter);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name(), "Both");
        assert_eq!(results[0].relevance_score, 25.0);
        assert_eq!(results[1].relevance_score, 15.0);
    }

    #[test]
    fn test_non_matching_contacts_are_excluded() {
        let contact = ContactBuilder::new("Jane Doe").company("Acme").build();
        let filter = FilterQuery::new().with_company("globex");
        let results = RelevanceRanker::new().rank_filter(&[contact], &filter);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_filter_never_surfaces_boosted_contacts() {
        let contact = ContactBuilder::new("Jane Doe")
            .facebook_id("fb-1")
            .linkedin_id("li-1")
            .build();
        let results = RelevanceRanker::new().rank_filter(&[contact], &FilterQuery::new());
        assert!(results.is_empty());
    }
}
