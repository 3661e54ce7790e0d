//! Multi-signal relevance ranking
//!
//! Scoring is additive across independent weighted signals. Every signal
//! that fires appends both to the numeric score and to `match_reasons`; a
//! score never moves without an explanation the product surface can show.
//! Contacts whose final score is not positive are excluded entirely.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::index::ContactIndex;
use super::intent::{IntentKind, SearchIntent};
use super::keywords::{
    keyword_hits, synonyms_for, CITY_SYNONYMS, FUNCTION_SYNONYMS, INTEREST_SYNONYMS,
};
use super::scoring::{FilterWeights, RankingWeights};
use crate::config::SearchConfig;
use crate::models::{Contact, TagCategory};

/// Default cap on returned results
pub const DEFAULT_RESULT_LIMIT: usize = 50;
/// Days since last interaction inside which a contact counts as recent
pub const DEFAULT_RECENT_INTERACTION_DAYS: i64 = 90;
/// Days since last enrichment inside which a contact counts as fresh
pub const DEFAULT_RECENT_ENRICHMENT_DAYS: i64 = 30;

/// Mutual friends above this count as well connected
const MUTUAL_FRIENDS_FLOOR: u32 = 5;
/// Connections above this count as a large network
const CONNECTIONS_FLOOR: u32 = 500;
/// Interactions above this count as frequent contact
const INTERACTIONS_FLOOR: u32 = 3;

/// One ranked search hit
///
/// Ephemeral, recomputed per search. Serializes flat with camelCase keys
/// (`relevanceScore`, `matchReasons`) for presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub contact: Contact,
    /// Strictly positive; results that would score zero are dropped
    pub relevance_score: f64,
    /// Why the contact matched, in signal order
    pub match_reasons: Vec<String>,
    /// The contact's stored cross-network match confidence, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl MatchResult {
    pub fn id(&self) -> &str {
        &self.contact.id
    }

    pub fn name(&self) -> &str {
        &self.contact.name
    }
}

/// Scores and orders contacts against a parsed intent
#[derive(Debug, Clone)]
pub struct RelevanceRanker {
    weights: RankingWeights,
    result_limit: usize,
    recent_interaction_days: i64,
    recent_enrichment_days: i64,
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl RelevanceRanker {
    /// Ranker with the default weight table and limits
    pub fn new() -> Self {
        Self {
            weights: RankingWeights::default(),
            result_limit: DEFAULT_RESULT_LIMIT,
            recent_interaction_days: DEFAULT_RECENT_INTERACTION_DAYS,
            recent_enrichment_days: DEFAULT_RECENT_ENRICHMENT_DAYS,
        }
    }

    /// Ranker driven by a search configuration section
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            weights: config.weights.clone(),
            result_limit: config.result_limit,
            recent_interaction_days: config.recent_interaction_days,
            recent_enrichment_days: config.recent_enrichment_days,
        }
    }

    /// Override the result cap
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    pub(super) fn filter_weights(&self) -> &FilterWeights {
        &self.weights.filter
    }

    /// Rank contacts against an intent.
    ///
    /// Returns results sorted by descending score, ties broken by ascending
    /// name, capped at the configured limit. Deterministic for a fixed
    /// clock: the same contacts and intent always produce the same list.
    /// An empty contact slice or an empty intent yields an empty vec.
    pub fn rank(&self, contacts: &[Contact], intent: &SearchIntent) -> Vec<MatchResult> {
        if intent.is_empty() {
            return Vec::new();
        }

        let now = Utc::now();
        let query_lower = intent.raw_query.trim().to_lowercase();

        let results = contacts
            .iter()
            .filter_map(|contact| self.score_contact(contact, intent, &query_lower, now))
            .collect();
        let results = self.finalize(results);

        debug!(
            intent = %intent.kind,
            candidates = contacts.len(),
            results = results.len(),
            "ranked contacts"
        );
        results
    }

    /// Sort by score descending, name ascending, and cap
    pub(super) fn finalize(&self, mut results: Vec<MatchResult>) -> Vec<MatchResult> {
        results.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.contact.name.cmp(&b.contact.name))
        });
        results.truncate(self.result_limit);
        results
    }

    pub(super) fn result_for(
        &self,
        contact: &Contact,
        score: f64,
        reasons: Vec<String>,
    ) -> Option<MatchResult> {
        if score > 0.0 {
            Some(MatchResult {
                contact: contact.clone(),
                relevance_score: score,
                match_reasons: reasons,
                confidence: contact.match_confidence,
            })
        } else {
            None
        }
    }

    fn score_contact(
        &self,
        contact: &Contact,
        intent: &SearchIntent,
        query_lower: &str,
        now: DateTime<Utc>,
    ) -> Option<MatchResult> {
        let index = ContactIndex::build(contact);
        let mut score = 0.0;
        let mut reasons = Vec::new();
        let historical = intent.modifiers.historical;

        match intent.kind {
            IntentKind::Travel => match intent.location.as_deref() {
                Some(location) => self.score_travel(&index, location, &mut score, &mut reasons),
                None => self.score_general(&index, query_lower, &mut score, &mut reasons),
            },
            IntentKind::JobSearch | IntentKind::Company => match intent.company.as_deref() {
                Some(company) => {
                    self.score_job(&index, company, historical, &mut score, &mut reasons)
                }
                None => self.score_general(&index, query_lower, &mut score, &mut reasons),
            },
            IntentKind::SkillHelp => match intent.skill.as_deref() {
                Some(skill) => self.score_skill(&index, skill, &mut score, &mut reasons),
                None => self.score_general(&index, query_lower, &mut score, &mut reasons),
            },
            IntentKind::Networking => self.score_networking(&index, &mut score, &mut reasons),
            IntentKind::Function => match intent.function.as_deref() {
                Some(function) => {
                    self.score_function(&index, function, historical, &mut score, &mut reasons)
                }
                None => self.score_general(&index, query_lower, &mut score, &mut reasons),
            },
            IntentKind::Location => match intent.location.as_deref() {
                Some(location) => self.score_location(&index, location, &mut score, &mut reasons),
                None => self.score_general(&index, query_lower, &mut score, &mut reasons),
            },
            IntentKind::FunctionLocation => {
                if intent.function.is_none() && intent.location.is_none() {
                    self.score_general(&index, query_lower, &mut score, &mut reasons);
                } else {
                    if let Some(function) = intent.function.as_deref() {
                        self.score_function(&index, function, historical, &mut score, &mut reasons);
                    }
                    if let Some(location) = intent.location.as_deref() {
                        self.score_location(&index, location, &mut score, &mut reasons);
                    }
                }
            }
            IntentKind::Interest => match intent.interest.as_deref() {
                Some(interest) => self.score_interest(&index, interest, &mut score, &mut reasons),
                None => self.score_general(&index, query_lower, &mut score, &mut reasons),
            },
            IntentKind::General => self.score_general(&index, query_lower, &mut score, &mut reasons),
        }

        self.apply_boosts(&index, now, &mut score, &mut reasons);
        self.result_for(contact, score, reasons)
    }

    fn score_travel(
        &self,
        index: &ContactIndex<'_>,
        location: &str,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        if ContactIndex::field_contains(&index.current_location, location) {
            *score += self.weights.travel.current_location;
            reasons.push(format!("lives in {}", location));
        }
        if ContactIndex::field_contains(&index.hometown, location) {
            *score += self.weights.travel.hometown;
            reasons.push(format!("from {}", location));
        }
        if !location.is_empty() && index.work_locations.iter().any(|l| l.contains(location)) {
            *score += self.weights.travel.work_history;
            reasons.push(format!("worked in {}", location));
        }
        if index.matching_tags(location, |c| *c == TagCategory::Location) > 0 {
            *score += self.weights.travel.location_tag;
            reasons.push(format!("tagged near {}", location));
        }
    }

    fn score_job(
        &self,
        index: &ContactIndex<'_>,
        company: &str,
        historical: bool,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        if !historical && ContactIndex::field_contains(&index.company, company) {
            *score += self.weights.job.current_company;
            reasons.push(format!("works at {}", company));
        }

        if !company.is_empty() {
            let history_hits = index
                .history_employers
                .iter()
                .filter(|employer| employer.contains(company))
                .count();
            if history_hits > 0 {
                *score += self.weights.job.history_company * history_hits as f64;
                reasons.push(format!("previously at {}", company));
            }
        }

        if !historical && index.matching_tags(company, TagCategory::is_professional) > 0 {
            *score += self.weights.job.professional_tag;
            reasons.push(format!("tagged {}", company));
        }
    }

    fn score_skill(
        &self,
        index: &ContactIndex<'_>,
        skill: &str,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        if skill.is_empty() {
            return;
        }

        let skill_hits = index.skills.iter().filter(|s| s.contains(skill)).count();
        if skill_hits > 0 {
            *score += self.weights.skill.skill * skill_hits as f64;
            reasons.push(format!("knows {}", skill));
        }
        if ContactIndex::field_contains(&index.title, skill) {
            *score += self.weights.skill.job_title;
            reasons.push(format!("{} professional", skill));
        }
        let tag_hits = index.matching_tags(skill, |c| *c == TagCategory::Skill);
        if tag_hits > 0 {
            *score += self.weights.skill.skill_tag * tag_hits as f64;
            reasons.push(format!("tagged {}", skill));
        }
    }

    fn score_networking(
        &self,
        index: &ContactIndex<'_>,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        let social = &index.contact.social;
        if social.mutual_friends.unwrap_or(0) > MUTUAL_FRIENDS_FLOOR {
            *score += self.weights.networking.mutual_friends;
            reasons.push("well connected".to_string());
        }
        if social.connections.unwrap_or(0) > CONNECTIONS_FLOOR {
            *score += self.weights.networking.connections;
            reasons.push("large network".to_string());
        }
        if social.interaction_count > INTERACTIONS_FLOOR {
            *score += self.weights.networking.interactions;
            reasons.push("frequent contact".to_string());
        }
    }

    fn score_function(
        &self,
        index: &ContactIndex<'_>,
        function: &str,
        historical: bool,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        let patterns = synonyms_for(FUNCTION_SYNONYMS, function);

        if historical {
            let matched = index.history_functions.iter().any(|role| {
                role.contains(function) || patterns.iter().any(|p| keyword_hits(role, p))
            });
            if matched {
                *score += self.weights.function_role;
                reasons.push(format!("Previous role: {}", function));
            }
            return;
        }

        let matched = index.current_function.contains(function)
            || patterns.iter().any(|p| keyword_hits(&index.current_function, p));
        if !index.current_function.is_empty() && matched {
            *score += self.weights.function_role;
            reasons.push(format!("Current role: {}", index.current_function_display));
        }
    }

    fn score_location(
        &self,
        index: &ContactIndex<'_>,
        location: &str,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        if index.current_location.is_empty() || location.is_empty() {
            return;
        }
        let patterns = synonyms_for(CITY_SYNONYMS, location);
        let matched = index.current_location.contains(location)
            || patterns.iter().any(|p| keyword_hits(&index.current_location, p));
        if matched {
            *score += self.weights.location_match;
            reasons.push(format!("Located in: {}", index.current_location_display));
        }
    }

    fn score_interest(
        &self,
        index: &ContactIndex<'_>,
        interest: &str,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        if interest.is_empty() {
            return;
        }
        let patterns = synonyms_for(INTEREST_SYNONYMS, interest);

        let shared = index
            .interests
            .iter()
            .filter(|entry| {
                entry.contains(interest) || patterns.iter().any(|p| keyword_hits(entry, p))
            })
            .count();
        if shared > 0 {
            *score += self.weights.interest.shared * shared as f64;
            reasons.push(format!("shares {}", interest));
        }

        let tagged = index.tags.iter().any(|(value, category)| {
            *category == TagCategory::Interest
                && (value.contains(interest) || patterns.iter().any(|p| keyword_hits(value, p)))
        });
        if tagged {
            *score += self.weights.interest.tag;
            reasons.push(format!("tagged {}", interest));
        }
    }

    pub(super) fn score_general(
        &self,
        index: &ContactIndex<'_>,
        query_lower: &str,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        if query_lower.is_empty() {
            return;
        }

        if index.name.contains(query_lower) {
            *score += self.weights.general.name;
            reasons.push("matches name".to_string());
        }
        if ContactIndex::field_contains(&index.company, query_lower) {
            *score += self.weights.general.company;
            reasons.push("matches company".to_string());
        }
        if ContactIndex::field_contains(&index.title, query_lower) {
            *score += self.weights.general.job_title;
            reasons.push("matches job title".to_string());
        }
        let tag_hits = index.any_tag_matches(query_lower);
        if tag_hits > 0 {
            *score += self.weights.general.tag * tag_hits as f64;
            reasons.push("matches tags".to_string());
        }
    }

    pub(super) fn apply_boosts(
        &self,
        index: &ContactIndex<'_>,
        now: DateTime<Utc>,
        score: &mut f64,
        reasons: &mut Vec<String>,
    ) {
        let contact = index.contact;

        if contact.facebook_id.is_some() {
            *score += self.weights.boost.facebook_profile;
            reasons.push("Facebook profile linked".to_string());
        }
        if contact.linkedin_id.is_some() {
            *score += self.weights.boost.linkedin_profile;
            reasons.push("LinkedIn profile linked".to_string());
        }
        if let Some(confidence) = contact.match_confidence {
            if confidence > 0.0 {
                *score += confidence * self.weights.boost.match_confidence_factor;
                reasons.push("verified cross-network match".to_string());
            }
        }
        if let Some(last) = contact.last_interaction {
            if now - last <= Duration::days(self.recent_interaction_days) {
                *score += self.weights.boost.recent_interaction;
                reasons.push("recent interaction".to_string());
            }
        }
        if let Some(last) = contact.last_enriched {
            if now - last <= Duration::days(self.recent_enrichment_days) {
                *score += self.weights.boost.recent_enrichment;
                reasons.push("recently updated".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactBuilder, EmploymentRecord, SourceNetwork, Tag};
    use crate::search::intent::Modifiers;

    fn company_intent(company: &str) -> SearchIntent {
        SearchIntent {
            kind: IntentKind::Company,
            company: Some(company.to_string()),
            ..SearchIntent::general("who works at ".to_string() + company)
        }
    }

    fn travel_intent(location: &str) -> SearchIntent {
        SearchIntent {
            kind: IntentKind::Travel,
            location: Some(location.to_string()),
            ..SearchIntent::general("visiting ".to_string() + location)
        }
    }

    #[test]
    fn test_company_substring_match_scores_and_explains() {
        let contacts = vec![ContactBuilder::new("Jane Doe").company("Google Inc.").build()];
        let results = RelevanceRanker::new().rank(&contacts, &company_intent("google"));

        assert_eq!(results.len(), 1);
        assert!(results[0].relevance_score > 0.0);
        assert!(results[0]
            .match_reasons
            .iter()
            .any(|reason| reason.contains("google")));
    }

    #[test]
    fn test_empty_contact_list_is_empty_result() {
        let results = RelevanceRanker::new().rank(&[], &company_intent("google"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_intent_is_empty_result_even_with_boostable_contacts() {
        let contacts = vec![
            ContactBuilder::new("Jane Doe")
                .facebook_id("fb-1")
                .linkedin_id("li-1")
                .build(),
        ];
        let results = RelevanceRanker::new().rank(&contacts, &SearchIntent::general(""));
        assert!(results.is_empty());
    }

    #[test]
    fn test_zero_signal_contacts_are_excluded() {
        let contacts = vec![ContactBuilder::new("Jane Doe").company("Acme").build()];
        let results = RelevanceRanker::new().rank(&contacts, &company_intent("google"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_travel_current_location_outranks_hometown() {
        let contacts = vec![
            ContactBuilder::new("Homer").hometown("Austin").build(),
            ContactBuilder::new("Resident").current_location("Austin, TX").build(),
        ];
        let results = RelevanceRanker::new().rank(&contacts, &travel_intent("austin"));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name(), "Resident");
        assert!(results[0].relevance_score > results[1].relevance_score);
        assert_eq!(results[0].match_reasons, vec!["lives in austin".to_string()]);
        assert_eq!(results[1].match_reasons, vec!["from austin".to_string()]);
    }

    #[test]
    fn test_ties_break_by_name_ascending() {
        let contacts = vec![
            ContactBuilder::new("Zoe").company("Stripe").build(),
            ContactBuilder::new("Ada").company("Stripe").build(),
        ];
        let results = RelevanceRanker::new().rank(&contacts, &company_intent("stripe"));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name(), "Ada");
        assert_eq!(results[1].name(), "Zoe");
    }

    #[test]
    fn test_result_limit_caps_output() {
        let contacts: Vec<_> = (0..10)
            .map(|i| ContactBuilder::new(format!("Person {:02}", i)).company("Stripe").build())
            .collect();
        let results = RelevanceRanker::new()
            .with_limit(3)
            .rank(&contacts, &company_intent("stripe"));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_history_company_counts_per_record() {
        let contact = ContactBuilder::new("Jane Doe")
            .past_employment(EmploymentRecord {
                employer: "Google".to_string(),
                end_year: Some(2018),
                ..Default::default()
            })
            .past_employment(EmploymentRecord {
                employer: "Google X".to_string(),
                end_year: Some(2021),
                ..Default::default()
            })
            .build();

        let results = RelevanceRanker::new().rank(&[contact], &company_intent("google"));
        assert_eq!(results.len(), 1);
        // Two history records at 15 each.
        assert_eq!(results[0].relevance_score, 30.0);
        assert_eq!(
            results[0].match_reasons,
            vec!["previously at google".to_string()]
        );
    }

    #[test]
    fn test_historical_modifier_restricts_to_history() {
        let current = ContactBuilder::new("Current Carol").company("Google").build();
        let former = ContactBuilder::new("Former Fred")
            .past_employment(EmploymentRecord {
                employer: "Google".to_string(),
                end_year: Some(2019),
                ..Default::default()
            })
            .build();

        let mut intent = company_intent("google");
        intent.modifiers = Modifiers {
            historical: true,
            ..Default::default()
        };

        let results = RelevanceRanker::new().rank(&[current, former], &intent);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "Former Fred");
    }

    #[test]
    fn test_function_intent_matches_synonyms() {
        let contact = ContactBuilder::new("Jane Doe")
            .current_employment(EmploymentRecord {
                employer: "Acme".to_string(),
                job_function: Some("Software Engineering".to_string()),
                ..Default::default()
            })
            .build();

        let intent = SearchIntent {
            kind: IntentKind::Function,
            function: Some("engineering".to_string()),
            ..SearchIntent::general("engineers")
        };

        let results = RelevanceRanker::new().rank(&[contact], &intent);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].match_reasons,
            vec!["Current role: Software Engineering".to_string()]
        );
    }

    #[test]
    fn test_function_location_scores_both() {
        let contact = ContactBuilder::new("Jane Doe")
            .position("Marketing Manager")
            .current_location("Austin, TX")
            .build();

        let intent = SearchIntent {
            kind: IntentKind::FunctionLocation,
            function: Some("marketing".to_string()),
            location: Some("austin".to_string()),
            ..SearchIntent::general("marketing in austin")
        };

        let results = RelevanceRanker::new().rank(&[contact], &intent);
        assert_eq!(results.len(), 1);
        // Role 10 plus location 8.
        assert_eq!(results[0].relevance_score, 18.0);
        assert_eq!(results[0].match_reasons.len(), 2);
    }

    #[test]
    fn test_networking_thresholds_are_strict() {
        let well_connected = ContactBuilder::new("Hub")
            .mutual_friends(6)
            .interaction_count(4)
            .build();
        let at_floor = ContactBuilder::new("Edge").mutual_friends(5).build();

        let intent = SearchIntent {
            kind: IntentKind::Networking,
            ..SearchIntent::general("connect me")
        };

        let results = RelevanceRanker::new().rank(&[well_connected, at_floor], &intent);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "Hub");
        assert_eq!(
            results[0].match_reasons,
            vec!["well connected".to_string(), "frequent contact".to_string()]
        );
    }

    #[test]
    fn test_skill_intent_per_item_weights() {
        let contact = ContactBuilder::new("Jane Doe")
            .skill("programming")
            .skill("systems programming")
            .position("Programming Lead")
            .build();

        let intent = SearchIntent {
            kind: IntentKind::SkillHelp,
            skill: Some("programming".to_string()),
            ..SearchIntent::general("help with programming")
        };

        let results = RelevanceRanker::new().rank(&[contact], &intent);
        // Two skills at 10 each plus the title match at 12.
        assert_eq!(results[0].relevance_score, 32.0);
        assert!(results[0]
            .match_reasons
            .contains(&"programming professional".to_string()));
    }

    #[test]
    fn test_interest_intent_matches_synonyms() {
        let contact = ContactBuilder::new("Jane Doe").interest("playing guitar").build();
        let intent = SearchIntent {
            kind: IntentKind::Interest,
            interest: Some("music".to_string()),
            ..SearchIntent::general("anyone into music")
        };

        let results = RelevanceRanker::new().rank(&[contact], &intent);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_reasons, vec!["shares music".to_string()]);
    }

    #[test]
    fn test_general_intent_scores_fields_and_tags() {
        let contact = ContactBuilder::new("Stripe Fan")
            .company("Stripe")
            .tag(Tag::new("Stripe", TagCategory::Company, 0.9, SourceNetwork::Csv))
            .build();

        let intent = SearchIntent::general("stripe");
        let results = RelevanceRanker::new().rank(&[contact], &intent);
        // Name 10, company 8, one tag at 5.
        assert_eq!(results[0].relevance_score, 23.0);
        assert_eq!(results[0].match_reasons.len(), 3);
    }

    #[test]
    fn test_boosts_add_to_intent_score() {
        let contact = ContactBuilder::new("Jane Doe")
            .company("Stripe")
            .facebook_id("fb-1")
            .linkedin_id("li-1")
            .match_confidence(0.8)
            .build();

        let results = RelevanceRanker::new().rank(&[contact], &company_intent("stripe"));
        // Company 20 plus boosts 2 + 2 + 0.8 * 3.
        assert!((results[0].relevance_score - 26.4).abs() < 1e-9);
        assert!(results[0]
            .match_reasons
            .contains(&"verified cross-network match".to_string()));
    }

    #[test]
    fn test_enrichment_boosts_alone_can_surface_contact() {
        // Documented behavior: cross-cutting boosts are part of the additive
        // sum, so an enriched contact clears the positive-score filter even
        // when the intent itself found nothing.
        let contact = ContactBuilder::new("Jane Doe").facebook_id("fb-1").build();
        let results = RelevanceRanker::new().rank(&[contact], &company_intent("globex"));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].relevance_score, 2.0);
        assert_eq!(
            results[0].match_reasons,
            vec!["Facebook profile linked".to_string()]
        );
    }

    #[test]
    fn test_recent_interaction_boost_window() {
        let recent = ContactBuilder::new("Recent")
            .company("Stripe")
            .last_interaction(Utc::now() - Duration::days(10))
            .build();
        let stale = ContactBuilder::new("Stale")
            .company("Stripe")
            .last_interaction(Utc::now() - Duration::days(120))
            .build();

        let results = RelevanceRanker::new().rank(&[recent, stale], &company_intent("stripe"));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name(), "Recent");
        assert!(results[0].match_reasons.contains(&"recent interaction".to_string()));
        assert!(!results[1].match_reasons.contains(&"recent interaction".to_string()));
    }

    #[test]
    fn test_every_result_has_reasons_and_positive_score() {
        let contacts = vec![
            ContactBuilder::new("A").company("Google").build(),
            ContactBuilder::new("B")
                .past_employment(EmploymentRecord {
                    employer: "Google".to_string(),
                    end_year: Some(2020),
                    ..Default::default()
                })
                .build(),
            ContactBuilder::new("C").tag(Tag::new(
                "Google",
                TagCategory::Company,
                0.9,
                SourceNetwork::Csv,
            )).build(),
            ContactBuilder::new("D").company("Unrelated").build(),
        ];

        let results = RelevanceRanker::new().rank(&contacts, &company_intent("google"));
        assert_eq!(results.len(), 3);
        for result in &results {
            assert!(result.relevance_score > 0.0);
            assert!(!result.match_reasons.is_empty());
        }
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let contacts: Vec<_> = (0..20)
            .map(|i| {
                ContactBuilder::new(format!("Person {:02}", i))
                    .company(if i % 2 == 0 { "Google" } else { "Google Cloud" })
                    .build()
            })
            .collect();

        let ranker = RelevanceRanker::new();
        let intent = company_intent("google");
        let first: Vec<String> = ranker.rank(&contacts, &intent).iter().map(|r| r.id().to_string()).collect();
        let second: Vec<String> = ranker.rank(&contacts, &intent).iter().map(|r| r.id().to_string()).collect();
        assert_eq!(first, second);
    }
}
