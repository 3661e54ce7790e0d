//! The BeeTagged engine facade
//!
//! [`BeeTagged`] wires configuration, the contact store, and the pure
//! components into two pipelines: ingestion (validate, auto-tag, group
//! duplicates, resolve, persist) and query (parse, rank, explain). The
//! facade owns no matching logic of its own; everything it does is a
//! composition of the component modules.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::BeeConfig;
use crate::conflict::{detect_all_conflicts, ConflictQuestion, SourceProfile};
use crate::matching::{
    resolve_duplicates, DuplicateDetector, DuplicateResolution, LinkMatch, ProfileLinker,
};
use crate::models::Contact;
use crate::search::{
    explain, suggest, FilterQuery, IntentParser, MatchResult, RelevanceRanker, SearchIntent,
    SmartSuggestions,
};
use crate::store::{ContactStore, InMemoryContactStore};
use crate::tags::apply_auto_tags;
use crate::{BeeError, Result};

/// Outcome counts for one import batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Contacts persisted after duplicate resolution
    pub imported: usize,

    /// Contacts folded into a surviving record by consolidation
    pub merged: usize,

    /// Records dropped because they could not be indexed
    pub skipped: usize,

    /// Duplicate groups found in the batch
    pub duplicate_groups: usize,
}

/// A ranked search outcome with its intent and presentation text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The query as submitted
    pub query: String,

    /// The parsed intent the results were ranked against
    pub intent: SearchIntent,

    /// Ranked matches, best first
    pub results: Vec<MatchResult>,

    /// Convenience count of `results`
    pub result_count: usize,

    /// One-line summary of what was searched and found
    pub explanation: String,

    /// Follow-up query suggestions
    pub suggestions: Vec<String>,
}

/// Contact search and relevance-ranking engine
#[derive(Debug)]
pub struct BeeTagged {
    config: BeeConfig,
    store: Arc<dyn ContactStore>,
    parser: IntentParser,
    ranker: RelevanceRanker,
    detector: DuplicateDetector,
    linker: ProfileLinker,
}

impl BeeTagged {
    /// Create an engine backed by the in-memory store.
    pub fn new(config: BeeConfig) -> Result<Self> {
        Self::with_store(config, Arc::new(InMemoryContactStore::new()))
    }

    /// Create an engine backed by a caller-provided store.
    pub fn with_store(config: BeeConfig, store: Arc<dyn ContactStore>) -> Result<Self> {
        config.validate()?;

        let ranker = RelevanceRanker::from_config(&config.search);
        let detector = DuplicateDetector::with_threshold(config.matching.name_overlap_threshold);
        let linker = ProfileLinker::with_fuzzy_threshold(config.matching.fuzzy_link_threshold);

        info!(
            result_limit = config.search.result_limit,
            "initialized BeeTagged engine"
        );

        Ok(Self {
            config,
            store,
            parser: IntentParser::new(),
            ranker,
            detector,
            linker,
        })
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &BeeConfig {
        &self.config
    }

    /// Import a batch of contacts.
    ///
    /// Records without a name are skipped with a warning rather than
    /// failing the batch. Survivors are enriched with auto-generated tags,
    /// grouped by the duplicate detector, resolved per `resolution`, and
    /// persisted. Consolidation merges each group into one record; the
    /// other resolutions keep every record.
    pub async fn import_contacts(
        &self,
        contacts: Vec<Contact>,
        resolution: DuplicateResolution,
    ) -> Result<ImportReport> {
        let batch_size = contacts.len();
        info!(batch = batch_size, resolution = %resolution, "importing contacts");

        if batch_size > self.config.matching.max_batch_size {
            warn!(
                batch = batch_size,
                max = self.config.matching.max_batch_size,
                "import batch exceeds configured maximum"
            );
        }

        let mut valid = Vec::with_capacity(batch_size);
        let mut skipped = 0usize;
        for mut contact in contacts {
            if !contact.has_name() {
                skipped += 1;
                warn!(contact_id = %contact.id, "skipping contact without a name");
                continue;
            }
            apply_auto_tags(&mut contact);
            valid.push(contact);
        }

        let groups = self.detector.detect(&valid);
        let merged = match resolution {
            DuplicateResolution::Consolidate => {
                groups.iter().map(|group| group.len() - 1).sum()
            }
            DuplicateResolution::Separate | DuplicateResolution::Review => 0,
        };
        let duplicate_groups = groups.len();
        let resolved = resolve_duplicates(valid, &groups, resolution);

        let imported = resolved.len();
        self.store.save_batch(resolved).await?;

        let report = ImportReport {
            imported,
            merged,
            skipped,
            duplicate_groups,
        };
        info!(
            imported = report.imported,
            merged = report.merged,
            skipped = report.skipped,
            duplicate_groups = report.duplicate_groups,
            "import complete"
        );
        Ok(report)
    }

    /// Add a single contact, enriching it with auto-generated tags.
    pub async fn add_contact(&self, mut contact: Contact) -> Result<Contact> {
        if !contact.has_name() {
            return Err(BeeError::InvalidContact(contact.id));
        }
        apply_auto_tags(&mut contact);
        Ok(self.store.save(contact).await?)
    }

    /// Look up a contact by ID.
    pub async fn contact(&self, id: &str) -> Result<Option<Contact>> {
        Ok(self.store.get(id).await?)
    }

    /// Free-text search over every stored contact.
    ///
    /// Parses the query into an intent, ranks all contacts against it, and
    /// wraps the results with an explanation and suggestions. A query that
    /// matches nothing returns an empty result list, never an error.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let intent = self.parser.parse(query);
        self.search_with_intent(&intent).await
    }

    /// Search with a caller-constructed intent, bypassing the parser.
    pub async fn search_with_intent(&self, intent: &SearchIntent) -> Result<SearchResponse> {
        let contacts = self.store.all().await?;
        let results = self.ranker.rank(&contacts, intent);
        let result_count = results.len();

        info!(
            query = %intent.raw_query,
            intent = %intent.kind,
            results = result_count,
            "search complete"
        );

        Ok(SearchResponse {
            query: intent.raw_query.clone(),
            intent: intent.clone(),
            results,
            result_count,
            explanation: explain(intent, result_count),
            suggestions: suggest(intent),
        })
    }

    /// Structured filter search over every stored contact.
    pub async fn filter_search(&self, filter: &FilterQuery) -> Result<Vec<MatchResult>> {
        let contacts = self.store.all().await?;
        Ok(self.ranker.rank_filter(&contacts, filter))
    }

    /// Data-derived starting points for queries.
    pub async fn smart_suggestions(&self) -> Result<SmartSuggestions> {
        let contacts = self.store.all().await?;
        Ok(crate::search::smart_suggestions(&contacts))
    }

    /// Compare two source profiles of one person and surface conflicts.
    pub fn detect_conflicts(
        &self,
        facebook: &SourceProfile,
        linkedin: &SourceProfile,
        contact_name: &str,
    ) -> Vec<ConflictQuestion> {
        detect_all_conflicts(facebook, linkedin, contact_name)
    }

    /// Match incoming profiles against every stored contact.
    pub async fn link_profiles(&self, incoming: &[Contact]) -> Result<Vec<LinkMatch>> {
        let existing = self.store.all().await?;
        Ok(self.linker.link(incoming, &existing))
    }

    /// Number of stored contacts.
    pub async fn contact_count(&self) -> Result<usize> {
        Ok(self.store.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactBuilder;

    fn engine() -> BeeTagged {
        BeeTagged::new(BeeConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_import_skips_invalid_and_reports() {
        let bee = engine();
        let report = bee
            .import_contacts(
                vec![
                    ContactBuilder::new("Ada Stern").company("Stripe").build(),
                    ContactBuilder::new("   ").build(),
                ],
                DuplicateResolution::Consolidate,
            )
            .await
            .unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.merged, 0);
        assert_eq!(bee.contact_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_import_consolidates_duplicates() {
        let bee = engine();
        let report = bee
            .import_contacts(
                vec![
                    ContactBuilder::new("Jane Doe").email("jane@example.com").build(),
                    ContactBuilder::new("jane doe").email("jane@example.com").phone("555-0100").build(),
                    ContactBuilder::new("Someone Else").build(),
                ],
                DuplicateResolution::Consolidate,
            )
            .await
            .unwrap();

        assert_eq!(report.imported, 2);
        assert_eq!(report.merged, 1);
        assert_eq!(report.duplicate_groups, 1);
        assert_eq!(bee.contact_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_import_separate_keeps_duplicates() {
        let bee = engine();
        let report = bee
            .import_contacts(
                vec![
                    ContactBuilder::new("Jane Doe").email("jane@example.com").build(),
                    ContactBuilder::new("Jane Doe").email("jane@example.com").build(),
                ],
                DuplicateResolution::Separate,
            )
            .await
            .unwrap();

        assert_eq!(report.imported, 2);
        assert_eq!(report.merged, 0);
        assert_eq!(report.duplicate_groups, 1);
    }

    #[tokio::test]
    async fn test_search_end_to_end() {
        let bee = engine();
        bee.import_contacts(
            vec![
                ContactBuilder::new("Ada Stern").company("Google Inc.").build(),
                ContactBuilder::new("Bob Ray").company("Globex").build(),
            ],
            DuplicateResolution::Consolidate,
        )
        .await
        .unwrap();

        let response = bee.search("who works at Google").await.unwrap();
        assert_eq!(response.result_count, 1);
        assert_eq!(response.results[0].name(), "Ada Stern");
        assert!(response.explanation.contains("who work at google"));
        assert!(!response.results[0].match_reasons.is_empty());
    }

    #[tokio::test]
    async fn test_search_empty_store_is_empty_response() {
        let bee = engine();
        let response = bee.search("engineers in Austin").await.unwrap();
        assert_eq!(response.result_count, 0);
        assert!(response.results.is_empty());
        assert!(response.explanation.starts_with("Found 0 contacts"));
    }

    #[tokio::test]
    async fn test_add_contact_rejects_nameless() {
        let bee = engine();
        let result = bee.add_contact(ContactBuilder::new("  ").build()).await;
        assert!(matches!(result, Err(BeeError::InvalidContact(_))));
    }

    #[tokio::test]
    async fn test_add_contact_auto_tags() {
        let bee = engine();
        let saved = bee
            .add_contact(
                ContactBuilder::new("Ada Stern")
                    .company("Stripe")
                    .location("Seattle, WA")
                    .build(),
            )
            .await
            .unwrap();

        assert!(saved.last_auto_tagged.is_some());
        assert!(!saved.tags.is_empty());
    }

    #[tokio::test]
    async fn test_filter_search_through_facade() {
        let bee = engine();
        bee.import_contacts(
            vec![ContactBuilder::new("Ada Stern").company("Stripe").build()],
            DuplicateResolution::Consolidate,
        )
        .await
        .unwrap();

        let results = bee
            .filter_search(&FilterQuery::new().with_company("stripe"))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = BeeConfig {
            search: crate::config::SearchConfig {
                result_limit: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(BeeTagged::new(config).is_err());
    }
}
