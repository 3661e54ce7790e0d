//! Natural-language contact search
//!
//! The pipeline has three stages: [`IntentParser`] classifies a raw query
//! into a [`SearchIntent`], [`RelevanceRanker`] scores every contact
//! against that intent, and [`explain`]/[`suggest`] turn the outcome into
//! text a person can act on. [`FilterQuery`] bypasses parsing for callers
//! with structured criteria. All stages are pure: same inputs, same
//! output, no errors.

pub mod explain;
pub mod filter;
mod index;
pub mod intent;
pub mod keywords;
pub mod ranker;
pub mod scoring;

pub use explain::{explain, smart_suggestions, suggest, SmartSuggestions};
pub use filter::FilterQuery;
pub use intent::{IntentKind, IntentParser, Modifiers, SearchIntent};
pub use ranker::{MatchResult, RelevanceRanker, DEFAULT_RESULT_LIMIT};
pub use scoring::RankingWeights;
