//! Natural-language query intent parsing
//!
//! Single-pass keyword matching over the fixed tables in
//! [`super::keywords`]. No external NLP: the vocabulary is small enough that
//! phrase and word-prefix matching cover the queries users actually type.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::keywords::{
    contains_any, keyword_hits, match_category, CITY_SYNONYMS, COMPANY_PHRASES,
    FUNCTION_SYNONYMS, HISTORICAL_MODIFIERS, INTEREST_SYNONYMS, JOB_KEYWORDS,
    NETWORKING_KEYWORDS, PROXIMITY_MODIFIERS, SKILL_KEYWORDS, SKILL_WORDS, TRAVEL_KEYWORDS,
};

lazy_static! {
    /// Capitalized company after a preposition ("at Google", "with Stripe")
    static ref CAPITALIZED_COMPANY: Regex =
        Regex::new(r"\b(at|with|for)\s+([A-Z][a-zA-Z\s&]+)").expect("valid regex");
    /// Company name following "at"
    static ref COMPANY_AFTER_AT: Regex =
        Regex::new(r"(?i)at\s+([a-zA-Z0-9\s]+)").expect("valid regex");
    /// Travel destination after a movement preposition
    static ref DESTINATION: Regex =
        Regex::new(r"(?i)\b(to|in|at|visiting)\s+([a-zA-Z][a-zA-Z\s]+)").expect("valid regex");
}

/// What a query is fundamentally asking for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    /// "visiting Portland next month"
    Travel,
    /// "know someone hiring?"
    JobSearch,
    /// "who can help with marketing"
    SkillHelp,
    /// "connect me with someone"
    Networking,
    /// "who works at Google"
    Company,
    /// "engineers", "designers"
    Function,
    /// "people in Austin"
    Location,
    /// "marketers in SF"
    FunctionLocation,
    /// "anyone into photography"
    Interest,
    /// Anything unrecognized, scored by plain field matching
    General,
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Travel => "travel",
            Self::JobSearch => "job_search",
            Self::SkillHelp => "skill_help",
            Self::Networking => "networking",
            Self::Company => "company",
            Self::Function => "function",
            Self::Location => "location",
            Self::FunctionLocation => "function_location",
            Self::Interest => "interest",
            Self::General => "general",
        };
        write!(f, "{}", label)
    }
}

impl IntentKind {
    /// Parse from a string label, defaulting to General
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "travel" => Self::Travel,
            "job_search" | "jobsearch" => Self::JobSearch,
            "skill_help" | "skillhelp" => Self::SkillHelp,
            "networking" => Self::Networking,
            "company" => Self::Company,
            "function" => Self::Function,
            "location" => Self::Location,
            "function_location" => Self::FunctionLocation,
            "interest" => Self::Interest,
            _ => Self::General,
        }
    }
}

/// Additive query flags; never change the intent kind on their own
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Modifiers {
    /// "near me", "nearby"
    pub proximity: bool,
    /// "former", "used to", "previously": include past positions
    pub historical: bool,
}

/// Parsed understanding of one query
///
/// Produced fresh per search and never mutated afterwards. Slot values are
/// lowercase canonical forms (table categories where one matched, trimmed
/// captures otherwise).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchIntent {
    pub kind: IntentKind,
    pub location: Option<String>,
    pub company: Option<String>,
    pub function: Option<String>,
    pub skill: Option<String>,
    pub interest: Option<String>,
    pub modifiers: Modifiers,
    /// The query as typed, trimmed
    pub raw_query: String,
}

impl SearchIntent {
    /// A general intent carrying only the raw query
    pub fn general<S: Into<String>>(query: S) -> Self {
        Self {
            kind: IntentKind::General,
            location: None,
            company: None,
            function: None,
            skill: None,
            interest: None,
            modifiers: Modifiers::default(),
            raw_query: query.into(),
        }
    }

    /// Whether the intent carries nothing to match on: no query text and no
    /// slot values. The ranker returns an empty result list for these.
    pub fn is_empty(&self) -> bool {
        self.raw_query.trim().is_empty()
            && self.location.is_none()
            && self.company.is_none()
            && self.function.is_none()
            && self.skill.is_none()
            && self.interest.is_none()
    }
}

/// Turns free-text queries into [`SearchIntent`] values
#[derive(Debug, Clone, Default)]
pub struct IntentParser;

impl IntentParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a query.
    ///
    /// Detection order: job function, city, company phrase, interest, then a
    /// free-text fallback layer (travel / job / skill / networking keywords)
    /// that only runs when no structured kind was found, and finally the
    /// modifiers. Within the fallback layer a later keyword family overrides
    /// an earlier one. Pure and deterministic; an empty query yields a
    /// General intent with no slots.
    pub fn parse(&self, query: &str) -> SearchIntent {
        let mut intent = SearchIntent::general(query.trim());
        let lower = intent.raw_query.to_lowercase();
        if lower.is_empty() {
            return intent;
        }

        if let Some(function) = match_category(FUNCTION_SYNONYMS, &lower) {
            intent.function = Some(function.to_string());
            intent.kind = IntentKind::Function;
        }

        if let Some(city) = match_category(CITY_SYNONYMS, &lower) {
            intent.location = Some(city.to_string());
            intent.kind = if intent.kind == IntentKind::Function {
                IntentKind::FunctionLocation
            } else {
                IntentKind::Location
            };
        }

        if contains_any(COMPANY_PHRASES, &lower) || CAPITALIZED_COMPANY.is_match(&intent.raw_query)
        {
            intent.kind = IntentKind::Company;
            intent.company = extract_company(&intent.raw_query);
        }

        if let Some(interest) = match_category(INTEREST_SYNONYMS, &lower) {
            intent.interest = Some(interest.to_string());
            if intent.kind == IntentKind::General {
                intent.kind = IntentKind::Interest;
            }
        }

        if intent.kind == IntentKind::General {
            if contains_any(TRAVEL_KEYWORDS, &lower) {
                intent.kind = IntentKind::Travel;
                intent.location = extract_destination(&intent.raw_query);
            }
            if contains_any(JOB_KEYWORDS, &lower) {
                intent.kind = IntentKind::JobSearch;
                intent.company = extract_company(&intent.raw_query);
            }
            if contains_any(SKILL_KEYWORDS, &lower) {
                intent.kind = IntentKind::SkillHelp;
                intent.skill = SKILL_WORDS
                    .iter()
                    .find(|word| keyword_hits(&lower, word))
                    .map(|word| word.to_string());
            }
            if contains_any(NETWORKING_KEYWORDS, &lower) {
                intent.kind = IntentKind::Networking;
            }
        }

        intent.modifiers.proximity = contains_any(PROXIMITY_MODIFIERS, &lower);
        intent.modifiers.historical = contains_any(HISTORICAL_MODIFIERS, &lower);

        intent
    }
}

/// Company name from "at X" or a capitalized preposition phrase, lowercased
fn extract_company(raw_query: &str) -> Option<String> {
    COMPANY_AFTER_AT
        .captures(raw_query)
        .and_then(|caps| caps.get(1))
        .or_else(|| {
            CAPITALIZED_COMPANY
                .captures(raw_query)
                .and_then(|caps| caps.get(2))
        })
        .map(|m| m.as_str().trim().to_lowercase())
        .filter(|company| !company.is_empty())
}

/// Destination from a travel phrase, lowercased
fn extract_destination(raw_query: &str) -> Option<String> {
    DESTINATION
        .captures(raw_query)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_lowercase())
        .filter(|destination| !destination.is_empty())
}
