//! Keyword vocabulary for query understanding
//!
//! Fixed synonym tables keyed by canonical category. Entries with spaces
//! or punctuation match as lowercase substrings; bare words match at word
//! starts only, so short abbreviations like "la" cannot fire inside "play".
//! The first table row with any hit wins, so broader categories belong
//! earlier in a table.

/// Job function categories and the words users actually type for them
pub const FUNCTION_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "marketing",
        &["marketing", "marketer", "growth", "brand", "campaign", "digital marketing"],
    ),
    (
        "engineering",
        &["engineer", "developer", "programmer", "software", "tech", "coding"],
    ),
    ("design", &["designer", "ux", "ui", "creative", "visual", "graphic"]),
    ("sales", &["sales", "account", "business development", "bd", "revenue"]),
    ("product", &["product", "pm", "product manager", "product owner"]),
    ("finance", &["finance", "accounting", "financial", "analyst", "cfo"]),
    ("operations", &["operations", "ops", "logistics", "supply chain"]),
    ("hr", &["hr", "human resources", "people", "recruiting", "talent"]),
    (
        "management",
        &["manager", "director", "vp", "ceo", "executive", "lead"],
    ),
];

/// Cities and their common abbreviations and neighborhoods
pub const CITY_SYNONYMS: &[(&str, &[&str])] = &[
    ("austin", &["austin", "atx", "austin tx", "austin texas"]),
    ("san francisco", &["sf", "san francisco", "san fran", "bay area"]),
    ("new york", &["nyc", "new york", "manhattan", "brooklyn"]),
    ("los angeles", &["la", "los angeles", "hollywood", "santa monica"]),
    ("seattle", &["seattle", "bellevue", "redmond"]),
    ("chicago", &["chicago", "chi town"]),
    ("boston", &["boston", "cambridge", "somerville"]),
];

/// Interest categories and representative activities
pub const INTEREST_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "sports",
        &["basketball", "football", "soccer", "tennis", "running", "gym"],
    ),
    ("music", &["guitar", "piano", "singing", "band", "concert", "music"]),
    ("tech", &["coding", "programming", "ai", "blockchain", "startup"]),
    ("food", &["cooking", "restaurant", "foodie", "wine", "coffee"]),
    ("travel", &["travel", "backpacking", "adventure", "photography"]),
];

/// Phrases signalling the user is travelling somewhere
pub const TRAVEL_KEYWORDS: &[&str] =
    &["travel", "visiting", "going to", "trip to", "in town", "vacation"];

/// Phrases signalling a job hunt or company introduction
pub const JOB_KEYWORDS: &[&str] = &["job", "hiring", "work at", "know someone at", "introduction to"];

/// Phrases signalling the user needs help with a skill
pub const SKILL_KEYWORDS: &[&str] = &[
    "help with",
    "know about",
    "expert in",
    "good at",
    "programmer",
    "developer",
    "designer",
    "marketer",
];

/// Phrases signalling a networking request
pub const NETWORKING_KEYWORDS: &[&str] =
    &["connect", "introduction", "meet", "know someone", "network"];

/// Skill words extractable from a skill-help query
pub const SKILL_WORDS: &[&str] = &[
    "programming",
    "coding",
    "design",
    "marketing",
    "sales",
    "finance",
    "engineering",
];

/// Literal company-query phrases
pub const COMPANY_PHRASES: &[&str] = &["works at", "work at", "employed at"];

/// Proximity modifier phrases
pub const PROXIMITY_MODIFIERS: &[&str] = &["near me", "nearby", "around here"];

/// Historical modifier phrases (past positions)
pub const HISTORICAL_MODIFIERS: &[&str] = &["used to", "former", "previously"];

/// Whether a keyword occurs in the lowercased text.
///
/// Keywords with spaces or punctuation ("works at", "node.js") match as
/// substrings. Bare words must start a word in the text; the prefix rule
/// keeps plural and verb forms matching ("engineers", "traveling") without
/// letting "la" match inside "play".
pub(crate) fn keyword_hits(lower_text: &str, keyword: &str) -> bool {
    if keyword.chars().any(|c| !c.is_alphanumeric()) {
        return lower_text.contains(keyword);
    }
    lower_text
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word.starts_with(keyword))
}

/// First category whose synonym list hits the lowercased text
pub(crate) fn match_category(
    table: &'static [(&'static str, &'static [&'static str])],
    lower_text: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, synonyms)| synonyms.iter().any(|synonym| keyword_hits(lower_text, synonym)))
        .map(|(category, _)| *category)
}

/// Whether any keyword appears in the lowercased text
pub(crate) fn contains_any(keywords: &[&str], lower_text: &str) -> bool {
    keywords.iter().any(|keyword| keyword_hits(lower_text, keyword))
}

/// Synonym list for a canonical category, if the table knows it
pub(crate) fn synonyms_for(
    table: &'static [(&'static str, &'static [&'static str])],
    category: &str,
) -> &'static [&'static str] {
    table
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_category_first_row_wins() {
        // "growth marketer" hits marketing before anything else
        assert_eq!(
            match_category(FUNCTION_SYNONYMS, "looking for a growth marketer"),
            Some("marketing")
        );
    }

    #[test]
    fn test_city_abbreviations() {
        assert_eq!(match_category(CITY_SYNONYMS, "anyone in atx"), Some("austin"));
        assert_eq!(
            match_category(CITY_SYNONYMS, "bay area founders"),
            Some("san francisco")
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(match_category(CITY_SYNONYMS, "anyone in lisbon"), None);
    }

    #[test]
    fn test_synonyms_for_unknown_category_is_empty() {
        assert!(synonyms_for(FUNCTION_SYNONYMS, "astrology").is_empty());
        assert_eq!(
            synonyms_for(FUNCTION_SYNONYMS, "design"),
            &["designer", "ux", "ui", "creative", "visual", "graphic"][..]
        );
    }

    #[test]
    fn test_contains_any_modifiers() {
        assert!(contains_any(HISTORICAL_MODIFIERS, "people who used to work here"));
        assert!(!contains_any(HISTORICAL_MODIFIERS, "people who work here"));
    }

    #[test]
    fn test_short_abbreviations_only_match_word_starts() {
        // "play" must not trigger the "la" city abbreviation
        assert_eq!(match_category(CITY_SYNONYMS, "anyone play guitar"), None);
        assert_eq!(match_category(CITY_SYNONYMS, "friends in la"), Some("los angeles"));
    }

    #[test]
    fn test_word_prefix_covers_plurals() {
        assert!(keyword_hits("engineers in town", "engineer"));
        assert!(keyword_hits("traveling next week", "travel"));
        assert!(!keyword_hits("plain text", "la"));
    }

    #[test]
    fn test_phrases_match_as_substrings() {
        assert!(keyword_hits("who works at stripe", "works at"));
        assert!(!keyword_hits("who works there", "works at"));
    }

    #[test]
    fn test_punctuated_keywords_match_as_substrings() {
        assert!(keyword_hits("deploys node.js services", "node.js"));
        assert!(!keyword_hits("deploys nodejs services", "node.js"));
    }
}
