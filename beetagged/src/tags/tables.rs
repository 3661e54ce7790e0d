//! Keyword tables for tag derivation
//!
//! Supplied as constant data. Matching is case-insensitive: keywords with
//! spaces or punctuation as substrings, bare words at word starts. Within
//! each table the first matching row wins.

use crate::search::keywords::keyword_hits;

/// Company keywords that map to the "Technology" industry tag
pub const TECH_COMPANIES: &[&str] = &[
    "google",
    "microsoft",
    "apple",
    "amazon",
    "meta",
    "facebook",
    "netflix",
    "uber",
    "airbnb",
    "stripe",
    "slack",
    "zoom",
    "salesforce",
];

/// Company keywords that map to the "Finance" industry tag
pub const FINANCE_COMPANIES: &[&str] = &[
    "goldman",
    "jpmorgan",
    "chase",
    "morgan stanley",
    "blackrock",
    "wells fargo",
    "bank of america",
];

/// Company keywords that map to the "Consulting" industry tag
pub const CONSULTING_COMPANIES: &[&str] = &[
    "mckinsey", "bain", "bcg", "deloitte", "pwc", "kpmg", "ey",
];

/// Industry tables in scan order: (industry tag, company keywords)
pub const INDUSTRY_TABLES: &[(&str, &[&str])] = &[
    ("Technology", TECH_COMPANIES),
    ("Finance", FINANCE_COMPANIES),
    ("Consulting", CONSULTING_COMPANIES),
];

/// Role category tables in scan order: (role tag, position keywords)
pub const ROLE_TABLES: &[(&str, &[&str])] = &[
    ("Engineering", &["engineer", "developer", "programmer"]),
    ("Marketing", &["marketing", "growth"]),
    ("Sales", &["sales", "account"]),
    ("Management", &["manager", "director", "vp", "chief"]),
    ("Design", &["design", "ux", "ui"]),
    ("Product", &["product"]),
    ("Data", &["data", "analyst", "scientist"]),
];

/// Canonical city tables in scan order: (city tag, location keywords)
pub const CITY_TABLES: &[(&str, &[&str])] = &[
    ("San Francisco", &["san francisco", "sf", "bay area"]),
    ("New York", &["new york", "nyc", "manhattan"]),
    ("Seattle", &["seattle"]),
    ("Los Angeles", &["los angeles", "la"]),
    ("Austin", &["austin", "round rock"]),
    ("Boston", &["boston"]),
    ("Chicago", &["chicago"]),
];

/// Technology and domain skills recognized in position/company text
pub const TECH_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node.js",
    "aws",
    "docker",
    "kubernetes",
    "sql",
    "mongodb",
    "postgresql",
    "machine learning",
    "ai",
    "data science",
    "analytics",
    "salesforce",
    "hubspot",
    "marketing automation",
];

/// Look up the first table row whose keyword list matches the lowercased text
pub fn first_match<'a>(tables: &[(&'a str, &[&str])], lower_text: &str) -> Option<&'a str> {
    tables
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| keyword_hits(lower_text, kw)))
        .map(|(tag, _)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_respects_scan_order() {
        // "data engineer" contains keywords from both Engineering and Data;
        // Engineering is scanned first.
        assert_eq!(first_match(ROLE_TABLES, "data engineer"), Some("Engineering"));
        assert_eq!(first_match(ROLE_TABLES, "data analyst"), Some("Data"));
    }

    #[test]
    fn test_first_match_misses() {
        assert_eq!(first_match(ROLE_TABLES, "barista"), None);
        assert_eq!(first_match(INDUSTRY_TABLES, "corner bakery"), None);
    }

    #[test]
    fn test_city_abbreviations() {
        assert_eq!(first_match(CITY_TABLES, "sf bay area"), Some("San Francisco"));
        assert_eq!(first_match(CITY_TABLES, "round rock, tx"), Some("Austin"));
    }

    #[test]
    fn test_short_keywords_stay_inside_word_boundaries() {
        // "la" must not fire inside "portland", nor "ui" inside "recruiting"
        assert_eq!(first_match(CITY_TABLES, "portland, or"), None);
        assert_eq!(first_match(ROLE_TABLES, "recruiting lead"), None);
        assert_eq!(first_match(CITY_TABLES, "moved to la"), Some("Los Angeles"));
    }
}
