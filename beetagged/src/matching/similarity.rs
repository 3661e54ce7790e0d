//! String-similarity primitives
//!
//! Side-effect-free building blocks shared by duplicate detection, conflict
//! detection, and profile linking. Normalization is plain lowercasing with
//! domain-specific noise stripping; no locale-aware casing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMPANY_SUFFIXES: Regex =
        Regex::new(r"\b(inc|llc|corp|corporation|company|co|ltd|limited)\b").unwrap();
    static ref TITLE_NOISE: Regex =
        Regex::new(r"\b(senior|sr|junior|jr|lead|principal|staff)\b").unwrap();
    static ref LOCATION_NOISE: Regex =
        Regex::new(r"\b(city|county|state|province|country)\b").unwrap();
    static ref SCHOOL_NOISE: Regex =
        Regex::new(r"\b(university|college|school|institute|academy)\b").unwrap();
    static ref SCHOOL_STOP_WORDS: Regex = Regex::new(r"\b(of|the|and)\b").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[,.\-]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalized Levenshtein similarity in [0, 1].
///
/// Defined as 1 - distance / max(char length). Symmetric, `similarity(a, a)`
/// is 1.0, and two empty strings are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Whether two company names refer to the same company.
///
/// Strips legal suffixes and punctuation, then accepts equality, containment
/// in either direction, or similarity above 0.8.
pub fn is_similar_company_name(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let norm_a = normalize_company(a);
    let norm_b = normalize_company(b);

    norm_a == norm_b
        || norm_a.contains(&norm_b)
        || norm_b.contains(&norm_a)
        || similarity(&norm_a, &norm_b) > 0.8
}

/// Whether two job titles describe the same role.
///
/// Seniority qualifiers (senior, jr, lead, ...) are noise; the remainder must
/// be more than 0.7 similar.
pub fn is_similar_job_title(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let norm_a = strip_pattern(&TITLE_NOISE, a);
    let norm_b = strip_pattern(&TITLE_NOISE, b);
    similarity(&norm_a, &norm_b) > 0.7
}

/// Whether two location strings describe the same place.
///
/// Strips administrative words (city, state, ...) and separators; accepts
/// containment in either direction or similarity above 0.6.
pub fn is_similar_location(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let norm_a = normalize_location(a);
    let norm_b = normalize_location(b);

    norm_a.contains(&norm_b) || norm_b.contains(&norm_a) || similarity(&norm_a, &norm_b) > 0.6
}

/// Whether two school names refer to the same institution.
///
/// Strips institution words (university, college, ...) and stop words; the
/// remainder must be more than 0.7 similar.
pub fn is_similar_school_name(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let norm_a = normalize_school(a);
    let norm_b = normalize_school(b);
    similarity(&norm_a, &norm_b) > 0.7
}

/// Whether two person names plausibly belong to the same person.
///
/// Splits on whitespace and requires the first AND last tokens to match,
/// which tolerates middle names and initials without over-matching.
pub fn is_similar_name(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let lower_a = a.to_lowercase();
    let lower_b = b.to_lowercase();
    let parts_a: Vec<&str> = lower_a.split_whitespace().collect();
    let parts_b: Vec<&str> = lower_b.split_whitespace().collect();

    match (parts_a.first(), parts_b.first(), parts_a.last(), parts_b.last()) {
        (Some(fa), Some(fb), Some(la), Some(lb)) => fa == fb && la == lb,
        _ => false,
    }
}

/// Word-overlap ratio between two names, in [0, 1].
///
/// Tokens of length 1 are dropped. A token matches when equal, or when both
/// sides exceed two characters and one contains the other. The score is
/// matched tokens over the larger token count.
pub fn name_word_overlap(a: &str, b: &str) -> f64 {
    let lower_a = a.to_lowercase();
    let lower_b = b.to_lowercase();
    let words_a: Vec<&str> = lower_a.split_whitespace().filter(|w| w.len() > 1).collect();
    let words_b: Vec<&str> = lower_b.split_whitespace().filter(|w| w.len() > 1).collect();

    let max_words = words_a.len().max(words_b.len());
    if max_words == 0 {
        return 0.0;
    }

    let mut matches = 0usize;
    for word_a in &words_a {
        for word_b in &words_b {
            if word_a == word_b
                || (word_a.len() > 2
                    && word_b.len() > 2
                    && (word_a.contains(word_b) || word_b.contains(word_a)))
            {
                matches += 1;
                break;
            }
        }
    }

    matches as f64 / max_words as f64
}

/// Normalize a phone number for matching: digits only, with a US country
/// prefix added to bare 10-digit numbers.
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("1{}", digits)
    } else {
        digits
    }
}

/// Normalize a person name for matching: lowercase, punctuation removed,
/// whitespace collapsed.
pub fn normalize_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let stripped = NON_WORD.replace_all(&lower, "");
    WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
}

fn normalize_company(name: &str) -> String {
    let lower = name.to_lowercase();
    let stripped = COMPANY_SUFFIXES.replace_all(&lower, "");
    let stripped = NON_WORD.replace_all(&stripped, "");
    WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
}

fn normalize_location(location: &str) -> String {
    let lower = location.to_lowercase();
    let stripped = LOCATION_NOISE.replace_all(&lower, "");
    let stripped = SEPARATORS.replace_all(&stripped, " ");
    WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
}

fn normalize_school(name: &str) -> String {
    let lower = name.to_lowercase();
    let stripped = SCHOOL_NOISE.replace_all(&lower, "");
    let stripped = SCHOOL_STOP_WORDS.replace_all(&stripped, "");
    let stripped = NON_WORD.replace_all(&stripped, "");
    WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
}

fn strip_pattern(pattern: &Regex, text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = pattern.replace_all(&lower, "");
    let stripped = NON_WORD.replace_all(&stripped, "");
    WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
}
