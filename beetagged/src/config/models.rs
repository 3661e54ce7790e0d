//! Configuration model definitions.
//!
//! This module contains the configuration structures for all BeeTagged
//! components.

use crate::matching::duplicates::DEFAULT_NAME_OVERLAP_THRESHOLD;
use crate::matching::linker::DEFAULT_FUZZY_THRESHOLD;
use crate::search::ranker::{
    DEFAULT_RECENT_ENRICHMENT_DAYS, DEFAULT_RECENT_INTERACTION_DAYS, DEFAULT_RESULT_LIMIT,
};
use crate::search::RankingWeights;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for BeeTagged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BeeConfig {
    /// Search and ranking configuration
    pub search: SearchConfig,

    /// Duplicate detection and profile linking configuration
    pub matching: MatchingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl BeeConfig {
    /// Check every section for out-of-range values.
    pub fn validate(&self) -> super::Result<()> {
        super::validation::validate_config(self)
    }
}

/// Configuration for the search pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results a search returns
    pub result_limit: usize,

    /// Days since last interaction inside which the recency boost applies
    pub recent_interaction_days: i64,

    /// Days since last enrichment inside which the freshness boost applies
    pub recent_enrichment_days: i64,

    /// Per-signal weights for relevance scoring
    pub weights: RankingWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            recent_interaction_days: DEFAULT_RECENT_INTERACTION_DAYS,
            recent_enrichment_days: DEFAULT_RECENT_ENRICHMENT_DAYS,
            weights: RankingWeights::default(),
        }
    }
}

/// Configuration for duplicate detection and profile linking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Name word overlap above which two same-company contacts are duplicates
    pub name_overlap_threshold: f64,

    /// Minimum fuzzy name similarity for a cross-source profile link
    pub fuzzy_link_threshold: f64,

    /// Import batch size above which a warning is logged
    pub max_batch_size: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            name_overlap_threshold: DEFAULT_NAME_OVERLAP_THRESHOLD,
            fuzzy_link_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_batch_size: 1000,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
