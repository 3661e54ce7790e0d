//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{models::*, validation, Result};
use crate::search::RankingWeights;
use std::path::Path;

/// Builder for creating BeeConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: BeeConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: BeeConfig::default(),
        }
    }

    /// Set the maximum number of search results.
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.config.search.result_limit = limit;
        self
    }

    /// Set the recent-interaction boost window in days.
    pub fn with_recent_interaction_days(mut self, days: i64) -> Self {
        self.config.search.recent_interaction_days = days;
        self
    }

    /// Set the recently-enriched boost window in days.
    pub fn with_recent_enrichment_days(mut self, days: i64) -> Self {
        self.config.search.recent_enrichment_days = days;
        self
    }

    /// Replace the relevance scoring weights.
    pub fn with_ranking_weights(mut self, weights: RankingWeights) -> Self {
        self.config.search.weights = weights;
        self
    }

    /// Set the duplicate-detection name overlap threshold.
    pub fn with_name_overlap_threshold(mut self, threshold: f64) -> Self {
        self.config.matching.name_overlap_threshold = threshold;
        self
    }

    /// Set the minimum fuzzy similarity for profile links.
    pub fn with_fuzzy_link_threshold(mut self, threshold: f64) -> Self {
        self.config.matching.fuzzy_link_threshold = threshold;
        self
    }

    /// Set the import batch size that triggers a warning.
    pub fn with_max_batch_size(mut self, size: usize) -> Self {
        self.config.matching.max_batch_size = size;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use default logging configuration (JSON output at Info level)
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging.level = LogLevel::Info;
        self.config.logging.format = LogFormat::Json;
        self.config.logging.file = None;

        self
    }

    /// Create a configuration for development.
    ///
    /// Debug-level logging in the pretty format, default weights and limits.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Create a configuration for automated testing.
    ///
    /// Error-level logging to keep test output quiet, small batch warning
    /// threshold so ingest warnings are exercised.
    pub fn testing() -> Self {
        Self::new()
            .with_log_level(LogLevel::Error)
            .with_max_batch_size(100)
    }

    /// Create a production-ready configuration.
    ///
    /// Structured JSON logging at Info level with default search settings.
    pub fn production() -> Self {
        Self::new().with_default_logging()
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<BeeConfig> {
        // Validate the configuration
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
