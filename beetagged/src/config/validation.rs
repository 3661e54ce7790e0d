//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::models::*;
use super::ConfigError;

/// Validate the entire configuration.
pub fn validate_config(config: &BeeConfig) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_matching_config(&config.matching)?;

    Ok(())
}

/// Validate search configuration.
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if config.result_limit == 0 {
        return Err(ConfigError::ValidationError(
            "Result limit must be greater than 0".to_string(),
        ));
    }

    if config.recent_interaction_days < 0 {
        return Err(ConfigError::ValidationError(
            "Recent interaction window cannot be negative".to_string(),
        ));
    }

    if config.recent_enrichment_days < 0 {
        return Err(ConfigError::ValidationError(
            "Recent enrichment window cannot be negative".to_string(),
        ));
    }

    config.weights.validate().map_err(ConfigError::ValidationError)
}

/// Validate matching configuration.
fn validate_matching_config(config: &MatchingConfig) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&config.name_overlap_threshold) {
        return Err(ConfigError::ValidationError(
            "Name overlap threshold must be between 0.0 and 1.0".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&config.fuzzy_link_threshold) {
        return Err(ConfigError::ValidationError(
            "Fuzzy link threshold must be between 0.0 and 1.0".to_string(),
        ));
    }

    if config.max_batch_size == 0 {
        return Err(ConfigError::ValidationError(
            "Max batch size must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
