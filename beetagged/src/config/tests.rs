#[cfg(test)]
mod tests {
    use crate::config::{validation, BeeConfig, ConfigBuilder, ConfigLoader, LogFormat, LogLevel};
    use crate::search::RankingWeights;

    #[test]
    fn test_default_config() {
        let config = BeeConfig::default();
        assert_eq!(config.search.result_limit, 50);
        assert_eq!(config.search.recent_interaction_days, 90);
        assert_eq!(config.search.recent_enrichment_days, 30);
        assert_eq!(config.matching.name_overlap_threshold, 0.8);
        assert_eq!(config.matching.fuzzy_link_threshold, 0.8);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_result_limit(20)
            .with_recent_interaction_days(30)
            .with_fuzzy_link_threshold(0.9)
            .with_log_level(LogLevel::Debug)
            .build()
            .unwrap();

        assert_eq!(config.search.result_limit, 20);
        assert_eq!(config.search.recent_interaction_days, 30);
        assert_eq!(config.matching.fuzzy_link_threshold, 0.9);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_validation() {
        // Test valid configuration
        let valid = ConfigBuilder::new().build();
        assert!(valid.is_ok());

        // Test that validation passes for default config
        let config = BeeConfig::default();
        let result = validation::validate_config(&config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(ConfigBuilder::new().with_result_limit(0).build().is_err());
        assert!(ConfigBuilder::new().with_fuzzy_link_threshold(1.5).build().is_err());
        assert!(ConfigBuilder::new().with_name_overlap_threshold(-0.1).build().is_err());
        assert!(ConfigBuilder::new().with_max_batch_size(0).build().is_err());
        assert!(ConfigBuilder::new().with_recent_interaction_days(-1).build().is_err());

        let weights = RankingWeights {
            function_role: -3.0,
            ..Default::default()
        };
        assert!(ConfigBuilder::new().with_ranking_weights(weights).build().is_err());
    }

    #[test]
    fn test_predefined_configs() {
        let dev = ConfigBuilder::development().build().unwrap();
        let test = ConfigBuilder::testing().build().unwrap();
        let prod = ConfigBuilder::production().build().unwrap();

        assert_eq!(dev.logging.level, LogLevel::Debug);
        assert_eq!(dev.logging.format, LogFormat::Pretty);

        assert_eq!(test.logging.level, LogLevel::Error);
        assert_eq!(test.matching.max_batch_size, 100);

        assert_eq!(prod.logging.level, LogLevel::Info);
        assert_eq!(prod.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::new()
            .with_result_limit(25)
            .build()
            .unwrap();

        // Test round trip through JSON
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BeeConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.search.result_limit, 25);
        assert_eq!(
            config.matching.name_overlap_threshold,
            deserialized.matching.name_overlap_threshold
        );
    }

    #[test]
    fn test_loader_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[search]\nresult_limit = 10\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        let config = loader.extract().unwrap();

        assert_eq!(config.search.result_limit, 10);
        assert_eq!(config.logging.level, LogLevel::Debug);
        // Sections the file does not mention keep their defaults
        assert_eq!(config.matching.max_batch_size, 1000);
    }

    #[test]
    fn test_loader_rejects_missing_file_and_unknown_format() {
        let dir = tempfile::tempdir().unwrap();

        let mut loader = ConfigLoader::new();
        assert!(loader.load_file(dir.path().join("absent.toml")).is_err());

        let ini = dir.path().join("config.ini");
        std::fs::write(&ini, "result_limit = 10").unwrap();
        assert!(loader.load_file(&ini).is_err());
    }

    #[test]
    fn test_loader_validates_extracted_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nresult_limit = 0\n").unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        assert!(loader.extract().is_err());
    }
}
