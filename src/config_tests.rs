//! Unit tests for configuration structures and parsing.

#[cfg(test)]
mod config_tests {
    use crate::config::*;
    use crate::error::ConfigError;

    // ============= Defaults Tests =============

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.model, "sonar-reasoning");
        assert_eq!(config.llm.base_url, "https://api.perplexity.ai");
        assert_eq!(config.llm.temperature, 0.5);
        assert_eq!(config.llm.api_key_env, "PPLX_API_KEY");
        assert_eq!(config.llm.request_timeout_secs, None);
        assert_eq!(config.ui.default_ticker, "MSFT");
        assert_eq!(config.ui.title, "AI Hedge Fund Analysis");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_bind_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(server.bind_addr(), "127.0.0.1:8080");
    }

    // ============= Parsing Tests =============

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8081
llm:
  base_url: "http://localhost:1234/v1"
  model: "sonar-pro"
  temperature: 0.2
  api_key_env: "MY_KEY"
  request_timeout_secs: 90
ui:
  title: "Desk"
  default_ticker: "AAPL"
log_level: "debug"
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.llm.base_url, "http://localhost:1234/v1");
        assert_eq!(config.llm.model, "sonar-pro");
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.llm.api_key_env, "MY_KEY");
        assert_eq!(config.llm.request_timeout_secs, Some(90));
        assert_eq!(config.ui.title, "Desk");
        assert_eq!(config.ui.default_ticker, "AAPL");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
llm:
  model: "sonar"
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.llm.model, "sonar");
        assert_eq!(config.llm.temperature, 0.5);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ui.default_ticker, "MSFT");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = AppConfig::from_yaml("").unwrap();
        assert_eq!(config.llm.model, "sonar-reasoning");
    }

    #[test]
    fn test_bom_is_stripped() {
        let yaml = "\u{feff}log_level: \"warn\"\n";
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_malformed_yaml() {
        let result = AppConfig::from_yaml("server: 42");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    // ============= Validation Tests =============

    #[test]
    fn test_temperature_out_of_range() {
        let yaml = "llm:\n  temperature: 3.5\n";
        let result = AppConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_model_rejected() {
        let yaml = "llm:\n  model: \"  \"\n";
        let result = AppConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let yaml = "llm:\n  request_timeout_secs: 0\n";
        let result = AppConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    // ============= File Loading Tests =============

    #[test]
    fn test_missing_file_is_default() {
        let config = AppConfig::load_from("./definitely/not/here.yaml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("autohedge-config-{}.yaml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "ui:\n  default_ticker: \"NVDA\"\n").unwrap();

        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.ui.default_ticker, "NVDA");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_parse_error_names_file() {
        let path = std::env::temp_dir().join(format!("autohedge-bad-{}.yaml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "llm: [1, 2").unwrap();

        let err = AppConfig::load_from(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains(path.to_str().unwrap()));

        std::fs::remove_file(&path).ok();
    }

    // ============= Credential Tests =============

    #[test]
    fn test_api_key_from_named_env() {
        let var = format!("AUTOHEDGE_TEST_KEY_{}", std::process::id());
        let llm = LlmConfig {
            api_key_env: var.clone(),
            ..LlmConfig::default()
        };

        assert_eq!(llm.api_key(), None);

        std::env::set_var(&var, "  pplx-123  ");
        assert_eq!(llm.api_key(), Some("pplx-123".to_string()));

        std::env::set_var(&var, "   ");
        assert_eq!(llm.api_key(), None);

        std::env::remove_var(&var);
    }
}
