#[cfg(test)]
mod tests {
    use super::super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.loader.page_size, 100);
        assert_eq!(config.qa.default_top_k, 5);
        assert_eq!(config.dashboard.explore_limit, 50);
        assert_eq!(config.bind_address(), "127.0.0.1:3001");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [endpoints]
            ask_base_url = "https://qa.example.org/api"

            [loader]
            fallback_seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.ask_base_url, "https://qa.example.org/api");
        assert_eq!(config.endpoints.articles_base_url, "http://localhost:80/api");
        assert_eq!(config.endpoints.request_timeout_secs, 30);
        assert_eq!(config.loader.fallback_seed, Some(42));
        assert_eq!(config.loader.page_size, 100);
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SPACEBIO_ARTICLES_URL", "https://data.example.org/api"),
            ("SPACEBIO_PORT", "8080"),
        ]);
        let mut config = Config::default();
        config
            .apply_env_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.endpoints.articles_base_url, "https://data.example.org/api");
        assert_eq!(config.endpoints.ask_base_url, "http://localhost:80/api");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_bad_port_override_is_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_env_overrides(|k| (k == "SPACEBIO_PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = Config::default();
        config.endpoints.ask_base_url = "ftp://files.example.org".to_string();
        assert!(config.validate().is_err());

        config.endpoints.ask_base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_page_size_and_top_k() {
        let mut config = Config::default();
        config.loader.page_size = 101;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.qa.default_top_k = 25;
        assert!(config.validate().is_err());
    }
}
