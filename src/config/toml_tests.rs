//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::TomlConfig;

mod parsing {
    use super::*;

    #[test]
    fn parse_full_section() {
        let toml = r#"
            [convoy]
            url = "https://convoy.example.com"
            api_key = "secret123"
            default_project = "p1"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(
            config.convoy.url.as_deref(),
            Some("https://convoy.example.com")
        );
        assert_eq!(config.convoy.api_key.as_deref(), Some("secret123"));
        assert_eq!(config.convoy.default_project.as_deref(), Some("p1"));
    }

    #[test]
    fn empty_document_yields_empty_section() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.convoy.url.is_none());
        assert!(config.convoy.api_key.is_none());
        assert!(config.convoy.default_project.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [convoy]
            url = "https://convoy.example.com"
            retries = 3
        "#;

        let result = TomlConfig::parse(toml);

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_table_is_rejected() {
        let result = TomlConfig::parse("[webhook]\nurl = \"x\"\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[convoy]\napi_key = 42\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
