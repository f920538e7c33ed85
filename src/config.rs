//! Factory configuration loaded from TOML or JSON.
//!
//! ```toml
//! products = ["A", "TypeB", "productc"]
//! tier = "high"
//! log_filter = "creational_patterns=debug"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FactoryError, Result};
use crate::product::{ProductType, Tier};

pub const DEFAULT_LOG_FILTER: &str = "creational_patterns=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryConfig {
    /// Products the registry demo builds, in order.
    pub products: Vec<ProductType>,
    /// Tier used by the abstract factory.
    pub tier: Tier,
    pub log_filter: String,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            products: ProductType::ALL.to_vec(),
            tier: Tier::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

pub struct ConfigParser;

impl ConfigParser {
    pub fn parse_json(content: &str) -> Result<FactoryConfig> {
        serde_json::from_str(content).map_err(FactoryError::from)
    }

    pub fn parse_toml(content: &str) -> Result<FactoryConfig> {
        toml::from_str(content).map_err(FactoryError::from)
    }

    /// Reads `path`, choosing the format by extension and falling back to
    /// sniffing the content (`{` means JSON, anything else TOML), then logs
    /// the loaded config.
    pub fn parse_file(path: &Path) -> Result<FactoryConfig> {
        let config = Self::read_file(path)?;
        config.log_loaded(path);
        Ok(config)
    }

    /// Same as [`parse_file`](ConfigParser::parse_file) without the `info`
    /// event, for callers that load config before installing a subscriber.
    pub fn read_file(path: &Path) -> Result<FactoryConfig> {
        let content = fs::read_to_string(path)
            .map_err(|err| FactoryError::config_io(path.display().to_string(), err.to_string()))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::parse_json(&content),
            Some("toml") => Self::parse_toml(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::parse_json(&content)
                } else {
                    Self::parse_toml(&content)
                }
            }
        }
    }
}

impl FactoryConfig {
    pub fn log_loaded(&self, path: &Path) {
        info!(
            path = %path.display(),
            products = self.products.len(),
            tier = %self.tier,
            "loaded factory config"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture_logs;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_defaults() {
        let config = FactoryConfig::default();
        assert_eq!(config.products, ProductType::ALL.to_vec());
        assert_eq!(config.tier, Tier::Low);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_parse_toml() {
        let config = ConfigParser::parse_toml(
            r#"
            products = ["TypeC", "a"]
            tier = "high"
            "#,
        )
        .unwrap();
        assert_eq!(config.products, vec![ProductType::C, ProductType::A]);
        assert_eq!(config.tier, Tier::High);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_parse_json() {
        let config = ConfigParser::parse_json(r#"{"tier": "2", "log_filter": "debug"}"#).unwrap();
        assert_eq!(config.tier, Tier::High);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.products.len(), 3);
    }

    #[test]
    fn test_unknown_product_is_parse_error() {
        let err = ConfigParser::parse_toml(r#"products = ["TypeZ"]"#).unwrap_err();
        match err {
            FactoryError::ConfigParse { message } => assert!(message.contains("TypeZ")),
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ConfigParser::parse_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn test_parse_file_by_extension() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"products": ["b"]}}"#).unwrap();

        let config = ConfigParser::parse_file(file.path()).unwrap();
        assert_eq!(config.products, vec![ProductType::B]);
    }

    #[test]
    fn test_parse_file_sniffs_content() {
        let mut toml_file = NamedTempFile::new().unwrap();
        writeln!(toml_file, "tier = \"low\"").unwrap();
        assert_eq!(
            ConfigParser::parse_file(toml_file.path()).unwrap().tier,
            Tier::Low
        );

        let mut json_file = NamedTempFile::new().unwrap();
        writeln!(json_file, "  {{\"tier\": \"high\"}}").unwrap();
        assert_eq!(
            ConfigParser::parse_file(json_file.path()).unwrap().tier,
            Tier::High
        );
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            ConfigParser::parse_file(&missing),
            Err(FactoryError::ConfigIo { .. })
        ));
    }

    #[test]
    fn test_parse_file_logs_loaded_config() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "tier = \"high\"").unwrap();

        let (config, logs) = capture_logs(|| ConfigParser::parse_file(file.path()));
        assert_eq!(config.unwrap().tier, Tier::High);
        assert!(logs.contains("INFO"));
        assert!(logs.contains("loaded factory config"));
        assert!(logs.contains("tier=high"));

        let (config, logs) = capture_logs(|| ConfigParser::read_file(file.path()));
        assert!(config.is_ok());
        assert!(!logs.contains("loaded factory config"));
    }

    #[test]
    fn test_rejected_tier_in_config_is_logged() {
        let (result, logs) = capture_logs(|| ConfigParser::parse_toml("tier = \"medium\""));
        match result {
            Err(FactoryError::ConfigParse { message }) => assert!(message.contains("medium")),
            other => panic!("expected ConfigParse, got {other:?}"),
        }
        assert!(logs.contains("WARN"));
        assert!(logs.contains("rejected tier"));
    }
}
