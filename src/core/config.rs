//! Application configuration
//!
//! Layering, lowest to highest precedence: built-in defaults, TOML file,
//! environment variables, command-line flags. See [`SheetConfig::layered`].

use crate::core::error::{Result, SheetError};
use crate::rules::Attribute;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Remote collection resource for the roster
pub const DEFAULT_ENDPOINT: &str =
    "https://recruiting.verylongdomaintotestwith.ca/api/{hhl001}/character";

/// Point budget shared by all attributes of one character
pub const DEFAULT_MAX_ATTRIBUTE_TOTAL: i32 = 70;

/// Score every attribute starts at on a new character
pub const DEFAULT_SCORE: i32 = 10;

pub const ENV_ENDPOINT: &str = "CHARACTER_SHEET_ENDPOINT";
pub const ENV_RULEBOOK: &str = "CHARACTER_SHEET_RULEBOOK";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// URL the roster is loaded from (GET) and saved to (POST)
    pub endpoint: String,

    /// Maximum sum of attribute scores per character
    ///
    /// An adjustment is rejected when the current total plus the delta
    /// would exceed this.
    pub max_attribute_total: i32,

    /// Starting score for every attribute of a new character
    pub default_score: i32,

    /// Optional TOML file replacing the built-in classes and skills
    pub rulebook: Option<PathBuf>,

    /// tracing filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_attribute_total: DEFAULT_MAX_ATTRIBUTE_TOTAL,
            default_score: DEFAULT_SCORE,
            rulebook: None,
            log_filter: "character_sheet=info".to_string(),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub rulebook: Option<PathBuf>,
}

impl SheetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SheetError::Config(format!("Invalid TOML: {}", e)))
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SheetError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the effective configuration from every layer
    ///
    /// Defaults, then the TOML file at `file` if given, then environment
    /// variables looked up through `env`, then `overrides`.
    pub fn layered<F>(file: Option<&Path>, env: F, overrides: &ConfigOverrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_env(env).with_overrides(overrides))
    }

    /// Apply environment overrides
    ///
    /// CHARACTER_SHEET_ENDPOINT: endpoint URL
    /// CHARACTER_SHEET_RULEBOOK: rulebook path
    pub fn with_env<F>(mut self, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = env(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(rulebook) = env(ENV_RULEBOOK) {
            self.rulebook = Some(PathBuf::from(rulebook));
        }
        self
    }

    /// Apply command-line overrides, which win over everything else
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(endpoint) = &overrides.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(rulebook) = &overrides.rulebook {
            self.rulebook = Some(rulebook.clone());
        }
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_attribute_total <= 0 {
            return Err(SheetError::Config(format!(
                "max_attribute_total ({}) must be positive",
                self.max_attribute_total
            )));
        }

        if self.default_score < 0 {
            return Err(SheetError::Config(format!(
                "default_score ({}) must not be negative",
                self.default_score
            )));
        }

        // A fresh character has to fit inside the budget
        let starting_total = self
            .default_score
            .saturating_mul(Attribute::all().len() as i32);
        if starting_total > self.max_attribute_total {
            return Err(SheetError::Config(format!(
                "default_score ({}) x {} attributes = {} exceeds max_attribute_total ({})",
                self.default_score,
                Attribute::all().len(),
                starting_total,
                self.max_attribute_total
            )));
        }

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(SheetError::Config(format!(
                "endpoint '{}' must be an http(s) URL",
                self.endpoint
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SheetConfig::default();
        assert_eq!(config.max_attribute_total, 70);
        assert_eq!(config.default_score, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SheetConfig::from_toml_str(r#"endpoint = "http://localhost:8080/character""#)
            .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/character");
        assert_eq!(config.max_attribute_total, 70);
        assert!(config.rulebook.is_none());
    }

    #[test]
    fn test_full_toml() {
        let config = SheetConfig::from_toml_str(
            r#"
            endpoint = "https://example.com/character"
            max_attribute_total = 80
            default_score = 8
            rulebook = "data/rulebook.toml"
            log_filter = "character_sheet=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.max_attribute_total, 80);
        assert_eq!(config.default_score, 8);
        assert_eq!(config.rulebook, Some(PathBuf::from("data/rulebook.toml")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wrong_value_type_rejected() {
        assert!(matches!(
            SheetConfig::from_toml_str("max_attribute_total = \"lots\""),
            Err(SheetError::Config(_))
        ));
    }

    #[test]
    fn test_starting_scores_must_fit_budget() {
        let config = SheetConfig {
            default_score: 12,
            ..SheetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_must_be_http() {
        let config = SheetConfig {
            endpoint: "ftp://example.com".into(),
            ..SheetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_default_score_rejected() {
        let config = SheetConfig {
            default_score: i32::MAX,
            ..SheetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "character-sheet-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_layered_defaults_only() {
        let config = SheetConfig::layered(None, |_| None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, SheetConfig::default());
    }

    #[test]
    fn test_layered_file_over_defaults() {
        let path = write_config(
            "file",
            "endpoint = \"http://file.test/character\"\nmax_attribute_total = 80\n",
        );
        let config =
            SheetConfig::layered(Some(&path), |_| None, &ConfigOverrides::default()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.endpoint, "http://file.test/character");
        assert_eq!(config.max_attribute_total, 80);
        assert_eq!(config.default_score, DEFAULT_SCORE);
    }

    #[test]
    fn test_layered_env_over_file() {
        let path = write_config(
            "env",
            "endpoint = \"http://file.test/character\"\nrulebook = \"file.toml\"\n",
        );
        let env = env_from(&[(ENV_ENDPOINT, "http://env.test/character")]);
        let config = SheetConfig::layered(Some(&path), env, &ConfigOverrides::default()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.endpoint, "http://env.test/character");
        assert_eq!(config.rulebook, Some(PathBuf::from("file.toml")));
    }

    #[test]
    fn test_layered_overrides_win() {
        let env = env_from(&[
            (ENV_ENDPOINT, "http://env.test/character"),
            (ENV_RULEBOOK, "env.toml"),
        ]);
        let overrides = ConfigOverrides {
            endpoint: Some("http://cli.test/character".into()),
            rulebook: None,
        };
        let config = SheetConfig::layered(None, env, &overrides).unwrap();

        assert_eq!(config.endpoint, "http://cli.test/character");
        assert_eq!(config.rulebook, Some(PathBuf::from("env.toml")));
    }

    #[test]
    fn test_layered_missing_file_is_error() {
        let path = std::env::temp_dir().join("character-sheet-does-not-exist.toml");
        assert!(matches!(
            SheetConfig::layered(Some(&path), |_| None, &ConfigOverrides::default()),
            Err(SheetError::Config(_))
        ));
    }
}
