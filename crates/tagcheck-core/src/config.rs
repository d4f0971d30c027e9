//! Configuration schema (tagcheck.toml)

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tagcheck.toml";

/// Behavior switches for one checking run
///
/// Built once before any file is read and passed by reference into the
/// comparison engine; nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Un-camel-case both sides before comparing (WalterWhite -> walter_white)
    #[serde(rename = "un_camel_case")]
    pub normalize_before_compare: bool,

    /// Report letter transpositions as anagrams instead of plain mismatches
    #[serde(rename = "anagram")]
    pub detect_anagrams: bool,

    /// Compare every tag value on a field with the first one
    pub all_tags_match: bool,

    /// Reserved: report when the Levenshtein distance exceeds this value
    #[serde(rename = "levenshtein")]
    pub levenshtein_threshold: u32,
}

impl CheckConfig {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&contents)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    pub fn with_normalize(mut self, enabled: bool) -> Self {
        self.normalize_before_compare = enabled;
        self
    }

    pub fn with_anagrams(mut self, enabled: bool) -> Self {
        self.detect_anagrams = enabled;
        self
    }

    pub fn with_all_tags_match(mut self, enabled: bool) -> Self {
        self.all_tags_match = enabled;
        self
    }

    pub fn with_levenshtein(mut self, threshold: u32) -> Self {
        self.levenshtein_threshold = threshold;
        self
    }

    /// Whether any checking mode has been switched on
    pub fn any_mode_enabled(&self) -> bool {
        self.normalize_before_compare
            || self.detect_anagrams
            || self.all_tags_match
            || self.levenshtein_threshold > 0
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = CheckConfig::default();
        assert!(!config.any_mode_enabled());
        assert_eq!(config.levenshtein_threshold, 0);
    }

    #[test]
    fn parse_flag_names() {
        let config = CheckConfig::from_toml(
            r#"
            anagram = true
            un_camel_case = true
            levenshtein = 2
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            CheckConfig::default()
                .with_anagrams(true)
                .with_normalize(true)
                .with_levenshtein(2)
        );
        assert!(config.any_mode_enabled());
    }

    #[test]
    fn reject_bad_value() {
        let result = CheckConfig::from_toml("anagram = \"yes\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn config_toml_roundtrip() {
        let config = CheckConfig::default().with_all_tags_match(true);
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("all_tags_match = true"));
        assert_eq!(CheckConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "all_tags_match = true").unwrap();

        let config = CheckConfig::from_file(file.path()).unwrap();
        assert!(config.all_tags_match);
        assert!(!config.detect_anagrams);
    }

    #[test]
    fn missing_file() {
        let result = CheckConfig::from_file(Path::new("/nonexistent/tagcheck.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
