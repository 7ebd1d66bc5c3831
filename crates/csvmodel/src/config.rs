//! Parse configuration.
//!
//! [`ParseConfig`] bundles the separator, header flag and quote-stripping
//! flag. It serializes to YAML so applications can persist the settings a
//! user picked for a file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default field separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Settings for one parse.
///
/// ```
/// use csvmodel::ParseConfig;
///
/// let config = ParseConfig::from_yaml_str("separator: ';'\nhas-header: true\n").unwrap();
/// assert_eq!(config.separator, ';');
/// assert!(config.has_header);
/// assert!(config.strip_quotes);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct ParseConfig {
    /// Field separator. Any character is accepted, whitespace included.
    pub separator: char,

    /// Treat the first line as column labels instead of data.
    pub has_header: bool,

    /// Show values without one surrounding pair of quotes. Display only.
    pub strip_quotes: bool,
}

impl ParseConfig {
    /// Creates a configuration with the given separator and header flag.
    /// Quote stripping is on.
    #[must_use]
    pub fn new(separator: char, has_header: bool) -> Self {
        Self {
            separator,
            has_header,
            strip_quotes: true,
        }
    }

    /// Returns a copy with `strip_quotes` set.
    #[must_use]
    pub fn with_strip_quotes(self, strip_quotes: bool) -> Self {
        Self {
            strip_quotes,
            ..self
        }
    }

    /// Parses a configuration from YAML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not a valid configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serializes the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))
    }

    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Config`] if its content is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Saves the configuration to a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn default_is_comma_without_header() {
        let config = ParseConfig::default();
        assert_eq!(config.separator, ',');
        assert!(!config.has_header);
        assert!(config.strip_quotes);
    }

    #[test]
    fn with_strip_quotes_overrides_flag_only() {
        let config = ParseConfig::new('\t', true).with_strip_quotes(false);
        let expected = ParseConfig {
            separator: '\t',
            has_header: true,
            strip_quotes: false,
        };
        assert_eq!(config, expected);
    }

    #[rstest]
    #[case::comma(',')]
    #[case::tab('\t')]
    #[case::space(' ')]
    #[case::single_quote('\'')]
    #[case::multibyte('§')]
    fn yaml_roundtrip_keeps_separator(#[case] separator: char) {
        let original = ParseConfig::new(separator, true);
        let yaml = original.to_yaml_string().unwrap();
        assert_eq!(ParseConfig::from_yaml_str(&yaml).unwrap(), original);
    }

    #[test]
    fn yaml_uses_kebab_case_keys() {
        let yaml = ParseConfig::new(';', true).to_yaml_string().unwrap();
        assert!(yaml.contains("separator:"));
        assert!(yaml.contains("has-header: true"));
        assert!(yaml.contains("strip-quotes: true"));
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = ParseConfig::from_yaml_str("strip-quotes: false\n").unwrap();
        assert_eq!(config, ParseConfig::default().with_strip_quotes(false));
    }

    #[rstest]
    #[case::multi_char_separator("separator: ab\n")]
    #[case::wrong_type("has-header: maybe\n")]
    fn invalid_yaml_is_config_error(#[case] yaml: &str) {
        let err = ParseConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
    }

    #[test]
    fn save_and_load_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("parse.yaml");

        let original = ParseConfig::new('|', false).with_strip_quotes(false);
        original.save(&path).unwrap();

        assert_eq!(ParseConfig::load(&path).unwrap(), original);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = ParseConfig::load(&temp_dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
