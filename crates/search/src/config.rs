//! Search configuration via `wikisearch.toml`
//!
//! Controls how evaluated results are presented: ranking direction and an
//! optional cap on the number of entries returned.

use serde::{Deserialize, Serialize};
use std::path::Path;
use wikisearch_core::{Error, RankOrder, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "wikisearch.toml";

/// Search configuration loaded from `wikisearch.toml`.
///
/// # Example
///
/// ```toml
/// # Ranking direction: "ascending" (default) or "descending"
/// order = "descending"
///
/// # Maximum number of ranked entries returned
/// limit = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Ranking direction: `"ascending"` or `"descending"`.
    #[serde(default = "default_order_str")]
    pub order: String,
    /// Maximum number of ranked entries returned by a search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

fn default_order_str() -> String {
    RankOrder::default().name().to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            order: default_order_str(),
            limit: None,
        }
    }
}

impl SearchConfig {
    /// Builder: set ranking direction
    pub fn with_order(mut self, order: RankOrder) -> Self {
        self.order = order.name().to_string();
        self
    }

    /// Builder: cap the number of ranked entries
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Parse the order string into a `RankOrder`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"ascending"` or `"descending"`.
    pub fn rank_order(&self) -> Result<RankOrder> {
        RankOrder::from_name(&self.order).ok_or_else(|| {
            Error::invalid_config(format!(
                "Invalid order '{}' in {}. Expected \"ascending\" or \"descending\".",
                self.order, CONFIG_FILE_NAME
            ))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# wikisearch configuration
#
# Ranking direction: "ascending" (default) or "descending"
#   "ascending"  = lowest relevance first
#   "descending" = most relevant first
order = "ascending"

# Maximum number of ranked entries returned (default: unlimited)
# limit = 10
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse config: {}", e)))?;
        // Validate the order value eagerly
        config.rank_order()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig(msg) => {
                Error::invalid_config(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?;
        tracing::info!(
            target: "wikisearch::config",
            path = %path.display(),
            order = %config.order,
            limit = ?config.limit,
            "Search config loaded"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::invalid_config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.order, "ascending");
        assert_eq!(config.limit, None);
        assert_eq!(config.rank_order().unwrap(), RankOrder::Ascending);
    }

    #[test]
    fn test_default_toml_parses_to_default() {
        let config = SearchConfig::from_toml_str(SearchConfig::default_toml()).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_parse_descending_with_limit() {
        let config = SearchConfig::from_toml_str("order = \"descending\"\nlimit = 3\n").unwrap();
        assert_eq!(config.rank_order().unwrap(), RankOrder::Descending);
        assert_eq!(config.limit, Some(3));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SearchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_invalid_order_rejected() {
        let err = SearchConfig::from_toml_str("order = \"sideways\"").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = SearchConfig::from_toml_str("order = ").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_write_default_if_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        SearchConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());
        let config = SearchConfig::from_file(&path).unwrap();
        assert_eq!(config, SearchConfig::default());

        // Existing file is left untouched
        std::fs::write(&path, "order = \"descending\"\n").unwrap();
        SearchConfig::write_default_if_missing(&path).unwrap();
        let config = SearchConfig::from_file(&path).unwrap();
        assert_eq!(config.rank_order().unwrap(), RankOrder::Descending);
    }

    #[test]
    fn test_write_to_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = SearchConfig::default()
            .with_order(RankOrder::Descending)
            .with_limit(5);
        config.write_to_file(&path).unwrap();

        assert_eq!(SearchConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = SearchConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_from_file_invalid_mentions_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "order = \"up\"\n").unwrap();

        let err = SearchConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
