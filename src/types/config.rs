//! Report configuration
//!
//! Loaded from a YAML file (by default `.github/doc-config.yml`):
//!
//! ```yaml
//! output_dir: docs/
//! include_labels: [bug, enhancement]
//! exclude_labels: [wontfix]
//! wiki:
//!   output_dir: wiki
//!   apply_exclude_labels: false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default location of the configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".github/doc-config.yml";

const DEFAULT_OUTPUT_DIR: &str = "docs/";
const DEFAULT_WIKI_DIR: &str = "wiki";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_wiki_dir() -> PathBuf {
    PathBuf::from(DEFAULT_WIKI_DIR)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocConfig {
    /// Directory receiving `index.md`
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Labels that get their own issue group
    pub include_labels: Vec<String>,
    /// Issues carrying any of these labels are left out of every group
    #[serde(default)]
    pub exclude_labels: Vec<String>,
    #[serde(default)]
    pub wiki: WikiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiConfig {
    #[serde(default = "default_wiki_dir")]
    pub output_dir: PathBuf,
    /// The wiki pages historically ignore `exclude_labels`; set to opt in.
    #[serde(default)]
    pub apply_exclude_labels: bool,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            output_dir: default_wiki_dir(),
            apply_exclude_labels: false,
        }
    }
}

impl DocConfig {
    pub fn new<I, E>(include_labels: I, exclude_labels: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            output_dir: default_output_dir(),
            include_labels: include_labels.into_iter().map(Into::into).collect(),
            exclude_labels: exclude_labels.into_iter().map(Into::into).collect(),
            wiki: WikiConfig::default(),
        }
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_yaml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(
            "Loaded config from {}: {} included, {} excluded labels",
            path.display(),
            config.include_labels.len(),
            config.exclude_labels.len()
        );
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join("index.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_applied() {
        let config = DocConfig::from_yaml_str("include_labels: [bug]\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("docs/"));
        assert!(config.exclude_labels.is_empty());
        assert_eq!(config.wiki, WikiConfig::default());
        assert_eq!(config.index_path(), PathBuf::from("docs/index.md"));
    }

    #[test]
    fn test_full_config() {
        let config = DocConfig::from_yaml_str(
            "output_dir: site\ninclude_labels:\n  - bug\n  - docs\nexclude_labels:\n  - wontfix\nwiki:\n  apply_exclude_labels: true\n",
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("site"));
        assert_eq!(config.include_labels, vec!["bug", "docs"]);
        assert_eq!(config.exclude_labels, vec!["wontfix"]);
        assert!(config.wiki.apply_exclude_labels);
        assert_eq!(config.wiki.output_dir, PathBuf::from("wiki"));
    }

    #[test]
    fn test_missing_include_labels_is_an_error() {
        assert!(DocConfig::from_yaml_str("output_dir: docs/\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let error = DocConfig::load(&temp_dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc-config.yml");
        std::fs::write(&path, "include_labels: [bug\n").unwrap();
        let error = DocConfig::load(&path).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }
}
