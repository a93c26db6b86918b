//! Gallery configuration
//!
//! Read from `config.toml` in the platform config directory, or from the
//! path in `TEXTFIELD_GALLERY_CONFIG`. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use textfield_core::{ColorTheme, Scenario};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TEXTFIELD_GALLERY_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Page theme at startup
    pub theme: ColorTheme,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_filter: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Seed text per scenario name
    pub initial_values: BTreeMap<String, String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            theme: ColorTheme::Light,
            log_filter: "info".to_string(),
            window_width: 960.0,
            window_height: 720.0,
            initial_values: BTreeMap::new(),
        }
    }
}

impl GalleryConfig {
    /// Config file location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        directories::ProjectDirs::from("dev", "textfield", "textfield-gallery")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Initial values keyed by scenario. Unknown names are skipped.
    pub fn scenario_values(&self) -> Vec<(Scenario, String)> {
        self.initial_values
            .iter()
            .filter_map(|(name, value)| match name.parse::<Scenario>() {
                Ok(scenario) => Some((scenario, value.clone())),
                Err(e) => {
                    tracing::warn!("Ignoring initial value: {}", e);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = GalleryConfig::load_from(&dir.path().join("none.toml")).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"").unwrap();
        writeln!(file, "window_width = 1200.0").unwrap();
        writeln!(file, "[initial_values]").unwrap();
        writeln!(file, "email = \"me@example.com\"").unwrap();
        writeln!(file, "bogus = \"x\"").unwrap();

        let config = GalleryConfig::load_from(file.path()).unwrap();
        assert_eq!(config.theme, ColorTheme::Dark);
        assert_eq!(config.window_width, 1200.0);
        assert_eq!(config.window_height, 720.0);
        assert_eq!(config.log_filter, "info");
        assert_eq!(
            config.scenario_values(),
            vec![(Scenario::Email, "me@example.com".to_string())]
        );
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = ").unwrap();

        let err = GalleryConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"sepia\"").unwrap();

        assert!(GalleryConfig::load_from(file.path()).is_err());
    }
}
