//! Persistent CLI configuration stored at `~/.chainkit/config.json`.
//!
//! The file carries the anonymous client id sent with telemetry and the
//! result of the last update check, so that an available update can be
//! announced without going back to the network.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChainkitError, Result};
use crate::version::{is_newer, Version};

pub const DEFAULT_SERVICES_URL: &str = "https://services.chainkit.dev";
pub const CONFIG_DIR: &str = ".chainkit";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// CLI version that last wrote this file.
    pub version: String,
    pub services_url: String,
    pub client_id: String,
    pub latest_version: String,
    #[serde(default)]
    pub update_prompt: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        let version = env!("CARGO_PKG_VERSION").to_string();
        Self {
            latest_version: version.clone(),
            version,
            services_url: DEFAULT_SERVICES_URL.into(),
            client_id: uuid::Uuid::new_v4().to_string(),
            update_prompt: String::new(),
        }
    }
}

impl CliConfig {
    /// `~/.chainkit/config.json`, or `None` when no home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the saved configuration, or create and persist a fresh one.
    ///
    /// The stored `version` is refreshed to the running CLI's version.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str::<Self>(&contents).map_err(|e| {
                ChainkitError::ConfigParse {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config found, creating one");
                let config = Self::default();
                config.save(path)?;
                return Ok(config);
            }
            Err(e) => return Err(e.into()),
        };

        config.version = env!("CARGO_PKG_VERSION").to_string();
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ChainkitError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| ChainkitError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|source| ChainkitError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether the last recorded `latest_version` is newer than the running CLI.
    pub fn is_update_available(&self) -> bool {
        if self.version.contains("SNAPSHOT") {
            return false;
        }
        Version::parse(&self.version)
            .is_some_and(|installed| is_newer(&self.latest_version, installed))
    }

    /// Apply `CHAINKIT_SERVICES_URL`-style overrides coming from the command line.
    pub fn with_services_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.services_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(CONFIG_FILE);

        let config = CliConfig::load_or_default(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(config.latest_version, config.version);
        assert!(uuid::Uuid::parse_str(&config.client_id).is_ok());
        assert!(!config.is_update_available());
    }

    #[test]
    fn test_client_id_is_stable_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let first = CliConfig::load_or_default(&path).unwrap();
        let second = CliConfig::load_or_default(&path).unwrap();
        assert_eq!(first.client_id, second.client_id);
    }

    #[test]
    fn test_update_available_after_saving_newer_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = CliConfig::load_or_default(&path).unwrap();
        config.latest_version = "999.0.0".into();
        config.update_prompt = "run the installer".into();
        config.save(&path).unwrap();

        let reloaded = CliConfig::load_or_default(&path).unwrap();
        assert!(reloaded.is_update_available());
        assert_eq!(reloaded.update_prompt, "run the installer");
    }

    #[test]
    fn test_invalid_json_is_config_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = CliConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, ChainkitError::ConfigParse { .. }));
    }

    #[test]
    fn test_services_url_override() {
        let config = CliConfig::default().with_services_url(Some("http://localhost:8000/"));
        assert_eq!(config.services_url, "http://localhost:8000");
        let config = CliConfig::default().with_services_url(Some("  "));
        assert_eq!(config.services_url, DEFAULT_SERVICES_URL);
    }
}
