use crate::config::api_keys::{ApiKeySources, resolve_api_key};
use crate::config::constants::defaults;
use crate::config::core::{ApiConfig, GenerationSettings, RateLimitConfig};
use crate::types::SchoolProfile;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for OfstedReady
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OfstedReadyConfig {
    /// Gemini endpoint, model and credentials
    #[serde(default)]
    pub api: ApiConfig,

    /// Sampling and safety thresholds
    #[serde(default)]
    pub generation: GenerationSettings,

    /// School details used in every prompt
    #[serde(default)]
    pub school: SchoolProfile,

    /// Per-user request limits
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl OfstedReadyConfig {
    /// API key from the environment or this configuration, if any
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_api_key(&self.api_key_sources())
    }

    pub fn api_key_sources(&self) -> ApiKeySources {
        ApiKeySources::new(self.api.api_key_env.clone(), self.api.api_key.clone())
    }

    /// Write the default configuration to `output`
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let config_content = toml::to_string_pretty(&OfstedReadyConfig::default())
            .context("Failed to serialize default configuration")?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: OfstedReadyConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load configuration for a workspace.
    ///
    /// Checks `ofstedready.toml`, then `.ofstedready/ofstedready.toml` in the
    /// workspace, then `~/.ofstedready/ofstedready.toml`; falls back to defaults.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let home_config = dirs::home_dir().map(|home| {
            home.join(defaults::CONFIG_DIR_NAME)
                .join(defaults::CONFIG_FILE_NAME)
        });
        let mut candidates = Self::workspace_candidates(workspace.as_ref());
        candidates.extend(home_config);
        Self::load_from_candidates(candidates)
    }

    fn workspace_candidates(workspace: &Path) -> Vec<PathBuf> {
        vec![
            workspace.join(defaults::CONFIG_FILE_NAME),
            workspace
                .join(defaults::CONFIG_DIR_NAME)
                .join(defaults::CONFIG_FILE_NAME),
        ]
    }

    fn load_from_candidates(candidates: impl IntoIterator<Item = PathBuf>) -> Result<Self> {
        for path in candidates {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self {
            config: OfstedReadyConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: OfstedReadyConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &OfstedReadyConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut OfstedReadyConfig {
        &mut self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SchoolType;

    #[test]
    fn workspace_file_is_preferred_over_dot_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".ofstedready")).unwrap();
        fs::write(
            dir.path().join(".ofstedready").join("ofstedready.toml"),
            "[school]\nname = \"Hidden\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("ofstedready.toml"),
            "[school]\nname = \"Top Level\"\n",
        )
        .unwrap();

        let manager =
            ConfigManager::load_from_candidates(ConfigManager::workspace_candidates(dir.path()))
                .unwrap();
        assert_eq!(manager.config().school.name, "Top Level");
        assert_eq!(
            manager.config_path(),
            Some(dir.path().join("ofstedready.toml").as_path())
        );
    }

    #[test]
    fn missing_files_give_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager =
            ConfigManager::load_from_candidates(ConfigManager::workspace_candidates(dir.path()))
                .unwrap();
        assert_eq!(manager.config(), &OfstedReadyConfig::default());
        assert!(manager.config_path().is_none());
        assert_eq!(manager.config().school.school_type, SchoolType::Primary);
    }
}
