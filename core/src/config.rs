use crate::errors::BasixResult;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Origin the original web client had hardcoded; kept as the default so a
/// zero-config setup talks to the same local backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

/// Configuration struct for the BASIX client
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BasixConfig {
    pub api_base_url: Option<String>,
    pub session_path: Option<PathBuf>,
    pub alerts_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Default for BasixConfig {
    fn default() -> Self {
        Self {
            api_base_url: Some(DEFAULT_API_BASE_URL.to_string()),
            session_path: None,
            alerts_path: None,
            log_level: Some("info".to_string()),
        }
    }
}

impl BasixConfig {
    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> BasixResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                crate::errors::BasixError::ConfigError(format!("Failed to read config file: {}", e))
            })?;

            let config: Self = toml::from_str(&content).map_err(|e| {
                crate::errors::BasixError::ConfigError(format!(
                    "Failed to parse config file: {}",
                    e
                ))
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to a file
    pub fn save_to_file(&self, path: &Path) -> BasixResult<()> {
        let content = toml::to_string(self).map_err(|e| {
            crate::errors::BasixError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                crate::errors::BasixError::ConfigError(format!(
                    "Failed to create config directory: {}",
                    e
                ))
            })?;
        }

        fs::write(path, content).map_err(|e| {
            crate::errors::BasixError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Merges this config with another config, preferring values from the other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            api_base_url: other
                .api_base_url
                .clone()
                .or_else(|| self.api_base_url.clone()),
            session_path: other
                .session_path
                .clone()
                .or_else(|| self.session_path.clone()),
            alerts_path: other
                .alerts_path
                .clone()
                .or_else(|| self.alerts_path.clone()),
            log_level: other.log_level.clone().or_else(|| self.log_level.clone()),
        }
    }

    /// Applies environment variable overrides on top of file-based values
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var("BASIX_API_URL") {
            if !url.is_empty() {
                self.api_base_url = Some(url);
            }
        }
        self
    }

    /// The identity API origin, falling back to the default local backend
    pub fn api_base_url(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }
}

/// Helper function to get the default config directory (~/.config/basix)
pub fn get_default_config_dir() -> BasixResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        crate::errors::BasixError::ConfigError("Could not determine home directory".to_string())
    })?;

    let config_dir = home_dir.join(".config").join("basix");

    Ok(config_dir)
}

/// Helper function to get the default config file path
pub fn get_default_config_file() -> BasixResult<PathBuf> {
    let config_dir = get_default_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = BasixConfig::default();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn merge_prefers_other_values() {
        let base = BasixConfig::default();
        let override_config = BasixConfig {
            api_base_url: Some("https://api.example.com".to_string()),
            session_path: None,
            alerts_path: None,
            log_level: None,
        };

        let merged = base.merge(&override_config);
        assert_eq!(merged.api_base_url(), "https://api.example.com");
        // Untouched values survive the merge
        assert_eq!(merged.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = BasixConfig {
            api_base_url: Some("http://localhost:9000".to_string()),
            session_path: Some(PathBuf::from("/tmp/session.json")),
            alerts_path: None,
            log_level: Some("debug".to_string()),
        };

        let content = toml::to_string(&config).unwrap();
        let parsed: BasixConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.api_base_url(), "http://localhost:9000");
        assert_eq!(parsed.session_path, config.session_path);
    }
}
