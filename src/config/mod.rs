//! Configuration management for PortalOps

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
///
/// Credential material is not kept here; it lives in slot files next to this
/// config, managed by the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Portal API base URL, e.g. `https://portal.example.com/api`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Signed-in username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Active project ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Active project name (display only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".portalops").join("config.yaml"))
    }

    /// Resolve the effective config path from an optional override
    pub fn path_for(override_path: Option<&str>) -> Result<PathBuf> {
        match override_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Directory holding the credential slot files for a given config path
    pub fn credentials_root(config_path: &std::path::Path) -> PathBuf {
        config_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: PathBuf) -> Result<Self> {
        match Self::load_from(path) {
            Ok(config) => Ok(config),
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Serialize config
        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        // Write to file
        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Base URL, required for any command that talks to the portal
    pub fn require_base_url(&self) -> Result<&str> {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingBaseUrl.into())
    }

    /// Forget the signed-in identity, keeping the portal URL and preferences
    pub fn clear_identity(&mut self) {
        self.username = None;
        self.project_id = None;
        self.project_name = None;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            username: None,
            project_id: None,
            project_name: None,
            preferences: Preferences::default(),
        }
    }
}
