//! Configuration file discovery and loading.
//!
//! The config path is chosen in this order:
//! 1. `--config` on the command line
//! 2. `REGRES_CONFIG` environment variable
//! 3. `registries.yml` in the working directory
//!
//! Only the default location may be absent; an explicitly named file that
//! does not exist is an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::registries::RegistriesConfig;
use crate::error::{RegistryError, Result};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "REGRES_CONFIG";

/// Config file looked up when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "registries.yml";

/// Where the config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    /// Path to read.
    pub path: PathBuf,
    /// Whether the path was named by the user rather than defaulted.
    pub explicit: bool,
}

impl ConfigLocation {
    /// Pick the config path from the flag, the environment value, or the
    /// default file under `cwd`.
    pub fn resolve(flag: Option<&Path>, env: Option<&str>, cwd: &Path) -> Self {
        if let Some(path) = flag {
            return Self {
                path: path.to_path_buf(),
                explicit: true,
            };
        }

        if let Some(path) = env.filter(|p| !p.is_empty()) {
            return Self {
                path: PathBuf::from(path),
                explicit: true,
            };
        }

        Self {
            path: cwd.join(DEFAULT_CONFIG_FILE),
            explicit: false,
        }
    }

    /// Load the config at this location.
    pub fn load(&self) -> Result<RegistriesConfig> {
        if !self.explicit && !self.path.exists() {
            tracing::debug!("No config at {}; using defaults", self.path.display());
            return Ok(RegistriesConfig::default());
        }

        load_config_file(&self.path)
    }
}

/// Load the config named by `flag`, `REGRES_CONFIG`, or the default file.
pub fn load_config(flag: Option<&Path>, cwd: &Path) -> Result<RegistriesConfig> {
    let env = std::env::var(CONFIG_ENV).ok();
    ConfigLocation::resolve(flag, env.as_deref(), cwd).load()
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RegistriesConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RegistryError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RegistryError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    tracing::debug!(
        "Loaded {} registries from {}",
        config.registries.len(),
        path.display()
    );
    Ok(config)
}

/// Parse YAML content into a [`RegistriesConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RegistriesConfig> {
    if content.trim().is_empty() {
        return Ok(RegistriesConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| RegistryError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
