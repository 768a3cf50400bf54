//! Configuration loading for registry resolution.
//!
//! - Schema definitions in [`registries`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use registry_resolver::config::{load_config_file, RegistriesConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("registries.yml");
//! fs::write(&path, "github:\n  timeout: 10\n").unwrap();
//!
//! let config: RegistriesConfig = load_config_file(&path).unwrap();
//! assert_eq!(config.github.timeout, 10);
//! assert_eq!(config.records().len(), 2);
//! ```

pub mod loader;
pub mod registries;

pub use loader::{
    load_config, load_config_file, parse_config, ConfigLocation, CONFIG_ENV, DEFAULT_CONFIG_FILE,
};
pub use registries::{GithubSettings, RegistriesConfig};
