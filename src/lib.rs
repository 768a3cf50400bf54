//! registry-resolver - Resolve template and package references into download URLs.
//!
//! A reference such as `github.com/kubernetes/application-dm-templates/storage/redis:v1`
//! names an item inside a registry. This crate finds the registry serving the
//! reference, building and caching it on first use, and asks it for the URLs
//! to download.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Registry records, construction, and the caching provider
//! - [`resolve`] - Reference classification and download URL resolution
//!
//! # Example
//!
//! ```
//! use registry_resolver::registry::CachingRegistryProvider;
//! use registry_resolver::resolve::resolve_download_urls;
//!
//! let provider = CachingRegistryProvider::seeded().unwrap();
//!
//! // Full URLs and primitive types never touch a registry
//! let urls = resolve_download_urls(&provider, "https://example.com/blob/file.yaml").unwrap();
//! assert_eq!(urls, ["https://example.com/blob/file.yaml"]);
//! assert!(resolve_download_urls(&provider, "string").unwrap().is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod resolve;

pub use error::{RegistryError, Result};
