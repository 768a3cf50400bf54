//! Registries and the machinery that finds them.
//!
//! A registry is a named, URL-addressable source of templates or packages.
//! Registries are described by persisted [`RegistryRecord`]s, built into
//! live [`Registry`] values by a [`GithubRegistryFactory`], and cached by a
//! [`RegistryProvider`].
//!
//! # Lookup
//!
//! 1. Check the provider's cache (by exact name, or by short-URL prefix)
//! 2. On a miss, fetch the record from the [`RegistryService`]
//! 3. Build the registry from the record's type and format tags
//! 4. Cache it under the registry's own name
//!
//! # Example
//!
//! ```
//! use registry_resolver::registry::{RegistryRecord, RegistryVariant, registry_variant};
//!
//! let record = RegistryRecord::github(
//!     "charts",
//!     "github.com/helm/charts",
//!     "unversioned;one-level",
//! );
//! assert_eq!(registry_variant(&record).unwrap(), RegistryVariant::Package);
//! ```

pub mod api;
pub mod factory;
pub mod github;
pub mod provider;
pub mod record;
pub mod service;
pub mod types;

// Re-exports
pub use api::{serves_short_url, trim_url_scheme, urls_to_strings, Registry};
pub use factory::{registry_variant, DefaultRegistryFactory, GithubRegistryFactory, RegistryVariant};
pub use github::{
    ContentEntry, ContentsClient, GithubApiClient, GithubPackageRegistry, GithubTemplateRegistry,
};
pub use provider::{CachingRegistryProvider, RegistryProvider};
pub use record::{parse_registry_format, RegistryFormat, RegistryRecord, RegistryType};
pub use service::{InMemoryRegistryService, RegistryService};
pub use types::Type;
