//! Construction of live registries from persisted records.

use std::sync::Arc;

use super::api::Registry;
use super::github::{ContentsClient, GithubPackageRegistry, GithubTemplateRegistry};
use super::record::{RegistryFormat, RegistryRecord, RegistryType};
use crate::error::{RegistryError, Result};

/// Builds a [`Registry`] for a record. Substitutable on the provider.
pub trait GithubRegistryFactory: Send + Sync {
    /// Construct the registry described by `record`.
    fn get_github_registry(&self, record: &RegistryRecord) -> Result<Arc<dyn Registry>>;
}

/// Which concrete registry a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryVariant {
    /// `unversioned` + `one-level`.
    Package,
    /// `versioned` + `collection`.
    Template,
}

/// Decide the variant from the record's type and format tags.
pub fn registry_variant(record: &RegistryRecord) -> Result<RegistryVariant> {
    if record.registry_type != RegistryType::Github {
        return Err(RegistryError::UnknownRegistryType {
            registry_type: record.registry_type.to_string(),
        });
    }

    let tags = record.formats();
    let has = |tag: RegistryFormat| tags.contains(&tag);

    if has(RegistryFormat::Unversioned) && has(RegistryFormat::OneLevel) {
        return Ok(RegistryVariant::Package);
    }

    if has(RegistryFormat::Versioned) && has(RegistryFormat::Collection) {
        return Ok(RegistryVariant::Template);
    }

    Err(RegistryError::UnknownRegistryFormat {
        format: record.format.clone(),
    })
}

/// Builds GitHub package and template registries sharing one contents client.
pub struct DefaultRegistryFactory {
    contents: Arc<dyn ContentsClient>,
}

impl DefaultRegistryFactory {
    /// Create a factory whose registries list contents through `contents`.
    pub fn new(contents: Arc<dyn ContentsClient>) -> Self {
        Self { contents }
    }
}

impl GithubRegistryFactory for DefaultRegistryFactory {
    fn get_github_registry(&self, record: &RegistryRecord) -> Result<Arc<dyn Registry>> {
        let variant = registry_variant(record)?;
        let registry: Arc<dyn Registry> = match variant {
            RegistryVariant::Package => Arc::new(GithubPackageRegistry::new(
                &record.name,
                &record.url,
                self.contents.clone(),
            )?),
            RegistryVariant::Template => Arc::new(GithubTemplateRegistry::new(
                &record.name,
                &record.url,
                self.contents.clone(),
            )?),
        };

        tracing::debug!("Built {:?} registry '{}' for {}", variant, record.name, record.url);
        Ok(registry)
    }
}
