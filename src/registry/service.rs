//! Registry metadata service.
//!
//! The provider asks a [`RegistryService`] for the persisted record of a
//! registry whenever its cache misses. [`InMemoryRegistryService`] is the
//! process-local implementation, optionally seeded with the well-known
//! registries.

use parking_lot::RwLock;

use super::api::trim_url_scheme;
use super::record::RegistryRecord;
use crate::error::{RegistryError, Result};

/// Format of the default chart (package) registry.
pub const PACKAGE_REGISTRY_FORMAT: &str = "unversioned;one-level";

/// Format of the default template registry.
pub const TEMPLATE_REGISTRY_FORMAT: &str = "versioned;collection";

/// Source of persisted registry records.
pub trait RegistryService: Send + Sync {
    /// Record with exactly this name.
    fn get(&self, name: &str) -> Result<RegistryRecord>;

    /// Record whose URL is a prefix of `url`, ignoring the scheme.
    fn get_by_url(&self, url: &str) -> Result<RegistryRecord>;

    /// All records.
    fn list(&self) -> Result<Vec<RegistryRecord>>;

    /// Add a new record.
    fn create(&self, record: RegistryRecord) -> Result<()>;

    /// Remove the record with this name.
    fn delete(&self, name: &str) -> Result<()>;
}

/// Registry records kept in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRegistryService {
    records: RwLock<Vec<RegistryRecord>>,
}

impl InMemoryRegistryService {
    /// Create an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service holding the default chart and template registries.
    pub fn seeded() -> Self {
        Self::from_records(default_records())
    }

    /// Create a service holding `records`; later records replace earlier
    /// ones with the same name.
    pub fn from_records(records: impl IntoIterator<Item = RegistryRecord>) -> Self {
        let service = Self::new();
        for record in records {
            service.upsert(record);
        }
        service
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn upsert(&self, record: RegistryRecord) {
        let mut records = self.records.write();
        match records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }
}

/// The registries every installation knows about.
pub fn default_records() -> Vec<RegistryRecord> {
    vec![
        RegistryRecord::github("charts", "github.com/helm/charts", PACKAGE_REGISTRY_FORMAT),
        RegistryRecord::github(
            "application-dm-templates",
            "github.com/kubernetes/application-dm-templates",
            TEMPLATE_REGISTRY_FORMAT,
        ),
    ]
}

impl RegistryService for InMemoryRegistryService {
    fn get(&self, name: &str) -> Result<RegistryRecord> {
        self.records
            .read()
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                what: name.to_string(),
            })
    }

    fn get_by_url(&self, url: &str) -> Result<RegistryRecord> {
        let trimmed = trim_url_scheme(url);
        self.records
            .read()
            .iter()
            .find(|r| trimmed.starts_with(trim_url_scheme(&r.url)))
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                what: url.to_string(),
            })
    }

    fn list(&self) -> Result<Vec<RegistryRecord>> {
        Ok(self.records.read().clone())
    }

    fn create(&self, record: RegistryRecord) -> Result<()> {
        let mut records = self.records.write();
        if records.iter().any(|r| r.name == record.name) {
            return Err(RegistryError::AlreadyExists { name: record.name });
        }
        records.push(record);
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|r| r.name != name);
        if records.len() == before {
            return Err(RegistryError::NotFound {
                what: name.to_string(),
            });
        }
        Ok(())
    }
}
