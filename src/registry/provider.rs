//! Lazily constructed, cached registries.
//!
//! [`CachingRegistryProvider`] owns a cache from canonical registry name to
//! live [`Registry`]. On a miss it asks the [`RegistryService`] for the
//! record, builds the registry through a [`GithubRegistryFactory`] and
//! caches it under the name the registry reports. Entries are never evicted.
//!
//! # Concurrency
//!
//! Hits only take the read side of the cache lock. Misses are single-flight
//! per lookup key: callers missing on the same name or URL share one gate,
//! and the cache is checked again once the gate is held, so a registry built
//! by a racing caller is reused rather than rebuilt. Misses on different keys
//! proceed in parallel. The cache lock is never held across metadata or
//! network I/O, and an existing cache entry is never replaced.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

use super::api::{serves_short_url, Registry};
use super::factory::{DefaultRegistryFactory, GithubRegistryFactory};
use super::github::{ContentsClient, GithubApiClient};
use super::record::RegistryRecord;
use super::service::{InMemoryRegistryService, RegistryService};
use crate::error::Result;

type Registries = HashMap<String, Arc<dyn Registry>>;
type Gate = Arc<Mutex<()>>;

/// Looks up live registries by name or by short URL.
pub trait RegistryProvider: Send + Sync {
    /// Registry serving `url`, matched by scheme-insensitive prefix.
    fn get_registry_by_short_url(&self, url: &str) -> Result<Arc<dyn Registry>>;

    /// Registry with exactly this name.
    fn get_registry_by_name(&self, name: &str) -> Result<Arc<dyn Registry>>;
}

/// [`RegistryProvider`] that builds registries on demand and keeps them.
pub struct CachingRegistryProvider {
    service: Arc<dyn RegistryService>,
    factory: Arc<dyn GithubRegistryFactory>,
    registries: RwLock<Registries>,
    in_flight: Mutex<HashMap<String, Gate>>,
}

impl CachingRegistryProvider {
    /// Create a provider over `service`, building registries with `factory`.
    pub fn new(service: Arc<dyn RegistryService>, factory: Arc<dyn GithubRegistryFactory>) -> Self {
        Self {
            service,
            factory,
            registries: RwLock::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Create a provider over `service` whose registries list contents
    /// through `contents`.
    pub fn with_contents(
        service: Arc<dyn RegistryService>,
        contents: Arc<dyn ContentsClient>,
    ) -> Self {
        Self::new(service, Arc::new(DefaultRegistryFactory::new(contents)))
    }

    /// Create a provider over the default registries, talking to the
    /// public GitHub API.
    pub fn seeded() -> Result<Self> {
        Ok(Self::with_contents(
            Arc::new(InMemoryRegistryService::seeded()),
            Arc::new(GithubApiClient::new()?),
        ))
    }

    /// Names of the registries constructed so far, sorted.
    pub fn cached_registry_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registries.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn get_or_create(
        &self,
        key: &str,
        lookup: impl Fn(&Registries) -> Option<Arc<dyn Registry>>,
        fetch: impl FnOnce(&dyn RegistryService) -> Result<RegistryRecord>,
    ) -> Result<Arc<dyn Registry>> {
        if let Some(registry) = lookup(&*self.registries.read()) {
            tracing::debug!("Registry cache hit for {}", key);
            return Ok(registry);
        }

        let gate = self.enter_flight(key);
        let result = {
            let _flight = gate.lock();
            self.construct(key, &lookup, fetch)
        };
        self.leave_flight(key, gate);
        result
    }

    fn construct(
        &self,
        key: &str,
        lookup: &impl Fn(&Registries) -> Option<Arc<dyn Registry>>,
        fetch: impl FnOnce(&dyn RegistryService) -> Result<RegistryRecord>,
    ) -> Result<Arc<dyn Registry>> {
        if let Some(registry) = lookup(&*self.registries.read()) {
            tracing::debug!("Registry for {} was built concurrently", key);
            return Ok(registry);
        }

        tracing::debug!("Registry cache miss for {}", key);
        let record = fetch(self.service.as_ref())?;
        let registry = self.factory.get_github_registry(&record)?;

        let mut registries = self.registries.write();
        let cached = registries
            .entry(registry.name().to_string())
            .or_insert_with(|| {
                tracing::info!(
                    "Cached registry '{}' at {}",
                    registry.name(),
                    registry.short_url()
                );
                registry.clone()
            })
            .clone();

        Ok(cached)
    }

    fn enter_flight(&self, key: &str) -> Gate {
        self.in_flight
            .lock()
            .entry(key.to_string())
            .or_default()
            .clone()
    }

    fn leave_flight(&self, key: &str, gate: Gate) {
        let mut in_flight = self.in_flight.lock();
        // Held by the map and this caller only: no one else is waiting.
        if Arc::strong_count(&gate) == 2 {
            in_flight.remove(key);
        }
    }
}

impl RegistryProvider for CachingRegistryProvider {
    fn get_registry_by_short_url(&self, url: &str) -> Result<Arc<dyn Registry>> {
        self.get_or_create(
            url,
            |registries| {
                registries
                    .values()
                    .find(|r| serves_short_url(r.as_ref(), url))
                    .cloned()
            },
            |service| service.get_by_url(url),
        )
    }

    fn get_registry_by_name(&self, name: &str) -> Result<Arc<dyn Registry>> {
        self.get_or_create(
            name,
            |registries| registries.get(name).cloned(),
            |service| service.get(name),
        )
    }
}
