//! Integration tests for download URL resolution through the public API.

use registry_resolver::registry::{
    CachingRegistryProvider, GithubRegistryFactory, InMemoryRegistryService, Registry,
    RegistryProvider, RegistryRecord, Type,
};
use registry_resolver::resolve::{classify, resolve_download_urls, TypeReference};
use registry_resolver::{RegistryError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

/// Registry that records the types it is asked about.
struct RecordingRegistry {
    name: String,
    short_url: String,
    seen: Mutex<Vec<Type>>,
}

impl Registry for RecordingRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    fn short_url(&self) -> &str {
        &self.short_url
    }

    fn download_urls(&self, t: &Type) -> Result<Vec<Url>> {
        self.seen.lock().unwrap().push(t.clone());
        let url = format!("https://raw.example.com/{}/{}", self.name, t.name);
        Ok(vec![Url::parse(&url).unwrap()])
    }
}

/// Factory handing out recording registries and counting builds.
#[derive(Default)]
struct RecordingFactory {
    built: AtomicUsize,
    registries: Mutex<Vec<Arc<RecordingRegistry>>>,
}

impl RecordingFactory {
    fn registry(&self, name: &str) -> Arc<RecordingRegistry> {
        self.registries
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .expect("registry was built")
    }
}

impl GithubRegistryFactory for RecordingFactory {
    fn get_github_registry(&self, record: &RegistryRecord) -> Result<Arc<dyn Registry>> {
        registry_resolver::registry::registry_variant(record)?;
        self.built.fetch_add(1, Ordering::SeqCst);
        let registry = Arc::new(RecordingRegistry {
            name: record.name.clone(),
            short_url: record.url.clone(),
            seen: Mutex::new(Vec::new()),
        });
        self.registries.lock().unwrap().push(registry.clone());
        Ok(registry)
    }
}

fn provider() -> (CachingRegistryProvider, Arc<RecordingFactory>) {
    let factory = Arc::new(RecordingFactory::default());
    let provider = CachingRegistryProvider::new(
        Arc::new(InMemoryRegistryService::seeded()),
        factory.clone(),
    );
    (provider, factory)
}

#[test]
fn template_reference_end_to_end() {
    let (provider, factory) = provider();

    let urls = resolve_download_urls(
        &provider,
        "github.com/kubernetes/application-dm-templates/storage/redis:v1",
    )
    .unwrap();

    assert_eq!(
        urls,
        ["https://raw.example.com/application-dm-templates/redis"]
    );
    let registry = factory.registry("application-dm-templates");
    assert_eq!(
        registry.short_url(),
        "github.com/kubernetes/application-dm-templates"
    );
    assert_eq!(
        registry.seen.lock().unwrap().as_slice(),
        [Type::new("storage", "redis", "v1").unwrap()]
    );
}

#[test]
fn package_reference_end_to_end() {
    let (provider, factory) = provider();

    let urls = resolve_download_urls(&provider, "github.com/helm/charts/cassandra").unwrap();

    assert_eq!(urls, ["https://raw.example.com/charts/cassandra"]);
    let seen = factory.registry("charts").seen.lock().unwrap().clone();
    assert_eq!(seen, [Type::new("", "cassandra", "").unwrap()]);
}

#[test]
fn scheme_prefixed_short_forms_end_to_end() {
    let (provider, factory) = provider();

    let template = resolve_download_urls(
        &provider,
        "https://github.com/kubernetes/application-dm-templates/storage/redis:v1",
    )
    .unwrap();
    let package =
        resolve_download_urls(&provider, "https://github.com/helm/charts/cassandra").unwrap();

    assert_eq!(
        template,
        ["https://raw.example.com/application-dm-templates/redis"]
    );
    assert_eq!(package, ["https://raw.example.com/charts/cassandra"]);
    assert_eq!(factory.built.load(Ordering::SeqCst), 2);
    assert_eq!(
        provider.cached_registry_names(),
        ["application-dm-templates", "charts"]
    );
}

#[test]
fn full_url_end_to_end() {
    let (provider, factory) = provider();

    let urls = resolve_download_urls(&provider, "https://example.com/blob/file.yaml").unwrap();

    assert_eq!(urls, ["https://example.com/blob/file.yaml"]);
    assert_eq!(factory.built.load(Ordering::SeqCst), 0);
    assert!(provider.cached_registry_names().is_empty());
}

#[test]
fn primitive_end_to_end() {
    let (provider, factory) = provider();

    let urls = resolve_download_urls(&provider, "string").unwrap();

    assert!(urls.is_empty());
    assert_eq!(factory.built.load(Ordering::SeqCst), 0);
}

#[test]
fn repeated_references_build_registry_once() {
    let (provider, factory) = provider();

    for name in ["cassandra", "redis", "mysql"] {
        let t = format!("github.com/helm/charts/{}", name);
        resolve_download_urls(&provider, &t).unwrap();
    }

    assert_eq!(factory.built.load(Ordering::SeqCst), 1);
    assert_eq!(provider.cached_registry_names(), ["charts"]);
}

#[test]
fn scheme_does_not_affect_cached_lookup() {
    let (provider, factory) = provider();

    let https = provider
        .get_registry_by_short_url("https://github.com/helm/charts")
        .unwrap();
    let http = provider
        .get_registry_by_short_url("http://github.com/helm/charts")
        .unwrap();

    assert!(Arc::ptr_eq(&https, &http));
    assert_eq!(factory.built.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_repository_is_not_found() {
    let (provider, _) = provider();

    let err = resolve_download_urls(&provider, "github.com/acme/nothing/here").unwrap_err();

    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[test]
fn template_form_always_classifies_as_template() {
    for t in [
        "github.com/kubernetes/application-dm-templates/storage/redis:v1",
        "github.com/a/b/c/d:2",
    ] {
        assert_eq!(classify(t), TypeReference::Template);
    }
}
