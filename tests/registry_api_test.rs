//! Integration tests for GitHub-backed registries behind the caching provider.

use httpmock::prelude::*;
use registry_resolver::config::{GithubSettings, RegistriesConfig};
use registry_resolver::registry::{RegistryProvider, RegistryRecord};
use registry_resolver::resolve::resolve_download_urls;
use registry_resolver::RegistryError;

fn config_for(server: &MockServer) -> RegistriesConfig {
    RegistriesConfig {
        github: GithubSettings {
            api_url: server.base_url(),
            timeout: 10,
            token_env: None,
        },
        registries: Vec::new(),
    }
}

fn file(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    format!(
        r#"{{"name": "{name}", "path": "{path}", "type": "file",
            "download_url": "https://raw.githubusercontent.com/{path}"}}"#
    )
}

#[test]
fn resolves_template_through_contents_api() {
    let server = MockServer::start();
    let body = format!(
        "[{}, {}, {}]",
        file("storage/redis/v1/redis.jinja"),
        file("storage/redis/v1/redis.jinja.schema"),
        file("storage/redis/v1/README.md"),
    );
    let listing = server.mock(|when, then| {
        when.method(GET)
            .path("/repos/kubernetes/application-dm-templates/contents/storage/redis/v1");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let provider = config_for(&server).build_provider().unwrap();
    let urls = resolve_download_urls(
        &provider,
        "github.com/kubernetes/application-dm-templates/storage/redis:v1",
    )
    .unwrap();

    assert_eq!(
        urls,
        [
            "https://raw.githubusercontent.com/storage/redis/v1/redis.jinja",
            "https://raw.githubusercontent.com/storage/redis/v1/redis.jinja.schema",
        ]
    );
    listing.assert();
}

#[test]
fn resolves_package_through_contents_api() {
    let server = MockServer::start();
    let body = format!(
        "[{}, {}]",
        file("cassandra/manifests/service.yaml"),
        file("cassandra/manifests/statefulset.yaml"),
    );
    let listing = server.mock(|when, then| {
        when.method(GET)
            .path("/repos/helm/charts/contents/cassandra/manifests");
        then.status(200).body(body);
    });

    let provider = config_for(&server).build_provider().unwrap();
    let first = resolve_download_urls(&provider, "github.com/helm/charts/cassandra").unwrap();
    let second = resolve_download_urls(&provider, "github.com/helm/charts/cassandra").unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    // Registry construction is cached; each resolution still lists contents.
    listing.assert_calls(2);
    assert_eq!(provider.cached_registry_names(), ["charts"]);
}

#[test]
fn missing_package_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/helm/charts/contents/nope/manifests");
        then.status(404).body(r#"{"message": "Not Found"}"#);
    });

    let provider = config_for(&server).build_provider().unwrap();
    let err = resolve_download_urls(&provider, "github.com/helm/charts/nope").unwrap_err();

    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[test]
fn configured_registry_is_resolvable_by_name() {
    let server = MockServer::start();
    let mut config = config_for(&server);
    config.registries.push(RegistryRecord::github(
        "acme",
        "https://github.com/acme/charts",
        "one-level;unversioned",
    ));

    let provider = config.build_provider().unwrap();
    let registry = provider.get_registry_by_name("acme").unwrap();

    assert_eq!(registry.name(), "acme");
    assert_eq!(registry.short_url(), "github.com/acme/charts");
}

#[test]
fn unsupported_configured_registry_fails_on_use() {
    let server = MockServer::start();
    let mut config = config_for(&server);
    config.registries.push(RegistryRecord::github(
        "odd",
        "github.com/acme/odd",
        "versioned;one-level",
    ));

    let provider = config.build_provider().unwrap();
    let err = resolve_download_urls(&provider, "github.com/acme/odd/thing").unwrap_err();

    match err {
        RegistryError::UnknownRegistryFormat { format } => {
            assert_eq!(format, "versioned;one-level")
        }
        other => panic!("expected UnknownRegistryFormat, got {:?}", other),
    }
}
