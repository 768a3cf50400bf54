//! Integration tests for the config public API.

use registry_resolver::config::{load_config_file, ConfigLocation, RegistriesConfig};
use registry_resolver::registry::{RegistryProvider, RegistryService};
use registry_resolver::RegistryError;
use std::fs;
use tempfile::TempDir;

#[test]
fn load_config_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("registries.yml");
    fs::write(
        &path,
        r#"
github:
  timeout: 5
registries:
  - name: acme-templates
    url: github.com/acme/templates
    type: github
    format: versioned;collection
"#,
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();

    assert_eq!(config.github.timeout, 5);
    assert_eq!(config.registries.len(), 1);
    let service = config.build_service();
    assert_eq!(service.list().unwrap().len(), 3);
    assert_eq!(
        service.get("acme-templates").unwrap().url,
        "github.com/acme/templates"
    );
}

#[test]
fn invalid_config_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("registries.yml");
    fs::write(&path, "registries: {not: [a list").unwrap();

    let err = load_config_file(&path).unwrap_err();

    assert!(matches!(err, RegistryError::ConfigParseError { .. }));
    assert!(err.to_string().contains("registries.yml"));
}

#[test]
fn default_location_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();

    let config = ConfigLocation::resolve(None, None, temp.path())
        .load()
        .unwrap();

    assert!(config.registries.is_empty());
    assert_eq!(config.records().len(), 2);
}

#[test]
fn provider_from_default_config_knows_seeded_registries() {
    let provider = RegistriesConfig::default().build_provider().unwrap();

    let registry = provider
        .get_registry_by_name("application-dm-templates")
        .unwrap();

    assert_eq!(
        registry.short_url(),
        "github.com/kubernetes/application-dm-templates"
    );
}
