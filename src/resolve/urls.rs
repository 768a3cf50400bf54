//! Turning type references into download URLs.

use url::Url;

use super::classify::{classify, parse_package_short_form, parse_template_short_form, TypeReference};
use crate::error::{RegistryError, Result};
use crate::registry::{serves_short_url, urls_to_strings, Registry, RegistryProvider, Type};

/// URLs to fetch for the type reference `t`.
///
/// Short forms are routed to the registry serving them; full HTTP(S) URLs
/// are returned as-is after a parse round trip. Anything else is a primitive
/// type and yields no URLs.
pub fn resolve_download_urls(provider: &dyn RegistryProvider, t: &str) -> Result<Vec<String>> {
    match classify(t) {
        TypeReference::Template => short_type_to_download_urls(provider, t),
        TypeReference::Package => short_type_to_package_download_urls(provider, t),
        TypeReference::Url => full_url(t),
        TypeReference::Primitive => {
            tracing::debug!("'{}' is a primitive type; nothing to download", t);
            Ok(Vec::new())
        }
    }
}

/// Download URLs for `github.com/owner/repo/qualifier/name:version`.
pub fn short_type_to_download_urls(
    provider: &dyn RegistryProvider,
    t: &str,
) -> Result<Vec<String>> {
    let parsed = parse_template_short_form(t)?;
    let registry = registry_for(provider, t)?;
    let tt = Type::new(parsed.qualifier, parsed.name, parsed.version)?;
    Ok(urls_to_strings(registry.download_urls(&tt)?))
}

/// Download URLs for `github.com/owner/repo/name`.
pub fn short_type_to_package_download_urls(
    provider: &dyn RegistryProvider,
    t: &str,
) -> Result<Vec<String>> {
    let parsed = parse_package_short_form(t)?;
    let registry = registry_for(provider, t)?;
    let tt = Type::new("", parsed.name, "")?;
    Ok(urls_to_strings(registry.download_urls(&tt)?))
}

fn registry_for(
    provider: &dyn RegistryProvider,
    t: &str,
) -> Result<std::sync::Arc<dyn Registry>> {
    let registry = provider.get_registry_by_short_url(t)?;

    if !serves_short_url(registry.as_ref(), t) {
        tracing::error!(
            "Provider returned registry '{}' ({}) for {}",
            registry.name(),
            registry.short_url(),
            t
        );
        return Err(RegistryError::InternalInconsistency {
            type_string: t.to_string(),
        });
    }

    Ok(registry)
}

fn full_url(t: &str) -> Result<Vec<String>> {
    let url = Url::parse(t).map_err(|e| RegistryError::InvalidUrl {
        url: t.to_string(),
        message: e.to_string(),
    })?;
    Ok(vec![url.to_string()])
}
