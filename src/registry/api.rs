//! The [`Registry`] capability shared by every registry implementation.

use url::Url;

use super::types::Type;
use crate::error::Result;

/// A named, URL-addressable source of downloadable templates or packages.
pub trait Registry: Send + Sync {
    /// Canonical registry name; the provider caches registries under it.
    fn name(&self) -> &str;

    /// Location without scheme, e.g. `github.com/helm/charts`.
    fn short_url(&self) -> &str;

    /// URLs to download for the given item.
    fn download_urls(&self, t: &Type) -> Result<Vec<Url>>;
}

impl std::fmt::Debug for dyn Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name())
            .field("short_url", &self.short_url())
            .finish()
    }
}

/// Strip a leading `http://` or `https://`.
pub fn trim_url_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Whether `registry` serves `url`, ignoring the scheme on both sides.
pub fn serves_short_url(registry: &dyn Registry, url: &str) -> bool {
    trim_url_scheme(url).starts_with(trim_url_scheme(registry.short_url()))
}

/// Render URLs as strings.
pub fn urls_to_strings(urls: Vec<Url>) -> Vec<String> {
    urls.into_iter().map(String::from).collect()
}
