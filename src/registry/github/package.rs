//! Unversioned, one-level package registry.
//!
//! Layout: `<name>/manifests/*.yaml` at the repository root.

use std::sync::Arc;
use url::Url;

use super::client::ContentsClient;
use super::{collect_download_urls, GithubLocation};
use crate::error::Result;
use crate::registry::api::Registry;
use crate::registry::types::Type;

/// A package registry hosted in a GitHub repository.
pub struct GithubPackageRegistry {
    name: String,
    location: GithubLocation,
    contents: Arc<dyn ContentsClient>,
}

impl GithubPackageRegistry {
    /// Create a package registry for `url` (`github.com/<owner>/<repo>`).
    pub fn new(name: &str, url: &str, contents: Arc<dyn ContentsClient>) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            location: GithubLocation::parse(url)?,
            contents,
        })
    }

    /// Repository location.
    pub fn location(&self) -> &GithubLocation {
        &self.location
    }
}

impl Registry for GithubPackageRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    fn short_url(&self) -> &str {
        &self.location.short_url
    }

    fn download_urls(&self, t: &Type) -> Result<Vec<Url>> {
        let path = format!("{}/manifests", t.name);
        tracing::debug!("Listing package {} in {}", t.name, self.location.short_url);

        let entries = self
            .contents
            .list(&self.location.owner, &self.location.repo, &path)?;

        collect_download_urls(entries, |entry| {
            entry.name.ends_with(".yaml") || entry.name.ends_with(".yml")
        })
    }
}
