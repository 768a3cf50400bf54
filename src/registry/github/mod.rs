//! GitHub-backed registries.
//!
//! - [`GithubPackageRegistry`] - unversioned, one-level (`<name>/manifests/*.yaml`)
//! - [`GithubTemplateRegistry`] - versioned, collection-organized
//!   (`<qualifier>/<name>/<version>/<name>.{jinja,py}[.schema]`)
//!
//! Both list repository contents through a [`ContentsClient`].

pub mod client;
pub mod package;
pub mod template;

pub use client::{ContentEntry, ContentsClient, GithubApiClient};
pub use package::GithubPackageRegistry;
pub use template::GithubTemplateRegistry;

use url::Url;

use super::api::trim_url_scheme;
use crate::error::{RegistryError, Result};

/// Where a GitHub registry lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubLocation {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Registry URL without scheme or trailing slash.
    pub short_url: String,
}

impl GithubLocation {
    /// Parse `[scheme://]github.com/<owner>/<repo>[/...]`.
    pub fn parse(url: &str) -> Result<Self> {
        let short_url = trim_url_scheme(url).trim_end_matches('/');
        let mut parts = short_url.split('/');

        match (parts.next(), parts.next(), parts.next()) {
            (Some("github.com"), Some(owner), Some(repo))
                if !owner.is_empty() && !repo.is_empty() =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                    short_url: short_url.to_string(),
                })
            }
            _ => Err(RegistryError::InvalidRegistryUrl {
                url: url.to_string(),
            }),
        }
    }
}

/// Download URLs of `entries` that are files accepted by `keep`, sorted by path.
pub(crate) fn collect_download_urls(
    mut entries: Vec<ContentEntry>,
    keep: impl Fn(&ContentEntry) -> bool,
) -> Result<Vec<Url>> {
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    entries
        .into_iter()
        .filter(|entry| entry.is_file() && keep(entry))
        .filter_map(|entry| entry.download_url)
        .map(|raw| {
            Url::parse(&raw).map_err(|e| RegistryError::InvalidUrl {
                url: raw.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}
