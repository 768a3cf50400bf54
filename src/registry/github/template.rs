//! Versioned, collection-organized template registry.
//!
//! Layout: `<qualifier>/<name>/<version>/` holding `<name>.jinja` or
//! `<name>.py`, optionally with a matching `.schema` file.

use std::sync::Arc;
use url::Url;

use super::client::ContentsClient;
use super::{collect_download_urls, GithubLocation};
use crate::error::{RegistryError, Result};
use crate::registry::api::Registry;
use crate::registry::types::Type;

const TEMPLATE_EXTENSIONS: [&str; 2] = ["jinja", "py"];

/// A template registry hosted in a GitHub repository.
pub struct GithubTemplateRegistry {
    name: String,
    location: GithubLocation,
    contents: Arc<dyn ContentsClient>,
}

impl GithubTemplateRegistry {
    /// Create a template registry for `url` (`github.com/<owner>/<repo>`).
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

    fn type_path(t: &Type) -> Result<String> {
        let version = t.version.as_deref().ok_or_else(|| RegistryError::InvalidType {
            message: format!("template '{}' requires a version", t.name),
        })?;

        Ok(match &t.qualifier {
            Some(qualifier) => format!("{}/{}/{}", qualifier, t.name, version),
            None => format!("{}/{}", t.name, version),
        })
    }
}

impl Registry for GithubTemplateRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    fn short_url(&self) -> &str {
        &self.location.short_url
    }

    fn download_urls(&self, t: &Type) -> Result<Vec<Url>> {
        let path = Self::type_path(t)?;
        tracing::debug!("Listing template {} in {}", t, self.location.short_url);

        let entries = self
            .contents
            .list(&self.location.owner, &self.location.repo, &path)?;

        let is_template = |file: &str| {
            TEMPLATE_EXTENSIONS
                .iter()
                .any(|ext| file == format!("{}.{}", t.name, ext))
        };

        if !entries.iter().any(|e| e.is_file() && is_template(&e.name)) {
            return Err(RegistryError::NotFound {
                what: format!("template {} in {}", t, self.location.short_url),
            });
        }

        collect_download_urls(entries, |entry| {
            let file = entry.name.strip_suffix(".schema").unwrap_or(&entry.name);
            is_template(file)
        })
    }
}
