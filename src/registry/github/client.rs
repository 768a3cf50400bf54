//! GitHub contents API transport.
//!
//! Registries only need one thing from GitHub: the listing of a directory
//! in a repository, with a download URL for every file. [`ContentsClient`]
//! is that seam; [`GithubApiClient`] implements it over blocking HTTP.

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::error::{RegistryError, Result};

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One entry of a repository directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentEntry {
    /// File or directory name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// `file`, `dir`, `symlink` or `submodule`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw download URL; absent for directories.
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ContentEntry {
    /// Whether this entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}

/// Lists directories inside a GitHub repository.
pub trait ContentsClient: Send + Sync {
    /// List the entries of `path` in `owner/repo`.
    fn list(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<ContentEntry>>;
}

/// [`ContentsClient`] backed by the GitHub REST API.
pub struct GithubApiClient {
    client: Client,
    api_url: String,
    timeout: Duration,
    token: Option<String>,
}

impl GithubApiClient {
    /// Create a client for the public API with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_settings(DEFAULT_API_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client for a custom API endpoint and timeout.
    pub fn with_settings(api_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("regres")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout,
            token: None,
        })
    }

    /// Authenticate requests with a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the configured API endpoint.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `{api}/repos/{owner}/{repo}/contents/{path}` with every segment
    /// percent-encoded, so `?` or `#` in a type name stay in the path.
    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> Result<Url> {
        let invalid = |message: String| RegistryError::InvalidUrl {
            url: self.api_url.clone(),
            message,
        };

        let mut url = Url::parse(&self.api_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(["repos", owner, repo, "contents"])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }
}

impl ContentsClient for GithubApiClient {
    fn list(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<ContentEntry>> {
        let url = self.contents_url(owner, repo, path)?;
        tracing::debug!("Listing {}", url);

        let mut request = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().map_err(|e| RegistryError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound {
                what: format!("{}/{}/{}", owner, repo, path),
            });
        }

        if !response.status().is_success() {
            return Err(RegistryError::Fetch {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        response
            .json::<Vec<ContentEntry>>()
            .map_err(|e| RegistryError::Fetch {
                url: url.to_string(),
                message: format!("unexpected listing: {}", e),
            })
    }
}
