//! Configuration schema for registry resolution.
//!
//! Maps to the YAML file read by the loader:
//!
//! ```yaml
//! github:
//!   api_url: https://api.github.com
//!   timeout: 30
//!   token_env: GITHUB_TOKEN
//! registries:
//!   - name: charts
//!     url: github.com/helm/charts
//!     type: github
//!     format: unversioned;one-level
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::registry::github::client::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::registry::service::default_records;
use crate::registry::{
    CachingRegistryProvider, GithubApiClient, InMemoryRegistryService, RegistryRecord,
};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistriesConfig {
    /// GitHub API settings
    pub github: GithubSettings,

    /// Registries added on top of the defaults
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub registries: Vec<RegistryRecord>,
}

/// How to reach the GitHub contents API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSettings {
    /// API endpoint
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Environment variable holding an API token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT.as_secs(),
            token_env: None,
        }
    }
}

impl GithubSettings {
    /// Build the contents client these settings describe.
    ///
    /// A `token_env` naming an unset or empty variable means no token.
    pub fn build_client(&self) -> Result<GithubApiClient> {
        let client =
            GithubApiClient::with_settings(&self.api_url, Duration::from_secs(self.timeout))?;

        let token = self.token_env.as_deref().and_then(|var| {
            let token = std::env::var(var).ok().filter(|token| !token.is_empty());
            if token.is_none() {
                tracing::warn!("{} is not set; using unauthenticated GitHub API", var);
            }
            token
        });

        Ok(match token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }
}

impl RegistriesConfig {
    /// Default registries followed by configured ones; a configured
    /// registry replaces a default with the same name.
    pub fn records(&self) -> Vec<RegistryRecord> {
        let mut records = default_records();
        for record in &self.registries {
            match records.iter_mut().find(|r| r.name == record.name) {
                Some(existing) => *existing = record.clone(),
                None => records.push(record.clone()),
            }
        }
        records
    }

    /// Metadata service holding [`records`](Self::records).
    pub fn build_service(&self) -> InMemoryRegistryService {
        InMemoryRegistryService::from_records(self.records())
    }

    /// Provider wired to the configured registries and GitHub client.
    pub fn build_provider(&self) -> Result<CachingRegistryProvider> {
        Ok(CachingRegistryProvider::with_contents(
            Arc::new(self.build_service()),
            Arc::new(self.github.build_client()?),
        ))
    }
}
