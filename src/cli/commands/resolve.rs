//! Resolve command implementation.
//!
//! `regres resolve <TYPE>...` prints the download URLs of each reference.

use serde::Serialize;
use std::io::Write;

use super::dispatcher::{Command, CommandResult};
use crate::cli::args::ResolveArgs;
use crate::error::Result;
use crate::registry::RegistryProvider;
use crate::resolve::resolve_download_urls;

/// One resolved reference in JSON output.
#[derive(Debug, Serialize)]
struct Resolved<'a> {
    #[serde(rename = "type")]
    type_string: &'a str,
    urls: Vec<String>,
}

/// The resolve command implementation.
pub struct ResolveCommand<'a> {
    provider: &'a dyn RegistryProvider,
    args: ResolveArgs,
}

impl<'a> ResolveCommand<'a> {
    /// Create a new resolve command.
    pub fn new(provider: &'a dyn RegistryProvider, args: ResolveArgs) -> Self {
        Self { provider, args }
    }
}

impl Command for ResolveCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut resolved = Vec::with_capacity(self.args.types.len());

        for type_string in &self.args.types {
            let urls = resolve_download_urls(self.provider, type_string)?;
            tracing::debug!("{} resolved to {} URLs", type_string, urls.len());
            resolved.push(Resolved { type_string, urls });
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolved).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
        } else {
            for url in resolved.iter().flat_map(|r| &r.urls) {
                writeln!(out, "{}", url)?;
            }
        }

        Ok(CommandResult::success())
    }
}
