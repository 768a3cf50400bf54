//! Registries command implementation.
//!
//! Provides `regres registries list` and `regres registries show <NAME>`.

use clap::{Args, Subcommand};
use std::io::Write;

use super::dispatcher::{Command, CommandResult};
use crate::config::RegistriesConfig;
use crate::error::Result;
use crate::registry::{registry_variant, RegistryRecord, RegistryService};

/// Arguments for the registries command.
#[derive(Debug, Clone, Args)]
pub struct RegistriesArgs {
    #[command(subcommand)]
    pub command: RegistriesSubcommand,
}

/// Registries subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum RegistriesSubcommand {
    /// List known registries.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show one registry.
    Show {
        /// Registry name.
        name: String,
    },
}

/// The registries command implementation.
pub struct RegistriesCommand<'a> {
    config: &'a RegistriesConfig,
    args: RegistriesArgs,
}

impl<'a> RegistriesCommand<'a> {
    /// Create a new registries command.
    pub fn new(config: &'a RegistriesConfig, args: RegistriesArgs) -> Self {
        Self { config, args }
    }
}

impl Command for RegistriesCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let service = self.config.build_service();

        match &self.args.command {
            RegistriesSubcommand::List { json } => list_registries(&service.list()?, *json, out)?,
            RegistriesSubcommand::Show { name } => show_registry(&service.get(name)?, out)?,
        }

        Ok(CommandResult::success())
    }
}

fn list_registries(records: &[RegistryRecord], json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(records).map_err(anyhow::Error::from)?;
        writeln!(out, "{}", output)?;
        return Ok(());
    }

    let width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for record in records {
        writeln!(out, "{:width$}  {}  [{}]", record.name, record.url, record.format)?;
    }
    Ok(())
}

fn show_registry(record: &RegistryRecord, out: &mut dyn Write) -> Result<()> {
    let kind = match registry_variant(record) {
        Ok(variant) => format!("{:?}", variant).to_lowercase(),
        Err(e) => format!("unsupported ({})", e),
    };

    writeln!(out, "Name:   {}", record.name)?;
    writeln!(out, "URL:    {}", record.url)?;
    writeln!(out, "Type:   {}", record.registry_type)?;
    writeln!(out, "Format: {}", record.format)?;
    writeln!(out, "Kind:   {}", kind)?;
    Ok(())
}
