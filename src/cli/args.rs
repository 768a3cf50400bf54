//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::registries::RegistriesArgs;

/// Resolve template and package references into download URLs.
#[derive(Debug, Parser)]
#[command(name = "regres")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to registries config (overrides REGRES_CONFIG and ./registries.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print download URLs for type references
    Resolve(ResolveArgs),

    /// Inspect known registries
    Registries(RegistriesArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Type references, e.g. github.com/helm/charts/cassandra
    #[arg(required = true)]
    pub types: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
