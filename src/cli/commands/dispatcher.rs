//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::RegistriesConfig;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Failures travel as errors; a result is only produced once the command's
/// report has been written.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Process exit code.
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: RegistriesConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the loaded configuration.
    pub fn new(config: RegistriesConfig) -> Self {
        Self { config }
    }

    /// Get the configuration commands run against.
    pub fn config(&self) -> &RegistriesConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Resolve(args) => {
                let provider = self.config.build_provider()?;
                let cmd = super::resolve::ResolveCommand::new(&provider, args.clone());
                cmd.execute(out)
            }
            Commands::Registries(args) => {
                let cmd = super::registries::RegistriesCommand::new(&self.config, args.clone());
                cmd.execute(out)
            }
        }
    }
}
