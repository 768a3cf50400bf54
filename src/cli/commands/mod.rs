//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and owns the loaded configuration.

pub mod dispatcher;
pub mod registries;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
