//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

use super::completions::CompletionsCommand;
use super::list::ListCommand;
use super::scan::ScanCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, returning a [`CommandResult`] with the exit code.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// A bare `depscan` invocation runs a scan with default arguments.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Scan(args)) => ScanCommand::new(args.clone()).execute(),
            Some(Commands::List(_)) => ListCommand::new().execute(),
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(),
            None => ScanCommand::new(crate::cli::args::ScanArgs::from_env()).execute(),
        }
    }
}
