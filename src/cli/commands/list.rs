//! List command implementation.
//!
//! The `depscan list` command prints the tracked dependency table.

use crate::error::Result;
use crate::registry;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
#[derive(Debug, Default)]
pub struct ListCommand;

impl ListCommand {
    /// Create a new list command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        for entry in registry::entries() {
            println!("{:<45} {}", entry.repo, entry.label);
        }
        Ok(CommandResult::success())
    }
}
