//! Scan command implementation.
//!
//! The `depscan scan` command resolves every registry entry and prints the
//! JSON report to stdout.

use std::time::Duration;

use crate::cli::args::ScanArgs;
use crate::error::Result;
use crate::github::GithubClient;
use crate::report;
use crate::resolver::Resolver;

use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(args: ScanArgs) -> Self {
        Self { args }
    }
}

impl Command for ScanCommand {
    fn execute(&self) -> Result<CommandResult> {
        let client = GithubClient::new(
            &self.args.api_url,
            self.args.token.clone(),
            Duration::from_secs(self.args.timeout),
        )?;
        tracing::debug!(
            api_url = %self.args.api_url,
            authenticated = client.is_authenticated(),
            "starting scan"
        );

        let resolver = Resolver::new(client);
        let report = report::assemble(&resolver);

        // The report is the program's stdout; everything else goes to stderr.
        println!("{}", report.to_json_pretty().map_err(anyhow::Error::from)?);

        // Per-entry failures are already recorded inside the report and do
        // not affect the exit code.
        Ok(CommandResult::success())
    }
}
