//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::github::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

/// depscan - Dependency freshness scanner.
#[derive(Debug, Parser)]
#[command(name = "depscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan the registry and print the JSON report (default if no command specified)
    Scan(ScanArgs),

    /// Print the tracked dependency table
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    /// GitHub API base URL (for GitHub Enterprise or testing)
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer token for authenticated requests; unset means anonymous
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl ScanArgs {
    /// Defaults for a bare `depscan` invocation, honoring the same
    /// environment variables clap would have applied to `depscan scan`.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            token: std::env::var("GITHUB_TOKEN").ok(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_parses_with_no_subcommand() {
        let cli = Cli::try_parse_from(["depscan"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn scan_defaults() {
        let cli = Cli::try_parse_from(["depscan", "scan"]).unwrap();
        match cli.command {
            Some(Commands::Scan(args)) => {
                // api_url may be overridden by GITHUB_API_URL in the
                // environment, so only the timeout default is pinned here.
                assert_eq!(args.timeout, DEFAULT_TIMEOUT_SECS);
                assert!(!args.api_url.is_empty());
            }
            other => panic!("expected scan, got {:?}", other),
        }
    }

    #[test]
    fn scan_accepts_api_url_and_timeout() {
        let cli = Cli::try_parse_from([
            "depscan",
            "scan",
            "--api-url",
            "http://127.0.0.1:9999",
            "--timeout",
            "5",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Scan(args)) => {
                assert_eq!(args.api_url, "http://127.0.0.1:9999");
                assert_eq!(args.timeout, 5);
            }
            other => panic!("expected scan, got {:?}", other),
        }
    }

    #[test]
    fn from_env_uses_default_timeout() {
        let args = ScanArgs::from_env();
        assert_eq!(args.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn debug_flag_is_global() {
        let cli = Cli::try_parse_from(["depscan", "list", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }
}
