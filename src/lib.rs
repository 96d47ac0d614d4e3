//! depscan - Dependency freshness scanner.
//!
//! depscan walks a fixed table of external dependencies (tools, container
//! images, CI actions), asks the GitHub API for each one's latest release
//! tag with a newest-raw-tag fallback, and prints a single JSON report
//! mapping display labels to resolved versions. It is meant to run
//! periodically from an operations pipeline, feeding a dashboard or a
//! version-bump bot.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`github`] - Blocking GitHub REST API client
//! - [`registry`] - The static table of tracked dependencies
//! - [`report`] - Report accumulation and JSON serialization
//! - [`resolver`] - Two-tier tag resolution
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use depscan::github::GithubClient;
//! use depscan::resolver::Resolver;
//! use depscan::report;
//!
//! let client = GithubClient::new("https://api.github.com", None, Duration::from_secs(30))?;
//! let resolver = Resolver::new(client);
//! println!("{}", report::assemble(&resolver).to_json_pretty()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod error;
pub mod github;
pub mod registry;
pub mod report;
pub mod resolver;

pub use error::{DepscanError, Result};
