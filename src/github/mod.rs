//! Blocking GitHub REST API client.
//!
//! Wraps the two read-only endpoints the scanner needs: the latest formal
//! release of a repository and its newest raw tag. Authentication is an
//! optional static bearer token; without one, requests run against the
//! anonymous rate limit.

pub mod client;

pub use client::{GithubClient, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
