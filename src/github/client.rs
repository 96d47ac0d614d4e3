//! HTTP client for the GitHub read API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{DepscanError, Result};

/// Public GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Media type asking for the structured v3 JSON representation.
const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Release object as returned by `GET /repos/{owner}/{name}/releases/latest`.
#[derive(Debug, Deserialize)]
struct LatestRelease {
    #[serde(default)]
    tag_name: Option<String>,
}

/// One element of the array returned by `GET /repos/{owner}/{name}/tags`.
#[derive(Debug, Deserialize)]
struct TagEntry {
    #[serde(default)]
    name: String,
}

/// Client for the two GitHub lookup endpoints.
///
/// Built once at startup and reused for every dependency in the scan. Each
/// lookup issues exactly one outbound request with a bounded timeout; the
/// connection is scoped to the call.
pub struct GithubClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client against `base_url`.
    ///
    /// `token` is the optional bearer credential; an empty string is treated
    /// as unauthenticated, never as an error.
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("depscan/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Whether requests will carry an Authorization header.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Latest formal release tag for `repo`, if the repo publishes releases.
    ///
    /// Returns `Ok(None)` on 404 (no releases exist) or when the release
    /// carries no tag name. Any other non-success status is an error.
    pub fn latest_release_tag(&self, repo: &str) -> Result<Option<String>> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, repo);
        let response = self.get(&url)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DepscanError::UnexpectedStatus {
                url,
                status: response.status().as_u16(),
            });
        }

        let release: LatestRelease = response.json()?;
        Ok(release.tag_name.filter(|t| !t.is_empty()))
    }

    /// Newest raw tag name for `repo`.
    ///
    /// Asks the server for a single tag, newest first. Returns `Ok(None)`
    /// when the repo has no tags at all.
    pub fn newest_tag(&self, repo: &str) -> Result<Option<String>> {
        let url = format!("{}/repos/{}/tags?per_page=1", self.base_url, repo);
        let response = self.get(&url)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DepscanError::UnexpectedStatus {
                url,
                status: response.status().as_u16(),
            });
        }

        let tags: Vec<TagEntry> = response.json()?;
        Ok(tags.into_iter().next().map(|t| t.name).filter(|n| !n.is_empty()))
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let mut request = self.http.get(url).header("Accept", ACCEPT_HEADER);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        Ok(request.send()?)
    }
}
