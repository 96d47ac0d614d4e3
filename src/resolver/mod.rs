//! Two-tier tag resolution.
//!
//! A dependency's "latest" version is resolved by trying an ordered list of
//! tiers: the repository's formal latest release first, then its newest raw
//! tag. The first tier that yields a non-empty tag wins. Every tier failure
//! is contained here: one unresolvable dependency must never abort the
//! scan over the rest of the registry.

use crate::error::Result;
use crate::github::GithubClient;

/// One resolution tier, in precedence order.
///
/// Adding a tier is an enum variant plus a match arm in
/// [`Resolver::attempt`]; the control flow does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// The repo's formal latest release (`releases/latest`).
    LatestRelease,
    /// The newest entry of the raw tag list (`tags?per_page=1`).
    NewestTag,
}

/// Tiers tried in sequence; first non-empty tag short-circuits.
pub const TIERS: &[Tier] = &[Tier::LatestRelease, Tier::NewestTag];

/// Resolves dependency identifiers to version tags.
pub struct Resolver {
    client: GithubClient,
}

impl Resolver {
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }

    /// Resolve `repo` to its latest known tag.
    ///
    /// Returns the empty string when no tier yields a tag. Tier errors
    /// (no releases, transport failure, malformed body) are logged and
    /// swallowed; the `Result` signature exists so the assembly loop can
    /// record anything a future tier chooses to escalate.
    pub fn resolve(&self, repo: &str) -> Result<String> {
        for tier in TIERS {
            match self.attempt(*tier, repo) {
                Ok(Some(tag)) => {
                    tracing::debug!(repo, ?tier, tag = %tag, "resolved");
                    return Ok(tag);
                }
                Ok(None) => {
                    tracing::debug!(repo, ?tier, "no tag from tier");
                }
                Err(e) => {
                    tracing::debug!(repo, ?tier, error = %e, "tier failed");
                }
            }
        }
        Ok(String::new())
    }

    fn attempt(&self, tier: Tier, repo: &str) -> Result<Option<String>> {
        match tier {
            Tier::LatestRelease => self.client.latest_release_tag(repo),
            Tier::NewestTag => self.client.newest_tag(repo),
        }
    }
}
