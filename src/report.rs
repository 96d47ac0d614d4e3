//! Scan report assembly and serialization.
//!
//! The report is the program's sole output: an ordered mapping from
//! dependency label to resolution outcome, serialized once as indented JSON
//! after the whole registry has been walked.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::registry;
use crate::resolver::Resolver;

/// Outcome of resolving one dependency.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The `owner/name` identifier that was queried.
    pub repo: String,
    /// Latest known tag; empty when nothing could be resolved.
    pub latest: String,
    /// Present only when resolution failed outside the normal fallback path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolutionResult {
    /// A (possibly empty) resolved tag.
    pub fn resolved(repo: &str, latest: String) -> Self {
        Self {
            repo: repo.to_string(),
            latest,
            error: None,
        }
    }

    /// A resolution that failed with an escaped error.
    pub fn failed(repo: &str, error: String) -> Self {
        Self {
            repo: repo.to_string(),
            latest: String::new(),
            error: Some(error),
        }
    }
}

/// Ordered label → [`ResolutionResult`] mapping.
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<(String, ResolutionResult)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result under `label`.
    ///
    /// Labels are the report key, so two registry rows sharing a label
    /// collapse to one entry: the later write replaces the value while the
    /// label keeps its original position, matching the overwrite semantics
    /// of an insertion-ordered map.
    pub fn insert(&mut self, label: &str, result: ResolutionResult) {
        if let Some(slot) = self.entries.iter_mut().find(|(l, _)| l == label) {
            slot.1 = result;
        } else {
            self.entries.push((label.to_string(), result));
        }
    }

    /// Look up a result by label.
    pub fn get(&self, label: &str) -> Option<&ResolutionResult> {
        self.entries.iter().find(|(l, _)| l == label).map(|(_, r)| r)
    }

    /// Labels in report order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as an indented JSON object, keys in report order.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, result) in &self.entries {
            map.serialize_entry(label, result)?;
        }
        map.end()
    }
}

/// Walk the registry through `resolver` and accumulate the report.
///
/// Strictly sequential, registry order. A failure on one dependency is
/// recorded in that entry and never stops the walk; the resolver already
/// contains its own failures, so the `Err` arm here is a second layer of
/// the same guarantee.
pub fn assemble(resolver: &Resolver) -> Report {
    let mut report = Report::new();
    for entry in registry::entries() {
        let result = match resolver.resolve(entry.repo) {
            Ok(tag) => ResolutionResult::resolved(entry.repo, tag),
            Err(e) => {
                tracing::warn!(repo = entry.repo, error = %e, "resolution escaped containment");
                ResolutionResult::failed(entry.repo, e.to_string())
            }
        };
        report.insert(entry.label, result);
    }
    report
}
