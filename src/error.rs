//! Error types for depscan operations.
//!
//! This module defines [`DepscanError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DepscanError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DepscanError::Other`) for unexpected errors
//! - Lookup failures are contained per dependency; nothing defined here is
//!   allowed to abort a scan over the whole registry

use thiserror::Error;

/// Core error type for depscan operations.
#[derive(Debug, Error)]
pub enum DepscanError {
    /// Transport-level HTTP failure (connect, timeout, body read, decode).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status we don't handle (not 2xx, not 404).
    #[error("Unexpected HTTP {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for depscan operations.
pub type Result<T> = std::result::Result<T, DepscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_displays_url_and_status() {
        let err = DepscanError::UnexpectedStatus {
            url: "https://api.github.com/repos/helm/helm/tags?per_page=1".into(),
            status: 503,
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("helm/helm"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DepscanError = io_err.into();
        assert!(matches!(err, DepscanError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: DepscanError = anyhow::anyhow!("something unexpected").into();
        assert_eq!(err.to_string(), "something unexpected");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DepscanError::UnexpectedStatus {
                url: "https://example.com".into(),
                status: 500,
            })
        }
        assert!(returns_error().is_err());
    }
}
