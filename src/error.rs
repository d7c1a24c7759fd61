//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for keyword-sieve operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Fatal error raised while loading a lexicon resource at startup.
///
/// Any of these must stop the process before it touches a document: a
/// pipeline running with a partial lexicon would silently mis-score
/// everything it sees.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The resource file could not be read at the expected path.
    #[error("lexicon resource '{name}' unreadable at {}: {source}", path.display())]
    Missing {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The resource parsed, but not into its expected shape.
    #[error("lexicon resource '{name}' does not match its expected shape: {source}")]
    Shape {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// The resource had the right shape but an invalid value.
    #[error("lexicon resource '{name}' is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Recoverable failure while handing a record to the publish sink.
///
/// Isolated to the document being published; the caller decides between
/// retry-with-backoff and drop-with-log. It must never abort processing of
/// other documents.
#[derive(Debug, Error)]
#[error("publish to '{destination}' failed: {reason}")]
pub struct SinkError {
    pub destination: String,
    pub reason: String,
}

impl SinkError {
    pub fn new(destination: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            reason: reason.into(),
        }
    }
}
