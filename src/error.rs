//! Construction-time errors.
//!
//! Everything that can go wrong in this crate goes wrong while building a
//! [`Responder`](crate::Responder): a rule pattern that does not compile, or a
//! configuration file that cannot be read or parsed. Answering a message never
//! fails.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid pattern in rule '{rule}' (#{index}): {source}")]
    InvalidPattern {
        rule: String,
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
