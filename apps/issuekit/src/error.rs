//! Error type for the fallible edges of the crate (config, loading, parsing
//! severity text). The core model and the presenter never fail.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unsupported issue document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("bad glob pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("unknown severity '{0}' (expected warn|error)")]
    InvalidSeverity(String),
}

impl Error {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
