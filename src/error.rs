//! Error types for loading, resolving and listing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    /// A path segment did not match any child. Carries the full requested path.
    #[error("cannot access '{path}': No such file or directory")]
    PathNotFound { path: String },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid tree description in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ListingError {
    pub fn path_not_found(path: impl Into<String>) -> Self {
        ListingError::PathNotFound { path: path.into() }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ListingError::PathNotFound { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListingError>;
