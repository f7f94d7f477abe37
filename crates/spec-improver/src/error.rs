//! Error types shared by the checklist loader, analyzer and dispatcher

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenient result alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// spec-improver errors
#[derive(Error, Debug)]
pub enum Error {
    /// A required command-line argument was missing or invalid
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Not configured: {0}")]
    NotConfigured(String),

    #[error("Create command failed: {0}")]
    Creator(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, source: serde_yaml::Error) -> Self {
        Error::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}
