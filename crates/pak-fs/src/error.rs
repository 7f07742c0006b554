//! Error types for pak-fs

use std::fmt;
use std::path::PathBuf;

/// Result type for pak-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while persisting configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to serialize TOML for {path}: {message}")]
    Serialize { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML at {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialize(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self::Serialize {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
