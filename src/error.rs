//! Error types for the netplan-render library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for netplan-render operations
#[derive(Debug, Error)]
pub enum NetplanError {
    /// The target configuration file could not be created or truncated,
    /// e.g. because of missing permissions or a missing parent directory
    #[error("cannot open output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error occurred while streaming YAML to an already-open output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The streaming emitter was driven through an invalid event sequence
    /// (unbalanced mappings, scalar outside a mapping, write after close)
    #[error("emitter error: {0}")]
    Emitter(String),
}

/// Result type alias for netplan-render operations
pub type Result<T> = std::result::Result<T, NetplanError>;

impl From<String> for NetplanError {
    fn from(s: String) -> Self {
        NetplanError::Emitter(s)
    }
}

impl From<&str> for NetplanError {
    fn from(s: &str) -> Self {
        NetplanError::Emitter(s.to_string())
    }
}
