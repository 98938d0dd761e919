//! Error types for catalog loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading the command catalog.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Descriptor file could not be read.
    #[error("failed to read command catalog '{}'", .path.display())]
    Io {
        /// Descriptor file path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Descriptor file was not a JSON array of descriptors.
    #[error("failed to parse command catalog '{}'", .path.display())]
    Json {
        /// Descriptor file path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// A descriptor was structurally valid but unusable.
    #[error("invalid command catalog entry {index}: {reason}")]
    InvalidEntry {
        /// Zero-based position of the entry.
        index: usize,
        /// Static reason for the failure.
        reason: &'static str,
    },
    /// The catalog contained no descriptors.
    #[error("command catalog '{}' is empty", .path.display())]
    Empty {
        /// Descriptor file path.
        path: PathBuf,
    },
}
