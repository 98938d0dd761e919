//! # Design
//!
//! - One variant per failure the primitives can report, grouped as input
//!   validation, filesystem state, environment and network failures.
//! - `Display` is the exact message shown to the user, so every variant keeps
//!   the path or value it refers to.
//! - Environment failures keep the underlying error as `source`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::Operation;

/// Result type for the operation primitives.
pub type FsOpsResult<T> = Result<T, FsOpsError>;

/// Errors produced by the operation primitives.
#[derive(Debug, Error)]
pub enum FsOpsError {
    /// A required input was left empty.
    #[error("Error: A value for the {field} is required.")]
    MissingInput {
        /// Input that was empty.
        field: &'static str,
    },
    /// Source file of a copy, move or count did not exist.
    #[error("Error: Source file not found at '{}'.", .path.display())]
    SourceNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// Target file of a delete or read did not exist.
    #[error("Error: File not found at '{}'.", .path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// Folder to enumerate did not exist.
    #[error("Error: Folder not found at '{}'.", .path.display())]
    FolderNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// Parent of a folder to create did not exist.
    #[error("Error: Parent folder not found at '{}'.", .path.display())]
    ParentNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// Folder to create was already present.
    #[error("Error: Folder '{name}' already exists in '{}'.", .parent.display())]
    FolderExists {
        /// Parent folder.
        parent: PathBuf,
        /// Requested folder name.
        name: String,
    },
    /// Copy source and destination resolve to the same file.
    #[error("Error: Source and destination are the same file '{}'.", .path.display())]
    SameFile {
        /// Resolved path of the file.
        path: PathBuf,
    },
    /// Move target was already present.
    #[error("Error: Destination file already exists at '{}'.", .path.display())]
    DestinationExists {
        /// Destination path.
        path: PathBuf,
    },
    /// URL was malformed, relative, or not http(s).
    #[error("Error: Source URL '{url}' is not valid.")]
    InvalidUrl {
        /// URL as supplied.
        url: String,
    },
    /// Wait duration was negative.
    #[error("Error: Invalid wait duration specified ({seconds} seconds).")]
    InvalidDuration {
        /// Requested duration.
        seconds: i64,
    },
    /// Automatic creation of a destination directory failed.
    #[error(
        "Error: Could not create directory '{}'. Please check permissions or path validity. {source}",
        .path.display()
    )]
    CreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// IO failure during the primary action of an operation.
    #[error("Error: {} operation failed for '{}'. {source}", .operation.label(), .path.display())]
    Io {
        /// Operation that failed.
        operation: Operation,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// HTTP transfer failure.
    #[error("Error: Download failed for URL '{url}'. {source}")]
    Transfer {
        /// URL being downloaded.
        url: String,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// Server answered with a non-success status.
    #[error("Error: Download failed for URL '{url}'. The server responded with status {status}.")]
    HttpStatus {
        /// URL being downloaded.
        url: String,
        /// HTTP status code returned.
        status: u16,
    },
}

impl FsOpsError {
    pub(crate) fn io(operation: Operation, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn create_directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDirectory {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn transfer(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transfer {
            url: url.into(),
            source,
        }
    }
}
