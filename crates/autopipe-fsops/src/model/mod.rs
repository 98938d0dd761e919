//! Domain models for the operation primitives.
//!
//! # Design
//! - Keep operation identifiers copyable so they can tag logs and errors freely.
//! - Service settings carry only what the primitives need at call time.

use std::time::Duration;

/// Default request timeout for downloads.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Primitive operations exposed by [`crate::FileOperations`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Copy a file, overwriting the destination.
    Copy,
    /// Delete a file.
    Delete,
    /// List the files inside a folder.
    QueryFolderFiles,
    /// Create a folder beneath an existing parent.
    CreateFolder,
    /// Download a URL to a local file.
    Download,
    /// Block for a number of seconds.
    Wait,
    /// Count lines containing a search string.
    CountRows,
    /// Move a file.
    Move,
    /// Write text to a file.
    WriteText,
    /// Read a file as text.
    ReadText,
}

impl Operation {
    /// Stable identifier used in structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Delete => "delete",
            Self::QueryFolderFiles => "query_folder_files",
            Self::CreateFolder => "create_folder",
            Self::Download => "download",
            Self::Wait => "wait",
            Self::CountRows => "count_rows",
            Self::Move => "move",
            Self::WriteText => "write_text",
            Self::ReadText => "read_text",
        }
    }

    /// Human label used in environment-failure messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Copy => "File copy",
            Self::Delete => "File delete",
            Self::QueryFolderFiles => "Folder query",
            Self::CreateFolder => "Folder creation",
            Self::Download => "Download",
            Self::Wait => "Wait",
            Self::CountRows => "Row count",
            Self::Move => "File move",
            Self::WriteText => "File write",
            Self::ReadText => "File read",
        }
    }
}

/// Settings consumed by [`crate::FileOperationService`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Upper bound for a single download request.
    pub http_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}
