//! Per-invocation inputs and the call table into the primitives.

use std::path::PathBuf;

use autopipe_fsops::{FileOperations, Outcome};

use crate::command::CommandKind;

/// Message for a wait duration that is not an integer.
pub const INVALID_WAIT_INPUT: &str = "Invalid input for wait duration. Please enter a number.";

/// Ordered inputs for one command, in [`CommandKind::required_flags`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    kind: CommandKind,
    values: Vec<String>,
}

/// Successful payload of any command, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A file was copied.
    Copied,
    /// A file was deleted.
    Deleted,
    /// Files found in a folder.
    Files(Vec<PathBuf>),
    /// A folder was created.
    FolderCreated,
    /// A download completed.
    Downloaded,
    /// A wait elapsed.
    Waited,
    /// Number of matching rows.
    RowCount(usize),
    /// A file was moved.
    Moved,
    /// Text was written.
    Written,
    /// Text read from a file.
    Text(String),
}

impl OperationRequest {
    /// Build a request. Missing trailing values are treated as empty input.
    #[must_use]
    pub fn new(kind: CommandKind, mut values: Vec<String>) -> Self {
        values.resize(kind.required_flags().len(), String::new());
        Self { kind, values }
    }

    /// Command this request targets.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Input values in order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn value(&self, index: usize) -> &str {
        self.values.get(index).map_or("", String::as_str)
    }

    /// Call the primitive for this request.
    pub fn invoke<F: FileOperations + ?Sized>(&self, operations: &F) -> Outcome<Report> {
        match self.kind {
            CommandKind::CopyFile => operations
                .copy_file(self.value(0), self.value(1))
                .map(|()| Report::Copied),
            CommandKind::DeleteFile => operations
                .delete_file(self.value(0))
                .map(|()| Report::Deleted),
            CommandKind::QueryFolderFiles => operations
                .query_folder_files(self.value(0))
                .map(Report::Files),
            CommandKind::CreateFolder => operations
                .create_folder(self.value(0), self.value(1))
                .map(|()| Report::FolderCreated),
            CommandKind::DownloadFile => operations
                .download_file(self.value(0), self.value(1))
                .map(|()| Report::Downloaded),
            CommandKind::Wait => match parse_seconds(self.value(0)) {
                Some(seconds) => operations.wait(seconds).map(|()| Report::Waited),
                None => Outcome::fail(INVALID_WAIT_INPUT),
            },
            CommandKind::CountRows => operations
                .count_rows_containing(self.value(0), self.value(1))
                .map(Report::RowCount),
            CommandKind::MoveFile => operations
                .move_file(self.value(0), self.value(1))
                .map(|()| Report::Moved),
            CommandKind::WriteFile => operations
                .write_text(self.value(0), self.value(1))
                .map(|()| Report::Written),
            CommandKind::ReadFile => operations.read_text(self.value(0)).map(Report::Text),
        }
    }
}

/// Parse a wait duration. Negative values parse; the primitive rejects them.
#[must_use]
pub fn parse_seconds(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
