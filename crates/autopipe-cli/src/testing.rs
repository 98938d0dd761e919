//! In-memory [`FileOperations`] double for front-end tests.

use std::cell::RefCell;
use std::path::PathBuf;

use autopipe_fsops::{FileOperations, Outcome};

/// Records every primitive call; succeeds with empty payloads unless built
/// with [`RecordingOperations::failing`].
#[derive(Default)]
pub(crate) struct RecordingOperations {
    calls: RefCell<Vec<String>>,
    failure: Option<String>,
}

impl RecordingOperations {
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            calls: RefCell::default(),
            failure: Some(message.to_string()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record<T>(&self, call: String, value: T) -> Outcome<T> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(message) => Outcome::fail(message.clone()),
            None => Outcome::succeed(value),
        }
    }
}

impl FileOperations for RecordingOperations {
    fn copy_file(&self, source: &str, destination: &str) -> Outcome<()> {
        self.record(format!("copy_file({source}, {destination})"), ())
    }

    fn delete_file(&self, path: &str) -> Outcome<()> {
        self.record(format!("delete_file({path})"), ())
    }

    fn query_folder_files(&self, folder: &str) -> Outcome<Vec<PathBuf>> {
        self.record(format!("query_folder_files({folder})"), Vec::new())
    }

    fn create_folder(&self, parent: &str, name: &str) -> Outcome<()> {
        self.record(format!("create_folder({parent}, {name})"), ())
    }

    fn download_file(&self, url: &str, output: &str) -> Outcome<()> {
        self.record(format!("download_file({url}, {output})"), ())
    }

    fn wait(&self, seconds: i64) -> Outcome<()> {
        self.record(format!("wait({seconds})"), ())
    }

    fn count_rows_containing(&self, source: &str, needle: &str) -> Outcome<usize> {
        self.record(format!("count_rows_containing({source}, {needle})"), 0)
    }

    fn move_file(&self, source: &str, destination: &str) -> Outcome<()> {
        self.record(format!("move_file({source}, {destination})"), ())
    }

    fn write_text(&self, path: &str, content: &str) -> Outcome<()> {
        self.record(format!("write_text({path}, {content})"), ())
    }

    fn read_text(&self, path: &str) -> Outcome<String> {
        self.record(format!("read_text({path})"), String::new())
    }
}
