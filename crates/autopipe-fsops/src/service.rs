//! Filesystem, network and timer primitives.
//!
//! # Design
//! - Each primitive checks its preconditions first and reports violations as
//!   failures; nothing is mutated before those checks pass.
//! - Destination parents are created on demand for copy, move, download and
//!   write. Directories created before a later failure are left in place.
//! - Every typed failure is logged and flattened into an [`Outcome`] at the
//!   trait boundary by `run_primitive`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FsOpsError, FsOpsResult};
use crate::model::{Operation, ServiceConfig};
use crate::outcome::Outcome;
use crate::pause::{Pause, ThreadPause};

const WAIT_TICK: Duration = Duration::from_secs(1);

/// The catalog of primitive operations. Implementations never panic or return
/// errors through any channel other than [`Outcome::Failure`].
pub trait FileOperations {
    /// Copy `source` to `destination`, overwriting an existing destination.
    fn copy_file(&self, source: &str, destination: &str) -> Outcome<()>;
    /// Delete the file at `path`.
    fn delete_file(&self, path: &str) -> Outcome<()>;
    /// List the files directly inside `folder`, sorted by path.
    fn query_folder_files(&self, folder: &str) -> Outcome<Vec<PathBuf>>;
    /// Create `name` inside `parent`.
    fn create_folder(&self, parent: &str, name: &str) -> Outcome<()>;
    /// Download `url` into `output`.
    fn download_file(&self, url: &str, output: &str) -> Outcome<()>;
    /// Block the calling thread for `seconds`.
    fn wait(&self, seconds: i64) -> Outcome<()>;
    /// Count the lines of `source` that contain `needle` (case-sensitive).
    fn count_rows_containing(&self, source: &str, needle: &str) -> Outcome<usize>;
    /// Move `source` to `destination`.
    fn move_file(&self, source: &str, destination: &str) -> Outcome<()>;
    /// Write `content` to `path`, replacing any previous contents.
    fn write_text(&self, path: &str, content: &str) -> Outcome<()>;
    /// Read the whole of `path` as text.
    fn read_text(&self, path: &str) -> Outcome<String>;
}

/// [`FileOperations`] backed by the local filesystem and a blocking HTTP client.
#[derive(Debug, Clone, Default)]
pub struct FileOperationService<P = ThreadPause> {
    config: ServiceConfig,
    pause: P,
}

impl FileOperationService {
    /// Build a service that sleeps on the current thread during waits.
    #[must_use]
    pub const fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            pause: ThreadPause,
        }
    }
}

impl<P: Pause> FileOperationService<P> {
    /// Replace the pause implementation used by [`FileOperations::wait`].
    #[must_use]
    pub fn with_pause<Q: Pause>(self, pause: Q) -> FileOperationService<Q> {
        FileOperationService {
            config: self.config,
            pause,
        }
    }

    fn copy(source: &Path, destination: &Path) -> FsOpsResult<()> {
        if !source.is_file() {
            return Err(FsOpsError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }
        if destination.exists() {
            let resolved = fs::canonicalize(source)
                .map_err(|err| FsOpsError::io(Operation::Copy, source, err))?;
            let target = fs::canonicalize(destination)
                .map_err(|err| FsOpsError::io(Operation::Copy, destination, err))?;
            if resolved == target {
                return Err(FsOpsError::SameFile { path: resolved });
            }
        }
        ensure_parent_dir(destination)?;
        fs::copy(source, destination)
            .map_err(|err| FsOpsError::io(Operation::Copy, destination, err))?;
        Ok(())
    }

    fn delete(path: &Path) -> FsOpsResult<()> {
        if !path.is_file() {
            return Err(FsOpsError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        fs::remove_file(path).map_err(|err| FsOpsError::io(Operation::Delete, path, err))
    }

    fn list_files(folder: &Path) -> FsOpsResult<Vec<PathBuf>> {
        if !folder.is_dir() {
            return Err(FsOpsError::FolderNotFound {
                path: folder.to_path_buf(),
            });
        }
        let entries = fs::read_dir(folder)
            .map_err(|err| FsOpsError::io(Operation::QueryFolderFiles, folder, err))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|err| FsOpsError::io(Operation::QueryFolderFiles, folder, err))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn make_folder(parent: &Path, name: &str) -> FsOpsResult<()> {
        if !parent.is_dir() {
            return Err(FsOpsError::ParentNotFound {
                path: parent.to_path_buf(),
            });
        }
        if name.trim().is_empty() {
            return Err(FsOpsError::MissingInput {
                field: "folder name",
            });
        }
        let target = parent.join(name);
        if target.is_dir() {
            return Err(FsOpsError::FolderExists {
                parent: parent.to_path_buf(),
                name: name.to_string(),
            });
        }
        fs::create_dir_all(&target)
            .map_err(|err| FsOpsError::io(Operation::CreateFolder, &target, err))
    }

    fn download(&self, source: &str, output: &Path) -> FsOpsResult<()> {
        let url = parse_http_url(source)?;
        ensure_parent_dir(output)?;

        let client = Client::builder()
            .timeout(self.config.http_timeout)
            .build()
            .map_err(|err| FsOpsError::transfer(source, err))?;
        let mut response = client
            .get(url)
            .send()
            .map_err(|err| FsOpsError::transfer(source, err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FsOpsError::HttpStatus {
                url: source.to_string(),
                status: status.as_u16(),
            });
        }

        // Stage next to the output so a failed transfer leaves `output` untouched.
        let staging_dir = output
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut staged = NamedTempFile::new_in(staging_dir)
            .map_err(|err| FsOpsError::io(Operation::Download, output, err))?;
        let written = response
            .copy_to(staged.as_file_mut())
            .map_err(|err| FsOpsError::transfer(source, err))?;
        staged
            .persist(output)
            .map_err(|err| FsOpsError::io(Operation::Download, output, err.error))?;
        debug!(url = source, bytes = written, "download finished");
        Ok(())
    }

    fn block_for(&self, seconds: i64) -> FsOpsResult<()> {
        if seconds < 0 {
            return Err(FsOpsError::InvalidDuration { seconds });
        }
        for elapsed in 1..=seconds {
            self.pause.pause(WAIT_TICK);
            debug!(elapsed, total = seconds, "wait tick");
        }
        Ok(())
    }

    fn count_rows(source: &Path, needle: &str) -> FsOpsResult<usize> {
        if !source.is_file() {
            return Err(FsOpsError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }
        let bytes =
            fs::read(source).map_err(|err| FsOpsError::io(Operation::CountRows, source, err))?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text
            .lines()
            .filter(|line| line.contains(needle))
            .count())
    }

    fn relocate(source: &Path, destination: &Path) -> FsOpsResult<()> {
        if !source.is_file() {
            return Err(FsOpsError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }
        if destination.exists() {
            return Err(FsOpsError::DestinationExists {
                path: destination.to_path_buf(),
            });
        }
        ensure_parent_dir(destination)?;

        match fs::rename(source, destination) {
            Ok(()) => Ok(()),
            Err(rename_err) if rename_err.kind() == io::ErrorKind::CrossesDevices => {
                // Rename cannot cross filesystems; copy then remove instead.
                debug!(error = %rename_err, "rename crosses devices, copying instead");
                fs::copy(source, destination)
                    .map_err(|err| FsOpsError::io(Operation::Move, destination, err))?;
                fs::remove_file(source).map_err(|err| FsOpsError::io(Operation::Move, source, err))
            }
            Err(rename_err) => Err(FsOpsError::io(Operation::Move, source, rename_err)),
        }
    }

    fn write(path: &Path, content: &str) -> FsOpsResult<()> {
        ensure_parent_dir(path)?;
        fs::write(path, content).map_err(|err| FsOpsError::io(Operation::WriteText, path, err))
    }

    fn read(path: &Path) -> FsOpsResult<String> {
        if !path.is_file() {
            return Err(FsOpsError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let bytes = fs::read(path).map_err(|err| FsOpsError::io(Operation::ReadText, path, err))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl<P: Pause> FileOperations for FileOperationService<P> {
    fn copy_file(&self, source: &str, destination: &str) -> Outcome<()> {
        run_primitive(Operation::Copy, source, || {
            Self::copy(Path::new(source), Path::new(destination))
        })
    }

    fn delete_file(&self, path: &str) -> Outcome<()> {
        run_primitive(Operation::Delete, path, || Self::delete(Path::new(path)))
    }

    fn query_folder_files(&self, folder: &str) -> Outcome<Vec<PathBuf>> {
        run_primitive(Operation::QueryFolderFiles, folder, || {
            Self::list_files(Path::new(folder))
        })
    }

    fn create_folder(&self, parent: &str, name: &str) -> Outcome<()> {
        run_primitive(Operation::CreateFolder, parent, || {
            Self::make_folder(Path::new(parent), name)
        })
    }

    fn download_file(&self, url: &str, output: &str) -> Outcome<()> {
        run_primitive(Operation::Download, url, || {
            self.download(url, Path::new(output))
        })
    }

    fn wait(&self, seconds: i64) -> Outcome<()> {
        run_primitive(Operation::Wait, &seconds.to_string(), || {
            self.block_for(seconds)
        })
    }

    fn count_rows_containing(&self, source: &str, needle: &str) -> Outcome<usize> {
        run_primitive(Operation::CountRows, source, || {
            Self::count_rows(Path::new(source), needle)
        })
    }

    fn move_file(&self, source: &str, destination: &str) -> Outcome<()> {
        run_primitive(Operation::Move, source, || {
            Self::relocate(Path::new(source), Path::new(destination))
        })
    }

    fn write_text(&self, path: &str, content: &str) -> Outcome<()> {
        run_primitive(Operation::WriteText, path, || Self::write(Path::new(path), content))
    }

    fn read_text(&self, path: &str) -> Outcome<String> {
        run_primitive(Operation::ReadText, path, || Self::read(Path::new(path)))
    }
}

fn run_primitive<T>(
    operation: Operation,
    target: &str,
    action: impl FnOnce() -> FsOpsResult<T>,
) -> Outcome<T> {
    debug!(operation = operation.as_str(), target, "operation started");
    Outcome::capture(|| {
        let result = action();
        match &result {
            Ok(_) => debug!(operation = operation.as_str(), target, "operation completed"),
            Err(err) => warn!(operation = operation.as_str(), target, error = %err, "operation failed"),
        }
        result
    })
}

fn ensure_parent_dir(path: &Path) -> FsOpsResult<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.exists() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|err| FsOpsError::create_directory(parent, err))?;
    debug!(path = %parent.display(), "created destination directory");
    Ok(())
}

fn parse_http_url(raw: &str) -> FsOpsResult<Url> {
    let invalid = || FsOpsError::InvalidUrl {
        url: raw.to_string(),
    };
    let url = Url::parse(raw).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(invalid()),
    }
}
