#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! File, folder, network and timer primitives behind the automation menu.
//!
//! Layout: `outcome.rs` (the success/failure contract), `error.rs` (typed
//! failures and their user-facing messages), `model/` (operation kinds and
//! service settings), `pause.rs` (blocking wait seam), `service.rs`
//! (`FileOperations` trait and the filesystem-backed implementation).

pub mod error;
pub mod model;
pub mod outcome;
pub mod pause;
pub mod service;

pub use error::{FsOpsError, FsOpsResult};
pub use model::{Operation, ServiceConfig};
pub use outcome::Outcome;
pub use pause::{Pause, ThreadPause};
pub use service::{FileOperationService, FileOperations};
