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

//! Command catalog used to render the interactive menu.
//!
//! Layout: `model.rs` (descriptor types), `catalog.rs` (JSON loading and
//! validation), `defaults.rs` (embedded catalog), `error.rs` (`ConfigError`).

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod model;

pub use catalog::CommandCatalog;
pub use error::{ConfigError, ConfigResult};
pub use model::CommandDescriptor;
