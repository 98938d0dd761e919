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
#![allow(clippy::redundant_pub_crate)]

//! Console front ends for the autopipe file automation primitives.
//!
//! Layout:
//! - `cli.rs`: argument parsing and dispatch
//! - `command.rs`: the fixed command table (names, flags, prompts, menu indices)
//! - `request.rs`: collected inputs and the call into the primitives
//! - `console.rs`: line-oriented input/output abstraction
//! - `orchestrator.rs`: interactive prompt collection for one command
//! - `interactive.rs`: menu loop
//! - `oneshot.rs`: `command --key value` parsing and execution
//! - `output.rs`: renderers and formatting helpers
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub mod command;
pub mod console;
pub mod interactive;
pub mod oneshot;
pub mod orchestrator;
pub mod output;
pub mod request;
#[cfg(test)]
mod testing;

pub use cli::run;
pub use command::CommandKind;
pub use console::{Console, TerminalConsole};
pub use interactive::run_interactive;
pub use oneshot::{ArgumentError, parse_arguments, run_oneshot};
pub use orchestrator::OperationOrchestrator;
pub use output::render_outcome;
pub use request::{OperationRequest, Report};
