//! One-shot invocation: `<command> [--key value]...`.
//!
//! # Design
//! - The whole argument list is validated before any primitive runs:
//!   flag syntax first, then the command name, then the required flags.
//! - Keys are matched case-insensitively; a repeated key keeps its last value.
//! - Primitives are called directly; no prompts are involved.

use std::collections::HashMap;

use autopipe_fsops::{FileOperations, Outcome};
use thiserror::Error;
use tracing::{debug, info};

use crate::command::CommandKind;
use crate::output::render_outcome;
use crate::request::{OperationRequest, Report};

const FLAG_PREFIX: &str = "--";

/// Reasons a one-shot invocation is rejected before anything runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// No command name was supplied.
    #[error("No command given. Available commands: {}", available_commands())]
    MissingCommand,
    /// A token in key position did not start with `--`.
    #[error("Invalid argument format: '{token}'. Expected --key value pairs.")]
    InvalidFormat {
        /// Offending token.
        token: String,
    },
    /// A key was the last token, with no value after it.
    #[error("Missing value for argument '{key}'.")]
    MissingValue {
        /// Key without a value, including its `--` prefix.
        key: String,
    },
    /// The command name is not in the command table.
    #[error("Unknown command: '{name}'. Available commands: {}", available_commands())]
    UnknownCommand {
        /// Command name as typed.
        name: String,
    },
    /// One or more required flags were absent.
    #[error(
        "Missing required argument(s): {}\nUsage: {}",
        format_flags(.missing),
        .kind.usage()
    )]
    MissingFlags {
        /// Command being invoked.
        kind: CommandKind,
        /// Required flags that were not supplied, without prefix.
        missing: Vec<&'static str>,
    },
}

/// Parse one-shot arguments (command name first) into a request.
///
/// # Errors
///
/// Returns an [`ArgumentError`] describing the first problem found.
pub fn parse_arguments<S: AsRef<str>>(args: &[S]) -> Result<OperationRequest, ArgumentError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(ArgumentError::MissingCommand);
    };
    let flags = parse_flags(rest)?;

    let name = command.as_ref().to_lowercase();
    let kind = CommandKind::from_name(&name).ok_or(ArgumentError::UnknownCommand { name })?;

    let missing: Vec<&'static str> = kind
        .required_flags()
        .iter()
        .copied()
        .filter(|flag| !flags.contains_key(*flag))
        .collect();
    if !missing.is_empty() {
        return Err(ArgumentError::MissingFlags { kind, missing });
    }

    let values = kind
        .required_flags()
        .iter()
        .map(|flag| flags.get(*flag).cloned().unwrap_or_default())
        .collect();
    Ok(OperationRequest::new(kind, values))
}

/// Run a parsed request against the primitives.
pub fn execute<F: FileOperations + ?Sized>(
    operations: &F,
    request: &OperationRequest,
) -> Outcome<Report> {
    info!(command = request.kind().name(), "running one-shot command");
    request.invoke(operations)
}

/// Parse, run and render a one-shot invocation. Argument errors are rendered
/// like failures.
pub fn run_oneshot<F, S>(operations: &F, args: &[S]) -> String
where
    F: FileOperations + ?Sized,
    S: AsRef<str>,
{
    match parse_arguments(args) {
        Ok(request) => render_outcome(&execute(operations, &request)),
        Err(err) => {
            debug!(error = %err, "rejected one-shot arguments");
            err.to_string()
        }
    }
}

fn parse_flags<S: AsRef<str>>(tokens: &[S]) -> Result<HashMap<String, String>, ArgumentError> {
    let mut flags = HashMap::new();
    for pair in tokens.chunks(2) {
        let key = pair[0].as_ref();
        let Some(name) = key.strip_prefix(FLAG_PREFIX).filter(|name| !name.is_empty()) else {
            return Err(ArgumentError::InvalidFormat {
                token: key.to_string(),
            });
        };
        let Some(value) = pair.get(1) else {
            return Err(ArgumentError::MissingValue {
                key: key.to_string(),
            });
        };
        flags.insert(name.to_lowercase(), value.as_ref().to_string());
    }
    Ok(flags)
}

fn format_flags(flags: &[&str]) -> String {
    flags
        .iter()
        .map(|flag| format!("{FLAG_PREFIX}{flag}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn available_commands() -> String {
    CommandKind::ALL
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}
