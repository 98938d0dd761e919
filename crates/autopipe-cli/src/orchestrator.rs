//! Interactive input gathering in front of the primitives.
//!
//! # Design
//! - One header, then one prompt per input, then one primitive call.
//! - An empty or missing answer is passed on as empty input; the primitive's
//!   own precondition checks reject it.
//! - Wait accepts a single attempt: `c` cancels, anything that is not an
//!   integer fails immediately.

use std::io;

use autopipe_fsops::{FileOperations, Outcome};
use tracing::debug;

use crate::command::CommandKind;
use crate::console::Console;
use crate::request::{INVALID_WAIT_INPUT, OperationRequest, Report, parse_seconds};

/// Message returned when the user cancels a wait.
pub const WAIT_CANCELLED: &str = "Wait operation cancelled by user.";

const CANCEL_TOKEN: &str = "c";

/// Collects inputs from a [`Console`] and forwards them to [`FileOperations`].
pub struct OperationOrchestrator<'a, C: ?Sized, F: ?Sized> {
    console: &'a mut C,
    operations: &'a F,
}

impl<'a, C, F> OperationOrchestrator<'a, C, F>
where
    C: Console + ?Sized,
    F: FileOperations + ?Sized,
{
    /// Bind an orchestrator to a console and a primitive implementation.
    pub const fn new(console: &'a mut C, operations: &'a F) -> Self {
        Self {
            console,
            operations,
        }
    }

    /// Show the header for `kind`, collect its inputs and run it. The
    /// primitive's outcome is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console itself fails.
    pub fn run(&mut self, kind: CommandKind) -> io::Result<Outcome<Report>> {
        self.console.header(kind.title())?;
        let request = self.collect(kind)?;
        debug!(command = kind.name(), "interactive inputs collected");

        if kind == CommandKind::Wait
            && let Some(outcome) =
                screen_wait_input(request.values().first().map_or("", String::as_str))
        {
            return Ok(outcome);
        }
        Ok(request.invoke(self.operations))
    }

    fn collect(&mut self, kind: CommandKind) -> io::Result<OperationRequest> {
        let mut values = Vec::with_capacity(kind.prompts().len());
        for prompt in kind.prompts() {
            values.push(self.console.prompt(prompt)?.unwrap_or_default());
        }
        Ok(OperationRequest::new(kind, values))
    }
}

fn screen_wait_input(input: &str) -> Option<Outcome<Report>> {
    if input.trim().eq_ignore_ascii_case(CANCEL_TOKEN) {
        return Some(Outcome::fail(WAIT_CANCELLED));
    }
    if parse_seconds(input).is_none() {
        return Some(Outcome::fail(INVALID_WAIT_INPUT));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TerminalConsole;
    use crate::testing::RecordingOperations;
    use anyhow::Result;
    use std::io::Cursor;

    fn console(input: &str) -> TerminalConsole<Cursor<String>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn copy_collects_two_inputs_in_order() -> Result<()> {
        let operations = RecordingOperations::default();
        let mut console = console("/in/a.txt\n/out/b.txt\n");

        let outcome = OperationOrchestrator::new(&mut console, &operations).run(CommandKind::CopyFile)?;
        assert_eq!(outcome, Outcome::Success(Report::Copied));
        assert_eq!(operations.calls(), ["copy_file(/in/a.txt, /out/b.txt)"]);

        let transcript = String::from_utf8(console.into_writer())?;
        assert!(transcript.contains("| Copy Operation |"));
        let source_prompt = transcript.find("Enter the full path for the source file:");
        let destination_prompt = transcript.find("Enter the full path for the destination file:");
        assert!(source_prompt.is_some());
        assert!(source_prompt < destination_prompt);
        Ok(())
    }

    #[test]
    fn exhausted_input_is_forwarded_as_empty_values() -> Result<()> {
        let operations = RecordingOperations::default();
        let mut console = console("only-parent\n");

        let _ = OperationOrchestrator::new(&mut console, &operations).run(CommandKind::CreateFolder)?;
        assert_eq!(operations.calls(), ["create_folder(only-parent, )"]);
        Ok(())
    }

    #[test]
    fn wait_cancel_token_skips_the_primitive() -> Result<()> {
        for token in ["c", "C", " c "] {
            let operations = RecordingOperations::default();
            let mut console = console(&format!("{token}\n"));
            let outcome =
                OperationOrchestrator::new(&mut console, &operations).run(CommandKind::Wait)?;
            assert_eq!(outcome.error(), Some(WAIT_CANCELLED));
            assert!(operations.calls().is_empty());
        }
        Ok(())
    }

    #[test]
    fn wait_rejects_non_numeric_input_in_a_single_attempt() -> Result<()> {
        let operations = RecordingOperations::default();
        let mut console = console("soon\n5\n");

        let outcome = OperationOrchestrator::new(&mut console, &operations).run(CommandKind::Wait)?;
        assert_eq!(outcome.error(), Some(INVALID_WAIT_INPUT));
        assert!(operations.calls().is_empty());

        let transcript = String::from_utf8(console.into_writer())?;
        assert_eq!(
            transcript
                .matches("Enter wait time in seconds (e.g., 10) or 'c' to cancel:")
                .count(),
            1
        );
        Ok(())
    }

    #[test]
    fn wait_forwards_parsed_seconds() -> Result<()> {
        let operations = RecordingOperations::default();
        let mut console = console("5\n");

        let outcome = OperationOrchestrator::new(&mut console, &operations).run(CommandKind::Wait)?;
        assert_eq!(outcome, Outcome::Success(Report::Waited));
        assert_eq!(operations.calls(), ["wait(5)"]);
        Ok(())
    }

    #[test]
    fn primitive_failures_pass_through_unchanged() -> Result<()> {
        let operations = RecordingOperations::failing("Error: File not found at 'gone.txt'.");
        let mut console = console("gone.txt\n");

        let outcome = OperationOrchestrator::new(&mut console, &operations).run(CommandKind::ReadFile)?;
        assert_eq!(outcome.error(), Some("Error: File not found at 'gone.txt'."));
        Ok(())
    }
}
