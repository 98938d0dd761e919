//! Menu loop for interactive sessions.
//!
//! # Design
//! - The catalog is display-only; selections map onto [`CommandKind`] by index.
//! - End of input on any loop prompt ends the session instead of spinning.

use std::io;

use autopipe_config::CommandCatalog;
use autopipe_fsops::FileOperations;
use tracing::{debug, info};

use crate::command::CommandKind;
use crate::console::Console;
use crate::orchestrator::OperationOrchestrator;
use crate::output::{INVALID_OPTION, render_catalog, render_outcome};

/// Prompt asking for a menu selection.
pub const MENU_PROMPT: &str = "Please enter an option or '0' to exit:";
/// Shown when a selection is not a number.
pub const INVALID_SELECTION: &str = "Invalid input. Try again...";
/// Acknowledgement prompt shown after each selection.
pub const CONTINUE_PROMPT: &str = "Press Enter to continue...";

const EXIT_SELECTION: i64 = 0;

/// Run the menu until the user selects `0` or input is exhausted.
///
/// # Errors
///
/// Returns an error if the console fails to read or write.
pub fn run_interactive<C, F>(
    console: &mut C,
    catalog: &CommandCatalog,
    operations: &F,
) -> io::Result<()>
where
    C: Console + ?Sized,
    F: FileOperations + ?Sized,
{
    info!(commands = catalog.len(), "interactive session started");
    loop {
        console.write_line(&render_catalog(catalog))?;
        let Some(selection) = read_selection(console)? else {
            debug!("input closed at menu prompt");
            break;
        };
        if selection == EXIT_SELECTION {
            break;
        }

        match CommandKind::from_menu_index(selection) {
            Some(kind) => {
                let outcome = OperationOrchestrator::new(&mut *console, operations).run(kind)?;
                console.write_line(&render_outcome(&outcome))?;
            }
            None => {
                debug!(selection, "selection outside the command table");
                console.write_line(INVALID_OPTION)?;
            }
        }

        if console.prompt(CONTINUE_PROMPT)?.is_none() {
            break;
        }
        console.clear()?;
    }
    info!("interactive session ended");
    Ok(())
}

fn read_selection<C: Console + ?Sized>(console: &mut C) -> io::Result<Option<i64>> {
    loop {
        let Some(line) = console.prompt(MENU_PROMPT)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(selection) => return Ok(Some(selection)),
            Err(_) => console.write_line(INVALID_SELECTION)?,
        }
    }
}
