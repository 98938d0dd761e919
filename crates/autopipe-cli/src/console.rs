//! Line-oriented input source and display used by the interactive front end.
//!
//! # Design
//! - The orchestrator and menu loop only see the [`Console`] trait, so they
//!   can be driven by scripted input in tests.
//! - End of input is reported as `None`, never as an error.

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use crate::output::boxed_header;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Abstract terminal: prints lines and supplies single-line answers.
pub trait Console {
    /// Print one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Read one line without its terminator. `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Clear the screen where supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn clear(&mut self) -> io::Result<()>;

    /// Print `message` and read the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written or the answer read.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.write_line(message)?;
        self.read_line()
    }

    /// Clear the screen and print a boxed operation header.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn header(&mut self, title: &str) -> io::Result<()> {
        self.clear()?;
        self.write_line(&boxed_header(title))
    }
}

/// [`Console`] over any buffered reader and writer.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout. Screen clearing is enabled
    /// only when stdout is a terminal.
    #[must_use]
    pub fn stdio() -> Self {
        let stdout = io::stdout();
        let clear_screen = stdout.is_terminal();
        Self {
            reader: io::stdin().lock(),
            writer: stdout,
            clear_screen,
        }
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Console over `reader` and `writer` with screen clearing disabled.
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            clear_screen: false,
        }
    }

    /// Consume the console and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.writer, "{CLEAR_SCREEN}")?;
            self.writer.flush()?;
        }
        Ok(())
    }
}
