//! Line-oriented console used by the session and its workflows.
//!
//! Generic over any `BufRead` + `Write` pair so the interactive loop runs the
//! same against a terminal and against scripted input in tests.

use crate::errors::{Error, Result};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Prompt, read and clear operations over an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and output stream. `clear_screen` controls whether
    /// [`Console::clear`] emits the terminal clear sequence.
    pub const fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Clears the display, if enabled.
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SEQUENCE}")?;
        }
        Ok(())
    }

    /// Reads one line without its line terminator. Returns `None` at end of
    /// input. Bytes that are not UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Shows a prompt and reads the answer.
    ///
    /// # Errors
    /// End of input is reported as an `UnexpectedEof` I/O error, since a
    /// workflow cannot continue without its answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.read_line()?.ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ))
        })
    }

    /// Asks a yes/no question; only `y` (any case) counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Everything written so far. Mostly useful with an in-memory writer.
    pub const fn output(&self) -> &W {
        &self.output
    }
}
