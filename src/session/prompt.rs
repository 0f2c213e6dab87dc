//! Line-oriented console prompting.
//!
//! [`Prompter`] wraps any `BufRead`/`Write` pair so the session runs the same way on a
//! terminal and on in-memory buffers in tests. Numeric prompts re-ask until a whole
//! number is typed; range checks stay with the caller.

use crate::errors::{Error, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Shown when a numeric prompt receives something that is not a whole number.
pub const NOT_A_NUMBER: &str = "Please enter a whole number.";

/// Reads answers from `input` and writes prompts to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one full line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes text without a trailing newline and flushes, leaving the cursor after it.
    fn show(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line with the line terminator removed.
    ///
    /// # Errors
    /// Returns `Error::InputClosed` at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prints `question` on its own line and re-reads until a non-blank answer arrives.
    pub fn ask_text(&mut self, question: &str) -> Result<String> {
        self.say(question)?;
        loop {
            let answer = self.read_line()?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            debug!(question, "Blank answer rejected");
            self.say(question)?;
        }
    }

    /// Shows `prompt` and reads a whole number, re-asking on anything unparsable.
    pub fn ask_number(&mut self, prompt: &str) -> Result<i64> {
        loop {
            self.show(prompt)?;
            let answer = self.read_line()?;
            match answer.trim().parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => {
                    debug!(input = %answer, "Non-numeric answer rejected");
                    self.say(NOT_A_NUMBER)?;
                }
            }
        }
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
