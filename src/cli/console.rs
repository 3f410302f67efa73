//! Line-oriented terminal I/O
//!
//! Wraps any reader/writer pair so the interactive session can run against
//! stdin/stdout or an in-memory script in tests.

use std::fmt::Display;
use std::io::{BufRead, ErrorKind, Write};

use zeroize::Zeroizing;

use crate::error::AtmResult;

/// Prompt-and-read helper over a reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
    mask_pin: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            mask_pin: false,
        }
    }

    /// Read PINs through a hidden terminal prompt instead of `input`
    pub fn with_masked_pin(mut self, mask_pin: bool) -> Self {
        self.mask_pin = mask_pin;
        self
    }

    /// Write one line of output
    pub fn line(&mut self, text: impl Display) -> AtmResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print a prompt and read the reply
    ///
    /// Only the line terminator is stripped. Returns `None` once the input
    /// is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> AtmResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompt for a PIN, hiding the input when masking is enabled
    pub fn prompt_pin(&mut self, prompt: &str) -> AtmResult<Option<Zeroizing<String>>> {
        if !self.mask_pin {
            return Ok(self.prompt(prompt)?.map(Zeroizing::new));
        }

        self.output.flush()?;
        match rpassword::prompt_password(prompt) {
            Ok(pin) => Ok(Some(Zeroizing::new(pin))),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get the writer back (used by tests to inspect output)
    pub fn into_output(self) -> W {
        self.output
    }
}
