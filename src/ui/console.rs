use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use thiserror::Error;

/// Raised when the input stream reaches end-of-file while a prompt is waiting.
/// The interactive loop treats it like choosing Exit.
#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// Tone of a status line, mapped to a terminal color when styling is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Notice,
    Problem,
    Heading,
}

/// Line-oriented prompt reader and message writer. Generic over its streams
/// so the whole dialogue can run against in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    /// Enable ANSI coloring of status lines.
    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Print `message` without a newline and read one line of input. The line
    /// ending is stripped; everything else is returned as typed.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write output")
    }

    /// Print a status line in the given tone.
    pub fn status(&mut self, tone: Tone, text: &str) -> Result<()> {
        if !self.styled {
            return self.say(text);
        }
        match tone {
            Tone::Success => self.say(text.green()),
            Tone::Notice => self.say(text.yellow()),
            Tone::Problem => self.say(text.red()),
            Tone::Heading => self.say(text.bold()),
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
