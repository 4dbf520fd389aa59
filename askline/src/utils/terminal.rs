//! # Terminal Prompt Engine
//!
//! [`Terminal`] owns a [`LineReader`] and an output sink and runs the prompt
//! loop every other operation in this crate is built on:
//!
//! 1. write the decorated message (and flush, the message has no newline)
//! 2. read one logical answer, following `\` continuations when enabled
//! 3. trim it and hand it to a judge
//! 4. return the accepted value, or go back to 1
//!
//! The loop is **blocking with no retry limit**: a person keeps answering
//! until the answer is valid. The only way out without an answer is the
//! reader running dry, reported as [`PromptError::InputExhausted`].
//!
//! ## Example
//! ```rust,no_run
//! use askline::utils::{PromptOptions, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let name = terminal.prompt("Your name", PromptOptions::default().with_default("anonymous"))?;
//! println!("Hello {name}");
//! # Ok::<(), askline::utils::PromptError>(())
//! ```

use crate::utils::error::PromptError;
use crate::utils::options::{Decoration, PromptOptions};
use crate::utils::reader::LineReader;
use crate::utils::sanitize::{FilterErrorNot, Sanitize, Validator};
use log::{debug, trace};
use std::io::{self, StdinLock, Stdout, Write};

/// Outcome of judging one candidate answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict<T> {
    Accepted(T),
    Rejected,
}

/// Interactive prompt over a line reader and an output sink.
#[derive(Debug)]
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Prompts on stdout and reads answers from locked stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: LineReader, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prompts until the answer passes the configured validator.
    ///
    /// - Without a validator any non-empty answer is accepted.
    /// - With a default the message reads `"<message> (<default>)"` and an
    ///   empty answer returns the default text.
    pub fn prompt(&mut self, message: &str, options: PromptOptions<'_>) -> Result<String, PromptError> {
        self.prompt_gated(message, options, |_| true)
    }

    /// [`Terminal::prompt`] with an extra check every non-default answer must
    /// pass on top of the configured validator.
    pub(crate) fn prompt_gated<G>(
        &mut self,
        message: &str,
        options: PromptOptions<'_>,
        gate: G,
    ) -> Result<String, PromptError>
    where
        G: Fn(&str) -> bool,
    {
        let decoration = options.decoration();
        let PromptOptions {
            validator, default, ..
        } = options;

        let message = match &default {
            Some(default) => format!("{message} ({default})"),
            None => message.to_string(),
        };

        self.prompt_with(&message, decoration, |candidate| {
            if candidate.is_empty()
                && let Some(default) = &default
            {
                return Verdict::Accepted(default.clone());
            }

            let checked = match &validator {
                _ if !gate(candidate) => Err(FilterErrorNot::Rejected),
                Some(validator) => validator.check(candidate),
                None if candidate.is_empty() => Err(FilterErrorNot::Rejected),
                None => Ok(()),
            };

            match checked {
                Ok(()) => Verdict::Accepted(candidate.to_string()),
                Err(e) => {
                    debug!("{e}");
                    Verdict::Rejected
                }
            }
        })
    }

    /// Prints a question and loops until the answer passes every filter.
    /// Returns the trimmed answer.
    pub fn ask(&mut self, question: &str, filters: &[Sanitize]) -> Result<String, PromptError> {
        self.prompt_with(question, Decoration::default(), |candidate| {
            match Sanitize::execute(candidate, filters) {
                Ok(answer) => Verdict::Accepted(answer),
                Err(e) => {
                    debug!("{e}");
                    Verdict::Rejected
                }
            }
        })
    }

    /// The prompt loop itself.
    ///
    /// `message` is written as is, followed by `": "` when
    /// `decoration.append_colon` is set. An empty message writes nothing.
    /// Every candidate is passed to `judge` until it returns
    /// [`Verdict::Accepted`].
    pub fn prompt_with<T, F>(
        &mut self,
        message: &str,
        decoration: Decoration,
        mut judge: F,
    ) -> Result<T, PromptError>
    where
        F: FnMut(&str) -> Verdict<T>,
    {
        let formatted = format_message(message, decoration.append_colon);

        loop {
            if !formatted.is_empty() {
                self.writer.write_all(formatted.as_bytes())?;
                self.writer.flush()?;
            }

            let candidate = self.read_candidate(decoration.allow_continuation)?;

            match judge(&candidate) {
                Verdict::Accepted(value) => return Ok(value),
                Verdict::Rejected => debug!("rejected answer {candidate:?}, asking again"),
            }
        }
    }

    /// Reads one logical answer. Physical lines ending in `\` are joined
    /// with `\n` when continuation is allowed.
    fn read_candidate(&mut self, allow_continuation: bool) -> Result<String, PromptError> {
        let mut lines = Vec::new();

        loop {
            let line = self
                .reader
                .next_line()?
                .ok_or(PromptError::InputExhausted)?;
            trace!("read line {line:?}");

            let line = line.trim_end();
            match line.strip_suffix('\\') {
                Some(head) if allow_continuation => {
                    trace!("line continues");
                    lines.push(head.to_string());
                }
                _ => {
                    lines.push(line.to_string());
                    break;
                }
            }
        }

        Ok(lines.join("\n").trim().to_string())
    }
}

fn format_message(message: &str, append_colon: bool) -> String {
    if message.is_empty() {
        String::new()
    } else if append_colon {
        format!("{message}: ")
    } else {
        message.to_string()
    }
}

#[cfg(test)]
pub(crate) type ScriptedTerminal = Terminal<std::io::Cursor<Vec<u8>>, Vec<u8>>;

#[cfg(test)]
impl ScriptedTerminal {
    /// Terminal reading `input` and capturing everything it writes.
    pub(crate) fn scripted(input: &str) -> Self {
        Self::new(std::io::Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    pub(crate) fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}
