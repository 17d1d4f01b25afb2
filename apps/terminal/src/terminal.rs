//! # Terminal
//!
//! Line-oriented input/output for the menu.
//!
//! `Terminal` is generic over its reader and writer so that sessions can be
//! driven from a byte buffer in tests and from stdin/stdout in the binary.
//!
//! ## Re-prompt Loop
//! ```text
//! prompt_until("Enter price: ", parse_price)
//!      │
//!      ├── read line ── EOF ──► AppError::Interrupted
//!      │
//!      ├── parse fails ──► print "<error>." ──► ask again
//!      │
//!      └── parse ok ──► value
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use stockroom_core::validation::ValidationResult;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// A reader/writer pair the session talks through.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints `question` without a newline and reads one line of input.
    ///
    /// The trailing line break is removed; other whitespace is kept for the
    /// caller to interpret.
    pub fn prompt(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Interrupted);
        }

        let trimmed = line.trim_end_matches(|c| c == '\n' || c == '\r');
        Ok(trimmed.to_string())
    }

    /// Asks `question` until `parse` accepts the answer.
    pub fn prompt_until<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> ValidationResult<T>,
    ) -> AppResult<T> {
        loop {
            let answer = self.prompt(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(error = %err, "Rejected input");
                    self.say(format_args!("{err}."))?;
                }
            }
        }
    }

    /// Consumes the terminal and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockroom_core::validation::parse_stock;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_strips_line_ending() {
        let mut term = terminal("hello world \r\n");
        assert_eq!(term.prompt("> ").unwrap(), "hello world ");
        assert_eq!(String::from_utf8(term.into_output()).unwrap(), "> ");
    }

    #[test]
    fn test_prompt_at_end_of_input_is_interrupted() {
        let mut term = terminal("");
        assert!(matches!(term.prompt("> "), Err(AppError::Interrupted)));
    }

    #[test]
    fn test_prompt_until_reasks_on_invalid_input() {
        let mut term = terminal("ten\n-1\n12\n");
        let stock = term.prompt_until("Stock: ", parse_stock).unwrap();
        assert_eq!(stock, 12);

        let output = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(output.matches("Stock: ").count(), 3);
        assert!(output.contains("Stock cannot be negative."));
        assert!(output.contains("Stock has invalid format: expected a whole number."));
    }

    #[test]
    fn test_prompt_until_interrupted_mid_loop() {
        let mut term = terminal("bad\n");
        assert!(matches!(
            term.prompt_until("Stock: ", parse_stock),
            Err(AppError::Interrupted)
        ));
    }
}
