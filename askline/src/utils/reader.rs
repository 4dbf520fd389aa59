//! # Line Reader
//!
//! The input side of a prompt. A [`LineReader`] hands out one physical line
//! at a time and reports `None` once the stream is exhausted. Any
//! [`BufRead`] already is one, so stdin, files and in-memory cursors all
//! plug straight into [`crate::utils::Terminal`].

use std::io::{self, BufRead};

/// Source of physical input lines.
pub trait LineReader {
    /// Reads the next line without its line terminator.
    ///
    /// Returns `Ok(None)` when no more lines are available.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<B: BufRead> LineReader for B {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();

        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_until_exhausted() {
        let mut reader = Cursor::new("first\r\nsecond\nlast");

        assert_eq!(reader.next_line().unwrap(), Some("first".to_string()));
        assert_eq!(reader.next_line().unwrap(), Some("second".to_string()));
        assert_eq!(reader.next_line().unwrap(), Some("last".to_string()));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_exhaustion() {
        let mut reader = Cursor::new("\n");

        assert_eq!(reader.next_line().unwrap(), Some(String::new()));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        let mut reader = Cursor::new("  spaced out  \n");

        assert_eq!(
            reader.next_line().unwrap(),
            Some("  spaced out  ".to_string())
        );
    }
}
