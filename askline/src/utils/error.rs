//! # Prompt Errors
//!
//! Everything that can end a prompt call early. A rejected answer is **not**
//! an error: the prompt simply asks again. Only the conditions below make a
//! call return `Err`.

use std::io;
use thiserror::Error;

/// Errors returned by every prompt operation on [`crate::utils::Terminal`].
///
/// - [`InputExhausted`](PromptError::InputExhausted): the line reader ran out
///   of input while a read was in progress (also mid-continuation).
/// - [`Io`](PromptError::Io): reading from the input or writing the prompt
///   failed.
/// - [`NoOptions`](PromptError::NoOptions) and
///   [`InvalidRadix`](PromptError::InvalidRadix): the caller passed arguments
///   that can never produce an answer. Raised before anything is written.
/// - [`Internal`](PromptError::Internal): an accepted answer could not be
///   turned into the requested value. This is a bug in a validator, not a
///   user mistake.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input exhausted before an answer was accepted")]
    InputExhausted,

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot choose from an empty list of options")]
    NoOptions,

    #[error("radix {0} is outside 2..=36")]
    InvalidRadix(u32),

    #[error("internal invariant violated: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PromptError::InputExhausted.to_string(),
            "input exhausted before an answer was accepted"
        );
        assert_eq!(
            PromptError::InvalidRadix(40).to_string(),
            "radix 40 is outside 2..=36"
        );
        assert_eq!(
            PromptError::Internal("oops".to_string()).to_string(),
            "internal invariant violated: oops"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: PromptError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, PromptError::Io(_)));
        assert_eq!(err.to_string(), "terminal i/o failed: gone");
    }
}
