//! # Input Sanitization & Validation
//!
//! Validators decide whether a candidate answer is acceptable. Anything that
//! implements [`Validator`] can guard a prompt:
//!
//! - plain closures `Fn(&str) -> bool`
//! - a single [`Sanitize`] filter
//! - a slice of filters, run in order and short-circuiting on the first
//!   failure
//!
//! Rejections carry a [`FilterErrorNot`] describing what went wrong. The
//! prompt loop never shows it to the user (it just asks again) but logs it at
//! debug level.
//!
//! ## Examples
//!
//! ### Validate types
//! ```rust,no_run
//! use askline::utils::{DesiredType, Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let answer = terminal.ask(
//!     "Enter a boolean (true/false)",
//!     &[Sanitize::IsType(DesiredType::Bool)],
//! )?;
//! println!("Accepted: {}", answer);
//! # Ok::<(), askline::utils::PromptError>(())
//! ```
//!
//! ### Validate numeric range
//! ```rust,no_run
//! use askline::utils::{PromptOptions, Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let threads = terminal.prompt(
//!     "Worker threads",
//!     PromptOptions::default()
//!         .with_validator(Sanitize::IsBetween(1, 16))
//!         .with_default("4"),
//! )?;
//! # Ok::<(), askline::utils::PromptError>(())
//! ```
use std::fmt::Display;
use thiserror::Error;

/// A validation filter that can be applied to user input.
///
/// - `MatchString`: the input matches a specific string.
/// - `MatchStrings`: the input matches one of the given options.
/// - `IsType`: the input parses into a certain [`DesiredType`].
/// - `IsBetween`: a numeric input is within an inclusive range `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitize {
    MatchString(String),
    MatchStrings(Vec<String>),
    IsType(DesiredType),
    IsBetween(isize, isize),
}

/// Why a filter rejected an input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterErrorNot {
    #[error("The value is not a {0}, try again!")]
    Number(DesiredType),
    #[error("The value is not {0}, try again!")]
    String(DesiredType),
    #[error("The value is not a {0}, try again!")]
    Bool(DesiredType),
    #[error("The value doesn't match with {0}, try again!")]
    MatchString(String),
    #[error("The value doesn't match with the options: {}, try again!", .0.join(", "))]
    MatchStrings(Vec<String>),
    #[error("The value is not between {0} and {1}, try again!")]
    Between(isize, isize),
    #[error("The value was rejected, try again!")]
    Rejected,
}

/// Decides whether a candidate answer is acceptable.
///
/// The candidate handed to [`Validator::check`] has already been trimmed by
/// the prompt loop.
pub trait Validator {
    fn check(&self, input: &str) -> Result<(), FilterErrorNot>;
}

impl<F> Validator for F
where
    F: Fn(&str) -> bool,
{
    fn check(&self, input: &str) -> Result<(), FilterErrorNot> {
        if self(input) {
            Ok(())
        } else {
            Err(FilterErrorNot::Rejected)
        }
    }
}

/// Validates that an input string parses into the given Rust type.
/// Expands into a `Result<(), FilterErrorNot>`.
///
/// ```rust,ignore
/// check_type!(input, u8, Err(FilterErrorNot::Number(DesiredType::U8)));
/// ```
macro_rules! check_type {
    ($input:expr, $t:ty, $err:expr) => {
        match $input.parse::<$t>() {
            Ok(_) => Ok(()),
            Err(_) => $err,
        }
    };
}

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Trims whitespace before validation.
    /// - Stops and returns the first error encountered.
    /// - Returns the cleaned string if all filters pass.
    pub fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, FilterErrorNot> {
        let clean_answer = answer.trim();
        <[Sanitize] as Validator>::check(filters, clean_answer)?;
        Ok(clean_answer.to_string())
    }
}

impl Validator for Sanitize {
    fn check(&self, input: &str) -> Result<(), FilterErrorNot> {
        match self {
            Sanitize::IsType(ty) => ty.parse(input),
            Sanitize::MatchString(s) => {
                if input == s {
                    Ok(())
                } else {
                    Err(FilterErrorNot::MatchString(s.to_string()))
                }
            }
            Sanitize::MatchStrings(options) => {
                if options.iter().any(|option| option == input) {
                    Ok(())
                } else {
                    Err(FilterErrorNot::MatchStrings(options.clone()))
                }
            }
            Sanitize::IsBetween(min, max) => match input.parse::<isize>() {
                Ok(n) if (*min..=*max).contains(&n) => Ok(()),
                Ok(_) => Err(FilterErrorNot::Between(*min, *max)),
                Err(_) => Err(FilterErrorNot::Number(DesiredType::Isize)),
            },
        }
    }
}

impl Validator for [Sanitize] {
    fn check(&self, input: &str) -> Result<(), FilterErrorNot> {
        self.iter().try_for_each(|filter| filter.check(input))
    }
}

/// The type an input should parse into.
///
/// Used together with [`Sanitize::IsType`] to validate primitive values.
///
/// Currently supports:
/// - `String`
/// - `Bool`
/// - Unsigned integers: `U8`, `U16`, `U32`, `U64`, `U128`
/// - Signed integers: `I8`, `I16`, `I32`, `I64`, `I128`
/// - Platform-sized integer: `Isize`
/// - Floats: `F32`, `F64`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    String,
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    F32,
    F64,
}

impl DesiredType {
    fn parse(&self, input: &str) -> Result<(), FilterErrorNot> {
        match self {
            DesiredType::String => {
                check_type!(input, String, Err(FilterErrorNot::String(*self)))
            }
            DesiredType::Bool => check_type!(input, bool, Err(FilterErrorNot::Bool(*self))),
            DesiredType::U8 => check_type!(input, u8, Err(FilterErrorNot::Number(*self))),
            DesiredType::U16 => check_type!(input, u16, Err(FilterErrorNot::Number(*self))),
            DesiredType::U32 => check_type!(input, u32, Err(FilterErrorNot::Number(*self))),
            DesiredType::U64 => check_type!(input, u64, Err(FilterErrorNot::Number(*self))),
            DesiredType::U128 => check_type!(input, u128, Err(FilterErrorNot::Number(*self))),
            DesiredType::I8 => check_type!(input, i8, Err(FilterErrorNot::Number(*self))),
            DesiredType::I16 => check_type!(input, i16, Err(FilterErrorNot::Number(*self))),
            DesiredType::I32 => check_type!(input, i32, Err(FilterErrorNot::Number(*self))),
            DesiredType::I64 => check_type!(input, i64, Err(FilterErrorNot::Number(*self))),
            DesiredType::I128 => check_type!(input, i128, Err(FilterErrorNot::Number(*self))),
            DesiredType::Isize => check_type!(input, isize, Err(FilterErrorNot::Number(*self))),
            DesiredType::F32 => check_type!(input, f32, Err(FilterErrorNot::Number(*self))),
            DesiredType::F64 => check_type!(input, f64, Err(FilterErrorNot::Number(*self))),
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::U128 => write!(f, "u128"),
            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::I128 => write!(f, "i128"),
            Self::Isize => write!(f, "isize"),
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_match_string_success() {
        let filter = Sanitize::MatchString("hello".to_string());
        assert!(filter.check("hello").is_ok());
    }

    #[test]
    fn test_sanitize_match_string_fail() {
        let filter = Sanitize::MatchString("hello".to_string());
        let res = filter.check("world");
        assert_eq!(
            res.unwrap_err().to_string(),
            "The value doesn't match with hello, try again!"
        );
    }

    #[test]
    fn test_sanitize_match_strings_success() {
        let filter = Sanitize::MatchStrings(vec!["A".to_string(), "B".to_string()]);
        assert!(filter.check("A").is_ok());
        assert!(filter.check("B").is_ok());
    }

    #[test]
    fn test_sanitize_match_strings_fail() {
        let filter = Sanitize::MatchStrings(vec!["A".to_string(), "B".to_string()]);
        let res = filter.check("C");
        assert_eq!(
            res.unwrap_err().to_string(),
            "The value doesn't match with the options: A, B, try again!"
        );
    }

    #[test]
    fn test_sanitize_is_type_bool() {
        let filter = Sanitize::IsType(DesiredType::Bool);
        assert!(filter.check("true").is_ok());
        assert!(filter.check("false").is_ok());
        assert!(filter.check("maybe").is_err());
    }

    #[test]
    fn test_sanitize_is_type_u8() {
        let filter = Sanitize::IsType(DesiredType::U8);
        assert!(filter.check("42").is_ok());
        assert!(filter.check("-42").is_err());
        assert!(filter.check("256").is_err()); // u8 max is 255
        assert!(filter.check("abc").is_err());
    }

    #[test]
    fn test_sanitize_is_type_f64() {
        let filter = Sanitize::IsType(DesiredType::F64);
        assert!(filter.check("3.25").is_ok());
        assert_eq!(
            filter.check("pi").unwrap_err(),
            FilterErrorNot::Number(DesiredType::F64)
        );
    }

    #[test]
    fn test_sanitize_is_between() {
        let filter = Sanitize::IsBetween(10, 20);
        assert!(filter.check("10").is_ok());
        assert!(filter.check("15").is_ok());
        assert!(filter.check("20").is_ok());
        assert_eq!(
            filter.check("25").unwrap_err().to_string(),
            "The value is not between 10 and 20, try again!"
        );
        assert_eq!(
            filter.check("ten").unwrap_err(),
            FilterErrorNot::Number(DesiredType::Isize)
        );
    }

    #[test]
    fn test_closure_validator() {
        let starts_upper = |input: &str| input.chars().next().is_some_and(char::is_uppercase);
        assert!(starts_upper.check("Rust").is_ok());
        assert_eq!(starts_upper.check("rust"), Err(FilterErrorNot::Rejected));
    }

    #[test]
    fn test_filter_list_short_circuits() {
        let filters = vec![
            Sanitize::MatchString("Hello".to_string()),
            Sanitize::IsType(DesiredType::Bool),
        ];
        assert_eq!(
            filters.as_slice().check("Hello").unwrap_err().to_string(),
            "The value is not a bool, try again!"
        );

        let filters = vec![
            Sanitize::IsType(DesiredType::U8),
            Sanitize::IsType(DesiredType::Bool),
        ];
        assert_eq!(
            filters.as_slice().check("true").unwrap_err().to_string(),
            "The value is not a u8, try again!"
        );
    }

    #[test]
    fn test_sanitize_execute_trims() {
        let filters = vec![
            Sanitize::IsType(DesiredType::String),
            Sanitize::MatchString("Hello".to_string()),
        ];
        assert_eq!(Sanitize::execute("  Hello \n", &filters).unwrap(), "Hello");
    }

    #[test]
    fn test_sanitize_execute_fail() {
        let filters = vec![
            Sanitize::IsType(DesiredType::String),
            Sanitize::MatchStrings(vec![String::from("banana"), String::from("orange")]),
        ];
        assert_eq!(
            Sanitize::execute("watermelon", &filters)
                .unwrap_err()
                .to_string(),
            "The value doesn't match with the options: banana, orange, try again!"
        );
    }
}
