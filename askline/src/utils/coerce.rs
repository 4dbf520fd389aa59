//! # Typed Prompts
//!
//! Boolean, integer, floating-point and generic [`FromStr`] prompts. Each one
//! runs the plain text prompt with a validator that only lets parseable
//! answers through, then parses the accepted text. A parse failure after
//! validation is a bug and surfaces as [`PromptError::Internal`].

use crate::utils::error::PromptError;
use crate::utils::options::{BoolOptions, DoubleOptions, IntOptions, PromptOptions};
use crate::utils::reader::LineReader;
use crate::utils::terminal::Terminal;
use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl<R: LineReader, W: Write> Terminal<R, W> {
    /// Asks a yes/no question.
    ///
    /// Answers starting with `y` or `n` (any case) are accepted. An empty
    /// answer picks `options.default`, or is rejected when there is none.
    pub fn prompt_bool(&mut self, message: &str, options: BoolOptions) -> Result<bool, PromptError> {
        let mut message = message.to_string();
        if options.append_yes_no {
            message.push_str(match options.default {
                None => " (y/n)",
                Some(true) => " (Y/n)",
                Some(false) => " (y/N)",
            });
        }

        let has_default = options.default.is_some();
        let answer = self.prompt(
            &message,
            PromptOptions::default()
                .with_colon(options.append_colon)
                .with_validator(move |input: &str| {
                    let input = input.trim().to_lowercase();
                    (has_default && input.is_empty())
                        || input.starts_with('y')
                        || input.starts_with('n')
                }),
        )?;

        let answer = answer.to_lowercase();
        Ok(match options.default {
            Some(default) if answer.is_empty() => default,
            _ => answer.starts_with('y'),
        })
    }

    /// Asks for an integer written in `options.radix`.
    ///
    /// The default, if any, is shown in the same radix.
    pub fn prompt_int(&mut self, message: &str, options: IntOptions) -> Result<i64, PromptError> {
        let radix = options.radix;
        if !(2..=36).contains(&radix) {
            return Err(PromptError::InvalidRadix(radix));
        }

        let mut prompt_options = PromptOptions::default().with_colon(options.append_colon);
        if let Some(default) = options.default {
            prompt_options = prompt_options.with_default(format_radix(default, radix));
        }

        let answer = self.prompt_gated(message, prompt_options, |input| {
            i64::from_str_radix(input, radix).is_ok()
        })?;

        i64::from_str_radix(&answer, radix).map_err(|e| {
            PromptError::Internal(format!(
                "accepted answer {answer:?} is not a base {radix} integer: {e}"
            ))
        })
    }

    /// Asks for a finite floating-point number. `inf`, `infinity` and `NaN`
    /// are re-prompted.
    pub fn prompt_double(&mut self, message: &str, options: DoubleOptions) -> Result<f64, PromptError> {
        let mut prompt_options = PromptOptions::default().with_colon(options.append_colon);
        if let Some(default) = options.default {
            prompt_options = prompt_options.with_default(default.to_string());
        }

        let answer = self.prompt_gated(message, prompt_options, |input| {
            input.parse::<f64>().is_ok_and(f64::is_finite)
        })?;

        answer.parse::<f64>().map_err(|e| {
            PromptError::Internal(format!("accepted answer {answer:?} is not a number: {e}"))
        })
    }

    /// Asks for any value that implements [`FromStr`].
    ///
    /// An answer must parse as `T` and pass the validator in `options`, if
    /// one is set. A default must itself parse as `T`.
    pub fn prompt_parsed<T>(&mut self, message: &str, options: PromptOptions<'_>) -> Result<T, PromptError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let answer = self.prompt_gated(message, options, |input| input.parse::<T>().is_ok())?;

        answer.parse::<T>().map_err(|e| {
            PromptError::Internal(format!("accepted answer {answer:?} does not parse: {e}"))
        })
    }
}

/// Renders `value` in `radix` (lower-case digits) so that
/// `i64::from_str_radix` reads it back unchanged.
fn format_radix(value: i64, radix: u32) -> String {
    if radix == 10 {
        return value.to_string();
    }

    let radix = u64::from(radix);
    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        digits.push(RADIX_DIGITS[(magnitude % radix) as usize]);
        magnitude /= radix;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        digits.push(b'-');
    }

    digits.iter().rev().map(|&digit| char::from(digit)).collect()
}
