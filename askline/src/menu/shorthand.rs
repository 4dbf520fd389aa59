//! Single-line shorthand menu: `Overwrite: (Yes/no)`.
//!
//! When a default is set, its first letter is upper-cased and every other
//! option's first letter is lower-cased, so the capital marks what an empty
//! answer picks.

use super::{Choice, collect_options, take_choice};
use crate::utils::{
    ChooseOptions, Decoration, LineReader, PromptError, Terminal, Verdict,
};
use std::fmt::Display;
use std::io::Write;

/// An option as shown in the menu, plus the key it answers to.
#[derive(Debug)]
struct Shorthand {
    label: String,
    key: Option<String>,
}

impl Shorthand {
    fn new(label: String) -> Self {
        let key = first_letter(&label);
        Self { label, key }
    }
}

impl<R: LineReader, W: Write> Terminal<R, W> {
    /// Shows a one-line menu and returns the chosen option.
    ///
    /// Accepted answers, in resolution order:
    /// - an empty line, when a default is configured
    /// - the exact text of an option as displayed
    /// - any answer whose first letter matches an option's first letter,
    ///   ignoring case (first match wins)
    ///
    /// Fails with [`PromptError::NoOptions`] before writing anything when
    /// `options` is empty.
    pub fn choose_shorthand<T, I>(
        &mut self,
        message: &str,
        options: I,
        choose_options: ChooseOptions<T>,
    ) -> Result<T, PromptError>
    where
        T: Display + PartialEq,
        I: IntoIterator<Item = T>,
    {
        let options = collect_options(options)?;
        let ChooseOptions {
            default,
            append_colon,
        } = choose_options;

        let shorthands: Vec<Shorthand> = options
            .iter()
            .map(|option| {
                let label = option.to_string();
                Shorthand::new(match &default {
                    Some(default) if option == default => recase_first(&label, true),
                    Some(_) => recase_first(&label, false),
                    None => label,
                })
            })
            .collect();

        let listing = shorthands
            .iter()
            .map(|shorthand| shorthand.label.as_str())
            .collect::<Vec<_>>()
            .join("/");
        let colon = if append_colon { ":" } else { "" };
        let message = if message.is_empty() {
            format!("({listing})")
        } else {
            format!("{message}{colon} ({listing})")
        };
        let has_default = default.is_some();

        let choice = self.prompt_with(
            &message,
            Decoration {
                append_colon: false,
                allow_continuation: false,
            },
            |candidate| resolve(candidate, &shorthands, has_default),
        )?;

        take_choice(options, default, choice)
    }
}

fn resolve(candidate: &str, shorthands: &[Shorthand], has_default: bool) -> Verdict<Choice> {
    if candidate.is_empty() {
        return if has_default {
            Verdict::Accepted(Choice::Default)
        } else {
            Verdict::Rejected
        };
    }

    if let Some(index) = shorthands.iter().position(|s| s.label == candidate) {
        return Verdict::Accepted(Choice::Index(index));
    }

    let key = first_letter(candidate);
    match shorthands.iter().position(|s| s.key.is_some() && s.key == key) {
        Some(index) => Verdict::Accepted(Choice::Index(index)),
        None => Verdict::Rejected,
    }
}

/// Lower-cased first character, as a string since lower-casing may yield
/// more than one `char`.
fn first_letter(text: &str) -> Option<String> {
    text.chars().next().map(|c| c.to_lowercase().collect())
}

fn recase_first(text: &str, upper: bool) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
