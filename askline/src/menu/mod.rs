//! # Option Menus
//!
//! Two ways of picking one value out of a fixed list, both built on
//! [`Terminal::prompt_with`](crate::utils::Terminal::prompt_with):
//!
//! - [`Terminal::choose`](crate::utils::Terminal::choose): a numbered,
//!   multi-line menu. Answer with the option's number or its full text.
//! - [`Terminal::choose_shorthand`](crate::utils::Terminal::choose_shorthand):
//!   a one-line `(opt1/opt2/...)` menu. Answer with the full text or just
//!   its first letter.
//!
//! Options can be of any type that is [`Display`] + [`PartialEq`]. The
//! rendered text is what the user matches against. When two options render
//! the same, text and first-letter answers pick the first of them; numbers
//! are always unambiguous.
//!
//! ```rust,no_run
//! use askline::utils::{ChooseOptions, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let color = terminal.choose(
//!     "Pick a color",
//!     ["Red", "Blue", "Green"],
//!     ChooseOptions::default().with_default("Red"),
//! )?;
//! # Ok::<(), askline::utils::PromptError>(())
//! ```

pub mod numbered;
pub mod shorthand;

use crate::utils::PromptError;
use log::debug;
use std::fmt::Display;

/// What a menu answer resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Default,
    Index(usize),
}

/// Collects the options, refusing an empty list before any prompt is shown.
fn collect_options<T, I>(options: I) -> Result<Vec<T>, PromptError>
where
    I: IntoIterator<Item = T>,
{
    let options: Vec<T> = options.into_iter().collect();
    if options.is_empty() {
        return Err(PromptError::NoOptions);
    }
    Ok(options)
}

/// Hands back the value a [`Choice`] points at.
fn take_choice<T: Display>(
    options: Vec<T>,
    default: Option<T>,
    choice: Choice,
) -> Result<T, PromptError> {
    let picked = match choice {
        Choice::Default => default.ok_or_else(|| {
            PromptError::Internal("empty answer accepted without a default".to_string())
        })?,
        Choice::Index(index) => options.into_iter().nth(index).ok_or_else(|| {
            PromptError::Internal(format!("selected option {index} does not exist"))
        })?,
    };

    debug!("selected option {picked}");
    Ok(picked)
}
