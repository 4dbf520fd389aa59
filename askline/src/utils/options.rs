//! # Prompt Options
//!
//! One options struct per prompt operation. Each `Default` carries the
//! documented behaviour, and the `with_*` methods chain:
//!
//! ```rust
//! use askline::utils::{IntOptions, PromptOptions};
//!
//! let name = PromptOptions::default().with_default("anonymous");
//! let mask = IntOptions::default().with_radix(16).with_default(0xff);
//! assert_eq!(mask.radix, 16);
//! ```
//!
//! With the `serde` feature the data-only structs ([`Decoration`],
//! [`BoolOptions`], [`IntOptions`], [`DoubleOptions`]) can be loaded from
//! configuration files. Missing fields fall back to their defaults.

use crate::utils::sanitize::Validator;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a message is decorated and how input lines are gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Decoration {
    /// Append `": "` after the message.
    pub append_colon: bool,
    /// Let a trailing `\` continue the answer on the next line.
    pub allow_continuation: bool,
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            append_colon: true,
            allow_continuation: false,
        }
    }
}

/// Options for [`crate::utils::Terminal::prompt`].
pub struct PromptOptions<'a> {
    /// Accepts or rejects a candidate. `None` accepts any non-empty answer.
    pub validator: Option<Box<dyn Validator + 'a>>,
    /// Returned when the user submits an empty line.
    pub default: Option<String>,
    pub append_colon: bool,
    pub allow_continuation: bool,
}

impl Default for PromptOptions<'_> {
    fn default() -> Self {
        let decoration = Decoration::default();
        Self {
            validator: None,
            default: None,
            append_colon: decoration.append_colon,
            allow_continuation: decoration.allow_continuation,
        }
    }
}

impl<'a> PromptOptions<'a> {
    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator + 'a) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn with_colon(mut self, append_colon: bool) -> Self {
        self.append_colon = append_colon;
        self
    }

    #[must_use]
    pub fn with_continuation(mut self, allow_continuation: bool) -> Self {
        self.allow_continuation = allow_continuation;
        self
    }

    pub fn decoration(&self) -> Decoration {
        Decoration {
            append_colon: self.append_colon,
            allow_continuation: self.allow_continuation,
        }
    }
}

impl fmt::Debug for PromptOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptOptions")
            .field("validator", &self.validator.as_ref().map(|_| "<validator>"))
            .field("default", &self.default)
            .field("append_colon", &self.append_colon)
            .field("allow_continuation", &self.allow_continuation)
            .finish()
    }
}

/// Options for [`crate::utils::Terminal::prompt_bool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BoolOptions {
    /// Answer for an empty line. `None` makes an empty line invalid.
    pub default: Option<bool>,
    /// Append `(y/n)`, `(Y/n)` or `(y/N)` to the message.
    pub append_yes_no: bool,
    pub append_colon: bool,
}

impl Default for BoolOptions {
    fn default() -> Self {
        Self {
            default: Some(false),
            append_yes_no: true,
            append_colon: true,
        }
    }
}

impl BoolOptions {
    #[must_use]
    pub fn with_default(mut self, default: Option<bool>) -> Self {
        self.default = default;
        self
    }

    #[must_use]
    pub fn with_yes_no(mut self, append_yes_no: bool) -> Self {
        self.append_yes_no = append_yes_no;
        self
    }

    #[must_use]
    pub fn with_colon(mut self, append_colon: bool) -> Self {
        self.append_colon = append_colon;
        self
    }
}

/// Options for [`crate::utils::Terminal::prompt_int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct IntOptions {
    pub default: Option<i64>,
    /// Base the answer is parsed in, `2..=36`.
    pub radix: u32,
    pub append_colon: bool,
}

impl Default for IntOptions {
    fn default() -> Self {
        Self {
            default: None,
            radix: 10,
            append_colon: true,
        }
    }
}

impl IntOptions {
    #[must_use]
    pub fn with_default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    #[must_use]
    pub fn with_colon(mut self, append_colon: bool) -> Self {
        self.append_colon = append_colon;
        self
    }
}

/// Options for [`crate::utils::Terminal::prompt_double`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DoubleOptions {
    pub default: Option<f64>,
    pub append_colon: bool,
}

impl Default for DoubleOptions {
    fn default() -> Self {
        Self {
            default: None,
            append_colon: true,
        }
    }
}

impl DoubleOptions {
    #[must_use]
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_colon(mut self, append_colon: bool) -> Self {
        self.append_colon = append_colon;
        self
    }
}

/// Options for [`crate::utils::Terminal::choose`] and
/// [`crate::utils::Terminal::choose_shorthand`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChooseOptions<T> {
    /// Option returned for an empty line. Compared by equality against the
    /// option list to mark it in the menu.
    pub default: Option<T>,
    pub append_colon: bool,
}

impl<T> Default for ChooseOptions<T> {
    fn default() -> Self {
        Self {
            default: None,
            append_colon: true,
        }
    }
}

impl<T> ChooseOptions<T> {
    #[must_use]
    pub fn with_default(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_colon(mut self, append_colon: bool) -> Self {
        self.append_colon = append_colon;
        self
    }
}
