//! # askline
//!
//! Interactive, line-buffered console prompts for CLI applications.
//!
//! Every prompt follows the same loop: print a message, read a line, check
//! it, and either return the answer or ask again. On top of that loop the
//! crate offers:
//!
//! - **Text prompts** with validators, default answers and `\` line
//!   continuation ([`utils::Terminal::prompt`])
//! - **Typed prompts** for booleans, integers in any radix, floats and any
//!   [`FromStr`](std::str::FromStr) type ([`utils::coerce`])
//! - **Option menus**, numbered or shorthand ([`menu`])
//! - **Composable filters** for common checks ([`utils::Sanitize`])
//!
//! There is no retry limit: a prompt only gives up when its input runs out,
//! which is reported as [`utils::PromptError::InputExhausted`].
//!
//! ## Example
//! ```rust,no_run
//! use askline::utils::{BoolOptions, ChooseOptions, IntOptions, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//!
//! let port = terminal.prompt_int("Port", IntOptions::default().with_default(8080))?;
//! let tls = terminal.prompt_bool("Enable TLS", BoolOptions::default())?;
//! let level = terminal.choose_shorthand(
//!     "Log level",
//!     ["debug", "info", "warn"],
//!     ChooseOptions::default().with_default("info"),
//! )?;
//!
//! println!("{port} {tls} {level}");
//! # Ok::<(), askline::utils::PromptError>(())
//! ```
//!
//! ## Testing prompts
//!
//! [`utils::Terminal::new`] takes any [`BufRead`](std::io::BufRead) and any
//! [`Write`](std::io::Write), so scripted answers and captured output are one
//! `Cursor` and one `Vec<u8>` away:
//!
//! ```rust
//! use askline::utils::{PromptOptions, Terminal};
//! use std::io::Cursor;
//!
//! let mut terminal = Terminal::new(Cursor::new("\nAda\n"), Vec::new());
//! let name = terminal.prompt("Name", PromptOptions::default())?;
//!
//! let (_, written) = terminal.into_parts();
//! assert_eq!(name, "Ada");
//! assert_eq!(written, b"Name: Name: ");
//! # Ok::<(), askline::utils::PromptError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the data-only option
//!   structs.

pub mod menu;

pub mod utils;
