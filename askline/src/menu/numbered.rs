//! Numbered multi-line menu.
//!
//! ```text
//! Pick a color:
//!
//! 1) Red [Default - Press Enter]
//! 2) Blue
//! 3) Green
//!
//! ```

use super::{Choice, collect_options, take_choice};
use crate::utils::{
    ChooseOptions, Decoration, LineReader, PromptError, Terminal, Verdict,
};
use std::fmt::Display;
use std::io::Write;

const DEFAULT_MARKER: &str = " [Default - Press Enter]";

impl<R: LineReader, W: Write> Terminal<R, W> {
    /// Shows a numbered menu and returns the chosen option.
    ///
    /// Accepted answers, in resolution order:
    /// - an empty line, when a default is configured
    /// - a number between 1 and the number of options
    /// - the exact text of an option (first match wins)
    ///
    /// Fails with [`PromptError::NoOptions`] before writing anything when
    /// `options` is empty.
    pub fn choose<T, I>(
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

        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        let menu = render_menu(message, append_colon, &options, &labels, default.as_ref());
        let has_default = default.is_some();

        let choice = self.prompt_with(
            &menu,
            Decoration {
                append_colon: false,
                allow_continuation: false,
            },
            |candidate| resolve(candidate, &labels, has_default),
        )?;

        take_choice(options, default, choice)
    }
}

fn render_menu<T: PartialEq>(
    message: &str,
    append_colon: bool,
    options: &[T],
    labels: &[String],
    default: Option<&T>,
) -> String {
    let mut menu = String::new();
    if !message.is_empty() {
        menu.push_str(message);
        if append_colon {
            menu.push(':');
        }
        menu.push('\n');
    }
    menu.push('\n');

    for (number, (option, label)) in options.iter().zip(labels).enumerate() {
        let marker = if default == Some(option) {
            DEFAULT_MARKER
        } else {
            ""
        };
        menu.push_str(&format!("{}) {label}{marker}\n", number + 1));
    }
    menu.push('\n');

    menu
}

fn resolve(candidate: &str, labels: &[String], has_default: bool) -> Verdict<Choice> {
    if candidate.is_empty() {
        return if has_default {
            Verdict::Accepted(Choice::Default)
        } else {
            Verdict::Rejected
        };
    }

    if let Ok(number) = candidate.parse::<usize>()
        && (1..=labels.len()).contains(&number)
    {
        return Verdict::Accepted(Choice::Index(number - 1));
    }

    match labels.iter().position(|label| label == candidate) {
        Some(index) => Verdict::Accepted(Choice::Index(index)),
        None => Verdict::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fmt;

    const COLORS: [&str; 3] = ["Red", "Blue", "Green"];

    #[derive(Debug, PartialEq)]
    struct Fruit {
        id: u32,
        name: &'static str,
    }

    impl fmt::Display for Fruit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.name)
        }
    }

    #[test]
    fn test_choose_by_number() {
        let mut terminal = Terminal::scripted("2\n");
        let color = terminal
            .choose("Pick a color", COLORS, ChooseOptions::default())
            .unwrap();

        assert_eq!(color, "Blue");
        assert_eq!(
            terminal.output(),
            "Pick a color:\n\n1) Red\n2) Blue\n3) Green\n\n"
        );
    }

    #[test]
    fn test_choose_by_text() {
        let mut terminal = Terminal::scripted("  Green \n");
        let color = terminal
            .choose("Pick a color", COLORS, ChooseOptions::default())
            .unwrap();

        assert_eq!(color, "Green");
    }

    #[test]
    fn test_choose_default_on_empty() {
        let mut terminal = Terminal::scripted("\n");
        let color = terminal
            .choose(
                "Pick a color",
                COLORS,
                ChooseOptions::default().with_default("Red"),
            )
            .unwrap();

        assert_eq!(color, "Red");
        assert_eq!(
            terminal.output(),
            "Pick a color:\n\n1) Red [Default - Press Enter]\n2) Blue\n3) Green\n\n"
        );
    }

    #[test]
    fn test_choose_rejects_out_of_range_and_empty() {
        let mut terminal = Terminal::scripted("4\n0\n\nred\n3\n");
        let color = terminal
            .choose("Pick", COLORS, ChooseOptions::default().with_colon(false))
            .unwrap();

        assert_eq!(color, "Green");
        assert_eq!(
            terminal.output(),
            "Pick\n\n1) Red\n2) Blue\n3) Green\n\n".repeat(5)
        );
    }

    #[test]
    fn test_choose_empty_message_lists_options_only() {
        let mut terminal = Terminal::scripted("1\n");
        let color = terminal
            .choose("", COLORS, ChooseOptions::default())
            .unwrap();

        assert_eq!(color, "Red");
        assert_eq!(terminal.output(), "\n1) Red\n2) Blue\n3) Green\n\n");
    }

    #[test]
    fn test_choose_number_wins_over_text() {
        let mut terminal = Terminal::scripted("1\n");
        let picked = terminal
            .choose("Pick", ["2", "1"], ChooseOptions::default())
            .unwrap();

        assert_eq!(picked, "2");
    }

    #[test]
    fn test_choose_duplicate_labels() {
        let fruits = || {
            vec![
                Fruit { id: 1, name: "apple" },
                Fruit { id: 2, name: "apple" },
            ]
        };

        let mut terminal = Terminal::scripted("apple\n");
        let fruit = terminal
            .choose("Fruit", fruits(), ChooseOptions::default())
            .unwrap();
        assert_eq!(fruit.id, 1);

        let mut terminal = Terminal::scripted("2\n");
        let fruit = terminal
            .choose("Fruit", fruits(), ChooseOptions::default())
            .unwrap();
        assert_eq!(fruit.id, 2);
    }

    #[test]
    fn test_choose_default_outside_options() {
        let mut terminal = Terminal::scripted("\n");
        let color = terminal
            .choose("Pick", COLORS, ChooseOptions::default().with_default("Black"))
            .unwrap();

        assert_eq!(color, "Black");
        assert!(!terminal.output().contains(DEFAULT_MARKER));
    }

    #[test]
    fn test_choose_empty_options_fails_before_io() {
        let mut terminal = Terminal::scripted("1\n");
        let res = terminal.choose("Pick", Vec::<String>::new(), ChooseOptions::default());

        assert!(matches!(res, Err(PromptError::NoOptions)));
        assert_eq!(terminal.output(), "");
    }

    #[test]
    fn test_choose_exhausted() {
        let mut terminal = Terminal::scripted("9\n");
        let res = terminal.choose("Pick", COLORS, ChooseOptions::default());

        assert!(matches!(res, Err(PromptError::InputExhausted)));
    }

    #[test]
    fn test_resolve() {
        let labels: Vec<String> = COLORS.iter().map(ToString::to_string).collect();

        assert_eq!(resolve("", &labels, true), Verdict::Accepted(Choice::Default));
        assert_eq!(resolve("", &labels, false), Verdict::Rejected);
        assert_eq!(resolve("3", &labels, false), Verdict::Accepted(Choice::Index(2)));
        assert_eq!(resolve("Blue", &labels, false), Verdict::Accepted(Choice::Index(1)));
        assert_eq!(resolve("blue", &labels, false), Verdict::Rejected);
        assert_eq!(resolve("-1", &labels, false), Verdict::Rejected);
    }
}
