use anyhow::{Context, Result};
use askline::utils::{
    BoolOptions, ChooseOptions, DesiredType, DoubleOptions, IntOptions, PromptOptions, Sanitize,
    Terminal,
};
use log::{LevelFilter, info};

fn main() -> Result<()> {
    init_logging();

    println!("------------------------------------------------------------");
    println!("                     ASKLINE PROMPT TOUR                    ");
    println!("             end a line with \\ to keep typing              ");
    println!("------------------------------------------------------------");

    let mut terminal = Terminal::stdio();

    let name = terminal
        .prompt("Your name", PromptOptions::default().with_default("anonymous"))
        .context("reading name")?;

    let bio = terminal
        .prompt(
            "Short bio",
            PromptOptions::default()
                .with_continuation(true)
                .with_validator(|bio: &str| bio.len() <= 280),
        )
        .context("reading bio")?;

    let age = terminal
        .ask(
            "Your age",
            &[
                Sanitize::IsType(DesiredType::U8),
                Sanitize::IsBetween(1, 130),
            ],
        )
        .context("reading age")?;

    let likes_rust = terminal
        .prompt_bool("Do you like Rust", BoolOptions::default().with_default(Some(true)))
        .context("reading yes/no")?;

    let mask = terminal
        .prompt_int("Favourite byte in hex", IntOptions::default().with_radix(16).with_default(0x2a))
        .context("reading hex byte")?;

    let ratio = terminal
        .prompt_double("Coffee to milk ratio", DoubleOptions::default().with_default(1.0))
        .context("reading ratio")?;

    let editor = terminal
        .choose(
            "Editor",
            ["helix", "neovim", "emacs", "vscode"],
            ChooseOptions::default().with_default("helix"),
        )
        .context("choosing editor")?;

    let indent = terminal
        .choose_shorthand(
            "Indent with",
            ["Spaces", "Tabs"],
            ChooseOptions::default().with_default("Spaces"),
        )
        .context("choosing indentation")?;

    info!("all answers collected");

    println!();
    println!("name:       {name}");
    println!("bio:        {}", bio.replace('\n', "\n            "));
    println!("age:        {age}");
    println!("likes rust: {likes_rust}");
    println!("hex byte:   {mask:#04x}");
    println!("ratio:      {ratio}");
    println!("editor:     {editor}");
    println!("indent:     {indent}");

    Ok(())
}

/// Logs go to stderr so they never interleave with the prompts on stdout.
/// `RUST_LOG=debug` shows every rejected answer.
fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}
