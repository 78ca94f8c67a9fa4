use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use std::ffi::OsStr;
use std::io::IsTerminal;
use std::path::PathBuf;

mod css_blocks;
mod error;
mod logging;
mod tools;
mod types;


use types::Outcome;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the CSS-containing file to patch in place
    path: PathBuf,
}

/// Colour only on a terminal, and not when NO_COLOR is set to a non-empty value.
fn use_color(is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    is_terminal && no_color.is_none_or(|v| v.is_empty())
}

fn print_outcome(outcome: &Outcome) {
    let line = outcome.to_string();
    let no_color = std::env::var_os("NO_COLOR");
    let colored = use_color(std::io::stdout().is_terminal(), no_color.as_deref());

    match (colored, outcome.is_patched()) {
        (false, _) => println!("{}", line),
        (true, true) => println!("{}", line.green()),
        (true, false) => println!("{}", line.yellow()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let outcome = tools::patch_file(&cli.path)
        .with_context(|| format!("Failed to patch {}", cli.path.display()))?;

    print_outcome(&outcome);
    Ok(())
}
