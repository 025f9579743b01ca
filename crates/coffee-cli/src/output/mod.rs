//! Terminal output for `coffee` commands
//!
//! Every command prints either a table/line for humans or, with `--json`,
//! one pretty-printed JSON document on stdout.

pub mod table_output;

use crate::error::Result;
use console::style;
use serde::Serialize;

/// Print a value as the single JSON document of a `--json` run
pub fn json_output<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

/// Confirmation line, e.g. after a successful validation or export
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// One validation violation or failure, on stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

/// Context line shown above a table
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Labelled Auth0 link
pub fn print_link(label: &str, url: &str) {
    println!("{} {}: {}", style("→").cyan(), label, style(url).dim());
}
