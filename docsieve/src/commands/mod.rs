// docsieve/src/commands/mod.rs
//! Subcommand implementations and the console helpers they share.

pub mod call;
pub mod extract;
pub mod process;
pub mod run;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io::{self, Read};
use std::path::Path;

use docsieve_core::{BatchReport, Record};

use crate::ui::output_format;
use crate::ui::summary;
use crate::ui::theme::ThemeMap;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Prints the batch summary table to stderr.
pub fn summary_msg(report: &BatchReport, theme: &ThemeMap) -> Result<()> {
    let stderr_supports_color = io::stderr().is_terminal();
    summary::print_summary(report, &mut io::stderr(), theme, stderr_supports_color)
        .context("Failed to print batch summary")
}

/// Reads a whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Parses a JSON array of objects.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    serde_json::from_str(text).context("Input must be a JSON array of objects")
}
