// docsieve/src/commands/process.rs
//! `process` command: record policy over a JSON array.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use docsieve_core::{PolicyEngine, SieveConfig};

use crate::cli::ProcessCommand;
use crate::commands::{info_msg, parse_records, read_input, summary_msg};
use crate::ui::theme::ThemeMap;

pub fn run_process(cmd: &ProcessCommand, config: &SieveConfig, quiet: bool, theme: &ThemeMap) -> Result<()> {
    info!("Starting process operation.");
    let text = read_input(cmd.input.as_deref())?;
    let records = parse_records(&text)?;
    debug!("Read {} record(s).", records.len());

    let engine = PolicyEngine::new(config);
    let (clean, report) = engine.process_batch_with_report(&records);
    let json = serde_json::to_string_pretty(&clean).context("Failed to serialize sanitized records")?;

    match &cmd.output {
        Some(path) => {
            if !quiet {
                info_msg(format!("Writing sanitized records to file: {}", path.display()), theme);
            }
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", json)?;
        }
    }

    if !cmd.no_summary && !quiet {
        summary_msg(&report, theme)?;
    }
    info!("Process operation completed.");
    Ok(())
}
