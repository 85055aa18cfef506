// docsieve/src/commands/extract.rs
//! `extract` command: content filter then record policy over a document dump.

use anyhow::Result;
use std::path::Path;

use docsieve_core::{run_job, JobConfig, JobKind, JobOutcome, RetentionPolicy, SieveConfig};

use crate::cli::{ExtractCommand, ModeChoice};
use crate::commands::{success_msg, summary_msg, warn_msg};
use crate::ui::theme::ThemeMap;

pub fn run_extract(cmd: &ExtractCommand, config: &SieveConfig, output_dir: &Path, quiet: bool, theme: &ThemeMap) -> Result<()> {
    let kind = match cmd.mode {
        ModeChoice::Strict => JobKind::ExtractStrict,
        ModeChoice::Permissive => JobKind::ExtractSmart,
    };
    let mut job = JobConfig::new(kind, config.clone());
    job.input = Some(cmd.input.clone());
    job.output_dir = output_dir.to_path_buf();
    job.retention = if cmd.keep_source { RetentionPolicy::Keep } else { RetentionPolicy::DeleteJunk };

    let outcome = run_job(&job)?;
    report_outcome(&outcome, !cmd.no_summary && !quiet, theme)
}

/// Prints what a job produced.
pub fn report_outcome(outcome: &JobOutcome, show_summary: bool, theme: &ThemeMap) -> Result<()> {
    match outcome {
        JobOutcome::Records { path, report } => {
            success_msg(format!("Wrote {} record(s) to {}", report.emitted(), path.display()), theme);
            if show_summary {
                summary_msg(report, theme)?;
            }
        }
        JobOutcome::Report { path } => success_msg(format!("Report saved to {}", path.display()), theme),
        JobOutcome::Junk { source, disposed: true } => {
            warn_msg(format!("No work content found; deleted {}", source.display()), theme)
        }
        JobOutcome::Junk { source, disposed: false } => {
            warn_msg(format!("No work content found; kept {}", source.display()), theme)
        }
    }
    Ok(())
}
