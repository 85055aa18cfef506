// docsieve/src/commands/run.rs
//! `run` command: one-shot batch job named on the command line or by `JOB_TYPE`.

use anyhow::Result;
use log::info;
use std::path::Path;

use docsieve_core::{run_job, JobConfig, JobKind, RetentionPolicy, SieveConfig};

use crate::cli::RunCommand;
use crate::commands::extract::report_outcome;
use crate::ui::theme::ThemeMap;

pub fn run_batch_job(cmd: &RunCommand, config: &SieveConfig, output_dir: &Path, quiet: bool, theme: &ThemeMap) -> Result<()> {
    let kind: JobKind = cmd.job.parse()?;
    info!("Dispatching job '{}'.", kind);

    let mut job = JobConfig::new(kind, config.clone());
    job.input = cmd.input.clone();
    job.output_dir = output_dir.to_path_buf();
    job.report_classification = cmd.classification;
    job.retention = if cmd.keep_source { RetentionPolicy::Keep } else { RetentionPolicy::DeleteJunk };

    let outcome = run_job(&job)?;
    report_outcome(&outcome, !quiet, theme)
}
