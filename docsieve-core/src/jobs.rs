// File: docsieve-core/src/jobs.rs

//! `jobs.rs`
//! One-shot batch jobs. A job is described by an explicit [`JobConfig`] value;
//! nothing here reads the process environment.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

use crate::artifacts::{self, RecordArtifact};
use crate::classification::Classification;
use crate::config::SieveConfig;
use crate::document::Document;
use crate::errors::DocsieveError;
use crate::filters::{build_filter, ExtractOutcome, FilterMode};
use crate::policy::{BatchReport, PolicyEngine};
use crate::records::Record;

pub const RECORDS_OUTPUT_FILE: &str = "secure_output.json";
pub const EXTRACT_OUTPUT_FILE: &str = "extracted_records.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Policy enforcement over a JSON batch of records.
    ProcessExcel,
    /// A classified text report from raw content.
    ProcessPdf,
    /// Quality-first document extraction, then policy enforcement.
    ExtractStrict,
    /// Smart-filter document extraction, then policy enforcement.
    ExtractSmart,
}

impl JobKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JobKind::ProcessExcel => "process_excel",
            JobKind::ProcessPdf => "process_pdf",
            JobKind::ExtractStrict => "extract_strict",
            JobKind::ExtractSmart => "extract_smart",
        }
    }

    pub fn filter_mode(self) -> Option<FilterMode> {
        match self {
            JobKind::ExtractStrict => Some(FilterMode::Strict),
            JobKind::ExtractSmart => Some(FilterMode::Permissive),
            JobKind::ProcessExcel | JobKind::ProcessPdf => None,
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobKind {
    type Err = DocsieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "process_excel" => Ok(JobKind::ProcessExcel),
            "process_pdf" => Ok(JobKind::ProcessPdf),
            "extract_strict" => Ok(JobKind::ExtractStrict),
            "extract_smart" => Ok(JobKind::ExtractSmart),
            other => Err(DocsieveError::UnknownJobType(other.to_string())),
        }
    }
}

/// What happens to a source document that yields no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    #[default]
    DeleteJunk,
    Keep,
}

#[derive(Debug, Clone)]
pub struct JobConfig {
    pub kind: JobKind,
    pub input: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub config: SieveConfig,
    pub retention: RetentionPolicy,
    /// Classification stamped on `process_pdf` reports.
    pub report_classification: Classification,
}

impl JobConfig {
    pub fn new(kind: JobKind, config: SieveConfig) -> Self {
        Self {
            kind,
            input: None,
            output_dir: PathBuf::from("output"),
            config,
            retention: RetentionPolicy::default(),
            report_classification: Classification::Internal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    Records { path: PathBuf, report: BatchReport },
    Report { path: PathBuf },
    /// Extraction produced nothing; `disposed` tells whether the source was deleted.
    Junk { source: PathBuf, disposed: bool },
}

/// Runs a job to completion.
pub fn run_job(job: &JobConfig) -> Result<JobOutcome> {
    let run_id = Uuid::new_v4().to_string();
    info!("worker_start: job={} run_id={}", job.kind, run_id);

    let input = job.input.as_deref().ok_or(DocsieveError::MissingInput(job.kind))?;

    match job.kind {
        JobKind::ProcessExcel => {
            let raw = fs::read(input).with_context(|| format!("Failed to read records from {}", input.display()))?;
            let records: Vec<Record> = serde_json::from_slice(&raw)
                .map_err(DocsieveError::from)
                .with_context(|| format!("Expected a JSON array of objects in {}", input.display()))?;
            info!("policy_enforcement_start: items={}", records.len());
            let (path, report) = enforce_and_write(job, &run_id, Some(artifacts::sha256_hex(&raw)), &records, RECORDS_OUTPUT_FILE)?;
            Ok(JobOutcome::Records { path, report })
        }
        JobKind::ProcessPdf => {
            let content = fs::read_to_string(input)
                .with_context(|| format!("Failed to read report content from {}", input.display()))?;
            let filename = artifacts::report_filename(job.report_classification);
            let path = artifacts::write_report(&job.output_dir, &filename, &content, job.report_classification)?;
            Ok(JobOutcome::Report { path })
        }
        JobKind::ExtractStrict | JobKind::ExtractSmart => {
            let mode = job.kind.filter_mode().unwrap_or(FilterMode::Strict);
            let raw = fs::read(input).with_context(|| format!("Failed to read document {}", input.display()))?;
            let document = Document::from_slice(&raw, input)?;
            let filter = build_filter(mode, &job.config)?;

            match filter.extract(&document) {
                ExtractOutcome::Records(records) => {
                    let (path, report) =
                        enforce_and_write(job, &run_id, Some(artifacts::sha256_hex(&raw)), &records, EXTRACT_OUTPUT_FILE)?;
                    Ok(JobOutcome::Records { path, report })
                }
                ExtractOutcome::Empty => {
                    let disposed = dispose_source(input, job.retention)?;
                    Ok(JobOutcome::Junk { source: input.to_path_buf(), disposed })
                }
            }
        }
    }
}

fn enforce_and_write(
    job: &JobConfig,
    run_id: &str,
    source_sha256: Option<String>,
    records: &[Record],
    filename: &str,
) -> Result<(PathBuf, BatchReport)> {
    let engine = PolicyEngine::new(&job.config);
    let (clean, report) = engine.process_batch_with_report(records);
    let artifact = RecordArtifact::new(run_id, source_sha256, clean);
    let path = artifacts::write_records(&job.output_dir, filename, &artifact)?;
    Ok((path, report))
}

/// Applies the retention policy to a source that produced no records.
pub fn dispose_source(source: &Path, retention: RetentionPolicy) -> Result<bool> {
    match retention {
        RetentionPolicy::Keep => {
            warn!("No usable content in {}; keeping source as requested.", source.display());
            Ok(false)
        }
        RetentionPolicy::DeleteJunk => {
            fs::remove_file(source)
                .with_context(|| format!("Failed to remove junk source {}", source.display()))?;
            warn!("No usable content in {}; source removed.", source.display());
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_job_tokens_parse() {
        assert_eq!("process_excel".parse::<JobKind>().unwrap(), JobKind::ProcessExcel);
        assert_eq!("extract_smart".parse::<JobKind>().unwrap(), JobKind::ExtractSmart);
        assert_eq!(JobKind::ProcessPdf.to_string(), "process_pdf");
    }

    #[test]
    fn unknown_job_token_is_a_dispatch_error() {
        let err = "process_word".parse::<JobKind>().unwrap_err();
        assert!(matches!(err, DocsieveError::UnknownJobType(ref t) if t == "process_word"));
    }

    #[test]
    fn missing_input_is_reported() {
        let job = JobConfig::new(JobKind::ProcessExcel, SieveConfig::default());
        let err = run_job(&job).unwrap_err();
        assert!(matches!(err.downcast_ref::<DocsieveError>(), Some(DocsieveError::MissingInput(JobKind::ProcessExcel))));
    }

    #[test]
    fn keep_policy_leaves_source_in_place() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(!dispose_source(file.path(), RetentionPolicy::Keep).unwrap());
        assert!(file.path().exists());
    }
}
