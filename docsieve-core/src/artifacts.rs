// docsieve-core/src/artifacts.rs
//! Output artifacts handed to downstream writers: a JSON record set and a
//! plain-text classified report.

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::classification::Classification;
use crate::records::Record;

/// Hex SHA-256 of a source input, recorded alongside its outputs.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordArtifact {
    pub run_id: String,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_sha256: Option<String>,
    pub record_count: usize,
    pub records: Vec<Record>,
}

impl RecordArtifact {
    pub fn new(run_id: &str, source_sha256: Option<String>, records: Vec<Record>) -> Self {
        Self {
            run_id: run_id.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            source_sha256,
            record_count: records.len(),
            records,
        }
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create output directory {}", dir.display()))
}

/// Writes `artifact` as pretty JSON to `dir/filename`.
pub fn write_records(dir: &Path, filename: &str, artifact: &RecordArtifact) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(filename);
    let json = serde_json::to_string_pretty(artifact).context("Failed to serialize record artifact")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Data saved successfully: {} ({} records).", path.display(), artifact.record_count);
    Ok(path)
}

/// File name used for a report at `classification`.
pub fn report_filename(classification: Classification) -> String {
    format!("report_{}.txt", classification)
}

/// Renders a report body under a classification banner.
pub fn render_report(content: &str, classification: Classification) -> String {
    let banner = format!("{} REPORT", classification.as_str().to_uppercase());
    let rule = "=".repeat(banner.chars().count());
    format!(
        "{banner}\n{rule}\nClassification: {classification}\nGenerated: {generated}\n\n{content}\n",
        generated = Utc::now().to_rfc3339(),
    )
}

pub fn write_report(dir: &Path, filename: &str, content: &str, classification: Classification) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(filename);
    fs::write(&path, render_report(content, classification))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Report saved: {} ({}).", path.display(), classification);
    Ok(path)
}
