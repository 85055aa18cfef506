//! errors.rs - Custom error types for the docsieve-core library.
//!
//! Processing problems that the pipeline recovers from (a record failing its
//! schema) live in `validators::ValidationError` and never surface here. This
//! enum covers failures that end a run.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::jobs::JobKind;
use docsieve_keywords::KeywordError;

/// All run-level error types in the `docsieve-core` library.
///
/// `UnknownJobType` is a dispatch error and is kept apart from processing
/// errors so entry points can report it with its own exit status.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocsieveError {
    #[error("Unknown job type '{0}'. Expected one of: process_excel, process_pdf, extract_strict, extract_smart")]
    UnknownJobType(String),

    #[error("Job '{0}' requires an input file")]
    MissingInput(JobKind),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to build keyword scanner: {0}")]
    Keywords(#[from] KeywordError),

    #[error("Malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),
}
