// docsieve-core/src/lib.rs
//! # Docsieve Core Library
//!
//! `docsieve-core` decides which parts of an extracted document are real work
//! content, and what may leave the system for each record that survives.
//!
//! Two stages run in sequence:
//!
//! 1. A **content filter** ([`ContentFilter`]) walks the pages of a [`Document`]
//!    and keeps tables (and, for the permissive strategy, table-like raw text)
//!    while discarding manuals, instructions and prose. A document yielding
//!    nothing is reported as [`ExtractOutcome::Empty`].
//! 2. The **policy engine** ([`PolicyEngine`]) classifies every record by
//!    shape, validates it against the personal or organizational schema, and
//!    masks sensitive fields according to its [`Classification`].
//!
//! ## Modules
//!
//! * `classification`: The four-level sensitivity lattice and `authorize_access`.
//! * `config`: Filter keyword sets, thresholds and redaction tunables, loaded from YAML.
//! * `document`: Pages and tables as handed over by a document reader.
//! * `filters`: The `ContentFilter` trait with the strict and permissive strategies.
//! * `records`: Record shapes and the typed personal/organizational schemas.
//! * `validators`: Schema validation with per-field diagnostics.
//! * `redaction`: Masking helpers and the redaction step.
//! * `policy`: The `PolicyEngine` tying classify, validate and redact together.
//! * `auth`: The shared-secret gate for the request API.
//! * `api`: In-process request handling with HTTP-style responses.
//! * `jobs`: One-shot batch jobs driven by an explicit `JobConfig`.
//! * `artifacts`: JSON record sets and classified text reports.
//! * `errors`: Run-level error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use docsieve_core::{PolicyEngine, SieveConfig};
//! use serde_json::json;
//!
//! let config = SieveConfig::load_default().unwrap();
//! let engine = PolicyEngine::new(&config);
//!
//! let record = json!({
//!     "full_name": "A",
//!     "email": "ab@x.com",
//!     "phone_number": "081-234-5678"
//! });
//! let out = engine.process_batch(&[record.as_object().unwrap().clone()]);
//! assert_eq!(out[0]["phone_number"], "081*******");
//! ```
//!
//! ## Error Handling
//!
//! A record failing its schema is not an error at this level: personal records
//! become an inline error marker and organizational records are dropped.
//! Run-level failures use [`DocsieveError`] and `anyhow` context chains.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod api;
pub mod artifacts;
pub mod auth;
pub mod classification;
pub mod config;
pub mod document;
pub mod errors;
pub mod filters;
pub mod jobs;
pub mod policy;
pub mod records;
pub mod redaction;
pub mod validators;

/// Re-exports the sensitivity lattice.
pub use classification::{authorize_access, Classification, ParseClassificationError};

/// Re-exports configuration types and loaders.
pub use config::{
    config_candidate_paths,
    load_config_by_name,
    merge_config,
    FilterConfig,
    RedactionConfig,
    SieveConfig,
    ValidationConfig,
};

pub use document::{ContentUnit, Document, Page, Table};

pub use errors::DocsieveError;

/// Re-exports the filter trait, its strategies and their outcome.
pub use filters::{build_filter, ContentFilter, ExtractOutcome, FilterMode, Heuristics, PermissiveFilter, StrictFilter};

pub use records::{classify_shape, OrganizationRecord, PersonalRecord, Record, RecordShape, ValidatedRecord};

pub use validators::{validate_organization, validate_personal, FieldIssue, ValidationError};

pub use redaction::{mask_email, mask_string, redact_sensitive};

pub use policy::{error_marker, BatchReport, OutputRecord, PolicyEngine, INVALID_PERSONAL_DATA};

pub use auth::{ApiKeyGate, AuthError, Caller, API_KEY_HEADER};

pub use api::{ApiRequest, ApiResponse, RequestHandler, Route};

/// Re-exports the headless job runner.
pub use jobs::{dispose_source, run_job, JobConfig, JobKind, JobOutcome, RetentionPolicy};

pub use artifacts::RecordArtifact;
