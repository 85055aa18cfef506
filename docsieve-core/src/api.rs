// docsieve-core/src/api.rs
//! In-process request API.
//!
//! Requests carry the caller's key and a route. The handler answers every
//! request with an HTTP-style status and a JSON body; it never panics and
//! never returns `Err` to the caller.

use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::artifacts::{self, RecordArtifact};
use crate::auth::{ApiKeyGate, AuthError};
use crate::classification::Classification;
use crate::config::SieveConfig;
use crate::document::Document;
use crate::filters::{build_filter, ExtractOutcome, FilterMode};
use crate::jobs::RECORDS_OUTPUT_FILE;
use crate::policy::PolicyEngine;
use crate::records::Record;

pub const SERVICE_NAME: &str = "data-processing-api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Health,
    ProcessRecords {
        records: Vec<Record>,
    },
    ProcessReport {
        content: String,
        /// Kept as a raw token so a bad value can be answered with 422.
        classification: String,
    },
    ExtractDocument {
        document: Document,
        #[serde(default)]
        mode: Option<FilterMode>,
    },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Health => "health",
            Route::ProcessRecords { .. } => "process_records",
            Route::ProcessReport { .. } => "process_report",
            Route::ExtractDocument { .. } => "extract_document",
        }
    }

    fn requires_key(&self) -> bool {
        !matches!(self, Route::Health)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn error(status: u16, detail: impl Into<String>) -> Self {
        Self { status, body: json!({ "detail": detail.into() }) }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct RequestHandler {
    gate: ApiKeyGate,
    config: SieveConfig,
    engine: PolicyEngine,
    output_dir: PathBuf,
}

impl RequestHandler {
    pub fn new(gate: ApiKeyGate, config: SieveConfig, output_dir: impl Into<PathBuf>) -> Self {
        let engine = PolicyEngine::new(&config);
        Self { gate, config, engine, output_dir: output_dir.into() }
    }

    pub fn handle(&self, request: &ApiRequest) -> ApiResponse {
        info!("request: route={}", request.route.name());

        if request.route.requires_key() {
            match self.gate.verify(request.api_key.as_deref()) {
                Ok(caller) => debug!("Authorized {} ({}).", caller.username, caller.role),
                Err(e @ AuthError::Forbidden) => return ApiResponse::error(403, e.to_string()),
            }
        }

        match &request.route {
            Route::Health => ApiResponse::ok(json!({ "status": "healthy", "service": SERVICE_NAME })),
            Route::ProcessRecords { records } => self.process_records(records),
            Route::ProcessReport { content, classification } => self.process_report(content, classification),
            Route::ExtractDocument { document, mode } => self.extract_document(document, mode.unwrap_or(FilterMode::Strict)),
        }
    }

    fn process_records(&self, records: &[Record]) -> ApiResponse {
        let clean = self.engine.process_batch(records);
        let count = clean.len();
        let artifact = RecordArtifact::new(&uuid::Uuid::new_v4().to_string(), None, clean);
        match artifacts::write_records(&self.output_dir, RECORDS_OUTPUT_FILE, &artifact) {
            Ok(path) => ApiResponse::ok(json!({
                "status": "success",
                "output_file": path.display().to_string(),
                "records": count,
            })),
            Err(e) => {
                error!("Failed to write record artifact: {:#}", e);
                ApiResponse::error(500, format!("{:#}", e))
            }
        }
    }

    fn process_report(&self, content: &str, classification: &str) -> ApiResponse {
        let classification: Classification = match classification.parse() {
            Ok(c) => c,
            Err(e) => return ApiResponse::error(422, format!("{}", e)),
        };
        let filename = artifacts::report_filename(classification);
        match artifacts::write_report(&self.output_dir, &filename, content, classification) {
            Ok(path) => ApiResponse::ok(json!({ "status": "success", "file_path": path.display().to_string() })),
            Err(e) => {
                error!("Failed to write report: {:#}", e);
                ApiResponse::error(500, format!("{:#}", e))
            }
        }
    }

    fn extract_document(&self, document: &Document, mode: FilterMode) -> ApiResponse {
        let filter = match build_filter(mode, &self.config) {
            Ok(filter) => filter,
            Err(e) => return ApiResponse::error(500, format!("{:#}", e)),
        };
        match filter.extract(document) {
            ExtractOutcome::Empty => ApiResponse::ok(json!({ "status": "empty" })),
            ExtractOutcome::Records(records) => {
                let (clean, report) = self.engine.process_batch_with_report(&records);
                ApiResponse::ok(json!({
                    "status": "success",
                    "mode": filter.mode().to_string(),
                    "report": report,
                    "records": clean,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> RequestHandler {
        let dir = std::env::temp_dir().join("docsieve-api-unit");
        RequestHandler::new(ApiKeyGate::new("secret"), SieveConfig::default(), dir)
    }

    #[test]
    fn requests_deserialize_from_tagged_json() {
        let req: ApiRequest = serde_json::from_value(json!({
            "api_key": "secret",
            "route": "process_report",
            "content": "hello",
            "classification": "internal"
        }))
        .unwrap();
        assert_eq!(req.route.name(), "process_report");
        assert_eq!(req.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn health_needs_no_key() {
        let resp = handler().handle(&ApiRequest { api_key: None, route: Route::Health });
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["status"], "healthy");
    }

    #[test]
    fn bad_classification_is_unprocessable() {
        let resp = handler().handle(&ApiRequest {
            api_key: Some("secret".into()),
            route: Route::ProcessReport { content: "x".into(), classification: "top-secret".into() },
        });
        assert_eq!(resp.status, 422);
    }
}
