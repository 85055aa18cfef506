// docsieve-core/src/policy.rs
//! The record policy engine: classify by shape, validate, redact.
//!
//! Failure handling differs by shape. An invalid personal record becomes a
//! visible error marker in the output, an invalid organizational record
//! disappears. Unknown shapes pass through untouched.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::config::{RedactionConfig, SieveConfig, ValidationConfig};
use crate::redaction;
use crate::records::{classify_shape, Record, RecordShape, ValidatedRecord};
use crate::validators::{self, ValidationError};

pub const INVALID_PERSONAL_DATA: &str = "Invalid Personal Data";

/// What the engine emits for one input record.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputRecord {
    /// A validated and redacted personal or organizational record.
    Sanitized(Record),
    /// An unknown-shaped record, copied without redaction.
    Passthrough(Record),
    /// A personal record that failed validation.
    Invalid { raw: String },
}

impl OutputRecord {
    pub fn into_record(self) -> Record {
        match self {
            OutputRecord::Sanitized(r) | OutputRecord::Passthrough(r) => r,
            OutputRecord::Invalid { raw } => error_marker(&raw),
        }
    }
}

/// `{"error": "Invalid Personal Data", "raw": <diagnostic>}`
pub fn error_marker(raw: &str) -> Record {
    let mut marker = Record::new();
    marker.insert("error".to_string(), Value::String(INVALID_PERSONAL_DATA.to_string()));
    marker.insert("raw".to_string(), Value::String(raw.to_string()));
    marker
}

/// Counts gathered over one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub received: usize,
    pub personal: usize,
    pub organizational: usize,
    pub unknown: usize,
    pub invalid_personal: usize,
    pub dropped_organizational: usize,
}

impl BatchReport {
    pub fn emitted(&self) -> usize {
        self.received - self.dropped_organizational
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    redaction: RedactionConfig,
    validation: ValidationConfig,
}

impl PolicyEngine {
    pub fn new(config: &SieveConfig) -> Self {
        Self {
            redaction: config.redaction.clone(),
            validation: config.validation.clone(),
        }
    }

    pub fn classify_shape(&self, record: &Record) -> RecordShape {
        classify_shape(record)
    }

    /// Validates `record` against the schema for `shape`.
    pub fn validate(&self, record: &Record, shape: RecordShape) -> Result<ValidatedRecord, ValidationError> {
        match shape {
            RecordShape::Personal => {
                validators::validate_personal(record, &self.validation).map(ValidatedRecord::Personal)
            }
            RecordShape::Organizational => {
                validators::validate_organization(record).map(ValidatedRecord::Organization)
            }
            RecordShape::Unknown => Ok(ValidatedRecord::Unknown(record.clone())),
        }
    }

    pub fn redact(&self, record: &ValidatedRecord) -> ValidatedRecord {
        redaction::redact(record, &self.redaction)
    }

    /// Runs one record through classify, validate and redact.
    ///
    /// Returns `None` only for an organizational record that failed validation.
    pub fn process_record(&self, record: &Record) -> Option<OutputRecord> {
        let shape = self.classify_shape(record);
        if shape == RecordShape::Unknown {
            return Some(OutputRecord::Passthrough(record.clone()));
        }

        match self.validate(record, shape) {
            Ok(validated) => Some(OutputRecord::Sanitized(self.redact(&validated).to_record())),
            Err(e) if shape == RecordShape::Personal => {
                debug!("Personal record failed validation: {}", e);
                Some(OutputRecord::Invalid { raw: e.to_string() })
            }
            Err(e) => {
                debug!("Dropping organizational record that failed validation: {}", e);
                None
            }
        }
    }

    /// Processes a batch in order. One record in yields zero or one out.
    pub fn process_batch(&self, records: &[Record]) -> Vec<Record> {
        self.process_batch_with_report(records).0
    }

    pub fn process_batch_with_report(&self, records: &[Record]) -> (Vec<Record>, BatchReport) {
        let mut report = BatchReport { received: records.len(), ..BatchReport::default() };
        let mut out = Vec::with_capacity(records.len());

        for record in records {
            match self.classify_shape(record) {
                RecordShape::Personal => report.personal += 1,
                RecordShape::Organizational => report.organizational += 1,
                RecordShape::Unknown => report.unknown += 1,
            }

            match self.process_record(record) {
                Some(output) => {
                    if matches!(output, OutputRecord::Invalid { .. }) {
                        report.invalid_personal += 1;
                    }
                    out.push(output.into_record());
                }
                None => report.dropped_organizational += 1,
            }
        }

        info!(
            "Policy enforcement finished: {} in, {} out ({} personal, {} organizational, {} unknown, {} invalid personal, {} organizational dropped).",
            report.received,
            out.len(),
            report.personal,
            report.organizational,
            report.unknown,
            report.invalid_personal,
            report.dropped_organizational
        );
        (out, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().expect("fixture must be an object")
    }

    #[test]
    fn invalid_personal_becomes_marker() {
        let engine = PolicyEngine::default();
        let out = engine.process_record(&record(json!({"full_name": "A", "email": "x", "phone_number": "1"})));
        let Some(OutputRecord::Invalid { raw }) = out else {
            panic!("expected an error marker, got {:?}", out);
        };
        assert!(raw.contains("email"));
        assert!(raw.contains("phone_number"));
    }

    #[test]
    fn invalid_organization_is_dropped() {
        let engine = PolicyEngine::default();
        assert_eq!(engine.process_record(&record(json!({"org_name": "Tech Corp"}))), None);
    }

    #[test]
    fn report_counts_each_outcome() {
        let engine = PolicyEngine::default();
        let batch = vec![
            record(json!({"full_name": "Jane Doe", "email": "jane.d@company.com", "phone_number": "0998887777"})),
            record(json!({"full_name": "Bad", "email": "bad", "phone_number": "0998887777"})),
            record(json!({"org_name": "Tech Corp", "department": "Sales"})),
            record(json!({"org_name": "No Dept"})),
            record(json!({"Item": "Server Cost", "Value": 50000})),
        ];
        let (out, report) = engine.process_batch_with_report(&batch);
        assert_eq!(out.len(), 4);
        assert_eq!(report.received, 5);
        assert_eq!(report.personal, 2);
        assert_eq!(report.organizational, 2);
        assert_eq!(report.unknown, 1);
        assert_eq!(report.invalid_personal, 1);
        assert_eq!(report.dropped_organizational, 1);
        assert_eq!(report.emitted(), 4);
    }
}
