// File: docsieve-core/src/validators.rs
//! Schema validation for personal and organizational records.
//!
//! Validation collects every field problem before failing, so the diagnostic
//! attached to an error marker lists all of them at once.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::classification::Classification;
use crate::config::ValidationConfig;
use crate::records::{
    OrganizationRecord, PersonalRecord, Record, CLASSIFICATION, DEPARTMENT, EMAIL, FULL_NAME,
    NATIONAL_ID, ORG_NAME, PHONE_NUMBER, TAX_ID,
};

static EMAIL_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email domain pattern is a valid regex")
});

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A record failed its schema. Carries every issue found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} validation error(s) for {}: {}", .issues.len(), .schema, join_issues(.issues))]
pub struct ValidationError {
    pub schema: &'static str,
    pub issues: Vec<FieldIssue>,
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Strips every non-digit character from a phone number.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalizes `raw` and checks it has at least `min_digits` digits.
pub fn validate_phone(raw: &str, min_digits: usize) -> Result<String, String> {
    let digits = normalize_phone(raw);
    if digits.len() < min_digits {
        return Err(format!(
            "Invalid phone number format: expected at least {} digits, found {}",
            min_digits,
            digits.len()
        ));
    }
    Ok(digits)
}

/// Checks an address has exactly one `@`, a non-empty local part without
/// whitespace, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    EMAIL_DOMAIN.is_match(domain)
}

/// Accumulates field issues while reading a loosely-typed record.
struct FieldReader<'a> {
    record: &'a Record,
    issues: Vec<FieldIssue>,
}

impl<'a> FieldReader<'a> {
    fn new(record: &'a Record) -> Self {
        Self { record, issues: Vec::new() }
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue { field: field.to_string(), message: message.into() });
    }

    fn required_str(&mut self, field: &str) -> Option<String> {
        match self.record.get(field) {
            None => {
                self.push(field, "field required");
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(field, "expected a string");
                None
            }
        }
    }

    fn optional_str(&mut self, field: &str) -> Option<String> {
        match self.record.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(field, "expected a string or null");
                None
            }
        }
    }

    fn classification(&mut self, default: Classification) -> Option<Classification> {
        match self.record.get(CLASSIFICATION) {
            None => Some(default),
            Some(Value::String(token)) => match token.parse::<Classification>() {
                Ok(c) => Some(c),
                Err(e) => {
                    self.push(CLASSIFICATION, e.to_string());
                    None
                }
            },
            Some(_) => {
                self.push(CLASSIFICATION, "expected one of: public, internal, confidential, restricted");
                None
            }
        }
    }

    fn finish<T>(self, schema: &'static str, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(v) if self.issues.is_empty() => Ok(v),
            _ => Err(ValidationError { schema, issues: self.issues }),
        }
    }
}

/// Validates a personal record, normalizing its phone number.
pub fn validate_personal(record: &Record, settings: &ValidationConfig) -> Result<PersonalRecord, ValidationError> {
    let mut reader = FieldReader::new(record);

    let full_name = reader.required_str(FULL_NAME);

    let email = reader.required_str(EMAIL).and_then(|email| {
        if is_valid_email(&email) {
            Some(email)
        } else {
            reader.push(EMAIL, "value is not a valid email address");
            None
        }
    });

    let phone_number = reader.required_str(PHONE_NUMBER).and_then(|raw| {
        match validate_phone(&raw, settings.min_phone_digits()) {
            Ok(digits) => Some(digits),
            Err(message) => {
                reader.push(PHONE_NUMBER, message);
                None
            }
        }
    });

    let national_id = reader.optional_str(NATIONAL_ID);
    let classification = reader.classification(PersonalRecord::default_classification());

    let value = match (full_name, email, phone_number, classification) {
        (Some(full_name), Some(email), Some(phone_number), Some(classification)) => Some(PersonalRecord {
            full_name,
            email,
            phone_number,
            national_id,
            classification,
        }),
        _ => None,
    };
    reader.finish("PersonalRecord", value)
}

/// Validates an organizational record.
pub fn validate_organization(record: &Record) -> Result<OrganizationRecord, ValidationError> {
    let mut reader = FieldReader::new(record);

    let org_name = reader.required_str(ORG_NAME);
    let tax_id = reader.optional_str(TAX_ID);
    let department = reader.required_str(DEPARTMENT);
    let classification = reader.classification(OrganizationRecord::default_classification());

    let value = match (org_name, department, classification) {
        (Some(org_name), Some(department), Some(classification)) => Some(OrganizationRecord {
            org_name,
            tax_id,
            department,
            classification,
        }),
        _ => None,
    };
    reader.finish("OrganizationRecord", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().expect("fixture must be an object")
    }

    #[test]
    fn phone_is_normalized_before_length_check() {
        assert_eq!(normalize_phone("081-234-5678"), "0812345678");
        assert_eq!(validate_phone("(02) 123 4567", 9).unwrap(), "021234567");
        assert!(validate_phone("12-34-56", 9).is_err());
    }

    #[test]
    fn email_needs_exactly_one_at() {
        assert!(is_valid_email("ab@x.com"));
        assert!(is_valid_email("jane.d@company.com"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ab@"));
        assert!(!is_valid_email("ab@localhost"));
        assert!(!is_valid_email("a b@x.com"));
    }

    #[test]
    fn valid_personal_record_defaults_to_confidential() {
        let rec = record(json!({"full_name": "A", "email": "ab@x.com", "phone_number": "081-234-5678"}));
        let p = validate_personal(&rec, &ValidationConfig::default()).unwrap();
        assert_eq!(p.phone_number, "0812345678");
        assert_eq!(p.classification, Classification::Confidential);
        assert_eq!(p.national_id, None);
    }

    #[test]
    fn personal_errors_are_all_reported() {
        let rec = record(json!({"email": "broken", "phone_number": "123"}));
        let err = validate_personal(&rec, &ValidationConfig::default()).unwrap_err();
        let fields: Vec<&str> = err.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["full_name", "email", "phone_number"]);
        assert!(err.to_string().starts_with("3 validation error(s) for PersonalRecord"));
    }

    #[test]
    fn non_string_phone_is_rejected() {
        let rec = record(json!({"full_name": "A", "email": "ab@x.com", "phone_number": 812345678}));
        let err = validate_personal(&rec, &ValidationConfig::default()).unwrap_err();
        assert_eq!(err.issues[0].field, "phone_number");
    }

    #[test]
    fn organization_classification_is_case_insensitive() {
        let rec = record(json!({"org_name": "Tech Corp", "department": "Sales", "classification": "PUBLIC"}));
        let o = validate_organization(&rec).unwrap();
        assert_eq!(o.classification, Classification::Public);
    }

    #[test]
    fn organization_without_department_fails() {
        let rec = record(json!({"org_name": "Tech Corp"}));
        let err = validate_organization(&rec).unwrap_err();
        assert_eq!(err.schema, "OrganizationRecord");
        assert_eq!(err.issues[0].field, "department");
    }
}
