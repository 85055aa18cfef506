// docsieve-core/src/records.rs
//! Loosely-typed input records and the typed schemas they can be validated into.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classification::Classification;

/// An insertion-ordered mapping of column/field name to value.
pub type Record = Map<String, Value>;

pub const FULL_NAME: &str = "full_name";
pub const EMAIL: &str = "email";
pub const PHONE_NUMBER: &str = "phone_number";
pub const NATIONAL_ID: &str = "national_id";
pub const CLASSIFICATION: &str = "classification";
pub const ORG_NAME: &str = "org_name";
pub const TAX_ID: &str = "tax_id";
pub const DEPARTMENT: &str = "department";

/// The semantic type of a record, inferred from which keys it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordShape {
    Personal,
    Organizational,
    Unknown,
}

/// Infers a record's shape from key presence, in fixed priority order.
///
/// Personal wins over Organizational, so a record carrying both `email` and
/// `org_name` is treated as personal data.
pub fn classify_shape(record: &Record) -> RecordShape {
    if record.contains_key(EMAIL) || record.contains_key(FULL_NAME) {
        RecordShape::Personal
    } else if record.contains_key(ORG_NAME) {
        RecordShape::Organizational
    } else {
        RecordShape::Unknown
    }
}

/// A validated personal record. `phone_number` holds digits only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    #[serde(default = "PersonalRecord::default_classification")]
    pub classification: Classification,
}

impl PersonalRecord {
    pub fn default_classification() -> Classification {
        Classification::Confidential
    }

    pub fn to_record(&self) -> Record {
        let mut out = Record::new();
        out.insert(FULL_NAME.to_string(), Value::String(self.full_name.clone()));
        out.insert(EMAIL.to_string(), Value::String(self.email.clone()));
        out.insert(PHONE_NUMBER.to_string(), Value::String(self.phone_number.clone()));
        if let Some(national_id) = &self.national_id {
            out.insert(NATIONAL_ID.to_string(), Value::String(national_id.clone()));
        }
        out.insert(CLASSIFICATION.to_string(), Value::String(self.classification.to_string()));
        out
    }
}

/// A validated organizational record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    pub org_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    pub department: String,
    #[serde(default = "OrganizationRecord::default_classification")]
    pub classification: Classification,
}

impl OrganizationRecord {
    pub fn default_classification() -> Classification {
        Classification::Internal
    }

    pub fn to_record(&self) -> Record {
        let mut out = Record::new();
        out.insert(ORG_NAME.to_string(), Value::String(self.org_name.clone()));
        if let Some(tax_id) = &self.tax_id {
            out.insert(TAX_ID.to_string(), Value::String(tax_id.clone()));
        }
        out.insert(DEPARTMENT.to_string(), Value::String(self.department.clone()));
        out.insert(CLASSIFICATION.to_string(), Value::String(self.classification.to_string()));
        out
    }
}

/// A record that has been through shape-specific validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedRecord {
    Personal(PersonalRecord),
    Organization(OrganizationRecord),
    /// Unknown shapes carry no schema and are kept verbatim.
    Unknown(Record),
}

impl ValidatedRecord {
    pub fn shape(&self) -> RecordShape {
        match self {
            ValidatedRecord::Personal(_) => RecordShape::Personal,
            ValidatedRecord::Organization(_) => RecordShape::Organizational,
            ValidatedRecord::Unknown(_) => RecordShape::Unknown,
        }
    }

    pub fn to_record(&self) -> Record {
        match self {
            ValidatedRecord::Personal(p) => p.to_record(),
            ValidatedRecord::Organization(o) => o.to_record(),
            ValidatedRecord::Unknown(r) => r.clone(),
        }
    }
}
