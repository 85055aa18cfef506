// docsieve-core/tests/policy_tests.rs
use serde_json::{json, Value};
use test_log::test;

use docsieve_core::{PolicyEngine, Record, SieveConfig, INVALID_PERSONAL_DATA};

fn record(value: Value) -> Record {
    value.as_object().cloned().expect("fixture must be an object")
}

fn engine() -> PolicyEngine {
    PolicyEngine::new(&SieveConfig::load_default().unwrap())
}

#[test]
fn test_confidential_phone_is_masked_from_normalized_digits() {
    let out = engine().process_batch(&[record(json!({
        "full_name": "A",
        "email": "ab@x.com",
        "phone_number": "081-234-5678"
    }))]);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0]["phone_number"], "081*******");
    assert_eq!(out[0]["email"], "ab@x.com");
    assert_eq!(out[0]["classification"], "confidential");
    assert!(!out[0].contains_key("national_id"));
}

#[test]
fn test_restricted_national_id_is_replaced() {
    let out = engine().process_batch(&[record(json!({
        "full_name": "Jane Doe",
        "email": "jane.d@company.com",
        "phone_number": "0998887777",
        "national_id": "1234567890123",
        "classification": "RESTRICTED"
    }))]);

    assert_eq!(out[0]["national_id"], "REDACTED");
    assert_eq!(out[0]["email"], "ja****@company.com");
    assert_eq!(out[0]["classification"], "restricted");
}

#[test]
fn test_internal_personal_record_is_not_masked() {
    let input = record(json!({
        "full_name": "John Smith",
        "email": "john@company.com",
        "phone_number": "0812345678",
        "national_id": "1100000000001",
        "classification": "internal"
    }));
    let out = engine().process_batch(&[input.clone()]);
    assert_eq!(out[0], input);
}

#[test]
fn test_unknown_shape_passes_through_unchanged() {
    let input = record(json!({"Item": "Server Cost", "Value": 50000}));
    let out = engine().process_batch(&[input.clone()]);
    assert_eq!(out, vec![input]);
}

#[test]
fn test_invalid_personal_record_becomes_error_marker() {
    let out = engine().process_batch(&[record(json!({
        "full_name": "Bad",
        "email": "not-an-email",
        "phone_number": "0812345678"
    }))]);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0]["error"], INVALID_PERSONAL_DATA);
    assert!(out[0]["raw"].as_str().unwrap().contains("email"));
}

#[test]
fn test_invalid_organization_is_dropped_and_order_is_kept() {
    let batch = vec![
        record(json!({"org_name": "Tech Corp", "department": "Sales"})),
        record(json!({"org_name": "No Department Ltd"})),
        record(json!({"Item": "Licence", "Value": 1})),
    ];
    let out = engine().process_batch(&batch);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0]["org_name"], "Tech Corp");
    assert_eq!(out[0]["classification"], "internal");
    assert_eq!(out[1], batch[2]);
}

#[test]
fn test_extra_keys_are_not_carried_into_sanitized_output() {
    let out = engine().process_batch(&[record(json!({
        "org_name": "Tech Corp",
        "department": "Sales",
        "notes": "internal only"
    }))]);
    let keys: Vec<&String> = out[0].keys().collect();
    assert_eq!(keys, vec!["org_name", "department", "classification"]);
}

#[test]
fn test_configured_visible_chars_are_honoured() {
    let mut config = SieveConfig::load_default().unwrap();
    config.redaction.phone_visible_chars = Some(4);
    let out = PolicyEngine::new(&config).process_batch(&[record(json!({
        "full_name": "A",
        "email": "ab@x.com",
        "phone_number": "0812345678"
    }))]);
    assert_eq!(out[0]["phone_number"], "0812******");
}
