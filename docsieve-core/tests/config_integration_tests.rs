// docsieve-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use docsieve_core::config::{self, SieveConfig, DEFAULT_MIN_ANCHOR_MATCHES};
use docsieve_core::DocsieveError;

#[test]
fn test_load_default_config() {
    let config = SieveConfig::load_default().unwrap();
    assert!(config.filter.anchors.iter().any(|a| a == "ลำดับ"));
    assert!(config.filter.blacklist.iter().any(|b| b == "คู่มือ"));
    assert_eq!(config.filter.min_anchor_matches(), DEFAULT_MIN_ANCHOR_MATCHES);
    assert_eq!(config.redaction.marker(), "REDACTED");
    assert_eq!(config.validation.min_phone_digits(), 9);
}

#[test]
fn test_load_from_file_and_merge() -> Result<()> {
    let yaml_content = r#"
filter:
  anchors:
    - "ticket"
    - "assignee"
  min_anchor_matches: 1
redaction:
  marker: "[HIDDEN]"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let user = SieveConfig::load_from_file(file.path())?;
    assert_eq!(user.filter.anchors, vec!["ticket", "assignee"]);
    assert!(user.filter.blacklist.is_empty());

    let merged = config::merge_config(SieveConfig::load_default()?, Some(user));
    assert_eq!(merged.filter.anchors, vec!["ticket", "assignee"]);
    assert!(!merged.filter.blacklist.is_empty(), "empty user list keeps the default blacklist");
    assert_eq!(merged.filter.min_anchor_matches(), 1);
    assert_eq!(merged.filter.max_paragraph_chars(), 500);
    assert_eq!(merged.redaction.marker(), "[HIDDEN]");
    assert_eq!(merged.redaction.phone_visible_chars(), 3);
    Ok(())
}

#[test]
fn test_merge_without_user_config_is_identity() -> Result<()> {
    let default = SieveConfig::load_default()?;
    assert_eq!(config::merge_config(default.clone(), None), default);
    Ok(())
}

#[test]
fn test_invalid_thresholds_are_rejected() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"filter:\n  min_anchor_matches: 0\nredaction:\n  marker: \"  \"\n")?;
    let err = SieveConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err.downcast_ref::<DocsieveError>(), Some(DocsieveError::Config(_))));
    let message = format!("{:#}", err);
    assert!(message.contains("min_anchor_matches"));
    assert!(message.contains("marker"));
    Ok(())
}

#[test]
fn test_malformed_yaml_is_an_error() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"filter: [unclosed")?;
    assert!(SieveConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_config_by_path() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"validation:\n  min_phone_digits: 10\n")?;
    let config = config::load_config_by_name(file.path().to_str().unwrap())?;
    assert_eq!(config.validation.min_phone_digits(), 10);
    assert!(!config.filter.anchors.is_empty());
    Ok(())
}

#[test]
fn test_missing_named_config_is_reported() {
    let err = config::load_config_by_name("definitely-not-a-docsieve-config").unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_candidate_paths_use_yaml_extension() {
    let paths = config::config_candidate_paths("team");
    assert!(!paths.is_empty());
    assert!(paths.iter().all(|p| p.ends_with("team.yaml")));
}
