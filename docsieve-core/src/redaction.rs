// docsieve-core/src/redaction.rs
//! Masking primitives and the classification-driven redaction transform.
//!
//! Every function here is pure: inputs are borrowed and a fresh value is
//! returned. Debug logging of sensitive values goes through [`loggable`],
//! which hides the value unless `DOCSIEVE_ALLOW_DEBUG_PII=true`.

use log::debug;
use once_cell::sync::Lazy;

use crate::config::RedactionConfig;
use crate::records::{OrganizationRecord, PersonalRecord, ValidatedRecord};

static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("DOCSIEVE_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// Keeps the first `visible` characters of `text` and replaces the rest with `*`.
///
/// Strings no longer than `visible` come back unchanged. Works on characters,
/// not bytes.
pub fn mask_string(text: &str, visible: usize) -> String {
    let len = text.chars().count();
    if len <= visible {
        return text.to_string();
    }
    let mut masked: String = text.chars().take(visible).collect();
    masked.extend(std::iter::repeat('*').take(len - visible));
    masked
}

/// Masks the local part of an address, leaving the domain readable.
pub fn mask_email(email: &str, visible: usize) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", mask_string(local, visible), domain),
        None => email.to_string(),
    }
}

/// Redacts a validated personal record according to its classification.
///
/// Confidential and restricted records get a masked phone and email and lose
/// their national identifier to the redaction marker. Lower tiers come back as
/// an equal copy.
pub fn redact_personal(person: &PersonalRecord, settings: &RedactionConfig) -> PersonalRecord {
    let mut out = person.clone();
    if !person.classification.requires_masking() {
        return out;
    }

    out.phone_number = mask_string(&person.phone_number, settings.phone_visible_chars());
    out.email = mask_email(&person.email, settings.email_visible_chars());
    if person.national_id.is_some() {
        out.national_id = Some(settings.marker().to_string());
    }

    debug!(
        "Redacted personal record at '{}': email '{}' -> '{}'",
        person.classification,
        loggable(&person.email),
        out.email
    );
    out
}

/// Organizational records carry no maskable fields; they are copied as-is.
pub fn redact_organization(org: &OrganizationRecord) -> OrganizationRecord {
    org.clone()
}

/// Applies the redaction transform for whichever shape `record` is.
pub fn redact(record: &ValidatedRecord, settings: &RedactionConfig) -> ValidatedRecord {
    match record {
        ValidatedRecord::Personal(p) => ValidatedRecord::Personal(redact_personal(p, settings)),
        ValidatedRecord::Organization(o) => ValidatedRecord::Organization(redact_organization(o)),
        ValidatedRecord::Unknown(r) => ValidatedRecord::Unknown(r.clone()),
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

/// The form of a sensitive value that may be written to debug logs.
pub fn loggable(sensitive: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive.to_string()
    } else {
        redact_sensitive(sensitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Classification;

    fn person(classification: Classification, national_id: Option<&str>) -> PersonalRecord {
        PersonalRecord {
            full_name: "Somchai Jai-dee".into(),
            email: "somchai@example.com".into(),
            phone_number: "0812345678".into(),
            national_id: national_id.map(str::to_string),
            classification,
        }
    }

    #[test]
    fn mask_keeps_visible_prefix() {
        assert_eq!(mask_string("123456", 2), "12****");
        assert_eq!(mask_string("0812345678", 3), "081*******");
    }

    #[test]
    fn mask_is_identity_below_threshold() {
        for s in ["", "a", "ab", "สวัสดี"] {
            for n in 0..8 {
                if s.chars().count() <= n {
                    assert_eq!(mask_string(s, n), s);
                }
            }
        }
        assert_eq!(mask_string("", 0), "");
    }

    #[test]
    fn mask_counts_characters() {
        assert_eq!(mask_string("สมชาย", 2), "สม***");
    }

    #[test]
    fn email_domain_stays_visible() {
        assert_eq!(mask_email("somchai@example.com", 2), "so*****@example.com");
        assert_eq!(mask_email("ab@x.com", 2), "ab@x.com");
    }

    #[test]
    fn confidential_and_restricted_are_masked() {
        let settings = RedactionConfig::default();
        for c in [Classification::Confidential, Classification::Restricted] {
            let out = redact_personal(&person(c, Some("1103700123456")), &settings);
            assert_eq!(out.phone_number, "081*******");
            assert_eq!(out.email, "so*****@example.com");
            assert_eq!(out.national_id.as_deref(), Some("REDACTED"));
            assert_eq!(out.full_name, "Somchai Jai-dee");
        }
    }

    #[test]
    fn lower_tiers_are_an_equal_copy() {
        let settings = RedactionConfig::default();
        for c in [Classification::Public, Classification::Internal] {
            let input = person(c, Some("1103700123456"));
            assert_eq!(redact_personal(&input, &settings), input);
        }
    }

    #[test]
    fn sensitive_values_are_hidden_in_logs_by_default() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]");
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]");
    }
}
