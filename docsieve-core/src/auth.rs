// docsieve-core/src/auth.rs
//! Shared-secret gate in front of the request API.
//!
//! Both the configured secret and the presented key are run through
//! HMAC-SHA256 under a fixed salt and compared with `verify_slice`, which is
//! constant-time. Raw keys are never logged; failures show at most the first
//! three characters.

use hmac::{Hmac, Mac};
use log::{debug, warn};
use serde::Serialize;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const GATE_SALT: &[u8] = b"docsieve-api-key-gate-v1-salt";

/// Header name callers use for the key.
pub const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caller {
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Could not validate credentials")]
    Forbidden,
}

#[derive(Clone)]
pub struct ApiKeyGate {
    expected_digest: Option<Vec<u8>>,
}

impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate")
            .field("configured", &self.expected_digest.is_some())
            .finish()
    }
}

fn digest(key: &str) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(GATE_SALT).ok()?;
    mac.update(key.as_bytes());
    Some(mac)
}

/// `abc***` style hint of a presented key, for logs.
pub fn key_hint(presented: Option<&str>) -> String {
    match presented {
        Some(key) => format!("{}***", key.chars().take(3).collect::<String>()),
        None => "None".to_string(),
    }
}

impl ApiKeyGate {
    /// A gate accepting `expected`. A blank secret makes a gate that denies everyone.
    pub fn new(expected: &str) -> Self {
        let expected_digest = if expected.is_empty() {
            warn!("No API key configured; every request will be rejected.");
            None
        } else {
            digest(expected).map(|mac| mac.finalize().into_bytes().to_vec())
        };
        Self { expected_digest }
    }

    pub fn is_configured(&self) -> bool {
        self.expected_digest.is_some()
    }

    pub fn verify(&self, presented: Option<&str>) -> Result<Caller, AuthError> {
        let accepted = match (&self.expected_digest, presented) {
            (Some(expected), Some(key)) => digest(key).is_some_and(|mac| mac.verify_slice(expected).is_ok()),
            _ => false,
        };

        if accepted {
            debug!("API key accepted.");
            Ok(Caller { username: "admin".to_string(), role: "system_admin".to_string() })
        } else {
            warn!("auth_failed: provided_key={}", key_hint(presented));
            Err(AuthError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_key_is_accepted() {
        let gate = ApiKeyGate::new("dev-secret-key-123");
        let caller = gate.verify(Some("dev-secret-key-123")).unwrap();
        assert_eq!(caller.role, "system_admin");
    }

    #[test]
    fn wrong_or_missing_key_is_forbidden() {
        let gate = ApiKeyGate::new("dev-secret-key-123");
        assert_eq!(gate.verify(Some("dev-secret-key-124")), Err(AuthError::Forbidden));
        assert_eq!(gate.verify(Some("")), Err(AuthError::Forbidden));
        assert_eq!(gate.verify(None), Err(AuthError::Forbidden));
    }

    #[test]
    fn unconfigured_gate_denies_everyone() {
        let gate = ApiKeyGate::new("");
        assert!(!gate.is_configured());
        assert_eq!(gate.verify(Some("")), Err(AuthError::Forbidden));
    }

    #[test]
    fn hint_shows_three_characters() {
        assert_eq!(key_hint(Some("dev-secret")), "dev***");
        assert_eq!(key_hint(Some("ab")), "ab***");
        assert_eq!(key_hint(None), "None");
    }
}
