// docsieve-core/src/classification.rs
//! Data sensitivity tiers.
//!
//! The same four tiers tag records and describe requester clearance. Ordering
//! always goes through [`Classification::rank`], never through the string
//! tokens, so `"confidential" < "internal"` lexically has no bearing here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// May be disclosed.
    Public,
    /// For use inside the organization.
    Internal,
    /// Personal data and trade secrets.
    Confidential,
    /// Must never be disclosed (credentials, keys).
    Restricted,
}

/// Raised when a boundary token is not one of the four known tiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid classification; expected one of: public, internal, confidential, restricted")]
pub struct ParseClassificationError(pub String);

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::Public,
        Classification::Internal,
        Classification::Confidential,
        Classification::Restricted,
    ];

    /// Ordinal rank, 1 (public) through 4 (restricted).
    pub fn rank(self) -> u8 {
        match self {
            Classification::Public => 1,
            Classification::Internal => 2,
            Classification::Confidential => 3,
            Classification::Restricted => 4,
        }
    }

    /// Canonical lowercase token.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Public => "public",
            Classification::Internal => "internal",
            Classification::Confidential => "confidential",
            Classification::Restricted => "restricted",
        }
    }

    /// True for the tiers whose personal fields are masked on output.
    pub fn requires_masking(self) -> bool {
        self >= Classification::Confidential
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Classification::Public),
            "internal" => Ok(Classification::Internal),
            "confidential" => Ok(Classification::Confidential),
            "restricted" => Ok(Classification::Restricted),
            _ => Err(ParseClassificationError(s.to_string())),
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Whether a requester cleared at `requester` may see data tagged `target`.
///
/// This only answers the question; callers decide whether to block, redact
/// or log on a `false`.
pub fn authorize_access(target: Classification, requester: Classification) -> bool {
    requester.rank() >= target.rank()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_follows_rank_not_spelling() {
        assert!(Classification::Public < Classification::Internal);
        assert!(Classification::Internal < Classification::Confidential);
        assert!(Classification::Confidential < Classification::Restricted);
        // Lexically "confidential" sorts before "internal".
        assert!("confidential" < "internal");
        assert!(Classification::Confidential > Classification::Internal);
    }

    #[test]
    fn parses_case_insensitively_and_renders_lowercase() {
        let c: Classification = " Confidential ".parse().unwrap();
        assert_eq!(c, Classification::Confidential);
        assert_eq!(c.to_string(), "confidential");
        assert_eq!("RESTRICTED".parse::<Classification>().unwrap().as_str(), "restricted");
        assert!("secret".parse::<Classification>().is_err());
    }

    #[test]
    fn serde_uses_the_canonical_tokens() {
        let c: Classification = serde_json::from_str("\"INTERNAL\"").unwrap();
        assert_eq!(c, Classification::Internal);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"internal\"");
        assert!(serde_json::from_str::<Classification>("\"top-secret\"").is_err());
    }

    #[test]
    fn access_is_granted_at_or_below_clearance() {
        assert!(authorize_access(Classification::Internal, Classification::Internal));
        assert!(authorize_access(Classification::Public, Classification::Restricted));
        assert!(!authorize_access(Classification::Internal, Classification::Public));
    }

    #[test]
    fn access_is_monotonic_in_requester_rank() {
        for target in Classification::ALL {
            for (i, requester) in Classification::ALL.iter().enumerate() {
                if authorize_access(target, *requester) {
                    for higher in &Classification::ALL[i..] {
                        assert!(authorize_access(target, *higher));
                    }
                }
            }
        }
    }

    #[test]
    fn only_upper_tiers_are_masked() {
        assert!(!Classification::Public.requires_masking());
        assert!(!Classification::Internal.requires_masking());
        assert!(Classification::Confidential.requires_masking());
        assert!(Classification::Restricted.requires_masking());
    }
}
