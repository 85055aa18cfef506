//! Configuration management for `docsieve-core`.
//!
//! This module defines the content filter keyword sets, the filter thresholds
//! and the redaction/validation tunables. It handles YAML (de)serialization,
//! loading the embedded defaults, merging user overrides and looking up named
//! configuration files.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::DocsieveError;

pub const DEFAULT_MIN_ANCHOR_MATCHES: usize = 2;
pub const DEFAULT_MAX_PARAGRAPH_CHARS: usize = 500;
pub const DEFAULT_NEWLINE_PROBE_CHARS: usize = 100;
pub const DEFAULT_MIN_TEXT_LINES: usize = 2;
pub const DEFAULT_PHONE_VISIBLE_CHARS: usize = 3;
pub const DEFAULT_EMAIL_VISIBLE_CHARS: usize = 2;
pub const DEFAULT_REDACTION_MARKER: &str = "REDACTED";
pub const DEFAULT_MIN_PHONE_DIGITS: usize = 9;

/// Keyword sets and structural thresholds for the content filter.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    pub anchors: Vec<String>,
    pub blacklist: Vec<String>,
    /// Distinct anchors a page needs under the strict filter (default: 2).
    pub min_anchor_matches: Option<usize>,
    /// Longest single-paragraph text still considered tabular (default: 500 chars).
    pub max_paragraph_chars: Option<usize>,
    /// How far into the text to look for a line break (default: 100 chars).
    pub newline_probe_chars: Option<usize>,
    /// Raw text must have strictly more non-blank lines than this (default: 2).
    pub min_text_lines: Option<usize>,
}

impl FilterConfig {
    pub fn min_anchor_matches(&self) -> usize {
        self.min_anchor_matches.unwrap_or(DEFAULT_MIN_ANCHOR_MATCHES)
    }

    pub fn max_paragraph_chars(&self) -> usize {
        self.max_paragraph_chars.unwrap_or(DEFAULT_MAX_PARAGRAPH_CHARS)
    }

    pub fn newline_probe_chars(&self) -> usize {
        self.newline_probe_chars.unwrap_or(DEFAULT_NEWLINE_PROBE_CHARS)
    }

    pub fn min_text_lines(&self) -> usize {
        self.min_text_lines.unwrap_or(DEFAULT_MIN_TEXT_LINES)
    }
}

/// Masking parameters applied to confidential and restricted personal records.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RedactionConfig {
    pub phone_visible_chars: Option<usize>,
    pub email_visible_chars: Option<usize>,
    /// Literal written in place of a national identifier.
    pub marker: Option<String>,
}

impl RedactionConfig {
    pub fn phone_visible_chars(&self) -> usize {
        self.phone_visible_chars.unwrap_or(DEFAULT_PHONE_VISIBLE_CHARS)
    }

    pub fn email_visible_chars(&self) -> usize {
        self.email_visible_chars.unwrap_or(DEFAULT_EMAIL_VISIBLE_CHARS)
    }

    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_REDACTION_MARKER)
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_phone_digits: Option<usize>,
}

impl ValidationConfig {
    pub fn min_phone_digits(&self) -> usize {
        self.min_phone_digits.unwrap_or(DEFAULT_MIN_PHONE_DIGITS)
    }
}

/// Top-level configuration structure for docsieve.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SieveConfig {
    pub filter: FilterConfig,
    pub redaction: RedactionConfig,
    pub validation: ValidationConfig,
}

impl SieveConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SieveConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded config from {} ({} anchors, {} blacklist phrases).",
            path.display(),
            config.filter.anchors.len(),
            config.filter.blacklist.len()
        );
        Ok(config)
    }

    /// Loads the built-in configuration embedded in the binary.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_policy.yaml");
        let config: SieveConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default configuration")?;
        debug!(
            "Loaded default config with {} anchors and {} blacklist phrases.",
            config.filter.anchors.len(),
            config.filter.blacklist.len()
        );
        Ok(config)
    }

    /// Checks thresholds for values that would make the filter meaningless.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.filter.min_anchor_matches == Some(0) {
            errors.push("filter.min_anchor_matches must be at least 1.".to_string());
        }
        if self.filter.newline_probe_chars == Some(0) {
            errors.push("filter.newline_probe_chars must be at least 1.".to_string());
        }
        if self.validation.min_phone_digits == Some(0) {
            errors.push("validation.min_phone_digits must be at least 1.".to_string());
        }
        if self.redaction.marker.as_deref().is_some_and(|m| m.trim().is_empty()) {
            errors.push("redaction.marker cannot be blank.".to_string());
        }

        for keyword in self.filter.anchors.iter().chain(self.filter.blacklist.iter()) {
            if keyword.trim().is_empty() {
                warn!("Ignoring blank keyword in filter configuration.");
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DocsieveError::Config(errors.join("\n")).into())
        }
    }
}

/// Merges a user configuration over the defaults.
///
/// Keyword lists replace the defaults only when the user list is non-empty;
/// scalar settings replace the defaults when present.
pub fn merge_config(default_config: SieveConfig, user_config: Option<SieveConfig>) -> SieveConfig {
    let Some(user) = user_config else {
        debug!("No user config provided; using defaults.");
        return default_config;
    };

    let mut merged = default_config;

    if !user.filter.anchors.is_empty() {
        debug!("Overriding anchors with {} user keywords.", user.filter.anchors.len());
        merged.filter.anchors = user.filter.anchors;
    }
    if !user.filter.blacklist.is_empty() {
        debug!("Overriding blacklist with {} user phrases.", user.filter.blacklist.len());
        merged.filter.blacklist = user.filter.blacklist;
    }

    override_if_set(&mut merged.filter.min_anchor_matches, user.filter.min_anchor_matches);
    override_if_set(&mut merged.filter.max_paragraph_chars, user.filter.max_paragraph_chars);
    override_if_set(&mut merged.filter.newline_probe_chars, user.filter.newline_probe_chars);
    override_if_set(&mut merged.filter.min_text_lines, user.filter.min_text_lines);
    override_if_set(&mut merged.redaction.phone_visible_chars, user.redaction.phone_visible_chars);
    override_if_set(&mut merged.redaction.email_visible_chars, user.redaction.email_visible_chars);
    override_if_set(&mut merged.redaction.marker, user.redaction.marker);
    override_if_set(&mut merged.validation.min_phone_digits, user.validation.min_phone_digits);

    merged
}

fn override_if_set<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

pub fn config_candidate_paths(name: &str) -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".docsieve")),
        dirs::config_dir().map(|p| p.join("docsieve")),
        Some(PathBuf::from("/etc/docsieve")),
        Some(PathBuf::from("./config")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(format!("{}.yaml", name)))
        .collect()
}

/// Resolves `name_or_path` to a file (directly, or by name in the candidate
/// directories), loads it and merges it over the defaults.
pub fn load_config_by_name(name_or_path: &str) -> Result<SieveConfig> {
    debug!("Attempting to load config from: '{}'", name_or_path);

    let path = Path::new(name_or_path);
    let path_to_load = if path.is_file() {
        Some(path.to_path_buf())
    } else {
        config_candidate_paths(name_or_path).into_iter().find(|p| p.is_file())
    }
    .with_context(|| format!("Config '{}' not found. It is not a file, and was not found in expected locations.", name_or_path))?;

    let user = SieveConfig::load_from_file(&path_to_load)?;
    Ok(merge_config(SieveConfig::load_default()?, Some(user)))
}
