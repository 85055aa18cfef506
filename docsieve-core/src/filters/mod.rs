// docsieve-core/src/filters/mod.rs
//! Content filter strategies.
//!
//! Each strategy is a separate file implementing the [`ContentFilter`] trait.
//! Callers choose one per job type; the strict and permissive policies are
//! never merged.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod heuristics;
pub mod permissive;
pub mod strict;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::SieveConfig;
use crate::document::Document;
use crate::records::Record;

pub use heuristics::Heuristics;
pub use permissive::PermissiveFilter;
pub use strict::StrictFilter;

/// Result of running a filter over a whole document.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractOutcome {
    Records(Vec<Record>),
    /// Nothing survived filtering. The source should be treated as junk.
    Empty,
}

impl ExtractOutcome {
    pub fn from_records(records: Vec<Record>) -> Self {
        if records.is_empty() {
            ExtractOutcome::Empty
        } else {
            ExtractOutcome::Records(records)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ExtractOutcome::Empty)
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            ExtractOutcome::Records(records) => records,
            ExtractOutcome::Empty => Vec::new(),
        }
    }
}

/// A pluggable policy deciding which pages of a document make it into the
/// extracted dataset.
pub trait ContentFilter: Send + Sync {
    fn mode(&self) -> FilterMode;

    /// Extracts row records from every page this filter accepts.
    fn extract(&self, document: &Document) -> ExtractOutcome;

    fn heuristics(&self) -> &Heuristics;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Quality-first: anchors and a detected table are both required.
    #[serde(alias = "quality")]
    Strict,
    /// Smart filter: tables, or raw text that passes the tabular heuristics.
    #[serde(alias = "smart")]
    Permissive,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Strict => f.write_str("strict"),
            FilterMode::Permissive => f.write_str("permissive"),
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "quality" => Ok(FilterMode::Strict),
            "permissive" | "smart" => Ok(FilterMode::Permissive),
            other => Err(format!("unknown filter mode '{}' (expected 'strict' or 'permissive')", other)),
        }
    }
}

/// Builds the filter for `mode` behind the `ContentFilter` trait.
pub fn build_filter(mode: FilterMode, config: &SieveConfig) -> Result<Box<dyn ContentFilter>> {
    let heuristics = Heuristics::from_config(&config.filter)?;
    let filter: Box<dyn ContentFilter> = match mode {
        FilterMode::Strict => Box::new(StrictFilter::new(heuristics)),
        FilterMode::Permissive => Box::new(PermissiveFilter::new(heuristics)),
    };
    Ok(filter)
}
