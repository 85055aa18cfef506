// docsieve-core/src/filters/permissive.rs
//! Smart-filter extraction: structural tables are always taken; pages without
//! one fall back to raw-text heuristics.
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde_json::Value;

use crate::document::{ContentUnit, Document};
use crate::filters::{ContentFilter, ExtractOutcome, FilterMode, Heuristics};
use crate::records::Record;

pub const PAGE_KEY: &str = "page";
pub const RAW_CONTENT_KEY: &str = "raw_content";

#[derive(Debug)]
pub struct PermissiveFilter {
    heuristics: Heuristics,
}

impl PermissiveFilter {
    pub fn new(heuristics: Heuristics) -> Self {
        Self { heuristics }
    }

    pub fn is_tabular_like(&self, text: &str) -> bool {
        self.heuristics.is_tabular_like(text)
    }

    /// The single raw-content record a table-less page may contribute.
    fn raw_record(&self, unit: &ContentUnit<'_>) -> Option<Record> {
        if !self.is_tabular_like(unit.text) {
            debug!("Page {}: text rejected by tabular heuristics.", unit.page_number);
            return None;
        }
        if !self.heuristics.has_enough_lines(unit.text) {
            debug!("Page {}: too few non-blank lines.", unit.page_number);
            return None;
        }

        let mut record = Record::new();
        record.insert(PAGE_KEY.to_string(), Value::from(unit.page_number));
        record.insert(RAW_CONTENT_KEY.to_string(), Value::String(unit.text.to_string()));
        Some(record)
    }
}

impl ContentFilter for PermissiveFilter {
    fn mode(&self) -> FilterMode {
        FilterMode::Permissive
    }

    fn extract(&self, document: &Document) -> ExtractOutcome {
        info!("Smart-filter extraction started for {}.", document.source_label());
        let mut records: Vec<Record> = Vec::new();

        for unit in document.units() {
            if unit.has_tables() {
                for table in unit.tables {
                    records.extend(table.to_records());
                }
                continue;
            }

            match self.raw_record(&unit) {
                Some(record) => records.push(record),
                None => info!("Page {} contributed nothing.", unit.page_number),
            }
        }

        info!("Smart-filter extraction finished: {} record(s).", records.len());
        ExtractOutcome::from_records(records)
    }

    fn heuristics(&self) -> &Heuristics {
        &self.heuristics
    }
}
