// docsieve-core/src/filters/strict.rs
//! Quality-first extraction: only pages that look like real work sheets
//! (anchor keywords plus a detected table) contribute rows.
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use crate::document::{ContentUnit, Document};
use crate::filters::{ContentFilter, ExtractOutcome, FilterMode, Heuristics};
use crate::records::Record;

#[derive(Debug)]
pub struct StrictFilter {
    heuristics: Heuristics,
}

impl StrictFilter {
    pub fn new(heuristics: Heuristics) -> Self {
        Self { heuristics }
    }

    pub fn is_real_work_unit(&self, unit: &ContentUnit<'_>) -> bool {
        self.heuristics.is_real_work_unit(unit)
    }
}

impl ContentFilter for StrictFilter {
    fn mode(&self) -> FilterMode {
        FilterMode::Strict
    }

    fn extract(&self, document: &Document) -> ExtractOutcome {
        info!("Strict extraction started for {}.", document.source_label());
        let mut records: Vec<Record> = Vec::new();

        for unit in document.units() {
            if !self.is_real_work_unit(&unit) {
                info!("Skipping junk page {}.", unit.page_number);
                continue;
            }

            for (i, table) in unit.tables.iter().enumerate() {
                let rows = table.to_records();
                debug!("Page {} table {}: {} row(s) kept.", unit.page_number, i + 1, rows.len());
                records.extend(rows);
            }
        }

        info!("Strict extraction finished: {} record(s).", records.len());
        ExtractOutcome::from_records(records)
    }

    fn heuristics(&self) -> &Heuristics {
        &self.heuristics
    }
}
