// docsieve-core/src/document.rs
//! In-memory form of a document as handed over by a document reader: a list
//! of pages, each with its raw text rendition and any structurally detected
//! tables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::records::Record;

/// A table as a header row plus row-major cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub header: Vec<Option<String>>,
    pub rows: Vec<Vec<Value>>,
}

/// `null` and whitespace-only strings count as empty.
pub fn is_empty_cell(cell: &Value) -> bool {
    match cell {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

impl Table {
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).chain(std::iter::once(self.header.len())).max().unwrap_or(0)
    }

    /// Column keys derived from the header. Blank headers become `Col<i>` and
    /// repeated headers become `<name>-<i>`, suffixed again until unique.
    pub fn column_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        (0..self.width())
            .map(|i| {
                let base = match self.header.get(i).and_then(|h| h.as_deref()).map(str::trim) {
                    Some(h) if !h.is_empty() => h.to_string(),
                    _ => format!("Col{}", i),
                };
                let mut name = base.clone();
                while !seen.insert(name.clone()) {
                    name = format!("{}-{}", name, i);
                }
                name
            })
            .collect()
    }

    fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Converts the table to row records, dropping columns and rows whose
    /// cells are all empty.
    pub fn to_records(&self) -> Vec<Record> {
        let names = self.column_names();
        let kept: Vec<usize> = (0..names.len())
            .filter(|&col| (0..self.rows.len()).any(|row| self.cell(row, col).is_some_and(|c| !is_empty_cell(c))))
            .collect();

        if kept.is_empty() {
            return Vec::new();
        }

        (0..self.rows.len())
            .filter(|&row| kept.iter().any(|&col| self.cell(row, col).is_some_and(|c| !is_empty_cell(c))))
            .map(|row| {
                kept.iter()
                    .map(|&col| (names[col].clone(), self.cell(row, col).cloned().unwrap_or(Value::Null)))
                    .collect()
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub text: String,
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Where the document came from, for logs.
    pub source: Option<String>,
    pub pages: Vec<Page>,
}

/// One page's worth of content, borrowed from a [`Document`] for filtering.
#[derive(Debug, Clone, Copy)]
pub struct ContentUnit<'a> {
    /// 1-based.
    pub page_number: usize,
    pub text: &'a str,
    pub tables: &'a [Table],
}

impl ContentUnit<'_> {
    pub fn has_tables(&self) -> bool {
        !self.tables.is_empty()
    }
}

impl Document {
    /// Parses a JSON page dump. `source` labels the document when the dump
    /// does not name one itself.
    pub fn from_slice(bytes: &[u8], source: &Path) -> Result<Self> {
        let mut document: Document = serde_json::from_slice(bytes)
            .with_context(|| format!("Failed to parse document {}", source.display()))?;
        if document.source.is_none() {
            document.source = Some(source.display().to_string());
        }
        Ok(document)
    }

    pub fn units(&self) -> impl Iterator<Item = ContentUnit<'_>> {
        self.pages.iter().enumerate().map(|(i, page)| ContentUnit {
            page_number: i + 1,
            text: &page.text,
            tables: &page.tables,
        })
    }

    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or("<memory>")
    }
}
