// docsieve-core/src/filters/heuristics.rs
//! Page-level signals shared by the filter strategies.

use anyhow::{Context, Result};
use log::debug;

use docsieve_keywords::text::{char_len, has_newline_within, non_blank_line_count};
use docsieve_keywords::KeywordScanner;

use crate::config::FilterConfig;
use crate::document::ContentUnit;
use crate::errors::DocsieveError;

#[derive(Debug)]
pub struct Heuristics {
    anchors: KeywordScanner,
    blacklist: KeywordScanner,
    min_anchor_matches: usize,
    max_paragraph_chars: usize,
    newline_probe_chars: usize,
    min_text_lines: usize,
}

impl Heuristics {
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let anchors = KeywordScanner::new(&config.anchors)
            .map_err(DocsieveError::from)
            .context("Anchor keywords")?;
        let blacklist = KeywordScanner::new(&config.blacklist)
            .map_err(DocsieveError::from)
            .context("Blacklist phrases")?;
        debug!(
            "Heuristics ready: {} anchors, {} blacklist phrases, {} anchor matches required.",
            anchors.len(),
            blacklist.len(),
            config.min_anchor_matches()
        );
        Ok(Self {
            anchors,
            blacklist,
            min_anchor_matches: config.min_anchor_matches(),
            max_paragraph_chars: config.max_paragraph_chars(),
            newline_probe_chars: config.newline_probe_chars(),
            min_text_lines: config.min_text_lines(),
        })
    }

    /// Distinct anchor keywords present in `text`.
    pub fn anchor_matches(&self, text: &str) -> usize {
        self.anchors.count_distinct(text)
    }

    /// A unit is real work content only if it has enough distinct anchors AND
    /// at least one detected table. Either signal alone is not enough.
    pub fn is_real_work_unit(&self, unit: &ContentUnit<'_>) -> bool {
        let matches = self.anchor_matches(unit.text);
        if matches < self.min_anchor_matches {
            debug!(
                "Page {}: {} anchor match(es) {:?}, {} required.",
                unit.page_number,
                matches,
                self.anchors.matched_keywords(unit.text),
                self.min_anchor_matches
            );
            return false;
        }
        unit.has_tables()
    }

    /// Rejects long single-paragraph prose and anything carrying a
    /// blacklisted phrase; accepts the rest.
    pub fn is_tabular_like(&self, text: &str) -> bool {
        if char_len(text) > self.max_paragraph_chars && !has_newline_within(text, self.newline_probe_chars) {
            return false;
        }
        !self.blacklist.contains_any(text)
    }

    /// True when raw text has enough non-blank lines to be worth keeping.
    pub fn has_enough_lines(&self, text: &str) -> bool {
        non_blank_line_count(text) > self.min_text_lines
    }
}
