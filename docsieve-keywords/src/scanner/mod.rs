// docsieve-keywords/src/scanner/mod.rs
use daachorse::DoubleArrayAhoCorasick;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::fold::fold_case;
use crate::KeywordId;

/// Raised when the underlying automaton cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordError {
    message: String,
}

impl fmt::Display for KeywordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to build keyword automaton: {}", self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KeywordError {}

/// Case-insensitive substring scanner over a fixed keyword set.
///
/// Keywords are folded, de-duplicated and stripped of blanks before the
/// automaton is built. An empty set is legal and never matches.
pub struct KeywordScanner {
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
    keywords: Vec<String>,
}

impl fmt::Debug for KeywordScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordScanner")
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

impl KeywordScanner {
    pub fn new<I, S>(keywords: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folded: Vec<String> = Vec::new();
        for keyword in keywords {
            let k = fold_case(keyword.as_ref().trim());
            if !k.is_empty() && !folded.contains(&k) {
                folded.push(k);
            }
        }

        if folded.is_empty() {
            return Ok(Self { automaton: None, keywords: folded });
        }

        let automaton = DoubleArrayAhoCorasick::new(folded.iter().map(String::as_str))
            .map_err(|e| KeywordError { message: e.to_string() })?;

        Ok(Self { automaton: Some(automaton), keywords: folded })
    }

    /// Number of keywords the scanner was built with (after de-duplication).
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Ids of every keyword found in `text`, each reported once, in keyword order.
    ///
    /// Overlapping matches are considered so that a keyword nested inside
    /// another (for example "งาน" inside "ผู้รับผิดชอบงาน") still counts.
    pub fn matched_ids(&self, text: &str) -> Vec<KeywordId> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let haystack = fold_case(text);
        let mut seen = vec![false; self.keywords.len()];
        for m in automaton.find_overlapping_iter(haystack.as_str()) {
            if let Some(flag) = seen.get_mut(m.value()) {
                *flag = true;
            }
        }

        seen.iter()
            .enumerate()
            .filter_map(|(id, hit)| hit.then_some(id))
            .collect()
    }

    /// Number of distinct keywords present in `text`.
    pub fn count_distinct(&self, text: &str) -> usize {
        self.matched_ids(text).len()
    }

    /// The keywords present in `text`, for diagnostics.
    pub fn matched_keywords(&self, text: &str) -> Vec<&str> {
        self.matched_ids(text)
            .into_iter()
            .map(|id| self.keywords[id].as_str())
            .collect()
    }

    /// True as soon as any keyword occurs in `text`.
    pub fn contains_any(&self, text: &str) -> bool {
        match &self.automaton {
            Some(automaton) => automaton.find_iter(fold_case(text).as_str()).next().is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> KeywordScanner {
        KeywordScanner::new(["ลำดับ", "รายการ", "งาน", "Status", "Date"]).unwrap()
    }

    #[test]
    fn counts_each_keyword_once() {
        let scanner = anchors();
        assert_eq!(scanner.count_distinct("status STATUS Status"), 1);
        assert_eq!(scanner.count_distinct("Status of the job, due date tomorrow"), 2);
    }

    #[test]
    fn matches_are_case_insensitive() {
        let scanner = anchors();
        assert_eq!(scanner.matched_keywords("DATE and sTaTuS"), vec!["status", "date"]);
    }

    #[test]
    fn finds_thai_keywords_as_substrings() {
        let scanner = anchors();
        assert_eq!(scanner.count_distinct("ลำดับที่ 1 รายการงานประจำวัน"), 3);
    }

    #[test]
    fn duplicates_and_blanks_are_dropped() {
        let scanner = KeywordScanner::new(["Manual", "manual", "  ", ""]).unwrap();
        assert_eq!(scanner.len(), 1);
        assert!(scanner.contains_any("see the MANUAL"));
    }

    #[test]
    fn empty_scanner_never_matches() {
        let scanner = KeywordScanner::new(Vec::<&str>::new()).unwrap();
        assert!(scanner.is_empty());
        assert!(!scanner.contains_any("anything at all"));
        assert_eq!(scanner.count_distinct("anything"), 0);
    }
}
