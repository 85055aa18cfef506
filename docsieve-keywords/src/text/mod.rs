// docsieve-keywords/src/text/mod.rs
//! Small structural probes over raw page text.

/// Number of characters (not bytes) in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// True if a `'\n'` occurs within the first `probe_chars` characters.
pub fn has_newline_within(text: &str, probe_chars: usize) -> bool {
    text.chars().take(probe_chars).any(|c| c == '\n')
}

/// Counts lines that contain something other than whitespace.
pub fn non_blank_line_count(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}
