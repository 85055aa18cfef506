// docsieve-keywords/src/fold/mod.rs
use alloc::string::String;

/// Folds text for case-insensitive matching.
///
/// Scripts without case (Thai, for example) come back unchanged, so the same
/// folding is applied to keywords and haystacks alike.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii() {
        assert_eq!(fold_case("Status REPORT"), "status report");
    }

    #[test]
    fn leaves_caseless_scripts_alone() {
        assert_eq!(fold_case("สถานะ"), "สถานะ");
    }
}
