//! Name rules for artists and genres.

/// Trim surrounding whitespace and collapse inner whitespace runs to a
/// single space.
///
/// `"  The   National "` becomes `"The National"`.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build a case-insensitive `ILIKE` pattern matching `needle` anywhere.
///
/// `%`, `_` and `\` in the needle are escaped so they match literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(normalize_name("  The   National "), "The National");
        assert_eq!(normalize_name("Sigur\tRós"), "Sigur Rós");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize_name("   \n "), "");
    }

    #[test]
    fn contains_pattern_wraps_and_escapes() {
        assert_eq!(contains_pattern("head"), "%head%");
        assert_eq!(contains_pattern("100%_"), "%100\\%\\_%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn already_normal_name_is_unchanged() {
        assert_eq!(normalize_name("Radiohead"), "Radiohead");
    }
}
