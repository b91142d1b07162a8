/// Canonicalize text for comparison: Unicode-aware lowercase, then every
/// run of characters that are not word characters (Unicode alphanumerics
/// plus `_`) collapses to a single space, trimmed at both ends.
///
/// The corpus is Greek, so the filter must not be ASCII-only.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Τι είναι η ΕΚΑΑ;"), "τι είναι η εκαα");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            normalize("  πώς   θα  πάρω\tτην κάρτα  "),
            "πώς θα πάρω την κάρτα"
        );
    }

    #[test]
    fn punctuation_only_input_becomes_empty() {
        assert_eq!(normalize("?!;,."), "");
    }

    #[test]
    fn idempotent() {
        let once = normalize("Ισχύει η ΕΚΑΑ -- στην Ελβετία;!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn keeps_mixed_scripts_and_digits() {
        assert_eq!(normalize("EHIC κάρτα 2024!"), "ehic κάρτα 2024");
    }
}
