// crates/hazardscope-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so gazetteer keys and location
/// tokens match across diacritic variants (`Mérida` vs `Merida`).
///
/// # Examples
///
/// ```
/// use hazardscope_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("São Paulo"), "sao paulo");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// Case-insensitive and accent-insensitive; both sides go through
/// [`fold_key`] before comparison.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Substring containment after Unicode folding.
///
/// Used for the loose country filters ("India" should match rows labelled
/// "India (the Republic of)"), mirroring the case-insensitive `contains`
/// filters of the dashboards this data feeds.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

/// Parses an `Option<String>` into an `Option<f64>`.
///
/// \- Trims leading and trailing whitespace before parsing.
/// \- Returns `None` if the input is `None` or if parsing fails.
///
/// Numeric columns in the source CSVs are full of empty cells, `N/A`
/// markers and pandas float renderings (`"2010.0"`); all of those are data,
/// not errors, so this never fails.
pub fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}

/// Non-empty, trimmed view of an optional CSV cell.
pub fn non_empty(s: Option<String>) -> Option<String> {
    s.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_transliterates_and_lowercases() {
        assert_eq!(fold_key("Łódź"), "lodz");
        assert_eq!(fold_key("MÜNCHEN"), "munchen");
        assert_eq!(fold_key("Pune"), "pune");
    }

    #[test]
    fn equals_folded_ignores_case_and_accents() {
        assert!(equals_folded("Mérida", "merida"));
        assert!(!equals_folded("Berlin", "Paris"));
    }

    #[test]
    fn contains_folded_is_loose() {
        assert!(contains_folded("India (the Republic of)", "india"));
        assert!(!contains_folded("Indonesia", "india"));
    }

    #[test]
    fn parse_opt_f64_tolerates_garbage() {
        assert_eq!(parse_opt_f64(&Some(" 12.34 ".to_string())), Some(12.34));
        assert_eq!(parse_opt_f64(&Some("2010.0".to_string())), Some(2010.0));
        assert_eq!(parse_opt_f64(&Some("N/A".to_string())), None);
        assert_eq!(parse_opt_f64(&None), None);
    }

    #[test]
    fn non_empty_drops_blank_cells() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
