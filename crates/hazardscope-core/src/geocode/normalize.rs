// crates/hazardscope-core/src/geocode/normalize.rs
use crate::text::fold_key;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Administrative-boundary terms that don't identify a place and are
/// dropped before matching.
static NOISE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "near",
        "province",
        "district",
        "cities",
        "city",
        "state",
        "municipality",
        "region",
    ]
    .into_iter()
    .collect()
});

/// Tokens shorter than this are discarded as noise.
pub const MIN_TOKEN_LEN: usize = 3;

/// Split a free-text location description into ordered candidate tokens.
///
/// Normalization steps, in order:
/// 1. fold to lowercase ASCII ([`fold_key`]);
/// 2. drop parenthetical asides;
/// 3. split on commas and pipes;
/// 4. within each segment, drop punctuation and noise words (whole words
///    only, so "Statesboro" survives while "state" does not);
/// 5. trim, and discard segments shorter than [`MIN_TOKEN_LEN`].
///
/// Token order follows the order of appearance in the input, which the
/// exact match pass relies on.
///
/// # Examples
///
/// ```
/// use hazardscope_core::geocode::location_tokens;
///
/// assert_eq!(
///     location_tokens("Near Pune District, Maharashtra (western part)"),
///     vec!["pune".to_string(), "maharashtra".to_string()],
/// );
/// ```
pub fn location_tokens(text: &str) -> Vec<String> {
    let folded = fold_key(text);
    let stripped = strip_parentheticals(&folded);

    stripped
        .split([',', '|'])
        .filter_map(|segment| {
            // Punctuation becomes whitespace so "Port-au-Prince" still
            // yields words rather than one fused blob.
            let cleaned: String = segment
                .chars()
                .map(|c| {
                    if c.is_alphanumeric() || c.is_whitespace() {
                        c
                    } else {
                        ' '
                    }
                })
                .collect();

            let token = cleaned
                .split_whitespace()
                .filter(|word| !NOISE_WORDS.contains(word))
                .collect::<Vec<_>>()
                .join(" ");

            if token.len() >= MIN_TOKEN_LEN {
                Some(token)
            } else {
                None
            }
        })
        .collect()
}

/// Remove `(...)` spans, tolerating nesting and unbalanced parens.
fn strip_parentheticals(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth = 0usize;
    for ch in s.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_orders_tokens() {
        assert_eq!(
            location_tokens("Mumbai, Pune, Nagpur"),
            vec!["mumbai", "pune", "nagpur"]
        );
    }

    #[test]
    fn strips_noise_words_on_word_boundaries() {
        assert_eq!(location_tokens("Near Pune District"), vec!["pune"]);
        // "Statesboro" must not lose its "state" prefix.
        assert_eq!(location_tokens("Statesboro"), vec!["statesboro"]);
    }

    #[test]
    fn drops_parentheticals_and_short_segments() {
        assert_eq!(
            location_tokens("Chennai (coastal area), TN"),
            vec!["chennai"]
        );
    }

    #[test]
    fn empty_and_noise_only_inputs_yield_nothing() {
        assert!(location_tokens("").is_empty());
        assert!(location_tokens("near, city").is_empty());
        assert!(location_tokens("(everything aside)").is_empty());
    }

    #[test]
    fn pipes_split_like_commas() {
        assert_eq!(
            location_tokens("Kerala | Karnataka"),
            vec!["kerala", "karnataka"]
        );
    }

    #[test]
    fn survives_unbalanced_parens() {
        assert_eq!(location_tokens("Pune (note, Delhi"), vec!["pune"]);
        assert_eq!(location_tokens("Pune) , Delhi"), vec!["pune", "delhi"]);
    }

    #[test]
    fn folds_accents() {
        assert_eq!(location_tokens("Mérida, Yucatán"), vec!["merida", "yucatan"]);
    }
}
