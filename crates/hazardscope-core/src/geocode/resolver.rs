// crates/hazardscope-core/src/geocode/resolver.rs
use super::gazetteer::{CountryGazetteer, GazetteerEntry};
use super::normalize::location_tokens;
use super::similarity::ratio;
use serde::Serialize;

/// Minimum similarity score (0–100) a fuzzy candidate must exceed.
pub const DEFAULT_THRESHOLD: f64 = 85.0;

/// A successful resolution: coordinates copied from a validated reference
/// point, plus the canonical name that matched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedPlace {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl GazetteerEntry {
    fn to_place(&self) -> ResolvedPlace {
        ResolvedPlace {
            latitude: self.latitude,
            longitude: self.longitude,
            name: self.canonical.clone(),
        }
    }
}

impl CountryGazetteer {
    /// Resolve a location description with the default threshold.
    ///
    /// Returns `None` for missing/empty text, for text that yields no
    /// usable tokens, and when nothing scores above the threshold. A
    /// returned place always carries in-range coordinates, because only
    /// validated reference points enter the tables.
    pub fn resolve(&self, location: Option<&str>) -> Option<ResolvedPlace> {
        self.resolve_with_threshold(location, DEFAULT_THRESHOLD)
    }

    /// Resolve with an explicit similarity threshold.
    ///
    /// Two passes over the tokens (see [`location_tokens`]):
    ///
    /// 1. **Exact**: the first token that is a key in the city table wins
    ///    immediately; otherwise the state table. Cities take priority over
    ///    states within a token, earlier tokens over later ones.
    /// 2. **Fuzzy**: every token is scored against every candidate sharing
    ///    its first character; the single best score above `threshold`
    ///    wins. Ties on score go to the alphabetically-first canonical
    ///    name, so results don't depend on hash-map iteration order.
    ///
    /// Pure and deterministic: identical inputs against an unmodified
    /// gazetteer always yield identical results.
    pub fn resolve_with_threshold(
        &self,
        location: Option<&str>,
        threshold: f64,
    ) -> Option<ResolvedPlace> {
        let text = location?;
        let tokens = location_tokens(text);
        if tokens.is_empty() {
            return None;
        }

        // Pass 1: exact key hits, in token order.
        for token in &tokens {
            if let Some(entry) = self.cities.get(token) {
                return Some(entry.to_place());
            }
            if let Some(entry) = self.states.get(token) {
                return Some(entry.to_place());
            }
        }

        // Pass 2: fuzzy scan, first-character prefilter.
        let mut best: Option<(f64, &GazetteerEntry)> = None;
        for token in &tokens {
            let Some(first) = token.chars().next() else {
                continue;
            };
            for (key, entry) in self.candidates() {
                if key.chars().next() != Some(first) {
                    continue;
                }
                let score = ratio(token, key);
                if score <= threshold {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((best_score, best_entry)) => {
                        score > best_score
                            || (score == best_score && entry.canonical < best_entry.canonical)
                    }
                };
                if better {
                    best = Some((score, entry));
                }
            }
        }

        best.map(|(_, entry)| entry.to_place())
    }
}
