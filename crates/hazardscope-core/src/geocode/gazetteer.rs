// crates/hazardscope-core/src/geocode/gazetteer.rs
use crate::model::ReferencePoint;
use crate::text::{contains_folded, fold_key};
use std::collections::HashMap;

/// A geocoding target with validated coordinates.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GazetteerEntry {
    pub latitude: f64,
    pub longitude: f64,
    /// Display name as it appears in the reference data.
    pub canonical: String,
}

/// Per-country name → coordinate lookup tables, built once from the
/// reference points and reused across many resolve calls.
///
/// Two tables are kept: city names and state/province names, both keyed by
/// [`fold_key`]. Reference points with missing or out-of-range coordinates
/// are skipped at build time and never reach matching. When the same key
/// occurs twice, the later reference point wins.
#[derive(Clone, Debug, Default)]
pub struct CountryGazetteer {
    pub(crate) cities: HashMap<String, GazetteerEntry>,
    pub(crate) states: HashMap<String, GazetteerEntry>,
}

impl CountryGazetteer {
    /// Build the lookup tables for one country.
    ///
    /// `country` is matched loosely (folded substring) against each
    /// reference point's `country_name`, mirroring the dashboards'
    /// case-insensitive country filters.
    pub fn build(points: &[ReferencePoint], country: &str) -> Self {
        let mut cities = HashMap::new();
        let mut states = HashMap::new();

        for point in points {
            if !contains_folded(&point.country_name, country) {
                continue;
            }
            let (lat, lon) = match (point.latitude, point.longitude) {
                (Some(lat), Some(lon))
                    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) =>
                {
                    (lat, lon)
                }
                _ => continue,
            };

            cities.insert(
                fold_key(&point.name),
                GazetteerEntry {
                    latitude: lat,
                    longitude: lon,
                    canonical: point.name.clone(),
                },
            );

            if let Some(state) = &point.state_name {
                states.insert(
                    fold_key(state),
                    GazetteerEntry {
                        latitude: lat,
                        longitude: lon,
                        canonical: state.clone(),
                    },
                );
            }
        }

        Self { cities, states }
    }

    /// True when no reference point for the country survived validation.
    /// An empty gazetteer resolves every location to no match.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty() && self.states.is_empty()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// All fuzzy-match candidates: cities first, then states.
    pub(crate) fn candidates(&self) -> impl Iterator<Item = (&String, &GazetteerEntry)> {
        self.cities.iter().chain(self.states.iter())
    }
}
