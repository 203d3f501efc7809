// crates/hazardscope-core/src/charts/radar.rs
use super::{mean_present, ChartData};
use crate::model::{DisasterStore, RiskDimension};
use serde::Serialize;

/// One radar axis: a risk dimension and its averaged score.
#[derive(Clone, Debug, Serialize)]
pub struct RadarAxis {
    pub dimension: RiskDimension,
    /// Mean over the selection's events, on the source 0–100 scale.
    pub value: f64,
}

/// The radar outline for one year.
#[derive(Clone, Debug, Serialize)]
pub struct RadarProfile {
    pub year: i32,
    /// Only dimensions that had any data; axes vary per country-year.
    pub axes: Vec<RadarAxis>,
}

/// Risk-dimension profile for one country-year.
pub fn risk_profile(store: &DisasterStore, country: &str, year: i32) -> ChartData<RadarProfile> {
    match profile_for(store, country, year) {
        Some(profile) => ChartData::Ready(profile),
        None => ChartData::Insufficient(format!(
            "no risk indicators recorded for {country} in {year}"
        )),
    }
}

/// Per-year profiles across all of a country's years — the frames behind
/// the year slider.
pub fn risk_profiles(store: &DisasterStore, country: &str) -> ChartData<Vec<RadarProfile>> {
    let years = store.years_for(country);
    if years.is_empty() {
        return ChartData::Insufficient(format!("country '{country}' not found in the dataset"));
    }

    let profiles: Vec<RadarProfile> = years
        .into_iter()
        .filter_map(|year| profile_for(store, country, year))
        .collect();

    if profiles.is_empty() {
        return ChartData::Insufficient(format!("no risk indicators recorded for {country}"));
    }
    ChartData::Ready(profiles)
}

fn profile_for(store: &DisasterStore, country: &str, year: i32) -> Option<RadarProfile> {
    let events = store.events_for(country, year);
    if events.is_empty() {
        return None;
    }

    let axes: Vec<RadarAxis> = RiskDimension::ALL
        .iter()
        .filter_map(|dim| {
            mean_present(events.iter().map(|e| dim.value(&e.risk))).map(|value| RadarAxis {
                dimension: *dim,
                value,
            })
        })
        .collect();

    if axes.is_empty() {
        return None;
    }
    Some(RadarProfile { year, axes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DevelopmentIndicators, DisasterEvent, RiskIndicators};

    fn event(year: i32, exposure: Option<f64>, vulnerability: Option<f64>) -> DisasterEvent {
        DisasterEvent {
            id: format!("e{year}"),
            country: "India".to_string(),
            year: Some(year),
            disaster_type: "Flood".to_string(),
            subgroup: None,
            subtype: None,
            event_name: None,
            origin: None,
            location: None,
            latitude: None,
            longitude: None,
            magnitude: None,
            magnitude_scale: None,
            deaths: None,
            affected: None,
            damage_thousands_usd: None,
            risk: RiskIndicators {
                exposure,
                vulnerability,
                ..RiskIndicators::default()
            },
            development: DevelopmentIndicators::default(),
        }
    }

    fn store(events: Vec<DisasterEvent>) -> DisasterStore {
        DisasterStore {
            events,
            reference: Vec::new(),
            rankings: Vec::new(),
            annual: Vec::new(),
        }
    }

    #[test]
    fn averages_only_dimensions_with_data() {
        let s = store(vec![
            event(2010, Some(40.0), None),
            event(2010, Some(60.0), None),
        ]);
        let profile = risk_profile(&s, "India", 2010).ready().expect("profile");
        assert_eq!(profile.axes.len(), 1);
        assert_eq!(profile.axes[0].dimension, RiskDimension::Exposure);
        assert_eq!(profile.axes[0].value, 50.0);
    }

    #[test]
    fn indicatorless_years_are_insufficient() {
        let s = store(vec![event(2010, None, None)]);
        assert!(!risk_profile(&s, "India", 2010).is_ready());
    }

    #[test]
    fn profiles_cover_each_year_with_data() {
        let s = store(vec![
            event(2004, Some(10.0), Some(20.0)),
            event(2009, None, Some(30.0)),
            event(2011, None, None),
        ]);
        let profiles = risk_profiles(&s, "India").ready().expect("profiles");
        let years: Vec<i32> = profiles.iter().map(|p| p.year).collect();
        // 2011 has events but no indicator values, so it contributes no frame.
        assert_eq!(years, vec![2004, 2009]);
    }

    #[test]
    fn unknown_country_is_insufficient() {
        let s = store(vec![event(2010, Some(1.0), None)]);
        let out = risk_profiles(&s, "Chile");
        assert!(out.reason().unwrap().contains("Chile"));
    }
}
