// crates/hazardscope-core/src/charts/metrics.rs
use super::{mean_present, sum_present, ChartData};
use crate::model::{CountryYearRank, DisasterEvent, DisasterStore};
use serde::Serialize;

/// The key-metrics panel for one country-year.
///
/// Sums and means skip missing values; a field is `None` only when no
/// event contributed a value at all.
#[derive(Clone, Debug, Serialize)]
pub struct MetricsCard {
    pub country: String,
    pub year: i32,
    pub events: usize,
    /// Mean across the year's events.
    pub world_risk_index: Option<f64>,
    pub total_deaths: Option<f64>,
    /// As published: thousands of US dollars.
    pub total_damage_thousands_usd: Option<f64>,
    pub total_affected: Option<f64>,
    pub average_risk_index: Option<f64>,
    /// Rank positions for the same country-year, when the ranking table
    /// has a row.
    pub ranks: Option<CountryYearRank>,
}

/// Build the metrics card for an exact country/year selection.
pub fn metrics_card(store: &DisasterStore, country: &str, year: i32) -> ChartData<MetricsCard> {
    let events: Vec<&DisasterEvent> = store.events_for(country, year);

    if events.is_empty() {
        return ChartData::Insufficient(format!("no data found for {country} in {year}"));
    }

    ChartData::Ready(MetricsCard {
        country: country.to_string(),
        year,
        events: events.len(),
        world_risk_index: mean_present(events.iter().map(|e| e.risk.world_risk_index)),
        total_deaths: sum_present(events.iter().map(|e| e.deaths)),
        total_damage_thousands_usd: sum_present(events.iter().map(|e| e.damage_thousands_usd)),
        total_affected: sum_present(events.iter().map(|e| e.affected)),
        average_risk_index: mean_present(events.iter().map(|e| e.risk.average_risk_index)),
        ranks: store.ranks_for(country, year).cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DevelopmentIndicators, RiskIndicators};

    fn event(deaths: Option<f64>, wri: Option<f64>) -> DisasterEvent {
        DisasterEvent {
            id: "x".to_string(),
            country: "India".to_string(),
            year: Some(2010),
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
            deaths,
            affected: None,
            damage_thousands_usd: None,
            risk: RiskIndicators {
                world_risk_index: wri,
                ..RiskIndicators::default()
            },
            development: DevelopmentIndicators::default(),
        }
    }

    #[test]
    fn aggregates_sums_and_means() {
        let store = DisasterStore {
            events: vec![
                event(Some(10.0), Some(6.0)),
                event(Some(5.0), None),
                event(None, Some(8.0)),
            ],
            reference: Vec::new(),
            rankings: vec![CountryYearRank {
                country: "India".to_string(),
                year: Some(2010),
                rank_damages: Some(3.0),
                rank_risk: None,
                rank_gdp: None,
                rank_hdi: None,
                rank_vulnerability: None,
            }],
            annual: Vec::new(),
        };

        let card = metrics_card(&store, "India", 2010).ready().expect("card");
        assert_eq!(card.events, 3);
        assert_eq!(card.total_deaths, Some(15.0));
        assert_eq!(card.world_risk_index, Some(7.0));
        assert_eq!(card.total_affected, None);
        assert_eq!(card.ranks.unwrap().rank_damages, Some(3.0));
    }

    #[test]
    fn empty_selection_is_insufficient() {
        let store = DisasterStore {
            events: vec![event(Some(1.0), None)],
            reference: Vec::new(),
            rankings: Vec::new(),
            annual: Vec::new(),
        };
        let out = metrics_card(&store, "Chile", 2010);
        assert_eq!(out.reason(), Some("no data found for Chile in 2010"));
    }
}
