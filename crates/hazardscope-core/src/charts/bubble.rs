// crates/hazardscope-core/src/charts/bubble.rs
use super::ChartData;
use crate::model::{DisasterStore, Indicator};
use serde::Serialize;

/// How many disaster types to surface per bubble.
const TOP_TYPES: usize = 3;

/// The metric that drives bubble area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SizeMetric {
    Affected,
    Deaths,
    /// Damage in thousands of US dollars, as published.
    Damage,
}

impl SizeMetric {
    pub fn label(&self) -> &'static str {
        match self {
            SizeMetric::Affected => "Total Affected",
            SizeMetric::Deaths => "Total Deaths",
            SizeMetric::Damage => "Total Damage ('000 US$)",
        }
    }

    fn value(&self, event: &crate::model::DisasterEvent) -> Option<f64> {
        match self {
            SizeMetric::Affected => event.affected,
            SizeMetric::Deaths => event.deaths,
            SizeMetric::Damage => event.damage_thousands_usd,
        }
    }
}

impl std::str::FromStr for SizeMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "affected" => Ok(SizeMetric::Affected),
            "deaths" => Ok(SizeMetric::Deaths),
            "damage" | "damages" => Ok(SizeMetric::Damage),
            other => Err(format!("unknown size metric: {other}")),
        }
    }
}

/// One bubble: a country-year with its aggregated totals.
#[derive(Clone, Debug, Serialize)]
pub struct BubblePoint {
    pub country: String,
    pub year: i32,
    /// Sum of the size metric over the year's qualifying events.
    pub size_value: f64,
    /// The y-axis development indicator (constant per country-year, the
    /// first value is taken).
    pub indicator_value: f64,
    pub total_affected: f64,
    pub total_deaths: f64,
    /// Most frequent disaster types this year, with counts.
    pub top_types: Vec<(String, usize)>,
}

/// Aggregate events into yearly bubbles per country.
///
/// Events missing the year, the indicator, or the size metric are skipped,
/// as are non-positive size values. Pass `None` for `countries` to include
/// everything. Output is sorted by country then year.
pub fn bubble_points(
    store: &DisasterStore,
    countries: Option<&[&str]>,
    indicator: Indicator,
    size_metric: SizeMetric,
) -> ChartData<Vec<BubblePoint>> {
    let mut points: Vec<BubblePoint> = Vec::new();

    for event in &store.events {
        if let Some(filter) = countries {
            if !filter.iter().any(|c| *c == event.country) {
                continue;
            }
        }
        let (Some(year), Some(indicator_value), Some(size_value)) = (
            event.year,
            indicator.value(&event.development),
            size_metric.value(event),
        ) else {
            continue;
        };
        if size_value <= 0.0 {
            continue;
        }

        let idx = match points
            .iter()
            .position(|p| p.country == event.country && p.year == year)
        {
            Some(idx) => idx,
            None => {
                points.push(BubblePoint {
                    country: event.country.clone(),
                    year,
                    size_value: 0.0,
                    indicator_value,
                    total_affected: 0.0,
                    total_deaths: 0.0,
                    top_types: Vec::new(),
                });
                points.len() - 1
            }
        };
        let point = &mut points[idx];

        point.size_value += size_value;
        point.total_affected += event.affected.unwrap_or(0.0);
        point.total_deaths += event.deaths.unwrap_or(0.0);
        match point
            .top_types
            .iter_mut()
            .find(|(t, _)| *t == event.disaster_type)
        {
            Some((_, count)) => *count += 1,
            None => point.top_types.push((event.disaster_type.clone(), 1)),
        }
    }

    if points.is_empty() {
        return ChartData::Insufficient(format!(
            "no events carry both {} and a {} value",
            indicator.label(),
            size_metric.label()
        ));
    }

    for point in &mut points {
        point
            .top_types
            .sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        point.top_types.truncate(TOP_TYPES);
    }
    points.sort_by(|a, b| a.country.cmp(&b.country).then(a.year.cmp(&b.year)));

    ChartData::Ready(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DevelopmentIndicators, DisasterEvent, RiskIndicators};

    fn event(
        country: &str,
        year: i32,
        kind: &str,
        affected: Option<f64>,
        gdp: Option<f64>,
    ) -> DisasterEvent {
        DisasterEvent {
            id: format!("{country}-{year}-{kind}"),
            country: country.to_string(),
            year: Some(year),
            disaster_type: kind.to_string(),
            subgroup: None,
            subtype: None,
            event_name: None,
            origin: None,
            location: None,
            latitude: None,
            longitude: None,
            magnitude: None,
            magnitude_scale: None,
            deaths: Some(1.0),
            affected,
            damage_thousands_usd: None,
            risk: RiskIndicators::default(),
            development: DevelopmentIndicators {
                gdp_per_capita: gdp,
                ..DevelopmentIndicators::default()
            },
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
    fn aggregates_per_country_year() {
        let s = store(vec![
            event("India", 2010, "Flood", Some(100.0), Some(1500.0)),
            event("India", 2010, "Flood", Some(50.0), Some(1500.0)),
            event("India", 2010, "Storm", Some(25.0), Some(1500.0)),
            event("India", 2011, "Flood", Some(10.0), Some(1600.0)),
            // No GDP → skipped.
            event("Chile", 2010, "Quake", Some(500.0), None),
            // Zero affected → skipped.
            event("India", 2010, "Drought", Some(0.0), Some(1500.0)),
        ]);

        let points = bubble_points(&s, None, Indicator::GdpPerCapita, SizeMetric::Affected)
            .ready()
            .expect("points");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].year, 2010);
        assert_eq!(points[0].size_value, 175.0);
        assert_eq!(points[0].indicator_value, 1500.0);
        assert_eq!(points[0].top_types[0], ("Flood".to_string(), 2));
        assert_eq!(points[1].year, 2011);
    }

    #[test]
    fn country_filter_limits_the_bubbles() {
        let s = store(vec![
            event("India", 2010, "Flood", Some(100.0), Some(1500.0)),
            event("Chile", 2010, "Quake", Some(500.0), Some(9000.0)),
        ]);
        let points = bubble_points(
            &s,
            Some(&["Chile"]),
            Indicator::GdpPerCapita,
            SizeMetric::Affected,
        )
        .ready()
        .expect("points");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].country, "Chile");
    }

    #[test]
    fn nothing_qualifying_is_insufficient() {
        let s = store(vec![event("India", 2010, "Flood", None, Some(1500.0))]);
        assert!(
            !bubble_points(&s, None, Indicator::GdpPerCapita, SizeMetric::Affected).is_ready()
        );
    }
}
