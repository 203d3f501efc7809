// crates/hazardscope-core/src/charts/breakdown.rs
use super::ChartData;
use crate::model::{DisasterStore, ImpactMetric};
use serde::Serialize;

/// Shares smaller than this fraction of the total are dropped from the
/// donut — they would render as unreadable slivers.
const MIN_SHARE: f64 = 0.01;

/// Occurrence count for one disaster type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub disaster_type: String,
    pub count: usize,
}

/// Disaster-type occurrence counts for a country, optionally restricted
/// to one year. Sorted ascending by count (the horizontal-bar layout puts
/// the biggest bar on top), ties alphabetical.
pub fn type_breakdown(
    store: &DisasterStore,
    country: &str,
    year: Option<i32>,
) -> ChartData<Vec<TypeCount>> {
    let mut counts: Vec<TypeCount> = Vec::new();
    for event in store
        .events
        .iter()
        .filter(|e| e.country == country)
        .filter(|e| year.is_none() || e.year == year)
    {
        match counts
            .iter_mut()
            .find(|c| c.disaster_type == event.disaster_type)
        {
            Some(c) => c.count += 1,
            None => counts.push(TypeCount {
                disaster_type: event.disaster_type.clone(),
                count: 1,
            }),
        }
    }

    if counts.is_empty() {
        return ChartData::Insufficient(match year {
            Some(y) => format!("no disaster data found for {country} in {y}"),
            None => format!("no disaster data found for {country}"),
        });
    }

    counts.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.disaster_type.cmp(&b.disaster_type)));
    ChartData::Ready(counts)
}

/// One slice of the metric-share donut.
#[derive(Clone, Debug, Serialize)]
pub struct MetricShare {
    pub disaster_type: String,
    /// Metric total over the window.
    pub value: f64,
    /// Percentage of the all-types total, including dropped slivers.
    pub share: f64,
}

/// How an impact metric distributes across disaster types for one country
/// over an inclusive year window, from the annual table.
///
/// Missing metric cells count as zero; types contributing under 1% of the
/// total are dropped; the remainder is sorted descending by value.
pub fn metric_shares(
    store: &DisasterStore,
    country: &str,
    metric: ImpactMetric,
    start_year: i32,
    end_year: i32,
) -> ChartData<Vec<MetricShare>> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut matched = false;

    for row in store
        .annual
        .iter()
        .filter(|r| r.country == country)
        .filter(|r| r.year.is_some_and(|y| y >= start_year && y <= end_year))
    {
        matched = true;
        let value = row.metric(metric).unwrap_or(0.0);
        match totals.iter_mut().find(|(t, _)| *t == row.disaster_type) {
            Some((_, total)) => *total += value,
            None => totals.push((row.disaster_type.clone(), value)),
        }
    }

    if !matched {
        return ChartData::Insufficient(format!(
            "no annual records for {country} between {start_year} and {end_year}"
        ));
    }

    let grand_total: f64 = totals.iter().map(|(_, v)| v).sum();
    if grand_total <= 0.0 {
        return ChartData::Insufficient(format!(
            "{} totals are zero for {country} between {start_year} and {end_year}",
            metric.label()
        ));
    }

    let mut shares: Vec<MetricShare> = totals
        .into_iter()
        .filter(|(_, v)| *v > grand_total * MIN_SHARE)
        .map(|(disaster_type, value)| MetricShare {
            disaster_type,
            value,
            share: value / grand_total * 100.0,
        })
        .collect();

    shares.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.disaster_type.cmp(&b.disaster_type))
    });

    ChartData::Ready(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnnualImpact, DevelopmentIndicators, DisasterEvent, RiskIndicators};

    fn event(country: &str, year: i32, kind: &str) -> DisasterEvent {
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
            deaths: None,
            affected: None,
            damage_thousands_usd: None,
            risk: RiskIndicators::default(),
            development: DevelopmentIndicators::default(),
        }
    }

    fn annual(country: &str, year: i32, kind: &str, deaths: Option<f64>) -> AnnualImpact {
        AnnualImpact {
            country: country.to_string(),
            year: Some(year),
            disaster_type: kind.to_string(),
            deaths,
            injuries: None,
            assistance: None,
            damages: None,
            affected: None,
            homeless: None,
        }
    }

    #[test]
    fn counts_sort_ascending_with_alphabetical_ties() {
        let store = DisasterStore {
            events: vec![
                event("India", 2010, "Flood"),
                event("India", 2010, "Flood"),
                event("India", 2010, "Storm"),
                event("India", 2010, "Earthquake"),
                event("India", 2011, "Drought"),
            ],
            reference: Vec::new(),
            rankings: Vec::new(),
            annual: Vec::new(),
        };

        let counts = type_breakdown(&store, "India", Some(2010))
            .ready()
            .expect("counts");
        assert_eq!(
            counts,
            vec![
                TypeCount {
                    disaster_type: "Earthquake".to_string(),
                    count: 1
                },
                TypeCount {
                    disaster_type: "Storm".to_string(),
                    count: 1
                },
                TypeCount {
                    disaster_type: "Flood".to_string(),
                    count: 2
                },
            ]
        );

        // Without a year filter the 2011 drought shows up too.
        let all = type_breakdown(&store, "India", None).ready().expect("counts");
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn shares_drop_slivers_and_sort_descending() {
        let store = DisasterStore {
            events: Vec::new(),
            reference: Vec::new(),
            rankings: Vec::new(),
            annual: vec![
                annual("India", 2008, "Flood", Some(600.0)),
                annual("India", 2009, "Flood", Some(300.0)),
                annual("India", 2009, "Storm", Some(95.0)),
                annual("India", 2010, "Drought", Some(5.0)),
                // Outside the window:
                annual("India", 2000, "Earthquake", Some(1000.0)),
            ],
        };

        let shares = metric_shares(&store, "India", ImpactMetric::Deaths, 2005, 2010)
            .ready()
            .expect("shares");
        // Drought is 0.5% of 1000 and gets dropped.
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].disaster_type, "Flood");
        assert_eq!(shares[0].value, 900.0);
        assert_eq!(shares[0].share, 90.0);
        assert_eq!(shares[1].disaster_type, "Storm");
    }

    #[test]
    fn empty_windows_are_insufficient() {
        let store = DisasterStore {
            events: Vec::new(),
            reference: Vec::new(),
            rankings: Vec::new(),
            annual: vec![annual("India", 2000, "Flood", Some(10.0))],
        };
        assert!(!metric_shares(&store, "India", ImpactMetric::Deaths, 2005, 2010).is_ready());
        assert!(!type_breakdown(&store, "India", Some(2010)).is_ready());
    }

    #[test]
    fn all_zero_totals_are_insufficient_not_empty_ready() {
        let store = DisasterStore {
            events: Vec::new(),
            reference: Vec::new(),
            rankings: Vec::new(),
            annual: vec![annual("India", 2009, "Flood", Some(0.0))],
        };
        let out = metric_shares(&store, "India", ImpactMetric::Deaths, 2005, 2010);
        assert!(!out.is_ready());
    }
}
