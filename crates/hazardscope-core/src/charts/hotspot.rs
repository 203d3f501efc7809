// crates/hazardscope-core/src/charts/hotspot.rs
use super::{sum_present, ChartData};
use crate::geocode::CountryGazetteer;
use crate::model::{DisasterEvent, DisasterStore};
use crate::text::contains_folded;
use serde::Serialize;

/// Only events with at least this many deaths make it onto the map by
/// default.
pub const DEFAULT_MIN_DEATHS: f64 = 1.0;

const MIN_MARKER_SIZE: f64 = 10.0;
const MAX_MARKER_SIZE: f64 = 100.0;
const MARKER_SIZE_POWER: f64 = 2.5;
/// Size used when every plotted event has the same death toll.
const UNIFORM_MARKER_SIZE: f64 = 60.0;

/// Where a marker's coordinates came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum MarkerSource {
    /// The event carried valid coordinates of its own.
    Direct,
    /// The resolver matched the free-text location to this place.
    Resolved { name: String },
}

/// One plottable disaster event.
#[derive(Clone, Debug, Serialize)]
pub struct HotspotMarker {
    pub event_id: String,
    pub disaster_type: String,
    pub location: Option<String>,
    pub source: MarkerSource,
    pub latitude: f64,
    pub longitude: f64,
    pub deaths: f64,
    pub damage_usd: Option<f64>,
    /// Marker diameter, death-toll scaled into [10, 100].
    pub size: f64,
}

/// Everything the map layer needs for one country-year.
#[derive(Clone, Debug, Serialize)]
pub struct HotspotMap {
    pub country: String,
    pub year: i32,
    pub markers: Vec<HotspotMarker>,
    /// Mean of the plotted coordinates.
    pub center: (f64, f64),
    /// Zoom step derived from the coordinate spread.
    pub zoom: u8,
    pub total_deaths: f64,
    /// Events that matched the filters but could not be placed; they are
    /// excluded from the plotted layer and from `markers.len()`.
    pub unresolved: usize,
}

/// Build the hotspot map for a country and year.
///
/// Event rows are filtered by loose country match, exact year, and a
/// death-toll floor. Direct coordinates win when present and in range;
/// otherwise the location text goes through the resolver. Events with
/// neither are dropped from the layer (and counted), never plotted with
/// partial coordinates.
pub fn hotspot_map(
    store: &DisasterStore,
    gazetteer: &CountryGazetteer,
    country: &str,
    year: i32,
    min_deaths: f64,
) -> ChartData<HotspotMap> {
    let candidates: Vec<&DisasterEvent> = store
        .events
        .iter()
        .filter(|e| contains_folded(&e.country, country))
        .filter(|e| e.year == Some(year))
        .filter(|e| e.deaths.is_some_and(|d| d >= min_deaths))
        .collect();

    if candidates.is_empty() {
        return ChartData::Insufficient(format!(
            "no disasters for {country} in {year} with at least {min_deaths} deaths"
        ));
    }

    let mut unresolved = 0usize;
    let mut placed: Vec<(&DisasterEvent, f64, f64, MarkerSource)> = Vec::new();

    for event in candidates {
        if let Some((lat, lon)) = event.direct_coordinates() {
            placed.push((event, lat, lon, MarkerSource::Direct));
        } else if let Some(hit) = gazetteer.resolve(event.location.as_deref()) {
            placed.push((
                event,
                hit.latitude,
                hit.longitude,
                MarkerSource::Resolved { name: hit.name },
            ));
        } else {
            tracing::debug!(
                event = %event.id,
                location = event.location.as_deref().unwrap_or(""),
                "location unresolved; event left off the map"
            );
            unresolved += 1;
        }
    }

    if placed.is_empty() {
        return ChartData::Insufficient(format!(
            "none of the {unresolved} matching disasters in {country} ({year}) could be placed"
        ));
    }

    let deaths: Vec<f64> = placed
        .iter()
        .map(|(e, ..)| e.deaths.unwrap_or(0.0))
        .collect();
    let sizes = scale_marker_sizes(&deaths);

    let n = placed.len() as f64;
    let center_lat = placed.iter().map(|(_, lat, ..)| lat).sum::<f64>() / n;
    let center_lon = placed.iter().map(|(_, _, lon, _)| lon).sum::<f64>() / n;

    let lat_spread = spread(placed.iter().map(|(_, lat, ..)| *lat));
    let lon_spread = spread(placed.iter().map(|(_, _, lon, _)| *lon));

    let total_deaths = deaths.iter().sum();

    let markers = placed
        .into_iter()
        .zip(sizes)
        .map(|((event, lat, lon, source), size)| HotspotMarker {
            event_id: event.id.clone(),
            disaster_type: event.disaster_type.clone(),
            location: event.location.clone(),
            source,
            latitude: lat,
            longitude: lon,
            deaths: event.deaths.unwrap_or(0.0),
            damage_usd: event.damage_usd(),
            size,
        })
        .collect();

    ChartData::Ready(HotspotMap {
        country: country.to_string(),
        year,
        markers,
        center: (center_lat, center_lon),
        zoom: zoom_for_spread(lat_spread.max(lon_spread)),
        total_deaths,
        unresolved,
    })
}

/// Scale death tolls into marker sizes.
///
/// Min maps to 10, max to 100, with a power-2.5 curve in between so the
/// deadliest events dominate visually. A uniform toll yields a uniform
/// mid-size marker.
pub fn scale_marker_sizes(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !(max > min) {
        return vec![UNIFORM_MARKER_SIZE; values.len()];
    }

    values
        .iter()
        .map(|v| {
            let normalized = (v - min) / (max - min);
            MIN_MARKER_SIZE + normalized.powf(MARKER_SIZE_POWER) * (MAX_MARKER_SIZE - MIN_MARKER_SIZE)
        })
        .collect()
}

fn spread(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    max - min
}

/// Zoom steps used by the original map view, keyed off the larger of the
/// latitude/longitude spreads in degrees.
fn zoom_for_spread(max_range: f64) -> u8 {
    if max_range > 20.0 {
        3
    } else if max_range > 10.0 {
        4
    } else if max_range > 5.0 {
        5
    } else if max_range > 2.0 {
        6
    } else {
        7
    }
}

/// Summary statistics for one country-year, independent of placement.
#[derive(Clone, Debug, Serialize)]
pub struct DisasterSummary {
    pub country: String,
    pub year: i32,
    pub events: usize,
    pub total_deaths: Option<f64>,
    pub total_affected: Option<f64>,
    pub total_damage_usd: Option<f64>,
    /// Occurrences per disaster type, most frequent first.
    pub by_type: Vec<(String, usize)>,
    /// Event name of the deadliest event, when any deaths were recorded.
    pub deadliest: Option<String>,
}

pub fn disaster_summary(
    store: &DisasterStore,
    country: &str,
    year: i32,
) -> ChartData<DisasterSummary> {
    let events: Vec<&DisasterEvent> = store
        .events
        .iter()
        .filter(|e| contains_folded(&e.country, country) && e.year == Some(year))
        .collect();

    if events.is_empty() {
        return ChartData::Insufficient(format!("no disasters found for {country} in {year}"));
    }

    let mut by_type: Vec<(String, usize)> = Vec::new();
    for event in &events {
        match by_type.iter_mut().find(|(t, _)| *t == event.disaster_type) {
            Some((_, count)) => *count += 1,
            None => by_type.push((event.disaster_type.clone(), 1)),
        }
    }
    by_type.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let deadliest = events
        .iter()
        .filter(|e| e.deaths.is_some_and(|d| d > 0.0))
        .max_by(|a, b| {
            a.deaths
                .partial_cmp(&b.deaths)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .and_then(|e| e.event_name.clone().or_else(|| Some(e.id.clone())));

    ChartData::Ready(DisasterSummary {
        country: country.to_string(),
        year,
        events: events.len(),
        total_deaths: sum_present(events.iter().map(|e| e.deaths)),
        total_affected: sum_present(events.iter().map(|e| e.affected)),
        total_damage_usd: sum_present(events.iter().map(|e| e.damage_usd())),
        by_type,
        deadliest,
    })
}
