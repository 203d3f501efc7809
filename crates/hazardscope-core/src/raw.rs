// crates/hazardscope-core/src/raw.rs
//
// Row structs exactly mirroring the CSV headers. Numeric-ish columns stay
// `Option<String>` here and are parsed during materialization (see
// `loader::convert`), because the source tables render missing values as
// empty cells, `N/A`, or pandas floats.
//
// These types are an ingestion detail and are not exposed from the crate.

use serde::Deserialize;

/// One row of `cities.csv` — a candidate reference point.
#[derive(Debug, Deserialize)]
pub struct CityRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
}

/// One row of `risk_events.csv` — a disaster event joined with the
/// risk/development indicators of its country-year.
#[derive(Debug, Deserialize)]
pub struct EventRow {
    #[serde(rename = "DisNo.", default)]
    pub dis_no: Option<String>,
    #[serde(rename = "Country_x", default)]
    pub country: Option<String>,
    #[serde(rename = "Start Year", default)]
    pub start_year: Option<String>,
    #[serde(rename = "Disaster Type", default)]
    pub disaster_type: Option<String>,
    #[serde(rename = "Disaster Subgroup", default)]
    pub subgroup: Option<String>,
    #[serde(rename = "Disaster Subtype", default)]
    pub subtype: Option<String>,
    #[serde(rename = "Event Name", default)]
    pub event_name: Option<String>,
    #[serde(rename = "Origin", default)]
    pub origin: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<String>,
    #[serde(rename = "Magnitude", default)]
    pub magnitude: Option<String>,
    #[serde(rename = "Magnitude Scale", default)]
    pub magnitude_scale: Option<String>,
    #[serde(rename = "Total Deaths", default)]
    pub total_deaths: Option<String>,
    #[serde(rename = "Total Affected", default)]
    pub total_affected: Option<String>,
    #[serde(rename = "Total Damage ('000 US$)", default)]
    pub total_damage_thousands: Option<String>,
    #[serde(rename = "World Risk Index", default)]
    pub world_risk_index: Option<String>,
    #[serde(rename = "Exposure", default)]
    pub exposure: Option<String>,
    #[serde(rename = "Vulnerability", default)]
    pub vulnerability: Option<String>,
    #[serde(rename = "Susceptibility", default)]
    pub susceptibility: Option<String>,
    #[serde(rename = "Coping Capacity", default)]
    pub coping_capacity: Option<String>,
    #[serde(rename = "Adaptive Capacity", default)]
    pub adaptive_capacity: Option<String>,
    #[serde(rename = "Average_Risk_Index", default)]
    pub average_risk_index: Option<String>,
    #[serde(rename = "Disaster_Score", default)]
    pub disaster_score: Option<String>,
    #[serde(rename = "Disaster Severity Index", default)]
    pub severity_index: Option<String>,
    #[serde(rename = "gdp_per_capita", default)]
    pub gdp_per_capita: Option<String>,
    #[serde(rename = "hdi", default)]
    pub hdi: Option<String>,
    #[serde(rename = "hospital_beds", default)]
    pub hospital_beds: Option<String>,
    #[serde(rename = "urban_population_pct", default)]
    pub urban_population_pct: Option<String>,
    #[serde(rename = "gov_effectiveness", default)]
    pub gov_effectiveness: Option<String>,
    #[serde(rename = "population_density", default)]
    pub population_density: Option<String>,
}

/// One row of `ranked_data.csv`.
#[derive(Debug, Deserialize)]
pub struct RankRow {
    #[serde(rename = "Country_x", default)]
    pub country: Option<String>,
    #[serde(rename = "Start Year", default)]
    pub start_year: Option<String>,
    #[serde(default)]
    pub rank_damages: Option<String>,
    #[serde(rename = "rank_risk_y", default)]
    pub rank_risk: Option<String>,
    #[serde(default)]
    pub rank_gdp: Option<String>,
    #[serde(rename = "rank_hdi_y", default)]
    pub rank_hdi: Option<String>,
    #[serde(default)]
    pub rank_vulnerability: Option<String>,
}

/// One row of `annual_impacts.csv` — yearly per-type impact totals.
#[derive(Debug, Deserialize)]
pub struct AnnualRow {
    #[serde(rename = "Country name", default)]
    pub country: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Disaster Type", default)]
    pub disaster_type: Option<String>,
    #[serde(rename = "Deaths", default)]
    pub deaths: Option<String>,
    #[serde(rename = "Injuries", default)]
    pub injuries: Option<String>,
    #[serde(rename = "Assistance", default)]
    pub assistance: Option<String>,
    #[serde(rename = "Damages", default)]
    pub damages: Option<String>,
    #[serde(rename = "Affected", default)]
    pub affected: Option<String>,
    #[serde(rename = "Rendered homeless", default)]
    pub homeless: Option<String>,
}
