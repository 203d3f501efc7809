// crates/hazardscope-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A known place with coordinates, used as a geocoding target.
///
/// Loaded from the cities reference dataset and immutable afterwards.
/// Coordinates stay optional here; range validation happens when the
/// per-country gazetteer is built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub name: String,
    pub state_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country_name: String,
}

/// Risk indicators attached to an event's country-year.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RiskIndicators {
    pub world_risk_index: Option<f64>,
    pub exposure: Option<f64>,
    pub vulnerability: Option<f64>,
    pub susceptibility: Option<f64>,
    pub coping_capacity: Option<f64>,
    pub adaptive_capacity: Option<f64>,
    pub average_risk_index: Option<f64>,
    pub disaster_score: Option<f64>,
    pub severity_index: Option<f64>,
}

/// Development indicators attached to an event's country-year.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DevelopmentIndicators {
    pub gdp_per_capita: Option<f64>,
    pub hdi: Option<f64>,
    pub hospital_beds: Option<f64>,
    pub urban_population_pct: Option<f64>,
    pub gov_effectiveness: Option<f64>,
    pub population_density: Option<f64>,
}

/// One disaster event. Read-only once loaded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisasterEvent {
    /// EM-DAT style event identifier (`DisNo.`).
    pub id: String,
    pub country: String,
    pub year: Option<i32>,
    pub disaster_type: String,
    pub subgroup: Option<String>,
    pub subtype: Option<String>,
    pub event_name: Option<String>,
    pub origin: Option<String>,
    /// Free-text location description; input to the resolver when the
    /// direct coordinates are missing.
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub magnitude: Option<f64>,
    pub magnitude_scale: Option<String>,
    pub deaths: Option<f64>,
    pub affected: Option<f64>,
    /// Economic damage in thousands of US dollars, as published.
    pub damage_thousands_usd: Option<f64>,
    pub risk: RiskIndicators,
    pub development: DevelopmentIndicators,
}

impl DisasterEvent {
    /// Economic damage in plain US dollars, when known.
    pub fn damage_usd(&self) -> Option<f64> {
        self.damage_thousands_usd.map(|d| d * 1000.0)
    }

    /// Direct coordinates, only when both are present and in range.
    pub fn direct_coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon))
                if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) =>
            {
                Some((lat, lon))
            }
            _ => None,
        }
    }
}

/// Per country-year rank positions from the ranking table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountryYearRank {
    pub country: String,
    pub year: Option<i32>,
    pub rank_damages: Option<f64>,
    pub rank_risk: Option<f64>,
    pub rank_gdp: Option<f64>,
    pub rank_hdi: Option<f64>,
    pub rank_vulnerability: Option<f64>,
}

/// Impact metrics carried by the annual per-type table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactMetric {
    Deaths,
    Injuries,
    Assistance,
    Damages,
    Affected,
    Homeless,
}

impl ImpactMetric {
    pub const ALL: [ImpactMetric; 6] = [
        ImpactMetric::Deaths,
        ImpactMetric::Injuries,
        ImpactMetric::Assistance,
        ImpactMetric::Damages,
        ImpactMetric::Affected,
        ImpactMetric::Homeless,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImpactMetric::Deaths => "Deaths",
            ImpactMetric::Injuries => "Injuries",
            ImpactMetric::Assistance => "Assistance",
            ImpactMetric::Damages => "Damages",
            ImpactMetric::Affected => "Affected",
            ImpactMetric::Homeless => "Rendered homeless",
        }
    }
}

impl std::str::FromStr for ImpactMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deaths" => Ok(ImpactMetric::Deaths),
            "injuries" => Ok(ImpactMetric::Injuries),
            "assistance" => Ok(ImpactMetric::Assistance),
            "damages" => Ok(ImpactMetric::Damages),
            "affected" => Ok(ImpactMetric::Affected),
            "homeless" => Ok(ImpactMetric::Homeless),
            other => Err(format!("unknown impact metric: {other}")),
        }
    }
}

impl std::fmt::Display for ImpactMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the annual per-type impact table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnualImpact {
    pub country: String,
    pub year: Option<i32>,
    pub disaster_type: String,
    pub deaths: Option<f64>,
    pub injuries: Option<f64>,
    pub assistance: Option<f64>,
    pub damages: Option<f64>,
    pub affected: Option<f64>,
    pub homeless: Option<f64>,
}

impl AnnualImpact {
    pub fn metric(&self, metric: ImpactMetric) -> Option<f64> {
        match metric {
            ImpactMetric::Deaths => self.deaths,
            ImpactMetric::Injuries => self.injuries,
            ImpactMetric::Assistance => self.assistance,
            ImpactMetric::Damages => self.damages,
            ImpactMetric::Affected => self.affected,
            ImpactMetric::Homeless => self.homeless,
        }
    }
}

/// The axes of the risk radar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskDimension {
    WorldRiskIndex,
    Exposure,
    Vulnerability,
    Susceptibility,
    CopingCapacity,
    AdaptiveCapacity,
    AverageRiskIndex,
    DisasterScore,
}

impl RiskDimension {
    pub const ALL: [RiskDimension; 8] = [
        RiskDimension::WorldRiskIndex,
        RiskDimension::Exposure,
        RiskDimension::Vulnerability,
        RiskDimension::Susceptibility,
        RiskDimension::CopingCapacity,
        RiskDimension::AdaptiveCapacity,
        RiskDimension::AverageRiskIndex,
        RiskDimension::DisasterScore,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskDimension::WorldRiskIndex => "World Risk Index",
            RiskDimension::Exposure => "Exposure",
            RiskDimension::Vulnerability => "Vulnerability",
            RiskDimension::Susceptibility => "Susceptibility",
            RiskDimension::CopingCapacity => "Coping Capacity",
            RiskDimension::AdaptiveCapacity => "Adaptive Capacity",
            RiskDimension::AverageRiskIndex => "Average Risk Index",
            RiskDimension::DisasterScore => "Disaster Score",
        }
    }

    pub fn value(&self, risk: &RiskIndicators) -> Option<f64> {
        match self {
            RiskDimension::WorldRiskIndex => risk.world_risk_index,
            RiskDimension::Exposure => risk.exposure,
            RiskDimension::Vulnerability => risk.vulnerability,
            RiskDimension::Susceptibility => risk.susceptibility,
            RiskDimension::CopingCapacity => risk.coping_capacity,
            RiskDimension::AdaptiveCapacity => risk.adaptive_capacity,
            RiskDimension::AverageRiskIndex => risk.average_risk_index,
            RiskDimension::DisasterScore => risk.disaster_score,
        }
    }
}

/// Development indicators selectable as a bubble-chart y-axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indicator {
    GdpPerCapita,
    Hdi,
    HospitalBeds,
    UrbanPopulationPct,
    GovEffectiveness,
    PopulationDensity,
}

impl Indicator {
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::GdpPerCapita => "GDP per capita",
            Indicator::Hdi => "HDI",
            Indicator::HospitalBeds => "Hospital beds",
            Indicator::UrbanPopulationPct => "Urban population %",
            Indicator::GovEffectiveness => "Government effectiveness",
            Indicator::PopulationDensity => "Population density",
        }
    }

    pub fn value(&self, dev: &DevelopmentIndicators) -> Option<f64> {
        match self {
            Indicator::GdpPerCapita => dev.gdp_per_capita,
            Indicator::Hdi => dev.hdi,
            Indicator::HospitalBeds => dev.hospital_beds,
            Indicator::UrbanPopulationPct => dev.urban_population_pct,
            Indicator::GovEffectiveness => dev.gov_effectiveness,
            Indicator::PopulationDensity => dev.population_density,
        }
    }
}

impl std::str::FromStr for Indicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "gdp_per_capita" | "gdp" => Ok(Indicator::GdpPerCapita),
            "hdi" => Ok(Indicator::Hdi),
            "hospital_beds" => Ok(Indicator::HospitalBeds),
            "urban_population_pct" | "urban" => Ok(Indicator::UrbanPopulationPct),
            "gov_effectiveness" => Ok(Indicator::GovEffectiveness),
            "population_density" => Ok(Indicator::PopulationDensity),
            other => Err(format!("unknown indicator: {other}")),
        }
    }
}

/// Simple aggregate statistics for the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreStats {
    pub events: usize,
    pub reference_points: usize,
    pub rankings: usize,
    pub annual_rows: usize,
}

/// The materialized datasets, loaded once at startup and passed by
/// reference to whatever needs them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisasterStore {
    pub events: Vec<DisasterEvent>,
    pub reference: Vec<ReferencePoint>,
    pub rankings: Vec<CountryYearRank>,
    pub annual: Vec<AnnualImpact>,
}

impl DisasterStore {
    /// Aggregate statistics for the store.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            events: self.events.len(),
            reference_points: self.reference.len(),
            rankings: self.rankings.len(),
            annual_rows: self.annual.len(),
        }
    }

    /// Sorted unique event countries — the country dropdown options.
    pub fn countries(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.events.iter().map(|e| e.country.as_str()).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Sorted unique years with events for `country` — the year dropdown.
    pub fn years_for(&self, country: &str) -> Vec<i32> {
        let mut out: Vec<i32> = self
            .events
            .iter()
            .filter(|e| e.country == country)
            .filter_map(|e| e.year)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Default dropdown value: the first option, if any.
    pub fn default_country(&self) -> Option<&str> {
        self.countries().first().copied()
    }

    /// Default year for a country: the first available, if any.
    pub fn default_year(&self, country: &str) -> Option<i32> {
        self.years_for(country).first().copied()
    }

    /// Events matching an exact country name and year.
    pub fn events_for(&self, country: &str, year: i32) -> Vec<&DisasterEvent> {
        self.events
            .iter()
            .filter(|e| e.country == country && e.year == Some(year))
            .collect()
    }

    /// Look up an event by its identifier.
    pub fn event_by_id(&self, id: &str) -> Option<&DisasterEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Ranking row for a country-year, if the table has one.
    pub fn ranks_for(&self, country: &str, year: i32) -> Option<&CountryYearRank> {
        self.rankings
            .iter()
            .find(|r| r.country == country && r.year == Some(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(country: &str, year: i32, id: &str) -> DisasterEvent {
        DisasterEvent {
            id: id.to_string(),
            country: country.to_string(),
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
            risk: RiskIndicators::default(),
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
    fn countries_are_sorted_and_unique() {
        let s = store(vec![
            event("India", 2010, "a"),
            event("Chile", 2010, "b"),
            event("India", 2011, "c"),
        ]);
        assert_eq!(s.countries(), vec!["Chile", "India"]);
        assert_eq!(s.default_country(), Some("Chile"));
    }

    #[test]
    fn years_are_sorted_per_country() {
        let s = store(vec![
            event("India", 2011, "a"),
            event("India", 2004, "b"),
            event("Chile", 1999, "c"),
            event("India", 2011, "d"),
        ]);
        assert_eq!(s.years_for("India"), vec![2004, 2011]);
        assert_eq!(s.default_year("India"), Some(2004));
        assert!(s.years_for("Japan").is_empty());
        assert_eq!(s.default_year("Japan"), None);
    }

    #[test]
    fn direct_coordinates_require_both_in_range() {
        let mut e = event("India", 2010, "a");
        assert_eq!(e.direct_coordinates(), None);
        e.latitude = Some(18.5);
        assert_eq!(e.direct_coordinates(), None);
        e.longitude = Some(73.8);
        assert_eq!(e.direct_coordinates(), Some((18.5, 73.8)));
        e.latitude = Some(123.0);
        assert_eq!(e.direct_coordinates(), None);
    }

    #[test]
    fn damage_is_published_in_thousands() {
        let mut e = event("India", 2010, "a");
        e.damage_thousands_usd = Some(5.0);
        assert_eq!(e.damage_usd(), Some(5000.0));
    }
}
