// crates/hazardscope-core/src/charts/parallel.rs
use super::ChartData;
use crate::model::{DisasterEvent, DisasterStore};
use serde::Serialize;

/// The themed axis sets of the parallel-coordinates view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ParallelTheme {
    RiskVsOutcome,
    WealthVsImpact,
    VulnerabilityPath,
}

type Extract = fn(&DisasterEvent) -> Option<f64>;

struct Axis {
    label: &'static str,
    extract: Extract,
}

const RISK_VS_OUTCOME_AXES: &[Axis] = &[
    Axis {
        label: "World Risk Index",
        extract: |e| e.risk.world_risk_index,
    },
    Axis {
        label: "Disaster Severity Index",
        extract: |e| e.risk.severity_index,
    },
    Axis {
        label: "Total Damage ('000 US$)",
        extract: |e| e.damage_thousands_usd,
    },
    Axis {
        label: "Coping Capacity",
        extract: |e| e.risk.coping_capacity,
    },
    Axis {
        label: "Adaptive Capacity",
        extract: |e| e.risk.adaptive_capacity,
    },
];

const WEALTH_VS_IMPACT_AXES: &[Axis] = &[
    Axis {
        label: "GDP per capita",
        extract: |e| e.development.gdp_per_capita,
    },
    Axis {
        label: "HDI",
        extract: |e| e.development.hdi,
    },
    Axis {
        label: "Hospital beds",
        extract: |e| e.development.hospital_beds,
    },
    Axis {
        label: "Urban population %",
        extract: |e| e.development.urban_population_pct,
    },
    Axis {
        label: "Disaster Severity Index",
        extract: |e| e.risk.severity_index,
    },
    Axis {
        label: "Total Damage ('000 US$)",
        extract: |e| e.damage_thousands_usd,
    },
];

const VULNERABILITY_PATH_AXES: &[Axis] = &[
    Axis {
        label: "Vulnerability",
        extract: |e| e.risk.vulnerability,
    },
    Axis {
        label: "Exposure",
        extract: |e| e.risk.exposure,
    },
    Axis {
        label: "Coping Capacity",
        extract: |e| e.risk.coping_capacity,
    },
    Axis {
        label: "Adaptive Capacity",
        extract: |e| e.risk.adaptive_capacity,
    },
    Axis {
        label: "Government effectiveness",
        extract: |e| e.development.gov_effectiveness,
    },
    Axis {
        label: "Disaster Severity Index",
        extract: |e| e.risk.severity_index,
    },
];

impl ParallelTheme {
    pub fn title(&self) -> &'static str {
        match self {
            ParallelTheme::RiskVsOutcome => "Risk & Capacity vs Disaster Outcomes",
            ParallelTheme::WealthVsImpact => "Wealth, Health & Urbanization vs Impact",
            ParallelTheme::VulnerabilityPath => "Vulnerability Pathways",
        }
    }

    fn axes(&self) -> &'static [Axis] {
        match self {
            ParallelTheme::RiskVsOutcome => RISK_VS_OUTCOME_AXES,
            ParallelTheme::WealthVsImpact => WEALTH_VS_IMPACT_AXES,
            ParallelTheme::VulnerabilityPath => VULNERABILITY_PATH_AXES,
        }
    }
}

impl std::str::FromStr for ParallelTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "risk_vs_outcome" => Ok(ParallelTheme::RiskVsOutcome),
            "wealth_vs_impact" => Ok(ParallelTheme::WealthVsImpact),
            "vulnerability_path" => Ok(ParallelTheme::VulnerabilityPath),
            other => Err(format!("unknown parallel theme: {other}")),
        }
    }
}

/// Rows for one parallel-coordinates figure.
#[derive(Clone, Debug, Serialize)]
pub struct ParallelData {
    pub title: &'static str,
    pub axes: Vec<&'static str>,
    /// One value per axis per qualifying event.
    pub rows: Vec<Vec<f64>>,
    /// Line color driver: the first axis value of each row.
    pub color: Vec<f64>,
}

/// Build the rows for a themed parallel-coordinates view. Only events with
/// every axis value present contribute a line.
pub fn parallel_coordinates(
    store: &DisasterStore,
    theme: ParallelTheme,
) -> ChartData<ParallelData> {
    let axes = theme.axes();

    let rows: Vec<Vec<f64>> = store
        .events
        .iter()
        .filter_map(|event| {
            axes.iter()
                .map(|axis| (axis.extract)(event))
                .collect::<Option<Vec<f64>>>()
        })
        .collect();

    if rows.is_empty() {
        return ChartData::Insufficient(format!(
            "no events carry every axis of \"{}\"",
            theme.title()
        ));
    }

    let color = rows.iter().map(|r| r[0]).collect();

    ChartData::Ready(ParallelData {
        title: theme.title(),
        axes: axes.iter().map(|a| a.label).collect(),
        rows,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DevelopmentIndicators, RiskIndicators};

    fn full_event(id: &str) -> DisasterEvent {
        DisasterEvent {
            id: id.to_string(),
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
            deaths: None,
            affected: None,
            damage_thousands_usd: Some(250.0),
            risk: RiskIndicators {
                world_risk_index: Some(7.0),
                severity_index: Some(3.0),
                coping_capacity: Some(60.0),
                adaptive_capacity: Some(40.0),
                ..RiskIndicators::default()
            },
            development: DevelopmentIndicators::default(),
        }
    }

    #[test]
    fn complete_rows_only() {
        let mut partial = full_event("partial");
        partial.risk.coping_capacity = None;

        let store = DisasterStore {
            events: vec![full_event("a"), partial, full_event("b")],
            reference: Vec::new(),
            rankings: Vec::new(),
            annual: Vec::new(),
        };

        let data = parallel_coordinates(&store, ParallelTheme::RiskVsOutcome)
            .ready()
            .expect("data");
        assert_eq!(data.axes.len(), 5);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0], vec![7.0, 3.0, 250.0, 60.0, 40.0]);
        assert_eq!(data.color, vec![7.0, 7.0]);
    }

    #[test]
    fn theme_without_coverage_is_insufficient() {
        let store = DisasterStore {
            events: vec![full_event("a")],
            reference: Vec::new(),
            rankings: Vec::new(),
            annual: Vec::new(),
        };
        // Wealth axes need development indicators these events lack.
        assert!(!parallel_coordinates(&store, ParallelTheme::WealthVsImpact).is_ready());
    }

    #[test]
    fn themes_parse_from_cli_spellings() {
        assert_eq!(
            "risk-vs-outcome".parse::<ParallelTheme>(),
            Ok(ParallelTheme::RiskVsOutcome)
        );
        assert!("upside-down".parse::<ParallelTheme>().is_err());
    }
}
