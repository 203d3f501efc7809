// crates/hazardscope-core/src/loader/convert.rs
//
// Raw CSV rows → domain model. Value-level problems (empty cells, `N/A`,
// float-rendered years) become `None`s; only rows missing their identity
// columns are dropped, and drops are counted in the logs.

use crate::model::{
    AnnualImpact, CountryYearRank, DevelopmentIndicators, DisasterEvent, ReferencePoint,
    RiskIndicators,
};
use crate::raw::{AnnualRow, CityRow, EventRow, RankRow};
use crate::text::{non_empty, parse_opt_f64};

fn parse_opt_year(s: &Option<String>) -> Option<i32> {
    parse_opt_f64(s).map(|v| v as i32)
}

pub(super) fn reference_points(rows: Vec<CityRow>) -> Vec<ReferencePoint> {
    let total = rows.len();
    let out: Vec<ReferencePoint> = rows
        .into_iter()
        .filter_map(|row| {
            let name = non_empty(row.name)?;
            let country_name = non_empty(row.country_name)?;
            Some(ReferencePoint {
                latitude: parse_opt_f64(&row.latitude),
                longitude: parse_opt_f64(&row.longitude),
                name,
                state_name: non_empty(row.state_name),
                country_name,
            })
        })
        .collect();

    if out.len() < total {
        tracing::debug!(
            dropped = total - out.len(),
            "reference rows without a name or country skipped"
        );
    }
    out
}

pub(super) fn events(rows: Vec<EventRow>) -> Vec<DisasterEvent> {
    let total = rows.len();
    let out: Vec<DisasterEvent> = rows
        .into_iter()
        .filter_map(|row| {
            let id = non_empty(row.dis_no)?;
            let country = non_empty(row.country)?;
            let disaster_type = non_empty(row.disaster_type)?;
            Some(DisasterEvent {
                year: parse_opt_year(&row.start_year),
                subgroup: non_empty(row.subgroup),
                subtype: non_empty(row.subtype),
                event_name: non_empty(row.event_name),
                origin: non_empty(row.origin),
                location: non_empty(row.location),
                latitude: parse_opt_f64(&row.latitude),
                longitude: parse_opt_f64(&row.longitude),
                magnitude: parse_opt_f64(&row.magnitude),
                magnitude_scale: non_empty(row.magnitude_scale),
                deaths: parse_opt_f64(&row.total_deaths),
                affected: parse_opt_f64(&row.total_affected),
                damage_thousands_usd: parse_opt_f64(&row.total_damage_thousands),
                risk: RiskIndicators {
                    world_risk_index: parse_opt_f64(&row.world_risk_index),
                    exposure: parse_opt_f64(&row.exposure),
                    vulnerability: parse_opt_f64(&row.vulnerability),
                    susceptibility: parse_opt_f64(&row.susceptibility),
                    coping_capacity: parse_opt_f64(&row.coping_capacity),
                    adaptive_capacity: parse_opt_f64(&row.adaptive_capacity),
                    average_risk_index: parse_opt_f64(&row.average_risk_index),
                    disaster_score: parse_opt_f64(&row.disaster_score),
                    severity_index: parse_opt_f64(&row.severity_index),
                },
                development: DevelopmentIndicators {
                    gdp_per_capita: parse_opt_f64(&row.gdp_per_capita),
                    hdi: parse_opt_f64(&row.hdi),
                    hospital_beds: parse_opt_f64(&row.hospital_beds),
                    urban_population_pct: parse_opt_f64(&row.urban_population_pct),
                    gov_effectiveness: parse_opt_f64(&row.gov_effectiveness),
                    population_density: parse_opt_f64(&row.population_density),
                },
                id,
                country,
                disaster_type,
            })
        })
        .collect();

    if out.len() < total {
        tracing::debug!(
            dropped = total - out.len(),
            "event rows without id, country or type skipped"
        );
    }
    out
}

pub(super) fn rankings(rows: Vec<RankRow>) -> Vec<CountryYearRank> {
    rows.into_iter()
        .filter_map(|row| {
            let country = non_empty(row.country)?;
            Some(CountryYearRank {
                year: parse_opt_year(&row.start_year),
                rank_damages: parse_opt_f64(&row.rank_damages),
                rank_risk: parse_opt_f64(&row.rank_risk),
                rank_gdp: parse_opt_f64(&row.rank_gdp),
                rank_hdi: parse_opt_f64(&row.rank_hdi),
                rank_vulnerability: parse_opt_f64(&row.rank_vulnerability),
                country,
            })
        })
        .collect()
}

pub(super) fn annual_impacts(rows: Vec<AnnualRow>) -> Vec<AnnualImpact> {
    rows.into_iter()
        .filter_map(|row| {
            let country = non_empty(row.country)?;
            let disaster_type = non_empty(row.disaster_type)?;
            Some(AnnualImpact {
                year: parse_opt_year(&row.year),
                deaths: parse_opt_f64(&row.deaths),
                injuries: parse_opt_f64(&row.injuries),
                assistance: parse_opt_f64(&row.assistance),
                damages: parse_opt_f64(&row.damages),
                affected: parse_opt_f64(&row.affected),
                homeless: parse_opt_f64(&row.homeless),
                country,
                disaster_type,
            })
        })
        .collect()
}
