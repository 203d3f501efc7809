// crates/hazardscope-core/src/catalog.rs

//! # Dataset Catalog
//!
//! The fixed list of datasets the store is built from, with the columns
//! each one must provide. Loading fails fast with a descriptive error when
//! a file or column is absent — there is no "find any CSV that looks right"
//! fallback.

use crate::error::{HazardError, Result};
use std::path::{Path, PathBuf};

/// A required dataset: logical name, file stem, and required columns.
#[derive(Debug, Clone, Copy)]
pub struct DatasetSpec {
    /// Logical name used in errors and logs.
    pub name: &'static str,
    /// File stem inside the data directory; `<stem>.csv` or `<stem>.csv.gz`.
    pub stem: &'static str,
    /// Columns that must be present in the header.
    pub columns: &'static [&'static str],
}

/// Reference places with coordinates, the geocoding targets.
pub const CITIES: DatasetSpec = DatasetSpec {
    name: "cities",
    stem: "cities",
    columns: &["name", "state_name", "latitude", "longitude", "country_name"],
};

/// Per-event table joined with risk and development indicators.
pub const RISK_EVENTS: DatasetSpec = DatasetSpec {
    name: "risk_events",
    stem: "risk_events",
    columns: &[
        "DisNo.",
        "Country_x",
        "Start Year",
        "Disaster Type",
        "Location",
        "Latitude",
        "Longitude",
        "Total Deaths",
        "Total Affected",
        "Total Damage ('000 US$)",
    ],
};

/// Country-year ranking table.
pub const RANKINGS: DatasetSpec = DatasetSpec {
    name: "ranked_data",
    stem: "ranked_data",
    columns: &["Country_x", "Start Year"],
};

/// Annual per-type impact totals.
pub const ANNUAL_IMPACTS: DatasetSpec = DatasetSpec {
    name: "annual_impacts",
    stem: "annual_impacts",
    columns: &["Country name", "Year", "Disaster Type"],
};

/// Every dataset the loader requires, in load order.
pub const CATALOG: [DatasetSpec; 4] = [CITIES, RISK_EVENTS, RANKINGS, ANNUAL_IMPACTS];

impl DatasetSpec {
    /// Resolve the dataset's file inside `dir`.
    ///
    /// Plain CSV wins over the gzip variant when both exist.
    pub fn locate(&self, dir: &Path) -> Result<PathBuf> {
        let plain = dir.join(format!("{}.csv", self.stem));
        if plain.is_file() {
            return Ok(plain);
        }
        let gz = dir.join(format!("{}.csv.gz", self.stem));
        if gz.is_file() {
            return Ok(gz);
        }
        Err(HazardError::DatasetMissing {
            name: self.name,
            path: plain,
        })
    }

    /// Check a parsed CSV header against the required columns.
    pub fn verify_header(&self, headers: &csv::StringRecord) -> Result<()> {
        for column in self.columns {
            if !headers.iter().any(|h| h == *column) {
                return Err(HazardError::MissingColumn {
                    dataset: self.name,
                    column,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_header_accepts_superset() {
        let headers = csv::StringRecord::from(vec![
            "name",
            "state_name",
            "latitude",
            "longitude",
            "country_name",
            "wikiDataId",
        ]);
        assert!(CITIES.verify_header(&headers).is_ok());
    }

    #[test]
    fn verify_header_names_the_missing_column() {
        let headers = csv::StringRecord::from(vec!["name", "latitude", "longitude"]);
        let err = CITIES.verify_header(&headers).unwrap_err();
        match err {
            HazardError::MissingColumn { dataset, column } => {
                assert_eq!(dataset, "cities");
                assert_eq!(column, "state_name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn locate_reports_the_expected_path() {
        let dir = std::env::temp_dir().join("hazardscope-definitely-missing");
        let err = RISK_EVENTS.locate(&dir).unwrap_err();
        match err {
            HazardError::DatasetMissing { name, path } => {
                assert_eq!(name, "risk_events");
                assert!(path.ends_with("risk_events.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
