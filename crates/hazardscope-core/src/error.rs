// crates/hazardscope-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while locating, reading or materializing the datasets.
///
/// Matching failures are *not* errors: a location that resolves to nothing,
/// or a chart filter that selects no rows, is a normal outcome and is
/// reported through `Option` / [`crate::charts::ChartData`] instead.
#[derive(Debug, Error)]
pub enum HazardError {
    /// A dataset listed in the catalog has no file in the data directory.
    #[error("required dataset `{name}` not found (looked for {path})")]
    DatasetMissing { name: &'static str, path: PathBuf },

    /// A dataset file exists but lacks a column the catalog requires.
    #[error("dataset `{dataset}` is missing required column `{column}`")]
    MissingColumn {
        dataset: &'static str,
        column: &'static str,
    },

    /// A row failed to deserialize against the dataset's header.
    #[error("dataset `{dataset}`: {source}")]
    MalformedRow {
        dataset: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Binary cache (de)serialization failure. Reads fall back to the CSVs;
    /// this only escapes on an explicit cache write request.
    #[error("store cache: {0}")]
    Cache(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, HazardError>;
