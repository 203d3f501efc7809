// crates/hazardscope-core/src/lib.rs

//! # hazardscope-core
//!
//! Analytics core for exploring natural-disaster datasets across countries
//! and years: a typed dataset catalog and loader, the fuzzy location
//! resolver that places events on a map when explicit coordinates are
//! missing, and chart-data builders for the dashboard front ends.
//!
//! Typical flow:
//!
//! ```no_run
//! use hazardscope_core::{charts, CountryGazetteer, DisasterStore};
//!
//! # fn main() -> hazardscope_core::Result<()> {
//! let store = DisasterStore::load_from_dir("data")?;
//! let country = store.default_country().unwrap_or("India").to_string();
//! let year = store.default_year(&country).unwrap_or(2010);
//!
//! let gazetteer = CountryGazetteer::build(&store.reference, &country);
//! let map = charts::hotspot_map(&store, &gazetteer, &country, year, 1.0);
//! # Ok(()) }
//! ```

pub mod catalog;
pub mod charts;
pub mod error;
pub mod geocode;
pub mod loader;
pub mod model;
pub mod text;
// Shared raw CSV row shapes, consumed by the loader.
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::charts::ChartData;
pub use crate::error::{HazardError, Result};
pub use crate::geocode::{CountryGazetteer, ResolvedPlace, DEFAULT_THRESHOLD};
pub use crate::model::{
    AnnualImpact, CountryYearRank, DisasterEvent, DisasterStore, ImpactMetric, Indicator,
    ReferencePoint, RiskDimension, StoreStats,
};
