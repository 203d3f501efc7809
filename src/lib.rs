//! hazardscope
//! ===========
//!
//! Workspace facade crate: re-exports the public API of `hazardscope-core`
//! so the demos under `demos/` and dev tooling have a single import root.
//! Applications should depend on `hazardscope-core` directly.

pub use hazardscope_core::*;

/// Convenience imports for the demos.
pub mod prelude {
    pub use hazardscope_core::charts::{self, ChartData};
    pub use hazardscope_core::{
        CountryGazetteer, DisasterStore, HazardError, ImpactMetric, ResolvedPlace, Result,
        DEFAULT_THRESHOLD,
    };
}
