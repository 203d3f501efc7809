// crates/hazardscope-core/src/charts/mod.rs

//! # Chart Data Builders
//!
//! Every builder distills a country/year/metric selection into the data a
//! front end plots, and returns [`ChartData`]: either a `Ready` payload or
//! an `Insufficient` outcome naming why there is nothing to draw. The
//! front end renders a deliberate placeholder for `Insufficient` instead
//! of a silently empty figure, and programming errors propagate as errors
//! rather than being masked.

pub mod breakdown;
pub mod bubble;
pub mod hotspot;
pub mod metrics;
pub mod parallel;
pub mod radar;

pub use breakdown::{metric_shares, type_breakdown, MetricShare, TypeCount};
pub use bubble::{bubble_points, BubblePoint, SizeMetric};
pub use hotspot::{
    disaster_summary, hotspot_map, DisasterSummary, HotspotMap, HotspotMarker, MarkerSource,
    DEFAULT_MIN_DEATHS,
};
pub use metrics::{metrics_card, MetricsCard};
pub use parallel::{parallel_coordinates, ParallelData, ParallelTheme};
pub use radar::{risk_profile, risk_profiles, RadarAxis, RadarProfile};

/// Outcome of a chart-data builder.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData<T> {
    /// Enough data to draw.
    Ready(T),
    /// The selection matched nothing worth drawing; the string explains
    /// what was missing, suitable for an on-screen placeholder.
    Insufficient(String),
}

impl<T> ChartData<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ChartData::Ready(_))
    }

    /// The payload, if ready.
    pub fn ready(self) -> Option<T> {
        match self {
            ChartData::Ready(t) => Some(t),
            ChartData::Insufficient(_) => None,
        }
    }

    /// The placeholder text, if insufficient.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ChartData::Ready(_) => None,
            ChartData::Insufficient(reason) => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ChartData<U> {
        match self {
            ChartData::Ready(t) => ChartData::Ready(f(t)),
            ChartData::Insufficient(reason) => ChartData::Insufficient(reason),
        }
    }
}

/// Sum of the present values; `None` when every input is missing.
/// Distinguishes "no data at all" from a legitimate zero total.
pub(crate) fn sum_present<I>(iter: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut any = false;
    let mut total = 0.0;
    for v in iter.into_iter().flatten() {
        any = true;
        total += v;
    }
    any.then_some(total)
}

/// Mean of the present values; `None` when every input is missing.
pub(crate) fn mean_present<I>(iter: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut count = 0usize;
    let mut total = 0.0;
    for v in iter.into_iter().flatten() {
        count += 1;
        total += v;
    }
    (count > 0).then(|| total / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_data_accessors() {
        let ready: ChartData<u32> = ChartData::Ready(7);
        assert!(ready.is_ready());
        assert_eq!(ready.clone().ready(), Some(7));
        assert_eq!(ready.reason(), None);

        let gap: ChartData<u32> = ChartData::Insufficient("nothing selected".into());
        assert!(!gap.is_ready());
        assert_eq!(gap.reason(), Some("nothing selected"));
        assert_eq!(gap.ready(), None);
    }

    #[test]
    fn sums_and_means_skip_missing_values() {
        assert_eq!(sum_present([Some(1.0), None, Some(2.0)]), Some(3.0));
        assert_eq!(sum_present([None, None]), None);
        assert_eq!(mean_present([Some(2.0), None, Some(4.0)]), Some(3.0));
        assert_eq!(mean_present::<[Option<f64>; 0]>([]), None);
    }
}
