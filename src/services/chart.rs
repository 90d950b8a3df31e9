//! Risk distribution to chart series projection.

use crate::models::stats::{RiskBucket, RiskSeriesPoint};

/// Project a risk distribution into a chart-ready series.
///
/// Pure element-wise mapping: order preserved, no filtering, sorting or
/// merging of duplicate labels. The output always has exactly as many points
/// as the input has buckets.
pub fn risk_series(distribution: &[RiskBucket]) -> Vec<RiskSeriesPoint> {
    distribution
        .iter()
        .map(|bucket| RiskSeriesPoint {
            label: bucket.label.clone(),
            value: bucket.value,
        })
        .collect()
}
