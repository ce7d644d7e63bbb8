//! Intersection Aggregator: volume-weighted control delay across lane groups.
//!
//! Lane groups with an unbounded delay are left out of both the weighted sum
//! and the total volume. One gridlocked group therefore drops out of the
//! average instead of dominating it; `excluded` records how many were left
//! out so the presentation can say so.

use bevy::prelude::*;

use crate::evaluate::LaneGroupResult;
use crate::grades::LosGrade;

/// Intersection-wide delay and grade.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct IntersectionSummary {
    /// Volume-weighted control delay (s/veh); `None` when no volume counted.
    pub weighted_delay: Option<f64>,
    pub level_of_service: Option<LosGrade>,
    /// Sum of entered volumes over the lane groups that were counted (veh/h).
    pub total_volume: f64,
    /// Number of lane groups dropped for an unbounded delay.
    pub excluded: usize,
}

/// Aggregate `(entered volume, result)` pairs into an intersection summary.
///
/// Weights are the entered volumes (floored at zero), not the peak-adjusted
/// demand.
pub fn aggregate<'a, I>(results: I) -> IntersectionSummary
where
    I: IntoIterator<Item = (f64, &'a LaneGroupResult)>,
{
    let mut total_volume = 0.0;
    let mut weighted_sum = 0.0;
    let mut excluded = 0;

    for (volume, result) in results {
        if !result.total_delay.is_finite() {
            excluded += 1;
            continue;
        }
        let volume = if volume.is_finite() { volume.max(0.0) } else { 0.0 };
        total_volume += volume;
        weighted_sum += volume * result.total_delay;
    }

    let weighted_delay = if total_volume > 0.0 {
        Some(weighted_sum / total_volume)
    } else {
        None
    };

    IntersectionSummary {
        weighted_delay,
        level_of_service: weighted_delay.and_then(LosGrade::from_delay),
        total_volume,
        excluded,
    }
}
