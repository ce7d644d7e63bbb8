//! Lane Group Evaluator.
//!
//! Turns one lane group's parameters plus the shared intersection timing into
//! capacity, v/c ratio, control delay and a LOS grade. The computation is a
//! pure, total function: singular denominators and vanishing capacity produce
//! `f64::INFINITY` rather than an error or NaN, and an unbounded delay has no
//! grade.
//!
//! Delay model:
//! - uniform delay (Webster): `d1 = 0.5 C (1 - g/C)^2 / (1 - min(1, X) g/C)`
//! - incremental delay: `d2 = 900 T [(X - 1) + sqrt((X - 1)^2 + 16 k X / (c T))]`
//! - control delay: `(d1 + d2) * f_arrival`

pub mod factors;

#[cfg(test)]
mod tests;

pub use factors::{arrival_type_factor, heavy_vehicle_factor, lane_width_factor};

use crate::config::{
    ANALYSIS_PERIOD_EPSILON, CAPACITY_EPSILON, DENOMINATOR_EPSILON, GREEN_EPSILON,
    MAX_GREEN_RATIO,
};
use crate::grades::LosGrade;
use crate::lane_group::LaneGroupInput;
use crate::timing::IntersectionTiming;

/// Everything derived for one lane group. Recomputed from scratch whenever
/// its input or the timing changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneGroupResult {
    /// Peak-rate demand (veh/h).
    pub adjusted_demand: f64,
    /// Effective green minus startup loss (s).
    pub effective_green_after_loss: f64,
    /// g/C after clamping.
    pub green_ratio: f64,
    /// Lane-group total saturation flow (veh/h).
    pub effective_saturation_flow: f64,
    /// Capacity (veh/h).
    pub capacity: f64,
    /// X; `INFINITY` when there is no usable capacity.
    pub volume_to_capacity: f64,
    pub uniform_delay: f64,
    pub incremental_delay: f64,
    /// Control delay (s/veh); `INFINITY` when unbounded.
    pub total_delay: f64,
    /// `None` when the delay is unbounded.
    pub level_of_service: Option<LosGrade>,
    pub lane_width_factor: f64,
    pub heavy_vehicle_factor: f64,
    pub arrival_type_factor: f64,
}

impl LaneGroupResult {
    /// Whether the delay (and therefore the grade) is defined.
    pub fn is_bounded(&self) -> bool {
        self.total_delay.is_finite()
    }
}

/// Evaluate one lane group against the intersection timing.
pub fn evaluate(input: &LaneGroupInput, timing: &IntersectionTiming) -> LaneGroupResult {
    let input = input.normalized();
    let cycle = timing.cycle_length();
    let period = timing.analysis_period();
    let k = timing.calibration();

    let adjusted_demand = input.volume * input.demand_multiplier / input.peak_hour_factor;

    let effective_green_after_loss = (input.effective_green - input.startup_loss).max(GREEN_EPSILON);
    let green_ratio = (effective_green_after_loss / cycle).clamp(GREEN_EPSILON, MAX_GREEN_RATIO);

    let f_width = lane_width_factor(input.lane_width_ft);
    let f_hv = heavy_vehicle_factor(input.heavy_vehicle_percent, input.passenger_car_equivalent);

    let effective_saturation_flow =
        input.base_saturation_flow * input.lane_count as f64 * f_width * f_hv;
    let capacity = effective_saturation_flow * green_ratio;

    // Capacity at or below the epsilon counts as none, not as a tiny positive
    // value that would give an astronomically large but finite v/c.
    let has_capacity = capacity > CAPACITY_EPSILON;
    let volume_to_capacity = if has_capacity {
        adjusted_demand / capacity
    } else {
        f64::INFINITY
    };

    let uniform_delay = uniform_delay(cycle, green_ratio, volume_to_capacity);
    let incremental_delay = if volume_to_capacity.is_finite() && has_capacity {
        incremental_delay(volume_to_capacity, capacity, period, k)
    } else {
        f64::INFINITY
    };

    let f_arrival = arrival_type_factor(input.arrival_type);
    let total_delay = (uniform_delay + incremental_delay) * f_arrival;

    LaneGroupResult {
        adjusted_demand,
        effective_green_after_loss,
        green_ratio,
        effective_saturation_flow,
        capacity,
        volume_to_capacity,
        uniform_delay,
        incremental_delay,
        total_delay,
        level_of_service: LosGrade::from_delay(total_delay),
        lane_width_factor: f_width,
        heavy_vehicle_factor: f_hv,
        arrival_type_factor: f_arrival,
    }
}

/// Webster uniform delay. The v/c ratio is capped at 1 in the denominator.
fn uniform_delay(cycle: f64, green_ratio: f64, volume_to_capacity: f64) -> f64 {
    let denominator = 1.0 - volume_to_capacity.min(1.0) * green_ratio;
    if denominator > DENOMINATOR_EPSILON {
        0.5 * cycle * (1.0 - green_ratio).powi(2) / denominator
    } else {
        f64::INFINITY
    }
}

/// Incremental (overflow) delay, floored at zero. The radicand is floored at
/// zero before the square root so an undersaturated group never yields NaN.
fn incremental_delay(volume_to_capacity: f64, capacity: f64, period: f64, k: f64) -> f64 {
    let x = volume_to_capacity;
    let term = 16.0 * k * x / (capacity * period.max(ANALYSIS_PERIOD_EPSILON));
    let inside = (x - 1.0).powi(2) + term;
    let d2 = 900.0 * period * ((x - 1.0) + inside.max(0.0).sqrt());
    d2.max(0.0)
}
