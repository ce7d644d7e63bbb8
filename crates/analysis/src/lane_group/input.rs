//! Numeric parameters of one lane group and their normalization.

use crate::config::{
    ARRIVAL_TYPE_FALLBACK, DEMAND_MULTIPLIER_FALLBACK, EFFECTIVE_GREEN_FALLBACK, GREEN_EPSILON,
    HEAVY_VEHICLE_PERCENT_FALLBACK, HEAVY_VEHICLE_PERCENT_MAX, LANE_COUNT_FALLBACK,
    LANE_WIDTH_FALLBACK_FT, PASSENGER_CAR_EQUIVALENT_FALLBACK, PASSENGER_CAR_EQUIVALENT_MIN,
    PEAK_HOUR_FACTOR_FALLBACK, PEAK_HOUR_FACTOR_MAX, PEAK_HOUR_FACTOR_MIN,
    SATURATION_FLOW_FALLBACK, SATURATION_FLOW_MIN, STARTUP_LOSS_FALLBACK, VOLUME_FALLBACK,
};
use crate::timing::clamp_or;

/// Traffic, geometry and control parameters of a single lane group.
///
/// Values may be constructed freely; [`LaneGroupInput::normalized`] is the
/// one place that clamps them and replaces non-finite values, and the
/// evaluator always normalizes before computing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneGroupInput {
    /// Entered hourly volume (veh/h).
    pub volume: f64,
    pub peak_hour_factor: f64,
    /// Scenario multiplier applied to the entered volume.
    pub demand_multiplier: f64,
    pub lane_count: u32,
    /// Effective green as entered (s), before startup loss is subtracted.
    pub effective_green: f64,
    pub startup_loss: f64,
    /// Base saturation flow per lane (veh/h/ln).
    pub base_saturation_flow: f64,
    pub heavy_vehicle_percent: f64,
    pub passenger_car_equivalent: f64,
    pub lane_width_ft: f64,
    /// Arrival type category 1-6; anything else is neutral.
    pub arrival_type: i32,
}

impl Default for LaneGroupInput {
    fn default() -> Self {
        Self {
            volume: VOLUME_FALLBACK,
            peak_hour_factor: PEAK_HOUR_FACTOR_FALLBACK,
            demand_multiplier: DEMAND_MULTIPLIER_FALLBACK,
            lane_count: LANE_COUNT_FALLBACK,
            effective_green: EFFECTIVE_GREEN_FALLBACK,
            startup_loss: STARTUP_LOSS_FALLBACK,
            base_saturation_flow: SATURATION_FLOW_FALLBACK,
            heavy_vehicle_percent: HEAVY_VEHICLE_PERCENT_FALLBACK,
            passenger_car_equivalent: PASSENGER_CAR_EQUIVALENT_FALLBACK,
            lane_width_ft: LANE_WIDTH_FALLBACK_FT,
            arrival_type: ARRIVAL_TYPE_FALLBACK,
        }
    }
}

impl LaneGroupInput {
    /// Return a copy with every field clamped to its valid range and every
    /// non-finite value replaced by its documented fallback.
    ///
    /// Idempotent: normalizing a normalized input is a no-op.
    pub fn normalized(&self) -> Self {
        Self {
            volume: finite_or(self.volume, VOLUME_FALLBACK).max(0.0),
            peak_hour_factor: clamp_or(
                self.peak_hour_factor,
                PEAK_HOUR_FACTOR_FALLBACK,
                PEAK_HOUR_FACTOR_MIN,
                PEAK_HOUR_FACTOR_MAX,
            ),
            demand_multiplier: finite_or(self.demand_multiplier, DEMAND_MULTIPLIER_FALLBACK)
                .max(0.0),
            lane_count: self.lane_count.max(1),
            effective_green: finite_or(self.effective_green, EFFECTIVE_GREEN_FALLBACK)
                .max(GREEN_EPSILON),
            startup_loss: finite_or(self.startup_loss, STARTUP_LOSS_FALLBACK).max(0.0),
            base_saturation_flow: finite_or(self.base_saturation_flow, SATURATION_FLOW_FALLBACK)
                .max(SATURATION_FLOW_MIN),
            heavy_vehicle_percent: clamp_or(
                self.heavy_vehicle_percent,
                HEAVY_VEHICLE_PERCENT_FALLBACK,
                0.0,
                HEAVY_VEHICLE_PERCENT_MAX,
            ),
            passenger_car_equivalent: finite_or(
                self.passenger_car_equivalent,
                PASSENGER_CAR_EQUIVALENT_FALLBACK,
            )
            .max(PASSENGER_CAR_EQUIVALENT_MIN),
            lane_width_ft: finite_or(self.lane_width_ft, LANE_WIDTH_FALLBACK_FT),
            arrival_type: self.arrival_type,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
