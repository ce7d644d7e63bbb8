//! Intersection-wide signal timing shared by every lane group.
//!
//! The fields are private so a timing value can only be built through
//! [`IntersectionTiming::new`], which clamps each field to its range. The
//! evaluator therefore never sees an out-of-range cycle length, analysis
//! period or calibration constant.

use bevy::prelude::*;

use crate::config::{
    ANALYSIS_PERIOD_DEFAULT, ANALYSIS_PERIOD_MAX, ANALYSIS_PERIOD_MIN, CALIBRATION_DEFAULT,
    CALIBRATION_MAX, CALIBRATION_MIN, CYCLE_LENGTH_DEFAULT, CYCLE_LENGTH_MAX, CYCLE_LENGTH_MIN,
};

/// Cycle length, analysis period and incremental-delay calibration.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct IntersectionTiming {
    cycle_length: f64,
    analysis_period: f64,
    calibration: f64,
}

impl IntersectionTiming {
    /// Build a timing record, clamping every field to its valid range.
    /// Non-finite values fall back to the field default.
    pub fn new(cycle_length: f64, analysis_period: f64, calibration: f64) -> Self {
        Self {
            cycle_length: clamp_or(
                cycle_length,
                CYCLE_LENGTH_DEFAULT,
                CYCLE_LENGTH_MIN,
                CYCLE_LENGTH_MAX,
            ),
            analysis_period: clamp_or(
                analysis_period,
                ANALYSIS_PERIOD_DEFAULT,
                ANALYSIS_PERIOD_MIN,
                ANALYSIS_PERIOD_MAX,
            ),
            calibration: clamp_or(calibration, CALIBRATION_DEFAULT, CALIBRATION_MIN, CALIBRATION_MAX),
        }
    }

    /// Cycle length C in seconds, within [30, 300].
    pub fn cycle_length(&self) -> f64 {
        self.cycle_length
    }

    /// Analysis period T in hours, within [0.25, 4].
    pub fn analysis_period(&self) -> f64 {
        self.analysis_period
    }

    /// Incremental delay calibration k, within [0, 1.5].
    pub fn calibration(&self) -> f64 {
        self.calibration
    }
}

impl Default for IntersectionTiming {
    fn default() -> Self {
        Self::new(CYCLE_LENGTH_DEFAULT, ANALYSIS_PERIOD_DEFAULT, CALIBRATION_DEFAULT)
    }
}

/// Replace a non-finite value with `fallback`, then clamp to `[min, max]`.
pub(crate) fn clamp_or(value: f64, fallback: f64, min: f64, max: f64) -> f64 {
    let value = if value.is_finite() { value } else { fallback };
    value.clamp(min, max)
}
