//! Text-form input boundary.
//!
//! A [`LaneGroupDraft`] holds exactly what the user typed. Converting it with
//! [`LaneGroupDraft::to_input`] is the single normalization step: blank
//! required fields read as zero, blank optional fields take the session's
//! [`FormDefaults`], anything that does not parse to a finite number takes
//! the per-field fallback, and the result is clamped.

use bevy::prelude::*;

use crate::config::{
    ARRIVAL_TYPE_FALLBACK, DEMAND_MULTIPLIER_FALLBACK, EFFECTIVE_GREEN_FALLBACK,
    FORM_PEAK_HOUR_FACTOR_DEFAULT, FORM_SATURATION_FLOW_DEFAULT, FORM_STARTUP_LOSS_DEFAULT,
    HEAVY_VEHICLE_PERCENT_FALLBACK, LANE_COUNT_FALLBACK, LANE_WIDTH_FALLBACK_FT,
    PASSENGER_CAR_EQUIVALENT_FALLBACK, PEAK_HOUR_FACTOR_FALLBACK, SATURATION_FLOW_FALLBACK,
    STARTUP_LOSS_FALLBACK, VOLUME_FALLBACK,
};

use super::input::LaneGroupInput;

/// Session-wide defaults used when an optional form field is left blank.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FormDefaults {
    pub saturation_flow: f64,
    pub peak_hour_factor: f64,
    pub startup_loss: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            saturation_flow: FORM_SATURATION_FLOW_DEFAULT,
            peak_hour_factor: FORM_PEAK_HOUR_FACTOR_DEFAULT,
            startup_loss: FORM_STARTUP_LOSS_DEFAULT,
        }
    }
}

/// Raw text of the lane group entry form.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneGroupDraft {
    pub label: String,
    pub volume: String,
    pub lanes: String,
    pub effective_green: String,
    pub peak_hour_factor: String,
    pub saturation_flow: String,
    pub heavy_vehicle_percent: String,
    pub passenger_car_equivalent: String,
    pub lane_width_ft: String,
    pub startup_loss: String,
    pub arrival_type: String,
    pub demand_multiplier: String,
}

impl Default for LaneGroupDraft {
    /// The cleared form: required fields pre-filled, optional fields blank.
    fn default() -> Self {
        Self {
            label: String::new(),
            volume: "450".to_string(),
            lanes: "1".to_string(),
            effective_green: "30".to_string(),
            peak_hour_factor: String::new(),
            saturation_flow: String::new(),
            heavy_vehicle_percent: String::new(),
            passenger_car_equivalent: String::new(),
            lane_width_ft: String::new(),
            startup_loss: String::new(),
            arrival_type: String::new(),
            demand_multiplier: String::new(),
        }
    }
}

enum Field {
    Blank,
    Invalid,
    Number(f64),
}

fn parse_field(text: &str) -> Field {
    let text = text.trim();
    if text.is_empty() {
        return Field::Blank;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Field::Number(v),
        _ => Field::Invalid,
    }
}

/// Blank reads as zero and is left to the clamps; unparsable means "use the
/// fallback".
fn required(text: &str, fallback: f64) -> f64 {
    match parse_field(text) {
        Field::Number(v) => v,
        Field::Blank => 0.0,
        Field::Invalid => fallback,
    }
}

/// Blank means "use the form default"; unparsable means "use the fallback".
fn optional(text: &str, default: f64, fallback: f64) -> f64 {
    match parse_field(text) {
        Field::Number(v) => v,
        Field::Blank if default.is_finite() => default,
        Field::Blank | Field::Invalid => fallback,
    }
}

impl LaneGroupDraft {
    /// The "EB Thru" sample lane group.
    pub fn example() -> Self {
        Self {
            label: "EB Thru".to_string(),
            volume: "620".to_string(),
            lanes: "2".to_string(),
            effective_green: "40".to_string(),
            peak_hour_factor: "0.92".to_string(),
            saturation_flow: String::new(),
            heavy_vehicle_percent: "4".to_string(),
            passenger_car_equivalent: "2.0".to_string(),
            lane_width_ft: "12".to_string(),
            startup_loss: "2".to_string(),
            arrival_type: "4".to_string(),
            demand_multiplier: "1.00".to_string(),
        }
    }

    /// Trimmed label; may be empty, in which case the store assigns a
    /// positional name.
    pub fn label(&self) -> &str {
        self.label.trim()
    }

    /// Convert the typed text into a fully normalized [`LaneGroupInput`].
    pub fn to_input(&self, defaults: &FormDefaults) -> LaneGroupInput {
        let lanes = required(&self.lanes, LANE_COUNT_FALLBACK as f64)
            .round()
            .max(1.0) as u32;

        let arrival_type = optional(
            &self.arrival_type,
            ARRIVAL_TYPE_FALLBACK as f64,
            ARRIVAL_TYPE_FALLBACK as f64,
        );
        // Non-integral categories fall outside the lookup table.
        let arrival_type = if arrival_type.fract() == 0.0 {
            arrival_type as i32
        } else {
            0
        };

        LaneGroupInput {
            volume: required(&self.volume, VOLUME_FALLBACK),
            peak_hour_factor: optional(
                &self.peak_hour_factor,
                defaults.peak_hour_factor,
                PEAK_HOUR_FACTOR_FALLBACK,
            ),
            demand_multiplier: optional(
                &self.demand_multiplier,
                DEMAND_MULTIPLIER_FALLBACK,
                DEMAND_MULTIPLIER_FALLBACK,
            ),
            lane_count: lanes,
            effective_green: required(&self.effective_green, EFFECTIVE_GREEN_FALLBACK),
            startup_loss: optional(
                &self.startup_loss,
                defaults.startup_loss,
                STARTUP_LOSS_FALLBACK,
            ),
            base_saturation_flow: optional(
                &self.saturation_flow,
                defaults.saturation_flow,
                SATURATION_FLOW_FALLBACK,
            ),
            heavy_vehicle_percent: optional(
                &self.heavy_vehicle_percent,
                HEAVY_VEHICLE_PERCENT_FALLBACK,
                HEAVY_VEHICLE_PERCENT_FALLBACK,
            ),
            passenger_car_equivalent: optional(
                &self.passenger_car_equivalent,
                PASSENGER_CAR_EQUIVALENT_FALLBACK,
                PASSENGER_CAR_EQUIVALENT_FALLBACK,
            ),
            lane_width_ft: optional(
                &self.lane_width_ft,
                LANE_WIDTH_FALLBACK_FT,
                LANE_WIDTH_FALLBACK_FT,
            ),
            arrival_type,
        }
        .normalized()
    }
}
