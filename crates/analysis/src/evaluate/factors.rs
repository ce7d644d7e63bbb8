//! Saturation-flow and delay adjustment factors.
//!
//! Deliberately coarse step/lookup functions; they are not the HCM tables.

use crate::config::{HEAVY_VEHICLE_FRACTION_MAX, PASSENGER_CAR_EQUIVALENT_MIN};

/// Lane width adjustment: 12 ft or wider is ideal, narrower lanes lose
/// saturation flow in 5% steps.
pub fn lane_width_factor(width_ft: f64) -> f64 {
    if width_ft >= 12.0 {
        1.00
    } else if width_ft >= 11.0 {
        0.95
    } else {
        0.90
    }
}

/// Heavy vehicle adjustment `f_hv = 1 / (1 + P_T * (E_T - 1))`.
///
/// `heavy_vehicle_percent` is a percentage; the fraction is capped at 0.9 and
/// `E_T` is floored at 1.0, so the factor is always in (0, 1].
pub fn heavy_vehicle_factor(heavy_vehicle_percent: f64, passenger_car_equivalent: f64) -> f64 {
    let p_t = (heavy_vehicle_percent / 100.0).clamp(0.0, HEAVY_VEHICLE_FRACTION_MAX);
    let e_t = passenger_car_equivalent.max(PASSENGER_CAR_EQUIVALENT_MIN);
    1.0 / (1.0 + p_t * (e_t - 1.0))
}

/// Flat delay multiplier per arrival type. Unknown categories are neutral.
pub fn arrival_type_factor(arrival_type: i32) -> f64 {
    match arrival_type {
        1 => 1.30,
        2 => 1.15,
        3 => 1.00,
        4 => 0.90,
        5 => 0.80,
        6 => 0.70,
        _ => 1.00,
    }
}
