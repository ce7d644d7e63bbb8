// Intersection timing ranges and defaults.
pub const CYCLE_LENGTH_MIN: f64 = 30.0;
pub const CYCLE_LENGTH_MAX: f64 = 300.0;
pub const CYCLE_LENGTH_DEFAULT: f64 = 90.0;
pub const ANALYSIS_PERIOD_MIN: f64 = 0.25;
pub const ANALYSIS_PERIOD_MAX: f64 = 4.0;
pub const ANALYSIS_PERIOD_DEFAULT: f64 = 0.25;
pub const CALIBRATION_MIN: f64 = 0.0;
pub const CALIBRATION_MAX: f64 = 1.5;
pub const CALIBRATION_DEFAULT: f64 = 0.5;

// Lane group clamps.
pub const PEAK_HOUR_FACTOR_MIN: f64 = 0.50;
pub const PEAK_HOUR_FACTOR_MAX: f64 = 1.00;
pub const SATURATION_FLOW_MIN: f64 = 500.0;
pub const HEAVY_VEHICLE_PERCENT_MAX: f64 = 50.0;
pub const PASSENGER_CAR_EQUIVALENT_MIN: f64 = 1.0;
/// Upper bound on the heavy-vehicle fraction inside the f_hv formula.
pub const HEAVY_VEHICLE_FRACTION_MAX: f64 = 0.9;

// Fallbacks for fields that fail to parse to a finite number.
pub const VOLUME_FALLBACK: f64 = 0.0;
pub const LANE_COUNT_FALLBACK: u32 = 1;
pub const EFFECTIVE_GREEN_FALLBACK: f64 = 1.0;
pub const PEAK_HOUR_FACTOR_FALLBACK: f64 = 1.0;
pub const SATURATION_FLOW_FALLBACK: f64 = 1900.0;
pub const HEAVY_VEHICLE_PERCENT_FALLBACK: f64 = 0.0;
pub const PASSENGER_CAR_EQUIVALENT_FALLBACK: f64 = 2.0;
pub const LANE_WIDTH_FALLBACK_FT: f64 = 12.0;
pub const STARTUP_LOSS_FALLBACK: f64 = 0.0;
pub const ARRIVAL_TYPE_FALLBACK: i32 = 3;
pub const DEMAND_MULTIPLIER_FALLBACK: f64 = 1.0;

// Entry form defaults (what a blank optional field means).
pub const FORM_SATURATION_FLOW_DEFAULT: f64 = 1900.0;
pub const FORM_PEAK_HOUR_FACTOR_DEFAULT: f64 = 0.92;
pub const FORM_STARTUP_LOSS_DEFAULT: f64 = 2.0;

/// Floor for effective green and for the green ratio.
pub const GREEN_EPSILON: f64 = 1e-6;
/// Ceiling for the green ratio g/C.
pub const MAX_GREEN_RATIO: f64 = 0.999999;
/// Uniform-delay denominators at or below this are treated as singular.
pub const DENOMINATOR_EPSILON: f64 = 1e-6;
/// Capacities at or below this (veh/h) are treated as zero.
pub const CAPACITY_EPSILON: f64 = 1e-6;
/// Floor for the analysis period inside the incremental-delay term.
pub const ANALYSIS_PERIOD_EPSILON: f64 = 1e-6;

// LOS delay thresholds in seconds per vehicle (inclusive upper bounds).
pub const LOS_A_MAX_DELAY: f64 = 10.0;
pub const LOS_B_MAX_DELAY: f64 = 20.0;
pub const LOS_C_MAX_DELAY: f64 = 35.0;
pub const LOS_D_MAX_DELAY: f64 = 55.0;
pub const LOS_E_MAX_DELAY: f64 = 80.0;
