//! Unit tests for the lane group evaluator.

use crate::grades::LosGrade;
use crate::lane_group::LaneGroupInput;
use crate::timing::IntersectionTiming;

use super::{arrival_type_factor, evaluate, heavy_vehicle_factor, lane_width_factor};

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected} +/- {tol}, got {actual}"
    );
}

fn example_timing() -> IntersectionTiming {
    IntersectionTiming::new(90.0, 0.25, 0.5)
}

/// The "EB Thru" lane group.
fn eb_thru() -> LaneGroupInput {
    LaneGroupInput {
        volume: 620.0,
        peak_hour_factor: 0.92,
        demand_multiplier: 1.0,
        lane_count: 2,
        effective_green: 40.0,
        startup_loss: 2.0,
        base_saturation_flow: 1900.0,
        heavy_vehicle_percent: 4.0,
        passenger_car_equivalent: 2.0,
        lane_width_ft: 12.0,
        arrival_type: 4,
    }
}

// ====================================================================
// Adjustment factors
// ====================================================================

#[test]
fn test_lane_width_factor_steps() {
    assert_eq!(lane_width_factor(14.0), 1.00);
    assert_eq!(lane_width_factor(12.0), 1.00);
    assert_eq!(lane_width_factor(11.5), 0.95);
    assert_eq!(lane_width_factor(11.0), 0.95);
    assert_eq!(lane_width_factor(10.0), 0.90);
    assert_eq!(lane_width_factor(8.0), 0.90);
}

#[test]
fn test_heavy_vehicle_factor() {
    assert_eq!(heavy_vehicle_factor(0.0, 2.0), 1.0);
    assert_close(heavy_vehicle_factor(4.0, 2.0), 1.0 / 1.04, 1e-12, "f_hv 4%");
    assert_close(heavy_vehicle_factor(10.0, 3.0), 1.0 / 1.2, 1e-12, "f_hv 10%");
    // E_T below 1 is floored, so heavy vehicles never increase flow
    assert_eq!(heavy_vehicle_factor(20.0, 0.5), 1.0);
    // The heavy vehicle fraction is capped at 0.9
    assert_close(heavy_vehicle_factor(150.0, 2.0), 1.0 / 1.9, 1e-12, "f_hv cap");
}

#[test]
fn test_arrival_type_factor_table() {
    assert_eq!(arrival_type_factor(1), 1.30);
    assert_eq!(arrival_type_factor(2), 1.15);
    assert_eq!(arrival_type_factor(3), 1.00);
    assert_eq!(arrival_type_factor(4), 0.90);
    assert_eq!(arrival_type_factor(5), 0.80);
    assert_eq!(arrival_type_factor(6), 0.70);
    assert_eq!(arrival_type_factor(0), 1.00);
    assert_eq!(arrival_type_factor(7), 1.00);
    assert_eq!(arrival_type_factor(-2), 1.00);
}

// ====================================================================
// Worked examples
// ====================================================================

#[test]
fn test_eb_thru_worked_example() {
    let r = evaluate(&eb_thru(), &example_timing());

    assert_close(r.adjusted_demand, 673.913, 1e-3, "adjusted demand");
    assert_eq!(r.effective_green_after_loss, 38.0);
    assert_close(r.green_ratio, 38.0 / 90.0, 1e-12, "g/C");
    assert_eq!(r.lane_width_factor, 1.0);
    assert_close(r.heavy_vehicle_factor, 0.961538, 1e-6, "f_hv");
    assert_close(r.effective_saturation_flow, 3653.846, 1e-3, "s_eff");
    assert_close(r.capacity, 1542.735, 1e-3, "capacity");
    assert_close(r.volume_to_capacity, 0.436830, 1e-5, "v/c");
    assert_close(r.uniform_delay, 18.4195, 1e-3, "d1");
    assert_close(r.incremental_delay, 1.7973, 1e-3, "d2");
    assert_eq!(r.arrival_type_factor, 0.90);
    assert_close(r.total_delay, 18.1951, 1e-3, "delay");
    assert_eq!(r.level_of_service, Some(LosGrade::B));
    assert!(r.is_bounded());
}

#[test]
fn test_zero_volume_has_no_incremental_delay() {
    let input = LaneGroupInput {
        volume: 0.0,
        ..eb_thru()
    };
    let r = evaluate(&input, &example_timing());

    assert_eq!(r.adjusted_demand, 0.0);
    assert_eq!(r.volume_to_capacity, 0.0);
    assert_eq!(r.incremental_delay, 0.0);
    assert!(!r.incremental_delay.is_nan());
    // Webster's numerator does not vanish with demand: d1 = 0.5 C (1 - g/C)^2
    let gc = 38.0 / 90.0;
    assert_close(r.uniform_delay, 0.5 * 90.0 * (1.0 - gc) * (1.0 - gc), 1e-9, "d1");
    assert_close(r.total_delay, 13.52, 1e-9, "delay");
    assert_eq!(r.level_of_service, Some(LosGrade::B));
}

#[test]
fn test_vanishing_capacity_is_unbounded() {
    // Green fully eaten by startup loss, weakest saturation flow, extreme PCE.
    let input = LaneGroupInput {
        volume: 300.0,
        effective_green: 2.0,
        startup_loss: 2.0,
        base_saturation_flow: 500.0,
        lane_count: 1,
        lane_width_ft: 10.0,
        heavy_vehicle_percent: 50.0,
        passenger_car_equivalent: 1.0e12,
        ..eb_thru()
    };
    let r = evaluate(&input, &example_timing());

    assert_eq!(r.green_ratio, 1e-6);
    assert!(r.capacity <= 1e-6, "capacity should vanish, got {}", r.capacity);
    assert_eq!(r.volume_to_capacity, f64::INFINITY);
    assert_eq!(r.incremental_delay, f64::INFINITY);
    assert_eq!(r.total_delay, f64::INFINITY);
    assert_eq!(r.level_of_service, None);
    assert!(!r.is_bounded());
}

#[test]
fn test_oversaturated_group_is_los_f() {
    let input = LaneGroupInput {
        volume: 1800.0,
        peak_hour_factor: 1.0,
        heavy_vehicle_percent: 0.0,
        arrival_type: 3,
        ..eb_thru()
    };
    let r = evaluate(&input, &example_timing());

    assert_close(r.volume_to_capacity, 1.121884, 1e-5, "v/c");
    // Uniform delay saturates at X = 1
    assert_close(r.uniform_delay, 26.0, 1e-9, "d1");
    assert_close(r.incremental_delay, 70.8384, 1e-3, "d2");
    assert_close(r.total_delay, 96.8384, 1e-3, "delay");
    assert_eq!(r.level_of_service, Some(LosGrade::F));
}

#[test]
fn test_single_lane_moderate_demand() {
    let input = LaneGroupInput {
        volume: 450.0,
        peak_hour_factor: 1.0,
        lane_count: 1,
        effective_green: 30.0,
        startup_loss: 0.0,
        heavy_vehicle_percent: 0.0,
        arrival_type: 3,
        ..eb_thru()
    };
    let r = evaluate(&input, &example_timing());
    assert_close(r.capacity, 633.333, 1e-3, "capacity");
    assert_close(r.total_delay, 38.9186, 1e-3, "delay");
    assert_eq!(r.level_of_service, Some(LosGrade::D));
}

// ====================================================================
// Defensive normalization inside the evaluator
// ====================================================================

#[test]
fn test_evaluate_normalizes_raw_input() {
    let raw = LaneGroupInput {
        volume: f64::NAN,
        peak_hour_factor: 0.0,
        lane_count: 0,
        base_saturation_flow: -10.0,
        ..eb_thru()
    };
    let r = evaluate(&raw, &example_timing());
    assert_eq!(r.adjusted_demand, 0.0);
    assert!(r.effective_saturation_flow > 0.0);
    assert!(r.total_delay.is_finite());
}

#[test]
fn test_green_ratio_is_capped_below_one() {
    let input = LaneGroupInput {
        effective_green: 500.0,
        startup_loss: 0.0,
        ..eb_thru()
    };
    let r = evaluate(&input, &example_timing());
    assert_eq!(r.green_ratio, 0.999999);
    assert!(r.uniform_delay.is_finite());
}

#[test]
fn test_demand_multiplier_scales_demand() {
    let base = evaluate(&eb_thru(), &example_timing());
    let doubled = evaluate(
        &LaneGroupInput {
            demand_multiplier: 2.0,
            ..eb_thru()
        },
        &example_timing(),
    );
    assert_close(doubled.adjusted_demand, 2.0 * base.adjusted_demand, 1e-9, "demand");
    assert_eq!(doubled.capacity, base.capacity);
    assert!(doubled.total_delay > base.total_delay);
}

#[test]
fn test_unknown_arrival_type_is_neutral() {
    let neutral = evaluate(
        &LaneGroupInput {
            arrival_type: 3,
            ..eb_thru()
        },
        &example_timing(),
    );
    let unknown = evaluate(
        &LaneGroupInput {
            arrival_type: 42,
            ..eb_thru()
        },
        &example_timing(),
    );
    assert_eq!(neutral.total_delay, unknown.total_delay);
    assert_eq!(unknown.arrival_type_factor, 1.0);
}

#[test]
fn test_capacity_below_epsilon_counts_as_none() {
    // Positive but far below 1e-6 veh/h
    let input = LaneGroupInput {
        volume: 300.0,
        effective_green: 2.0,
        startup_loss: 2.0,
        base_saturation_flow: 500.0,
        lane_count: 1,
        lane_width_ft: 10.0,
        heavy_vehicle_percent: 50.0,
        passenger_car_equivalent: 1.0e15,
        ..eb_thru()
    };
    let r = evaluate(&input, &example_timing());
    assert!(r.capacity > 0.0 && r.capacity < 1e-9, "capacity {}", r.capacity);
    assert_eq!(r.volume_to_capacity, f64::INFINITY);
    assert_eq!(r.level_of_service, None);
}
