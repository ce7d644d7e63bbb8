//! Unit tests for the intersection aggregator and grade distribution.

use crate::evaluate::LaneGroupResult;
use crate::grades::LosGrade;

use super::distribution::LosDistribution;
use super::summary::aggregate;

fn result_with_delay(delay: f64) -> LaneGroupResult {
    LaneGroupResult {
        adjusted_demand: 0.0,
        effective_green_after_loss: 30.0,
        green_ratio: 0.3,
        effective_saturation_flow: 1900.0,
        capacity: 570.0,
        volume_to_capacity: if delay.is_finite() { 0.5 } else { f64::INFINITY },
        uniform_delay: delay,
        incremental_delay: 0.0,
        total_delay: delay,
        level_of_service: LosGrade::from_delay(delay),
        lane_width_factor: 1.0,
        heavy_vehicle_factor: 1.0,
        arrival_type_factor: 1.0,
    }
}

// ====================================================================
// aggregate
// ====================================================================

#[test]
fn test_weighted_average_by_entered_volume() {
    let a = result_with_delay(10.0);
    let b = result_with_delay(40.0);
    let summary = aggregate([(300.0, &a), (100.0, &b)]);

    assert_eq!(summary.total_volume, 400.0);
    // (300*10 + 100*40) / 400 = 17.5
    assert_eq!(summary.weighted_delay, Some(17.5));
    assert_eq!(summary.level_of_service, Some(LosGrade::B));
    assert_eq!(summary.excluded, 0);
}

#[test]
fn test_unbounded_groups_excluded_from_both_sums() {
    let a = result_with_delay(30.0);
    let gridlocked = result_with_delay(f64::INFINITY);
    let summary = aggregate([(200.0, &a), (5000.0, &gridlocked)]);

    assert_eq!(summary.total_volume, 200.0);
    assert_eq!(summary.weighted_delay, Some(30.0));
    assert_eq!(summary.level_of_service, Some(LosGrade::C));
    assert_eq!(summary.excluded, 1);
}

#[test]
fn test_empty_intersection_is_undefined() {
    let summary = aggregate(std::iter::empty::<(f64, &LaneGroupResult)>());
    assert_eq!(summary.weighted_delay, None);
    assert_eq!(summary.level_of_service, None);
    assert_eq!(summary.total_volume, 0.0);
}

#[test]
fn test_zero_volume_everywhere_is_undefined() {
    let a = result_with_delay(12.0);
    let summary = aggregate([(0.0, &a), (0.0, &a)]);
    assert_eq!(summary.weighted_delay, None);
    assert_eq!(summary.level_of_service, None);
}

#[test]
fn test_all_groups_unbounded_is_undefined() {
    let gridlocked = result_with_delay(f64::INFINITY);
    let summary = aggregate([(400.0, &gridlocked), (300.0, &gridlocked)]);
    assert_eq!(summary.weighted_delay, None);
    assert_eq!(summary.total_volume, 0.0);
    assert_eq!(summary.excluded, 2);
}

#[test]
fn test_negative_entered_volume_weighs_nothing() {
    let a = result_with_delay(15.0);
    let b = result_with_delay(70.0);
    let summary = aggregate([(100.0, &a), (-50.0, &b)]);
    assert_eq!(summary.total_volume, 100.0);
    assert_eq!(summary.weighted_delay, Some(15.0));
}

// ====================================================================
// LosDistribution
// ====================================================================

#[test]
fn test_distribution_default_is_empty() {
    let dist = LosDistribution::default();
    assert_eq!(dist.total, 0);
    assert_eq!(dist.percentage(LosGrade::A), 0.0);
    assert_eq!(dist.congested_percentage(), 0.0);
    assert_eq!(dist.worst(), None);
}

#[test]
fn test_distribution_recompute() {
    let mut dist = LosDistribution::default();
    dist.recompute([
        Some(LosGrade::A),
        Some(LosGrade::A),
        Some(LosGrade::C),
        Some(LosGrade::E),
        None,
    ]);

    assert_eq!(dist.total, 5);
    assert_eq!(dist.counts[0], 2);
    assert_eq!(dist.counts[2], 1);
    assert_eq!(dist.counts[4], 1);
    assert_eq!(dist.undefined, 1);
    assert!((dist.percentage(LosGrade::A) - 40.0).abs() < 0.01);
    // E plus the ungraded group
    assert!((dist.congested_percentage() - 40.0).abs() < 0.01);
    assert_eq!(dist.worst(), Some(LosGrade::E));
}

#[test]
fn test_distribution_recompute_resets_previous_counts() {
    let mut dist = LosDistribution::default();
    dist.recompute([Some(LosGrade::F), None]);
    dist.recompute([Some(LosGrade::B)]);
    assert_eq!(dist.total, 1);
    assert_eq!(dist.counts[5], 0);
    assert_eq!(dist.undefined, 0);
    assert_eq!(dist.worst(), Some(LosGrade::B));
}
