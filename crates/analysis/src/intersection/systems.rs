//! ECS systems that keep the derived results in step with the inputs.
//!
//! - `apply_lane_group_events`: whole-record store edits.
//! - `recompute_results`: full re-evaluation when the store or timing changed.

use bevy::prelude::*;

use crate::evaluate::evaluate;
use crate::store::LaneGroupStore;
use crate::timing::IntersectionTiming;

use super::distribution::LosDistribution;
use super::events::{AddLaneGroupEvent, ClearLaneGroupsEvent, RemoveLaneGroupEvent};
use super::results::LaneGroupResults;
use super::summary::{aggregate, IntersectionSummary};

/// Apply queued add/remove/clear events to the store.
/// Clears are applied first, then removals, then additions.
pub fn apply_lane_group_events(
    mut adds: EventReader<AddLaneGroupEvent>,
    mut removes: EventReader<RemoveLaneGroupEvent>,
    mut clears: EventReader<ClearLaneGroupsEvent>,
    mut store: ResMut<LaneGroupStore>,
) {
    if clears.read().count() > 0 {
        info!("Clearing {} lane group(s)", store.len());
        store.clear();
    }

    for event in removes.read() {
        match store.remove(event.id) {
            Some(group) => info!("Removed lane group '{}' ({:?})", group.label(), event.id),
            None => debug!("Remove ignored: lane group {:?} not found", event.id),
        }
    }

    for event in adds.read() {
        let id = store.add(&event.label, event.input);
        if let Some(group) = store.get(id) {
            info!("Added lane group '{}' ({:?})", group.label(), id);
        }
    }
}

/// Re-evaluate every lane group and rebuild the intersection summary and
/// grade distribution. Only scheduled when the store or timing changed.
pub fn recompute_results(
    store: Res<LaneGroupStore>,
    timing: Res<IntersectionTiming>,
    mut results: ResMut<LaneGroupResults>,
    mut summary: ResMut<IntersectionSummary>,
    mut distribution: ResMut<LosDistribution>,
) {
    results.rows = store
        .iter()
        .map(|group| (group.id(), evaluate(group.input(), &timing)))
        .collect();

    for (group, (_, result)) in store.iter().zip(results.rows.iter()) {
        if !result.is_bounded() {
            warn!(
                "Lane group '{}' has unbounded delay (capacity {:.6} veh/h); excluded from intersection average",
                group.label(),
                result.capacity
            );
        }
    }

    *summary = aggregate(
        store
            .iter()
            .zip(results.rows.iter())
            .map(|(group, (_, result))| (group.input().volume, result)),
    );

    distribution.recompute(results.rows.iter().map(|(_, r)| r.level_of_service));

    debug!(
        "Recomputed {} lane group(s): C={}s T={}h k={} -> weighted delay {:?}, LOS {:?}",
        results.rows.len(),
        timing.cycle_length(),
        timing.analysis_period(),
        timing.calibration(),
        summary.weighted_delay,
        summary.level_of_service
    );
}
