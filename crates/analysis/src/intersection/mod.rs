//! Intersection-level Level of Service.
//!
//! Wires the evaluator into the app: the lane group store and timing are the
//! inputs, and every change triggers a full, idempotent recompute of
//! - per-lane-group results (`LaneGroupResults`),
//! - the volume-weighted intersection delay and grade (`IntersectionSummary`),
//! - the per-grade counts (`LosDistribution`).

pub mod distribution;
pub mod events;
pub mod plugin;
pub mod results;
pub mod summary;
pub mod systems;

#[cfg(test)]
mod tests;

pub use distribution::LosDistribution;
pub use events::{AddLaneGroupEvent, ClearLaneGroupsEvent, RemoveLaneGroupEvent};
pub use plugin::IntersectionLosPlugin;
pub use results::LaneGroupResults;
pub use summary::{aggregate, IntersectionSummary};
pub use systems::{apply_lane_group_events, recompute_results};
