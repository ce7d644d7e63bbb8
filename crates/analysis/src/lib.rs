//! Signalized intersection Level of Service analysis.
//!
//! Pure computation lives in [`evaluate`] (one lane group) and
//! [`intersection::aggregate`] (volume-weighted intersection delay). The
//! [`AnalysisPlugin`] wires them into a Bevy app: front ends edit the
//! [`store::LaneGroupStore`] through events and adjust the
//! [`timing::IntersectionTiming`] resource, and the derived resources are
//! rebuilt whenever either changes.

use bevy::prelude::*;

pub mod analysis_sets;
pub mod config;
pub mod evaluate;
pub mod grades;
pub mod intersection;
pub mod lane_group;
pub mod store;
pub mod timing;

#[cfg(test)]
pub mod test_harness;

pub use analysis_sets::AnalysisSet;
pub use evaluate::{evaluate, LaneGroupResult};
pub use grades::LosGrade;
pub use intersection::{
    aggregate, AddLaneGroupEvent, ClearLaneGroupsEvent, IntersectionSummary, LaneGroupResults,
    LosDistribution, RemoveLaneGroupEvent,
};
pub use lane_group::{FormDefaults, LaneGroup, LaneGroupDraft, LaneGroupId, LaneGroupInput};
pub use store::LaneGroupStore;
pub use timing::IntersectionTiming;

pub struct AnalysisPlugin;

impl Plugin for AnalysisPlugin {
    fn build(&self, app: &mut App) {
        analysis_sets::configure_analysis_sets(app);
        app.add_plugins(intersection::IntersectionLosPlugin);
    }
}
