//! Plugin registration for the intersection LOS pipeline.

use bevy::prelude::*;

use crate::analysis_sets::AnalysisSet;
use crate::lane_group::FormDefaults;
use crate::store::LaneGroupStore;
use crate::timing::IntersectionTiming;

use super::distribution::LosDistribution;
use super::events::{AddLaneGroupEvent, ClearLaneGroupsEvent, RemoveLaneGroupEvent};
use super::results::LaneGroupResults;
use super::summary::IntersectionSummary;
use super::systems::{apply_lane_group_events, recompute_results};

pub struct IntersectionLosPlugin;

impl Plugin for IntersectionLosPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IntersectionTiming>()
            .init_resource::<FormDefaults>()
            .init_resource::<LaneGroupStore>()
            .init_resource::<LaneGroupResults>()
            .init_resource::<IntersectionSummary>()
            .init_resource::<LosDistribution>()
            .add_event::<AddLaneGroupEvent>()
            .add_event::<RemoveLaneGroupEvent>()
            .add_event::<ClearLaneGroupsEvent>()
            .add_systems(
                Update,
                (
                    apply_lane_group_events.in_set(AnalysisSet::Input),
                    recompute_results
                        .run_if(
                            resource_changed::<LaneGroupStore>
                                .or(resource_changed::<IntersectionTiming>),
                        )
                        .in_set(AnalysisSet::Evaluate),
                ),
            );
    }
}
