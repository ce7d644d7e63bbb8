//! # TestIntersection — headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `AnalysisPlugin` so tests
//! can drive lane group events and timing changes, step frames, and assert
//! on the derived resources without a window.

use bevy::prelude::*;

use crate::intersection::{AddLaneGroupEvent, ClearLaneGroupsEvent, RemoveLaneGroupEvent};
use crate::lane_group::{LaneGroupId, LaneGroupInput};
use crate::store::LaneGroupStore;
use crate::timing::IntersectionTiming;
use crate::AnalysisPlugin;

pub struct TestIntersection {
    app: App,
}

impl TestIntersection {
    /// An intersection with default timing and no lane groups.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(AnalysisPlugin);
        Self { app }
    }

    /// Builder: replace the intersection timing before the first frame.
    pub fn with_timing(mut self, timing: IntersectionTiming) -> Self {
        self.app.insert_resource(timing);
        self
    }

    /// Builder: queue a lane group and apply it.
    pub fn with_lane_group(mut self, label: &str, input: LaneGroupInput) -> Self {
        self.add_lane_group(label, input);
        self
    }

    /// Queue an add event and run one frame. Returns the id the store assigned.
    pub fn add_lane_group(&mut self, label: &str, input: LaneGroupInput) -> LaneGroupId {
        self.app.world_mut().send_event(AddLaneGroupEvent {
            label: label.to_string(),
            input,
        });
        self.update();
        self.resource::<LaneGroupStore>()
            .iter()
            .last()
            .map(|g| g.id())
            .expect("lane group should have been added")
    }

    pub fn remove_lane_group(&mut self, id: LaneGroupId) {
        self.app
            .world_mut()
            .send_event(RemoveLaneGroupEvent { id });
        self.update();
    }

    pub fn clear_lane_groups(&mut self) {
        self.app.world_mut().send_event(ClearLaneGroupsEvent);
        self.update();
    }

    /// Replace the timing resource and run one frame.
    pub fn set_timing(&mut self, timing: IntersectionTiming) {
        self.app.insert_resource(timing);
        self.update();
    }

    /// Run one frame of the `Update` schedule (and the rest of `Main`).
    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn assert_resource_exists<T: Resource>(&self) {
        assert!(
            self.app.world().get_resource::<T>().is_some(),
            "Expected resource {} to exist",
            std::any::type_name::<T>()
        );
    }
}

impl Default for TestIntersection {
    fn default() -> Self {
        Self::new()
    }
}
