//! Whole-record edits to the lane group store.

use bevy::prelude::*;

use crate::lane_group::{LaneGroupId, LaneGroupInput};

/// Append a lane group. A blank label gets a positional name.
#[derive(Event, Debug, Clone)]
pub struct AddLaneGroupEvent {
    pub label: String,
    pub input: LaneGroupInput,
}

/// Remove one lane group by id.
#[derive(Event, Debug, Clone, Copy)]
pub struct RemoveLaneGroupEvent {
    pub id: LaneGroupId,
}

/// Remove every lane group.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ClearLaneGroupsEvent;
