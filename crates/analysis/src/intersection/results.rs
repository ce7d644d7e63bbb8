//! Latest evaluator output for every lane group, in display order.

use bevy::prelude::*;

use crate::evaluate::LaneGroupResult;
use crate::lane_group::LaneGroupId;

/// Derived results, rebuilt wholesale by `recompute_results`. Never edited
/// in place.
#[derive(Resource, Default, Debug, Clone)]
pub struct LaneGroupResults {
    pub rows: Vec<(LaneGroupId, LaneGroupResult)>,
}

impl LaneGroupResults {
    pub fn get(&self, id: LaneGroupId) -> Option<&LaneGroupResult> {
        self.rows.iter().find(|(row_id, _)| *row_id == id).map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
