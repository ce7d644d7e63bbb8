//! Ordered, session-scoped collection of lane groups.
//!
//! `LaneGroupStore` owns the lane groups in insertion order (which is also
//! display order). It only supports whole-record insertion and removal.

use bevy::prelude::*;

use crate::lane_group::{LaneGroup, LaneGroupId, LaneGroupInput};

#[derive(Resource, Default, Debug, Clone)]
pub struct LaneGroupStore {
    groups: Vec<LaneGroup>,
    next_id: u32,
}

impl LaneGroupStore {
    /// Append a lane group and return its new id.
    ///
    /// A blank label is replaced by "Lane Group N", N being the 1-based
    /// position at insertion time. The input is normalized on the way in.
    pub fn add(&mut self, label: &str, input: LaneGroupInput) -> LaneGroupId {
        let id = LaneGroupId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let label = label.trim();
        let label = if label.is_empty() {
            format!("Lane Group {}", self.groups.len() + 1)
        } else {
            label.to_string()
        };

        self.groups
            .push(LaneGroup::new(id, label, input.normalized()));
        id
    }

    /// Remove a lane group by id, returning it if it existed.
    pub fn remove(&mut self, id: LaneGroupId) -> Option<LaneGroup> {
        let index = self.groups.iter().position(|g| g.id() == id)?;
        Some(self.groups.remove(index))
    }

    /// Remove every lane group. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn get(&self, id: LaneGroupId) -> Option<&LaneGroup> {
        self.groups.iter().find(|g| g.id() == id)
    }

    /// Lane groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = &LaneGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = LaneGroupStore::default();
        let a = store.add("NB Left", LaneGroupInput::default());
        let b = store.add("NB Thru", LaneGroupInput::default());
        let c = store.add("SB Thru", LaneGroupInput::default());

        let ids: Vec<LaneGroupId> = store.iter().map(|g| g.id()).collect();
        assert_eq!(ids, vec![a, b, c]);
        let labels: Vec<&str> = store.iter().map(|g| g.label()).collect();
        assert_eq!(labels, vec!["NB Left", "NB Thru", "SB Thru"]);
    }

    #[test]
    fn test_blank_label_gets_positional_name() {
        let mut store = LaneGroupStore::default();
        store.add("EB Thru", LaneGroupInput::default());
        let id = store.add("   ", LaneGroupInput::default());
        assert_eq!(store.get(id).map(|g| g.label()), Some("Lane Group 2"));
    }

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let mut store = LaneGroupStore::default();
        let a = store.add("a", LaneGroupInput::default());
        store.remove(a);
        store.clear();
        let b = store.add("b", LaneGroupInput::default());
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = LaneGroupStore::default();
        let a = store.add("a", LaneGroupInput::default());
        let b = store.add("b", LaneGroupInput::default());

        let removed = store.remove(a);
        assert_eq!(removed.map(|g| g.id()), Some(a));
        assert_eq!(store.len(), 1);
        assert!(store.get(a).is_none());
        assert!(store.get(b).is_some());

        // Removing twice is a no-op
        assert!(store.remove(a).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = LaneGroupStore::default();
        store.add("a", LaneGroupInput::default());
        store.add("b", LaneGroupInput::default());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_normalizes_input() {
        let mut store = LaneGroupStore::default();
        let id = store.add(
            "bad",
            LaneGroupInput {
                volume: f64::NAN,
                peak_hour_factor: 3.0,
                ..Default::default()
            },
        );
        let input = store.get(id).map(|g| *g.input());
        assert_eq!(input.map(|i| i.volume), Some(0.0));
        assert_eq!(input.map(|i| i.peak_hour_factor), Some(1.0));
    }
}
