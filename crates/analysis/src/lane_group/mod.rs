//! Lane group identity, numeric parameters and the text-form boundary.
//!
//! A lane group is a set of lanes on one approach served by the same signal
//! phase. Records are created whole and removed whole; editing is
//! delete-and-re-add.

pub mod draft;
pub mod input;


pub use draft::{FormDefaults, LaneGroupDraft};
pub use input::LaneGroupInput;

/// Opaque, stable identifier assigned when a lane group is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneGroupId(pub u32);

/// A lane group as stored in the session: identity plus parameters.
///
/// Only the store creates these, so a record is never edited after insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneGroup {
    id: LaneGroupId,
    label: String,
    input: LaneGroupInput,
}

impl LaneGroup {
    pub(crate) fn new(id: LaneGroupId, label: String, input: LaneGroupInput) -> Self {
        Self { id, label, input }
    }

    pub fn id(&self) -> LaneGroupId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn input(&self) -> &LaneGroupInput {
        &self.input
    }
}
