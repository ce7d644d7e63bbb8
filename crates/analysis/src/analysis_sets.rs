//! Per-frame ordering of the analysis pipeline via `SystemSet` phases.
//!
//! ```text
//! Input  →  Evaluate  →  Report
//! ```
//!
//! * **Input** – Whole-record edits to the lane group store, driven by events
//!   that front ends send earlier in the frame.
//! * **Evaluate** – Rebuild every lane group result, the intersection summary
//!   and the grade distribution whenever the store or timing changed.
//! * **Report** – Consumers of fresh results (exporters). Read-only with
//!   respect to the store and results.
//!
//! Front-end systems that send edit events should run `.before(AnalysisSet::Input)`
//! so the edit is visible in the same frame.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisSet {
    Input,
    Evaluate,
    Report,
}

pub(crate) fn configure_analysis_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            AnalysisSet::Input,
            AnalysisSet::Evaluate,
            AnalysisSet::Report,
        )
            .chain(),
    );
}
