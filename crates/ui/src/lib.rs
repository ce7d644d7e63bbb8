//! egui front end: timing and entry form on the left, results on the right.
//!
//! Panels only read resources and send events; every store edit goes
//! through the analysis events so it lands in `AnalysisSet::Input` the
//! same frame.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use analysis::{
    AnalysisSet, FormDefaults, IntersectionSummary, IntersectionTiming, LaneGroupResults,
    LaneGroupStore, LosDistribution,
};
use export::ExportStatus;

pub mod format;
pub mod lane_group_form;
pub mod results_panel;
pub mod theme;
pub mod timing_panel;

use lane_group_form::LaneGroupFormState;
use results_panel::{ResultsActions, ResultsWriters};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<LaneGroupFormState>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (input_panel_ui, results_panel_ui)
                    .chain()
                    .before(AnalysisSet::Input),
            );
    }
}

/// Left side panel: intersection timing, form defaults, entry form.
pub fn input_panel_ui(
    mut contexts: EguiContexts,
    mut timing: ResMut<IntersectionTiming>,
    mut defaults: ResMut<FormDefaults>,
    mut form: ResMut<LaneGroupFormState>,
    mut adds: EventWriter<analysis::AddLaneGroupEvent>,
) {
    let ctx = contexts.ctx_mut();
    let mut actions = lane_group_form::FormActions::default();

    egui::SidePanel::left("los_input_panel")
        .resizable(true)
        .default_width(theme::SIDE_PANEL_WIDTH)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                timing_panel::timing_section(ui, &mut timing);
                timing_panel::defaults_section(ui, &mut defaults);
                ui.separator();
                actions = lane_group_form::form_section(ui, &mut form, &defaults);
            });
        });

    if actions == lane_group_form::FormActions::default() {
        return;
    }
    if let Some(event) = lane_group_form::apply_actions(&mut form, actions, &defaults) {
        adds.send(event);
    }
}

/// Central panel: results table, summary, and store-wide actions.
pub fn results_panel_ui(
    mut contexts: EguiContexts,
    store: Res<LaneGroupStore>,
    results: Res<LaneGroupResults>,
    summary: Res<IntersectionSummary>,
    distribution: Res<LosDistribution>,
    status: Res<ExportStatus>,
    mut writers: ResultsWriters,
) {
    let ctx = contexts.ctx_mut();
    let mut actions = ResultsActions::default();

    egui::CentralPanel::default().show(ctx, |ui| {
        results_panel::results_table(ui, &store, &results, &mut actions);
        ui.separator();
        results_panel::summary_section(ui, &summary, &distribution);
        ui.separator();
        results_panel::action_bar(ui, &store, &status, &mut actions);
    });

    writers.send(actions);
}
