//! Lane group entry form.
//!
//! The form keeps raw text; conversion to numbers happens once, on submit,
//! through `LaneGroupDraft::to_input`.

use bevy::prelude::*;
use bevy_egui::egui;

use analysis::{AddLaneGroupEvent, FormDefaults, LaneGroupDraft};

/// Text currently in the entry form.
#[derive(Resource, Default, Debug, Clone)]
pub struct LaneGroupFormState {
    pub draft: LaneGroupDraft,
}

/// What the form buttons asked for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormActions {
    pub add: bool,
    pub clear: bool,
    pub example: bool,
}

/// Build the add event for the current form contents.
pub fn submission(draft: &LaneGroupDraft, defaults: &FormDefaults) -> AddLaneGroupEvent {
    AddLaneGroupEvent {
        label: draft.label().to_string(),
        input: draft.to_input(defaults),
    }
}

/// Apply button presses to the form state, returning the event to send.
pub fn apply_actions(
    form: &mut LaneGroupFormState,
    actions: FormActions,
    defaults: &FormDefaults,
) -> Option<AddLaneGroupEvent> {
    if actions.clear {
        form.draft = LaneGroupDraft::default();
    }
    if actions.example {
        form.draft = LaneGroupDraft::example();
    }
    actions.add.then(|| submission(&form.draft, defaults))
}

fn text_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    submit: &mut bool,
) {
    ui.label(label);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(120.0),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        *submit = true;
    }
    ui.end_row();
}

pub fn form_section(
    ui: &mut egui::Ui,
    form: &mut LaneGroupFormState,
    defaults: &FormDefaults,
) -> FormActions {
    let mut actions = FormActions::default();
    let saturation_hint = format!("{}", defaults.saturation_flow);
    let phf_hint = format!("{}", defaults.peak_hour_factor);
    let loss_hint = format!("{}", defaults.startup_loss);
    let draft = &mut form.draft;

    ui.heading("Add lane group");
    egui::Grid::new("lane_group_form")
        .num_columns(2)
        .show(ui, |ui| {
            let submit = &mut actions.add;
            text_row(ui, "Label:", &mut draft.label, "Lane Group N", submit);
            text_row(ui, "Volume v (veh/h):", &mut draft.volume, "0", submit);
            text_row(ui, "Lanes:", &mut draft.lanes, "1", submit);
            text_row(ui, "Effective green g (s):", &mut draft.effective_green, "0", submit);
            text_row(ui, "PHF:", &mut draft.peak_hour_factor, &phf_hint, submit);
            text_row(ui, "Demand multiplier:", &mut draft.demand_multiplier, "1.0", submit);
            text_row(ui, "s0 (veh/h/ln):", &mut draft.saturation_flow, &saturation_hint, submit);
            text_row(ui, "Heavy vehicles (%):", &mut draft.heavy_vehicle_percent, "0", submit);
            text_row(ui, "E_T:", &mut draft.passenger_car_equivalent, "2.0", submit);
            text_row(ui, "Lane width (ft):", &mut draft.lane_width_ft, "12", submit);
            text_row(ui, "Startup loss L (s):", &mut draft.startup_loss, &loss_hint, submit);
            text_row(ui, "Arrival type (1-6):", &mut draft.arrival_type, "3", submit);
        });

    ui.horizontal(|ui| {
        if ui.button("Add lane group").clicked() {
            actions.add = true;
        }
        if ui.button("Clear form").clicked() {
            actions.clear = true;
        }
        if ui.button("Add example").clicked() {
            actions.example = true;
        }
    });

    actions
}
