//! Results table, intersection summary, and store-wide actions.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::egui;

use analysis::{
    ClearLaneGroupsEvent, IntersectionSummary, LaneGroupId, LaneGroupResults, LaneGroupStore,
    LosDistribution, LosGrade, RemoveLaneGroupEvent,
};
use export::ExportStatus;

use crate::format;
use crate::theme;

/// What the results panel asked for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultsActions {
    pub remove: Option<LaneGroupId>,
    pub clear_all: bool,
    pub export: bool,
    pub import: bool,
}

const COLUMNS: [&str; 9] = [
    "Label", "v", "g", "s_eff", "Capacity", "v/c", "Delay", "LOS", "",
];

fn grade_badge(ui: &mut egui::Ui, grade: Option<LosGrade>) {
    let response = ui.label(
        egui::RichText::new(format::grade(grade))
            .color(theme::los_color(grade))
            .strong(),
    );
    response.on_hover_text(grade.map_or("Unbounded delay", LosGrade::label));
}

pub fn results_table(
    ui: &mut egui::Ui,
    store: &LaneGroupStore,
    results: &LaneGroupResults,
    actions: &mut ResultsActions,
) {
    ui.heading("Lane groups");
    if results.is_empty() {
        ui.label("No lane groups yet.");
        return;
    }

    egui::ScrollArea::vertical()
        .max_height(ui.available_height() * 0.6)
        .show(ui, |ui| {
            egui::Grid::new("lane_group_results")
                .num_columns(COLUMNS.len())
                .striped(true)
                .show(ui, |ui| {
                    for title in COLUMNS {
                        ui.strong(title);
                    }
                    ui.end_row();

                    for (id, result) in &results.rows {
                        let Some(group) = store.get(*id) else {
                            continue;
                        };
                        let input = group.input();
                        ui.label(group.label());
                        ui.label(format::fixed(input.volume, 0));
                        ui.label(format::fixed(input.effective_green, 1));
                        ui.label(format::fixed(result.effective_saturation_flow, 0));
                        ui.label(format::fixed(result.capacity, 0));
                        ui.label(format::volume_to_capacity(result.volume_to_capacity));
                        ui.label(format::delay(result.total_delay));
                        grade_badge(ui, result.level_of_service);
                        if ui.small_button("Remove").clicked() {
                            actions.remove = Some(*id);
                        }
                        ui.end_row();
                    }
                });
        });
}

pub fn summary_section(
    ui: &mut egui::Ui,
    summary: &IntersectionSummary,
    distribution: &LosDistribution,
) {
    ui.heading("Intersection");
    egui::Grid::new("intersection_summary")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Weighted delay:");
            ui.label(format::weighted_delay(summary));
            ui.end_row();

            ui.label("LOS:");
            grade_badge(ui, summary.level_of_service);
            ui.end_row();

            ui.label("Total volume:");
            ui.label(format::total_volume(summary));
            ui.end_row();

            ui.label("Worst lane group:");
            grade_badge(ui, distribution.worst());
            ui.end_row();
        });

    if let Some(note) = format::excluded_note(summary) {
        let warn = ui.visuals().warn_fg_color;
        ui.colored_label(warn, note);
    }

    if distribution.total > 0 {
        ui.horizontal_wrapped(|ui| {
            for grade in LosGrade::ALL {
                let count = distribution.counts[grade as usize];
                if count > 0 {
                    ui.colored_label(
                        theme::los_color(Some(grade)),
                        format::grade_share(grade, count, distribution.percentage(grade)),
                    );
                }
            }
            if distribution.undefined > 0 {
                ui.colored_label(
                    theme::UNGRADED,
                    format!("{}: {}", format::UNDEFINED, distribution.undefined),
                );
            }
        });
        ui.label(format!(
            "{:.0}% of lane groups at LOS D or worse",
            distribution.congested_percentage()
        ));
    }
}

pub fn action_bar(
    ui: &mut egui::Ui,
    store: &LaneGroupStore,
    status: &ExportStatus,
    actions: &mut ResultsActions,
) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!store.is_empty(), egui::Button::new("Clear all"))
            .clicked()
        {
            actions.clear_all = true;
        }
        if ui.button("Export CSV").clicked() {
            actions.export = true;
        }
        if ui.button("Import CSV").clicked() {
            actions.import = true;
        }
    });

    if let Some(message) = &status.message {
        let color = if status.failed {
            ui.visuals().error_fg_color
        } else {
            theme::STATUS_OK
        };
        ui.colored_label(color, message);
    }
}

#[derive(SystemParam)]
pub struct ResultsWriters<'w> {
    removes: EventWriter<'w, RemoveLaneGroupEvent>,
    clears: EventWriter<'w, ClearLaneGroupsEvent>,
    exports: EventWriter<'w, export::ExportCsvEvent>,
    imports: EventWriter<'w, export::ImportCsvEvent>,
}

impl ResultsWriters<'_> {
    pub fn send(&mut self, actions: ResultsActions) {
        if let Some(id) = actions.remove {
            self.removes.send(RemoveLaneGroupEvent { id });
        }
        if actions.clear_all {
            self.clears.send(ClearLaneGroupsEvent);
        }
        if actions.export {
            self.exports.send(export::ExportCsvEvent);
        }
        if actions.import {
            self.imports.send(export::ImportCsvEvent::default());
        }
    }
}
