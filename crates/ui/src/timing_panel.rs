//! Intersection timing and form defaults.
//!
//! Values are written back only when a widget actually changed, so an idle
//! panel does not trigger a recompute every frame.

use bevy::prelude::*;
use bevy_egui::egui;

use analysis::config::{
    ANALYSIS_PERIOD_MAX, ANALYSIS_PERIOD_MIN, CALIBRATION_MAX, CALIBRATION_MIN, CYCLE_LENGTH_MAX,
    CYCLE_LENGTH_MIN, PEAK_HOUR_FACTOR_MAX, PEAK_HOUR_FACTOR_MIN, SATURATION_FLOW_MIN,
};
use analysis::{FormDefaults, IntersectionTiming};

pub fn timing_section(ui: &mut egui::Ui, timing: &mut ResMut<IntersectionTiming>) {
    let mut cycle = timing.cycle_length();
    let mut period = timing.analysis_period();
    let mut calibration = timing.calibration();

    ui.heading("Intersection");
    egui::Grid::new("timing_grid").num_columns(2).show(ui, |ui| {
        ui.label("Cycle length C:");
        ui.add(
            egui::DragValue::new(&mut cycle)
                .range(CYCLE_LENGTH_MIN..=CYCLE_LENGTH_MAX)
                .speed(1.0)
                .suffix(" s"),
        );
        ui.end_row();

        ui.label("Analysis period T:");
        ui.add(
            egui::DragValue::new(&mut period)
                .range(ANALYSIS_PERIOD_MIN..=ANALYSIS_PERIOD_MAX)
                .speed(0.05)
                .suffix(" h"),
        );
        ui.end_row();

        ui.label("Calibration k:");
        ui.add(
            egui::DragValue::new(&mut calibration)
                .range(CALIBRATION_MIN..=CALIBRATION_MAX)
                .speed(0.05),
        );
        ui.end_row();
    });

    let updated = IntersectionTiming::new(cycle, period, calibration);
    if updated != **timing {
        **timing = updated;
    }
}

pub fn defaults_section(ui: &mut egui::Ui, defaults: &mut ResMut<FormDefaults>) {
    let mut edited = **defaults;

    ui.collapsing("Defaults for blank fields", |ui| {
        egui::Grid::new("form_defaults_grid")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Saturation flow s0:");
                ui.add(
                    egui::DragValue::new(&mut edited.saturation_flow)
                        .range(SATURATION_FLOW_MIN..=f64::MAX)
                        .speed(10.0)
                        .suffix(" veh/h/ln"),
                );
                ui.end_row();

                ui.label("PHF:");
                ui.add(
                    egui::DragValue::new(&mut edited.peak_hour_factor)
                        .range(PEAK_HOUR_FACTOR_MIN..=PEAK_HOUR_FACTOR_MAX)
                        .speed(0.01),
                );
                ui.end_row();

                ui.label("Startup loss L:");
                ui.add(
                    egui::DragValue::new(&mut edited.startup_loss)
                        .range(0.0..=f64::MAX)
                        .speed(0.1)
                        .suffix(" s"),
                );
                ui.end_row();
            });
    });

    if edited != **defaults {
        **defaults = edited;
    }
}
