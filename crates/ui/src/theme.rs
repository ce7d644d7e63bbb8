use bevy_egui::{egui, EguiContexts};

use analysis::LosGrade;

pub const SIDE_PANEL_WIDTH: f32 = 320.0;
pub const UNGRADED: egui::Color32 = egui::Color32::GRAY;
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(90, 190, 110);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(220, 70, 60);
const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(32, 35, 42);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(90, 150, 210);

/// Dark visuals with the status and grade colors wired into egui's own
/// warning and error text, which the results panel reads back.
pub fn apply_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = PANEL_FILL;
    visuals.window_fill = PANEL_FILL;
    visuals.error_fg_color = STATUS_ERROR;
    visuals.warn_fg_color = los_color(Some(LosGrade::D));
    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    ctx.set_visuals(visuals);
}

/// Badge color for a grade; ungraded groups are gray.
pub fn los_color(grade: Option<LosGrade>) -> egui::Color32 {
    let Some(grade) = grade else {
        return UNGRADED;
    };
    let [r, g, b, a] = grade.color().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
