use std::ffi::OsString;
use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use export::ExportSettings;

/// Directory that CSV exports are written to and imported from.
const EXPORT_DIR_VAR: &str = "LOS_CALC_EXPORT_DIR";

fn main() {
    let settings = export_settings(std::env::var_os(EXPORT_DIR_VAR));

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Signalized LOS Calculator".to_string(),
                resolution: (1280.0, 760.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive(std::time::Duration::from_millis(100)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_secs(1)),
        })
        .insert_resource(settings)
        .add_plugins((analysis::AnalysisPlugin, export::ExportPlugin, ui::UiPlugin))
        .add_systems(Startup, (spawn_camera, log_export_directory))
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn log_export_directory(settings: Res<ExportSettings>) {
    info!("CSV export directory: {}", settings.directory.display());
}

/// Export settings from the environment; an unset or empty variable keeps
/// the current directory.
fn export_settings(dir: Option<OsString>) -> ExportSettings {
    match dir {
        Some(dir) if !dir.is_empty() => ExportSettings {
            directory: PathBuf::from(dir),
        },
        _ => ExportSettings::default(),
    }
}
