//! Event-driven export/import for the running app.

use std::path::PathBuf;

use bevy::prelude::*;

use analysis::{AddLaneGroupEvent, AnalysisSet, FormDefaults, IntersectionTiming, LaneGroupStore};

use crate::files::{read_csv_file, write_csv_file, EXPORT_FILE_NAME};

/// Where exports are written (and imports are read from by default).
#[derive(Resource, Debug, Clone)]
pub struct ExportSettings {
    pub directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl ExportSettings {
    pub fn default_file(&self) -> PathBuf {
        self.directory.join(EXPORT_FILE_NAME)
    }
}

/// Outcome of the most recent export or import, for display.
#[derive(Resource, Debug, Clone, Default)]
pub struct ExportStatus {
    pub message: Option<String>,
    pub failed: bool,
}

impl ExportStatus {
    fn succeeded(&mut self, message: String) {
        self.message = Some(message);
        self.failed = false;
    }

    fn errored(&mut self, message: String) {
        self.message = Some(message);
        self.failed = true;
    }
}

/// Request an export of all current lane groups.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ExportCsvEvent;

/// Request an import. `None` reads the default export file.
#[derive(Event, Debug, Clone, Default)]
pub struct ImportCsvEvent {
    pub path: Option<PathBuf>,
}

pub struct ExportPlugin;

impl Plugin for ExportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ExportSettings>()
            .init_resource::<ExportStatus>()
            .add_event::<ExportCsvEvent>()
            .add_event::<ImportCsvEvent>()
            .add_systems(
                Update,
                (
                    handle_import_requests.before(AnalysisSet::Input),
                    handle_export_requests.in_set(AnalysisSet::Report),
                ),
            );
    }
}

/// Write the export file for each request.
pub fn handle_export_requests(
    mut events: EventReader<ExportCsvEvent>,
    settings: Res<ExportSettings>,
    timing: Res<IntersectionTiming>,
    store: Res<LaneGroupStore>,
    mut status: ResMut<ExportStatus>,
) {
    // Several clicks in one frame produce one file.
    if events.read().count() == 0 {
        return;
    }

    match write_csv_file(&settings.directory, &timing, &store) {
        Ok(path) => {
            info!(
                "Exported {} lane group(s) to {}",
                store.len(),
                path.display()
            );
            status.succeeded(format!(
                "Exported {} lane group(s) to {}",
                store.len(),
                path.display()
            ));
        }
        Err(e) => {
            error!("CSV export failed: {}", e);
            status.errored(format!("Export failed: {e}"));
        }
    }
}

/// Read lane groups from disk and append them as whole records. A cycle
/// length found in the file replaces the current one.
pub fn handle_import_requests(
    mut events: EventReader<ImportCsvEvent>,
    settings: Res<ExportSettings>,
    defaults: Res<FormDefaults>,
    mut timing: ResMut<IntersectionTiming>,
    mut adds: EventWriter<AddLaneGroupEvent>,
    mut status: ResMut<ExportStatus>,
) {
    for event in events.read() {
        let path = event
            .path
            .clone()
            .unwrap_or_else(|| settings.default_file());

        match read_csv_file(&path, &defaults) {
            Ok(imported) => {
                let count = imported.groups.len();
                if let Some(cycle) = imported.cycle_length {
                    let updated =
                        IntersectionTiming::new(cycle, timing.analysis_period(), timing.calibration());
                    if updated != *timing {
                        *timing = updated;
                    }
                }
                for (label, input) in imported.groups {
                    adds.send(AddLaneGroupEvent { label, input });
                }
                info!("Imported {} lane group(s) from {}", count, path.display());
                status.succeeded(format!(
                    "Imported {} lane group(s) from {}",
                    count,
                    path.display()
                ));
            }
            Err(e) => {
                warn!("CSV import from {} failed: {}", path.display(), e);
                status.errored(format!("Import failed: {e}"));
            }
        }
    }
}
