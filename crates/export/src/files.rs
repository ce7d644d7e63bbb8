//! Reading and writing export files on disk.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use analysis::{FormDefaults, IntersectionTiming, LaneGroupStore};

use crate::csv_format::{read_lane_groups, to_csv, ImportedLaneGroups};
use crate::export_error::ExportError;

/// File name used for exports inside the export directory.
pub const EXPORT_FILE_NAME: &str = "los_lane_groups.csv";

/// Write the export into `directory`, creating it if needed. Returns the
/// path of the written file.
pub fn write_csv_file(
    directory: &Path,
    timing: &IntersectionTiming,
    store: &LaneGroupStore,
) -> Result<PathBuf, ExportError> {
    let csv = to_csv(timing, store)?;
    fs::create_dir_all(directory)?;
    let path = directory.join(EXPORT_FILE_NAME);
    fs::write(&path, csv)?;
    Ok(path)
}

/// Read lane groups back from an export file.
pub fn read_csv_file(path: &Path, defaults: &FormDefaults) -> Result<ImportedLaneGroups, ExportError> {
    let file = File::open(path)?;
    read_lane_groups(BufReader::new(file), defaults)
}
