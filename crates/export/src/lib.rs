//! CSV export and import of lane groups.
//!
//! The export is a read-only projection of the lane group store: every input
//! column is written at full precision so an import followed by a
//! re-evaluation reproduces the same results. Derived columns are included
//! for people reading the file and ignored on import.

pub mod csv_format;
pub mod export_error;
pub mod files;
pub mod plugin;

pub use csv_format::{read_lane_groups, to_csv, write_csv, ImportedLaneGroups, CSV_HEADER};
pub use export_error::ExportError;
pub use files::{read_csv_file, write_csv_file, EXPORT_FILE_NAME};
pub use plugin::{ExportCsvEvent, ExportPlugin, ExportSettings, ExportStatus, ImportCsvEvent};
