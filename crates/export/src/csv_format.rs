//! Tabular export of lane groups and their results, and the matching import.
//!
//! Export columns, in order:
//!
//! ```text
//! Label,v_vehhr,lanes,g_sec,C_sec,phf,mult,s0_vehhrln,hvPct,ET,laneWidth_ft,L_sec,arrivalType,
//! sEffTotal_vehhr,cap_vehhr,vc,delay_sveh,LOS
//! ```
//!
//! The first thirteen columns are the lane group inputs (plus the shared cycle
//! length) written at full precision, so re-importing them reproduces the
//! same results. The last five are derived and only informative: saturation
//! flow and capacity are rounded to whole vehicles, and an unbounded v/c,
//! delay or grade is an empty cell. Import ignores the derived columns.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use analysis::{
    evaluate, FormDefaults, IntersectionTiming, LaneGroupDraft, LaneGroupInput, LaneGroupStore,
};

use crate::export_error::ExportError;

pub const CSV_HEADER: [&str; 18] = [
    "Label",
    "v_vehhr",
    "lanes",
    "g_sec",
    "C_sec",
    "phf",
    "mult",
    "s0_vehhrln",
    "hvPct",
    "ET",
    "laneWidth_ft",
    "L_sec",
    "arrivalType",
    "sEffTotal_vehhr",
    "cap_vehhr",
    "vc",
    "delay_sveh",
    "LOS",
];

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    label: &'a str,
    volume: f64,
    lanes: u32,
    effective_green: f64,
    cycle_length: f64,
    peak_hour_factor: f64,
    demand_multiplier: f64,
    saturation_flow: f64,
    heavy_vehicle_percent: f64,
    passenger_car_equivalent: f64,
    lane_width_ft: f64,
    startup_loss: f64,
    arrival_type: i32,
    effective_saturation_flow: i64,
    capacity: i64,
    volume_to_capacity: Option<f64>,
    delay: Option<f64>,
    level_of_service: Option<char>,
}

/// Input columns read back on import. Every column is optional and read as
/// text so malformed cells go through the same fallbacks as the entry form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImportRow {
    #[serde(rename = "Label")]
    label: String,
    #[serde(rename = "v_vehhr")]
    volume: String,
    lanes: String,
    #[serde(rename = "g_sec")]
    effective_green: String,
    #[serde(rename = "C_sec")]
    cycle_length: String,
    phf: String,
    mult: String,
    #[serde(rename = "s0_vehhrln")]
    saturation_flow: String,
    #[serde(rename = "hvPct")]
    heavy_vehicle_percent: String,
    #[serde(rename = "ET")]
    passenger_car_equivalent: String,
    #[serde(rename = "laneWidth_ft")]
    lane_width_ft: String,
    #[serde(rename = "L_sec")]
    startup_loss: String,
    #[serde(rename = "arrivalType")]
    arrival_type: String,
}

impl ImportRow {
    fn into_draft(self) -> LaneGroupDraft {
        LaneGroupDraft {
            label: self.label,
            volume: self.volume,
            lanes: self.lanes,
            effective_green: self.effective_green,
            peak_hour_factor: self.phf,
            saturation_flow: self.saturation_flow,
            heavy_vehicle_percent: self.heavy_vehicle_percent,
            passenger_car_equivalent: self.passenger_car_equivalent,
            lane_width_ft: self.lane_width_ft,
            startup_loss: self.startup_loss,
            arrival_type: self.arrival_type,
            demand_multiplier: self.mult,
        }
    }
}

/// Lane groups read back from an export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedLaneGroups {
    /// Cycle length of the first row, if it parsed to a finite number.
    pub cycle_length: Option<f64>,
    /// `(label, input)` pairs in file order.
    pub groups: Vec<(String, LaneGroupInput)>,
}

/// Write the header and one row per lane group, in store order.
pub fn write_csv<W: Write>(
    writer: W,
    timing: &IntersectionTiming,
    store: &LaneGroupStore,
) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;

    for group in store.iter() {
        let input = group.input();
        let result = evaluate(input, timing);
        wtr.serialize(ExportRow {
            label: group.label(),
            volume: input.volume,
            lanes: input.lane_count,
            effective_green: input.effective_green,
            cycle_length: timing.cycle_length(),
            peak_hour_factor: input.peak_hour_factor,
            demand_multiplier: input.demand_multiplier,
            saturation_flow: input.base_saturation_flow,
            heavy_vehicle_percent: input.heavy_vehicle_percent,
            passenger_car_equivalent: input.passenger_car_equivalent,
            lane_width_ft: input.lane_width_ft,
            startup_loss: input.startup_loss,
            arrival_type: input.arrival_type,
            effective_saturation_flow: result.effective_saturation_flow.round() as i64,
            capacity: result.capacity.round() as i64,
            volume_to_capacity: Some(result.volume_to_capacity).filter(|x| x.is_finite()),
            delay: Some(result.total_delay).filter(|d| d.is_finite()),
            level_of_service: result.level_of_service.map(|g| g.letter()),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the export as a string.
pub fn to_csv(timing: &IntersectionTiming, store: &LaneGroupStore) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, timing, store)?;
    String::from_utf8(buffer).map_err(|e| ExportError::Encoding(e.to_string()))
}

/// Read lane groups from an export. Blank optional cells take `defaults`,
/// malformed cells take the per-field fallbacks.
pub fn read_lane_groups<R: Read>(
    reader: R,
    defaults: &FormDefaults,
) -> Result<ImportedLaneGroups, ExportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut imported = ImportedLaneGroups::default();
    for row in rdr.deserialize::<ImportRow>() {
        let row = row?;
        if imported.cycle_length.is_none() && imported.groups.is_empty() {
            imported.cycle_length = row
                .cycle_length
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|c| c.is_finite());
        }
        let draft = row.into_draft();
        let input = draft.to_input(defaults);
        imported.groups.push((draft.label().to_string(), input));
    }
    Ok(imported)
}
