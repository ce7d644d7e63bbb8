//! Display formatting for results. Non-finite values never render as numbers.

use analysis::{IntersectionSummary, LosGrade};

/// Placeholder for an undefined quantity.
pub const UNDEFINED: &str = "—";
/// Shown for an unbounded volume-to-capacity ratio.
pub const UNBOUNDED: &str = "∞";

/// Fixed-point with `digits` decimals, or the placeholder.
pub fn fixed(value: f64, digits: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", digits, value)
    } else {
        UNDEFINED.to_string()
    }
}

pub fn volume_to_capacity(x: f64) -> String {
    if x.is_finite() {
        format!("{:.2}", x)
    } else {
        UNBOUNDED.to_string()
    }
}

pub fn delay(d: f64) -> String {
    fixed(d, 1)
}

pub fn grade(grade: Option<LosGrade>) -> String {
    grade.map_or_else(|| UNDEFINED.to_string(), |g| g.letter().to_string())
}

pub fn weighted_delay(summary: &IntersectionSummary) -> String {
    match summary.weighted_delay {
        Some(d) if d.is_finite() => format!("{:.1} s/veh", d),
        _ => UNDEFINED.to_string(),
    }
}

pub fn total_volume(summary: &IntersectionSummary) -> String {
    if summary.total_volume > 0.0 && summary.total_volume.is_finite() {
        format!("{:.0} veh/hr", summary.total_volume)
    } else {
        UNDEFINED.to_string()
    }
}

/// One entry of the grade distribution, e.g. `B: 3 (60%)`.
pub fn grade_share(grade: LosGrade, count: u32, percentage: f32) -> String {
    format!("{}: {} ({:.0}%)", grade.letter(), count, percentage)
}

/// Note shown under the summary when lane groups were left out.
pub fn excluded_note(summary: &IntersectionSummary) -> Option<String> {
    match summary.excluded {
        0 => None,
        1 => Some("1 lane group with unbounded delay is not counted".to_string()),
        n => Some(format!(
            "{} lane groups with unbounded delay are not counted",
            n
        )),
    }
}
