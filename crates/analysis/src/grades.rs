//! Level of Service grade enum and control-delay classification.
//!
//! Grades use fixed control-delay thresholds (seconds per vehicle), with the
//! upper bound of each band belonging to the better grade:
//! - A: delay <= 10
//! - B: delay <= 20
//! - C: delay <= 35
//! - D: delay <= 55
//! - E: delay <= 80
//! - F: delay > 80
//!
//! An unbounded or undefined delay has no grade at all.

use crate::config::{
    LOS_A_MAX_DELAY, LOS_B_MAX_DELAY, LOS_C_MAX_DELAY, LOS_D_MAX_DELAY, LOS_E_MAX_DELAY,
};

/// Level of Service grade from A (best) to F (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LosGrade {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
}

impl LosGrade {
    pub const ALL: [LosGrade; 6] = [
        LosGrade::A,
        LosGrade::B,
        LosGrade::C,
        LosGrade::D,
        LosGrade::E,
        LosGrade::F,
    ];

    /// Classify a control delay (s/veh). Returns `None` for non-finite delays.
    pub fn from_delay(delay: f64) -> Option<Self> {
        if !delay.is_finite() {
            return None;
        }
        let grade = if delay <= LOS_A_MAX_DELAY {
            LosGrade::A
        } else if delay <= LOS_B_MAX_DELAY {
            LosGrade::B
        } else if delay <= LOS_C_MAX_DELAY {
            LosGrade::C
        } else if delay <= LOS_D_MAX_DELAY {
            LosGrade::D
        } else if delay <= LOS_E_MAX_DELAY {
            LosGrade::E
        } else {
            LosGrade::F
        };
        Some(grade)
    }

    /// Control-delay band of the grade, for tooltips.
    pub fn label(self) -> &'static str {
        match self {
            LosGrade::A => "LOS A: up to 10 s/veh",
            LosGrade::B => "LOS B: 10 to 20 s/veh",
            LosGrade::C => "LOS C: 20 to 35 s/veh",
            LosGrade::D => "LOS D: 35 to 55 s/veh",
            LosGrade::E => "LOS E: 55 to 80 s/veh",
            LosGrade::F => "LOS F: over 80 s/veh",
        }
    }

    /// RGBA color for grade badges.
    /// Green (A) -> Yellow (C) -> Red (F).
    pub fn color(self) -> [f32; 4] {
        match self {
            LosGrade::A => [0.0, 0.8, 0.0, 1.0], // green
            LosGrade::B => [0.4, 0.8, 0.0, 1.0], // yellow-green
            LosGrade::C => [0.8, 0.8, 0.0, 1.0], // yellow
            LosGrade::D => [1.0, 0.5, 0.0, 1.0], // orange
            LosGrade::E => [1.0, 0.2, 0.0, 1.0], // red-orange
            LosGrade::F => [0.8, 0.0, 0.0, 1.0], // red
        }
    }

    /// Single-character grade letter.
    pub fn letter(self) -> char {
        match self {
            LosGrade::A => 'A',
            LosGrade::B => 'B',
            LosGrade::C => 'C',
            LosGrade::D => 'D',
            LosGrade::E => 'E',
            LosGrade::F => 'F',
        }
    }
}
