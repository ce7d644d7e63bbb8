//! Per-grade counts across the lane groups of the intersection.

use bevy::prelude::*;

use crate::grades::LosGrade;

/// How many lane groups sit at each LOS grade.
#[derive(Resource, Default, Clone, Debug, PartialEq)]
pub struct LosDistribution {
    /// Count of lane groups at each LOS grade, indexed A=0..F=5.
    pub counts: [u32; 6],
    /// Lane groups whose delay is unbounded (no grade).
    pub undefined: u32,
    /// Total number of lane groups, graded or not.
    pub total: u32,
}

impl LosDistribution {
    /// Percentage of lane groups at the given grade (0.0-100.0).
    pub fn percentage(&self, grade: LosGrade) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts[grade as usize] as f32 / self.total as f32 * 100.0
    }

    /// Percentage of lane groups at LOS D, E, F or without a grade.
    pub fn congested_percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        let congested = self.counts[3] + self.counts[4] + self.counts[5] + self.undefined;
        congested as f32 / self.total as f32 * 100.0
    }

    /// Worst grade present, if any lane group is graded.
    pub fn worst(&self) -> Option<LosGrade> {
        LosGrade::ALL
            .iter()
            .rev()
            .copied()
            .find(|&g| self.counts[g as usize] > 0)
    }

    /// Rebuild the counts from a sequence of lane group grades.
    pub fn recompute<I>(&mut self, grades: I)
    where
        I: IntoIterator<Item = Option<LosGrade>>,
    {
        self.counts = [0; 6];
        self.undefined = 0;
        self.total = 0;
        for grade in grades {
            self.total += 1;
            match grade {
                Some(g) => self.counts[g as usize] += 1,
                None => self.undefined += 1,
            }
        }
    }
}
