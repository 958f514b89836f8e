// ABOUTME: Periodization phases and per-week numeric targets
// ABOUTME: PhasePlan blocks are contiguous and cover every week of the plan exactly once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Periodization phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Aerobic foundation
    Base,
    /// Progressive volume and quality
    Build,
    /// Highest load, race-specific work
    Peak,
    /// Volume reduction before race day
    Taper,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base"),
            Self::Build => write!(f, "Build"),
            Self::Peak => write!(f, "Peak"),
            Self::Taper => write!(f, "Taper"),
        }
    }
}

/// An inclusive range of weeks assigned to one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseBlock {
    /// Phase for this range
    pub phase: Phase,
    /// First week (1-based, inclusive)
    pub start_week: u32,
    /// Last week (inclusive)
    pub end_week: u32,
}

impl PhaseBlock {
    /// Number of weeks in the block
    #[must_use]
    pub const fn len(&self) -> u32 {
        (self.end_week + 1).saturating_sub(self.start_week)
    }

    /// Whether the block has no weeks (never produced by the distributor)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end_week < self.start_week
    }

    /// Whether `week` falls inside this block
    #[must_use]
    pub const fn contains(&self, week: u32) -> bool {
        week >= self.start_week && week <= self.end_week
    }
}

/// Ordered phase layout of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePlan {
    /// Total plan length (weeks)
    pub total_weeks: u32,
    /// Contiguous blocks in chronological order
    pub blocks: Vec<PhaseBlock>,
}

impl PhasePlan {
    /// Phase that owns `week`, if the week belongs to the plan
    #[must_use]
    pub fn phase_for_week(&self, week: u32) -> Option<Phase> {
        self.blocks
            .iter()
            .find(|block| block.contains(week))
            .map(|block| block.phase)
    }

    /// Total weeks assigned to `phase`
    #[must_use]
    pub fn weeks_in(&self, phase: Phase) -> u32 {
        self.blocks
            .iter()
            .filter(|block| block.phase == phase)
            .map(PhaseBlock::len)
            .sum()
    }

    /// Number of taper weeks
    #[must_use]
    pub fn taper_weeks(&self) -> u32 {
        self.weeks_in(Phase::Taper)
    }

    /// Weeks before the taper (Base + Build + Peak)
    #[must_use]
    pub fn training_weeks(&self) -> u32 {
        self.total_weeks.saturating_sub(self.taper_weeks())
    }

    /// 1-based position of `week` inside the taper, if it is a taper week
    #[must_use]
    pub fn taper_index(&self, week: u32) -> Option<u32> {
        let training = self.training_weeks();
        (week > training && week <= self.total_weeks).then(|| week - training)
    }

    /// Whether the blocks are contiguous and cover exactly `[1, total_weeks]`
    #[must_use]
    pub fn covers_all_weeks(&self) -> bool {
        let mut expected_start = 1;
        for block in &self.blocks {
            if block.is_empty() || block.start_week != expected_start {
                return false;
            }
            expected_start = block.end_week + 1;
        }
        expected_start == self.total_weeks + 1
    }
}

/// Numeric training target for one week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekTarget {
    /// 1-based week number
    pub week_number: u32,
    /// Phase owning this week
    pub phase: Phase,
    /// Planned weekly volume (miles)
    pub weekly_mileage: f64,
    /// Planned long run (miles)
    pub long_run: f64,
    /// Tempo workout size (miles)
    pub tempo_distance: f64,
    /// Interval workout size (miles)
    pub interval_distance: f64,
    /// Hill workout size (miles)
    pub hill_distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> PhasePlan {
        PhasePlan {
            total_weeks: 10,
            blocks: vec![
                PhaseBlock {
                    phase: Phase::Base,
                    start_week: 1,
                    end_week: 2,
                },
                PhaseBlock {
                    phase: Phase::Build,
                    start_week: 3,
                    end_week: 6,
                },
                PhaseBlock {
                    phase: Phase::Peak,
                    start_week: 7,
                    end_week: 8,
                },
                PhaseBlock {
                    phase: Phase::Taper,
                    start_week: 9,
                    end_week: 10,
                },
            ],
        }
    }

    #[test]
    fn test_phase_lookup_and_counts() {
        let plan = sample_plan();
        assert!(plan.covers_all_weeks());
        assert_eq!(plan.phase_for_week(1), Some(Phase::Base));
        assert_eq!(plan.phase_for_week(7), Some(Phase::Peak));
        assert_eq!(plan.phase_for_week(11), None);
        assert_eq!(plan.taper_weeks(), 2);
        assert_eq!(plan.training_weeks(), 8);
        assert_eq!(plan.taper_index(9), Some(1));
        assert_eq!(plan.taper_index(8), None);
    }

    #[test]
    fn test_gap_breaks_coverage() {
        let mut plan = sample_plan();
        plan.blocks[1].start_week = 4;
        assert!(!plan.covers_all_weeks());
    }
}
