// ABOUTME: Pace set types exchanged with the pace collaborator
// ABOUTME: Paces are seconds per mile; sets can be linearly blended for progressive pacing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A pace band in seconds per mile (`min` is the faster end)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceRange {
    /// Fastest pace of the band (seconds per mile)
    pub min: f64,
    /// Slowest pace of the band (seconds per mile)
    pub max: f64,
}

/// A single target pace in seconds per mile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPace {
    /// Target pace (seconds per mile)
    pub pace: f64,
}

/// Structured bundle of training paces derived from a reference performance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceSet {
    /// Easy/aerobic band
    pub easy: PaceRange,
    /// Lactate-threshold pace
    pub threshold: TargetPace,
    /// VO2max interval pace
    pub interval: TargetPace,
    /// Marathon race pace
    pub marathon: TargetPace,
}

fn lerp(from: f64, to: f64, fraction: f64) -> f64 {
    (to - from).mul_add(fraction, from)
}

impl PaceSet {
    /// Linearly blend two pace sets; `fraction` 0 returns `self`, 1 returns `goal`
    #[must_use]
    pub fn blend(&self, goal: &Self, fraction: f64) -> Self {
        let t = fraction.clamp(0.0, 1.0);
        Self {
            easy: PaceRange {
                min: lerp(self.easy.min, goal.easy.min, t),
                max: lerp(self.easy.max, goal.easy.max, t),
            },
            threshold: TargetPace {
                pace: lerp(self.threshold.pace, goal.threshold.pace, t),
            },
            interval: TargetPace {
                pace: lerp(self.interval.pace, goal.interval.pace, t),
            },
            marathon: TargetPace {
                pace: lerp(self.marathon.pace, goal.marathon.pace, t),
            },
        }
    }

    /// Format seconds-per-mile as `m:ss/mi`
    #[must_use]
    pub fn format_pace(seconds_per_mile: f64) -> String {
        let total = seconds_per_mile.round().max(0.0) as u64;
        format!("{}:{:02}/mi", total / 60, total % 60)
    }
}

/// A race result handed to the pace collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RacePerformance {
    /// Race distance (meters)
    pub distance_meters: f64,
    /// Finishing time (seconds)
    pub time_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pace_set(offset: f64) -> PaceSet {
        PaceSet {
            easy: PaceRange {
                min: 600.0 + offset,
                max: 660.0 + offset,
            },
            threshold: TargetPace {
                pace: 480.0 + offset,
            },
            interval: TargetPace {
                pace: 440.0 + offset,
            },
            marathon: TargetPace {
                pace: 520.0 + offset,
            },
        }
    }

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let current = pace_set(60.0);
        let goal = pace_set(0.0);

        assert_eq!(current.blend(&goal, 0.0), current);
        assert_eq!(current.blend(&goal, 1.0), goal);

        let mid = current.blend(&goal, 0.5);
        assert!((mid.threshold.pace - 510.0).abs() < 1e-9);
        assert!((mid.easy.max - 690.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(PaceSet::format_pace(485.4), "8:05/mi");
        assert_eq!(PaceSet::format_pace(600.0), "10:00/mi");
    }
}
