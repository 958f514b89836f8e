// ABOUTME: Turns a template recipe, a distance, and week paces into concrete workout segments
// ABOUTME: Segment distances always add up to the prescribed total
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use stride_core::models::{PaceSet, WorkoutSegment};

/// Meters per statute mile
const METERS_PER_MILE: f64 = 1_609.344;

/// Extra seconds per mile on top of the slow end of the easy band for recovery runs
const RECOVERY_PACE_OFFSET: f64 = 30.0;

/// Long runs at or beyond this distance carry a fueling note (miles)
const FUELING_THRESHOLD_MILES: f64 = 14.0;

/// Share of each repeat spent on the recovery jog, relative to the repeat
const REPEAT_RECOVERY_SHARE: f64 = 0.5;

/// Training intensity a segment targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceZone {
    /// Very easy running
    Recovery,
    /// Aerobic band
    Easy,
    /// Marathon race pace
    Marathon,
    /// Lactate threshold
    Threshold,
    /// VO2max
    Interval,
}

impl PaceZone {
    /// Pace text for this zone
    #[must_use]
    pub fn describe(self, paces: &PaceSet) -> String {
        match self {
            Self::Recovery => {
                PaceSet::format_pace(paces.easy.max + RECOVERY_PACE_OFFSET) + " or slower"
            }
            Self::Easy => format!(
                "{} - {}",
                PaceSet::format_pace(paces.easy.min),
                PaceSet::format_pace(paces.easy.max)
            ),
            Self::Marathon => PaceSet::format_pace(paces.marathon.pace),
            Self::Threshold => PaceSet::format_pace(paces.threshold.pace),
            Self::Interval => PaceSet::format_pace(paces.interval.pace),
        }
    }
}

/// Structure recipe attached to a catalogue template
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prescription {
    /// One continuous run, optionally followed by strides
    Steady {
        /// Target zone
        zone: PaceZone,
        /// Number of 20 second strides after the run
        strides: u32,
    },
    /// Warm-up, continuous threshold block, cool-down
    ContinuousTempo,
    /// Threshold repeats with short recoveries
    CruiseIntervals {
        /// Repeat length (miles)
        rep_miles: f64,
        /// Recovery description
        recovery: &'static str,
    },
    /// Marathon pace into threshold
    Progression,
    /// VO2max track repeats
    Repeats {
        /// Repeat length (meters)
        rep_meters: u32,
        /// Recovery description
        recovery: &'static str,
    },
    /// Uphill repeats
    HillRepeats {
        /// Climb duration (seconds)
        seconds: u32,
        /// Recovery description
        recovery: &'static str,
    },
    /// Easy long run with an optional marathon-pace finish
    LongRun {
        /// Share of the distance run at marathon pace at the end
        finish_share: f64,
    },
    /// Long run in three increasingly fast thirds
    ProgressiveLongRun,
    /// Bike session in equivalence miles
    Ride {
        /// Number of two minute surges
        surges: u32,
    },
}

/// Concrete output of a prescription
#[derive(Debug, Clone, PartialEq)]
pub struct Prescribed {
    /// Ordered segments whose distances sum to the total
    pub structure: Vec<WorkoutSegment>,
    /// Safety guidance
    pub safety_notes: Vec<String>,
}

fn round_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

fn segment(label: impl Into<String>, distance: f64, pace: String) -> WorkoutSegment {
    WorkoutSegment {
        label: label.into(),
        distance: round_tenth(distance.max(0.0)),
        pace,
        recovery: None,
    }
}

/// Warm-up and cool-down length for a quality session of `distance` miles
fn bookend_miles(distance: f64) -> f64 {
    if distance >= 6.0 {
        1.5
    } else if distance >= 4.0 {
        1.0
    } else {
        round_tenth(distance * 0.25)
    }
}

/// Wrap a main set with warm-up and cool-down; the main set absorbs rounding
fn with_bookends(
    distance: f64,
    paces: &PaceSet,
    main: impl FnOnce(f64) -> Vec<WorkoutSegment>,
) -> Vec<WorkoutSegment> {
    let bookend = bookend_miles(distance);
    let easy = PaceZone::Easy.describe(paces);
    let mut structure = vec![segment("Warm-up", bookend, easy.clone())];
    structure.extend(main(round_tenth(distance - 2.0 * bookend)));
    structure.push(segment("Cool-down", bookend, easy));
    absorb_residual(&mut structure, distance, 1);
    structure
}

/// Push any rounding residue onto segment `index` so the structure sums to `distance`
fn absorb_residual(structure: &mut [WorkoutSegment], distance: f64, index: usize) {
    let total: f64 = structure.iter().map(|s| s.distance).sum();
    let residual = round_tenth(distance - total);
    if residual.abs() > f64::EPSILON {
        if let Some(target) = structure.get_mut(index) {
            target.distance = round_tenth((target.distance + residual).max(0.0));
        }
    }
}

/// Split `distance` into parts by share; the final part absorbs rounding
fn split(distance: f64, shares: &[f64]) -> Vec<f64> {
    let mut parts: Vec<f64> = shares.iter().map(|s| round_tenth(distance * s)).collect();
    let assigned: f64 = parts.iter().rev().skip(1).sum();
    if let Some(last) = parts.last_mut() {
        *last = round_tenth(distance - assigned);
    }
    parts
}

impl Prescription {
    /// Build the segments for `distance` miles at week-specific `paces`
    #[must_use]
    pub fn prescribe(&self, distance: f64, paces: &PaceSet) -> Prescribed {
        let structure = match *self {
            Self::Steady { zone, strides } => {
                let mut structure = vec![segment("Run", distance, zone.describe(paces))];
                if strides > 0 {
                    structure.push(segment(
                        format!("{strides} x 20s strides"),
                        0.0,
                        "fast but relaxed".to_owned(),
                    ));
                }
                structure
            }
            Self::ContinuousTempo => with_bookends(distance, paces, |main| {
                vec![segment("Tempo", main, PaceZone::Threshold.describe(paces))]
            }),
            Self::CruiseIntervals {
                rep_miles,
                recovery,
            } => with_bookends(distance, paces, |main| {
                let cycle = rep_miles * (1.0 + REPEAT_RECOVERY_SHARE / 2.0);
                let reps = (main / cycle).floor().max(1.0) as u32;
                let mut rep = segment(
                    format!("{reps} x {rep_miles} mi"),
                    main,
                    PaceZone::Threshold.describe(paces),
                );
                rep.recovery = Some(recovery.to_owned());
                vec![rep]
            }),
            Self::Progression => with_bookends(distance, paces, |main| {
                let parts = split(main, &[0.5, 0.5]);
                vec![
                    segment("Marathon pace", parts[0], PaceZone::Marathon.describe(paces)),
                    segment("Threshold", parts[1], PaceZone::Threshold.describe(paces)),
                ]
            }),
            Self::Repeats {
                rep_meters,
                recovery,
            } => with_bookends(distance, paces, |main| {
                let rep_miles = f64::from(rep_meters) / METERS_PER_MILE;
                let cycle = rep_miles * (1.0 + REPEAT_RECOVERY_SHARE);
                let reps = (main / cycle).floor().max(1.0) as u32;
                let mut rep = segment(
                    format!("{reps} x {rep_meters}m"),
                    main,
                    PaceZone::Interval.describe(paces),
                );
                rep.recovery = Some(recovery.to_owned());
                vec![rep]
            }),
            Self::HillRepeats { seconds, recovery } => with_bookends(distance, paces, |main| {
                // Climb at roughly 6:00/mi effort, jog down the same distance
                let cycle = 2.0 * f64::from(seconds) / 360.0;
                let reps = (main / cycle).floor().max(1.0) as u32;
                let mut rep = segment(
                    format!("{reps} x {seconds}s uphill"),
                    main,
                    format!("hard effort (about {})", PaceZone::Interval.describe(paces)),
                );
                rep.recovery = Some(recovery.to_owned());
                vec![rep]
            }),
            Self::LongRun { finish_share } if finish_share > 0.0 => {
                let parts = split(distance, &[1.0 - finish_share, finish_share]);
                vec![
                    segment("Easy", parts[0], PaceZone::Easy.describe(paces)),
                    segment("Marathon-pace finish", parts[1], PaceZone::Marathon.describe(paces)),
                ]
            }
            Self::LongRun { .. } => {
                vec![segment("Long run", distance, PaceZone::Easy.describe(paces))]
            }
            Self::ProgressiveLongRun => {
                let parts = split(distance, &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
                vec![
                    segment("Relaxed", parts[0], PaceSet::format_pace(paces.easy.max)),
                    segment("Steady", parts[1], PaceSet::format_pace(paces.easy.min)),
                    segment("Strong", parts[2], PaceZone::Marathon.describe(paces)),
                ]
            }
            Self::Ride { surges } => {
                let label = if surges > 0 {
                    format!("Ride with {surges} x 2:00 surges")
                } else {
                    "Easy spin".to_owned()
                };
                vec![segment(label, distance, "conversational effort".to_owned())]
            }
        };

        Prescribed {
            structure,
            safety_notes: self.safety_notes(distance),
        }
    }

    fn safety_notes(&self, distance: f64) -> Vec<String> {
        let mut notes = Vec::new();
        match self {
            Self::ContinuousTempo | Self::CruiseIntervals { .. } | Self::Progression => {
                notes.push(
                    "Keep threshold work comfortably hard; stop if pain changes your stride."
                        .to_owned(),
                );
            }
            Self::Repeats { .. } => {
                notes.push(
                    "Take the full recovery between repeats and do not race the reps.".to_owned(),
                );
            }
            Self::HillRepeats { .. } => {
                notes.push(
                    "Jog the descents gently; avoid fast downhill running on tired legs."
                        .to_owned(),
                );
            }
            Self::LongRun { .. } | Self::ProgressiveLongRun
                if distance >= FUELING_THRESHOLD_MILES =>
            {
                notes.push("Carry fluids and take fuel every 40-45 minutes.".to_owned());
            }
            _ => {}
        }
        notes
    }
}
