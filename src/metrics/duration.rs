//! Planned duration calculation for structured workouts.
//!
//! T031: Implement total duration fold over segments

use crate::workouts::types::WorkoutStructure;

/// Total planned minutes across all segments.
///
/// Two-level fold: each segment contributes its repeat count times the sum
/// of its step durations. Distance-based steps contribute their raw value,
/// which is only a true time estimate when the plan pre-normalizes them.
/// Empty structures yield 0.
pub fn total_minutes(structure: &WorkoutStructure) -> f64 {
    structure
        .structure
        .iter()
        .map(|segment| {
            let per_pass: f64 = segment.steps.iter().map(|s| s.length.as_minutes()).sum();
            segment.repeat_count() * per_pass
        })
        .sum()
}

/// Total planned hours, the unit the device calendar expects.
pub fn total_hours(structure: &WorkoutStructure) -> f64 {
    total_minutes(structure) / 60.0
}
