//! Training stress estimation from structured power targets.
//!
//! T033: Implement TSS/IF estimation for planned workouts

use crate::metrics::duration::total_minutes;
use crate::workouts::types::WorkoutStructure;

/// Estimated training stress for a structured workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressEstimate {
    /// Intensity factor relative to threshold power (1.0 = at threshold).
    pub intensity_factor: f64,
    /// Training stress score; one hour at threshold scores 100.
    pub tss: f64,
}

/// Estimate training stress from a structure's power targets.
///
/// The duration-weighted mean of the power-target midpoints gives the
/// average intensity; TSS follows as hours x IF^2 x 100. Steps with no
/// power target are excluded from the intensity weighting. Returns `None`
/// when no step carries a power target.
pub fn estimate_stress(structure: &WorkoutStructure) -> Option<StressEstimate> {
    let mut weighted_percent = 0.0;
    let mut powered_minutes = 0.0;

    for segment in &structure.structure {
        let reps = segment.repeat_count();
        for step in &segment.steps {
            if let Some(target) = step.power_target() {
                let minutes = step.length.as_minutes() * reps;
                weighted_percent += target.midpoint() * minutes;
                powered_minutes += minutes;
            }
        }
    }

    if powered_minutes <= 0.0 {
        return None;
    }

    let intensity_factor = weighted_percent / powered_minutes / 100.0;
    let hours = total_minutes(structure) / 60.0;
    let tss = hours * intensity_factor * intensity_factor * 100.0;

    Some(StressEstimate {
        intensity_factor,
        tss,
    })
}
