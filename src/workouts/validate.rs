//! Structure-level validation for plan-generated workouts.
//!
//! T023: Implement workout structure validation
//!
//! Validation is an explicit step callers run before estimating or encoding.
//! The metrics and sync modules assume validated input and produce
//! nonsensical but non-crashing numbers when given invalid values.

use thiserror::Error;

use super::types::{Workout, WorkoutStructure};

/// Errors from validating a workout structure.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Segment repeat count must be positive
    #[error("segment {segment} has a non-positive repeat count")]
    NonPositiveRepeat { segment: usize },

    /// Step length must be positive
    #[error("step '{step}' in segment {segment} has a non-positive length")]
    NonPositiveLength { segment: usize, step: String },

    /// Target range must satisfy 0 <= min <= max
    #[error("step '{step}' in segment {segment} has an invalid target range {min}..{max}")]
    InvalidTargetRange {
        segment: usize,
        step: String,
        min: f64,
        max: f64,
    },
}

/// Validate every segment and step of a workout's structure.
///
/// Unstructured workouts pass.
pub fn validate_workout(workout: &Workout) -> Result<(), ValidationError> {
    match &workout.structure {
        Some(structure) => validate_structure(structure),
        None => Ok(()),
    }
}

/// Validate a structure directly, reporting the first offending value.
pub fn validate_structure(structure: &WorkoutStructure) -> Result<(), ValidationError> {
    for (index, segment) in structure.structure.iter().enumerate() {
        if !segment.length.is_valid() {
            return Err(ValidationError::NonPositiveRepeat { segment: index });
        }

        for step in &segment.steps {
            if !step.length.is_valid() {
                return Err(ValidationError::NonPositiveLength {
                    segment: index,
                    step: step.name.clone(),
                });
            }

            for target in &step.targets {
                if !target.is_valid() {
                    return Err(ValidationError::InvalidTargetRange {
                        segment: index,
                        step: step.name.clone(),
                        min: target.min_value,
                        max: target.max_value,
                    });
                }
            }
        }
    }

    Ok(())
}
