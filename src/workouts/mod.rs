//! Workout module for structured training sessions.

pub mod types;
pub mod validate;

pub use types::{
    IntensityClass, Length, LengthUnit, Segment, SegmentKind, Step, Target, TargetType,
    TargetUnit, Workout, WorkoutStructure,
};
pub use validate::{validate_structure, validate_workout, ValidationError};
