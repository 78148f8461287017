//! Workout data model types.
//!
//! T021: Define Length, Target, Step, Segment structs and enums
//! T022: Implement per-value validators and unit conversions
//!
//! These types mirror the plan-generation JSON. Instances are built once by
//! plan generation or manual entry and consumed read-only by the metrics,
//! sync and schedule modules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unit of a [`Length`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LengthUnit {
    /// Seconds (time)
    Second,
    /// Minutes (time)
    Minute,
    /// Hours (time)
    Hour,
    /// Meters (distance)
    Meter,
    /// Kilometers (distance)
    Kilometer,
    /// Miles (distance)
    Mile,
    /// Repeat count (segments only)
    Repetition,
}

impl LengthUnit {
    /// Whether this unit measures time.
    pub fn is_time(&self) -> bool {
        matches!(
            self,
            LengthUnit::Second | LengthUnit::Minute | LengthUnit::Hour
        )
    }
}

/// A tagged length: step duration, step distance, or segment repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub unit: LengthUnit,
    pub value: f64,
}

impl Length {
    pub fn new(unit: LengthUnit, value: f64) -> Self {
        Self { unit, value }
    }

    /// Length of `value` seconds.
    pub fn seconds(value: f64) -> Self {
        Self::new(LengthUnit::Second, value)
    }

    /// Length of `value` minutes.
    pub fn minutes(value: f64) -> Self {
        Self::new(LengthUnit::Minute, value)
    }

    /// Repeat count for a segment.
    pub fn repetitions(count: u32) -> Self {
        Self::new(LengthUnit::Repetition, f64::from(count))
    }

    /// A length is valid when its value is positive.
    pub fn is_valid(&self) -> bool {
        self.value > 0.0
    }

    /// Convert to minutes.
    ///
    /// Distance units and repeat counts pass their raw value through
    /// unchanged; they are only time estimates when pre-normalized upstream.
    pub fn as_minutes(&self) -> f64 {
        match self.unit {
            LengthUnit::Second => self.value / 60.0,
            LengthUnit::Minute => self.value,
            LengthUnit::Hour => self.value * 60.0,
            _ => self.value,
        }
    }

    /// Convert to seconds. Non-time units pass through as in `as_minutes`.
    pub fn as_seconds(&self) -> f64 {
        match self.unit {
            LengthUnit::Second => self.value,
            LengthUnit::Minute => self.value * 60.0,
            LengthUnit::Hour => self.value * 3600.0,
            _ => self.value,
        }
    }
}

/// Physiological quantity a [`Target`] constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Power,
    HeartRate,
    Cadence,
}

/// Unit of a target range, when the plan disambiguates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetUnit {
    /// Percent of threshold power or heart rate
    PercentOfThreshold,
    /// Absolute watts
    Watts,
    /// Beats per minute
    Bpm,
    /// Revolutions per minute
    Rpm,
}

/// A bounded physiological goal attached to a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(rename = "type")]
    pub kind: TargetType,
    pub min_value: f64,
    pub max_value: f64,
    /// Absent when the plan's primary intensity metric applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<TargetUnit>,
}

impl Target {
    pub fn new(kind: TargetType, min_value: f64, max_value: f64) -> Self {
        Self {
            kind,
            min_value,
            max_value,
            unit: None,
        }
    }

    /// A target is valid when `0 <= min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min_value >= 0.0 && self.min_value <= self.max_value
    }

    /// Midpoint of the target range.
    pub fn midpoint(&self) -> f64 {
        (self.min_value + self.max_value) / 2.0
    }
}

/// Execution-intent hint stamped on a step by plan generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntensityClass {
    WarmUp,
    Active,
    Rest,
    CoolDown,
}

/// One atomic instruction within a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub name: String,
    pub intensity_class: IntensityClass,
    pub length: Length,
    /// Step ends on operator input rather than at its nominal length; the
    /// nominal length still counts toward duration estimates.
    #[serde(default)]
    pub open_duration: bool,
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl Step {
    /// First power target on this step, if any.
    pub fn power_target(&self) -> Option<&Target> {
        self.targets.iter().find(|t| t.kind == TargetType::Power)
    }
}

/// Whether a segment's steps execute once or repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentKind {
    /// Steps execute once
    Step,
    /// The full step sequence repeats N times consecutively
    Repetition,
}

/// A container of steps with a repeat count.
///
/// Nesting is exactly two levels deep: segments contain steps, never other
/// segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    /// Repeat count carried as a repetition-unit length (conventionally 1
    /// for `kind = Step`).
    pub length: Length,
    pub steps: Vec<Step>,
}

impl Segment {
    /// Number of consecutive passes over `steps`.
    pub fn repeat_count(&self) -> f64 {
        self.length.value
    }
}

/// Full structured content of a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStructure {
    pub primary_intensity_metric: String,
    pub primary_length_metric: String,
    pub structure: Vec<Segment>,
    /// Precomputed visualization curve; carries no scheduling meaning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyline: Option<Vec<[f64; 2]>>,
}

impl WorkoutStructure {
    /// Whether there is anything to estimate or encode.
    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }
}

/// Scheduling-level workout entity, one per plan (week, weekday) slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Weekday name within the plan week (e.g. "Tuesday").
    pub weekday: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Long-form description, preferred by the sync payload when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    /// Sport discipline as recorded by plan generation.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
    /// Planned training stress (TSS-like scalar).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_load: Option<f64>,
    /// Absent for unstructured/manual entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<WorkoutStructure>,
    /// Id of the generating plan instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Uuid>,
}

impl Workout {
    /// Whether this workout carries an encodable structure.
    pub fn has_structure(&self) -> bool {
        self.structure.as_ref().map_or(false, |s| !s.is_empty())
    }
}
