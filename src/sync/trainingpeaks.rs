//! TrainingPeaks structured workout codec.
//!
//! T041: Implement structure serializer (flatten to wire steps)
//! T042: Implement create-workout request builder
//!
//! Flattens a plan workout into the TrainingPeaks wire structure and wraps
//! it into a create-workout request addressed to a calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RepetitionEncoding, SyncError};
use crate::metrics::duration::total_hours;
use crate::metrics::zones::{classify, IntensityLabel};
use crate::storage::config::SyncConfig;
use crate::workouts::types::{SegmentKind, Step, Workout};

/// Wire length, always expressed in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireLength {
    pub unit: WireLengthUnit,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireLengthUnit {
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireTargetUnit {
    PercentOfFtp,
}

/// Wire intensity target, percent of functional threshold power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireTarget {
    pub unit: WireTargetUnit,
    pub min_value: f64,
    pub max_value: f64,
    /// Midpoint of the range
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireStepType {
    Step,
}

/// One flattened wire step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireStep {
    #[serde(rename = "Type")]
    pub step_type: WireStepType,
    pub name: String,
    pub intensity_class: IntensityLabel,
    pub length: WireLength,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_target: Option<WireTarget>,
}

/// The full wire message consumed by the device service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireStructure {
    pub steps: Vec<WireStep>,
}

fn wire_step(step: &Step) -> WireStep {
    WireStep {
        step_type: WireStepType::Step,
        name: step.name.clone(),
        intensity_class: classify(step),
        length: WireLength {
            unit: WireLengthUnit::Second,
            value: step.length.as_seconds(),
        },
        intensity_target: step.power_target().map(|target| WireTarget {
            unit: WireTargetUnit::PercentOfFtp,
            min_value: target.min_value,
            max_value: target.max_value,
            value: target.midpoint(),
        }),
    }
}

/// Encode a workout's structure into the wire message.
///
/// Returns the empty string when there is nothing to encode; unstructured
/// workouts are valid and simply have no structure to push. Steps are
/// emitted in original segment/step order.
pub fn encode_structure(
    workout: &Workout,
    encoding: RepetitionEncoding,
) -> Result<String, SyncError> {
    let Some(structure) = workout.structure.as_ref().filter(|s| !s.is_empty()) else {
        return Ok(String::new());
    };

    let mut steps = Vec::new();
    for segment in &structure.structure {
        let passes = match (segment.kind, encoding) {
            (SegmentKind::Repetition, RepetitionEncoding::Expand) => {
                (segment.repeat_count() as u32).max(1)
            }
            _ => 1,
        };
        for _ in 0..passes {
            steps.extend(segment.steps.iter().map(wire_step));
        }
    }

    tracing::debug!(workout = %workout.name, steps = steps.len(), %encoding, "encoded structure");

    Ok(serde_json::to_string(&WireStructure { steps })?)
}

/// Create-workout request payload for the device calendar API.
///
/// Optional fields are omitted from the JSON entirely, never sent as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkoutRequest {
    pub athlete_id: String,
    pub workout_day: NaiveDate,
    pub workout_type: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "TSSPlanned", default, skip_serializing_if = "Option::is_none")]
    pub tss_planned: Option<f64>,
    pub total_time_planned: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
}

/// Build the full create-workout request for one calendar day.
///
/// `TSSPlanned` is set only when the workout carries an explicit stress
/// load; `Structure` only when the encoder produced a non-empty message.
pub fn build_request(
    workout: &Workout,
    day: NaiveDate,
    athlete_id: &str,
    config: &SyncConfig,
) -> Result<WorkoutRequest, SyncError> {
    let total_time_planned = workout.structure.as_ref().map(total_hours).unwrap_or(0.0);
    let structure = encode_structure(workout, config.repetition_encoding)?;

    let request = WorkoutRequest {
        athlete_id: athlete_id.to_string(),
        workout_day: day,
        workout_type: config.workout_type.clone(),
        title: workout.name.clone(),
        description: workout
            .detailed_description
            .clone()
            .or_else(|| workout.description.clone()),
        tss_planned: workout.stress_load,
        total_time_planned,
        structure: (!structure.is_empty()).then_some(structure),
    };

    tracing::info!(title = %request.title, day = %request.workout_day, "built create-workout request");

    Ok(request)
}
