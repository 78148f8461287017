//! Training platform sync.
//!
//! Builds the create-workout payloads the plan scheduling service pushes to
//! TrainingPeaks. Transport and persistence of the resulting external ids
//! belong to the calling layer.

pub mod trainingpeaks;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use trainingpeaks::{build_request, encode_structure, WorkoutRequest};

/// Sync-related errors.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("wire serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// How repetition segments are written to the wire.
///
/// The device contract does not state whether a repeated block must appear
/// once (repeat count communicated out-of-band) or fully expanded; both
/// encodings are supported and selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepetitionEncoding {
    /// One representative cycle per repeated block
    #[default]
    EncodeOnce,
    /// Every cycle written out consecutively
    Expand,
}

impl std::fmt::Display for RepetitionEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepetitionEncoding::EncodeOnce => write!(f, "encode_once"),
            RepetitionEncoding::Expand => write!(f, "expand"),
        }
    }
}
