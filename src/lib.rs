//! PeakSync - Training Plan Scheduling & Workout Sync
//!
//! Core library for scheduling structured interval workouts and pushing them
//! to TrainingPeaks. Provides the workout data model, planned duration and
//! stress-load calculations, intensity classification, the TrainingPeaks
//! structure codec, and calendar placement of plan-relative workouts.

pub mod metrics;
pub mod schedule;
pub mod storage;
pub mod sync;
pub mod workouts;

// Re-export commonly used types
pub use metrics::duration::total_minutes;
pub use metrics::zones::{classify, IntensityLabel};
pub use schedule::placement::placement_date;
pub use storage::config::SyncConfig;
pub use sync::trainingpeaks::{build_request, encode_structure, WorkoutRequest};
pub use workouts::types::{Workout, WorkoutStructure};
