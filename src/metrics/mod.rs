//! Metrics module for planned duration, stress load, and intensity zones.

pub mod duration;
pub mod load;
pub mod zones;

pub use duration::{total_hours, total_minutes};
pub use load::{estimate_stress, StressEstimate};
pub use zones::{classify, IntensityLabel};
