//! Intensity classification against the Coggan power zone bands.
//!
//! T032: Implement step classification into the device intensity taxonomy
//!
//! Maps plan steps onto the intensity labels TrainingPeaks structured
//! workouts use. Active steps are banded by the midpoint of their power
//! target range, expressed as percent of threshold power.

use serde::{Deserialize, Serialize};

use crate::workouts::types::{IntensityClass, Step};

/// Device-side intensity taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityLabel {
    WarmUp,
    Cooldown,
    #[serde(rename = "Active Recovery")]
    ActiveRecovery,
    Endurance,
    Tempo,
    Threshold,
    #[serde(rename = "VO2 Max")]
    Vo2Max,
}

impl IntensityLabel {
    /// Wire name expected by the device API.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityLabel::WarmUp => "WarmUp",
            IntensityLabel::Cooldown => "Cooldown",
            IntensityLabel::ActiveRecovery => "Active Recovery",
            IntensityLabel::Endurance => "Endurance",
            IntensityLabel::Tempo => "Tempo",
            IntensityLabel::Threshold => "Threshold",
            IntensityLabel::Vo2Max => "VO2 Max",
        }
    }

    /// Effort-tier rank. Warm-up and cool-down sit outside the power-band
    /// ladder and rank 0.
    pub fn rank(&self) -> u8 {
        match self {
            IntensityLabel::WarmUp | IntensityLabel::Cooldown => 0,
            IntensityLabel::ActiveRecovery => 1,
            IntensityLabel::Endurance => 2,
            IntensityLabel::Tempo => 3,
            IntensityLabel::Threshold => 4,
            IntensityLabel::Vo2Max => 5,
        }
    }
}

impl std::fmt::Display for IntensityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower band edges in percent of threshold power (Coggan zone model).
pub const ENDURANCE_MIN_PERCENT: f64 = 56.0;
pub const TEMPO_MIN_PERCENT: f64 = 76.0;
pub const THRESHOLD_MIN_PERCENT: f64 = 91.0;
pub const VO2MAX_MIN_PERCENT: f64 = 106.0;

/// Classify a step into the device intensity taxonomy.
///
/// Ordered ladder, first match wins: the step's intensity class decides for
/// warm-up, cool-down and rest steps; active steps are banded by the
/// midpoint of their power target range. Active steps with no power target
/// default to Endurance.
pub fn classify(step: &Step) -> IntensityLabel {
    match step.intensity_class {
        IntensityClass::WarmUp => IntensityLabel::WarmUp,
        IntensityClass::CoolDown => IntensityLabel::Cooldown,
        IntensityClass::Rest => IntensityLabel::ActiveRecovery,
        IntensityClass::Active => match step.power_target() {
            Some(target) => label_for_percent(target.midpoint()),
            None => IntensityLabel::Endurance,
        },
    }
}

/// Band a percent-of-threshold midpoint into an effort tier.
///
/// Bands are half-open so fractional midpoints classify monotonically:
/// <56 recovery, 56-75 endurance, 76-90 tempo, 91-105 threshold, 106+ VO2.
pub fn label_for_percent(percent: f64) -> IntensityLabel {
    if percent < ENDURANCE_MIN_PERCENT {
        IntensityLabel::ActiveRecovery
    } else if percent < TEMPO_MIN_PERCENT {
        IntensityLabel::Endurance
    } else if percent < THRESHOLD_MIN_PERCENT {
        IntensityLabel::Tempo
    } else if percent < VO2MAX_MIN_PERCENT {
        IntensityLabel::Threshold
    } else {
        IntensityLabel::Vo2Max
    }
}
