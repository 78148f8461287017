//! Unit tests for training stress estimation.

use peaksync::metrics::load::estimate_stress;
use peaksync::workouts::types::{
    IntensityClass, Length, Segment, SegmentKind, Step, Target, TargetType, WorkoutStructure,
};

fn powered(name: &str, minutes: f64, percent: f64) -> Step {
    Step {
        name: name.to_string(),
        intensity_class: IntensityClass::Active,
        length: Length::minutes(minutes),
        open_duration: false,
        targets: vec![Target::new(TargetType::Power, percent, percent)],
    }
}

fn structure(segments: Vec<Segment>) -> WorkoutStructure {
    WorkoutStructure {
        primary_intensity_metric: "percentOfFtp".to_string(),
        primary_length_metric: "duration".to_string(),
        structure: segments,
        polyline: None,
    }
}

#[test]
fn test_threshold_hour_is_100_tss() {
    let segments = vec![Segment {
        kind: SegmentKind::Step,
        length: Length::repetitions(1),
        steps: vec![powered("FTP hour", 60.0, 100.0)],
    }];

    let estimate = estimate_stress(&structure(segments)).unwrap();
    assert_eq!(estimate.intensity_factor, 1.0);
    assert_eq!(estimate.tss, 100.0);
}

#[test]
fn test_sweet_spot_session_estimate() {
    // 3 x 20 min at 90% = 1 hour, IF 0.9, TSS 81
    let segments = vec![Segment {
        kind: SegmentKind::Repetition,
        length: Length::repetitions(3),
        steps: vec![powered("Sweet spot", 20.0, 90.0)],
    }];

    let estimate = estimate_stress(&structure(segments)).unwrap();
    assert!((estimate.intensity_factor - 0.9).abs() < 1e-9);
    assert!((estimate.tss - 81.0).abs() < 1e-9);
}

#[test]
fn test_unpowered_steps_extend_duration_not_intensity() {
    // 30 min at 100% plus 30 unpowered minutes: IF stays 1.0, the full hour
    // counts toward TSS.
    let segments = vec![Segment {
        kind: SegmentKind::Step,
        length: Length::repetitions(1),
        steps: vec![
            powered("Work", 30.0, 100.0),
            Step {
                name: "Free ride".to_string(),
                intensity_class: IntensityClass::Active,
                length: Length::minutes(30.0),
                open_duration: false,
                targets: vec![],
            },
        ],
    }];

    let estimate = estimate_stress(&structure(segments)).unwrap();
    assert_eq!(estimate.intensity_factor, 1.0);
    assert_eq!(estimate.tss, 100.0);
}

#[test]
fn test_no_power_targets_gives_none() {
    assert_eq!(estimate_stress(&structure(vec![])), None);
}
