//! Unit tests for planned duration calculation.

use peaksync::metrics::duration::{total_hours, total_minutes};
use peaksync::workouts::types::{
    IntensityClass, Length, LengthUnit, Segment, SegmentKind, Step, Target, TargetType,
    WorkoutStructure,
};

fn step(name: &str, class: IntensityClass, length: Length) -> Step {
    Step {
        name: name.to_string(),
        intensity_class: class,
        length,
        open_duration: false,
        targets: vec![Target::new(TargetType::Power, 60.0, 70.0)],
    }
}

fn single(kind: SegmentKind, reps: u32, steps: Vec<Step>) -> Segment {
    Segment {
        kind,
        length: Length::repetitions(reps),
        steps,
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
fn test_composed_workout_totals_45_minutes() {
    // warm-up 10 + work 20 + recovery 5 + cool-down 10
    let segments = vec![
        single(
            SegmentKind::Step,
            1,
            vec![step("Warm up", IntensityClass::WarmUp, Length::minutes(10.0))],
        ),
        single(
            SegmentKind::Step,
            1,
            vec![
                step("Work", IntensityClass::Active, Length::minutes(20.0)),
                step("Recover", IntensityClass::Rest, Length::minutes(5.0)),
            ],
        ),
        single(
            SegmentKind::Step,
            1,
            vec![step(
                "Cool down",
                IntensityClass::CoolDown,
                Length::minutes(10.0),
            )],
        ),
    ];

    let structure = structure(segments);
    assert_eq!(total_minutes(&structure), 45.0);
    assert_eq!(total_hours(&structure), 0.75);
}

#[test]
fn test_empty_structure_totals_zero() {
    assert_eq!(total_minutes(&structure(vec![])), 0.0);
}

#[test]
fn test_repetition_segment_scales_by_count() {
    // 6 x (1 min on + 1 min off) next to a 10 min block = 22 min
    let segments = vec![
        single(
            SegmentKind::Repetition,
            6,
            vec![
                step("On", IntensityClass::Active, Length::seconds(60.0)),
                step("Off", IntensityClass::Rest, Length::seconds(60.0)),
            ],
        ),
        single(
            SegmentKind::Step,
            1,
            vec![step("Steady", IntensityClass::Active, Length::minutes(10.0))],
        ),
    ];

    assert_eq!(total_minutes(&structure(segments)), 22.0);
}

#[test]
fn test_time_units_convert_to_minutes() {
    let segments = vec![single(
        SegmentKind::Step,
        1,
        vec![
            step("A", IntensityClass::Active, Length::seconds(30.0)),
            step("B", IntensityClass::Active, Length::minutes(4.0)),
            step(
                "C",
                IntensityClass::Active,
                Length::new(LengthUnit::Hour, 0.25),
            ),
        ],
    )];

    assert_eq!(total_minutes(&structure(segments)), 19.5);
}

#[test]
fn test_distance_steps_pass_raw_values() {
    let segments = vec![single(
        SegmentKind::Step,
        1,
        vec![
            step(
                "Tempo run",
                IntensityClass::Active,
                Length::new(LengthUnit::Mile, 3.0),
            ),
            step("Jog", IntensityClass::Rest, Length::minutes(10.0)),
        ],
    )];

    // Raw distance value contributes as-is.
    assert_eq!(total_minutes(&structure(segments)), 13.0);
}
