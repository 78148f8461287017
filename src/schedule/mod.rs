//! Calendar placement for plan-relative workouts.

pub mod placement;

pub use placement::{parse_anchor, parse_weekday, placement_date, week_start, ScheduleError};
