//! PeakSync - Training Plan Scheduling & Workout Sync
//!
//! CLI entry point: resolves a plan workout onto the calendar and prints the
//! create-workout request payload for the device API.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use peaksync::schedule::placement::{parse_anchor, placement_date};
use peaksync::storage::config::SyncConfig;
use peaksync::sync::trainingpeaks::build_request;
use peaksync::workouts::types::Workout;
use peaksync::workouts::validate::validate_workout;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PeakSync v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        bail!("usage: peaksync <workout.json> <anchor-date> <week> <athlete-id> [config.toml]");
    }

    let workout_path = PathBuf::from(&args[1]);
    let anchor = parse_anchor(&args[2])?;
    let week: u32 = args[3].parse().context("week must be a positive integer")?;
    let athlete_id = &args[4];

    let config = match args.get(5) {
        Some(path) => SyncConfig::load(Path::new(path))
            .with_context(|| format!("loading config from {path}"))?,
        None => SyncConfig::default(),
    };

    let content = std::fs::read_to_string(&workout_path)
        .with_context(|| format!("reading workout from {}", workout_path.display()))?;
    let workout: Workout = serde_json::from_str(&content).context("parsing workout JSON")?;
    validate_workout(&workout)?;

    let day = placement_date(anchor, week, &workout.weekday)?;
    let request = build_request(&workout, day, athlete_id, &config)?;

    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}
