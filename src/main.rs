use color_eyre::eyre::Result;
use env_logger::Env;
use log::info;
use sim_core::{coerce_players_per_team, MatchConfig, MatchEngine, MatchPositionData};
use std::env;
use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fixed host timestep; the engine clamps anything larger itself.
const FRAME_MS: f32 = 16.0;

/// Headless match driver.
///
/// Usage: derby_sim [players_per_team] [minutes] [seed] [positions.json]
fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    let players_per_team = coerce_players_per_team(args.get(1).and_then(|v| v.parse().ok()));
    let minutes: f32 = args.get(2).and_then(|v| v.parse().ok()).unwrap_or(5.0);
    let seed: u64 = match args.get(3) {
        Some(value) => value.parse()?,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64,
    };
    let positions_path = args.get(4);

    info!(
        "kickoff: {players_per_team} a side, {minutes} minutes, seed {seed}"
    );

    let mut engine = MatchEngine::new(MatchConfig {
        players_per_team,
        seed,
    });
    let mut positions = MatchPositionData::new();

    engine.start();

    let mut last_score = engine.score();
    while engine.elapsed_seconds() < minutes * 60.0 {
        engine.advance(FRAME_MS);

        let score = engine.score();
        if score.home != last_score.home || score.away != last_score.away {
            info!(
                "{} GOAL! {} - {}",
                engine.clock_display(),
                score.home,
                score.away
            );
            last_score = score;
        }

        if positions_path.is_some() {
            engine.write_positions(&mut positions);
        }
    }

    engine.pause();

    let snapshot = engine.snapshot();
    info!(
        "full time at {}: {} - {}",
        snapshot.clock, snapshot.score.home, snapshot.score.away
    );

    if let Some(path) = positions_path {
        serde_json::to_writer(File::create(path)?, &positions)?;
        info!("position data written to {path}");
    }

    Ok(())
}
