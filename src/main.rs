use clap::Parser;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cup_processor::{
    args::Args,
    model::{
        adapt_online_cup, aggregate_series, build_results_table, calculate_offline_rating,
        score_points,
        structures::{
            physics::Physics,
            scoring_system::ScoringSystem,
            standing::{OnlineCupRecord, RatingContext},
            table::{PlayerProfile, PointTable, Submission}
        },
        EngineError
    },
    utils::progress_utils::progress_bar
};

/// One self-contained processing request: the player arena plus everything
/// the selected operation needs.
#[derive(Deserialize)]
struct BatchInput {
    competition_id: i32,
    multicup_id: Option<i32>,
    physics: Physics,
    system: Option<ScoringSystem>,
    #[serde(default)]
    bonus_rating: i32,
    players: Vec<PlayerProfile>,
    /// Per-round submissions in the primary physics.
    #[serde(default)]
    rounds: Vec<Vec<Submission>>,
    /// Same competition's submissions in the other physics (rating mode).
    #[serde(default)]
    other_physics: Vec<Submission>,
    /// Stored 5-round records (online-cup mode).
    #[serde(default)]
    online_records: Vec<OnlineCupRecord>
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_level.clone()))
        .init();

    let raw = std::fs::read_to_string(&args.input)
        .unwrap_or_else(|e| panic!("Failed to read batch file {}: {e}", args.input));
    let batch: BatchInput =
        serde_json::from_str(&raw).unwrap_or_else(|e| panic!("Malformed batch file: {e}"));

    let players: IndexMap<i32, PlayerProfile> = batch
        .players
        .iter()
        .map(|profile| (profile.player_id, profile.clone()))
        .collect();

    info!(
        mode = %args.mode,
        players = players.len(),
        rounds = batch.rounds.len(),
        "processing cup {}",
        batch.competition_id
    );

    let output = run(&args, &batch, &players).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    println!("{output}");
}

fn run(
    args: &Args,
    batch: &BatchInput,
    players: &IndexMap<i32, PlayerProfile>
) -> Result<String, EngineError> {
    let system = || {
        batch.system.ok_or_else(|| {
            EngineError::Configuration("batch is missing a scoring system".to_string())
        })
    };
    let first_round = || {
        batch.rounds.first().ok_or_else(|| {
            EngineError::Data("batch contains no submission rounds".to_string())
        })
    };

    let json = match args.mode.as_str() {
        "table" => {
            let table = build_results_table(first_round()?, players, args.filter_outside)?;
            to_json(&table)
        }
        "points" => {
            let table = build_results_table(first_round()?, players, args.filter_outside)?;
            to_json(&score_points(&table, system()?)?)
        }
        "rating" => {
            let table = build_results_table(first_round()?, players, false)?;
            let other = build_results_table(&batch.other_physics, players, false)?;
            let ctx = RatingContext {
                competition_id: batch.competition_id,
                physics: batch.physics,
                bonus_rating: batch.bonus_rating,
                multicup_id: batch.multicup_id
            };
            to_json(&calculate_offline_rating(&table, &other, &ctx)?)
        }
        "multicup" => {
            let system = system()?;
            let bar = progress_bar(batch.rounds.len() as u64);

            let mut point_tables: Vec<PointTable> = Vec::with_capacity(batch.rounds.len());
            for submissions in &batch.rounds {
                let table = build_results_table(submissions, players, true)?;
                point_tables.push(score_points(&table, system)?);
                bar.inc(1);
            }
            bar.finish();

            to_json(&aggregate_series(&point_tables, system)?)
        }
        "online-cup" => to_json(&adapt_online_cup(&batch.online_records, system()?)?),
        other => {
            return Err(EngineError::Configuration(format!(
                "unknown mode {other}"
            )))
        }
    };

    Ok(json)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).expect("engine output is always serializable")
}
