use indexmap::IndexMap;
use tracing::debug;

pub mod constants;
pub mod error;
pub mod multicup;
pub mod online_cup;
pub mod placement;
pub mod points;
pub mod rating;
pub mod results_table;
pub mod structures;

pub use error::EngineError;
pub use multicup::{aggregate_series, attach_rating_deltas, round_table};
pub use online_cup::adapt_online_cup;
pub use points::score_points;
pub use rating::{calculate_offline_rating, calculate_online_rating};
pub use results_table::build_results_table;

use crate::model::structures::{
    scoring_system::ScoringSystem,
    standing::{OverallStanding, RatingChangeRecord, RatingContext},
    table::{PlayerProfile, PointTable, Submission}
};

/// Builds both physics tables of one offline competition and computes its
/// rating deltas. The caller persists the returned records; they are never
/// recomputed by re-running the engine.
pub fn process_offline_cup(
    primary: &[Submission],
    other_physics: &[Submission],
    players: &IndexMap<i32, PlayerProfile>,
    ctx: &RatingContext
) -> Result<Vec<RatingChangeRecord>, EngineError> {
    let table = build_results_table(primary, players, false)?;
    let other_table = build_results_table(other_physics, players, false)?;

    debug!(
        valid = table.valid.len(),
        invalid = table.invalid.len(),
        physics = %ctx.physics,
        "rating offline cup {}",
        ctx.competition_id
    );

    calculate_offline_rating(&table, &other_table, ctx)
}

/// Builds, scores and aggregates a full multicup series. Outside-competition
/// entries are filtered out of every round before scoring.
pub fn process_series(
    rounds: &[Vec<Submission>],
    players: &IndexMap<i32, PlayerProfile>,
    system: ScoringSystem
) -> Result<Vec<OverallStanding>, EngineError> {
    let point_tables: Vec<PointTable> = rounds
        .iter()
        .map(|submissions| {
            let table = build_results_table(submissions, players, true)?;
            score_points(&table, system)
        })
        .collect::<Result<_, _>>()?;

    debug!(rounds = point_tables.len(), "aggregating series");

    aggregate_series(&point_tables, system)
}
