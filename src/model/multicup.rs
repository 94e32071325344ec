use indexmap::IndexMap;

use crate::model::{
    constants::ROUNDS_BEFORE_DROP,
    error::EngineError,
    points,
    structures::{
        scoring_system::ScoringSystem,
        standing::{OverallStanding, RatingChangeRecord},
        table::{PointTable, ResultsTable}
    }
};

/// Combines per-round point tables into overall series standings.
///
/// Standings are sorted by descending overall points. Under EE_ALMERA and
/// EE_KOZ, once more than 3 rounds are in, each player's single worst round
/// is subtracted; the rule never applies to EE_DFWC, SDC or LEGACY.
pub fn aggregate_series(
    point_tables: &[PointTable],
    system: ScoringSystem
) -> Result<Vec<OverallStanding>, EngineError> {
    let mut standings = accumulate_rounds(point_tables);

    if system.drops_worst_round() && point_tables.len() > ROUNDS_BEFORE_DROP {
        drop_worst_round(&mut standings);
        sort_by_overall(&mut standings);
    }

    Ok(standings)
}

/// Scored table of a single 1-based round of a series.
pub fn round_table(
    tables: &[ResultsTable],
    round_number: usize,
    system: ScoringSystem
) -> Result<PointTable, EngineError> {
    if round_number < 1 || round_number > tables.len() {
        return Err(EngineError::Configuration(format!(
            "round number should be from 1 to {}",
            tables.len()
        )));
    }

    points::score_points(&tables[round_number - 1], system)
}

/// Fills in each standing's previously persisted rating delta for this
/// series, where one exists.
pub fn attach_rating_deltas(standings: &mut [OverallStanding], records: &[RatingChangeRecord]) {
    for standing in standings.iter_mut() {
        standing.rating_delta = records
            .iter()
            .find(|record| record.player_id == standing.player_id)
            .map(|record| record.delta);
    }
}

/// Steps 1-2 of aggregation: accumulate round points per player and sort by
/// descending overall. Shared with the online cup adapter, which never drops
/// rounds.
pub(crate) fn accumulate_rounds(point_tables: &[PointTable]) -> Vec<OverallStanding> {
    let rounds = point_tables.len();
    let mut by_player: IndexMap<i32, OverallStanding> = IndexMap::new();

    for (round_index, table) in point_tables.iter().enumerate() {
        for entry in &table.valid {
            let standing = by_player
                .entry(entry.player_id)
                .or_insert_with(|| OverallStanding {
                    player_id: entry.player_id,
                    nick: entry.nick.clone(),
                    country: entry.country.clone(),
                    round_results: vec![None; rounds],
                    overall: 0.0,
                    dropped_round_index: None,
                    rating_delta: None
                });

            standing.round_results[round_index] = Some(entry.points);
            standing.overall += entry.points;
        }
    }

    let mut standings: Vec<OverallStanding> = by_player.into_values().collect();
    sort_by_overall(&mut standings);
    standings
}

fn sort_by_overall(standings: &mut [OverallStanding]) {
    // Stable: equal totals keep their current relative order.
    standings.sort_by(|a, b| b.overall.total_cmp(&a.overall));
}

fn drop_worst_round(standings: &mut [OverallStanding]) {
    for standing in standings.iter_mut() {
        let played = standing
            .round_results
            .iter()
            .enumerate()
            .filter_map(|(index, result)| result.map(|points| (index, points)));

        if played.clone().count() <= 1 {
            continue;
        }

        // First minimum wins on equal scores.
        let mut worst: Option<(usize, f64)> = None;
        for (index, points) in played {
            if worst.map_or(true, |(_, w)| points < w) {
                worst = Some((index, points));
            }
        }

        if let Some((index, points)) = worst {
            standing.overall -= points;
            standing.dropped_round_index = Some(index);
        }
    }
}
