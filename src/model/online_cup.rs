use itertools::Itertools;

use crate::model::{
    constants::ONLINE_CUP_ROUNDS,
    error::EngineError,
    multicup, points,
    structures::{
        scoring_system::ScoringSystem,
        standing::{OnlineCupRecord, OverallStanding},
        table::{PointTable, ResultEntry, ResultsTable}
    }
};

/// Reshapes a synchronous cup's fixed 5-round records into per-round result
/// tables and scores them like a series.
///
/// Only EE systems and LEGACY apply here: EE rounds are scored from times
/// through the shared point curve (no worst-round drop, no rating deltas,
/// since online cups are never rated); LEGACY is a whole-series rank sum over
/// the stored per-round places.
pub fn adapt_online_cup(
    records: &[OnlineCupRecord],
    system: ScoringSystem
) -> Result<Vec<OverallStanding>, EngineError> {
    match system {
        ScoringSystem::Legacy => Ok(legacy_standings(records)),
        ScoringSystem::Sdc => Err(EngineError::Configuration(
            "SDC scoring does not apply to online cups".to_string()
        )),
        _ => ee_standings(records, system)
    }
}

fn ee_standings(
    records: &[OnlineCupRecord],
    system: ScoringSystem
) -> Result<Vec<OverallStanding>, EngineError> {
    // One synthetic offline-style table per round that anyone finished;
    // a time of 0 means the player did not finish that round.
    let round_tables: Vec<ResultsTable> = (0..ONLINE_CUP_ROUNDS)
        .filter_map(|round| {
            let valid: Vec<ResultEntry> = records
                .iter()
                .filter(|record| record.round_times[round] > 0.0)
                .map(|record| synthetic_entry(record, record.round_times[round]))
                .sorted_by(|a, b| a.time.total_cmp(&b.time))
                .collect();

            if valid.is_empty() {
                None
            } else {
                Some(ResultsTable {
                    valid,
                    invalid: Vec::new()
                })
            }
        })
        .collect();

    if round_tables.is_empty() {
        // Nothing finished yet: every registered player gets an empty line.
        return Ok(records
            .iter()
            .map(|record| OverallStanding {
                player_id: record.player_id,
                nick: record.nick.clone(),
                country: record.country.clone(),
                round_results: Vec::new(),
                overall: 0.0,
                dropped_round_index: None,
                rating_delta: None
            })
            .collect());
    }

    let point_tables: Vec<PointTable> = round_tables
        .iter()
        .map(|table| points::score_points(table, system))
        .collect::<Result<_, _>>()?;

    Ok(multicup::accumulate_rounds(&point_tables))
}

fn synthetic_entry(record: &OnlineCupRecord, time: f64) -> ResultEntry {
    ResultEntry {
        player_id: record.player_id,
        nick: record.nick.clone(),
        country: record.country.clone(),
        rating: 0,
        prior_change: None,
        prior_bonus: None,
        time,
        is_outside_competition: false,
        is_organizer: false
    }
}

fn legacy_standings(records: &[OnlineCupRecord]) -> Vec<OverallStanding> {
    let field_size = records.len() as f64;

    let mut standings: Vec<OverallStanding> = records
        .iter()
        .map(|record| {
            let overall: f64 = record
                .round_places
                .iter()
                .filter(|&&place| place != 0)
                .map(|&place| field_size - place as f64 + 1.0)
                .sum();

            OverallStanding {
                player_id: record.player_id,
                nick: record.nick.clone(),
                country: record.country.clone(),
                // Legacy lines show the stored places, including unplayed 0s.
                round_results: record.round_places.iter().map(|&p| Some(p as f64)).collect(),
                overall,
                dropped_round_index: None,
                rating_delta: None
            }
        })
        .collect();

    standings.sort_by(|a, b| b.overall.total_cmp(&a.overall));
    standings
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            error::EngineError,
            online_cup::adapt_online_cup,
            structures::scoring_system::ScoringSystem::{EeDfwc, EeKoz, Legacy, Sdc}
        },
        utils::test_utils::*
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ee_scoring_over_played_rounds() {
        let records = vec![
            generate_online_record(1, [60.0, 50.0, 0.0, 0.0, 0.0]),
            generate_online_record(2, [66.0, 45.0, 0.0, 0.0, 0.0]),
        ];

        let standings = adapt_online_cup(&records, EeDfwc).unwrap();

        // Round 1: player 1 leads (1000), player 2 second.
        // Round 2: player 2 leads (1000), player 1 second.
        let second_round_1 = (45.0f64 / 50.0 * 0.99 * 1000.0).round();
        let second_round_2 = (60.0f64 / 66.0 * 0.99 * 1000.0).round();

        let player1 = standings.iter().find(|s| s.player_id == 1).unwrap();
        let player2 = standings.iter().find(|s| s.player_id == 2).unwrap();

        assert_eq!(player1.round_results, vec![Some(1000.0), Some(second_round_1)]);
        assert_eq!(player2.round_results, vec![Some(second_round_2), Some(1000.0)]);
        assert_abs_diff_eq!(player1.overall, 1000.0 + second_round_1);
        assert_abs_diff_eq!(player2.overall, 1000.0 + second_round_2);
    }

    #[test]
    fn test_unfinished_rounds_are_skipped() {
        let records = vec![
            generate_online_record(1, [60.0, 0.0, 70.0, 0.0, 0.0]),
            generate_online_record(2, [0.0, 0.0, 65.0, 0.0, 0.0]),
        ];

        let standings = adapt_online_cup(&records, EeKoz).unwrap();
        let player1 = standings.iter().find(|s| s.player_id == 1).unwrap();

        // Two played rounds collapse to indices 0 and 1.
        assert_eq!(player1.round_results.len(), 2);
        assert_eq!(player1.round_results[0], Some(1000.0));
    }

    #[test]
    fn test_no_worst_round_drop_even_with_many_rounds() {
        // EE_KOZ would drop the worst round in an offline series of 5.
        let records = vec![
            generate_online_record(1, [60.0, 60.0, 60.0, 60.0, 60.0]),
            generate_online_record(2, [59.0, 59.0, 59.0, 59.0, 70.0]),
        ];

        let standings = adapt_online_cup(&records, EeKoz).unwrap();
        let player2 = standings.iter().find(|s| s.player_id == 2).unwrap();

        assert_eq!(player2.dropped_round_index, None);
        assert_eq!(player2.round_results.len(), 5);
    }

    #[test]
    fn test_nothing_played_yields_empty_scorelines() {
        let records = vec![
            generate_online_record(1, [0.0; 5]),
            generate_online_record(2, [0.0; 5]),
        ];

        let standings = adapt_online_cup(&records, EeDfwc).unwrap();

        assert_eq!(standings.len(), 2);
        assert!(standings[0].round_results.is_empty());
        assert_abs_diff_eq!(standings[0].overall, 0.0);
    }

    #[test]
    fn test_legacy_rank_sum() {
        let mut first = generate_online_record(1, [0.0; 5]);
        first.round_places = [1, 2, 1, 0, 0];
        let mut second = generate_online_record(2, [0.0; 5]);
        second.round_places = [2, 1, 2, 0, 0];
        let mut third = generate_online_record(3, [0.0; 5]);
        third.round_places = [3, 3, 0, 0, 0];

        let standings = adapt_online_cup(&[first, second, third], Legacy).unwrap();

        // Field of 3: place 1 -> 3 points, place 2 -> 2, place 3 -> 1.
        assert_eq!(standings[0].player_id, 1);
        assert_abs_diff_eq!(standings[0].overall, 3.0 + 2.0 + 3.0);
        assert_abs_diff_eq!(standings[1].overall, 2.0 + 3.0 + 2.0);
        assert_abs_diff_eq!(standings[2].overall, 1.0 + 1.0);
        // Legacy scorelines carry the raw stored places.
        assert_eq!(
            standings[2].round_results,
            vec![Some(3.0), Some(3.0), Some(0.0), Some(0.0), Some(0.0)]
        );
    }

    #[test]
    fn test_sdc_is_rejected_for_online_cups() {
        let records = vec![generate_online_record(1, [60.0, 0.0, 0.0, 0.0, 0.0])];
        assert!(matches!(
            adapt_online_cup(&records, Sdc),
            Err(EngineError::Configuration(_))
        ));
    }
}
