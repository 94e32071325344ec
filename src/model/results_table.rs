use indexmap::{map::Entry, IndexMap};

use crate::model::{
    error::EngineError,
    structures::table::{InvalidEntry, PlayerProfile, ResultEntry, ResultsTable, Submission}
};

/// Builds the result table of one competition and one physics from raw
/// submissions.
///
/// Submissions must arrive in a stable, reproducible order (storage primary
/// key): ingestion order is the tie-break when one player submits two runs
/// with the same time, and it decides the relative order of equal times in
/// the final table.
///
/// When `filter_outside` is set, outside-competition entries are removed
/// after sorting; their runs still took part in dedup but they never occupy
/// a competitive place. Series aggregation filters, single-competition
/// rating does not.
pub fn build_results_table(
    submissions: &[Submission],
    players: &IndexMap<i32, PlayerProfile>,
    filter_outside: bool
) -> Result<ResultsTable, EngineError> {
    let mut best: IndexMap<i32, ResultEntry> = IndexMap::new();
    let mut invalid: Vec<InvalidEntry> = Vec::new();

    for submission in submissions {
        if !submission.time.is_finite() || submission.time <= 0.0 {
            return Err(EngineError::Validation(format!(
                "non-positive time {} for player {}",
                submission.time, submission.player_id
            )));
        }

        let profile = players.get(&submission.player_id).ok_or_else(|| {
            EngineError::Validation(format!("unknown player id {}", submission.player_id))
        })?;

        if !submission.status.counts_for_ranking() {
            invalid.push(InvalidEntry {
                player_id: submission.player_id,
                nick: profile.nick.clone(),
                time: submission.time,
                reason: submission.reason.clone().unwrap_or_default()
            });
            continue;
        }

        let entry = ResultEntry {
            player_id: submission.player_id,
            nick: profile.nick.clone(),
            country: profile.country.clone(),
            rating: profile.rating,
            prior_change: profile.prior_change,
            prior_bonus: profile.prior_bonus,
            time: submission.time,
            is_outside_competition: submission.is_outside_competition,
            is_organizer: submission.is_organizer
        };

        match best.entry(submission.player_id) {
            Entry::Occupied(mut held) => {
                // Strictly smaller time replaces; an equal time keeps the
                // first-encountered run.
                if entry.time < held.get().time {
                    held.insert(entry);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }

    let mut valid: Vec<ResultEntry> = best.into_values().collect();
    // Stable sort: equal times stay in ingestion order.
    valid.sort_by(|a, b| a.time.total_cmp(&b.time));

    if filter_outside {
        valid.retain(|entry| !entry.is_outside_competition);
    }

    Ok(ResultsTable { valid, invalid })
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            error::EngineError,
            results_table::build_results_table,
            structures::verified_status::VerifiedStatus
        },
        utils::test_utils::*
    };

    #[test]
    fn test_sorted_ascending_by_time() {
        let players = generate_player_arena(3);
        let submissions = vec![
            generate_submission(1, 12.0),
            generate_submission(2, 10.5),
            generate_submission(3, 11.0),
        ];

        let table = build_results_table(&submissions, &players, false).unwrap();
        let times: Vec<f64> = table.valid.iter().map(|e| e.time).collect();

        assert_eq!(times, vec![10.5, 11.0, 12.0]);
    }

    #[test]
    fn test_dedup_keeps_best_time_per_player() {
        let players = generate_player_arena(2);
        let submissions = vec![
            generate_submission(1, 12.0),
            generate_submission(1, 10.0),
            generate_submission(1, 11.0),
            generate_submission(2, 10.5),
        ];

        let table = build_results_table(&submissions, &players, false).unwrap();

        assert_eq!(table.valid.len(), 2);
        assert_eq!(table.valid[0].player_id, 1);
        assert_eq!(table.valid[0].time, 10.0);
    }

    #[test]
    fn test_dedup_equal_times_keep_first_submission() {
        let players = generate_player_arena(1);
        let mut first = generate_submission(1, 10.0);
        first.is_outside_competition = true;
        let second = generate_submission(1, 10.0);

        let table = build_results_table(&[first, second], &players, false).unwrap();

        assert_eq!(table.valid.len(), 1);
        assert!(table.valid[0].is_outside_competition);
    }

    #[test]
    fn test_invalid_submissions_go_to_invalid_list() {
        let players = generate_player_arena(2);
        let mut rejected = generate_submission(2, 9.0);
        rejected.status = VerifiedStatus::Invalid;
        rejected.reason = Some("shortcut".to_string());

        let table =
            build_results_table(&[generate_submission(1, 10.0), rejected], &players, false).unwrap();

        assert_eq!(table.valid.len(), 1);
        assert_eq!(table.invalid.len(), 1);
        assert_eq!(table.invalid[0].reason, "shortcut");
    }

    #[test]
    fn test_unwatched_counts_as_valid() {
        let players = generate_player_arena(1);
        let mut unwatched = generate_submission(1, 10.0);
        unwatched.status = VerifiedStatus::Unwatched;

        let table = build_results_table(&[unwatched], &players, false).unwrap();

        assert_eq!(table.valid.len(), 1);
        assert!(table.invalid.is_empty());
    }

    #[test]
    fn test_outside_competition_filtered_after_sorting() {
        let players = generate_player_arena(3);
        let mut outside = generate_submission(2, 9.0);
        outside.is_outside_competition = true;

        let submissions = vec![
            generate_submission(1, 10.0),
            outside,
            generate_submission(3, 11.0),
        ];

        let filtered = build_results_table(&submissions, &players, true).unwrap();
        let unfiltered = build_results_table(&submissions, &players, false).unwrap();

        assert_eq!(unfiltered.valid.len(), 3);
        assert_eq!(unfiltered.valid[0].player_id, 2);

        let ids: Vec<i32> = filtered.valid.iter().map(|e| e.player_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_rejects_non_positive_time() {
        let players = generate_player_arena(1);
        let result = build_results_table(&[generate_submission(1, 0.0)], &players, false);

        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_rejects_unknown_player() {
        let players = generate_player_arena(1);
        let result = build_results_table(&[generate_submission(99, 10.0)], &players, false);

        assert!(matches!(result, Err(EngineError::Validation(_))));
    }
}
