use std::collections::HashSet;

use itertools::izip;

use crate::model::{
    constants::{
        BONUS_FIELD_BASE, BONUS_FIELD_RANGE, BOTH_PHYSICS_BONUS, DEFAULT_RATING, ELO_DIVISOR,
        FIRST_PLACE_BONUS, RATING_FLOOR, RATING_GAIN_MULTIPLIER, SECOND_PLACE_BONUS,
        SUB_2000_BONUS, SUB_2000_CEILING, THIRD_PLACE_BONUS
    },
    error::EngineError,
    placement,
    structures::{
        standing::{RatingChangeRecord, RatingContext},
        table::{ResultEntry, ResultsTable}
    }
};

/// Computes rating deltas for one offline competition in its primary physics.
///
/// The expectation model is Elo-like against the field average, scaled by the
/// player's relative placement, with three additive layers on top: the
/// sub-2000 participation bonus, the competition's flat bonus plus the
/// cross-physics +5, and the field-size-scaled top-3 bonus. A protective
/// floor keeps players above 1700 from being pushed below it by one result.
///
/// `other_physics_table` is the same competition's table in the other
/// physics; presence there grants the cross-physics bonus.
pub fn calculate_offline_rating(
    table: &ResultsTable,
    other_physics_table: &ResultsTable,
    ctx: &RatingContext
) -> Result<Vec<RatingChangeRecord>, EngineError> {
    let entries = &table.valid;

    if entries.is_empty() {
        return Err(EngineError::Data(
            "cannot rate an empty result table".to_string()
        ));
    }

    // Players with a zero rating never took part in a season; they enter the
    // field average as 1500.
    let average_rating = entries
        .iter()
        .map(|entry| {
            if entry.rating == 0 {
                DEFAULT_RATING as f64
            } else {
                entry.rating as f64
            }
        })
        .sum::<f64>()
        / entries.len() as f64;

    let other_physics_players: HashSet<i32> = other_physics_table
        .valid
        .iter()
        .map(|entry| entry.player_id)
        .collect();

    let places = placement::places_by(entries, |e| e.time);
    let field_size = entries.len() as f64;

    // Players flagged as already penalized draw from a pool that shrinks by
    // one for each such player seen, floored at +1.
    let mut penalized_seen: i32 = 0;

    let mut deltas: Vec<i32> = Vec::with_capacity(entries.len());
    let mut both_physics: Vec<bool> = Vec::with_capacity(entries.len());

    for (entry, place) in entries.iter().zip(&places) {
        let efficiency = 1.0 - (*place as f64 - 1.0) / field_size;
        let expectation =
            1.0 / (1.0 + 10f64.powf((average_rating - entry.rating as f64) / ELO_DIVISOR));
        let mut delta = (RATING_GAIN_MULTIPLIER * (efficiency - expectation)).round() as i32;

        if entry.rating < SUB_2000_CEILING {
            if entry.prior_change.is_some_and(|change| change < 0) {
                delta += (SUB_2000_BONUS - penalized_seen).max(1);
                penalized_seen += 1;
            } else {
                delta += SUB_2000_BONUS;
            }
        }

        delta += ctx.bonus_rating;

        let has_both = other_physics_players.contains(&entry.player_id);
        if has_both {
            delta += BOTH_PHYSICS_BONUS;
        }

        deltas.push(delta);
        both_physics.push(has_both);
    }

    add_top3_bonus(entries, &mut deltas);
    apply_rating_floor(entries, &mut deltas);

    Ok(izip!(entries, places, deltas, both_physics)
        .map(
            |(entry, place, delta, has_both_physics_bonus)| RatingChangeRecord {
                player_id: entry.player_id,
                competition_id: ctx.competition_id,
                physics: ctx.physics,
                delta,
                place,
                has_both_physics_bonus,
                multicup_id: ctx.multicup_id
            }
        )
        .collect())
}

/// Rating for synchronous online cups has never been specified; callers must
/// not rely on it being inferable from the offline calculation.
pub fn calculate_online_rating(
    _table: &ResultsTable,
    _ctx: &RatingContext
) -> Result<Vec<RatingChangeRecord>, EngineError> {
    Err(EngineError::Configuration(
        "online cup rating calculation is not implemented".to_string()
    ))
}

/// Bonus for the first three distinct times, scaled by field size between
/// +15/+10/+5 at 3 players and +50/+30/+20 at 30 or more. Every entry tied
/// within a run receives that run's bonus.
fn add_top3_bonus(entries: &[ResultEntry], deltas: &mut [i32]) {
    let coefficient = ((entries.len() as f64 - BONUS_FIELD_BASE) / BONUS_FIELD_RANGE).clamp(0.0, 1.0);

    let bonuses = [
        scaled_bonus(FIRST_PLACE_BONUS, coefficient),
        scaled_bonus(SECOND_PLACE_BONUS, coefficient),
        scaled_bonus(THIRD_PLACE_BONUS, coefficient),
    ];

    for (run, bonus) in placement::tie_runs_by(entries, |e| e.time).iter().zip(bonuses) {
        for delta in &mut deltas[run.start..run.end] {
            *delta += bonus;
        }
    }
}

fn scaled_bonus((min, max): (f64, f64), coefficient: f64) -> i32 {
    (min + coefficient * (max - min)).round() as i32
}

/// Players above 1700 are clamped so a single competition never drops them
/// below 1700.
fn apply_rating_floor(entries: &[ResultEntry], deltas: &mut [i32]) {
    for (entry, delta) in entries.iter().zip(deltas.iter_mut()) {
        if entry.rating > RATING_FLOOR && entry.rating + *delta < RATING_FLOOR {
            *delta = RATING_FLOOR - entry.rating;
        }
    }
}
