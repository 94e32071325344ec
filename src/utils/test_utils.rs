use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::structures::{
    physics::Physics,
    standing::{OnlineCupRecord, RatingChangeRecord, RatingContext},
    table::{InvalidEntry, PlayerProfile, PointEntry, PointTable, ResultEntry, ResultsTable, Submission},
    verified_status::VerifiedStatus
};

pub fn generate_profile(player_id: i32, rating: i32) -> PlayerProfile {
    PlayerProfile {
        player_id,
        nick: format!("player{player_id}"),
        country: "ru".to_string(),
        rating,
        prior_change: None,
        prior_bonus: None
    }
}

/// Arena of players 1..=n, all rated 1500.
pub fn generate_player_arena(n: i32) -> IndexMap<i32, PlayerProfile> {
    (1..=n).map(|id| (id, generate_profile(id, 1500))).collect()
}

pub fn generate_submission(player_id: i32, time: f64) -> Submission {
    Submission {
        player_id,
        time,
        status: VerifiedStatus::Valid,
        is_outside_competition: false,
        is_organizer: false,
        reason: None
    }
}

pub fn generate_entry(player_id: i32, time: f64, rating: i32) -> ResultEntry {
    ResultEntry {
        player_id,
        nick: format!("player{player_id}"),
        country: "ru".to_string(),
        rating,
        prior_change: None,
        prior_bonus: None,
        time,
        is_outside_competition: false,
        is_organizer: false
    }
}

pub fn generate_invalid_entry(player_id: i32, time: f64, reason: &str) -> InvalidEntry {
    InvalidEntry {
        player_id,
        nick: format!("player{player_id}"),
        time,
        reason: reason.to_string()
    }
}

/// Sorted table of players 1..=n rated 1500, one per time. Times must be
/// supplied in ascending order.
pub fn generate_table(times: &[f64]) -> ResultsTable {
    ResultsTable {
        valid: times
            .iter()
            .enumerate()
            .map(|(index, &time)| generate_entry(index as i32 + 1, time, 1500))
            .collect(),
        invalid: Vec::new()
    }
}

/// Sorted table from explicit (player_id, time, rating) triples.
pub fn generate_rated_table(entries: &[(i32, f64, i32)]) -> ResultsTable {
    ResultsTable {
        valid: entries
            .iter()
            .map(|&(player_id, time, rating)| generate_entry(player_id, time, rating))
            .collect(),
        invalid: Vec::new()
    }
}

/// Reproducible random field: n players with distinct-ish times in 60..120
/// and ratings in 1400..2100, sorted by time.
pub fn generate_random_field(n: usize, seed: u64) -> ResultsTable {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut valid: Vec<ResultEntry> = (0..n)
        .map(|index| {
            let time = rng.random_range(60.0..120.0);
            let rating = rng.random_range(1400..2100);
            generate_entry(index as i32 + 1, time, rating)
        })
        .collect();

    valid.sort_by(|a, b| a.time.total_cmp(&b.time));

    ResultsTable {
        valid,
        invalid: Vec::new()
    }
}

pub fn generate_point_table(entries: &[(i32, f64)]) -> PointTable {
    PointTable {
        valid: entries
            .iter()
            .map(|&(player_id, points)| PointEntry {
                player_id,
                nick: format!("player{player_id}"),
                country: "ru".to_string(),
                time: 0.0,
                points
            })
            .collect(),
        invalid: Vec::new()
    }
}

pub fn generate_online_record(player_id: i32, round_times: [f64; 5]) -> OnlineCupRecord {
    OnlineCupRecord {
        player_id,
        nick: format!("player{player_id}"),
        country: "ru".to_string(),
        round_times,
        round_places: [0; 5]
    }
}

pub fn generate_rating_change(player_id: i32, delta: i32) -> RatingChangeRecord {
    RatingChangeRecord {
        player_id,
        competition_id: 1,
        physics: Physics::Vq3,
        delta,
        place: 1,
        has_both_physics_bonus: false,
        multicup_id: Some(1)
    }
}

pub fn generate_context(bonus_rating: i32) -> RatingContext {
    RatingContext {
        competition_id: 1,
        physics: Physics::Vq3,
        bonus_rating,
        multicup_id: None
    }
}
