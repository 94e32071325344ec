use serde::{Deserialize, Serialize};

use crate::model::{constants::ONLINE_CUP_ROUNDS, structures::physics::Physics};

/// Immutable historical record of one player's rating change in one
/// competition. Persisted by the caller, never recomputed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RatingChangeRecord {
    pub player_id: i32,
    pub competition_id: i32,
    pub physics: Physics,
    pub delta: i32,
    pub place: u32,
    pub has_both_physics_bonus: bool,
    pub multicup_id: Option<i32>
}

/// One player's line in the overall standings of a series.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OverallStanding {
    pub player_id: i32,
    pub nick: String,
    pub country: String,
    /// Points per round, `None` for rounds the player did not finish.
    pub round_results: Vec<Option<f64>>,
    pub overall: f64,
    /// 0-based index of the subtracted worst round, where the rule applies.
    pub dropped_round_index: Option<usize>,
    pub rating_delta: Option<i32>
}

/// Stored per-player record of a synchronous 5-round cup. A time of 0 means
/// the round was not finished; places are only meaningful for LEGACY cups.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OnlineCupRecord {
    pub player_id: i32,
    pub nick: String,
    pub country: String,
    pub round_times: [f64; ONLINE_CUP_ROUNDS],
    pub round_places: [u32; ONLINE_CUP_ROUNDS]
}

/// Competition-level inputs to the offline rating calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingContext {
    pub competition_id: i32,
    pub physics: Physics,
    /// Flat rating bonus granted to every ranked participant.
    pub bonus_rating: i32,
    pub multicup_id: Option<i32>
}
