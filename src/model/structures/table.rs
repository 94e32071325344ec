use serde::{Deserialize, Serialize};

use crate::model::structures::verified_status::VerifiedStatus;

/// One raw run submitted for a competition round, as supplied by storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Submission {
    pub player_id: i32,
    /// Run time in seconds. Must be finite and positive.
    pub time: f64,
    pub status: VerifiedStatus,
    pub is_outside_competition: bool,
    pub is_organizer: bool,
    pub reason: Option<String>
}

/// Arena record for one player, looked up by id while building tables.
///
/// `prior_change` and `prior_bonus` carry the rating-change row previously
/// persisted for the same competition, if any. A negative `prior_change`
/// switches the sub-2000 bonus to its diminishing form (legacy behavior).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub player_id: i32,
    pub nick: String,
    pub country: String,
    pub rating: i32,
    pub prior_change: Option<i32>,
    pub prior_bonus: Option<bool>
}

/// A deduplicated valid result: one best run per player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub player_id: i32,
    pub nick: String,
    pub country: String,
    pub rating: i32,
    pub prior_change: Option<i32>,
    pub prior_bonus: Option<bool>,
    pub time: f64,
    pub is_outside_competition: bool,
    pub is_organizer: bool
}

/// A rejected run. Never ranked, never scored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvalidEntry {
    pub player_id: i32,
    pub nick: String,
    pub time: f64,
    pub reason: String
}

/// Result table of one competition and one physics: valid entries sorted by
/// ascending time plus the rejected runs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    pub valid: Vec<ResultEntry>,
    pub invalid: Vec<InvalidEntry>
}

/// A valid entry with the points it earned under some scoring system.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PointEntry {
    pub player_id: i32,
    pub nick: String,
    pub country: String,
    pub time: f64,
    pub points: f64
}

/// One round's scored table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PointTable {
    pub valid: Vec<PointEntry>,
    pub invalid: Vec<InvalidEntry>
}
