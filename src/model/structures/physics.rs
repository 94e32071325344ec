use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Movement ruleset a competition is scored under. Ratings are tracked
/// independently per physics.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Physics {
    Vq3,
    Cpm
}

impl Physics {
    /// The other physics of the same competition, used for the cross-physics
    /// participation bonus.
    pub fn other(self) -> Physics {
        match self {
            Physics::Vq3 => Physics::Cpm,
            Physics::Cpm => Physics::Vq3
        }
    }
}
