use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::EnumIter;

/// Moderation state of a submitted run. `Unwatched` runs count as valid for
/// ranking purposes; only `Invalid` runs are excluded from the table.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum VerifiedStatus {
    Unwatched = 0,
    Valid = 1,
    Invalid = 2
}

impl VerifiedStatus {
    /// Whether this submission may occupy a place in the valid table.
    pub fn counts_for_ranking(self) -> bool {
        matches!(self, VerifiedStatus::Valid | VerifiedStatus::Unwatched)
    }
}

impl TryFrom<i32> for VerifiedStatus {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(VerifiedStatus::Unwatched),
            1 => Ok(VerifiedStatus::Valid),
            2 => Ok(VerifiedStatus::Invalid),
            _ => Err(())
        }
    }
}
