pub mod physics;
pub mod scoring_system;
pub mod standing;
pub mod table;
pub mod verified_status;
