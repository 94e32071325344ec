use thiserror::Error;

/// Deterministic precondition violations on engine input. The engine performs
/// no I/O, so there are no retryable failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Empty valid result set where at least one ranked entry is required.
    #[error("no data to rank: {0}")]
    Data(String),

    /// Unsupported scoring system for the operation, round index outside the
    /// series, or a calculation that is not implemented.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A single malformed submission record. Raised rather than skipped so
    /// data-quality issues never hide inside historical computations.
    #[error("invalid submission: {0}")]
    Validation(String)
}
