//! Errors raised by the scoring engine.

/// Hard failures of the scoring engine. Missing or out-of-range stats are not
/// errors; they degrade to zero contribution.
#[derive(Clone, Debug, PartialEq)]
pub enum ScoringError {
    /// Input of the wrong shape (unparseable record, non-finite score).
    InvalidInput(String),
    /// A configuration value breaks the engine's invariants.
    InvalidConfig(String),
}

impl std::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ScoringError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ScoringError {}
