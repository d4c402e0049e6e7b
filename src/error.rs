//! Error type shared by every engine entry point.
//!
//! All failures are caller contract violations (empty input, raw scores
//! passed where probabilities were expected, bad configuration). Nothing here
//! is retried; callers decide how to present a failure.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    #[error("candidate set is empty")]
    EmptyCandidateSet,

    #[error("invalid probability vector: {reason}")]
    InvalidProbabilityVector { reason: String },

    #[error("score for candidate at index {index} is not finite")]
    NonFiniteScore { index: usize },

    #[error("index {index} is out of range for {len} candidates")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no OS entropy available to seed the generator: {0}")]
    RngUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
