//! Scoring input errors.

use thiserror::Error;

use super::types::Criterion;

/// Input rejected by the decision matrix before any scoring happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("no proposals to compare")]
    EmptyProposals,

    #[error("weight for {criterion} must be non-negative, got {value}")]
    NegativeWeight { criterion: Criterion, value: f64 },

    #[error("weight for {criterion} is not a finite number")]
    NonFiniteWeight { criterion: Criterion },

    /// Every weight is zero, so the weighted total has no divisor.
    #[error("weights must not all be zero")]
    ZeroWeightSum,

    /// Each weight is finite but their sum overflows.
    #[error("weights sum to a non-finite total")]
    NonFiniteWeightSum,

    #[error("proposal {proposal_id} is missing {criterion}")]
    MissingField {
        proposal_id: String,
        criterion: Criterion,
    },

    #[error("proposal {proposal_id} has a non-finite {criterion}")]
    NonFiniteField {
        proposal_id: String,
        criterion: Criterion,
    },
}

/// Result type for decision matrix operations.
pub type MatrixResult<T> = Result<T, InvalidInput>;
