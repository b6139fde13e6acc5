//! Weighted multi-criteria decision matrix.
//!
//! Ranks the proposals competing for one quote request. Each criterion's
//! raw values are rescaled to 0–100 against the min/max of the compared
//! set, combined by a weighted mean, and ordered best-first:
//!
//! - **Lower is better**: price, delivery time, shipping cost.
//! - **Higher is better**: warranty, reputation (supplier rating),
//!   service level.
//!
//! A criterion on which every proposal has the same value carries no
//! signal and scores 100 for all of them.
//!
//! # References
//!
//! Weighted-sum model: Triantaphyllou (2000), "Multi-Criteria Decision
//! Making Methods: A Comparative Study"

mod config;
mod engine;
mod error;
mod types;

pub use config::DecisionMatrixWeights;
pub use engine::{normalize_value, DecisionMatrixEngine};
pub use error::{InvalidInput, MatrixResult};
pub use types::{Criterion, CriterionScores, DecisionMatrixResult, Direction, Proposal};
