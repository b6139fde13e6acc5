//! Normalization, weighting, and ranking.

use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::DecisionMatrixWeights;
use super::error::{InvalidInput, MatrixResult};
use super::types::{Criterion, CriterionScores, DecisionMatrixResult, Direction, Proposal};

/// Ranks supplier proposals against a weighted criteria set.
///
/// Scoring is a pure function of its inputs: the engine holds only
/// numeric knobs and never mutates proposals or weights.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cotiz_decision::matrix::{DecisionMatrixEngine, DecisionMatrixWeights, Proposal};
///
/// let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
/// let offer = |id: &str, price: f64| {
///     Proposal::new(id, id, t)
///         .with_total_price(price)
///         .with_delivery_days(5.0)
///         .with_shipping_cost(0.0)
///         .with_warranty_months(12.0)
///         .with_service_level(90.0)
///         .with_supplier_rating(4.0)
/// };
///
/// let proposals = vec![offer("a", 1000.0), offer("b", 1200.0), offer("c", 900.0)];
/// let ranked = DecisionMatrixEngine::new()
///     .score(&proposals, &DecisionMatrixWeights::default())
///     .unwrap();
///
/// assert_eq!(ranked[0].proposal_id, "c");
/// assert_eq!(ranked[0].rank, 1);
/// ```
#[derive(Debug, Clone)]
pub struct DecisionMatrixEngine {
    epsilon: f64,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl DecisionMatrixEngine {
    /// Creates an engine with a tie epsilon of `1e-9`, running sequentially.
    pub fn new() -> Self {
        Self {
            epsilon: 1e-9,
            parallel: false,
        }
    }

    /// Sets the resolution at which weighted totals are considered tied.
    ///
    /// Totals are bucketed to multiples of `eps`; proposals in the same
    /// bucket fall through to the price/timestamp tie-breakers. A value of
    /// 0 compares raw totals.
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps.max(0.0);
        self
    }

    /// Computes per-proposal rows on the rayon pool.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Output is
    /// identical either way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scores and ranks `proposals`.
    ///
    /// Returns one result per proposal, ordered by rank (rank 1 first).
    /// Ties on the weighted total are broken by lower price, then earlier
    /// submission, then proposal id, then input position.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`] if the slice is empty, a weight is negative or
    /// non-finite, all weights are zero, or a proposal lacks a finite
    /// value for any criterion. Nothing is computed in that case.
    pub fn score(
        &self,
        proposals: &[Proposal],
        weights: &DecisionMatrixWeights,
    ) -> MatrixResult<Vec<DecisionMatrixResult>> {
        if proposals.is_empty() {
            return Err(InvalidInput::EmptyProposals);
        }
        weights.validate()?;
        let values = extract_values(proposals)?;

        let total_weight = weights.total();
        debug!(
            proposals = proposals.len(),
            total_weight,
            balanced = weights.is_balanced(),
            "scoring decision matrix"
        );

        let bounds = column_bounds(&values);
        // Shares of the total, so the weighted sum cannot overflow.
        let weight_row = Criterion::ALL.map(|c| weights.get(c) / total_weight);

        let compute_row = |row: &[f64; 6]| -> (CriterionScores, f64) {
            let mut normalized = [0.0; 6];
            let mut total = 0.0;
            for c in Criterion::ALL {
                let i = c.index();
                let (min, max) = bounds[i];
                normalized[i] = normalize_value(row[i], min, max, c.direction());
                total += normalized[i] * weight_row[i];
            }
            (CriterionScores::from_columns(normalized), total.clamp(0.0, 100.0))
        };

        #[cfg(feature = "parallel")]
        let rows: Vec<(CriterionScores, f64)> = if self.parallel {
            values.par_iter().map(|row| compute_row(row)).collect()
        } else {
            values.iter().map(|row| compute_row(row)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<(CriterionScores, f64)> = values.iter().map(|row| compute_row(row)).collect();

        let order = self.rank_order(proposals, &values, &rows);

        let results: Vec<DecisionMatrixResult> = order
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let (scores, total_score) = rows[index];
                DecisionMatrixResult {
                    proposal_id: proposals[index].id.clone(),
                    index,
                    scores,
                    total_score,
                    rank: position + 1,
                }
            })
            .collect();

        if let Some(top) = results.first() {
            debug!(
                proposal_id = %top.proposal_id,
                total_score = top.total_score,
                "top ranked proposal"
            );
        }

        Ok(results)
    }

    /// Returns the rank-1 result.
    pub fn best(
        &self,
        proposals: &[Proposal],
        weights: &DecisionMatrixWeights,
    ) -> MatrixResult<DecisionMatrixResult> {
        self.score(proposals, weights)?
            .into_iter()
            .next()
            .ok_or(InvalidInput::EmptyProposals)
    }

    /// Normalized 0–100 column for a single criterion, in input order.
    pub fn normalize(
        &self,
        proposals: &[Proposal],
        criterion: Criterion,
    ) -> MatrixResult<Vec<f64>> {
        if proposals.is_empty() {
            return Err(InvalidInput::EmptyProposals);
        }
        let column = proposals
            .iter()
            .map(|p| checked_value(p, criterion))
            .collect::<MatrixResult<Vec<f64>>>()?;

        let (min, max) = min_max(column.iter().copied());
        Ok(column
            .iter()
            .map(|&v| normalize_value(v, min, max, criterion.direction()))
            .collect())
    }

    /// Input indices sorted best-first.
    fn rank_order(
        &self,
        proposals: &[Proposal],
        values: &[[f64; 6]],
        rows: &[(CriterionScores, f64)],
    ) -> Vec<usize> {
        let keys: Vec<f64> = rows.iter().map(|(_, total)| self.tie_key(*total)).collect();
        let price = Criterion::Price.index();

        let mut indices: Vec<usize> = (0..proposals.len()).collect();
        indices.sort_by(|&a, &b| {
            keys[b]
                .total_cmp(&keys[a])
                .then_with(|| values[a][price].total_cmp(&values[b][price]))
                .then_with(|| proposals[a].submitted_at.cmp(&proposals[b].submitted_at))
                .then_with(|| proposals[a].id.cmp(&proposals[b].id))
                .then_with(|| a.cmp(&b))
        });
        indices
    }

    fn tie_key(&self, total: f64) -> f64 {
        if self.epsilon > 0.0 {
            (total / self.epsilon).round()
        } else {
            total
        }
    }
}

impl Default for DecisionMatrixEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Rescales `value` into [0, 100] relative to the observed `[min, max]`.
///
/// When `max == min` the criterion cannot discriminate and every
/// proposal scores 100.
pub fn normalize_value(value: f64, min: f64, max: f64, direction: Direction) -> f64 {
    // Halved so that columns spanning the whole f64 range stay finite.
    let (lo, hi, v) = (min / 2.0, max / 2.0, value / 2.0);
    let range = hi - lo;
    if range <= 0.0 {
        return 100.0;
    }
    let ratio = match direction {
        Direction::LowerIsBetter => (hi - v) / range,
        Direction::HigherIsBetter => (v - lo) / range,
    };
    (100.0 * ratio).clamp(0.0, 100.0)
}

fn checked_value(proposal: &Proposal, criterion: Criterion) -> MatrixResult<f64> {
    match proposal.value(criterion) {
        None => Err(InvalidInput::MissingField {
            proposal_id: proposal.id.clone(),
            criterion,
        }),
        Some(v) if !v.is_finite() => Err(InvalidInput::NonFiniteField {
            proposal_id: proposal.id.clone(),
            criterion,
        }),
        Some(v) => Ok(v),
    }
}

fn extract_values(proposals: &[Proposal]) -> MatrixResult<Vec<[f64; 6]>> {
    proposals
        .iter()
        .map(|p| {
            let mut row = [0.0; 6];
            for c in Criterion::ALL {
                row[c.index()] = checked_value(p, c)?;
            }
            Ok(row)
        })
        .collect()
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn column_bounds(values: &[[f64; 6]]) -> [(f64, f64); 6] {
    Criterion::ALL.map(|c| min_max(values.iter().map(|row| row[c.index()])))
}
