//! Criteria, proposals, and scoring results.

use std::fmt;

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a larger raw value is an improvement or a regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Cheaper, faster, etc. The observed minimum normalizes to 100.
    LowerIsBetter,

    /// Longer warranty, better rating, etc. The observed maximum
    /// normalizes to 100.
    HigherIsBetter,
}

/// A comparison criterion of the decision matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Criterion {
    Price,
    DeliveryTime,
    ShippingCost,
    Warranty,
    Reputation,
    ServiceLevel,
}

impl Criterion {
    /// Every criterion, in the canonical column order.
    pub const ALL: [Criterion; 6] = [
        Criterion::Price,
        Criterion::DeliveryTime,
        Criterion::ShippingCost,
        Criterion::Warranty,
        Criterion::Reputation,
        Criterion::ServiceLevel,
    ];

    /// Whether lower or higher raw values score better.
    pub fn direction(self) -> Direction {
        match self {
            Criterion::Price | Criterion::DeliveryTime | Criterion::ShippingCost => {
                Direction::LowerIsBetter
            }
            Criterion::Warranty | Criterion::Reputation | Criterion::ServiceLevel => {
                Direction::HigherIsBetter
            }
        }
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::Price => "price",
            Criterion::DeliveryTime => "delivery_time",
            Criterion::ShippingCost => "shipping_cost",
            Criterion::Warranty => "warranty",
            Criterion::Reputation => "reputation",
            Criterion::ServiceLevel => "service_level",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Criterion::Price => 0,
            Criterion::DeliveryTime => 1,
            Criterion::ShippingCost => 2,
            Criterion::Warranty => 3,
            Criterion::Reputation => 4,
            Criterion::ServiceLevel => 5,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One supplier's response to a quote request.
///
/// Criterion fields are optional because proposals are read from nullable
/// backend rows. The engine rejects a proposal with any of them missing.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cotiz_decision::matrix::{Criterion, Proposal};
///
/// let submitted = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
/// let proposal = Proposal::new("p-1", "acme", submitted)
///     .with_supplier_name("ACME Industrial")
///     .with_total_price(1_250.0)
///     .with_delivery_days(7.0)
///     .with_shipping_cost(40.0)
///     .with_warranty_months(12.0)
///     .with_service_level(85.0)
///     .with_supplier_rating(4.5);
///
/// assert_eq!(proposal.value(Criterion::Reputation), Some(4.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Proposal {
    pub id: String,
    pub supplier_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub supplier_name: String,

    /// Total quoted price.
    pub total_price: Option<f64>,

    /// Promised delivery time in days.
    pub delivery_days: Option<f64>,

    pub shipping_cost: Option<f64>,

    /// Warranty duration in months.
    pub warranty_months: Option<f64>,

    /// Service-level / on-time delivery score.
    pub service_level: Option<f64>,

    /// Supplier rating on a 0–5 scale. Scored as the reputation criterion.
    pub supplier_rating: Option<f64>,

    pub submitted_at: DateTime<Utc>,
}

impl Proposal {
    /// Creates a proposal with every criterion value missing.
    pub fn new(
        id: impl Into<String>,
        supplier_id: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            supplier_id: supplier_id.into(),
            supplier_name: String::new(),
            total_price: None,
            delivery_days: None,
            shipping_cost: None,
            warranty_months: None,
            service_level: None,
            supplier_rating: None,
            submitted_at,
        }
    }

    /// Sets the supplier display name.
    pub fn with_supplier_name(mut self, name: impl Into<String>) -> Self {
        self.supplier_name = name.into();
        self
    }

    /// Sets the total quoted price.
    pub fn with_total_price(mut self, price: f64) -> Self {
        self.total_price = Some(price);
        self
    }

    /// Sets the delivery time in days.
    pub fn with_delivery_days(mut self, days: f64) -> Self {
        self.delivery_days = Some(days);
        self
    }

    /// Sets the shipping cost.
    pub fn with_shipping_cost(mut self, cost: f64) -> Self {
        self.shipping_cost = Some(cost);
        self
    }

    /// Sets the warranty duration in months.
    pub fn with_warranty_months(mut self, months: f64) -> Self {
        self.warranty_months = Some(months);
        self
    }

    /// Sets the service-level score.
    pub fn with_service_level(mut self, score: f64) -> Self {
        self.service_level = Some(score);
        self
    }

    /// Sets the 0–5 supplier rating.
    pub fn with_supplier_rating(mut self, rating: f64) -> Self {
        self.supplier_rating = Some(rating);
        self
    }

    /// Raw value of `criterion`, or `None` when the field is missing.
    pub fn value(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::Price => self.total_price,
            Criterion::DeliveryTime => self.delivery_days,
            Criterion::ShippingCost => self.shipping_cost,
            Criterion::Warranty => self.warranty_months,
            Criterion::Reputation => self.supplier_rating,
            Criterion::ServiceLevel => self.service_level,
        }
    }
}

/// Normalized 0–100 sub-scores of one proposal, one per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CriterionScores {
    pub price: f64,
    pub delivery_time: f64,
    pub shipping_cost: f64,
    pub warranty: f64,
    pub reputation: f64,
    pub service_level: f64,
}

impl CriterionScores {
    /// Returns the sub-score of `criterion`.
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Price => self.price,
            Criterion::DeliveryTime => self.delivery_time,
            Criterion::ShippingCost => self.shipping_cost,
            Criterion::Warranty => self.warranty,
            Criterion::Reputation => self.reputation,
            Criterion::ServiceLevel => self.service_level,
        }
    }

    pub(crate) fn from_columns(row: [f64; 6]) -> Self {
        Self {
            price: row[Criterion::Price.index()],
            delivery_time: row[Criterion::DeliveryTime.index()],
            shipping_cost: row[Criterion::ShippingCost.index()],
            warranty: row[Criterion::Warranty.index()],
            reputation: row[Criterion::Reputation.index()],
            service_level: row[Criterion::ServiceLevel.index()],
        }
    }

    /// Iterates `(criterion, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

/// Scoring outcome for one proposal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecisionMatrixResult {
    pub proposal_id: String,

    /// Position of the proposal in the slice passed to the engine.
    pub index: usize,

    pub scores: CriterionScores,

    /// Weighted total on the 0–100 scale.
    pub total_score: f64,

    /// 1 is the best proposal of the compared set.
    pub rank: usize,
}

impl DecisionMatrixResult {
    /// Share of `total_score` contributed by `criterion` under `weights`.
    ///
    /// The contributions of all six criteria sum to `total_score`.
    /// Returns 0 when the weights have no positive total.
    pub fn contribution(
        &self,
        criterion: Criterion,
        weights: &super::DecisionMatrixWeights,
    ) -> f64 {
        let total = weights.total();
        if total <= 0.0 {
            return 0.0;
        }
        self.scores.get(criterion) * (weights.get(criterion) / total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_directions() {
        assert_eq!(Criterion::Price.direction(), Direction::LowerIsBetter);
        assert_eq!(Criterion::DeliveryTime.direction(), Direction::LowerIsBetter);
        assert_eq!(Criterion::ShippingCost.direction(), Direction::LowerIsBetter);
        assert_eq!(Criterion::Warranty.direction(), Direction::HigherIsBetter);
        assert_eq!(Criterion::Reputation.direction(), Direction::HigherIsBetter);
        assert_eq!(Criterion::ServiceLevel.direction(), Direction::HigherIsBetter);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, c) in Criterion::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_display_uses_snake_case() {
        assert_eq!(Criterion::DeliveryTime.to_string(), "delivery_time");
        assert_eq!(Criterion::ServiceLevel.to_string(), "service_level");
    }

    #[test]
    fn test_proposal_value_mapping() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let p = Proposal::new("p", "s", t)
            .with_total_price(1.0)
            .with_delivery_days(2.0)
            .with_shipping_cost(3.0)
            .with_warranty_months(4.0)
            .with_supplier_rating(5.0)
            .with_service_level(6.0);

        let values: Vec<Option<f64>> = Criterion::ALL.iter().map(|&c| p.value(c)).collect();
        assert_eq!(
            values,
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)]
        );
    }

    #[test]
    fn test_new_proposal_has_missing_fields() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let p = Proposal::new("p", "s", t);
        assert!(Criterion::ALL.iter().all(|&c| p.value(c).is_none()));
    }

    #[test]
    fn test_scores_from_columns() {
        let s = CriterionScores::from_columns([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(s.get(Criterion::Warranty), 4.0);
        let collected: Vec<f64> = s.iter().map(|(_, v)| v).collect();
        assert_eq!(collected, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
