//! Weight configuration for the decision matrix.

use super::error::InvalidInput;
use super::types::Criterion;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative importance of each criterion.
///
/// Weights are conventionally percentages summing to 100, but any
/// non-negative vector with a positive total is accepted: the engine
/// divides by the total, so `{price: 2, warranty: 1}` ranks exactly like
/// `{price: 66.6, warranty: 33.3}`.
///
/// # Examples
///
/// ```
/// use cotiz_decision::matrix::DecisionMatrixWeights;
///
/// let weights = DecisionMatrixWeights::zero()
///     .with_price(40.0)
///     .with_delivery_time(20.0)
///     .with_shipping_cost(10.0)
///     .with_warranty(10.0)
///     .with_reputation(20.0);
///
/// assert!(weights.validate().is_ok());
/// assert!(weights.is_balanced());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecisionMatrixWeights {
    pub price: f64,
    pub delivery_time: f64,
    pub shipping_cost: f64,
    pub warranty: f64,
    pub reputation: f64,
    pub service_level: f64,
}

impl Default for DecisionMatrixWeights {
    /// The system preset used when neither the tenant nor the platform
    /// has configured a default template.
    fn default() -> Self {
        Self {
            price: 35.0,
            delivery_time: 20.0,
            shipping_cost: 10.0,
            warranty: 10.0,
            reputation: 15.0,
            service_level: 10.0,
        }
    }
}

impl DecisionMatrixWeights {
    /// Tolerance used by [`is_balanced`](Self::is_balanced).
    pub const BALANCE_TOLERANCE: f64 = 1e-6;

    /// All weights zero. Not valid on its own; a starting point for builders.
    pub fn zero() -> Self {
        Self {
            price: 0.0,
            delivery_time: 0.0,
            shipping_cost: 0.0,
            warranty: 0.0,
            reputation: 0.0,
            service_level: 0.0,
        }
    }

    /// Returns the weight of `criterion`.
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

    /// Sets the weight of `criterion` in place.
    pub fn set(&mut self, criterion: Criterion, weight: f64) {
        match criterion {
            Criterion::Price => self.price = weight,
            Criterion::DeliveryTime => self.delivery_time = weight,
            Criterion::ShippingCost => self.shipping_cost = weight,
            Criterion::Warranty => self.warranty = weight,
            Criterion::Reputation => self.reputation = weight,
            Criterion::ServiceLevel => self.service_level = weight,
        }
    }

    /// Sets the price weight.
    pub fn with_price(mut self, w: f64) -> Self {
        self.price = w;
        self
    }

    /// Sets the delivery time weight.
    pub fn with_delivery_time(mut self, w: f64) -> Self {
        self.delivery_time = w;
        self
    }

    /// Sets the shipping cost weight.
    pub fn with_shipping_cost(mut self, w: f64) -> Self {
        self.shipping_cost = w;
        self
    }

    /// Sets the warranty weight.
    pub fn with_warranty(mut self, w: f64) -> Self {
        self.warranty = w;
        self
    }

    /// Sets the reputation weight.
    pub fn with_reputation(mut self, w: f64) -> Self {
        self.reputation = w;
        self
    }

    /// Sets the service level weight.
    pub fn with_service_level(mut self, w: f64) -> Self {
        self.service_level = w;
        self
    }

    /// Sum of all six weights.
    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Validates the weight vector.
    ///
    /// Every weight must be finite and non-negative, at least one must be
    /// positive, and their sum must be finite.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        for criterion in Criterion::ALL {
            let value = self.get(criterion);
            if !value.is_finite() {
                return Err(InvalidInput::NonFiniteWeight { criterion });
            }
            if value < 0.0 {
                return Err(InvalidInput::NegativeWeight { criterion, value });
            }
        }
        let total = self.total();
        if !total.is_finite() {
            return Err(InvalidInput::NonFiniteWeightSum);
        }
        if total <= 0.0 {
            return Err(InvalidInput::ZeroWeightSum);
        }
        Ok(())
    }

    /// Whether the weights follow the sum-to-100 convention.
    ///
    /// Advisory only; scoring never requires it.
    pub fn is_balanced(&self) -> bool {
        (self.total() - 100.0).abs() <= Self::BALANCE_TOLERANCE
    }

    /// Rescales the weights so they sum to 100, preserving their ratios.
    pub fn to_percentages(&self) -> Result<Self, InvalidInput> {
        self.validate()?;
        let total = self.total();
        let mut scaled = *self;
        for criterion in Criterion::ALL {
            scaled.set(criterion, self.get(criterion) / total * 100.0);
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_balanced() {
        let w = DecisionMatrixWeights::default();
        assert!(w.validate().is_ok());
        assert!(w.is_balanced());
        assert!((w.total() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let w = DecisionMatrixWeights::default().with_warranty(-1.0);
        assert_eq!(
            w.validate(),
            Err(InvalidInput::NegativeWeight {
                criterion: Criterion::Warranty,
                value: -1.0,
            })
        );
    }

    #[test]
    fn test_nan_weight_rejected() {
        let w = DecisionMatrixWeights::default().with_reputation(f64::NAN);
        assert_eq!(
            w.validate(),
            Err(InvalidInput::NonFiniteWeight {
                criterion: Criterion::Reputation,
            })
        );
    }

    #[test]
    fn test_zero_weights_rejected() {
        assert_eq!(
            DecisionMatrixWeights::zero().validate(),
            Err(InvalidInput::ZeroWeightSum)
        );
    }

    #[test]
    fn test_overflowing_weight_sum_rejected() {
        let w = DecisionMatrixWeights::zero().with_price(1e308).with_warranty(1e308);
        assert_eq!(w.validate(), Err(InvalidInput::NonFiniteWeightSum));
    }

    #[test]
    fn test_unbalanced_weights_are_valid() {
        let w = DecisionMatrixWeights::zero().with_price(3.0).with_warranty(1.0);
        assert!(w.validate().is_ok());
        assert!(!w.is_balanced());
    }

    #[test]
    fn test_to_percentages() {
        let w = DecisionMatrixWeights::zero()
            .with_price(3.0)
            .with_warranty(1.0)
            .to_percentages()
            .unwrap();
        assert!((w.price - 75.0).abs() < 1e-10);
        assert!((w.warranty - 25.0).abs() < 1e-10);
        assert!(w.is_balanced());
    }

    #[test]
    fn test_set_and_get() {
        let mut w = DecisionMatrixWeights::zero();
        for (i, c) in Criterion::ALL.iter().enumerate() {
            w.set(*c, i as f64);
        }
        for (i, c) in Criterion::ALL.iter().enumerate() {
            assert_eq!(w.get(*c), i as f64);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_missing_fields_use_defaults() {
        let w: DecisionMatrixWeights = serde_json::from_str(r#"{"price": 50.0}"#).unwrap();
        assert_eq!(w.price, 50.0);
        assert_eq!(w.delivery_time, DecisionMatrixWeights::default().delivery_time);
    }
}
