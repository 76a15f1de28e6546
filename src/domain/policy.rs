use super::hold::Term;
use super::money::Money;
use crate::error::{HoldError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// Explicit limits for actors outside the standard membership tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub hold_limit: usize,
    pub max_term: u32,
    /// Fraction taken off the undiscounted cost, between 0 and 1.
    pub discount: Decimal,
}

/// Rules an actor is bound by, fixed when the actor is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Regular,
    Premium,
    Custom(Limits),
}

impl Policy {
    pub fn limits(&self) -> Limits {
        match self {
            Policy::Regular => Limits {
                hold_limit: 2,
                max_term: 7,
                discount: Decimal::ZERO,
            },
            Policy::Premium => Limits {
                hold_limit: 5,
                max_term: 21,
                discount: dec!(0.10),
            },
            Policy::Custom(limits) => *limits,
        }
    }

    /// Most items an actor may hold at once.
    pub fn hold_limit(&self) -> usize {
        self.limits().hold_limit
    }

    /// Longest term, in days, an actor may request.
    pub fn max_term(&self) -> u32 {
        self.limits().max_term
    }

    /// `rate × days × (1 − discount)`, rounded to cents.
    ///
    /// Fails with a validation error when the product does not fit in a
    /// `Decimal`.
    pub fn cost(&self, daily_rate: Money, term: Term) -> Result<Money> {
        let discount = self.limits().discount.clamp(Decimal::ZERO, Decimal::ONE);
        let net = daily_rate
            .value()
            .checked_mul(Decimal::from(term.days()))
            .and_then(|gross| gross.checked_mul(Decimal::ONE - discount))
            .ok_or_else(|| {
                HoldError::Validation(format!(
                    "cost of {term} at {daily_rate} per day is out of range"
                ))
            })?;
        Money::new(net).map(Money::rounded)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Regular => f.write_str("Regular"),
            Policy::Premium => f.write_str("Premium"),
            Policy::Custom(_) => f.write_str("Custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(value: Decimal) -> Money {
        Money::new(value).unwrap()
    }

    #[test]
    fn test_tier_limits() {
        assert_eq!(Policy::Regular.hold_limit(), 2);
        assert_eq!(Policy::Regular.max_term(), 7);
        assert_eq!(Policy::Premium.hold_limit(), 5);
        assert_eq!(Policy::Premium.max_term(), 21);
    }

    #[test]
    fn test_cost_applies_discount() {
        let term = Term::new(3).unwrap();
        assert_eq!(
            Policy::Regular.cost(money(dec!(1200)), term),
            Ok(money(dec!(3600)))
        );
        assert_eq!(
            Policy::Premium.cost(money(dec!(1200)), term),
            Ok(money(dec!(3240)))
        );
    }

    #[test]
    fn test_custom_limits_and_clamped_discount() {
        let policy = Policy::Custom(Limits {
            hold_limit: 1,
            max_term: 30,
            discount: dec!(1.5),
        });
        assert_eq!(policy.hold_limit(), 1);
        assert_eq!(policy.max_term(), 30);
        assert_eq!(
            policy.cost(money(dec!(500)), Term::new(2).unwrap()),
            Ok(Money::ZERO)
        );
    }

    #[test]
    fn test_free_items_cost_nothing() {
        assert_eq!(
            Policy::Premium.cost(Money::ZERO, Term::new(21).unwrap()),
            Ok(Money::ZERO)
        );
    }

    #[test]
    fn test_cost_out_of_range_is_an_error() {
        let err = Policy::Regular
            .cost(money(Decimal::MAX), Term::new(2).unwrap())
            .unwrap_err();
        assert!(matches!(err, HoldError::Validation(_)));

        // A single day never scales the rate up.
        assert_eq!(
            Policy::Regular.cost(money(Decimal::MAX), Term::new(1).unwrap()),
            Ok(money(Decimal::MAX))
        );
    }
}
