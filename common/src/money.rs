//! [`Money`]-related definitions.

use std::{fmt, ops};

use derive_more::{Add, AddAssign, From, Into, Neg, Sub, SubAssign, Sum};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Amount of money in minor currency units (cents).
///
/// Signed, because differences between two amounts (and some residual fees)
/// may go below zero.
#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    From,
    Hash,
    Into,
    Neg,
    Ord,
    PartialEq,
    PartialOrd,
    Sub,
    SubAssign,
    Sum,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Money(i64);

impl Money {
    /// Zero amount of [`Money`].
    pub const ZERO: Self = Self(0);

    /// Creates a new [`Money`] out of the provided amount of minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns an absolute value of this [`Money`].
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Indicates whether this [`Money`] is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Indicates whether this [`Money`] is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns this [`Money`] as an exact [`Decimal`] amount of minor units.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Creates a new [`Money`] out of the provided fractional amount of minor
    /// units, dropping the fractional part (rounding towards zero).
    #[expect(clippy::missing_panics_doc, reason = "bounded by `i64` inputs")]
    #[must_use]
    pub fn trunc(amount: Decimal) -> Self {
        Self(amount.trunc().to_i64().expect("`Money` overflow"))
    }

    /// Creates a new [`Money`] out of the provided fractional amount of minor
    /// units, rounding it towards negative infinity.
    #[expect(clippy::missing_panics_doc, reason = "bounded by `i64` inputs")]
    #[must_use]
    pub fn floor(amount: Decimal) -> Self {
        Self(amount.floor().to_i64().expect("`Money` overflow"))
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * i64::from(rhs))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Money;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::new(8400).to_string(), "8400");
        assert_eq!(Money::new(-120).to_string(), "-120");
        assert_eq!(Money::ZERO.to_string(), "0");
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Money::new(2000) + Money::new(400), Money::new(2400));
        assert_eq!(Money::new(300) - Money::new(400), Money::new(-100));
        assert_eq!(-Money::new(300), Money::new(-300));
        assert_eq!(Money::new(10) * 100, Money::new(1000));
        assert_eq!(Money::new(-75).abs(), Money::new(75));
        assert_eq!(
            [Money::new(1), Money::new(2), Money::new(3)]
                .into_iter()
                .sum::<Money>(),
            Money::new(6),
        );
    }

    #[test]
    fn rounds_fractions() {
        assert_eq!(Money::trunc(decimal("2520.9")), Money::new(2520));
        assert_eq!(Money::floor(decimal("2520.9")), Money::new(2520));

        assert_eq!(Money::trunc(decimal("-12.5")), Money::new(-12));
        assert_eq!(Money::floor(decimal("-12.5")), Money::new(-13));

        assert_eq!(Money::trunc(decimal("7400")), Money::new(7400));
    }
}
