//! [`Percent`]-related definitions.

use derive_more::Display;
use rust_decimal::Decimal;

use crate::Money;

/// Exact percentage in `0..=100`.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(Decimal);

impl Percent {
    /// Whole amount (`100%`).
    pub const FULL: Self = Self::whole(100);

    /// Creates a new [`Percent`] out of the provided whole number of
    /// percents.
    ///
    /// # Panics
    ///
    /// If the provided value is greater than `100`.
    #[must_use]
    pub const fn whole(val: u8) -> Self {
        assert!(val <= 100, "`Percent` cannot exceed `100`");
        Self(Decimal::from_parts(val as u32, 0, 0, false, 0))
    }

    /// Calculates this [`Percent`] of the provided [`Money`].
    ///
    /// The result is exact, so the caller decides how to round it.
    #[must_use]
    pub fn of(self, money: Money) -> Decimal {
        money.to_decimal() * self.0 / Decimal::ONE_HUNDRED
    }
}
