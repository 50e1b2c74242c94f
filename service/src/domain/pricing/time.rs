//! Time-based pricing of a [`Rental`].

use common::{Money, Percent};
use rust_decimal::Decimal;

#[cfg(doc)]
use crate::domain::Rental;
use crate::domain::rental::Days;

/// Degressive rates, each applied starting from the given day (1-based) of a
/// [`Rental`] until the next one takes over.
const DEGRESSION: [(Days, Percent); 4] = [
    (1, Percent::FULL),
    (2, Percent::whole(90)),
    (5, Percent::whole(70)),
    (11, Percent::whole(50)),
];

/// Tariff charging the time of a [`Rental`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Tariff {
    /// Every day is charged at the full price.
    Flat,

    /// Later days of a [`Rental`] are charged cheaper:
    /// - day 1: full price;
    /// - days 2-4: 90%;
    /// - days 5-10: 70%;
    /// - day 11 and beyond: 50%.
    #[default]
    Degressive,
}

impl Tariff {
    /// Returns the rate of the full price charged for the provided `day`
    /// (1-based) of a [`Rental`].
    #[must_use]
    pub fn rate(self, day: Days) -> Percent {
        match self {
            Self::Flat => Percent::FULL,
            Self::Degressive => DEGRESSION
                .iter()
                .rev()
                .find(|(since, _)| day >= *since)
                .map_or(Percent::FULL, |(_, rate)| *rate),
        }
    }

    /// Calculates the time price of a [`Rental`] lasting the provided number
    /// of `days`.
    ///
    /// Fractions of the daily charges are accumulated exactly, and the total
    /// is truncated only once.
    #[must_use]
    pub fn price(self, days: Days, price_per_day: Money) -> Money {
        Money::trunc(
            (1..=days)
                .map(|day| self.rate(day).of(price_per_day))
                .sum::<Decimal>(),
        )
    }
}
