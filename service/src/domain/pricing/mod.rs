//! Pricing of [`Rental`]s.

pub mod action;
pub mod amounts;
pub mod commission;
pub mod time;

use common::Money;

use crate::domain::{
    rental::{Days, Distance},
    Car, Rental,
};

pub use self::{
    action::Action, amounts::Amounts, commission::Commission, time::Tariff,
};

/// Fee for the deductible reduction option for each rental day.
pub const DEDUCTIBLE_FEE_PER_DAY: Money = Money::new(400);

/// Price of a [`Rental`], excluding any options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Price {
    /// Part charged for the rental time.
    pub time: Money,

    /// Part charged for the driven distance.
    pub distance: Money,
}

impl Price {
    /// Calculates the [`Price`] of renting the provided [`Car`] for the
    /// provided number of `days` and `distance`.
    #[must_use]
    pub fn of(
        tariff: Tariff,
        days: Days,
        distance: Distance,
        car: &Car,
    ) -> Self {
        Self {
            time: tariff.price(days, car.price_per_day),
            distance: car.price_per_km * distance,
        }
    }

    /// Returns the total of this [`Price`].
    #[must_use]
    pub fn total(self) -> Money {
        self.time + self.distance
    }
}

/// Complete calculation of what a [`Rental`] costs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Number of [`Days`] the [`Rental`] lasts.
    pub days: Days,

    /// [`Price`] of the [`Rental`].
    pub price: Price,

    /// [`Commission`] taken from the [`Price`].
    pub commission: Commission,

    /// Fee for the deductible reduction option, paid on top of the
    /// [`Price`]. Zero, if the option isn't taken.
    pub deductible_fee: Money,
}

impl Quote {
    /// Calculates the [`Quote`] of the provided [`Rental`] of the provided
    /// [`Car`].
    #[must_use]
    pub fn of(rental: &Rental, car: &Car, tariff: Tariff) -> Self {
        let days = rental.days();
        let price = Price::of(tariff, days, rental.distance, car);
        let commission = Commission::split(price.total(), days);
        let deductible_fee = if rental.deductible_reduction {
            DEDUCTIBLE_FEE_PER_DAY * days
        } else {
            Money::ZERO
        };

        Self {
            days,
            price,
            commission,
            deductible_fee,
        }
    }

    /// Allocates this [`Quote`] between the parties of the [`Rental`].
    ///
    /// The deductible fee is paid by the driver and kept by the platform
    /// entirely.
    #[must_use]
    pub fn amounts(&self) -> Amounts {
        let Self {
            days: _,
            price,
            commission,
            deductible_fee,
        } = *self;
        let total = price.total();

        Amounts {
            driver: total + deductible_fee,
            owner: total - commission.total,
            insurance: commission.insurance_fee,
            assistance: commission.assistance_fee,
            drivy: commission.drivy_fee + deductible_fee,
        }
    }
}
