//! [`Amounts`] definitions.

use common::Money;

use crate::domain::{
    pricing::{action::Actor, Action, Quote, Tariff},
    Car, Rental,
};

/// Money every [`Actor`] pays or receives for a single [`Rental`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Amounts {
    /// Money paid by the driver.
    pub driver: Money,

    /// Money received by the owner of the [`Car`].
    pub owner: Money,

    /// Money received by the insurance.
    pub insurance: Money,

    /// Money received by the roadside assistance.
    pub assistance: Money,

    /// Money received by the platform.
    pub drivy: Money,
}

impl Amounts {
    /// Resolves [`Amounts`] of the provided [`Rental`] of the provided
    /// [`Car`].
    ///
    /// Works the same for stored [`Rental`]s and for patched ones.
    #[must_use]
    pub fn resolve(rental: &Rental, car: &Car, tariff: Tariff) -> Self {
        Quote::of(rental, car, tariff).amounts()
    }

    /// Returns the amount belonging to the provided [`Actor`].
    #[must_use]
    pub fn of(&self, actor: Actor) -> Money {
        match actor {
            Actor::Driver => self.driver,
            Actor::Owner => self.owner,
            Actor::Insurance => self.insurance,
            Actor::Assistance => self.assistance,
            Actor::Drivy => self.drivy,
        }
    }

    /// Returns [`Action`]s turning these [`Amounts`] into the `after` ones.
    ///
    /// [`Actor`]s whose amount doesn't change are omitted.
    #[must_use]
    pub fn diff(&self, after: &Self) -> Vec<Action> {
        Actor::ALL
            .iter()
            .filter_map(|&who| {
                let delta = after.of(who) - self.of(who);
                (!delta.is_zero()).then(|| Action::from_delta(who, delta))
            })
            .collect()
    }

    /// Returns [`Action`]s moving these [`Amounts`], one for every [`Actor`],
    /// even a zero one.
    #[must_use]
    pub fn ledger(&self) -> Vec<Action> {
        Actor::ALL
            .iter()
            .map(|&who| Action::from_delta(who, self.of(who)))
            .collect()
    }
}
