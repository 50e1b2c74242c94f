//! [`Action`] definitions.

use common::{define_kind, Money};
use serde::Serialize;

define_kind! {
    #[doc = "Party sharing the money of a rental."]
    #[derive(Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Actor {
        #[doc = "Driver renting a car. The only one paying."]
        Driver = 1,

        #[doc = "Owner of the rented car."]
        Owner = 2,

        #[doc = "Insurance covering the rental."]
        Insurance = 3,

        #[doc = "Roadside assistance covering the rental."]
        Assistance = 4,

        #[doc = "Platform itself."]
        Drivy = 5,
    }
}

impl Actor {
    /// Indicates whether this [`Actor`] pays for a rental, rather than
    /// receives money from it.
    #[must_use]
    pub fn is_payer(self) -> bool {
        matches!(self, Self::Driver)
    }
}

define_kind! {
    #[doc = "Direction of an [`Action`]."]
    #[derive(Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Kind {
        #[doc = "Money is taken from an [`Actor`]."]
        Debit = 1,

        #[doc = "Money is given to an [`Actor`]."]
        Credit = 2,
    }
}

/// Movement of money for a single [`Actor`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Action {
    /// [`Actor`] the money moves for.
    pub who: Actor,

    /// Direction the money moves in.
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Amount of moved money. Never negative.
    pub amount: Money,
}

impl Action {
    /// Creates a new [`Action`] out of the provided change of the amount
    /// belonging to the provided [`Actor`].
    ///
    /// A payer owing more is debited, while a payee receiving more is
    /// credited, and vice versa. An unchanged amount results in the
    /// direction of a growing one.
    #[must_use]
    pub fn from_delta(who: Actor, delta: Money) -> Self {
        let kind = if who.is_payer() != delta.is_negative() {
            Kind::Debit
        } else {
            Kind::Credit
        };

        Self {
            who,
            kind,
            amount: delta.abs(),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::{Action, Actor, Kind};

    fn action(who: Actor, delta: i64) -> (Kind, i64) {
        let a = Action::from_delta(who, Money::new(delta));
        assert_eq!(a.who, who);
        (a.kind, i64::from(a.amount))
    }

    #[test]
    fn driver_is_debited_for_growth() {
        assert_eq!(action(Actor::Driver, 3300), (Kind::Debit, 3300));
        assert_eq!(action(Actor::Driver, -1800), (Kind::Credit, 1800));
        assert_eq!(action(Actor::Driver, 0), (Kind::Debit, 0));
    }

    #[test]
    fn payees_are_credited_for_growth() {
        for who in [Actor::Owner, Actor::Insurance, Actor::Assistance] {
            assert_eq!(action(who, 200), (Kind::Credit, 200));
            assert_eq!(action(who, -200), (Kind::Debit, 200));
            assert_eq!(action(who, 0), (Kind::Credit, 0));
        }
        assert_eq!(action(Actor::Drivy, -1806), (Kind::Debit, 1806));
    }

    #[test]
    fn actors_are_ordered() {
        assert_eq!(
            Actor::ALL,
            [
                Actor::Driver,
                Actor::Owner,
                Actor::Insurance,
                Actor::Assistance,
                Actor::Drivy,
            ],
        );
    }

    #[test]
    fn serializes_in_lowercase() {
        let json = serde_json::to_value(Action::from_delta(
            Actor::Assistance,
            Money::new(-100),
        ))
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "who": "assistance",
                "type": "debit",
                "amount": 100,
            }),
        );
        assert_eq!(Actor::Drivy.to_string(), "drivy");
        assert_eq!("credit".parse::<Kind>().unwrap(), Kind::Credit);
    }
}
