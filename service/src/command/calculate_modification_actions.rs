//! [`Command`] for calculating money movements of [`Modification`]s.

use std::convert::Infallible;

use common::operations::{By, Select};
use derive_more::{Display, Error};
use serde::Serialize;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        car, modification,
        pricing::{Action, Amounts},
        rental, Car, Modification, Rental,
    },
    infra::Storage,
    Service,
};

use super::Command;

/// [`Command`] for calculating [`Action`]s settling [`Modification`]s of
/// stored [`Rental`]s.
#[derive(Clone, Debug)]
pub struct CalculateModificationActions {
    /// [`Modification`]s to settle, in the order of the produced [`Row`]s.
    ///
    /// Each one is applied to the stored [`Rental`] independently.
    pub modifications: Vec<Modification>,
}

/// Settled [`Modification`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Row {
    /// ID of the settled [`Modification`].
    pub id: modification::Id,

    /// ID of the modified [`Rental`].
    pub rental_id: rental::Id,

    /// [`Action`]s of the parties whose amounts changed.
    pub actions: Vec<Action>,
}

impl<Idx> Command<CalculateModificationActions> for Service<Idx>
where
    Idx: Storage<
            Select<By<Option<Car>, car::Id>>,
            Ok = Option<Car>,
            Err = Infallible,
        > + Storage<
            Select<By<Option<Rental>, rental::Id>>,
            Ok = Option<Rental>,
            Err = Infallible,
        >,
{
    type Ok = Vec<Row>;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        cmd: CalculateModificationActions,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CalculateModificationActions { modifications } = cmd;
        let tariff = self.config().tariff;

        let rows = modifications
            .into_iter()
            .map(|modification| -> Result<_, Self::Err> {
                let Modification {
                    id,
                    rental_id,
                    patch,
                } = modification;

                let rental = self
                    .select::<Option<Rental>, _>(rental_id)
                    .ok_or(E::RentalNotExists {
                        modification_id: id,
                        rental_id,
                    })
                    .map_err(tracerr::wrap!())?;
                let car = self
                    .select::<Option<Car>, _>(rental.car_id)
                    .ok_or(E::CarNotExists {
                        rental_id,
                        car_id: rental.car_id,
                    })
                    .map_err(tracerr::wrap!())?;

                let before = Amounts::resolve(&rental, &car, tariff);
                let after =
                    Amounts::resolve(&rental.patched(&patch), &car, tariff);
                let actions = before.diff(&after);
                log::debug!(
                    "`Modification(id: {id})` of `Rental(id: {rental_id})` \
                     moves money of {} parties",
                    actions.len(),
                );

                Ok(Row {
                    id,
                    rental_id,
                    actions,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("{} `Modification`s settled", rows.len());

        Ok(rows)
    }
}

/// Error of [`CalculateModificationActions`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Modified [`Rental`] does not exist.
    #[display(
        "`Rental(id: {rental_id})` of `Modification(id: {modification_id})` \
         does not exist"
    )]
    RentalNotExists {
        /// ID of the [`Modification`] referencing the [`Rental`].
        modification_id: modification::Id,

        /// ID of the missing [`Rental`].
        rental_id: rental::Id,
    },

    /// [`Car`] of a modified [`Rental`] does not exist.
    #[display(
        "`Car(id: {car_id})` of `Rental(id: {rental_id})` does not exist"
    )]
    CarNotExists {
        /// ID of the [`Rental`] referencing the [`Car`].
        rental_id: rental::Id,

        /// ID of the missing [`Car`].
        car_id: car::Id,
    },
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        command::spec::{car, service},
        domain::{
            modification::{self, Patch},
            pricing::{action::Actor, action::Kind, Action},
            rental::{self, spec::rental},
            Modification,
        },
        infra::Index,
        Command as _, Config, Service,
    };

    use super::{CalculateModificationActions, ExecutionError, Row};

    fn action(who: Actor, kind: Kind, amount: i64) -> Action {
        Action {
            who,
            kind,
            amount: Money::new(amount),
        }
    }

    fn modify(id: u64, rental_id: u64, patch: Patch) -> Modification {
        Modification {
            id: modification::Id::from(id),
            rental_id: rental::Id::from(rental_id),
            patch,
        }
    }

    #[test]
    fn settles_modifications_independently() {
        let rows = service(Config::default())
            .execute(CalculateModificationActions {
                modifications: vec![
                    modify(
                        1,
                        1,
                        Patch {
                            end_date: Some("2017-12-13".parse().unwrap()),
                            distance: Some(150),
                            ..Patch::default()
                        },
                    ),
                    modify(
                        2,
                        2,
                        Patch {
                            start_date: Some("2017-12-15".parse().unwrap()),
                            ..Patch::default()
                        },
                    ),
                    modify(
                        3,
                        3,
                        Patch {
                            distance: Some(1000),
                            ..Patch::default()
                        },
                    ),
                ],
            })
            .unwrap();

        assert_eq!(
            rows,
            [
                Row {
                    id: modification::Id::from(1),
                    rental_id: rental::Id::from(1),
                    actions: vec![
                        action(Actor::Driver, Kind::Debit, 3300),
                        action(Actor::Owner, Kind::Credit, 2310),
                        action(Actor::Insurance, Kind::Credit, 495),
                        action(Actor::Assistance, Kind::Credit, 200),
                        action(Actor::Drivy, Kind::Credit, 295),
                    ],
                },
                Row {
                    id: modification::Id::from(2),
                    rental_id: rental::Id::from(2),
                    actions: vec![
                        action(Actor::Driver, Kind::Credit, 1800),
                        action(Actor::Owner, Kind::Debit, 980),
                        action(Actor::Insurance, Kind::Debit, 210),
                        action(Actor::Assistance, Kind::Debit, 100),
                        action(Actor::Drivy, Kind::Debit, 510),
                    ],
                },
                Row {
                    id: modification::Id::from(3),
                    rental_id: rental::Id::from(3),
                    actions: vec![],
                },
            ],
        );
    }

    #[test]
    fn applies_each_modification_to_stored_rental() {
        let patch = Patch {
            distance: Some(200),
            ..Patch::default()
        };
        let rows = service(Config::default())
            .execute(CalculateModificationActions {
                modifications: vec![modify(1, 1, patch), modify(2, 1, patch)],
            })
            .unwrap();

        assert_eq!(rows[0].actions, rows[1].actions);
        assert_eq!(
            rows[0].actions[0],
            action(Actor::Driver, Kind::Debit, 1000),
        );
    }

    #[test]
    fn serializes_rows() {
        let rows = service(Config::default())
            .execute(CalculateModificationActions {
                modifications: vec![modify(
                    4,
                    3,
                    Patch {
                        deductible_reduction: Some(false),
                        ..Patch::default()
                    },
                )],
            })
            .unwrap();

        assert_eq!(
            serde_json::to_value(&rows).unwrap(),
            serde_json::json!([{
                "id": 4,
                "rental_id": 3,
                "actions": [
                    { "who": "driver", "type": "credit", "amount": 400 },
                    { "who": "drivy", "type": "debit", "amount": 400 },
                ],
            }]),
        );
    }

    #[test]
    fn fails_on_missing_rental() {
        let err = service(Config::default())
            .execute(CalculateModificationActions {
                modifications: vec![modify(1, 42, Patch::default())],
            })
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::RentalNotExists { rental_id, .. }
                if u64::from(*rental_id) == 42,
        ));
        assert_eq!(
            err.as_ref().to_string(),
            "`Rental(id: 42)` of `Modification(id: 1)` does not exist",
        );
    }

    #[test]
    fn fails_on_missing_car() {
        let service = Service::new(
            Config::default(),
            Index::new(
                [car(1, 2000, 10)],
                [rental(1, 7, ("2017-12-8", "2017-12-8"), 0, false)],
            ),
        );

        let err = service
            .execute(CalculateModificationActions {
                modifications: vec![modify(1, 1, Patch::default())],
            })
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::CarNotExists { car_id, .. }
                if u64::from(*car_id) == 7,
        ));
    }
}
