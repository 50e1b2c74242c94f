//! [`Command`] for calculating money movements of [`Rental`]s.

use std::convert::Infallible;

use common::operations::{By, Select};
use derive_more::{Display, Error};
use serde::Serialize;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        car,
        pricing::{Action, Amounts},
        rental, Car, Rental,
    },
    infra::Storage,
    Service,
};

use super::Command;

/// [`Command`] for calculating [`Action`]s settling [`Rental`]s.
#[derive(Clone, Debug)]
pub struct CalculateRentalActions {
    /// [`Rental`]s to settle, in the order of the produced [`Row`]s.
    pub rentals: Vec<Rental>,
}

/// Settled [`Rental`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Row {
    /// ID of the settled [`Rental`].
    pub id: rental::Id,

    /// [`Action`]s of every party, in a fixed order.
    pub actions: Vec<Action>,
}

impl<Idx> Command<CalculateRentalActions> for Service<Idx>
where
    Idx: Storage<
        Select<By<Option<Car>, car::Id>>,
        Ok = Option<Car>,
        Err = Infallible,
    >,
{
    type Ok = Vec<Row>;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        cmd: CalculateRentalActions,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CalculateRentalActions { rentals } = cmd;
        let tariff = self.config().tariff;

        let rows = rentals
            .into_iter()
            .map(|rental| -> Result<_, Self::Err> {
                let car = self
                    .select::<Option<Car>, _>(rental.car_id)
                    .ok_or(E::CarNotExists {
                        rental_id: rental.id,
                        car_id: rental.car_id,
                    })
                    .map_err(tracerr::wrap!())?;

                let amounts = Amounts::resolve(&rental, &car, tariff);
                log::debug!(
                    "`Rental(id: {})` settled with {} paid by driver",
                    rental.id,
                    amounts.driver,
                );

                Ok(Row {
                    id: rental.id,
                    actions: amounts.ledger(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("{} `Rental`s settled", rows.len());

        Ok(rows)
    }
}

/// Error of [`CalculateRentalActions`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Car`] of a [`Rental`] does not exist.
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
