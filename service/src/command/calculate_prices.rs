//! [`Command`] for pricing [`Rental`]s.

use std::convert::Infallible;

use common::{
    operations::{By, Select},
    Money,
};
use derive_more::{Display, Error};
use serde::Serialize;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::Config;
use crate::{
    domain::{
        car,
        pricing::{Commission, Quote},
        rental, Car, Rental,
    },
    infra::Storage,
    Service,
};

use super::Command;

/// [`Command`] for pricing [`Rental`]s.
#[derive(Clone, Debug)]
pub struct CalculatePrices {
    /// [`Rental`]s to price, in the order of the produced [`Row`]s.
    pub rentals: Vec<Rental>,
}

/// Priced [`Rental`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Row {
    /// ID of the priced [`Rental`].
    pub id: rental::Id,

    /// Price of the [`Rental`], excluding its [`Options`].
    pub price: Money,

    /// [`Options`] taken for the [`Rental`].
    ///
    /// Only present if [`Config::options`] is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,

    /// [`Commission`] taken from the price of the [`Rental`].
    ///
    /// Only present if [`Config::commission`] is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<Commission>,
}

/// Fees of the options taken for a [`Rental`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Options {
    /// Fee of the deductible reduction option. Zero, if not taken.
    pub deductible_reduction: Money,
}

impl<Idx> Command<CalculatePrices> for Service<Idx>
where
    Idx: Storage<
        Select<By<Option<Car>, car::Id>>,
        Ok = Option<Car>,
        Err = Infallible,
    >,
{
    type Ok = Vec<Row>;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: CalculatePrices) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CalculatePrices { rentals } = cmd;
        let config = *self.config();

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

                let quote = Quote::of(&rental, &car, config.tariff);
                log::debug!(
                    "`Rental(id: {})` priced at {} for {} days",
                    rental.id,
                    quote.price.total(),
                    quote.days,
                );

                Ok(Row {
                    id: rental.id,
                    price: quote.price.total(),
                    options: config.options.then_some(Options {
                        deductible_reduction: quote.deductible_fee,
                    }),
                    commission: config.commission.then_some(quote.commission),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("{} `Rental`s priced", rows.len());

        Ok(rows)
    }
}

/// Error of [`CalculatePrices`] [`Command`] execution.
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
