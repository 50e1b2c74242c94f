//! In-memory [`Index`] of a batch.

use std::{collections::HashMap, convert::Infallible};

use common::operations::{By, Select};

use crate::{
    domain::{car, rental, Car, Rental},
    infra::Storage,
};

/// Read-only [`Storage`] of [`Car`]s and [`Rental`]s of a single batch,
/// indexed by their IDs.
///
/// Built once and never changed afterwards. Of the records sharing the same
/// ID, the last one wins.
#[derive(Clone, Debug, Default)]
pub struct Index {
    /// Indexed [`Car`]s.
    cars: HashMap<car::Id, Car>,

    /// Indexed [`Rental`]s.
    rentals: HashMap<rental::Id, Rental>,
}

impl Index {
    /// Creates a new [`Index`] out of the provided records.
    #[must_use]
    pub fn new(
        cars: impl IntoIterator<Item = Car>,
        rentals: impl IntoIterator<Item = Rental>,
    ) -> Self {
        Self {
            cars: cars.into_iter().map(|c| (c.id, c)).collect(),
            rentals: rentals.into_iter().map(|r| (r.id, r)).collect(),
        }
    }
}

impl Storage<Select<By<Option<Car>, car::Id>>> for Index {
    type Ok = Option<Car>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Option<Car>, car::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.cars.get(&by.into_inner()).copied())
    }
}

impl Storage<Select<By<Option<Rental>, rental::Id>>> for Index {
    type Ok = Option<Rental>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Option<Rental>, rental::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.rentals.get(&by.into_inner()).copied())
    }
}
