//! [`Command`] definition.

pub mod calculate_modification_actions;
pub mod calculate_prices;
pub mod calculate_rental_actions;

use std::convert::Infallible;

use common::operations::{By, Select};

use crate::{infra::Storage, Service};

pub use common::Handler as Command;

pub use self::{
    calculate_modification_actions::CalculateModificationActions,
    calculate_prices::CalculatePrices,
    calculate_rental_actions::CalculateRentalActions,
};

impl<Idx> Service<Idx> {
    /// Selects a `W`anted record by the provided `B`y key from the
    /// [`Storage`] of this [`Service`].
    fn select<W, B>(&self, by: B) -> W
    where
        Idx: Storage<Select<By<W, B>>, Ok = W, Err = Infallible>,
    {
        self.index()
            .execute(Select(By::new(by)))
            .unwrap_or_else(|e| match e {})
    }
}
