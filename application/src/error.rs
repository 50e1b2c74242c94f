//! [`Error`]-related definitions.

use std::{io, path::PathBuf};

use derive_more::{Display, From};
use service::command::{
    calculate_modification_actions, calculate_prices,
    calculate_rental_actions,
};

#[cfg(doc)]
use crate::batch::{Input, Report};

/// Error of running a batch.
#[derive(Debug, Display, derive_more::Error, From)]
pub enum Error {
    /// Failed to read the [`Input`] file.
    #[display("failed to read `{}`: {source}", path.display())]
    Read {
        /// Path to the [`Input`] file.
        path: PathBuf,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the [`Report`] file.
    #[display("failed to write `{}`: {source}", path.display())]
    Write {
        /// Path to the [`Report`] file.
        path: PathBuf,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// [`Input`] is not a valid batch.
    #[display("malformed input: {_0}")]
    #[from]
    Input(serde_json::Error),

    /// [`Report`] cannot be serialized.
    #[display("failed to serialize report: {_0}")]
    Output(serde_json::Error),

    /// Modifications batch is requested, but the [`Input`] has none.
    #[display("input has no `rental_modifications` to settle")]
    NoModifications,

    /// Failed to price rentals.
    #[display("failed to price rentals: {_0}")]
    #[from]
    Prices(calculate_prices::ExecutionError),

    /// Failed to settle rentals.
    #[display("failed to settle rentals: {_0}")]
    #[from]
    RentalActions(calculate_rental_actions::ExecutionError),

    /// Failed to settle rental modifications.
    #[display("failed to settle rental modifications: {_0}")]
    #[from]
    ModificationActions(calculate_modification_actions::ExecutionError),
}
