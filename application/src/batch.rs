//! Batch [`Input`] and [`Report`] handling.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use service::{
    command::{
        calculate_modification_actions, calculate_prices,
        calculate_rental_actions, CalculateModificationActions,
        CalculatePrices, CalculateRentalActions,
    },
    domain::{Car, Modification, Rental},
    infra::Index,
    Command as _,
};
use tracerr::Traced;
use tracing as log;

use crate::{config::Batch, Error, Service};

/// Records of a single batch.
#[derive(Clone, Debug, Deserialize)]
pub struct Input {
    /// [`Car`]s referenced by the [`Rental`]s.
    pub cars: Vec<Car>,

    /// Stored [`Rental`]s.
    pub rentals: Vec<Rental>,

    /// [`Modification`]s of the stored [`Rental`]s, if any.
    #[serde(default)]
    pub rental_modifications: Option<Vec<Modification>>,
}

/// Result of a single batch.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Prices of [`Rental`]s.
    Prices {
        /// Priced [`Rental`]s.
        rentals: Vec<calculate_prices::Row>,
    },

    /// Money movements settling [`Rental`]s.
    RentalActions {
        /// Settled [`Rental`]s.
        rentals: Vec<calculate_rental_actions::Row>,
    },

    /// Money movements settling [`Modification`]s.
    ModificationActions {
        /// Settled [`Modification`]s.
        rentals: Vec<calculate_modification_actions::Row>,
    },
}

impl Report {
    /// Returns the number of records in this [`Report`].
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Prices { rentals } => rentals.len(),
            Self::RentalActions { rentals } => rentals.len(),
            Self::ModificationActions { rentals } => rentals.len(),
        }
    }

    /// Indicates whether this [`Report`] has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads the [`Input`] from the JSON file at the provided `path`.
///
/// # Errors
///
/// If the file cannot be read, or doesn't contain a valid [`Input`].
pub fn read(path: &Path) -> Result<Input, Traced<Error>> {
    let bytes = fs::read(path)
        .map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })
        .map_err(tracerr::wrap!())?;
    let input: Input = serde_json::from_slice(&bytes)
        .map_err(Error::Input)
        .map_err(tracerr::wrap!())?;

    log::info!(
        "read {} cars, {} rentals and {} modifications from `{}`",
        input.cars.len(),
        input.rentals.len(),
        input.rental_modifications.as_ref().map_or(0, Vec::len),
        path.display(),
    );

    Ok(input)
}

/// Runs the provided [`Batch`] over the provided [`Input`].
///
/// # Errors
///
/// If the [`Input`] references missing records, or misses the records the
/// [`Batch`] requires.
pub fn run(
    input: Input,
    batch: Batch,
    config: service::Config,
) -> Result<Report, Traced<Error>> {
    let Input {
        cars,
        rentals,
        rental_modifications,
    } = input;

    let batch = match batch {
        Batch::Auto => {
            if rental_modifications.is_some() {
                Batch::Modifications
            } else {
                Batch::Prices
            }
        }
        b @ (Batch::Prices | Batch::Actions | Batch::Modifications) => b,
    };
    log::info!("running `{batch:?}` batch with {config:?}");

    let service = Service::new(config, Index::new(cars, rentals.clone()));

    let report = match batch {
        Batch::Prices => service
            .execute(CalculatePrices { rentals })
            .map(|rentals| Report::Prices { rentals })
            .map_err(tracerr::map_from_and_wrap!(=> Error))?,
        Batch::Actions => service
            .execute(CalculateRentalActions { rentals })
            .map(|rentals| Report::RentalActions { rentals })
            .map_err(tracerr::map_from_and_wrap!(=> Error))?,
        Batch::Auto | Batch::Modifications => {
            let modifications = rental_modifications
                .ok_or(Error::NoModifications)
                .map_err(tracerr::wrap!())?;
            service
                .execute(CalculateModificationActions { modifications })
                .map(|rentals| Report::ModificationActions { rentals })
                .map_err(tracerr::map_from_and_wrap!(=> Error))?
        }
    };

    Ok(report)
}

/// Writes the provided [`Report`] as pretty-printed JSON into the file at
/// the provided `path`.
///
/// # Errors
///
/// If the [`Report`] cannot be serialized, or the file cannot be written.
pub fn write(path: &Path, report: &Report) -> Result<(), Traced<Error>> {
    let mut json = serde_json::to_string_pretty(report)
        .map_err(Error::Output)
        .map_err(tracerr::wrap!())?;
    json.push('\n');

    fs::write(path, json)
        .map_err(|source| Error::Write {
            path: path.to_owned(),
            source,
        })
        .map_err(tracerr::wrap!())?;

    log::info!("wrote {} records into `{}`", report.len(), path.display());

    Ok(())
}
