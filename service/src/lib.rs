//! Service contains the pricing logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;

use smart_default::SmartDefault;

use crate::domain::pricing::Tariff;
#[cfg(doc)]
use crate::infra::Index;

pub use self::command::Command;

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`Tariff`] to price the rental time with.
    pub tariff: Tariff,

    /// Indicator whether priced rentals should carry their commission
    /// breakdown.
    #[default(true)]
    pub commission: bool,

    /// Indicator whether priced rentals should carry their options
    /// breakdown.
    pub options: bool,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Idx> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Index`] of the records this [`Service`] operates on.
    index: Idx,
}

impl<Idx> Service<Idx> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, index: Idx) -> Self {
        Self { config, index }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Index`] of this [`Service`].
    #[must_use]
    pub fn index(&self) -> &Idx {
        &self.index
    }
}
