//! [`Car`] definitions.

use common::Money;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Car available for rent.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct Car {
    /// ID of this [`Car`].
    pub id: Id,

    /// Price of renting this [`Car`] for a single full-rate day.
    pub price_per_day: Money,

    /// Price of driving this [`Car`] for a single kilometer.
    pub price_per_km: Money,
}

/// ID of a [`Car`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);
