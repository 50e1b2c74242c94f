//! [`Rental`] definitions.

use common::{unit, DateOf};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Car;
use crate::domain::{car, modification::Patch};

/// Snapshot of a [`Car`] rental.
///
/// Either a stored rental, or a stored one with a [`Patch`] applied on top.
/// Both are priced the same way.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct Rental {
    /// ID of this [`Rental`].
    pub id: Id,

    /// ID of the rented [`Car`].
    pub car_id: car::Id,

    /// First day of this [`Rental`].
    pub start_date: StartDate,

    /// Last day of this [`Rental`], inclusive.
    pub end_date: EndDate,

    /// Distance driven during this [`Rental`].
    pub distance: Distance,

    /// Indicator whether the driver took the deductible reduction option.
    #[serde(default)]
    pub deductible_reduction: bool,
}

impl Rental {
    /// Returns the number of [`Days`] this [`Rental`] lasts, counting both
    /// its first and last days.
    ///
    /// A [`Rental`] ending before it starts spans the same days as if its
    /// dates were swapped.
    #[must_use]
    pub fn days(&self) -> Days {
        let between = self.start_date.days_until(self.end_date).unsigned_abs();
        Days::try_from(between).map_or(Days::MAX, |d| d.saturating_add(1))
    }

    /// Returns a copy of this [`Rental`] with the provided [`Patch`] applied.
    ///
    /// Fields missing in the [`Patch`] keep their current values.
    #[must_use]
    pub fn patched(&self, patch: &Patch) -> Self {
        let Patch {
            start_date,
            end_date,
            distance,
            deductible_reduction,
        } = *patch;

        Self {
            id: self.id,
            car_id: self.car_id,
            start_date: start_date.unwrap_or(self.start_date),
            end_date: end_date.unwrap_or(self.end_date),
            distance: distance.unwrap_or(self.distance),
            deductible_reduction: deductible_reduction
                .unwrap_or(self.deductible_reduction),
        }
    }
}

/// ID of a [`Rental`].
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

/// Distance driven during a [`Rental`], in kilometers.
pub type Distance = u32;

/// Number of days a [`Rental`] lasts.
pub type Days = u32;

/// [`DateOf`] when a [`Rental`] starts.
pub type StartDate = DateOf<(Rental, unit::Start)>;

/// [`DateOf`] when a [`Rental`] ends.
pub type EndDate = DateOf<(Rental, unit::End)>;
