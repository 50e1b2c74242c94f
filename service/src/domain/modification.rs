//! [`Modification`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use crate::domain::rental::{self, Distance, EndDate, StartDate};
#[cfg(doc)]
use crate::domain::Rental;

/// After-the-fact change of a [`Rental`]'s terms.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct Modification {
    /// ID of this [`Modification`].
    pub id: Id,

    /// ID of the modified [`Rental`].
    pub rental_id: rental::Id,

    /// Changed terms of the [`Rental`].
    #[serde(flatten)]
    pub patch: Patch,
}

/// ID of a [`Modification`].
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

/// Partial update of a [`Rental`].
///
/// [`None`] means "keep the current value". The ID and the rented car of a
/// [`Rental`] can't be changed.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Patch {
    /// New first day of the [`Rental`].
    pub start_date: Option<StartDate>,

    /// New last day of the [`Rental`].
    pub end_date: Option<EndDate>,

    /// New driven distance of the [`Rental`].
    pub distance: Option<Distance>,

    /// New deductible reduction option of the [`Rental`].
    pub deductible_reduction: Option<bool>,
}

#[cfg(test)]
mod spec {
    use crate::domain::rental;

    use super::{Id, Modification, Patch};

    #[test]
    fn deserializes_present_fields_only() {
        let modification: Modification = serde_json::from_str(
            r#"{
                "id": 1,
                "rental_id": 1,
                "end_date": "2015-12-10",
                "distance": 150
            }"#,
        )
        .unwrap();

        assert_eq!(
            modification,
            Modification {
                id: Id::from(1),
                rental_id: rental::Id::from(1),
                patch: Patch {
                    end_date: Some("2015-12-10".parse().unwrap()),
                    distance: Some(150),
                    ..Patch::default()
                },
            },
        );
    }

    #[test]
    fn deserializes_empty_patch() {
        let modification: Modification =
            serde_json::from_str(r#"{ "id": 7, "rental_id": 3 }"#).unwrap();

        assert_eq!(modification.patch, Patch::default());
    }

    #[test]
    fn rejects_malformed_dates() {
        let result = serde_json::from_str::<Modification>(
            r#"{ "id": 1, "rental_id": 1, "start_date": "2015-12-40" }"#,
        );

        assert!(result.is_err());
    }
}
