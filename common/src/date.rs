//! Calendar date utilities.

use std::{
    cmp::Ordering, fmt, marker::PhantomData, num::ParseIntError, str::FromStr,
};

use derive_more::{Debug, Display, Error, From};
use time::Month;

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date without any time or timezone.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] out of the provided calendar components.
    ///
    /// # Errors
    ///
    /// If the provided components don't form a valid date.
    pub fn from_calendar_date(
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, time::error::ComponentRange> {
        let month = Month::try_from(month)?;
        time::Date::from_calendar_date(year, month, day).map(|inner| Self {
            inner,
            _of: PhantomData,
        })
    }

    /// Parses a new [`Date`] out of the provided `YYYY-M-D` string, where
    /// month and day may be zero-padded or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid date.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        use ParseError as E;

        let mut parts = input.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(E::Format);
        };

        Self::from_calendar_date(year.parse()?, month.parse()?, day.parse()?)
            .map_err(E::ComponentRange)
    }

    /// Returns the number of whole days from this [`Date`] to the provided
    /// `end` one.
    ///
    /// Negative if `end` is before this [`Date`].
    #[must_use]
    pub fn days_until<End: ?Sized>(self, end: DateOf<End>) -> i64 {
        (end.inner - self.inner).whole_days()
    }

    /// Returns the year of this [`Date`].
    #[must_use]
    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Returns the month of this [`Date`] (`1..=12`).
    #[must_use]
    pub fn month(&self) -> u8 {
        self.inner.month().into()
    }

    /// Returns the day of the month of this [`Date`].
    #[must_use]
    pub fn day(&self) -> u8 {
        self.inner.day()
    }
}

/// Error of parsing [`Date`] from a string.
#[derive(Clone, Debug, Display, Error, From)]
pub enum ParseError {
    /// String is not in a `YYYY-M-D` format.
    #[display("expected `YYYY-M-D` format")]
    #[from(ignore)]
    Format,

    /// One of the components is not a number.
    #[display("invalid number: {_0}")]
    Number(ParseIntError),

    /// Parsed [`Date`] has an out of range component.
    #[display("out of range: {_0}")]
    ComponentRange(time::error::ComponentRange),
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day(),
        )
    }
}

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::DateOf;

    impl<Of: ?Sized> Serialize for DateOf<Of> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de, Of: ?Sized> Deserialize<'de> for DateOf<Of> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = String::deserialize(deserializer)?;
            Self::parse(&raw).map_err(|e| {
                D::Error::custom(format!("invalid date `{raw}`: {e}"))
            })
        }
    }
}
