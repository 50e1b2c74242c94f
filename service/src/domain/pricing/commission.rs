//! [`Commission`] definitions.

use common::{Money, Percent};
use serde::Serialize;

use crate::domain::rental::Days;

/// Share of a rental price taken as a [`Commission`].
pub const SHARE: Percent = Percent::whole(30);

/// Share of a [`Commission`] going to the insurance.
pub const INSURANCE_SHARE: Percent = Percent::whole(50);

/// Fee going to the roadside assistance for each rental day.
pub const ASSISTANCE_FEE_PER_DAY: Money = Money::new(100);

/// Part of a rental price taken by the platform and split between the
/// insurance, the roadside assistance and the platform itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Commission {
    /// Whole amount of this [`Commission`].
    #[serde(skip)]
    pub total: Money,

    /// Fee going to the insurance.
    pub insurance_fee: Money,

    /// Fee going to the roadside assistance.
    pub assistance_fee: Money,

    /// Fee left to the platform.
    ///
    /// Negative whenever the assistance fee alone exceeds the rest of this
    /// [`Commission`].
    pub drivy_fee: Money,
}

impl Commission {
    /// Splits the [`Commission`] taken from the provided `total_price` of a
    /// rental lasting the provided number of `days`.
    #[must_use]
    pub fn split(total_price: Money, days: Days) -> Self {
        let total = Money::floor(SHARE.of(total_price));
        let insurance_fee = Money::floor(INSURANCE_SHARE.of(total));
        let assistance_fee = ASSISTANCE_FEE_PER_DAY * days;

        Self {
            total,
            insurance_fee,
            assistance_fee,
            drivy_fee: total - insurance_fee - assistance_fee,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::Commission;

    fn split(total_price: i64, days: u32) -> [i64; 4] {
        let c = Commission::split(Money::new(total_price), days);
        [
            c.total.into(),
            c.insurance_fee.into(),
            c.assistance_fee.into(),
            c.drivy_fee.into(),
        ]
    }

    #[test]
    fn splits_round_price() {
        assert_eq!(split(1000, 1), [300, 150, 100, 50]);
        assert_eq!(split(8400, 4), [2520, 1260, 400, 860]);
    }

    #[test]
    fn floors_each_share_independently() {
        // 30% of 1005 is 301.5, half of 301 is 150.5.
        assert_eq!(split(1005, 1), [301, 150, 100, 51]);
        // 30% of 14300 is 4290, half of it is 2145.
        assert_eq!(split(14300, 5), [4290, 2145, 500, 1645]);
        // 30% of 333 is 99.9.
        assert_eq!(split(333, 0), [99, 49, 0, 50]);
    }

    #[test]
    fn fees_add_up_to_commission() {
        for (price, days) in [(0, 1), (999, 3), (8400, 4), (123_457, 30)] {
            let c = Commission::split(Money::new(price), days);
            assert_eq!(
                c.insurance_fee + c.assistance_fee + c.drivy_fee,
                c.total,
            );
        }
    }

    #[test]
    fn platform_fee_may_go_negative() {
        // 20 days of a 100 per day car: price 1290, commission 387.
        assert_eq!(split(1290, 20), [387, 193, 2000, -1806]);
    }

    #[test]
    fn serializes_fees_only() {
        let json = serde_json::to_value(Commission::split(Money::new(8400), 4))
            .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "insurance_fee": 1260,
                "assistance_fee": 400,
                "drivy_fee": 860,
            }),
        );
    }
}
