//! Property-based tests for the expected-charge calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::charges::ChargeCalculator;
use super::money::round_money;
use super::types::{Pavilion, PavilionStatus};
use crate::calendar::Period;
use pavilio_shared::types::{PavilionId, StoreId};

fn pavilion(status: PavilionStatus, area: Decimal, price: Decimal, utilities: Decimal) -> Pavilion {
    Pavilion {
        id: PavilionId::new(1),
        store_id: StoreId::new(1),
        name: "P".to_string(),
        area,
        price_per_sqm: price,
        status,
        tenant_name: None,
        utilities_amount: Some(utilities),
        advertising_amount: None,
        prepaid_until: None,
    }
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    /// Rent for a rented pavilion is never negative and never exceeds base rent.
    #[test]
    fn test_rented_rent_bounded(
        area in amount_strategy(),
        price in amount_strategy(),
        discount in amount_strategy(),
    ) {
        let p = pavilion(PavilionStatus::Rented, area, price, Decimal::ZERO);
        let period = Period::from_ym(2026, 1).unwrap();
        let charges = ChargeCalculator::expected(&p, &[], discount, period);

        prop_assert!(charges.rent >= Decimal::ZERO);
        prop_assert!(charges.rent <= charges.base_rent);
        prop_assert_eq!(charges.rent, (round_money(area * price) - discount).max(Decimal::ZERO));
    }

    /// Discounts never affect a prepaid pavilion.
    #[test]
    fn test_prepaid_ignores_discount(
        area in amount_strategy(),
        price in amount_strategy(),
        discount in amount_strategy(),
        utilities in amount_strategy(),
    ) {
        let p = pavilion(PavilionStatus::Prepaid, area, price, utilities);
        let period = Period::from_ym(2026, 1).unwrap();
        let charges = ChargeCalculator::expected(&p, &[], discount, period);

        prop_assert_eq!(charges.rent, round_money(area * price));
        prop_assert_eq!(charges.total, round_money(area * price));
    }

    /// Total is always rent + utilities + additional.
    #[test]
    fn test_total_is_sum_of_components(
        area in amount_strategy(),
        price in amount_strategy(),
        discount in amount_strategy(),
        utilities in amount_strategy(),
        status in prop_oneof![
            Just(PavilionStatus::Available),
            Just(PavilionStatus::Rented),
            Just(PavilionStatus::Prepaid),
        ],
    ) {
        let p = pavilion(status, area, price, utilities);
        let period = Period::from_ym(2026, 1).unwrap();
        let charges = ChargeCalculator::expected(&p, &[], discount, period);

        prop_assert_eq!(charges.total, charges.rent + charges.utilities + charges.additional);
        prop_assert!(charges.total.scale() <= 2);
    }
}
