//! Property-based tests for LedgerService.
//!
//! - Recomputing a month with unchanged inputs reproduces the same row
//! - Consecutive months chain closing debt into opening debt

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::LedgerService;
use super::types::LedgerInput;
use crate::billing::{Pavilion, PavilionStatus};
use crate::calendar::Period;
use crate::payments::{ChannelSplit, EntityChannelSplits, Payment};
use pavilio_shared::types::{PavilionId, PaymentId, StoreId};

/// Strategy to generate non-negative amounts (0.00 to 100,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn status_strategy() -> impl Strategy<Value = PavilionStatus> {
    prop_oneof![Just(PavilionStatus::Available), Just(PavilionStatus::Rented)]
}

fn pavilion(status: PavilionStatus, area: Decimal, price: Decimal, utilities: Decimal) -> Pavilion {
    Pavilion {
        id: PavilionId::new(7),
        store_id: StoreId::new(1),
        name: "C-7".to_string(),
        area,
        price_per_sqm: price,
        status,
        tenant_name: None,
        utilities_amount: Some(utilities),
        advertising_amount: None,
        prepaid_until: None,
    }
}

fn payment(index: usize, period: Period, rent: Decimal) -> Payment {
    Payment {
        id: PaymentId::new(i64::try_from(index).unwrap_or_default()),
        pavilion_id: PavilionId::new(7),
        period,
        rent_paid: Some(rent),
        utilities_paid: None,
        advertising_paid: None,
        legacy_channels: ChannelSplit::default(),
        entity_channels: EntityChannelSplits::default(),
    }
}

proptest! {
    #[test]
    fn test_recompute_is_idempotent(
        status in status_strategy(),
        area in amount(),
        price in amount(),
        utilities in amount(),
        paid in amount(),
        opening in amount(),
    ) {
        let p = pavilion(status, area, price, utilities);
        let period = Period::from_ym(2026, 4).unwrap();
        let payments = [payment(0, period, paid)];
        let input = LedgerInput {
            pavilion: &p,
            discounts: &[],
            payments: &payments,
            additional_charges: &[],
            opening_debt: opening,
            period,
        };

        let first = LedgerService::compute(&input).unwrap();
        let second = LedgerService::compute(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_debt_chains_across_months(
        area in amount(),
        price in amount(),
        paid in proptest::collection::vec(amount(), 1..12),
    ) {
        let p = pavilion(PavilionStatus::Rented, area, price, Decimal::ZERO);
        let first = Period::from_ym(2025, 6).unwrap();
        let periods = first.through(Period::from_ym(2026, 5).unwrap());
        let payments: Vec<Payment> = paid
            .iter()
            .zip(&periods)
            .enumerate()
            .map(|(i, (rent, period))| payment(i, *period, *rent))
            .collect();

        let rows = LedgerService::compute_chain(
            &LedgerInput {
                pavilion: &p,
                discounts: &[],
                payments: &payments,
                additional_charges: &[],
                opening_debt: Decimal::ZERO,
                period: first,
            },
            Period::from_ym(2026, 5).unwrap(),
        )
        .unwrap();

        prop_assert_eq!(rows.len(), 12);
        for pair in rows.windows(2) {
            prop_assert_eq!(pair[1].opening_debt, pair[0].closing_debt);
        }
        prop_assert!(LedgerService::verify_continuity(&rows).is_ok());

        let expected: Decimal = rows.iter().map(|row| row.expected_total).sum();
        let actual: Decimal = rows.iter().map(|row| row.actual_total).sum();
        prop_assert_eq!(rows[11].closing_debt, expected - actual);
        prop_assert!(rows.iter().all(|row| row.closing_debt.scale() <= 2));
    }
}
