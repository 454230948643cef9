//! Discount window resolution.

use rust_decimal::Decimal;

use super::money::round_money;
use super::types::Discount;
use crate::calendar::Period;

/// Resolves the discount applying to a pavilion for a calendar month.
pub struct DiscountResolver;

impl DiscountResolver {
    /// Total monthly discount: Σ `amount × area` over discounts active in
    /// the month containing `period`.
    ///
    /// Overlapping discounts stack. The total is rounded to cents.
    #[must_use]
    pub fn monthly_total(discounts: &[Discount], area: Decimal, period: Period) -> Decimal {
        round_money(
            discounts
                .iter()
                .filter(|discount| discount.is_active_in(period))
                .map(|discount| discount.amount * area)
                .sum(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pavilio_shared::types::{DiscountId, PavilionId};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn discount(id: i64, amount: Decimal, starts_at: NaiveDate, ends_at: Option<NaiveDate>) -> Discount {
        Discount {
            id: DiscountId::new(id),
            pavilion_id: PavilionId::new(1),
            amount,
            starts_at,
            ends_at,
            note: None,
        }
    }

    #[test]
    fn test_no_discounts() {
        let total = DiscountResolver::monthly_total(&[], dec!(10), Period::from_ym(2026, 1).unwrap());
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_mid_month_start_applies_in_full() {
        let discounts = [discount(1, dec!(5), date(2026, 1, 28), None)];
        let total =
            DiscountResolver::monthly_total(&discounts, dec!(10), Period::from_ym(2026, 1).unwrap());
        assert_eq!(total, dec!(50));
    }

    #[test]
    fn test_overlapping_discounts_sum() {
        let discounts = [
            discount(1, dec!(5), date(2026, 1, 1), None),
            discount(2, dec!(2.5), date(2026, 1, 10), Some(date(2026, 1, 20))),
        ];
        let total =
            DiscountResolver::monthly_total(&discounts, dec!(12), Period::from_ym(2026, 1).unwrap());
        assert_eq!(total, dec!(90));
    }

    #[test]
    fn test_expired_discount_excluded() {
        let discounts = [
            discount(1, dec!(5), date(2025, 10, 1), Some(date(2025, 11, 30))),
            discount(2, dec!(1), date(2025, 10, 1), None),
        ];
        let total =
            DiscountResolver::monthly_total(&discounts, dec!(10), Period::from_ym(2026, 1).unwrap());
        assert_eq!(total, dec!(10));
    }

    #[test]
    fn test_period_normalized_from_any_day() {
        let discounts = [discount(1, dec!(5), date(2026, 2, 1), Some(date(2026, 2, 20)))];
        let period = Period::containing(date(2026, 2, 27));
        assert_eq!(DiscountResolver::monthly_total(&discounts, dec!(4), period), dec!(20));
    }

    #[test]
    fn test_fractional_total_rounded_to_cents() {
        let discounts = [discount(1, dec!(1.25), date(2026, 1, 1), None)];
        let total = DiscountResolver::monthly_total(
            &discounts,
            dec!(10.25),
            Period::from_ym(2026, 1).unwrap(),
        );
        assert_eq!(total, dec!(12.81));
        assert!(total.scale() <= 2);
    }
}
