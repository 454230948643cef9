//! Money rounding.
//!
//! Every amount the engine produces is rounded to cents with the same
//! rule PostgreSQL applies when writing `NUMERIC(14,2)`, so a computed row
//! is exactly the row read back after persisting it.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for money amounts.
pub const MONEY_SCALE: u32 = 2;

/// Rounds to cents, half away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(105.0625), dec!(105.06))]
    #[case(dec!(0.005), dec!(0.01))]
    #[case(dec!(-0.005), dec!(-0.01))]
    #[case(dec!(2.345), dec!(2.35))]
    #[case(dec!(1000), dec!(1000))]
    fn test_round_money(#[case] amount: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_money(amount), expected);
    }
}
