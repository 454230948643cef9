//! Expected monthly charges for a pavilion.
//!
//! This is the only place the status-dependent billing rules live. The ledger
//! recompute, the rollover snapshot, the analytics forecast and the pavilion
//! monthly summary all call [`ChargeCalculator`].

use std::ops::AddAssign;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::discount::DiscountResolver;
use super::money::round_money;
use super::types::{AdditionalCharge, Discount, Pavilion, PavilionStatus};
use crate::calendar::Period;

/// Expected amounts for one pavilion and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedCharges {
    /// Area × price, before discounts.
    pub base_rent: Decimal,
    /// Discount total active for the month.
    pub discount_total: Decimal,
    /// Expected rent.
    pub rent: Decimal,
    /// Expected utilities.
    pub utilities: Decimal,
    /// Expected advertising. Not part of `total`.
    pub advertising: Decimal,
    /// Expected additional charges.
    pub additional: Decimal,
    /// rent + utilities + additional.
    pub total: Decimal,
}

impl AddAssign for ExpectedCharges {
    fn add_assign(&mut self, other: Self) {
        self.base_rent += other.base_rent;
        self.discount_total += other.discount_total;
        self.rent += other.rent;
        self.utilities += other.utilities;
        self.advertising += other.advertising;
        self.additional += other.additional;
        self.total += other.total;
    }
}

/// Calculator for status-dependent expected charges.
pub struct ChargeCalculator;

impl ChargeCalculator {
    /// Computes expected charges given an already-resolved discount total.
    ///
    /// Every amount is rounded to cents before it is combined.
    ///
    /// - PREPAID: full base rent, discounts ignored, nothing else accrues.
    /// - RENTED: base rent minus discounts floored at zero, plus utilities,
    ///   advertising and additional charges created in the month.
    /// - AVAILABLE: nothing.
    #[must_use]
    pub fn expected(
        pavilion: &Pavilion,
        additional_charges: &[AdditionalCharge],
        discount_total: Decimal,
        period: Period,
    ) -> ExpectedCharges {
        let base_rent = pavilion.base_rent();
        let discount_total = round_money(discount_total);

        let (rent, utilities, advertising, additional) = match pavilion.status {
            PavilionStatus::Prepaid => (base_rent, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            PavilionStatus::Rented => (
                (base_rent - discount_total).max(Decimal::ZERO),
                round_money(pavilion.utilities_amount.unwrap_or_default()),
                round_money(pavilion.advertising_amount.unwrap_or_default()),
                Self::additional_total(additional_charges, period),
            ),
            PavilionStatus::Available => {
                (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
            }
        };

        ExpectedCharges {
            base_rent,
            discount_total,
            rent,
            utilities,
            advertising,
            additional,
            total: rent + utilities + additional,
        }
    }

    /// Resolves the month's discount total and computes expected charges.
    #[must_use]
    pub fn for_period(
        pavilion: &Pavilion,
        discounts: &[Discount],
        additional_charges: &[AdditionalCharge],
        period: Period,
    ) -> ExpectedCharges {
        let discount_total = DiscountResolver::monthly_total(discounts, pavilion.area, period);
        Self::expected(pavilion, additional_charges, discount_total, period)
    }

    /// Sum of additional charges billed in `period`.
    #[must_use]
    pub fn additional_total(additional_charges: &[AdditionalCharge], period: Period) -> Decimal {
        additional_charges
            .iter()
            .filter(|charge| charge.is_billed_in(period))
            .map(|charge| round_money(charge.amount))
            .sum()
    }
}
