//! Ledger domain types.

use pavilio_shared::types::PavilionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::billing::{AdditionalCharge, Discount, ExpectedCharges, Pavilion, PavilionStatus};
use crate::calendar::Period;
use crate::payments::{IncomeChannelTotals, Payment};

/// Expected vs actual totals and carried debt for one pavilion and month.
///
/// Unique per (pavilion, period). `closing_debt = opening_debt + month_delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PavilionMonthlyLedger {
    /// Ledgered pavilion.
    pub pavilion_id: PavilionId,
    /// Month.
    pub period: Period,
    /// Expected rent after discounts.
    pub expected_rent: Decimal,
    /// Expected utilities.
    pub expected_utilities: Decimal,
    /// Expected additional charges.
    pub expected_additional: Decimal,
    /// rent + utilities + additional.
    pub expected_total: Decimal,
    /// Declared rent + utilities paid.
    pub actual_total: Decimal,
    /// Previous month's closing debt, or zero.
    pub opening_debt: Decimal,
    /// expected_total - actual_total.
    pub month_delta: Decimal,
    /// opening_debt + month_delta.
    pub closing_debt: Decimal,
}

/// Everything needed to ledger one pavilion for one month.
#[derive(Debug, Clone, Copy)]
pub struct LedgerInput<'a> {
    /// The pavilion, with its current billing inputs.
    pub pavilion: &'a Pavilion,
    /// The pavilion's discounts.
    pub discounts: &'a [Discount],
    /// The pavilion's payment rows. Rows for other periods are ignored.
    pub payments: &'a [Payment],
    /// The pavilion's additional charges.
    pub additional_charges: &'a [AdditionalCharge],
    /// Closing debt of the previous month.
    pub opening_debt: Decimal,
    /// Month to ledger.
    pub period: Period,
}

/// Amounts paid per income entity in a month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidBreakdown {
    /// Declared rent paid.
    pub rent: Decimal,
    /// Declared utilities paid.
    pub utilities: Decimal,
    /// Declared advertising paid.
    pub advertising: Decimal,
    /// Paid against additional charges.
    pub additional: Decimal,
    /// Sum of the above.
    pub total: Decimal,
}

/// One pavilion's month at a glance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PavilionMonthlySummary {
    /// Pavilion.
    pub pavilion_id: PavilionId,
    /// Month.
    pub period: Period,
    /// Status the month was billed under.
    pub status: PavilionStatus,
    /// Expected charges.
    pub expected: ExpectedCharges,
    /// Paid per entity.
    pub paid: PaidBreakdown,
    /// Paid per entity and channel.
    pub channels: IncomeChannelTotals,
    /// The month's ledger row.
    pub ledger: PavilionMonthlyLedger,
}
