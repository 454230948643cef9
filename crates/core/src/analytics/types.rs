//! Analytics input and report types.

use pavilio_shared::types::StoreId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::billing::PavilionBilling;
use crate::calendar::Period;
use crate::payments::{AdditionalChargePayment, ChannelTotals, IncomeChannelTotals, Payment};
use crate::store::{ExpenseCategory, HouseholdExpense, PavilionExpense, Staff, Store};

/// Everything loaded for one store. Rows may span several months; the
/// report picks what belongs to the requested period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// The store.
    pub store: Store,
    /// Pavilions with their discounts and charges.
    pub pavilions: Vec<PavilionBilling>,
    /// Staff.
    pub staff: Vec<Staff>,
    /// Monthly payment rows.
    pub payments: Vec<Payment>,
    /// Additional-charge payments.
    pub charge_payments: Vec<AdditionalChargePayment>,
    /// Expense rows.
    pub expenses: Vec<PavilionExpense>,
    /// Household purchases.
    pub household_expenses: Vec<HouseholdExpense>,
}

/// Income per entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// Rent.
    pub rent: Decimal,
    /// Utilities.
    pub utilities: Decimal,
    /// Advertising.
    pub advertising: Decimal,
    /// Additional charges.
    pub additional: Decimal,
    /// Sum of the above.
    pub total: Decimal,
}

impl IncomeBreakdown {
    pub(crate) fn with_total(mut self) -> Self {
        self.total = self.rent + self.utilities + self.advertising + self.additional;
        self
    }
}

/// Income side of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSummary {
    /// What occupied pavilions are expected to pay.
    pub forecast: IncomeBreakdown,
    /// What was paid.
    pub actual: IncomeBreakdown,
    /// Paid per channel, all entities.
    pub channels: ChannelTotals,
    /// Paid per entity and channel.
    pub by_entity: IncomeChannelTotals,
}

/// One expense category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    /// Category.
    pub category: ExpenseCategory,
    /// Recorded or scheduled amount.
    pub forecast: Decimal,
    /// Settled amount.
    pub actual: Decimal,
}

/// Expense totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseTotals {
    /// Σ forecast.
    pub forecast: Decimal,
    /// Σ actual.
    pub actual: Decimal,
}

/// Expense side of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// One line per category, in [`ExpenseCategory::ALL`] order.
    pub lines: Vec<ExpenseLine>,
    /// Totals.
    pub totals: ExpenseTotals,
}

impl ExpenseSummary {
    /// Line for `category`.
    #[must_use]
    pub fn line(&self, category: ExpenseCategory) -> Option<&ExpenseLine> {
        self.lines.iter().find(|line| line.category == category)
    }
}

/// Pavilion counts and area by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeAreaOccupancy {
    /// All pavilions.
    pub total_count: usize,
    /// RENTED pavilions.
    pub rented_count: usize,
    /// PREPAID pavilions.
    pub prepaid_count: usize,
    /// AVAILABLE pavilions.
    pub available_count: usize,
    /// Total area.
    pub total_area: Decimal,
    /// Area under RENTED or PREPAID.
    pub rented_area: Decimal,
    /// Area under AVAILABLE.
    pub available_area: Decimal,
    /// rented_area / total_area × 100, two decimals. Zero for an empty store.
    pub occupancy_percent: Decimal,
}

/// Store analytics for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreAnalyticsReport {
    /// Store.
    pub store_id: StoreId,
    /// Month.
    pub period: Period,
    /// Income.
    pub income: IncomeSummary,
    /// Expenses.
    pub expenses: ExpenseSummary,
    /// Occupancy at report time.
    pub occupancy: TradeAreaOccupancy,
    /// income.actual.total - expenses.totals.actual.
    pub saldo: Decimal,
    /// Saldo of the previous month.
    pub previous_month_balance: Decimal,
}
