//! Store domain types.

use chrono::{DateTime, Utc};
use pavilio_shared::types::{ExpenseId, PavilionId, StaffId, StoreId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::Period;

/// Whether a monthly obligation has been settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaidStatus {
    /// Not yet settled.
    #[default]
    Unpaid,
    /// Settled.
    Paid,
}

impl PaidStatus {
    /// Returns true if settled.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

/// A store (trade center) that owns pavilions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Store ID.
    pub id: StoreId,
    /// Display name.
    pub name: String,
    /// Whether this month's utilities expenses have been settled.
    pub utilities_expense_status: PaidStatus,
    /// Whether this month's household expenses have been settled.
    pub household_expense_status: PaidStatus,
    /// Last period the monthly rollover ran for.
    pub last_monthly_reset_period: Option<Period>,
}

/// Expense category. `Utilities` and `Household` are gated by store-level
/// paid flags; `Salaries` is derived from staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    /// Staff salaries.
    Salaries,
    /// Payroll taxes.
    PayrollTax,
    /// Profit tax.
    ProfitTax,
    /// Dividends.
    Dividends,
    /// Bank service fees.
    BankServices,
    /// VAT.
    Vat,
    /// Land rent.
    LandRent,
    /// Anything else.
    Other,
    /// Utilities bought by the store.
    Utilities,
    /// Household supplies.
    Household,
}

impl ExpenseCategory {
    /// Every category, in report order.
    pub const ALL: [Self; 10] = [
        Self::Salaries,
        Self::PayrollTax,
        Self::ProfitTax,
        Self::Dividends,
        Self::BankServices,
        Self::Vat,
        Self::LandRent,
        Self::Other,
        Self::Utilities,
        Self::Household,
    ];

    /// Returns the canonical uppercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salaries => "SALARIES",
            Self::PayrollTax => "PAYROLL_TAX",
            Self::ProfitTax => "PROFIT_TAX",
            Self::Dividends => "DIVIDENDS",
            Self::BankServices => "BANK_SERVICES",
            Self::Vat => "VAT",
            Self::LandRent => "LAND_RENT",
            Self::Other => "OTHER",
            Self::Utilities => "UTILITIES",
            Self::Household => "HOUSEHOLD",
        }
    }
}

/// A store expense row, optionally tied to a pavilion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PavilionExpense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Owning store.
    pub store_id: StoreId,
    /// Related pavilion, if any.
    pub pavilion_id: Option<PavilionId>,
    /// Category.
    pub category: ExpenseCategory,
    /// Amount.
    pub amount: Decimal,
    /// Row-level paid status.
    pub status: PaidStatus,
    /// Creation instant; decides the expense month.
    pub created_at: DateTime<Utc>,
}

/// A household supply purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdExpense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Owning store.
    pub store_id: StoreId,
    /// What was bought.
    pub name: String,
    /// Amount.
    pub amount: Decimal,
    /// Creation instant; decides the expense month.
    pub created_at: DateTime<Utc>,
}

/// A store employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Staff ID.
    pub id: StaffId,
    /// Employing store.
    pub store_id: StoreId,
    /// Full name.
    pub full_name: String,
    /// Position title.
    pub position: String,
    /// Monthly salary.
    pub salary: Decimal,
    /// Whether this month's salary has been paid.
    pub salary_status: PaidStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_match_serde() {
        for category in ExpenseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_paid_status_defaults_to_unpaid() {
        assert_eq!(PaidStatus::default(), PaidStatus::Unpaid);
        assert!(PaidStatus::Paid.is_paid());
    }
}
