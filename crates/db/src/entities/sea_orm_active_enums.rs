//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "pavilion_status")]
pub enum PavilionStatus {
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    #[sea_orm(string_value = "RENTED")]
    Rented,
    #[sea_orm(string_value = "PREPAID")]
    Prepaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "paid_status")]
pub enum PaidStatus {
    #[sea_orm(string_value = "UNPAID")]
    Unpaid,
    #[sea_orm(string_value = "PAID")]
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "expense_category")]
pub enum ExpenseCategory {
    #[sea_orm(string_value = "SALARIES")]
    Salaries,
    #[sea_orm(string_value = "PAYROLL_TAX")]
    PayrollTax,
    #[sea_orm(string_value = "PROFIT_TAX")]
    ProfitTax,
    #[sea_orm(string_value = "DIVIDENDS")]
    Dividends,
    #[sea_orm(string_value = "BANK_SERVICES")]
    BankServices,
    #[sea_orm(string_value = "VAT")]
    Vat,
    #[sea_orm(string_value = "LAND_RENT")]
    LandRent,
    #[sea_orm(string_value = "OTHER")]
    Other,
    #[sea_orm(string_value = "UTILITIES")]
    Utilities,
    #[sea_orm(string_value = "HOUSEHOLD")]
    Household,
}
