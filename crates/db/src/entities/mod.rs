//! `SeaORM` entity definitions.

pub mod prelude;

pub mod additional_charge_payments;
pub mod additional_charges;
pub mod household_expenses;
pub mod pavilion_discounts;
pub mod pavilion_expenses;
pub mod pavilion_monthly_ledgers;
pub mod pavilions;
pub mod payments;
pub mod sea_orm_active_enums;
pub mod staff;
pub mod stores;
