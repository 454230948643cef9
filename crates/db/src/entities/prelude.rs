//! Entity re-exports.

pub use super::additional_charge_payments::Entity as AdditionalChargePayments;
pub use super::additional_charges::Entity as AdditionalCharges;
pub use super::household_expenses::Entity as HouseholdExpenses;
pub use super::pavilion_discounts::Entity as PavilionDiscounts;
pub use super::pavilion_expenses::Entity as PavilionExpenses;
pub use super::pavilion_monthly_ledgers::Entity as PavilionMonthlyLedgers;
pub use super::pavilions::Entity as Pavilions;
pub use super::payments::Entity as Payments;
pub use super::staff::Entity as Staff;
pub use super::stores::Entity as Stores;
