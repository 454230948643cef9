//! Pavilion billing: what a pavilion is expected to pay for a month.
//!
//! - `discount` - active-discount resolution per calendar month
//! - `charges` - status-dependent expected rent, utilities and additional charges
//! - `money` - cent rounding shared by every computed amount
//! - `validation` - input checks run before any computation

pub mod charges;
pub mod discount;
pub mod money;
pub mod types;
pub mod validation;

#[cfg(test)]
mod charges_props;

pub use charges::{ChargeCalculator, ExpectedCharges};
pub use discount::DiscountResolver;
pub use money::round_money;
pub use types::{AdditionalCharge, Discount, Pavilion, PavilionBilling, PavilionStatus};
