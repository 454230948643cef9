//! Monthly rollover: the once-per-store-per-month transition that ledgers
//! the previous month and resets monthly billing inputs.
//!
//! The decision and the per-pavilion transitions are pure. The persistence
//! layer runs them inside one transaction with the store row locked.

pub mod service;
pub mod types;

pub use service::RolloverService;
pub use types::{
    MonthlyInputReset, PrepaidExpiry, RolloverDecision, RolloverOutcome, RolloverPlan,
    RolloverReport,
};
