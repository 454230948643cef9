//! Per-pavilion monthly debt ledger.
//!
//! This module implements the pure half of the ledger:
//! - Ledger row computation from billing inputs and payments
//! - Opening debt carry-forward and continuity checks
//! - The per-pavilion monthly summary

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::LedgerService;
pub use types::{LedgerInput, PaidBreakdown, PavilionMonthlyLedger, PavilionMonthlySummary};
