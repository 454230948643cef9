//! Store analytics: read-only forecast vs actual composition for a month.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::AnalyticsService;
pub use types::{
    ExpenseLine, ExpenseSummary, ExpenseTotals, IncomeBreakdown, IncomeSummary,
    StoreAnalyticsReport, StoreSnapshot, TradeAreaOccupancy,
};
