//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod analytics;
pub mod ledger;
mod loaders;
pub mod pavilion;
pub mod rollover;
pub mod store;

pub use analytics::AnalyticsRepository;
pub use ledger::{LedgerRepository, StoreDebtSummary};
pub use pavilion::PavilionRepository;
pub use rollover::RolloverRepository;
pub use store::StoreRepository;
