//! Core billing and ledger engine for Pavilio.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `billing` - Discount resolution and expected monthly charges
//! - `payments` - Payment shapes and channel aggregation
//! - `ledger` - Per-pavilion monthly debt ledger
//! - `rollover` - Monthly rollover decisions and resets
//! - `analytics` - Store-level forecast vs actual reports
//! - `calendar` - Month periods and the injected clock
//! - `store` - Store, expense and staff records

pub mod analytics;
pub mod billing;
pub mod calendar;
pub mod error;
pub mod ledger;
pub mod payments;
pub mod rollover;
pub mod store;

pub use error::{EngineError, ErrorKind};
