//! Store-level records: the store itself, its expenses and its staff.

pub mod types;

pub use types::{ExpenseCategory, HouseholdExpense, PaidStatus, PavilionExpense, Staff, Store};
