//! Rollover domain types.

use chrono::NaiveDate;
use pavilio_shared::types::{PavilionId, StoreId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::Period;

/// Whether a store's rollover still has to run this month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RolloverDecision {
    /// Run for `period`, ledgering `previous`.
    Due {
        /// Month being entered.
        period: Period,
        /// Month being closed.
        previous: Period,
    },
    /// Already ran for `period`.
    AlreadyDone {
        /// Current month.
        period: Period,
    },
}

/// A PREPAID pavilion whose window has lapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaidExpiry {
    /// The pavilion.
    pub pavilion_id: PavilionId,
    /// Last prepaid day.
    pub prepaid_until: NaiveDate,
}

/// New values for a pavilion's monthly inputs.
///
/// `None` means "not entered yet"; `Some(0)` means "nothing this month".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyInputReset {
    /// New utilities amount.
    pub utilities_amount: Option<Decimal>,
    /// New advertising amount.
    pub advertising_amount: Option<Decimal>,
}

/// Everything a due rollover will change, computed before writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloverPlan {
    /// Store.
    pub store_id: StoreId,
    /// Month being entered.
    pub period: Period,
    /// Month being ledgered.
    pub previous_period: Period,
    /// PREPAID pavilions that return to RENTED.
    pub prepaid_expired: Vec<PrepaidExpiry>,
    /// Monthly input resets, applied after the previous month is ledgered.
    pub input_resets: Vec<(PavilionId, MonthlyInputReset)>,
}

/// What a completed rollover did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloverReport {
    /// Store.
    pub store_id: StoreId,
    /// Month entered.
    pub period: Period,
    /// Month ledgered.
    pub previous_period: Period,
    /// PREPAID pavilions returned to RENTED.
    pub prepaid_expired: Vec<PavilionId>,
    /// Ledger rows written for the previous month.
    pub ledgers_written: usize,
    /// Pavilions whose monthly inputs were reset.
    pub inputs_reset: usize,
}

/// Result of a rollover attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RolloverOutcome {
    /// The rollover ran.
    Completed(RolloverReport),
    /// The store was already rolled over for `period`.
    Skipped {
        /// Store.
        store_id: StoreId,
        /// Current month.
        period: Period,
    },
}

impl RolloverOutcome {
    /// Returns true if the rollover ran.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
