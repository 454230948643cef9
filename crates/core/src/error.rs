//! Engine error types.
//!
//! The taxonomy has three kinds: a referenced record is missing, the input is
//! malformed and was rejected before any computation ran, or an internal
//! reconciliation check failed (a logic defect, never clamped).

use chrono::NaiveDate;
use pavilio_shared::AppError;
use pavilio_shared::types::{DiscountId, PavilionId, StoreId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Coarse classification of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced entity does not exist.
    NotFound,
    /// Input rejected before computation.
    InvalidInput,
    /// Internal invariant broken.
    ConsistencyViolation,
}

/// Errors that can occur in the billing and ledger engine.
#[derive(Debug, Error)]
pub enum EngineError {
    // ========== Not Found ==========
    /// Pavilion not found.
    #[error("Pavilion not found: {0}")]
    PavilionNotFound(PavilionId),

    /// Store not found.
    #[error("Store not found: {0}")]
    StoreNotFound(StoreId),

    // ========== Invalid Input ==========
    /// A money or area field is negative.
    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// Discount window ends before it starts.
    #[error("Discount {discount_id} ends on {ends_at}, before it starts on {starts_at}")]
    DiscountEndsBeforeStart {
        /// The discount.
        discount_id: DiscountId,
        /// Start of the window.
        starts_at: NaiveDate,
        /// End of the window.
        ends_at: NaiveDate,
    },

    /// Pavilion is PREPAID but has no prepaid-until date.
    #[error("Pavilion {0} is prepaid but has no prepaid-until date")]
    PrepaidWithoutDate(PavilionId),

    /// Pavilion carries a prepaid-until date while not PREPAID.
    #[error("Pavilion {0} has a prepaid-until date but is not prepaid")]
    PrepaidDateOnNonPrepaid(PavilionId),

    /// Period string or components are malformed.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ========== Consistency ==========
    /// Channel sums or totals failed to reconcile.
    #[error("Consistency violation: {0}")]
    ConsistencyViolation(String),
}

impl EngineError {
    /// Returns the coarse error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PavilionNotFound(_) | Self::StoreNotFound(_) => ErrorKind::NotFound,
            Self::NegativeAmount { .. }
            | Self::DiscountEndsBeforeStart { .. }
            | Self::PrepaidWithoutDate(_)
            | Self::PrepaidDateOnNonPrepaid(_)
            | Self::InvalidPeriod(_) => ErrorKind::InvalidInput,
            Self::ConsistencyViolation(_) => ErrorKind::ConsistencyViolation,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PavilionNotFound(_) => "PAVILION_NOT_FOUND",
            Self::StoreNotFound(_) => "STORE_NOT_FOUND",
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::DiscountEndsBeforeStart { .. } => "DISCOUNT_ENDS_BEFORE_START",
            Self::PrepaidWithoutDate(_) => "PREPAID_WITHOUT_DATE",
            Self::PrepaidDateOnNonPrepaid(_) => "PREPAID_DATE_ON_NON_PREPAID",
            Self::InvalidPeriod(_) => "INVALID_PERIOD",
            Self::ConsistencyViolation(_) => "CONSISTENCY_VIOLATION",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::InvalidInput => 400,
            ErrorKind::ConsistencyViolation => 500,
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(err.to_string()),
            ErrorKind::InvalidInput => Self::Validation(err.to_string()),
            ErrorKind::ConsistencyViolation => Self::Internal(err.to_string()),
        }
    }
}
