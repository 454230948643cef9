//! Payment record types.
//!
//! A monthly payment row exists in two historical shapes. Older rows carry
//! one undifferentiated channel split; newer rows carry a split per income
//! entity. Rows written mid-migration may carry both.

use chrono::{DateTime, Utc};
use pavilio_shared::types::{AdditionalChargeId, AdditionalChargePaymentId, PavilionId, PaymentId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::Period;

/// Amounts collected per channel. Absent fields were never entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSplit {
    /// Paid by bank transfer.
    pub bank_transfer: Option<Decimal>,
    /// Paid into cashbox 1.
    pub cashbox1: Option<Decimal>,
    /// Paid into cashbox 2.
    pub cashbox2: Option<Decimal>,
}

impl ChannelSplit {
    /// Split with every channel set.
    #[must_use]
    pub const fn new(bank_transfer: Decimal, cashbox1: Decimal, cashbox2: Decimal) -> Self {
        Self {
            bank_transfer: Some(bank_transfer),
            cashbox1: Some(cashbox1),
            cashbox2: Some(cashbox2),
        }
    }

    /// Returns true if no channel was entered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bank_transfer.is_none() && self.cashbox1.is_none() && self.cashbox2.is_none()
    }

    /// Sum of entered channels.
    #[must_use]
    pub fn sum(&self) -> Decimal {
        self.bank_transfer.unwrap_or_default()
            + self.cashbox1.unwrap_or_default()
            + self.cashbox2.unwrap_or_default()
    }
}

/// Per-income-entity channel splits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityChannelSplits {
    /// Rent channels.
    pub rent: ChannelSplit,
    /// Utilities channels.
    pub utilities: ChannelSplit,
    /// Advertising channels.
    pub advertising: ChannelSplit,
}

impl EntityChannelSplits {
    /// Returns true if no entity channel was entered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rent.is_empty() && self.utilities.is_empty() && self.advertising.is_empty()
    }
}

/// Which channel shape a payment row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentShape {
    /// No channel information.
    Undivided,
    /// Only the legacy generic split.
    Legacy,
    /// Only per-entity splits.
    PerEntity,
    /// Both shapes on one row.
    Mixed,
}

/// Monthly payment row for a pavilion. At most one per (pavilion, period).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// Paying pavilion.
    pub pavilion_id: PavilionId,
    /// Month the payment is booked against.
    pub period: Period,
    /// Declared rent paid.
    pub rent_paid: Option<Decimal>,
    /// Declared utilities paid.
    pub utilities_paid: Option<Decimal>,
    /// Declared advertising paid.
    pub advertising_paid: Option<Decimal>,
    /// Legacy generic split, attributed to rent.
    pub legacy_channels: ChannelSplit,
    /// Per-entity splits.
    pub entity_channels: EntityChannelSplits,
}

impl Payment {
    /// Classifies the row's channel shape.
    #[must_use]
    pub const fn shape(&self) -> PaymentShape {
        match (self.legacy_channels.is_empty(), self.entity_channels.is_empty()) {
            (true, true) => PaymentShape::Undivided,
            (false, true) => PaymentShape::Legacy,
            (true, false) => PaymentShape::PerEntity,
            (false, false) => PaymentShape::Mixed,
        }
    }

    /// Declared rent + utilities, the amount the debt ledger counts as paid.
    #[must_use]
    pub fn recurring_paid(&self) -> Decimal {
        self.rent_paid.unwrap_or_default() + self.utilities_paid.unwrap_or_default()
    }
}

/// Payment against an additional charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalChargePayment {
    /// Payment ID.
    pub id: AdditionalChargePaymentId,
    /// Charge being paid.
    pub charge_id: AdditionalChargeId,
    /// Pavilion the charge belongs to.
    pub pavilion_id: PavilionId,
    /// Amount paid.
    pub amount: Decimal,
    /// Channel split of the amount.
    pub channels: ChannelSplit,
    /// When the payment was made; decides its month.
    pub paid_at: DateTime<Utc>,
}
