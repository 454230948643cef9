//! Recorded payments and their normalization into channel totals.

pub mod channels;
pub mod types;

pub use channels::{ChannelAggregator, ChannelTotals, IncomeChannelTotals};
pub use types::{AdditionalChargePayment, ChannelSplit, EntityChannelSplits, Payment, PaymentShape};
