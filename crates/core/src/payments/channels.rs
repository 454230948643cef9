//! Channel aggregation.
//!
//! Folds both payment shapes into one canonical per-entity channel total:
//! - per-entity splits go to their own entity;
//! - the legacy generic split is added to rent, on top of any per-entity
//!   rent split on the same row;
//! - additional-charge payments go to the additional entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{AdditionalChargePayment, ChannelSplit, Payment, PaymentShape};
use crate::billing::validation;
use crate::calendar::Period;
use crate::error::EngineError;

/// Collected amounts per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelTotals {
    /// Bank transfer.
    pub bank_transfer: Decimal,
    /// Cashbox 1.
    pub cashbox1: Decimal,
    /// Cashbox 2.
    pub cashbox2: Decimal,
    /// bank_transfer + cashbox1 + cashbox2.
    pub total: Decimal,
}

impl ChannelTotals {
    /// Adds an entered split.
    pub fn add_split(&mut self, split: &ChannelSplit) {
        let bank_transfer = split.bank_transfer.unwrap_or_default();
        let cashbox1 = split.cashbox1.unwrap_or_default();
        let cashbox2 = split.cashbox2.unwrap_or_default();

        self.bank_transfer += bank_transfer;
        self.cashbox1 += cashbox1;
        self.cashbox2 += cashbox2;
        self.total += bank_transfer + cashbox1 + cashbox2;
    }

    /// Adds another total.
    pub fn add(&mut self, other: &Self) {
        self.bank_transfer += other.bank_transfer;
        self.cashbox1 += other.cashbox1;
        self.cashbox2 += other.cashbox2;
        self.total += other.total;
    }

    /// Returns true if `total` equals the sum of the channels.
    #[must_use]
    pub fn is_reconciled(&self) -> bool {
        self.total == self.bank_transfer + self.cashbox1 + self.cashbox2
    }
}

/// Channel totals per income entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeChannelTotals {
    /// Rent, including all legacy generic splits.
    pub rent: ChannelTotals,
    /// Utilities.
    pub facilities: ChannelTotals,
    /// Advertising.
    pub advertising: ChannelTotals,
    /// Additional-charge payments.
    pub additional: ChannelTotals,
    /// Sum across entities.
    pub total: ChannelTotals,
}

impl IncomeChannelTotals {
    /// Checks every entity and the grand total reconcile.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ConsistencyViolation` naming the first bucket
    /// that does not add up.
    pub fn verify(&self) -> Result<(), EngineError> {
        let entities = [
            ("rent", &self.rent),
            ("facilities", &self.facilities),
            ("advertising", &self.advertising),
            ("additional", &self.additional),
            ("total", &self.total),
        ];
        if let Some((name, totals)) = entities.iter().find(|(_, t)| !t.is_reconciled()) {
            return Err(EngineError::ConsistencyViolation(format!(
                "{name} channels sum to {} but total is {}",
                totals.bank_transfer + totals.cashbox1 + totals.cashbox2,
                totals.total
            )));
        }

        let mut expected = ChannelTotals::default();
        for (_, totals) in &entities[..4] {
            expected.add(totals);
        }
        if expected != self.total {
            return Err(EngineError::ConsistencyViolation(format!(
                "entity totals sum to {} but grand total is {}",
                expected.total, self.total.total
            )));
        }

        Ok(())
    }
}

/// Normalizes payment rows into channel totals.
pub struct ChannelAggregator;

impl ChannelAggregator {
    /// Folds payments and additional-charge payments into per-entity totals.
    ///
    /// Callers pass rows already scoped to the period of interest.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NegativeAmount` for a negative channel amount
    /// (before anything is summed) and `EngineError::ConsistencyViolation`
    /// if a charge payment's channels disagree with its amount or the folded
    /// totals fail to reconcile.
    pub fn aggregate(
        payments: &[Payment],
        charge_payments: &[AdditionalChargePayment],
    ) -> Result<IncomeChannelTotals, EngineError> {
        for payment in payments {
            validation::validate_payment(payment)?;
        }
        for charge_payment in charge_payments {
            validation::validate_charge_payment(charge_payment)?;
        }

        let mut totals = IncomeChannelTotals::default();

        for payment in payments {
            let shape = payment.shape();
            if matches!(shape, PaymentShape::PerEntity | PaymentShape::Mixed) {
                totals.rent.add_split(&payment.entity_channels.rent);
                totals.facilities.add_split(&payment.entity_channels.utilities);
                totals.advertising.add_split(&payment.entity_channels.advertising);
            }
            // Legacy rows only tracked one split, conventionally all rent.
            if matches!(shape, PaymentShape::Legacy | PaymentShape::Mixed) {
                totals.rent.add_split(&payment.legacy_channels);
            }
        }

        for charge_payment in charge_payments {
            Self::reconcile_charge_payment(charge_payment)?;
            totals.additional.add_split(&charge_payment.channels);
        }

        for entity in [
            totals.rent,
            totals.facilities,
            totals.advertising,
            totals.additional,
        ] {
            totals.total.add(&entity);
        }

        totals.verify()?;
        Ok(totals)
    }

    /// Checks an entered channel split adds up to the declared amount.
    ///
    /// A charge payment with no channel entered is taken as undivided.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ConsistencyViolation` if the channels and the
    /// declared amount disagree.
    pub fn reconcile_charge_payment(payment: &AdditionalChargePayment) -> Result<(), EngineError> {
        if payment.channels.is_empty() || payment.channels.sum() == payment.amount {
            return Ok(());
        }
        Err(EngineError::ConsistencyViolation(format!(
            "charge payment {} declares {} but its channels sum to {}",
            payment.id,
            payment.amount,
            payment.channels.sum()
        )))
    }

    /// Like [`Self::aggregate`], keeping only payments booked against
    /// `period` and charge payments made during it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::aggregate`].
    pub fn aggregate_for_period(
        period: Period,
        payments: &[Payment],
        charge_payments: &[AdditionalChargePayment],
    ) -> Result<IncomeChannelTotals, EngineError> {
        let payments: Vec<Payment> = payments
            .iter()
            .filter(|payment| payment.period == period)
            .cloned()
            .collect();
        let charge_payments: Vec<AdditionalChargePayment> = charge_payments
            .iter()
            .filter(|charge_payment| period.contains_instant(charge_payment.paid_at))
            .cloned()
            .collect();

        Self::aggregate(&payments, &charge_payments)
    }
}
