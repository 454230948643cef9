//! Input validation.
//!
//! The engine trusts the persistence layer for referential integrity but
//! still rejects malformed values before computing anything, so a failure
//! never leaves a partial result behind.

use rust_decimal::Decimal;

use super::types::{AdditionalCharge, Discount, Pavilion, PavilionStatus};
use crate::error::EngineError;
use crate::payments::types::{AdditionalChargePayment, ChannelSplit, Payment};

/// Rejects a negative value.
///
/// # Errors
///
/// Returns `EngineError::NegativeAmount` naming `field`.
pub fn non_negative(field: &'static str, value: Decimal) -> Result<(), EngineError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::NegativeAmount { field, value });
    }
    Ok(())
}

fn non_negative_opt(field: &'static str, value: Option<Decimal>) -> Result<(), EngineError> {
    value.map_or(Ok(()), |v| non_negative(field, v))
}

fn validate_split(prefix: &'static [&'static str; 3], split: &ChannelSplit) -> Result<(), EngineError> {
    non_negative_opt(prefix[0], split.bank_transfer)?;
    non_negative_opt(prefix[1], split.cashbox1)?;
    non_negative_opt(prefix[2], split.cashbox2)
}

/// Validates a pavilion's billing inputs and the prepaid invariant.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_pavilion(pavilion: &Pavilion) -> Result<(), EngineError> {
    non_negative("area", pavilion.area)?;
    non_negative("price_per_sqm", pavilion.price_per_sqm)?;
    non_negative_opt("utilities_amount", pavilion.utilities_amount)?;
    non_negative_opt("advertising_amount", pavilion.advertising_amount)?;

    match (pavilion.status, pavilion.prepaid_until) {
        (PavilionStatus::Prepaid, None) => Err(EngineError::PrepaidWithoutDate(pavilion.id)),
        (PavilionStatus::Rented | PavilionStatus::Available, Some(_)) => {
            Err(EngineError::PrepaidDateOnNonPrepaid(pavilion.id))
        }
        _ => Ok(()),
    }
}

/// Validates a discount's amount and window order.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_discount(discount: &Discount) -> Result<(), EngineError> {
    non_negative("discount.amount", discount.amount)?;

    if let Some(ends_at) = discount.ends_at {
        if ends_at < discount.starts_at {
            return Err(EngineError::DiscountEndsBeforeStart {
                discount_id: discount.id,
                starts_at: discount.starts_at,
                ends_at,
            });
        }
    }
    Ok(())
}

/// Validates an additional charge.
///
/// # Errors
///
/// Returns `EngineError::NegativeAmount` for a negative amount.
pub fn validate_charge(charge: &AdditionalCharge) -> Result<(), EngineError> {
    non_negative("additional_charge.amount", charge.amount)
}

/// Validates every amount on a payment row.
///
/// # Errors
///
/// Returns `EngineError::NegativeAmount` for the first negative field.
pub fn validate_payment(payment: &Payment) -> Result<(), EngineError> {
    non_negative_opt("rent_paid", payment.rent_paid)?;
    non_negative_opt("utilities_paid", payment.utilities_paid)?;
    non_negative_opt("advertising_paid", payment.advertising_paid)?;
    validate_split(
        &["bank_transfer_paid", "cashbox1_paid", "cashbox2_paid"],
        &payment.legacy_channels,
    )?;
    validate_split(
        &[
            "rent_bank_transfer_paid",
            "rent_cashbox1_paid",
            "rent_cashbox2_paid",
        ],
        &payment.entity_channels.rent,
    )?;
    validate_split(
        &[
            "utilities_bank_transfer_paid",
            "utilities_cashbox1_paid",
            "utilities_cashbox2_paid",
        ],
        &payment.entity_channels.utilities,
    )?;
    validate_split(
        &[
            "advertising_bank_transfer_paid",
            "advertising_cashbox1_paid",
            "advertising_cashbox2_paid",
        ],
        &payment.entity_channels.advertising,
    )
}

/// Validates an additional-charge payment.
///
/// # Errors
///
/// Returns `EngineError::NegativeAmount` for the first negative field.
pub fn validate_charge_payment(payment: &AdditionalChargePayment) -> Result<(), EngineError> {
    non_negative("additional_charge_payment.amount", payment.amount)?;
    validate_split(
        &["bank_transfer_paid", "cashbox1_paid", "cashbox2_paid"],
        &payment.channels,
    )
}

/// Validates a pavilion and everything its monthly bill depends on.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_billing_inputs(
    pavilion: &Pavilion,
    discounts: &[Discount],
    additional_charges: &[AdditionalCharge],
    payments: &[Payment],
) -> Result<(), EngineError> {
    validate_pavilion(pavilion)?;
    discounts.iter().try_for_each(validate_discount)?;
    additional_charges.iter().try_for_each(validate_charge)?;
    payments.iter().try_for_each(validate_payment)
}
