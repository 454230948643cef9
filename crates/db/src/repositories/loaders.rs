//! Shared loaders, generic over the connection so they run inside callers'
//! transactions.

use std::collections::HashMap;

use chrono::{DateTime, NaiveTime, Utc};
use pavilio_core::billing::{AdditionalCharge, Discount, Pavilion, PavilionBilling};
use pavilio_core::calendar::Period;
use pavilio_core::ledger::PavilionMonthlyLedger;
use pavilio_core::payments::{AdditionalChargePayment, Payment};
use pavilio_shared::types::PavilionId;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::convert;
use crate::entities::{
    additional_charge_payments, additional_charges, pavilion_discounts, pavilion_monthly_ledgers,
    payments,
};

/// First instant of `period`, UTC.
pub(crate) fn period_start_instant(period: Period) -> DateTime<Utc> {
    period.start().and_time(NaiveTime::MIN).and_utc()
}

/// Attaches discounts and additional charges to pavilions, preserving order.
pub(crate) async fn load_billings<C>(
    conn: &C,
    pavilions: Vec<Pavilion>,
) -> Result<Vec<PavilionBilling>, DbErr>
where
    C: ConnectionTrait,
{
    let ids: Vec<i64> = pavilions.iter().map(|p| p.id.into_inner()).collect();

    let mut discounts: HashMap<PavilionId, Vec<Discount>> = HashMap::new();
    for model in pavilion_discounts::Entity::find()
        .filter(pavilion_discounts::Column::PavilionId.is_in(ids.clone()))
        .order_by_asc(pavilion_discounts::Column::Id)
        .all(conn)
        .await?
    {
        let discount = Discount::from(model);
        discounts.entry(discount.pavilion_id).or_default().push(discount);
    }

    let mut charges: HashMap<PavilionId, Vec<AdditionalCharge>> = HashMap::new();
    for model in additional_charges::Entity::find()
        .filter(additional_charges::Column::PavilionId.is_in(ids))
        .order_by_asc(additional_charges::Column::Id)
        .all(conn)
        .await?
    {
        let charge = AdditionalCharge::from(model);
        charges.entry(charge.pavilion_id).or_default().push(charge);
    }

    Ok(pavilions
        .into_iter()
        .map(|pavilion| PavilionBilling {
            discounts: discounts.remove(&pavilion.id).unwrap_or_default(),
            additional_charges: charges.remove(&pavilion.id).unwrap_or_default(),
            pavilion,
        })
        .collect())
}

/// Payment rows booked against `from..=to` for the given pavilions.
pub(crate) async fn load_payments<C>(
    conn: &C,
    pavilion_ids: &[PavilionId],
    from: Period,
    to: Period,
) -> Result<Vec<Payment>, DbErr>
where
    C: ConnectionTrait,
{
    let ids: Vec<i64> = pavilion_ids.iter().map(|id| id.into_inner()).collect();
    let rows = payments::Entity::find()
        .filter(payments::Column::PavilionId.is_in(ids))
        .filter(payments::Column::Period.gte(from.start()))
        .filter(payments::Column::Period.lte(to.start()))
        .order_by_asc(payments::Column::Id)
        .all(conn)
        .await?;

    Ok(rows.into_iter().map(Payment::from).collect())
}

/// Payments against `charges` made during `from..=to`.
pub(crate) async fn load_charge_payments<C>(
    conn: &C,
    charges: &[&AdditionalCharge],
    from: Period,
    to: Period,
) -> Result<Vec<AdditionalChargePayment>, DbErr>
where
    C: ConnectionTrait,
{
    let owners: HashMap<i64, PavilionId> = charges
        .iter()
        .map(|charge| (charge.id.into_inner(), charge.pavilion_id))
        .collect();

    let rows = additional_charge_payments::Entity::find()
        .filter(additional_charge_payments::Column::AdditionalChargeId.is_in(owners.keys().copied()))
        .filter(additional_charge_payments::Column::PaidAt.gte(period_start_instant(from)))
        .filter(additional_charge_payments::Column::PaidAt.lt(period_start_instant(to.next())))
        .order_by_asc(additional_charge_payments::Column::Id)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|model| {
            let pavilion_id = *owners.get(&model.additional_charge_id)?;
            Some(convert::charge_payment(model, pavilion_id))
        })
        .collect())
}

/// The stored ledger row for a pavilion and period.
pub(crate) async fn find_ledger<C>(
    conn: &C,
    pavilion_id: PavilionId,
    period: Period,
) -> Result<Option<PavilionMonthlyLedger>, DbErr>
where
    C: ConnectionTrait,
{
    let row = pavilion_monthly_ledgers::Entity::find()
        .filter(pavilion_monthly_ledgers::Column::PavilionId.eq(pavilion_id.into_inner()))
        .filter(pavilion_monthly_ledgers::Column::Period.eq(period.start()))
        .one(conn)
        .await?;

    Ok(row.map(PavilionMonthlyLedger::from))
}
