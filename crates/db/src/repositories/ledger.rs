//! Monthly ledger repository.
//!
//! Every write recomputes the full row from the current billing inputs and
//! upserts it keyed by (pavilion, period), with the pavilion row locked for
//! the duration of the transaction.

use pavilio_core::billing::Pavilion;
use pavilio_core::calendar::Period;
use pavilio_core::ledger::{
    LedgerInput, LedgerService, PavilionMonthlyLedger, PavilionMonthlySummary,
};
use pavilio_shared::types::{PavilionId, StoreId};
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::loaders;
use crate::entities::{pavilion_monthly_ledgers, pavilions};
use crate::error::RepositoryError;

/// Debt totals across a store's pavilions for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreDebtSummary {
    /// Store.
    pub store_id: StoreId,
    /// Month.
    pub period: Period,
    /// Pavilions with a ledger row for the month.
    pub pavilions: usize,
    /// Σ opening debt.
    pub opening_debt: Decimal,
    /// Σ month delta.
    pub month_delta: Decimal,
    /// Σ closing debt.
    pub closing_debt: Decimal,
}

/// Monthly ledger repository.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recomputes and stores the ledger row for a pavilion and period.
    ///
    /// Returns `None` if the pavilion does not exist. Calling this again
    /// with unchanged data writes the identical row.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored inputs fail validation or the
    /// database operation fails. Nothing is written in either case.
    pub async fn upsert_monthly_ledger(
        &self,
        pavilion_id: PavilionId,
        period: Period,
    ) -> Result<Option<PavilionMonthlyLedger>, RepositoryError> {
        let txn = self.db.begin().await?;
        let row = upsert_ledger_in(&txn, pavilion_id, period).await?;
        txn.commit().await?;
        Ok(row)
    }

    /// Recomputes `from..=to` in order so each month opens with the
    /// freshly written closing debt of the month before.
    ///
    /// Use after a back-dated edit. Returns an empty list if the pavilion
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any month fails; no month is written then.
    pub async fn refresh_range(
        &self,
        pavilion_id: PavilionId,
        from: Period,
        to: Period,
    ) -> Result<Vec<PavilionMonthlyLedger>, RepositoryError> {
        let txn = self.db.begin().await?;
        let mut rows = Vec::new();

        for period in from.through(to) {
            match upsert_ledger_in(&txn, pavilion_id, period).await? {
                Some(row) => rows.push(row),
                None => break,
            }
        }

        LedgerService::verify_continuity(&rows)?;
        txn.commit().await?;

        info!(
            pavilion_id = %pavilion_id,
            from = %from,
            to = %to,
            months = rows.len(),
            "ledger range refreshed"
        );
        Ok(rows)
    }

    /// The stored row for a pavilion and period.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn find(
        &self,
        pavilion_id: PavilionId,
        period: Period,
    ) -> Result<Option<PavilionMonthlyLedger>, RepositoryError> {
        Ok(loaders::find_ledger(&self.db, pavilion_id, period).await?)
    }

    /// All stored rows for a pavilion, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn history(
        &self,
        pavilion_id: PavilionId,
    ) -> Result<Vec<PavilionMonthlyLedger>, RepositoryError> {
        let rows = pavilion_monthly_ledgers::Entity::find()
            .filter(pavilion_monthly_ledgers::Column::PavilionId.eq(pavilion_id.into_inner()))
            .order_by_asc(pavilion_monthly_ledgers::Column::Period)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(PavilionMonthlyLedger::from).collect())
    }

    /// Debt totals across a store's pavilions for a period.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn store_debt_summary(
        &self,
        store_id: StoreId,
        period: Period,
    ) -> Result<StoreDebtSummary, RepositoryError> {
        let rows = pavilion_monthly_ledgers::Entity::find()
            .inner_join(pavilions::Entity)
            .filter(pavilions::Column::StoreId.eq(store_id.into_inner()))
            .filter(pavilion_monthly_ledgers::Column::Period.eq(period.start()))
            .all(&self.db)
            .await?;

        Ok(rows.iter().fold(
            StoreDebtSummary {
                store_id,
                period,
                pavilions: 0,
                opening_debt: Decimal::ZERO,
                month_delta: Decimal::ZERO,
                closing_debt: Decimal::ZERO,
            },
            |summary, row| StoreDebtSummary {
                pavilions: summary.pavilions + 1,
                opening_debt: summary.opening_debt + row.opening_debt,
                month_delta: summary.month_delta + row.month_delta,
                closing_debt: summary.closing_debt + row.closing_debt,
                ..summary
            },
        ))
    }

    /// Expected charges, payments and debt for one pavilion and month.
    ///
    /// Read-only: the debt figures are computed from the stored previous
    /// month, not written.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored inputs fail validation or the
    /// database operation fails.
    pub async fn monthly_summary(
        &self,
        pavilion_id: PavilionId,
        period: Period,
    ) -> Result<Option<PavilionMonthlySummary>, RepositoryError> {
        let Some(model) = pavilions::Entity::find_by_id(pavilion_id.into_inner())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut billings = loaders::load_billings(&self.db, vec![Pavilion::from(model)]).await?;
        let Some(billing) = billings.pop() else {
            return Ok(None);
        };
        let payments = loaders::load_payments(&self.db, &[pavilion_id], period, period).await?;
        let charges: Vec<_> = billing.additional_charges.iter().collect();
        let charge_payments =
            loaders::load_charge_payments(&self.db, &charges, period, period).await?;
        let previous = loaders::find_ledger(&self.db, pavilion_id, period.previous()).await?;

        let summary = LedgerService::monthly_summary(
            &LedgerInput {
                pavilion: &billing.pavilion,
                discounts: &billing.discounts,
                payments: &payments,
                additional_charges: &billing.additional_charges,
                opening_debt: LedgerService::opening_debt(previous.as_ref()),
                period,
            },
            &charge_payments,
        )?;

        Ok(Some(summary))
    }
}

/// Locks the pavilion, recomputes its row for `period` and upserts it.
///
/// Runs on the caller's connection so the rollover can ledger inside its
/// own transaction.
pub(crate) async fn upsert_ledger_in<C>(
    conn: &C,
    pavilion_id: PavilionId,
    period: Period,
) -> Result<Option<PavilionMonthlyLedger>, RepositoryError>
where
    C: ConnectionTrait,
{
    let Some(model) = pavilions::Entity::find_by_id(pavilion_id.into_inner())
        .lock_exclusive()
        .one(conn)
        .await?
    else {
        warn!(pavilion_id = %pavilion_id, period = %period, "pavilion not found, nothing to ledger");
        return Ok(None);
    };

    let mut billings = loaders::load_billings(conn, vec![Pavilion::from(model)]).await?;
    let Some(billing) = billings.pop() else {
        return Ok(None);
    };
    let payments = loaders::load_payments(conn, &[pavilion_id], period, period).await?;
    let previous = loaders::find_ledger(conn, pavilion_id, period.previous()).await?;

    let row = LedgerService::compute(&LedgerInput {
        pavilion: &billing.pavilion,
        discounts: &billing.discounts,
        payments: &payments,
        additional_charges: &billing.additional_charges,
        opening_debt: LedgerService::opening_debt(previous.as_ref()),
        period,
    })?;

    write_ledger_row(conn, &row).await?;

    debug!(
        pavilion_id = %pavilion_id,
        period = %period,
        expected_total = %row.expected_total,
        actual_total = %row.actual_total,
        closing_debt = %row.closing_debt,
        "ledger row upserted"
    );
    Ok(Some(row))
}

async fn write_ledger_row<C>(conn: &C, row: &PavilionMonthlyLedger) -> Result<(), RepositoryError>
where
    C: ConnectionTrait,
{
    use pavilion_monthly_ledgers::Column;

    // Timestamps come from the column defaults and the updated_at trigger.
    let model = pavilion_monthly_ledgers::ActiveModel {
        pavilion_id: Set(row.pavilion_id.into_inner()),
        period: Set(row.period.start()),
        expected_rent: Set(row.expected_rent),
        expected_utilities: Set(row.expected_utilities),
        expected_additional: Set(row.expected_additional),
        expected_total: Set(row.expected_total),
        actual_total: Set(row.actual_total),
        opening_debt: Set(row.opening_debt),
        month_delta: Set(row.month_delta),
        closing_debt: Set(row.closing_debt),
        ..Default::default()
    };

    pavilion_monthly_ledgers::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([Column::PavilionId, Column::Period])
                .update_columns([
                    Column::ExpectedRent,
                    Column::ExpectedUtilities,
                    Column::ExpectedAdditional,
                    Column::ExpectedTotal,
                    Column::ActualTotal,
                    Column::OpeningDebt,
                    Column::MonthDelta,
                    Column::ClosingDebt,
                ])
                .to_owned(),
        )
        .exec(conn)
        .await?;

    Ok(())
}
