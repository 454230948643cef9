//! Monthly rollover repository.
//!
//! The guard check, every per-pavilion step and the stamp run in one
//! transaction with the store row locked, so concurrent callers in the same
//! month serialize and all but the first see the stamp and skip.

use pavilio_core::billing::Pavilion;
use pavilio_core::calendar::Clock;
use pavilio_core::rollover::{RolloverOutcome, RolloverReport, RolloverService};
use pavilio_core::store::Store;
use pavilio_core::EngineError;
use pavilio_shared::types::StoreId;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::{debug, info};

use super::ledger::upsert_ledger_in;
use super::pavilion::expire_prepaid_in;
use crate::entities::{pavilions, stores};
use crate::error::RepositoryError;

/// Monthly rollover repository.
#[derive(Debug, Clone)]
pub struct RolloverRepository {
    db: DatabaseConnection,
}

impl RolloverRepository {
    /// Creates a new rollover repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs the monthly rollover for a store if it has not run this month.
    ///
    /// 1. Returns lapsed PREPAID pavilions to RENTED
    /// 2. Ledgers the previous month for every pavilion from pre-reset inputs
    /// 3. Resets monthly utilities and advertising inputs
    /// 4. Resets the store's expense paid flags
    /// 5. Stamps the current month on the store
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StoreNotFound` for an unknown store, or any
    /// validation or database error. Nothing is written on error.
    pub async fn run_monthly_rollover(
        &self,
        store_id: StoreId,
        clock: &dyn Clock,
    ) -> Result<RolloverOutcome, RepositoryError> {
        let current = clock.current_period();
        let txn = self.db.begin().await?;

        let store_model = stores::Entity::find_by_id(store_id.into_inner())
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(EngineError::StoreNotFound(store_id))?;
        let mut store = Store::from(store_model.clone());

        let pavilion_models = pavilions::Entity::find()
            .filter(pavilions::Column::StoreId.eq(store_id.into_inner()))
            .order_by_asc(pavilions::Column::Id)
            .lock_exclusive()
            .all(&txn)
            .await?;
        let pavilions: Vec<Pavilion> = pavilion_models.iter().cloned().map(Pavilion::from).collect();

        let Some(plan) = RolloverService::plan(&store, &pavilions, current) else {
            txn.commit().await?;
            debug!(store_id = %store_id, period = %current, "rollover already done");
            return Ok(RolloverOutcome::Skipped {
                store_id,
                period: current,
            });
        };

        // 1. Prepaid expiry
        let prepaid_expired = expire_prepaid_in(&txn, pavilion_models.clone(), plan.period).await?;

        // 2. Previous month's ledger, before any reset
        let mut ledgers_written = 0;
        for pavilion in &pavilions {
            if upsert_ledger_in(&txn, pavilion.id, plan.previous_period)
                .await?
                .is_some()
            {
                ledgers_written += 1;
            }
        }

        // 3. Monthly input reset
        for model in pavilion_models {
            let Some((_, reset)) = plan
                .input_resets
                .iter()
                .find(|(pavilion_id, _)| pavilion_id.into_inner() == model.id)
            else {
                continue;
            };
            let mut pavilion = Pavilion::from(model.clone());
            RolloverService::apply_input_reset(&mut pavilion, *reset);

            let mut active: pavilions::ActiveModel = model.into();
            active.utilities_amount = Set(pavilion.utilities_amount);
            active.advertising_amount = Set(pavilion.advertising_amount);
            active.update(&txn).await?;
        }

        // 4-5. Store flags and stamp
        RolloverService::close_store_month(&mut store, plan.period);
        let mut active: stores::ActiveModel = store_model.into();
        active.utilities_expense_status = Set(store.utilities_expense_status.into());
        active.household_expense_status = Set(store.household_expense_status.into());
        active.last_monthly_reset_period = Set(store.last_monthly_reset_period.map(|p| p.start()));
        active.update(&txn).await?;

        txn.commit().await?;

        let report = RolloverReport {
            store_id,
            period: plan.period,
            previous_period: plan.previous_period,
            prepaid_expired,
            ledgers_written,
            inputs_reset: plan.input_resets.len(),
        };
        info!(
            store_id = %store_id,
            period = %report.period,
            previous_period = %report.previous_period,
            prepaid_expired = report.prepaid_expired.len(),
            ledgers_written = report.ledgers_written,
            inputs_reset = report.inputs_reset,
            "monthly rollover completed"
        );
        Ok(RolloverOutcome::Completed(report))
    }
}
