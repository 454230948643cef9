//! Store analytics repository.

use pavilio_core::analytics::{AnalyticsService, StoreAnalyticsReport, StoreSnapshot};
use pavilio_core::billing::Pavilion;
use pavilio_core::calendar::{Clock, Period};
use pavilio_core::store::{HouseholdExpense, PavilionExpense, Staff, Store};
use pavilio_core::EngineError;
use pavilio_shared::config::RolloverConfig;
use pavilio_shared::types::StoreId;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use super::loaders::{self, period_start_instant};
use super::pavilion::PavilionRepository;
use super::rollover::RolloverRepository;
use crate::entities::{household_expenses, pavilion_expenses, pavilions, staff, stores};
use crate::error::RepositoryError;

/// Store analytics repository.
#[derive(Debug, Clone)]
pub struct AnalyticsRepository {
    db: DatabaseConnection,
    rollover_on_read: bool,
}

impl AnalyticsRepository {
    /// Creates a new analytics repository that rolls stores over on read.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            rollover_on_read: true,
        }
    }

    /// Creates a new analytics repository honoring the rollover settings.
    #[must_use]
    pub const fn with_config(db: DatabaseConnection, config: &RolloverConfig) -> Self {
        Self {
            db,
            rollover_on_read: config.on_read,
        }
    }

    /// Builds the current month's analytics for a store.
    ///
    /// Lapsed prepaid windows are synced first, and the monthly rollover
    /// runs if enabled and still due.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StoreNotFound` for an unknown store, or any
    /// validation or database error.
    pub async fn store_analytics(
        &self,
        store_id: StoreId,
        clock: &dyn Clock,
    ) -> Result<StoreAnalyticsReport, RepositoryError> {
        let period = clock.current_period();

        PavilionRepository::new(self.db.clone())
            .sync_expired_prepaid(store_id, clock)
            .await?;
        if self.rollover_on_read {
            RolloverRepository::new(self.db.clone())
                .run_monthly_rollover(store_id, clock)
                .await?;
        }

        let snapshot = self.load_snapshot(store_id, period.previous(), period).await?;
        let report = AnalyticsService::store_report(&snapshot, period)?;

        debug!(store_id = %store_id, period = %period, saldo = %report.saldo, "store analytics built");
        Ok(report)
    }

    /// Loads a store with every record dated within `from..=to`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StoreNotFound` for an unknown store, or a
    /// database error.
    pub async fn load_snapshot(
        &self,
        store_id: StoreId,
        from: Period,
        to: Period,
    ) -> Result<StoreSnapshot, RepositoryError> {
        let id = store_id.into_inner();
        let store = stores::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Store::from)
            .ok_or(EngineError::StoreNotFound(store_id))?;

        let pavilions: Vec<Pavilion> = pavilions::Entity::find()
            .filter(pavilions::Column::StoreId.eq(id))
            .order_by_asc(pavilions::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Pavilion::from)
            .collect();
        let pavilion_ids: Vec<_> = pavilions.iter().map(|p| p.id).collect();
        let billings = loaders::load_billings(&self.db, pavilions).await?;

        let payments = loaders::load_payments(&self.db, &pavilion_ids, from, to).await?;
        let charges: Vec<_> = billings
            .iter()
            .flat_map(|billing| &billing.additional_charges)
            .collect();
        let charge_payments = loaders::load_charge_payments(&self.db, &charges, from, to).await?;

        let window_start = period_start_instant(from);
        let window_end = period_start_instant(to.next());

        let staff = staff::Entity::find()
            .filter(staff::Column::StoreId.eq(id))
            .order_by_asc(staff::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Staff::from)
            .collect();

        let expenses = pavilion_expenses::Entity::find()
            .filter(pavilion_expenses::Column::StoreId.eq(id))
            .filter(pavilion_expenses::Column::CreatedAt.gte(window_start))
            .filter(pavilion_expenses::Column::CreatedAt.lt(window_end))
            .order_by_asc(pavilion_expenses::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(PavilionExpense::from)
            .collect();

        let household_expenses = household_expenses::Entity::find()
            .filter(household_expenses::Column::StoreId.eq(id))
            .filter(household_expenses::Column::CreatedAt.gte(window_start))
            .filter(household_expenses::Column::CreatedAt.lt(window_end))
            .order_by_asc(household_expenses::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(HouseholdExpense::from)
            .collect();

        Ok(StoreSnapshot {
            store,
            pavilions: billings,
            staff,
            payments,
            charge_payments,
            expenses,
            household_expenses,
        })
    }
}
