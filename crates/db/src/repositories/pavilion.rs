//! Pavilion repository.

use pavilio_core::billing::{Pavilion, PavilionBilling};
use pavilio_core::calendar::{Clock, Period};
use pavilio_core::rollover::RolloverService;
use pavilio_shared::types::{PavilionId, StoreId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::info;

use super::loaders;
use crate::entities::{pavilions, sea_orm_active_enums::PavilionStatus};
use crate::error::RepositoryError;

/// Pavilion repository.
#[derive(Debug, Clone)]
pub struct PavilionRepository {
    db: DatabaseConnection,
}

impl PavilionRepository {
    /// Creates a new pavilion repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a pavilion by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn find(&self, pavilion_id: PavilionId) -> Result<Option<Pavilion>, RepositoryError> {
        let model = pavilions::Entity::find_by_id(pavilion_id.into_inner())
            .one(&self.db)
            .await?;
        Ok(model.map(Pavilion::from))
    }

    /// Lists a store's pavilions with their discounts and charges.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_billings(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<PavilionBilling>, RepositoryError> {
        let pavilions = pavilions::Entity::find()
            .filter(pavilions::Column::StoreId.eq(store_id.into_inner()))
            .order_by_asc(pavilions::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Pavilion::from)
            .collect();

        Ok(loaders::load_billings(&self.db, pavilions).await?)
    }

    /// Returns lapsed PREPAID pavilions of a store to RENTED.
    ///
    /// This is the first rollover step on its own, safe to run before
    /// every read.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn sync_expired_prepaid(
        &self,
        store_id: StoreId,
        clock: &dyn Clock,
    ) -> Result<Vec<PavilionId>, RepositoryError> {
        let period = clock.current_period();
        let txn = self.db.begin().await?;

        let candidates = pavilions::Entity::find()
            .filter(pavilions::Column::StoreId.eq(store_id.into_inner()))
            .filter(pavilions::Column::Status.eq(PavilionStatus::Prepaid))
            .filter(pavilions::Column::PrepaidUntil.lt(period.start()))
            .order_by_asc(pavilions::Column::Id)
            .lock_exclusive()
            .all(&txn)
            .await?;

        let expired = expire_prepaid_in(&txn, candidates, period).await?;
        txn.commit().await?;

        if !expired.is_empty() {
            info!(store_id = %store_id, count = expired.len(), "expired prepaid pavilions returned to rented");
        }
        Ok(expired)
    }
}

/// Applies the prepaid expiry to every lapsed pavilion among `models`.
pub(crate) async fn expire_prepaid_in<C>(
    conn: &C,
    models: Vec<pavilions::Model>,
    period: Period,
) -> Result<Vec<PavilionId>, DbErr>
where
    C: ConnectionTrait,
{
    let mut expired = Vec::new();

    for model in models {
        let mut pavilion = Pavilion::from(model.clone());
        if !RolloverService::is_prepaid_expired(&pavilion, period) {
            continue;
        }
        RolloverService::apply_expiry(&mut pavilion);

        let mut active: pavilions::ActiveModel = model.into();
        active.status = Set(pavilion.status.into());
        active.prepaid_until = Set(pavilion.prepaid_until);
        active.update(conn).await?;

        expired.push(pavilion.id);
    }

    Ok(expired)
}
