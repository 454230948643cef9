//! Store repository.

use pavilio_core::store::Store;
use pavilio_shared::types::StoreId;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::entities::stores;
use crate::error::RepositoryError;

/// Store repository.
#[derive(Debug, Clone)]
pub struct StoreRepository {
    db: DatabaseConnection,
}

impl StoreRepository {
    /// Creates a new store repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a store by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn find(&self, store_id: StoreId) -> Result<Option<Store>, RepositoryError> {
        let model = stores::Entity::find_by_id(store_id.into_inner())
            .one(&self.db)
            .await?;
        Ok(model.map(Store::from))
    }

    /// Lists all stores, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list(&self) -> Result<Vec<Store>, RepositoryError> {
        let models = stores::Entity::find()
            .order_by_asc(stores::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Store::from).collect())
    }
}
