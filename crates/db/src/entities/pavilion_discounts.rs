//! `SeaORM` Entity for pavilion_discounts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "pavilion_discounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub pavilion_id: i64,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
    pub starts_at: Date,
    pub ends_at: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pavilions::Entity",
        from = "Column::PavilionId",
        to = "super::pavilions::Column::Id"
    )]
    Pavilions,
}

impl Related<super::pavilions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pavilions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
