//! `SeaORM` Entity for pavilion_monthly_ledgers table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "pavilion_monthly_ledgers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub pavilion_id: i64,
    pub period: Date,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub expected_rent: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub expected_utilities: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub expected_additional: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub expected_total: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub actual_total: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub opening_debt: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub month_delta: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub closing_debt: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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
