//! `SeaORM` Entity for additional_charges table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "additional_charges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub pavilion_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
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
    #[sea_orm(has_many = "super::additional_charge_payments::Entity")]
    AdditionalChargePayments,
}

impl Related<super::pavilions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pavilions.def()
    }
}

impl Related<super::additional_charge_payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdditionalChargePayments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
