//! `SeaORM` Entity for pavilions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PavilionStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "pavilions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub store_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub area: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price_per_sqm: Decimal,
    pub status: PavilionStatus,
    pub tenant_name: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub utilities_amount: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub advertising_amount: Option<Decimal>,
    pub prepaid_until: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stores::Entity",
        from = "Column::StoreId",
        to = "super::stores::Column::Id"
    )]
    Stores,
    #[sea_orm(has_many = "super::pavilion_discounts::Entity")]
    PavilionDiscounts,
    #[sea_orm(has_many = "super::additional_charges::Entity")]
    AdditionalCharges,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
    #[sea_orm(has_many = "super::pavilion_monthly_ledgers::Entity")]
    PavilionMonthlyLedgers,
}

impl Related<super::stores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stores.def()
    }
}

impl Related<super::pavilion_discounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PavilionDiscounts.def()
    }
}

impl Related<super::additional_charges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdditionalCharges.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::pavilion_monthly_ledgers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PavilionMonthlyLedgers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
