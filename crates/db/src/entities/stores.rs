//! `SeaORM` Entity for stores table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PaidStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub utilities_expense_status: PaidStatus,
    pub household_expense_status: PaidStatus,
    pub last_monthly_reset_period: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pavilions::Entity")]
    Pavilions,
    #[sea_orm(has_many = "super::staff::Entity")]
    Staff,
    #[sea_orm(has_many = "super::pavilion_expenses::Entity")]
    PavilionExpenses,
    #[sea_orm(has_many = "super::household_expenses::Entity")]
    HouseholdExpenses,
}

impl Related<super::pavilions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pavilions.def()
    }
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl Related<super::pavilion_expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PavilionExpenses.def()
    }
}

impl Related<super::household_expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HouseholdExpenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
