//! `SeaORM` Entity for additional_charge_payments table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "additional_charge_payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub additional_charge_id: i64,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub bank_transfer_paid: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub cashbox1_paid: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub cashbox2_paid: Option<Decimal>,
    pub paid_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::additional_charges::Entity",
        from = "Column::AdditionalChargeId",
        to = "super::additional_charges::Column::Id"
    )]
    AdditionalCharges,
}

impl Related<super::additional_charges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdditionalCharges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
