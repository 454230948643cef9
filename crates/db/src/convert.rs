//! Conversions between database models and engine types.

use chrono::Utc;
use pavilio_core::billing::{self, AdditionalCharge, Discount, Pavilion};
use pavilio_core::calendar::Period;
use pavilio_core::ledger::PavilionMonthlyLedger;
use pavilio_core::payments::{AdditionalChargePayment, ChannelSplit, EntityChannelSplits, Payment};
use pavilio_core::store::{self, HouseholdExpense, PavilionExpense, Staff, Store};
use pavilio_shared::types::{
    AdditionalChargeId, AdditionalChargePaymentId, DiscountId, ExpenseId, PavilionId, PaymentId,
    StaffId, StoreId,
};

use crate::entities::{
    additional_charge_payments, additional_charges, household_expenses, pavilion_discounts,
    pavilion_expenses, pavilion_monthly_ledgers, pavilions, payments, sea_orm_active_enums, staff,
    stores,
};

impl From<sea_orm_active_enums::PavilionStatus> for billing::PavilionStatus {
    fn from(status: sea_orm_active_enums::PavilionStatus) -> Self {
        match status {
            sea_orm_active_enums::PavilionStatus::Available => Self::Available,
            sea_orm_active_enums::PavilionStatus::Rented => Self::Rented,
            sea_orm_active_enums::PavilionStatus::Prepaid => Self::Prepaid,
        }
    }
}

impl From<billing::PavilionStatus> for sea_orm_active_enums::PavilionStatus {
    fn from(status: billing::PavilionStatus) -> Self {
        match status {
            billing::PavilionStatus::Available => Self::Available,
            billing::PavilionStatus::Rented => Self::Rented,
            billing::PavilionStatus::Prepaid => Self::Prepaid,
        }
    }
}

impl From<sea_orm_active_enums::PaidStatus> for store::PaidStatus {
    fn from(status: sea_orm_active_enums::PaidStatus) -> Self {
        match status {
            sea_orm_active_enums::PaidStatus::Unpaid => Self::Unpaid,
            sea_orm_active_enums::PaidStatus::Paid => Self::Paid,
        }
    }
}

impl From<store::PaidStatus> for sea_orm_active_enums::PaidStatus {
    fn from(status: store::PaidStatus) -> Self {
        match status {
            store::PaidStatus::Unpaid => Self::Unpaid,
            store::PaidStatus::Paid => Self::Paid,
        }
    }
}

impl From<sea_orm_active_enums::ExpenseCategory> for store::ExpenseCategory {
    fn from(category: sea_orm_active_enums::ExpenseCategory) -> Self {
        use sea_orm_active_enums::ExpenseCategory as Db;
        match category {
            Db::Salaries => Self::Salaries,
            Db::PayrollTax => Self::PayrollTax,
            Db::ProfitTax => Self::ProfitTax,
            Db::Dividends => Self::Dividends,
            Db::BankServices => Self::BankServices,
            Db::Vat => Self::Vat,
            Db::LandRent => Self::LandRent,
            Db::Other => Self::Other,
            Db::Utilities => Self::Utilities,
            Db::Household => Self::Household,
        }
    }
}

impl From<stores::Model> for Store {
    fn from(model: stores::Model) -> Self {
        Self {
            id: StoreId::new(model.id),
            name: model.name,
            utilities_expense_status: model.utilities_expense_status.into(),
            household_expense_status: model.household_expense_status.into(),
            last_monthly_reset_period: model.last_monthly_reset_period.map(Period::containing),
        }
    }
}

impl From<pavilions::Model> for Pavilion {
    fn from(model: pavilions::Model) -> Self {
        Self {
            id: PavilionId::new(model.id),
            store_id: StoreId::new(model.store_id),
            name: model.name,
            area: model.area,
            price_per_sqm: model.price_per_sqm,
            status: model.status.into(),
            tenant_name: model.tenant_name,
            utilities_amount: model.utilities_amount,
            advertising_amount: model.advertising_amount,
            prepaid_until: model.prepaid_until,
        }
    }
}

impl From<pavilion_discounts::Model> for Discount {
    fn from(model: pavilion_discounts::Model) -> Self {
        Self {
            id: DiscountId::new(model.id),
            pavilion_id: PavilionId::new(model.pavilion_id),
            amount: model.amount,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            note: model.note,
        }
    }
}

impl From<additional_charges::Model> for AdditionalCharge {
    fn from(model: additional_charges::Model) -> Self {
        Self {
            id: AdditionalChargeId::new(model.id),
            pavilion_id: PavilionId::new(model.pavilion_id),
            name: model.name,
            amount: model.amount,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<payments::Model> for Payment {
    fn from(model: payments::Model) -> Self {
        Self {
            id: PaymentId::new(model.id),
            pavilion_id: PavilionId::new(model.pavilion_id),
            period: Period::containing(model.period),
            rent_paid: model.rent_paid,
            utilities_paid: model.utilities_paid,
            advertising_paid: model.advertising_paid,
            legacy_channels: ChannelSplit {
                bank_transfer: model.bank_transfer_paid,
                cashbox1: model.cashbox1_paid,
                cashbox2: model.cashbox2_paid,
            },
            entity_channels: EntityChannelSplits {
                rent: ChannelSplit {
                    bank_transfer: model.rent_bank_transfer_paid,
                    cashbox1: model.rent_cashbox1_paid,
                    cashbox2: model.rent_cashbox2_paid,
                },
                utilities: ChannelSplit {
                    bank_transfer: model.utilities_bank_transfer_paid,
                    cashbox1: model.utilities_cashbox1_paid,
                    cashbox2: model.utilities_cashbox2_paid,
                },
                advertising: ChannelSplit {
                    bank_transfer: model.advertising_bank_transfer_paid,
                    cashbox1: model.advertising_cashbox1_paid,
                    cashbox2: model.advertising_cashbox2_paid,
                },
            },
        }
    }
}

/// Charge payments carry their pavilion only through the charge.
pub(crate) fn charge_payment(
    model: additional_charge_payments::Model,
    pavilion_id: PavilionId,
) -> AdditionalChargePayment {
    AdditionalChargePayment {
        id: AdditionalChargePaymentId::new(model.id),
        charge_id: AdditionalChargeId::new(model.additional_charge_id),
        pavilion_id,
        amount: model.amount,
        channels: ChannelSplit {
            bank_transfer: model.bank_transfer_paid,
            cashbox1: model.cashbox1_paid,
            cashbox2: model.cashbox2_paid,
        },
        paid_at: model.paid_at.with_timezone(&Utc),
    }
}

impl From<pavilion_monthly_ledgers::Model> for PavilionMonthlyLedger {
    fn from(model: pavilion_monthly_ledgers::Model) -> Self {
        Self {
            pavilion_id: PavilionId::new(model.pavilion_id),
            period: Period::containing(model.period),
            expected_rent: model.expected_rent,
            expected_utilities: model.expected_utilities,
            expected_additional: model.expected_additional,
            expected_total: model.expected_total,
            actual_total: model.actual_total,
            opening_debt: model.opening_debt,
            month_delta: model.month_delta,
            closing_debt: model.closing_debt,
        }
    }
}

impl From<pavilion_expenses::Model> for PavilionExpense {
    fn from(model: pavilion_expenses::Model) -> Self {
        Self {
            id: ExpenseId::new(model.id),
            store_id: StoreId::new(model.store_id),
            pavilion_id: model.pavilion_id.map(PavilionId::new),
            category: model.category.into(),
            amount: model.amount,
            status: model.status.into(),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<household_expenses::Model> for HouseholdExpense {
    fn from(model: household_expenses::Model) -> Self {
        Self {
            id: ExpenseId::new(model.id),
            store_id: StoreId::new(model.store_id),
            name: model.name,
            amount: model.amount,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<staff::Model> for Staff {
    fn from(model: staff::Model) -> Self {
        Self {
            id: StaffId::new(model.id),
            store_id: StoreId::new(model.store_id),
            full_name: model.full_name,
            position: model.position,
            salary: model.salary,
            salary_status: model.salary_status.into(),
        }
    }
}
