//! Store analytics tests.

use chrono::{DateTime, TimeZone, Utc};
use pavilio_shared::types::{
    AdditionalChargeId, AdditionalChargePaymentId, DiscountId, ExpenseId, PavilionId, PaymentId,
    StaffId, StoreId,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::AnalyticsService;
use super::types::StoreSnapshot;
use crate::billing::{AdditionalCharge, Discount, Pavilion, PavilionBilling, PavilionStatus};
use crate::calendar::Period;
use crate::error::EngineError;
use crate::payments::{AdditionalChargePayment, ChannelSplit, EntityChannelSplits, Payment};
use crate::store::{
    ExpenseCategory, HouseholdExpense, PaidStatus, PavilionExpense, Staff, Store,
};

fn january() -> Period {
    Period::from_ym(2026, 1).unwrap()
}

fn at(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, 10, 0, 0).unwrap()
}

fn pavilion(id: i64, status: PavilionStatus, area: Decimal) -> PavilionBilling {
    PavilionBilling {
        pavilion: Pavilion {
            id: PavilionId::new(id),
            store_id: StoreId::new(1),
            name: format!("A-{id}"),
            area,
            price_per_sqm: dec!(10),
            status,
            tenant_name: None,
            utilities_amount: Some(dec!(50)),
            advertising_amount: Some(dec!(15)),
            prepaid_until: (status == PavilionStatus::Prepaid)
                .then(|| chrono::NaiveDate::from_ymd_opt(2026, 12, 31))
                .flatten(),
        },
        discounts: vec![],
        additional_charges: vec![],
    }
}

fn payment(id: i64, pavilion_id: i64, period: Period, rent: Decimal, utilities: Decimal, advertising: Decimal) -> Payment {
    Payment {
        id: PaymentId::new(id),
        pavilion_id: PavilionId::new(pavilion_id),
        period,
        rent_paid: Some(rent),
        utilities_paid: Some(utilities),
        advertising_paid: Some(advertising),
        legacy_channels: ChannelSplit::default(),
        entity_channels: EntityChannelSplits {
            rent: ChannelSplit::new(rent, Decimal::ZERO, Decimal::ZERO),
            utilities: ChannelSplit::new(Decimal::ZERO, utilities, Decimal::ZERO),
            advertising: ChannelSplit::new(Decimal::ZERO, Decimal::ZERO, advertising),
        },
    }
}

fn expense(id: i64, category: ExpenseCategory, amount: Decimal, status: PaidStatus, created_at: DateTime<Utc>) -> PavilionExpense {
    PavilionExpense {
        id: ExpenseId::new(id),
        store_id: StoreId::new(1),
        pavilion_id: None,
        category,
        amount,
        status,
        created_at,
    }
}

fn staff(id: i64, salary: Decimal, salary_status: PaidStatus) -> Staff {
    Staff {
        id: StaffId::new(id),
        store_id: StoreId::new(1),
        full_name: format!("Employee {id}"),
        position: "Guard".to_string(),
        salary,
        salary_status,
    }
}

/// Income 600 + 100 + 55 + 100 = 855; expenses 400 + 130 + 100 = 630.
fn snapshot() -> StoreSnapshot {
    StoreSnapshot {
        store: Store {
            id: StoreId::new(1),
            name: "Central".to_string(),
            utilities_expense_status: PaidStatus::Paid,
            household_expense_status: PaidStatus::Unpaid,
            last_monthly_reset_period: Some(january()),
        },
        pavilions: vec![
            pavilion(1, PavilionStatus::Rented, dec!(60)),
            pavilion(2, PavilionStatus::Prepaid, dec!(20)),
            pavilion(3, PavilionStatus::Available, dec!(20)),
        ],
        staff: vec![
            staff(1, dec!(400), PaidStatus::Paid),
            staff(2, dec!(300), PaidStatus::Unpaid),
        ],
        payments: vec![
            payment(1, 1, january(), dec!(600), dec!(100), dec!(55)),
            payment(2, 1, january().previous(), dec!(600), dec!(50), dec!(0)),
        ],
        charge_payments: vec![AdditionalChargePayment {
            id: AdditionalChargePaymentId::new(1),
            charge_id: AdditionalChargeId::new(1),
            pavilion_id: PavilionId::new(1),
            amount: dec!(100),
            channels: ChannelSplit::new(dec!(100), Decimal::ZERO, Decimal::ZERO),
            paid_at: at(1, 12),
        }],
        expenses: vec![
            expense(1, ExpenseCategory::Vat, dec!(130), PaidStatus::Paid, at(1, 5)),
            expense(2, ExpenseCategory::Other, dec!(50), PaidStatus::Unpaid, at(1, 6)),
            expense(3, ExpenseCategory::Utilities, dec!(100), PaidStatus::Unpaid, at(1, 7)),
            expense(4, ExpenseCategory::LandRent, dec!(90), PaidStatus::Paid, at(2, 1)),
        ],
        household_expenses: vec![HouseholdExpense {
            id: ExpenseId::new(5),
            store_id: StoreId::new(1),
            name: "Cleaning supplies".to_string(),
            amount: dec!(25),
            created_at: at(1, 9),
        }],
    }
}

#[test]
fn test_saldo_is_income_minus_expenses() {
    let report = AnalyticsService::store_report(&snapshot(), january()).unwrap();

    assert_eq!(report.income.actual.total, dec!(855));
    assert_eq!(report.expenses.totals.actual, dec!(630));
    assert_eq!(report.saldo, dec!(225));
    assert_eq!(report.saldo, report.income.actual.total - report.expenses.totals.actual);
}

#[test]
fn test_income_forecast_uses_charge_calculator() {
    let report = AnalyticsService::store_report(&snapshot(), january()).unwrap();
    let forecast = report.income.forecast;

    // Rented 600, prepaid 200, available nothing.
    assert_eq!(forecast.rent, dec!(800));
    // Only the rented pavilion accrues utilities and advertising.
    assert_eq!(forecast.utilities, dec!(50));
    assert_eq!(forecast.advertising, dec!(15));
    assert_eq!(forecast.total, dec!(865));
}

#[test]
fn test_income_channels() {
    let report = AnalyticsService::store_report(&snapshot(), january()).unwrap();

    assert_eq!(report.income.by_entity.rent.bank_transfer, dec!(600));
    assert_eq!(report.income.by_entity.facilities.cashbox1, dec!(100));
    assert_eq!(report.income.by_entity.advertising.cashbox2, dec!(55));
    assert_eq!(report.income.by_entity.additional.bank_transfer, dec!(100));
    assert_eq!(report.income.channels.bank_transfer, dec!(700));
    assert_eq!(report.income.channels.total, dec!(855));
}

#[test]
fn test_expense_lines() {
    let report = AnalyticsService::store_report(&snapshot(), january()).unwrap();
    let line = |category| *report.expenses.line(category).unwrap();

    assert_eq!(report.expenses.lines.len(), ExpenseCategory::ALL.len());

    let salaries = line(ExpenseCategory::Salaries);
    assert_eq!((salaries.forecast, salaries.actual), (dec!(700), dec!(400)));

    let utilities = line(ExpenseCategory::Utilities);
    assert_eq!((utilities.forecast, utilities.actual), (dec!(100), dec!(100)));

    let household = line(ExpenseCategory::Household);
    assert_eq!((household.forecast, household.actual), (dec!(25), Decimal::ZERO));

    let other = line(ExpenseCategory::Other);
    assert_eq!((other.forecast, other.actual), (dec!(50), Decimal::ZERO));

    // February expense is not in January.
    let land_rent = line(ExpenseCategory::LandRent);
    assert_eq!(land_rent.forecast, Decimal::ZERO);

    assert_eq!(report.expenses.totals.forecast, dec!(1005));
}

#[test]
fn test_utilities_gated_by_store_flag() {
    let mut snapshot = snapshot();
    snapshot.store.utilities_expense_status = PaidStatus::Unpaid;

    let report = AnalyticsService::store_report(&snapshot, january()).unwrap();
    let utilities = report.expenses.line(ExpenseCategory::Utilities).unwrap();

    assert_eq!(utilities.forecast, dec!(100));
    assert_eq!(utilities.actual, Decimal::ZERO);
    assert_eq!(report.saldo, dec!(325));
}

#[test]
fn test_previous_month_balance() {
    let report = AnalyticsService::store_report(&snapshot(), january()).unwrap();

    // December: 650 paid; salaries 700 count as settled.
    assert_eq!(report.previous_month_balance, dec!(-50));
}

#[test]
fn test_occupancy() {
    let report = AnalyticsService::store_report(&snapshot(), january()).unwrap();
    let occupancy = report.occupancy;

    assert_eq!(occupancy.total_count, 3);
    assert_eq!(
        (occupancy.rented_count, occupancy.prepaid_count, occupancy.available_count),
        (1, 1, 1)
    );
    assert_eq!(occupancy.total_area, dec!(100));
    assert_eq!(occupancy.rented_area, dec!(80));
    assert_eq!(occupancy.available_area, dec!(20));
    assert_eq!(occupancy.occupancy_percent, dec!(80));
}

#[test]
fn test_empty_store_occupancy_is_zero() {
    let occupancy = AnalyticsService::occupancy(&[]);
    assert_eq!(occupancy.occupancy_percent, Decimal::ZERO);
}

#[test]
fn test_discounts_and_charges_flow_into_forecast() {
    let mut snapshot = snapshot();
    snapshot.pavilions[0].discounts.push(Discount {
        id: DiscountId::new(1),
        pavilion_id: PavilionId::new(1),
        amount: dec!(2),
        starts_at: chrono::NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
        ends_at: None,
        note: None,
    });
    snapshot.pavilions[0].additional_charges.push(AdditionalCharge {
        id: AdditionalChargeId::new(1),
        pavilion_id: PavilionId::new(1),
        name: "Repair".to_string(),
        amount: dec!(100),
        created_at: at(1, 3),
    });

    let report = AnalyticsService::store_report(&snapshot, january()).unwrap();

    assert_eq!(report.income.forecast.rent, dec!(680));
    assert_eq!(report.income.forecast.additional, dec!(100));
}

#[test]
fn test_negative_expense_rejected() {
    let mut snapshot = snapshot();
    snapshot.expenses[0].amount = dec!(-1);

    assert!(matches!(
        AnalyticsService::store_report(&snapshot, january()),
        Err(EngineError::NegativeAmount { .. })
    ));
}

#[test]
fn test_negative_previous_month_payment_rejected() {
    let mut snapshot = snapshot();
    assert_eq!(snapshot.payments[1].period, january().previous());
    snapshot.payments[1].rent_paid = Some(dec!(-600));

    assert!(matches!(
        AnalyticsService::store_report(&snapshot, january()),
        Err(EngineError::NegativeAmount { field: "rent_paid", .. })
    ));
}

#[test]
fn test_charge_payment_amount_must_match_channels() {
    let mut snapshot = snapshot();
    snapshot.charge_payments[0].paid_at = Utc.with_ymd_and_hms(2025, 12, 20, 10, 0, 0).unwrap();
    snapshot.charge_payments[0].amount = dec!(250);

    assert!(matches!(
        AnalyticsService::store_report(&snapshot, january()),
        Err(EngineError::ConsistencyViolation(_))
    ));
}

proptest! {
    #[test]
    fn test_saldo_identity_holds(
        rent in 0i64..1_000_000,
        utilities in 0i64..1_000_000,
        vat in 0i64..1_000_000,
        paid in proptest::bool::ANY,
    ) {
        let mut snapshot = snapshot();
        snapshot.payments[0].rent_paid = Some(Decimal::new(rent, 2));
        snapshot.payments[0].entity_channels.rent =
            ChannelSplit::new(Decimal::new(rent, 2), Decimal::ZERO, Decimal::ZERO);
        snapshot.payments[0].utilities_paid = Some(Decimal::new(utilities, 2));
        snapshot.payments[0].entity_channels.utilities =
            ChannelSplit::new(Decimal::ZERO, Decimal::new(utilities, 2), Decimal::ZERO);
        snapshot.expenses[0].amount = Decimal::new(vat, 2);
        snapshot.store.household_expense_status =
            if paid { PaidStatus::Paid } else { PaidStatus::Unpaid };

        let report = AnalyticsService::store_report(&snapshot, january()).unwrap();

        prop_assert_eq!(report.saldo, report.income.actual.total - report.expenses.totals.actual);
        prop_assert_eq!(report.income.channels.total, report.income.actual.total);
        prop_assert_eq!(
            report.occupancy.rented_area + report.occupancy.available_area,
            report.occupancy.total_area
        );
    }
}
