//! Store analytics aggregation.

use rust_decimal::Decimal;

use super::types::{
    ExpenseLine, ExpenseSummary, ExpenseTotals, IncomeBreakdown, IncomeSummary,
    StoreAnalyticsReport, StoreSnapshot, TradeAreaOccupancy,
};
use crate::billing::validation;
use crate::billing::{ChargeCalculator, PavilionBilling, PavilionStatus};
use crate::calendar::Period;
use crate::error::EngineError;
use crate::payments::ChannelAggregator;
use crate::store::{ExpenseCategory, PaidStatus};

/// How store-level paid flags are read for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settlement {
    /// Use the flags as stored.
    Current,
    /// The month is closed: every gated bucket and salary counts as paid.
    Closed,
}

/// Analytics service.
pub struct AnalyticsService;

impl AnalyticsService {
    /// Builds the store report for `period`.
    ///
    /// The previous month is read as closed: its utilities, household and
    /// salary buckets count as settled, since their flags were reset at the
    /// rollover.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if an input fails validation or the channel
    /// totals fail to reconcile.
    pub fn store_report(
        snapshot: &StoreSnapshot,
        period: Period,
    ) -> Result<StoreAnalyticsReport, EngineError> {
        Self::validate(snapshot)?;

        let income = Self::income(snapshot, period)?;
        let expenses = Self::expenses(snapshot, period, Settlement::Current);
        let saldo = income.actual.total - expenses.totals.actual;

        let previous = period.previous();
        let previous_income = Self::actual_income(snapshot, previous);
        let previous_expenses = Self::expenses(snapshot, previous, Settlement::Closed);
        let previous_month_balance = previous_income.total - previous_expenses.totals.actual;

        Ok(StoreAnalyticsReport {
            store_id: snapshot.store.id,
            period,
            income,
            expenses,
            occupancy: Self::occupancy(&snapshot.pavilions),
            saldo,
            previous_month_balance,
        })
    }

    /// Counts pavilions and sums area by status.
    #[must_use]
    pub fn occupancy(pavilions: &[PavilionBilling]) -> TradeAreaOccupancy {
        let mut occupancy = TradeAreaOccupancy::default();

        for billing in pavilions {
            let pavilion = &billing.pavilion;
            occupancy.total_count += 1;
            occupancy.total_area += pavilion.area;
            match pavilion.status {
                PavilionStatus::Rented => occupancy.rented_count += 1,
                PavilionStatus::Prepaid => occupancy.prepaid_count += 1,
                PavilionStatus::Available => occupancy.available_count += 1,
            }
            if pavilion.status.is_occupied() {
                occupancy.rented_area += pavilion.area;
            } else {
                occupancy.available_area += pavilion.area;
            }
        }

        if !occupancy.total_area.is_zero() {
            occupancy.occupancy_percent =
                (occupancy.rented_area / occupancy.total_area * Decimal::ONE_HUNDRED).round_dp(2);
        }

        occupancy
    }

    fn validate(snapshot: &StoreSnapshot) -> Result<(), EngineError> {
        for billing in &snapshot.pavilions {
            validation::validate_billing_inputs(
                &billing.pavilion,
                &billing.discounts,
                &billing.additional_charges,
                &[],
            )?;
        }
        for payment in &snapshot.payments {
            validation::validate_payment(payment)?;
        }
        for charge_payment in &snapshot.charge_payments {
            validation::validate_charge_payment(charge_payment)?;
            ChannelAggregator::reconcile_charge_payment(charge_payment)?;
        }
        for staff in &snapshot.staff {
            validation::non_negative("salary", staff.salary)?;
        }
        for expense in &snapshot.expenses {
            validation::non_negative("expense.amount", expense.amount)?;
        }
        for expense in &snapshot.household_expenses {
            validation::non_negative("household_expense.amount", expense.amount)?;
        }
        Ok(())
    }

    fn income(snapshot: &StoreSnapshot, period: Period) -> Result<IncomeSummary, EngineError> {
        let mut forecast = IncomeBreakdown::default();
        for billing in &snapshot.pavilions {
            let expected = ChargeCalculator::for_period(
                &billing.pavilion,
                &billing.discounts,
                &billing.additional_charges,
                period,
            );
            forecast.rent += expected.rent;
            forecast.utilities += expected.utilities;
            forecast.advertising += expected.advertising;
            forecast.additional += expected.additional;
        }

        let by_entity = ChannelAggregator::aggregate_for_period(
            period,
            &snapshot.payments,
            &snapshot.charge_payments,
        )?;

        Ok(IncomeSummary {
            forecast: forecast.with_total(),
            actual: Self::actual_income(snapshot, period),
            channels: by_entity.total,
            by_entity,
        })
    }

    fn actual_income(snapshot: &StoreSnapshot, period: Period) -> IncomeBreakdown {
        let mut actual = IncomeBreakdown::default();
        for payment in snapshot.payments.iter().filter(|p| p.period == period) {
            actual.rent += payment.rent_paid.unwrap_or_default();
            actual.utilities += payment.utilities_paid.unwrap_or_default();
            actual.advertising += payment.advertising_paid.unwrap_or_default();
        }
        actual.additional = snapshot
            .charge_payments
            .iter()
            .filter(|payment| period.contains_instant(payment.paid_at))
            .map(|payment| payment.amount)
            .sum();
        actual.with_total()
    }

    fn expenses(snapshot: &StoreSnapshot, period: Period, settlement: Settlement) -> ExpenseSummary {
        let flag_paid = |status: PaidStatus| settlement == Settlement::Closed || status.is_paid();

        let lines: Vec<ExpenseLine> = ExpenseCategory::ALL
            .iter()
            .map(|&category| {
                let rows = snapshot.expenses.iter().filter(|expense| {
                    expense.category == category && period.contains_instant(expense.created_at)
                });

                let (forecast, actual) = match category {
                    ExpenseCategory::Salaries => {
                        let forecast: Decimal = snapshot.staff.iter().map(|s| s.salary).sum();
                        let actual = if settlement == Settlement::Closed {
                            forecast
                        } else {
                            snapshot
                                .staff
                                .iter()
                                .filter(|s| s.salary_status.is_paid())
                                .map(|s| s.salary)
                                .sum()
                        };
                        (forecast, actual)
                    }
                    ExpenseCategory::Utilities => {
                        let forecast: Decimal = rows.map(|expense| expense.amount).sum();
                        let paid = flag_paid(snapshot.store.utilities_expense_status);
                        (forecast, if paid { forecast } else { Decimal::ZERO })
                    }
                    ExpenseCategory::Household => {
                        let purchases: Decimal = snapshot
                            .household_expenses
                            .iter()
                            .filter(|expense| period.contains_instant(expense.created_at))
                            .map(|expense| expense.amount)
                            .sum();
                        let forecast = purchases + rows.map(|expense| expense.amount).sum::<Decimal>();
                        let paid = flag_paid(snapshot.store.household_expense_status);
                        (forecast, if paid { forecast } else { Decimal::ZERO })
                    }
                    _ => rows.fold((Decimal::ZERO, Decimal::ZERO), |(forecast, actual), expense| {
                        let settled = if expense.status.is_paid() {
                            expense.amount
                        } else {
                            Decimal::ZERO
                        };
                        (forecast + expense.amount, actual + settled)
                    }),
                };

                ExpenseLine {
                    category,
                    forecast,
                    actual,
                }
            })
            .collect();

        let totals = lines.iter().fold(ExpenseTotals::default(), |totals, line| ExpenseTotals {
            forecast: totals.forecast + line.forecast,
            actual: totals.actual + line.actual,
        });

        ExpenseSummary { lines, totals }
    }
}
