//! Ledger service for monthly debt computation.
//!
//! Pure business logic: the persistence layer loads the inputs, reads the
//! previous month's row for the opening debt and upserts what this returns.

use rust_decimal::Decimal;

use super::types::{LedgerInput, PaidBreakdown, PavilionMonthlyLedger, PavilionMonthlySummary};
use crate::billing::{ChargeCalculator, round_money};
use crate::billing::validation;
use crate::calendar::Period;
use crate::error::EngineError;
use crate::payments::{AdditionalChargePayment, ChannelAggregator, Payment};

/// Ledger service for monthly debt computation.
pub struct LedgerService;

impl LedgerService {
    /// Computes the ledger row for one pavilion and month.
    ///
    /// 1. Validates the pavilion, discounts, charges and payments
    /// 2. Resolves expected charges
    /// 3. Sums declared rent + utilities paid for the month
    /// 4. Carries the opening debt forward
    ///
    /// The result depends only on the input, so recomputing with unchanged
    /// data reproduces the same row.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if any input fails validation.
    pub fn compute(input: &LedgerInput<'_>) -> Result<PavilionMonthlyLedger, EngineError> {
        validation::validate_billing_inputs(
            input.pavilion,
            input.discounts,
            input.additional_charges,
            input.payments,
        )?;

        let expected = ChargeCalculator::for_period(
            input.pavilion,
            input.discounts,
            input.additional_charges,
            input.period,
        );
        let actual_total = Self::actual_total(input.payments, input.period);
        let opening_debt = round_money(input.opening_debt);
        let month_delta = expected.total - actual_total;

        Ok(PavilionMonthlyLedger {
            pavilion_id: input.pavilion.id,
            period: input.period,
            expected_rent: expected.rent,
            expected_utilities: expected.utilities,
            expected_additional: expected.additional,
            expected_total: expected.total,
            actual_total,
            opening_debt,
            month_delta,
            closing_debt: opening_debt + month_delta,
        })
    }

    /// Declared rent + utilities paid across the month's payment rows,
    /// rounded to cents.
    ///
    /// Advertising and additional-charge payments are not part of the debt
    /// ledger.
    #[must_use]
    pub fn actual_total(payments: &[Payment], period: Period) -> Decimal {
        payments
            .iter()
            .filter(|payment| payment.period == period)
            .map(|payment| round_money(payment.recurring_paid()))
            .sum()
    }

    /// Opening debt given the previous month's row, if any.
    #[must_use]
    pub fn opening_debt(previous: Option<&PavilionMonthlyLedger>) -> Decimal {
        previous.map_or(Decimal::ZERO, |row| row.closing_debt)
    }

    /// Computes consecutive months starting at `input.period`, chaining each
    /// closing debt into the next month's opening debt.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if any input fails validation.
    pub fn compute_chain(
        input: &LedgerInput<'_>,
        through: Period,
    ) -> Result<Vec<PavilionMonthlyLedger>, EngineError> {
        let mut rows = Vec::new();
        let mut opening_debt = input.opening_debt;

        for period in input.period.through(through) {
            let row = Self::compute(&LedgerInput {
                opening_debt,
                period,
                ..*input
            })?;
            opening_debt = row.closing_debt;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Checks the row arithmetic and that every row's opening debt equals the
    /// previous month's closing debt.
    ///
    /// `rows` must belong to one pavilion, sorted by period. Gaps between
    /// periods are allowed; only adjacent months are chained.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ConsistencyViolation` on the first broken row.
    pub fn verify_continuity(rows: &[PavilionMonthlyLedger]) -> Result<(), EngineError> {
        for row in rows {
            if row.month_delta != row.expected_total - row.actual_total
                || row.closing_debt != row.opening_debt + row.month_delta
            {
                return Err(EngineError::ConsistencyViolation(format!(
                    "ledger row for pavilion {} in {} does not add up",
                    row.pavilion_id, row.period
                )));
            }
        }

        for pair in rows.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if previous.pavilion_id != current.pavilion_id {
                return Err(EngineError::ConsistencyViolation(format!(
                    "ledger rows mix pavilions {} and {}",
                    previous.pavilion_id, current.pavilion_id
                )));
            }
            if previous.period.next() == current.period
                && current.opening_debt != previous.closing_debt
            {
                return Err(EngineError::ConsistencyViolation(format!(
                    "pavilion {} opens {} with {} but {} closed with {}",
                    current.pavilion_id,
                    current.period,
                    current.opening_debt,
                    previous.period,
                    previous.closing_debt
                )));
            }
        }

        Ok(())
    }

    /// Builds the monthly summary: expected charges, what was paid per
    /// entity and channel, and the ledger row.
    ///
    /// `charge_payments` may include other pavilions and months; only this
    /// pavilion's payments made during the month count.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if any input fails validation or the channel
    /// totals fail to reconcile.
    pub fn monthly_summary(
        input: &LedgerInput<'_>,
        charge_payments: &[AdditionalChargePayment],
    ) -> Result<PavilionMonthlySummary, EngineError> {
        let ledger = Self::compute(input)?;
        let expected = ChargeCalculator::for_period(
            input.pavilion,
            input.discounts,
            input.additional_charges,
            input.period,
        );

        let own_charge_payments: Vec<AdditionalChargePayment> = charge_payments
            .iter()
            .filter(|payment| payment.pavilion_id == input.pavilion.id)
            .cloned()
            .collect();
        let channels = ChannelAggregator::aggregate_for_period(
            input.period,
            input.payments,
            &own_charge_payments,
        )?;

        let mut paid = PaidBreakdown::default();
        for payment in input.payments.iter().filter(|p| p.period == input.period) {
            paid.rent += payment.rent_paid.unwrap_or_default();
            paid.utilities += payment.utilities_paid.unwrap_or_default();
            paid.advertising += payment.advertising_paid.unwrap_or_default();
        }
        paid.additional = own_charge_payments
            .iter()
            .filter(|payment| input.period.contains_instant(payment.paid_at))
            .map(|payment| payment.amount)
            .sum();
        paid.total = paid.rent + paid.utilities + paid.advertising + paid.additional;

        Ok(PavilionMonthlySummary {
            pavilion_id: input.pavilion.id,
            period: input.period,
            status: input.pavilion.status,
            expected,
            paid,
            channels,
            ledger,
        })
    }
}
