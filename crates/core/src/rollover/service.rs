//! Rollover decisions and per-pavilion transitions.

use std::collections::BTreeMap;

use pavilio_shared::types::PavilionId;
use rust_decimal::Decimal;

use super::types::{
    MonthlyInputReset, PrepaidExpiry, RolloverDecision, RolloverOutcome, RolloverPlan,
    RolloverReport,
};
use crate::billing::{Pavilion, PavilionBilling, PavilionStatus};
use crate::calendar::Period;
use crate::error::EngineError;
use crate::ledger::{LedgerInput, LedgerService, PavilionMonthlyLedger};
use crate::payments::Payment;
use crate::store::{PaidStatus, Store};

/// Rollover service.
pub struct RolloverService;

impl RolloverService {
    /// Decides whether the rollover for `current` is still due.
    ///
    /// Due when the store was never rolled over or was last rolled over for
    /// an earlier month.
    #[must_use]
    pub fn decide(last_reset: Option<Period>, current: Period) -> RolloverDecision {
        match last_reset {
            Some(last) if last >= current => RolloverDecision::AlreadyDone { period: current },
            _ => RolloverDecision::Due {
                period: current,
                previous: current.previous(),
            },
        }
    }

    /// Returns true if a PREPAID pavilion's window ended before `period`.
    #[must_use]
    pub fn is_prepaid_expired(pavilion: &Pavilion, period: Period) -> bool {
        pavilion.status == PavilionStatus::Prepaid
            && pavilion
                .prepaid_until
                .is_some_and(|until| until < period.start())
    }

    /// PREPAID pavilions whose window ended before `period`.
    #[must_use]
    pub fn expired_prepaid(pavilions: &[Pavilion], period: Period) -> Vec<PrepaidExpiry> {
        pavilions
            .iter()
            .filter(|pavilion| Self::is_prepaid_expired(pavilion, period))
            .filter_map(|pavilion| {
                pavilion.prepaid_until.map(|prepaid_until| PrepaidExpiry {
                    pavilion_id: pavilion.id,
                    prepaid_until,
                })
            })
            .collect()
    }

    /// Returns an expired PREPAID pavilion to RENTED.
    pub fn apply_expiry(pavilion: &mut Pavilion) {
        pavilion.status = PavilionStatus::Rented;
        pavilion.prepaid_until = None;
    }

    /// New monthly inputs for a pavilion entering a new month.
    ///
    /// RENTED inputs become "not entered"; PREPAID inputs become zero;
    /// AVAILABLE pavilions are left alone.
    #[must_use]
    pub const fn monthly_input_reset(status: PavilionStatus) -> Option<MonthlyInputReset> {
        match status {
            PavilionStatus::Rented => Some(MonthlyInputReset {
                utilities_amount: None,
                advertising_amount: None,
            }),
            PavilionStatus::Prepaid => Some(MonthlyInputReset {
                utilities_amount: Some(Decimal::ZERO),
                advertising_amount: Some(Decimal::ZERO),
            }),
            PavilionStatus::Available => None,
        }
    }

    /// Applies a reset to a pavilion.
    pub fn apply_input_reset(pavilion: &mut Pavilion, reset: MonthlyInputReset) {
        pavilion.utilities_amount = reset.utilities_amount;
        pavilion.advertising_amount = reset.advertising_amount;
    }

    /// Plans the rollover for `current`, or returns `None` if it already ran.
    ///
    /// Input resets are planned against the statuses the pavilions will
    /// have after the prepaid expiries.
    #[must_use]
    pub fn plan(store: &Store, pavilions: &[Pavilion], current: Period) -> Option<RolloverPlan> {
        let RolloverDecision::Due { period, previous } =
            Self::decide(store.last_monthly_reset_period, current)
        else {
            return None;
        };

        let prepaid_expired = Self::expired_prepaid(pavilions, period);
        let input_resets = pavilions
            .iter()
            .filter_map(|pavilion| {
                let status = if Self::is_prepaid_expired(pavilion, period) {
                    PavilionStatus::Rented
                } else {
                    pavilion.status
                };
                Self::monthly_input_reset(status).map(|reset| (pavilion.id, reset))
            })
            .collect();

        Some(RolloverPlan {
            store_id: store.id,
            period,
            previous_period: previous,
            prepaid_expired,
            input_resets,
        })
    }

    /// Resets the store's monthly expense flags and stamps the period.
    pub fn close_store_month(store: &mut Store, period: Period) {
        store.utilities_expense_status = PaidStatus::Unpaid;
        store.household_expense_status = PaidStatus::Unpaid;
        store.last_monthly_reset_period = Some(period);
    }

    /// Runs the whole rollover against in-memory state.
    ///
    /// Same steps, in the same order, as the persisted rollover: expire
    /// prepaid windows, ledger the previous month from pre-reset inputs,
    /// reset monthly inputs, reset the store flags, stamp the period.
    /// `ledger` is keyed by (pavilion, period) and upserted in place.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if a pavilion's inputs fail validation. Nothing
    /// is modified in that case.
    pub fn run_in_memory(
        store: &mut Store,
        billings: &mut [PavilionBilling],
        payments: &[Payment],
        ledger: &mut BTreeMap<(PavilionId, Period), PavilionMonthlyLedger>,
        current: Period,
    ) -> Result<RolloverOutcome, EngineError> {
        let pavilions: Vec<Pavilion> = billings.iter().map(|b| b.pavilion.clone()).collect();
        let Some(plan) = Self::plan(store, &pavilions, current) else {
            return Ok(RolloverOutcome::Skipped {
                store_id: store.id,
                period: current,
            });
        };

        // Compute every row against the expired state before touching anything.
        let mut rows = Vec::with_capacity(billings.len());
        for billing in billings.iter() {
            let mut pavilion = billing.pavilion.clone();
            if Self::is_prepaid_expired(&pavilion, plan.period) {
                Self::apply_expiry(&mut pavilion);
            }
            let own_payments: Vec<Payment> = payments
                .iter()
                .filter(|payment| payment.pavilion_id == pavilion.id)
                .cloned()
                .collect();
            let opening_debt = LedgerService::opening_debt(
                ledger.get(&(pavilion.id, plan.previous_period.previous())),
            );
            rows.push(LedgerService::compute(&LedgerInput {
                pavilion: &pavilion,
                discounts: &billing.discounts,
                payments: &own_payments,
                additional_charges: &billing.additional_charges,
                opening_debt,
                period: plan.previous_period,
            })?);
        }

        for billing in billings.iter_mut() {
            if Self::is_prepaid_expired(&billing.pavilion, plan.period) {
                Self::apply_expiry(&mut billing.pavilion);
            }
        }
        let ledgers_written = rows.len();
        for row in rows {
            ledger.insert((row.pavilion_id, row.period), row);
        }
        for (pavilion_id, reset) in &plan.input_resets {
            if let Some(billing) = billings.iter_mut().find(|b| b.pavilion.id == *pavilion_id) {
                Self::apply_input_reset(&mut billing.pavilion, *reset);
            }
        }
        Self::close_store_month(store, plan.period);

        Ok(RolloverOutcome::Completed(RolloverReport {
            store_id: plan.store_id,
            period: plan.period,
            previous_period: plan.previous_period,
            prepaid_expired: plan.prepaid_expired.iter().map(|e| e.pavilion_id).collect(),
            ledgers_written,
            inputs_reset: plan.input_resets.len(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pavilio_shared::types::{PaymentId, StoreId};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use crate::payments::{ChannelSplit, EntityChannelSplits};

    fn period(year: i32, month: u32) -> Period {
        Period::from_ym(year, month).unwrap()
    }

    fn store(last: Option<Period>) -> Store {
        Store {
            id: StoreId::new(1),
            name: "Central".to_string(),
            utilities_expense_status: PaidStatus::Paid,
            household_expense_status: PaidStatus::Paid,
            last_monthly_reset_period: last,
        }
    }

    fn pavilion(id: i64, status: PavilionStatus, prepaid_until: Option<NaiveDate>) -> Pavilion {
        Pavilion {
            id: PavilionId::new(id),
            store_id: StoreId::new(1),
            name: format!("P-{id}"),
            area: dec!(10),
            price_per_sqm: dec!(100),
            status,
            tenant_name: None,
            utilities_amount: Some(dec!(80)),
            advertising_amount: Some(dec!(20)),
            prepaid_until,
        }
    }

    fn billing(pavilion: Pavilion) -> PavilionBilling {
        PavilionBilling {
            pavilion,
            discounts: vec![],
            additional_charges: vec![],
        }
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(period(2026, 1)), true)]
    #[case(Some(period(2026, 2)), false)]
    #[case(Some(period(2026, 3)), false)]
    fn test_decide(#[case] last: Option<Period>, #[case] due: bool) {
        let decision = RolloverService::decide(last, period(2026, 2));
        if due {
            assert_eq!(
                decision,
                RolloverDecision::Due {
                    period: period(2026, 2),
                    previous: period(2026, 1),
                }
            );
        } else {
            assert_eq!(
                decision,
                RolloverDecision::AlreadyDone {
                    period: period(2026, 2)
                }
            );
        }
    }

    #[test]
    fn test_prepaid_expires_only_after_window() {
        let march = period(2026, 3);
        let lapsed = pavilion(1, PavilionStatus::Prepaid, NaiveDate::from_ymd_opt(2026, 2, 28));
        let last_day = pavilion(2, PavilionStatus::Prepaid, NaiveDate::from_ymd_opt(2026, 3, 1));
        let rented = pavilion(3, PavilionStatus::Rented, None);

        let expired = RolloverService::expired_prepaid(&[lapsed, last_day, rented], march);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].pavilion_id, PavilionId::new(1));
    }

    #[rstest]
    #[case(PavilionStatus::Rented, Some((None, None)))]
    #[case(PavilionStatus::Prepaid, Some((Some(Decimal::ZERO), Some(Decimal::ZERO))))]
    #[case(PavilionStatus::Available, None)]
    fn test_monthly_input_reset(
        #[case] status: PavilionStatus,
        #[case] expected: Option<(Option<Decimal>, Option<Decimal>)>,
    ) {
        let reset = RolloverService::monthly_input_reset(status)
            .map(|r| (r.utilities_amount, r.advertising_amount));
        assert_eq!(reset, expected);
    }

    #[test]
    fn test_plan_resets_expired_prepaid_as_rented() {
        let pavilions = [pavilion(
            1,
            PavilionStatus::Prepaid,
            NaiveDate::from_ymd_opt(2026, 1, 31),
        )];
        let plan = RolloverService::plan(&store(Some(period(2026, 1))), &pavilions, period(2026, 2))
            .unwrap();

        assert_eq!(plan.previous_period, period(2026, 1));
        assert_eq!(plan.prepaid_expired.len(), 1);
        assert_eq!(
            plan.input_resets,
            vec![(
                PavilionId::new(1),
                MonthlyInputReset {
                    utilities_amount: None,
                    advertising_amount: None,
                }
            )]
        );
    }

    #[test]
    fn test_rollover_runs_once_per_month() {
        let mut store = store(Some(period(2026, 1)));
        let mut billings = vec![
            billing(pavilion(1, PavilionStatus::Rented, None)),
            billing(pavilion(
                2,
                PavilionStatus::Prepaid,
                NaiveDate::from_ymd_opt(2026, 6, 30),
            )),
            billing(pavilion(3, PavilionStatus::Available, None)),
        ];
        let payments = [Payment {
            id: PaymentId::new(1),
            pavilion_id: PavilionId::new(1),
            period: period(2026, 1),
            rent_paid: Some(dec!(600)),
            utilities_paid: Some(dec!(80)),
            advertising_paid: None,
            legacy_channels: ChannelSplit::default(),
            entity_channels: EntityChannelSplits::default(),
        }];
        let mut ledger = BTreeMap::new();

        let first = RolloverService::run_in_memory(
            &mut store,
            &mut billings,
            &payments,
            &mut ledger,
            period(2026, 2),
        )
        .unwrap();
        assert!(first.is_completed());
        assert_eq!(ledger.len(), 3);
        assert_eq!(
            ledger[&(PavilionId::new(1), period(2026, 1))].closing_debt,
            dec!(400)
        );
        assert_eq!(store.last_monthly_reset_period, Some(period(2026, 2)));
        assert_eq!(store.utilities_expense_status, PaidStatus::Unpaid);
        assert_eq!(billings[0].pavilion.utilities_amount, None);
        assert_eq!(billings[1].pavilion.utilities_amount, Some(Decimal::ZERO));
        assert_eq!(billings[2].pavilion.utilities_amount, Some(dec!(80)));

        // Tenant enters February utilities, then the rollover is triggered again.
        billings[0].pavilion.utilities_amount = Some(dec!(95));
        let snapshot = ledger.clone();
        let second = RolloverService::run_in_memory(
            &mut store,
            &mut billings,
            &payments,
            &mut ledger,
            period(2026, 2),
        )
        .unwrap();

        assert_eq!(
            second,
            RolloverOutcome::Skipped {
                store_id: StoreId::new(1),
                period: period(2026, 2),
            }
        );
        assert_eq!(ledger, snapshot);
        assert_eq!(billings[0].pavilion.utilities_amount, Some(dec!(95)));
    }

    #[test]
    fn test_rollover_ledgers_expired_prepaid_as_rented() {
        let mut store = store(Some(period(2026, 2)));
        let mut billings = vec![billing(pavilion(
            1,
            PavilionStatus::Prepaid,
            NaiveDate::from_ymd_opt(2026, 2, 28),
        ))];
        let mut ledger = BTreeMap::new();

        let outcome = RolloverService::run_in_memory(
            &mut store,
            &mut billings,
            &[],
            &mut ledger,
            period(2026, 3),
        )
        .unwrap();

        let RolloverOutcome::Completed(report) = outcome else {
            panic!("rollover should run");
        };
        assert_eq!(report.prepaid_expired, vec![PavilionId::new(1)]);
        assert_eq!(billings[0].pavilion.status, PavilionStatus::Rented);
        assert_eq!(billings[0].pavilion.prepaid_until, None);
        // February is ledgered with the pre-reset utilities of the now-rented pavilion.
        assert_eq!(
            ledger[&(PavilionId::new(1), period(2026, 2))].expected_total,
            dec!(1080)
        );
        assert_eq!(billings[0].pavilion.utilities_amount, None);
    }

    #[test]
    fn test_invalid_pavilion_leaves_state_untouched() {
        let mut store = store(None);
        let mut broken = pavilion(1, PavilionStatus::Rented, None);
        broken.area = dec!(-5);
        let mut billings = vec![billing(broken)];
        let mut ledger = BTreeMap::new();

        let result = RolloverService::run_in_memory(
            &mut store,
            &mut billings,
            &[],
            &mut ledger,
            period(2026, 2),
        );

        assert!(result.is_err());
        assert_eq!(store.last_monthly_reset_period, None);
        assert!(ledger.is_empty());
        assert_eq!(billings[0].pavilion.utilities_amount, Some(dec!(80)));
    }
}
