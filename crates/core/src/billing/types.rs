//! Billing domain types.

use chrono::{DateTime, NaiveDate, Utc};
use pavilio_shared::types::{AdditionalChargeId, DiscountId, PavilionId, StoreId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::round_money;
use crate::calendar::Period;

/// Occupancy status of a pavilion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PavilionStatus {
    /// Vacant, nothing is billed.
    Available,
    /// Leased and billed monthly.
    Rented,
    /// Leased with rent paid in advance until `prepaid_until`.
    Prepaid,
}

impl PavilionStatus {
    /// Returns true if a tenant occupies the pavilion.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Self::Rented | Self::Prepaid)
    }
}

/// A leasable unit within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pavilion {
    /// Pavilion ID.
    pub id: PavilionId,
    /// Owning store.
    pub store_id: StoreId,
    /// Display name (e.g., "A-12").
    pub name: String,
    /// Area in square meters.
    pub area: Decimal,
    /// Monthly rent per square meter.
    pub price_per_sqm: Decimal,
    /// Current status.
    pub status: PavilionStatus,
    /// Tenant name, if leased.
    pub tenant_name: Option<String>,
    /// Utilities billed this month. `None` until entered.
    pub utilities_amount: Option<Decimal>,
    /// Advertising billed this month. `None` until entered.
    pub advertising_amount: Option<Decimal>,
    /// Last prepaid day. Set iff status is `Prepaid`.
    pub prepaid_until: Option<NaiveDate>,
}

impl Pavilion {
    /// Undiscounted monthly rent: area × price per m², rounded to cents.
    #[must_use]
    pub fn base_rent(&self) -> Decimal {
        round_money(self.area * self.price_per_sqm)
    }
}

/// Per-m² discount over a date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Discount ID.
    pub id: DiscountId,
    /// Discounted pavilion.
    pub pavilion_id: PavilionId,
    /// Amount per m² per month.
    pub amount: Decimal,
    /// First day of the window.
    pub starts_at: NaiveDate,
    /// Last day of the window; `None` means open-ended.
    pub ends_at: Option<NaiveDate>,
    /// Free-form note.
    pub note: Option<String>,
}

impl Discount {
    /// Returns true if the discount window overlaps the calendar month.
    ///
    /// A window touching the month on any day applies in full; there is no
    /// pro-rating.
    #[must_use]
    pub fn is_active_in(&self, period: Period) -> bool {
        self.starts_at <= period.end() && self.ends_at.is_none_or(|ends| ends >= period.start())
    }
}

/// A named one-off charge on a pavilion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalCharge {
    /// Charge ID.
    pub id: AdditionalChargeId,
    /// Charged pavilion.
    pub pavilion_id: PavilionId,
    /// Charge name (e.g., "Signage repair").
    pub name: String,
    /// Amount due.
    pub amount: Decimal,
    /// Creation instant; the charge is billed in this month.
    pub created_at: DateTime<Utc>,
}

impl AdditionalCharge {
    /// Returns true if the charge is billed in `period`.
    #[must_use]
    pub fn is_billed_in(&self, period: Period) -> bool {
        period.contains_instant(self.created_at)
    }
}

/// A pavilion together with the records its monthly bill depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PavilionBilling {
    /// The pavilion.
    pub pavilion: Pavilion,
    /// All discounts, active or not.
    pub discounts: Vec<Discount>,
    /// All additional charges.
    pub additional_charges: Vec<AdditionalCharge>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn discount(starts_at: NaiveDate, ends_at: Option<NaiveDate>) -> Discount {
        Discount {
            id: DiscountId::new(1),
            pavilion_id: PavilionId::new(1),
            amount: dec!(5),
            starts_at,
            ends_at,
            note: None,
        }
    }

    #[test]
    fn test_discount_window_spans_two_months() {
        let d = discount(date(2026, 1, 15), Some(date(2026, 2, 20)));
        assert!(d.is_active_in(Period::from_ym(2026, 1).unwrap()));
        assert!(d.is_active_in(Period::from_ym(2026, 2).unwrap()));
        assert!(!d.is_active_in(Period::from_ym(2026, 3).unwrap()));
        assert!(!d.is_active_in(Period::from_ym(2025, 12).unwrap()));
    }

    #[test]
    fn test_open_ended_discount_stays_active() {
        let d = discount(date(2026, 1, 15), None);
        assert!(d.is_active_in(Period::from_ym(2026, 1).unwrap()));
        assert!(d.is_active_in(Period::from_ym(2030, 7).unwrap()));
    }

    #[test]
    fn test_discount_ending_before_month_start_is_inactive() {
        let d = discount(date(2025, 10, 1), Some(date(2025, 12, 31)));
        assert!(!d.is_active_in(Period::from_ym(2026, 1).unwrap()));
        assert!(!d.is_active_in(Period::from_ym(2026, 2).unwrap()));
    }

    #[test]
    fn test_discount_ending_on_month_start_applies() {
        let d = discount(date(2025, 10, 1), Some(date(2026, 1, 1)));
        assert!(d.is_active_in(Period::from_ym(2026, 1).unwrap()));
    }

    #[test]
    fn test_status_occupancy() {
        assert!(PavilionStatus::Rented.is_occupied());
        assert!(PavilionStatus::Prepaid.is_occupied());
        assert!(!PavilionStatus::Available.is_occupied());
    }

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&PavilionStatus::Prepaid).unwrap(),
            "\"PREPAID\""
        );
    }
}
