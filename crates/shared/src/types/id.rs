//! Typed IDs for type-safe entity references.
//!
//! Every persisted entity is keyed by a database-assigned `BIGINT`. Wrapping
//! it prevents accidentally passing a `StoreId` where a `PavilionId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw database key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw database key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(StoreId, "Unique identifier for a store (property portfolio).");
typed_id!(PavilionId, "Unique identifier for a leasable pavilion.");
typed_id!(DiscountId, "Unique identifier for a pavilion discount.");
typed_id!(PaymentId, "Unique identifier for a monthly payment row.");
typed_id!(
    AdditionalChargeId,
    "Unique identifier for an additional charge."
);
typed_id!(
    AdditionalChargePaymentId,
    "Unique identifier for a payment against an additional charge."
);
typed_id!(LedgerId, "Unique identifier for a monthly ledger row.");
typed_id!(ExpenseId, "Unique identifier for a store or household expense.");
typed_id!(StaffId, "Unique identifier for a staff member.");
