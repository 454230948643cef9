//! Calendar months and the injectable time source.

pub mod clock;
pub mod period;

pub use clock::{Clock, FixedClock, SystemClock};
pub use period::Period;
