//! Domain model for derived-counter aggregation.

mod adjustment;
mod field;

pub use adjustment::{CounterAdjustment, saturating_apply};
pub use field::{TaskCounter, UserCounter};
