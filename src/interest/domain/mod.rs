//! Domain model for the interest ledger.

mod interest;

pub use interest::{Interest, InterestId};
