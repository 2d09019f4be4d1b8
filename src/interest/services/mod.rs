//! Application services for the interest ledger.

mod ledger;

pub use ledger::{InterestLedgerError, InterestLedgerResult, InterestLedgerService};
