//! Service and concurrency tests for the interest ledger.

mod ledger_tests;
