//! Unit, service, and concurrency tests for the task context.

mod service_tests;
mod support;
