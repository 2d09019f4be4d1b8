//! Unit and service tests for the user context.

mod service_tests;
