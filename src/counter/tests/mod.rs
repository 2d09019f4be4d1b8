//! Unit and service tests for counter aggregation.
