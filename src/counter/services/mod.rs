//! Application service for counter aggregation.

mod aggregator;

pub use aggregator::{CounterAggregator, CounterError, CounterResult};
