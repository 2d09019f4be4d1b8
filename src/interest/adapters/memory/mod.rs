//! In-memory adapters for the interest ports.

mod interests;

pub use interests::InMemoryInterestRepository;
