//! In-memory adapters for the task ports.

mod tasks;

pub use tasks::InMemoryTaskRepository;
