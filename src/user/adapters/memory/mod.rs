//! In-memory adapters for the user ports.

mod users;

pub use users::InMemoryUserRepository;
