//! Giglocal: local-task marketplace core.
//!
//! This crate implements the correctness-critical core of a marketplace
//! matching task-posting clients with freelancers: the task lifecycle
//! state machine, the interest ledger, derived counter aggregation, and
//! proximity ranking. Page rendering, authentication, and the concrete
//! remote store are external collaborators consumed through ports.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//! - **Services**: Orchestration over domain and ports
//!
//! # Modules
//!
//! - [`matching`]: Coordinates, great-circle distance, proximity ranking
//! - [`user`]: User accounts, fixed roles, actor context
//! - [`counter`]: Atomic derived-counter aggregation
//! - [`task`]: Task lifecycle state machine and operations
//! - [`interest`]: Interest ledger for discuss-type tasks

pub mod counter;
pub mod interest;
pub mod matching;
pub mod task;
pub mod user;
