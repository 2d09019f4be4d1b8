//! Domain model for task lifecycle management.
//!
//! The task domain models posting, validated status transitions,
//! assignment, and closing while keeping all infrastructure concerns
//! outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod status;
mod task;
mod task_type;

pub use draft::TaskDraft;
pub use error::{ParseTaskStatusError, ParseTaskTypeError, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
pub use task_type::TaskType;
