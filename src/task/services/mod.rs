//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    PostTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
