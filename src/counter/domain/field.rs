//! The vocabulary of counter fields carried on user and task records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived counter fields on a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserCounter {
    /// Tasks currently assigned and not yet closed, for either role.
    ActiveProjects,
    /// Assigned tasks the user has seen through to a close.
    CompletedProjects,
    /// Interest records the freelancer has authored.
    TasksApplied,
    /// Cumulative earnings recorded for the freelancer.
    TotalEarnings,
}

impl UserCounter {
    /// Returns the canonical storage field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActiveProjects => "active_projects",
            Self::CompletedProjects => "completed_projects",
            Self::TasksApplied => "tasks_applied",
            Self::TotalEarnings => "total_earnings",
        }
    }
}

impl fmt::Display for UserCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived counter fields on a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCounter {
    /// Live interest records referencing the task.
    InterestedCount,
}

impl TaskCounter {
    /// Returns the canonical storage field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InterestedCount => "interested_count",
        }
    }
}

impl fmt::Display for TaskCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
