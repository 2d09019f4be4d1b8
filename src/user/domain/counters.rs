//! Derived project counters carried on each user record.

use crate::counter::domain::UserCounter;
use serde::{Deserialize, Serialize};

/// The derived counters on a user record.
///
/// All counters start at zero at registration and are mutated only by
/// the counter aggregation service; they can never go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCounters {
    active_projects: u64,
    completed_projects: u64,
    tasks_applied: u64,
    total_earnings: u64,
}

impl ProjectCounters {
    /// Creates counters with every field at zero.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            active_projects: 0,
            completed_projects: 0,
            tasks_applied: 0,
            total_earnings: 0,
        }
    }

    /// Returns the value of the given counter field.
    #[must_use]
    pub const fn get(self, counter: UserCounter) -> u64 {
        match counter {
            UserCounter::ActiveProjects => self.active_projects,
            UserCounter::CompletedProjects => self.completed_projects,
            UserCounter::TasksApplied => self.tasks_applied,
            UserCounter::TotalEarnings => self.total_earnings,
        }
    }

    /// Overwrites the value of the given counter field.
    pub(crate) const fn set(&mut self, counter: UserCounter, value: u64) {
        match counter {
            UserCounter::ActiveProjects => self.active_projects = value,
            UserCounter::CompletedProjects => self.completed_projects = value,
            UserCounter::TasksApplied => self.tasks_applied = value,
            UserCounter::TotalEarnings => self.total_earnings = value,
        }
    }
}
