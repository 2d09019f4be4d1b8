//! The two task engagement types.

use super::ParseTaskTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How freelancers engage with a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// First-come-first-served: a freelancer accepts the task directly.
    Instant,
    /// Interest-then-select: freelancers register interest and the
    /// client picks one.
    Discuss,
}

impl TaskType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Discuss => "discuss",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "instant" => Ok(Self::Instant),
            "discuss" => Ok(Self::Discuss),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}
