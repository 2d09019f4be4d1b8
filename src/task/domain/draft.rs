//! Validated draft of a task before it is posted.

use super::{TaskDomainError, TaskType};
use crate::matching::Coordinates;
use serde::{Deserialize, Serialize};

/// A validated task draft: everything the client supplies when posting.
///
/// Title, budget, and timeframe must be non-empty after trimming;
/// description and location text are free-form, and structured
/// coordinates are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    title: String,
    description: String,
    location: String,
    coordinates: Option<Coordinates>,
    budget: String,
    timeframe: String,
    task_type: TaskType,
}

impl TaskDraft {
    /// Creates a validated draft from the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`],
    /// [`TaskDomainError::EmptyBudget`], or
    /// [`TaskDomainError::EmptyTimeframe`] when the corresponding field
    /// is empty after trimming.
    pub fn new(
        title: impl Into<String>,
        budget: impl Into<String>,
        timeframe: impl Into<String>,
        task_type: TaskType,
    ) -> Result<Self, TaskDomainError> {
        let title = non_empty(title.into(), TaskDomainError::EmptyTitle)?;
        let budget = non_empty(budget.into(), TaskDomainError::EmptyBudget)?;
        let timeframe = non_empty(timeframe.into(), TaskDomainError::EmptyTimeframe)?;
        Ok(Self {
            title,
            description: String::new(),
            location: String::new(),
            coordinates: None,
            budget,
            timeframe,
            task_type,
        })
    }

    /// Sets the free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the human-readable location text.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the structured coordinates.
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the human-readable location text.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the structured coordinates, if supplied.
    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Returns the budget text.
    #[must_use]
    pub fn budget(&self) -> &str {
        &self.budget
    }

    /// Returns the timeframe text.
    #[must_use]
    pub fn timeframe(&self) -> &str {
        &self.timeframe
    }

    /// Returns the engagement type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }
}

/// Trims a value and rejects it with `error` when nothing remains.
fn non_empty(raw: String, error: TaskDomainError) -> Result<String, TaskDomainError> {
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(error);
    }
    Ok(normalized.to_owned())
}
