//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record owned by the task store.
//! - Keep the persisted slot shape stable across app generations.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `date` is set only for tasks that originate from the calendar view.

use crate::model::date::TaskDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Maximum task text length accepted by the input surface, in characters.
///
/// Enforced by the view-facing layer only; the store stays permissive so
/// data loaded from older slots is never rejected.
pub const MAX_TASK_TEXT_CHARS: usize = 25;

/// A single to-do item with text and an optional calendar date.
///
/// Slots written by earlier app generations carry no `id`; such records are
/// adopted on load with a freshly generated one, preserving text, date and
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used by edit/remove addressing.
    #[serde(default = "Uuid::new_v4")]
    pub id: TaskId,
    /// User-entered task text.
    pub text: String,
    /// Calendar day, present only for calendar-created tasks.
    #[serde(default)]
    pub date: Option<TaskDate>,
}

impl Task {
    /// Creates a new task with a generated stable id.
    pub fn new(text: impl Into<String>, date: Option<TaskDate>) -> Self {
        Self::with_id(Uuid::new_v4(), text, date)
    }

    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by load/import paths where identity already exists.
    pub fn with_id(id: TaskId, text: impl Into<String>, date: Option<TaskDate>) -> Self {
        Self {
            id,
            text: text.into(),
            date,
        }
    }

    /// Returns whether this task was created from the calendar view.
    pub fn is_scheduled(&self) -> bool {
        self.date.is_some()
    }
}
