//! Authoritative task sequence with a persisted mirror.
//!
//! # Responsibility
//! - Apply add/edit/remove mutations to the in-memory ordered sequence.
//! - Serialize the full sequence to the persisted slot after every mutation.
//!
//! # Invariants
//! - Insertion order is preserved; duplicate tasks are permitted.
//! - Slot writes happen in mutation order on the mutating call, so the
//!   persisted state never regresses to an earlier sequence.
//! - Load failures degrade to an empty sequence, never to an error surface.

use crate::model::date::TaskDate;
use crate::model::task::{Task, TaskId};
use crate::repo::slot_repo::SlotStore;
use log::{info, warn};

/// Slot key holding the serialized task array.
///
/// Matches the key the original device storage used, so existing data is
/// picked up unchanged.
pub const TASKS_SLOT_KEY: &str = "tasks";

/// Task store owning the ordered task sequence and its persistence.
pub struct TaskStore<S: SlotStore> {
    slot: S,
    tasks: Vec<Task>,
}

impl<S: SlotStore> TaskStore<S> {
    /// Creates a store over the given backend with an empty sequence.
    ///
    /// Call [`TaskStore::load`] once at startup to adopt persisted state,
    /// or use [`TaskStore::open`] which does both.
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            tasks: Vec::new(),
        }
    }

    /// Creates a store and immediately loads persisted state.
    pub fn open(slot: S) -> Self {
        let mut store = Self::new(slot);
        store.load();
        store
    }

    /// Replaces the in-memory sequence with the persisted one.
    ///
    /// Absent or unparsable slot data initializes an empty sequence; a read
    /// failure is treated as "no prior data". No retry, no user-visible
    /// error.
    pub fn load(&mut self) {
        self.tasks = match self.slot.read(TASKS_SLOT_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Task>>(&payload) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!("event=tasks_load module=store status=malformed error={err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=tasks_load module=store status=read_failed error={err}");
                Vec::new()
            }
        };
        info!(
            "event=tasks_load module=store status=ok count={}",
            self.tasks.len()
        );
    }

    /// Read access to the current sequence for the view layer.
    ///
    /// The view re-renders from this slice after each mutation; it must not
    /// retain it across mutations.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a new task and mirrors the sequence to the slot.
    ///
    /// The store is intentionally permissive: empty text is accepted, and
    /// text length limits belong to the input surface.
    pub fn add(&mut self, text: impl Into<String>, date: Option<TaskDate>) -> Task {
        let task = Task::new(text, date);
        self.tasks.push(task.clone());
        self.persist();
        task
    }

    /// Replaces the text of the task with the given id, keeping its date.
    ///
    /// Returns `false` (and leaves the sequence and slot untouched) when no
    /// task has that id.
    pub fn edit(&mut self, id: TaskId, new_text: impl Into<String>) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.text = new_text.into();
        self.persist();
        true
    }

    /// Removes the task with the given id.
    ///
    /// Returns `false` (and leaves the sequence and slot untouched) when no
    /// task has that id.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        self.persist();
        true
    }

    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.tasks) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=tasks_persist module=store status=serialize_failed error={err}");
                return;
            }
        };

        // Fire-and-forget: one retry, then drop. The next mutation writes
        // the full sequence again, so a lost write self-heals.
        for attempt in 1..=2 {
            match self.slot.write(TASKS_SLOT_KEY, &payload) {
                Ok(()) => return,
                Err(err) => warn!(
                    "event=tasks_persist module=store status=write_failed attempt={attempt} error={err}"
                ),
            }
        }
    }
}
