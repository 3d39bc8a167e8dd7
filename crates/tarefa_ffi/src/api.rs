//! FFI use-case API for the mobile view layer.
//!
//! # Responsibility
//! - Expose the task-store contract to Dart via FRB.
//! - Apply input-surface validation before mutating the store.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The store is loaded once per process and stays authoritative in memory;
//!   every mutation mirrors the sequence to device storage.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tarefa_core::db::open_db;
use tarefa_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    MemorySlotStore, SlotError, SlotStore, SqliteSlotStore, Task, TaskDate, TaskId, TaskStore,
    MAX_TASK_TEXT_CHARS,
};
use uuid::Uuid;

const DB_FILE_NAME: &str = "tarefa.sqlite3";

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static STORE: OnceLock<Mutex<TaskStore<Box<dyn SlotStore + Send>>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task record exposed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Stable task id in string form.
    pub id: String,
    /// User-entered task text.
    pub text: String,
    /// Calendar date (`YYYY-MM-DD`), present only for calendar-created tasks.
    pub date: Option<String>,
}

/// Generic action response envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation changed the sequence.
    pub ok: bool,
    /// Id of the affected task, when one was affected.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: String) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Returns the current task sequence in insertion order.
///
/// # FFI contract
/// - Sync call; loads persisted state on first touch.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list() -> Vec<TaskView> {
    store().tasks().iter().map(to_task_view).collect()
}

/// Adds a task, optionally scheduled on a calendar day.
///
/// Input-surface validation lives here, matching the app's input widgets:
/// blank text is rejected, text is capped at 25 characters, and `date` must
/// be a `YYYY-MM-DD` string. The store itself stays permissive.
///
/// # FFI contract
/// - Sync call; mirrors the sequence to device storage on success.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(text: String, date: Option<String>) -> TaskActionResponse {
    let text = text.trim().to_string();
    if let Err(message) = validate_text(&text) {
        return TaskActionResponse::failure(message);
    }

    let date = match date {
        Some(raw) => match TaskDate::parse(raw.trim()) {
            Ok(parsed) => Some(parsed),
            Err(err) => return TaskActionResponse::failure(err.to_string()),
        },
        None => None,
    };

    let task = store().add(text, date);
    TaskActionResponse::success("Task added.", task.id.to_string())
}

/// Replaces the text of an existing task, keeping its date.
///
/// # FFI contract
/// - Sync call; unknown ids leave the sequence unchanged and report
///   `ok=false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit(id: String, new_text: String) -> TaskActionResponse {
    let Some(task_id) = parse_task_id(&id) else {
        return TaskActionResponse::failure(format!("invalid task id: `{id}`"));
    };

    let new_text = new_text.trim().to_string();
    if let Err(message) = validate_text(&new_text) {
        return TaskActionResponse::failure(message);
    }

    if store().edit(task_id, new_text) {
        TaskActionResponse::success("Task updated.", id)
    } else {
        TaskActionResponse::failure("Task no longer exists.")
    }
}

/// Removes a task from the sequence.
///
/// # FFI contract
/// - Sync call; unknown ids leave the sequence unchanged and report
///   `ok=false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_remove(id: String) -> TaskActionResponse {
    let Some(task_id) = parse_task_id(&id) else {
        return TaskActionResponse::failure(format!("invalid task id: `{id}`"));
    };

    if store().remove(task_id) {
        TaskActionResponse::success("Task removed.", id)
    } else {
        TaskActionResponse::failure("Task no longer exists.")
    }
}

fn validate_text(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Please enter a task.".to_string());
    }
    if text.chars().count() > MAX_TASK_TEXT_CHARS {
        return Err(format!(
            "Task text is limited to {MAX_TASK_TEXT_CHARS} characters."
        ));
    }
    Ok(())
}

fn parse_task_id(id: &str) -> Option<TaskId> {
    Uuid::parse_str(id.trim()).ok()
}

fn to_task_view(task: &Task) -> TaskView {
    TaskView {
        id: task.id.to_string(),
        text: task.text.clone(),
        date: task.date.as_ref().map(|date| date.as_str().to_string()),
    }
}

fn store() -> MutexGuard<'static, TaskStore<Box<dyn SlotStore + Send>>> {
    let mutex = STORE.get_or_init(|| Mutex::new(TaskStore::open(open_slot_store())));
    match mutex.lock() {
        Ok(guard) => guard,
        // All callers arrive from the single UI thread; a poisoned lock can
        // only mean a previous call panicked mid-mutation, and the sequence
        // itself is still usable.
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn open_slot_store() -> Box<dyn SlotStore + Send> {
    let db_path = resolve_db_path();
    let opened = open_db(db_path)
        .map_err(SlotError::from)
        .and_then(SqliteSlotStore::try_new);
    match opened {
        Ok(slot) => Box::new(slot),
        Err(err) => {
            // Storage failure must not surface to the user; the session
            // continues against an in-memory slot.
            log::error!("event=store_open module=ffi status=fallback_memory error={err}");
            Box::new(MemorySlotStore::new())
        }
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TAREFA_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}
