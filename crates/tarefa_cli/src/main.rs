//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tarefa_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tarefa_core::{MemorySlotStore, TaskStore};

fn main() {
    println!("tarefa_core ping={}", tarefa_core::ping());
    println!("tarefa_core version={}", tarefa_core::core_version());

    // Exercise add/persist against the in-memory backend so the probe covers
    // store wiring without touching device storage.
    let mut store = TaskStore::open(MemorySlotStore::new());
    let task = store.add("smoke task", None);
    println!("tarefa_core smoke_add={}", store.get(task.id).is_some());
}
