//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract the task store persists through.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`UninitializedConnection`,
//!   `MissingRequiredTable`) in addition to DB transport errors.

pub mod slot_repo;
