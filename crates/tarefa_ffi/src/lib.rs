//! Flutter-facing FFI crate for the Tarefa core.
//!
//! The generated FRB glue lives in the Flutter project; this crate only
//! declares the exported API surface.

pub mod api;
