//! Domain model for the task collection.
//!
//! # Responsibility
//! - Define the canonical task record persisted in the backing store.
//! - Provide the pure mutation validators used before any commit.
//!
//! # Invariants
//! - Every committed task has a `priority` inside {low, medium, high}.
//! - A present `due` value is always a real calendar date.
//! - `timestamp` is set once at creation and never mutated afterwards.

pub mod task;
