//! Query engine: filtering, sorting, and aggregate statistics.
//!
//! # Responsibility
//! - Shape read-side views of the collection without mutating it.
//! - Keep "current date" an explicit input so time-dependent predicates
//!   stay deterministic under test.

pub mod engine;
