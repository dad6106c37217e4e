//! Core domain logic for taskmgr.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::task::{parse_due_date, Priority, Task, TaskId};
pub use query::engine::{
    collect_stats, default_order, filter_tasks, sort_tasks, PriorityCounts, SortKey, StatusFilter,
    TaskFilter, TaskStats,
};
pub use repo::task_repo::{
    allocate_id, find_task, CompleteOutcome, RenumberOutcome, TaskEdit, TaskError, UpdateOutcome,
};
pub use service::task_service::{CreateTaskRequest, ServiceError, ServiceResult, TaskService};
pub use store::{JsonStore, MemStore, StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
