//! Task use-case service.
//!
//! # Responsibility
//! - Provide the operation entry points callers use: create, get, list,
//!   search, complete, delete, update, stats, renumber, snapshot.
//! - Run every mutating operation as load → validate/mutate → save, and
//!   skip the save when nothing changed.
//!
//! # Invariants
//! - Validation is uniform: create and edit apply the same priority and
//!   due-date rules.
//! - The service never claims success after a failed save.

use crate::model::task::{parse_due_date, Priority, Task, TaskId};
use crate::query::engine::{
    collect_stats, default_order, filter_tasks, sort_tasks, SortKey, TaskFilter, TaskStats,
};
use crate::repo::task_repo::{
    allocate_id, complete_task, delete_task, edit_task, find_task, renumber_tasks,
    CompleteOutcome, RenumberOutcome, TaskEdit, TaskError, UpdateOutcome,
};
use crate::store::{StoreError, TaskStore};
use chrono::{Local, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// The one error type service callers see.
#[derive(Debug)]
pub enum ServiceError {
    /// Domain failure: reported to the user, invocation exits cleanly.
    Task(TaskError),
    /// Persistence failure: fatal on the save side.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Task(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<TaskError> for ServiceError {
    fn from(value: TaskError) -> Self {
        Self::Task(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Request model for creating a task from already-parsed arguments.
///
/// `tag`, `due`, and `priority` arrive as plain strings or absent, exactly
/// as the dispatcher hands them over; validation happens here, not there.
#[derive(Debug, Clone, Default)]
pub struct CreateTaskRequest {
    pub text: String,
    pub tag: Option<String>,
    pub due: Option<String>,
    pub priority: Option<String>,
}

/// Use-case service over a task store.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a task and persists the grown collection.
    ///
    /// # Contract
    /// - `text` must be non-empty after trimming.
    /// - `priority` must parse when supplied; absent means low.
    /// - `due` must be a valid `YYYY-MM-DD` date when supplied.
    /// - The id comes from the allocator; the timestamp is the current
    ///   instant.
    pub fn create(&self, request: &CreateTaskRequest) -> ServiceResult<Task> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText.into());
        }
        let priority = match request.priority.as_deref() {
            Some(raw) => {
                Priority::parse(raw).ok_or_else(|| TaskError::InvalidPriority(raw.to_string()))?
            }
            None => Priority::default(),
        };
        let due = match request.due.as_deref() {
            None | Some("") => None,
            Some(raw) => {
                Some(parse_due_date(raw).ok_or_else(|| TaskError::InvalidDate(raw.to_string()))?)
            }
        };

        let mut tasks = self.store.load()?;
        let mut task = Task::new(allocate_id(&tasks), text);
        task.tag = request.tag.clone().unwrap_or_default();
        task.due = due;
        task.priority = priority;

        tasks.push(task.clone());
        self.store.save(&tasks)?;
        info!(
            "event=task_create module=service status=ok id={} priority={}",
            task.id, task.priority
        );
        Ok(task)
    }

    /// Gets one task by id, or `None` when absent.
    pub fn get(&self, id: TaskId) -> ServiceResult<Option<Task>> {
        let tasks = self.store.load()?;
        Ok(find_task(&tasks, id).cloned())
    }

    /// Lists tasks matching `filter`, sorted by `sort` or, when absent, by
    /// the default order (priority descending, due date ascending within
    /// equal priority).
    pub fn list(&self, filter: &TaskFilter, sort: Option<SortKey>) -> ServiceResult<Vec<Task>> {
        let tasks = self.store.load()?;
        let mut matched = filter_tasks(tasks, filter, today());
        match sort {
            Some(key) => sort_tasks(&mut matched, key),
            None => default_order(&mut matched),
        }
        Ok(matched)
    }

    /// Case-insensitive substring search over task text, in stored order.
    pub fn search(&self, term: &str) -> ServiceResult<Vec<Task>> {
        let filter = TaskFilter {
            search: Some(term.to_string()),
            ..TaskFilter::default()
        };
        let tasks = self.store.load()?;
        Ok(filter_tasks(tasks, &filter, today()))
    }

    /// Marks a task done. Completing an already-done task is a reported
    /// no-op, never an error, and does not rewrite the store.
    pub fn complete(&self, id: TaskId) -> ServiceResult<CompleteOutcome> {
        let mut tasks = self.store.load()?;
        let outcome = complete_task(&mut tasks, id)?;
        if outcome == CompleteOutcome::Completed {
            self.store.save(&tasks)?;
            info!("event=task_complete module=service status=ok id={id}");
        }
        Ok(outcome)
    }

    /// Deletes a task and returns the removed record.
    pub fn delete(&self, id: TaskId) -> ServiceResult<Task> {
        let mut tasks = self.store.load()?;
        let removed = delete_task(&mut tasks, id)?;
        self.store.save(&tasks)?;
        info!("event=task_delete module=service status=ok id={id}");
        Ok(removed)
    }

    /// Applies a partial update. A validated edit that changes nothing is
    /// a reported no-op and does not rewrite the store.
    pub fn update(&self, id: TaskId, edit: &TaskEdit) -> ServiceResult<UpdateOutcome> {
        let mut tasks = self.store.load()?;
        let outcome = edit_task(&mut tasks, id, edit)?;
        if outcome == UpdateOutcome::Changed {
            self.store.save(&tasks)?;
            info!("event=task_update module=service status=ok id={id}");
        }
        Ok(outcome)
    }

    /// Derives aggregate statistics for the whole collection.
    pub fn stats(&self) -> ServiceResult<TaskStats> {
        let tasks = self.store.load()?;
        Ok(collect_stats(&tasks, today()))
    }

    /// Reassigns all ids to compact, creation-ordered sequential values.
    pub fn renumber(&self) -> ServiceResult<RenumberOutcome> {
        let mut tasks = self.store.load()?;
        let outcome = renumber_tasks(&mut tasks);
        if let RenumberOutcome::Renumbered(mapping) = &outcome {
            self.store.save(&tasks)?;
            info!(
                "event=task_renumber module=service status=ok count={}",
                mapping.len()
            );
        }
        Ok(outcome)
    }

    /// Full collection in stored order, for exporters.
    pub fn snapshot(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.store.load()?)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
