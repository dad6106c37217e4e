//! Task collection primitives: id allocation, lookup, and mutations.
//!
//! # Responsibility
//! - Implement the per-task operations the service orchestrates.
//! - Enforce field-level invariants before any mutation is committed.
//!
//! # Invariants
//! - `allocate_id` keeps ids pairwise distinct under sequential use: it
//!   returns one more than the current maximum, never reusing a freed id.
//! - `edit_task` validates every supplied field before touching the task,
//!   so a failing update leaves the task untouched.
//! - `renumber_tasks` is the only operation allowed to reassign ids.

use crate::model::task::{parse_due_date, Priority, Task, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, TaskError>;

/// Domain error for task lookup and mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    NotFound(TaskId),
    InvalidPriority(String),
    InvalidDate(String),
    EmptyText,
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidPriority(value) => {
                write!(f, "invalid priority `{value}`; use low, medium, or high")
            }
            Self::InvalidDate(value) => {
                write!(f, "invalid due date `{value}`; use YYYY-MM-DD")
            }
            Self::EmptyText => write!(f, "task text cannot be empty"),
        }
    }
}

impl Error for TaskError {}

/// Completion result. `AlreadyDone` is a no-op, not an error: the task was
/// in the requested state before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    Completed,
    AlreadyDone,
}

/// Edit result. `NoChanges` means every supplied field validated but
/// matched the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Changed,
    NoChanges,
}

/// Bulk renumbering result. `Renumbered` carries the old→new id mapping
/// for confirmation messaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenumberOutcome {
    Empty,
    AlreadyCompact,
    Renumbered(Vec<(TaskId, TaskId)>),
}

/// Partial update for `edit_task`. Only fields explicitly supplied are
/// considered; an empty `due` string clears the due date.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub text: Option<String>,
    pub tag: Option<String>,
    pub priority: Option<String>,
    pub due: Option<String>,
}

/// Derives the next unique task identifier from the current collection.
///
/// Returns 1 for an empty collection, otherwise `max(existing ids) + 1`.
/// Only the current maximum is consulted; there is no separate counter, so
/// concurrent invocations can race (accepted, see the store module docs).
pub fn allocate_id(tasks: &[Task]) -> TaskId {
    tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1)
}

/// Linear lookup by exact id match.
pub fn find_task(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find(|task| task.id == id)
}

/// Sets `done = true` on the matching task.
///
/// Completing an already-done task succeeds as a no-op; it never reverts
/// or errors.
pub fn complete_task(tasks: &mut [Task], id: TaskId) -> RepoResult<CompleteOutcome> {
    let task = tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(TaskError::NotFound(id))?;

    if task.done {
        return Ok(CompleteOutcome::AlreadyDone);
    }
    task.done = true;
    Ok(CompleteOutcome::Completed)
}

/// Removes exactly one task and returns it for confirmation messaging.
pub fn delete_task(tasks: &mut Vec<Task>, id: TaskId) -> RepoResult<Task> {
    let index = tasks
        .iter()
        .position(|task| task.id == id)
        .ok_or(TaskError::NotFound(id))?;
    Ok(tasks.remove(index))
}

/// Applies a partial update to the matching task.
///
/// Atomic per call: every supplied field is validated before any field is
/// written, so an invalid priority or date leaves the task untouched.
/// Empty `text`/`tag` values are treated as not supplied; a supplied value
/// equal to the current one does not count as a change.
pub fn edit_task(tasks: &mut [Task], id: TaskId, edit: &TaskEdit) -> RepoResult<UpdateOutcome> {
    let task = tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(TaskError::NotFound(id))?;

    let new_priority = match edit.priority.as_deref() {
        Some(raw) => {
            Some(Priority::parse(raw).ok_or_else(|| TaskError::InvalidPriority(raw.to_string()))?)
        }
        None => None,
    };
    let new_due = match edit.due.as_deref() {
        // Explicit empty value clears the due date.
        Some("") => Some(None),
        Some(raw) => Some(Some(
            parse_due_date(raw).ok_or_else(|| TaskError::InvalidDate(raw.to_string()))?,
        )),
        None => None,
    };

    let mut changed = false;
    if let Some(text) = edit.text.as_deref() {
        if !text.is_empty() && text != task.text {
            task.text = text.to_string();
            changed = true;
        }
    }
    if let Some(tag) = edit.tag.as_deref() {
        if !tag.is_empty() && tag != task.tag {
            task.tag = tag.to_string();
            changed = true;
        }
    }
    if let Some(priority) = new_priority {
        if priority != task.priority {
            task.priority = priority;
            changed = true;
        }
    }
    if let Some(due) = new_due {
        if due != task.due {
            task.due = due;
            changed = true;
        }
    }

    Ok(if changed {
        UpdateOutcome::Changed
    } else {
        UpdateOutcome::NoChanges
    })
}

/// Reassigns every id to its 1-based rank in creation-time order.
///
/// One-time, user-invoked migration for collections whose ids were minted
/// from epoch timestamps. Sorts by `timestamp` ascending (tasks with the
/// epoch default sort first) and reports the old→new mapping. Collections
/// whose ids already equal their ranks come back `AlreadyCompact`.
pub fn renumber_tasks(tasks: &mut Vec<Task>) -> RenumberOutcome {
    if tasks.is_empty() {
        return RenumberOutcome::Empty;
    }

    // Stable sort: equal timestamps keep their stored order.
    tasks.sort_by_key(|task| task.timestamp);

    let mapping: Vec<(TaskId, TaskId)> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| (task.id, index as TaskId + 1))
        .collect();

    if mapping.iter().all(|(old, new)| old == new) {
        return RenumberOutcome::AlreadyCompact;
    }

    for (index, task) in tasks.iter_mut().enumerate() {
        task.id = index as TaskId + 1;
    }
    RenumberOutcome::Renumbered(mapping)
}
