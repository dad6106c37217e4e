//! In-memory store for tests and embedding.

use super::{StoreResult, TaskStore};
use crate::model::task::Task;
use std::cell::RefCell;

/// `TaskStore` backed by process memory. Single-threaded by design, like
/// every invocation of the tool.
#[derive(Default)]
pub struct MemStore {
    tasks: RefCell<Vec<Task>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the store pre-populated, for scenarios that need existing
    /// state (renumbering, hand-crafted ids).
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
        }
    }
}

impl TaskStore for MemStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
