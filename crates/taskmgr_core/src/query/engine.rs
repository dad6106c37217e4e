//! Filter, sort, and statistics implementation.
//!
//! # Invariants
//! - All supplied filter criteria are ANDed; predicates commute.
//! - Sorts are stable, so ties preserve stored order.
//! - Undated tasks sort after all dated tasks under the due-date key.

use crate::model::task::{Priority, Task};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Status criterion: `done` compared against a caller-supplied label,
/// where a case-insensitive "done" selects completed tasks and any other
/// label selects pending ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    Done,
}

impl StatusFilter {
    pub fn parse(value: &str) -> StatusFilter {
        if value.eq_ignore_ascii_case("done") {
            StatusFilter::Done
        } else {
            StatusFilter::Pending
        }
    }

    fn matches(self, task: &Task) -> bool {
        task.done == (self == StatusFilter::Done)
    }
}

/// Filter criteria for listing tasks. All supplied criteria are ANDed.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<StatusFilter>,
    /// Exact tag match.
    pub tag: Option<String>,
    pub priority: Option<Priority>,
    /// Due date present, not done, and strictly earlier than "today".
    pub overdue: bool,
    /// Case-insensitive substring match against task text.
    pub search: Option<String>,
}

/// Sort keys for listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Due date ascending; undated tasks after all dated tasks.
    Due,
    /// High before medium before low.
    Priority,
    /// Most recently created first.
    Created,
    /// Lexicographic by task text.
    Alphabetical,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<SortKey> {
        match value.trim().to_ascii_lowercase().as_str() {
            "due" => Some(SortKey::Due),
            "priority" => Some(SortKey::Priority),
            "created" => Some(SortKey::Created),
            "alphabetical" => Some(SortKey::Alphabetical),
            _ => None,
        }
    }
}

/// Pending-task counts per priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregate statistics over the full collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Non-empty tags with their counts, sorted by descending count, then
    /// by tag name for a deterministic display order.
    pub tags: Vec<(String, usize)>,
    pub pending_by_priority: PriorityCounts,
    /// `round(done / total × 100)`; `None` for an empty collection.
    pub completion_rate: Option<u8>,
}

/// Applies every supplied criterion, ANDed, against `today`.
pub fn filter_tasks(tasks: Vec<Task>, filter: &TaskFilter, today: NaiveDate) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| matches_filter(task, filter, today))
        .collect()
}

fn matches_filter(task: &Task, filter: &TaskFilter, today: NaiveDate) -> bool {
    if let Some(status) = filter.status {
        if !status.matches(task) {
            return false;
        }
    }
    if let Some(tag) = filter.tag.as_deref() {
        if task.tag != tag {
            return false;
        }
    }
    if let Some(priority) = filter.priority {
        if task.priority != priority {
            return false;
        }
    }
    if filter.overdue && !task.is_overdue(today) {
        return false;
    }
    if let Some(term) = filter.search.as_deref() {
        if !task.text.to_lowercase().contains(&term.to_lowercase()) {
            return false;
        }
    }
    true
}

/// Sorts in place by the requested key. Stable, so ties keep stored order.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::Due => tasks.sort_by(|a, b| due_order(a, b)),
        SortKey::Priority => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::Created => tasks.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortKey::Alphabetical => tasks.sort_by(|a, b| a.text.cmp(&b.text)),
    }
}

/// Default listing order: priority descending, then due date ascending
/// within equal priority.
pub fn default_order(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| due_order(a, b)));
}

fn due_order(a: &Task, b: &Task) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a.due, b.due) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
    }
}

/// Derives aggregate statistics in one pass over the collection.
pub fn collect_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let done = tasks.iter().filter(|task| task.done).count();
    let overdue = tasks.iter().filter(|task| task.is_overdue(today)).count();

    let mut tag_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for task in tasks {
        if !task.tag.is_empty() {
            *tag_counts.entry(task.tag.as_str()).or_default() += 1;
        }
    }
    let mut tags: Vec<(String, usize)> = tag_counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut pending_by_priority = PriorityCounts::default();
    for task in tasks.iter().filter(|task| !task.done) {
        match task.priority {
            Priority::High => pending_by_priority.high += 1,
            Priority::Medium => pending_by_priority.medium += 1,
            Priority::Low => pending_by_priority.low += 1,
        }
    }

    let completion_rate = if total == 0 {
        None
    } else {
        Some((done as f64 / total as f64 * 100.0).round() as u8)
    };

    TaskStats {
        total,
        done,
        pending: total - done,
        overdue,
        tags,
        pending_by_priority,
        completion_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::{SortKey, StatusFilter};

    #[test]
    fn status_filter_treats_only_done_as_done() {
        assert_eq!(StatusFilter::parse("done"), StatusFilter::Done);
        assert_eq!(StatusFilter::parse("DONE"), StatusFilter::Done);
        assert_eq!(StatusFilter::parse("pending"), StatusFilter::Pending);
        assert_eq!(StatusFilter::parse("anything"), StatusFilter::Pending);
    }

    #[test]
    fn sort_key_parse_accepts_known_labels_only() {
        assert_eq!(SortKey::parse("due"), Some(SortKey::Due));
        assert_eq!(SortKey::parse(" Priority "), Some(SortKey::Priority));
        assert_eq!(SortKey::parse("created"), Some(SortKey::Created));
        assert_eq!(SortKey::parse("alphabetical"), Some(SortKey::Alphabetical));
        assert_eq!(SortKey::parse("deadline"), None);
    }
}
