//! Task record and field validators.
//!
//! # Responsibility
//! - Define the `Task` shape serialized into the backing JSON document.
//! - Keep priority/date validation pure and side-effect free.
//!
//! # Invariants
//! - `id` is assigned by the allocator and never reused, except by the
//!   explicit bulk renumbering operation.
//! - `due` is stored as a typed calendar date, so its serialized form is
//!   always canonical `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Sequential, human-facing task identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date shape regex"));

/// Task urgency level.
///
/// Declaration order doubles as the sort rank: `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parses a priority label, case-insensitively.
    ///
    /// Returns `None` for anything outside {low, medium, high}; callers
    /// decide whether that is an error or a default.
    pub fn parse(value: &str) -> Option<Priority> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    /// Canonical lowercase label, matching the persisted form.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of work tracked by the system.
///
/// Field order matches the persisted JSON document. Optional metadata
/// defaults keep hand-edited or legacy files loadable: a missing `tag` is
/// untagged, a missing `priority` is low, a missing `timestamp` sorts as
/// the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
    /// Empty string means "untagged".
    #[serde(default)]
    pub tag: String,
    /// `None` means "no deadline".
    #[serde(default)]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    /// Creation instant. Set once, used only for ordering and reporting.
    #[serde(default = "unix_epoch")]
    pub timestamp: DateTime<Utc>,
}

impl Task {
    /// Creates a task with default metadata and the current instant as its
    /// creation timestamp.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
            tag: String::new(),
            due: None,
            priority: Priority::default(),
            timestamp: Utc::now(),
        }
    }

    /// Whether this task has a deadline strictly before `today` and is not
    /// done yet.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due {
            Some(due) => !self.done && due < today,
            None => false,
        }
    }
}

/// Validates and parses a due date string.
///
/// Both conditions are required: the input must match the literal
/// `YYYY-MM-DD` shape AND name a real calendar date. A parseable but
/// differently formatted string (for example `2025-1-1`) is rejected.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}
