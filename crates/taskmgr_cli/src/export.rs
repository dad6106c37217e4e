//! Export writers: JSON, Markdown, and CSV.
//!
//! # Responsibility
//! - Serialize a task snapshot into the three supported file formats.
//!
//! The JSON export reuses the core model's serde layout, so an exported
//! array is indistinguishable from the persisted document.

use std::fs;
use std::io;
use taskmgr_core::{Priority, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Csv,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<ExportFormat> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "md" | "markdown" => Some(ExportFormat::Markdown),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Writes `<output>.<ext>` and returns the file name.
pub fn write_export(tasks: &[Task], format: ExportFormat, output: &str) -> io::Result<String> {
    let filename = format!("{output}.{}", format.extension());
    let body = match format {
        ExportFormat::Json => render_json(tasks)?,
        ExportFormat::Markdown => render_markdown(tasks),
        ExportFormat::Csv => render_csv(tasks),
    };
    fs::write(&filename, body)?;
    Ok(filename)
}

fn render_json(tasks: &[Task]) -> io::Result<String> {
    serde_json::to_string_pretty(tasks).map_err(io::Error::from)
}

/// Checklist grouped by status: pending tasks first, then completed ones.
/// Tag renders as `(#tag)`, non-low priority as `[PRIORITY]`, due date as
/// a `- Due:` suffix.
fn render_markdown(tasks: &[Task]) -> String {
    let mut md = String::from("# Task List\n\n");

    let pending: Vec<&Task> = tasks.iter().filter(|task| !task.done).collect();
    let done: Vec<&Task> = tasks.iter().filter(|task| task.done).collect();

    if !pending.is_empty() {
        md.push_str("## Pending Tasks\n\n");
        for task in &pending {
            md.push_str(&format!(
                "- [ ] {}{}{}{}\n",
                task.text,
                tag_suffix(task),
                priority_suffix(task),
                due_suffix(task)
            ));
        }
        md.push('\n');
    }

    if !done.is_empty() {
        md.push_str("## Completed Tasks\n\n");
        for task in &done {
            md.push_str(&format!("- [x] {}{}\n", task.text, tag_suffix(task)));
        }
    }

    md
}

fn render_csv(tasks: &[Task]) -> String {
    let header = "ID,Text,Done,Tag,Priority,Due Date,Created\n";
    let rows: Vec<String> = tasks
        .iter()
        .map(|task| {
            format!(
                "{},\"{}\",{},{},{},{},{}",
                task.id,
                task.text.replace('"', "\"\""),
                if task.done { "Yes" } else { "No" },
                task.tag,
                task.priority,
                task.due.map(|due| due.to_string()).unwrap_or_default(),
                task.timestamp.date_naive()
            )
        })
        .collect();
    format!("{header}{}", rows.join("\n"))
}

fn tag_suffix(task: &Task) -> String {
    if task.tag.is_empty() {
        String::new()
    } else {
        format!(" (#{})", task.tag)
    }
}

fn priority_suffix(task: &Task) -> String {
    if task.priority == Priority::Low {
        String::new()
    } else {
        format!(" [{}]", task.priority.as_str().to_uppercase())
    }
}

fn due_suffix(task: &Task) -> String {
    match task.due {
        Some(due) => format!(" - Due: {due}"),
        None => String::new(),
    }
}
