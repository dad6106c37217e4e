//! Terminal rendering.
//!
//! # Responsibility
//! - Turn core data and outcome signals into colored console output.
//!
//! The core emits no formatted text itself; every icon, color, and message
//! lives here.

use colored::Colorize;
use taskmgr_core::{
    CompleteOutcome, Priority, RenumberOutcome, StoreError, Task, TaskError, TaskStats,
    UpdateOutcome,
};

pub fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

pub fn format_task(task: &Task) -> String {
    let status = if task.done {
        "✅".to_string()
    } else {
        "⏳".to_string()
    };
    let mut line = format!(
        "{} {} {}",
        format!("ID: {}", task.id).cyan(),
        status,
        task.text.white()
    );
    if !task.tag.is_empty() {
        line.push_str(&format!(" {}", format!("[{}]", task.tag).yellow()));
    }
    if let Some(due) = task.due {
        line.push_str(&format!(" {}", format!("(Due: {due})").blue()));
    }
    line.push_str(&format!(" {}", priority_icon(task.priority)));
    line
}

pub fn print_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{}", "No matching tasks found.".dimmed());
        return;
    }
    for task in tasks {
        println!("{}", format_task(task));
    }
}

pub fn print_search(term: &str, tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{} {}", "No tasks found for:".dimmed(), term.white());
        return;
    }
    for task in tasks {
        let status = if task.done { "✅" } else { "⏳" };
        let mut line = format!(
            "{} {} {}",
            format!("ID: {}", task.id).cyan(),
            status,
            task.text.white()
        );
        if !task.tag.is_empty() {
            line.push_str(&format!(" {}", format!("[{}]", task.tag).yellow()));
        }
        println!(
            "{line} - {}",
            task.timestamp.to_rfc3339().dimmed()
        );
    }
}

pub fn print_stats(stats: &TaskStats) {
    println!("{}", format!("📋 Total: {}", stats.total).blue());
    println!("{}", format!("✅ Done: {}", stats.done).green());
    println!("{}", format!("⏳ Pending: {}", stats.pending).red());
    if stats.overdue > 0 {
        println!("{}", format!("⚠️  Overdue: {}", stats.overdue).magenta());
    }
    if let Some(rate) = stats.completion_rate {
        println!("{}", format!("📈 Completion rate: {rate}%").cyan());
    }

    if stats.pending > 0 {
        println!("\n{}", "🔺 Pending by Priority:".yellow());
        println!(
            "  High: {} {}",
            stats.pending_by_priority.high,
            priority_icon(Priority::High)
        );
        println!(
            "  Medium: {} {}",
            stats.pending_by_priority.medium,
            priority_icon(Priority::Medium)
        );
        println!(
            "  Low: {} {}",
            stats.pending_by_priority.low,
            priority_icon(Priority::Low)
        );
    }

    if !stats.tags.is_empty() {
        println!("\n{}", "🏷️  By Tags:".yellow());
        for (tag, count) in &stats.tags {
            println!("  {tag}: {count}");
        }
    }
}

pub fn task_added(task: &Task) {
    println!("{} {}", "✅ Task added!".green(), task.text.white());
    if let Some(due) = task.due {
        println!("{} {}", "📅 Due:".blue(), due.to_string().white());
    }
    println!(
        "{} {}",
        "🔺 Priority:".magenta(),
        task.priority.as_str().white()
    );
}

pub fn complete_outcome(outcome: CompleteOutcome) {
    match outcome {
        CompleteOutcome::Completed => {
            println!("{}", "✅ Task marked as completed.".green());
        }
        CompleteOutcome::AlreadyDone => {
            println!("{}", "Task is already completed; nothing to do.".yellow());
        }
    }
}

pub fn task_deleted(task: &Task) {
    println!("{} {}", "🗑️  Task deleted:".red(), task.text.white());
}

pub fn update_outcome(id: u64, outcome: UpdateOutcome) {
    match outcome {
        UpdateOutcome::Changed => {
            println!("{}", format!("✏️  Task {id} updated.").green());
        }
        UpdateOutcome::NoChanges => {
            println!("{}", format!("Task {id} unchanged; nothing to do.").yellow());
        }
    }
}

pub fn renumber_outcome(outcome: &RenumberOutcome) {
    match outcome {
        RenumberOutcome::Empty => {
            println!("{}", "No tasks to renumber.".yellow());
        }
        RenumberOutcome::AlreadyCompact => {
            println!("{}", "All tasks already have compact ids.".green());
        }
        RenumberOutcome::Renumbered(mapping) => {
            for (old, new) in mapping {
                println!("{}", format!("  {old} → {new}").dimmed());
            }
            println!(
                "{}",
                format!("✅ Renumbered {} tasks.", mapping.len()).green()
            );
        }
    }
}

pub fn export_done(count: usize, filename: &str) {
    println!(
        "{}",
        format!("✅ Exported {count} tasks to {filename}").green()
    );
}

pub fn task_error(err: &TaskError) {
    println!("{}", format!("❌ {err}").red());
}

pub fn fatal_store_error(err: &StoreError) {
    eprintln!("{}", format!("❌ {err}").red());
}

pub fn usage_error(message: &str) {
    println!("{}", format!("❌ {message}").red());
}
