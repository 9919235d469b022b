//! Formatting helper functions for the todo MCP server
//!
//! Turns the grouped view and the pending draft into the text returned by
//! the tools.

use crate::due::TaskDraft;
use crate::todo::{SortMode, Task, TaskGroup};
use chrono::NaiveDateTime;

/// Format a due date the way the list shows it, e.g. "Mar 5, 2025, 3:04 PM"
pub fn format_due(due: NaiveDateTime) -> String {
    due.format("%b %-d, %Y, %-I:%M %p").to_string()
}

fn task_count_label(count: usize) -> String {
    format!("{} {}", count, if count == 1 { "task" } else { "tasks" })
}

fn format_task(task: &Task) -> String {
    let mut line = format!(
        "- [{}] {} {}\n",
        if task.completed { "x" } else { " " },
        task.id,
        task.text
    );
    if let Some(due) = task.due {
        line.push_str(&format!("  Due: {}\n", format_due(due)));
    }
    line
}

/// Render category groups
///
/// # Arguments
/// * `groups` - Groups in display order
/// * `sort` - Active sort mode, shown in the header when not `none`
pub fn format_groups(groups: &[TaskGroup<'_>], sort: SortMode) -> String {
    if groups.is_empty() {
        return "No tasks yet. Add one above!".to_string();
    }

    let mut result = String::new();
    if sort != SortMode::None {
        result.push_str(&format!("Sorted by: {}\n\n", sort));
    }

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(&format!(
            "{} ({})\n",
            group.category.as_str().to_uppercase(),
            task_count_label(group.tasks.len())
        ));
        for task in &group.tasks {
            result.push_str(&format_task(task));
        }
    }

    result.trim_end().to_string()
}

/// Summarize the selections waiting for the next `add_task`
///
/// # Returns
/// `None` when nothing is selected
pub fn format_draft(draft: &TaskDraft) -> Option<String> {
    let time = draft.time_selection();
    if draft.due().is_none() && draft.category().is_none() && time.is_empty() {
        return None;
    }

    let mut lines = vec!["Next task:".to_string()];
    if let Some(category) = draft.category() {
        lines.push(format!("  Category: {}", category));
    }
    if let Some(due) = draft.due() {
        lines.push(format!("  Due: {}", format_due(due)));
    }
    if !time.is_empty() || draft.awaiting_time() {
        let hour = time.hour.map_or("--".to_string(), |h| h.to_string());
        let minute = time.minute.map_or("--".to_string(), |m| format!("{:02}", m));
        let meridiem = time.meridiem.map_or("--".to_string(), |m| m.to_string());
        lines.push(format!("  Time selection: {}:{} {}", hour, minute, meridiem));
    }
    Some(lines.join("\n"))
}
