//! Sorting and grouping of the task collection for display
//!
//! Everything here is a pure function of the task slice and the sort mode.
//! Nothing is mutated; the view is rebuilt on every listing.

use super::task::{Category, Task};
use chrono::Timelike;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How the list is ordered before grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Ascending by due date-time, undated tasks last
    Date,
    /// Ascending by time of day only, undated tasks last
    Time,
    /// Open tasks before completed ones
    Status,
    /// Insertion order
    #[default]
    None,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Date => "date",
            SortMode::Time => "time",
            SortMode::Status => "status",
            SortMode::None => "none",
        }
    }

    /// Pressing the button of the active mode switches sorting off
    pub fn toggle(self, requested: SortMode) -> SortMode {
        if self == requested {
            SortMode::None
        } else {
            requested
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortMode::Date),
            "time" => Ok(SortMode::Time),
            "status" => Ok(SortMode::Status),
            "none" | "clear" | "" => Ok(SortMode::None),
            _ => Err(format!(
                "Invalid sort mode '{}'. Valid options are: date, time, status, none",
                s
            )),
        }
    }
}

/// Tasks of one category, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup<'a> {
    pub category: Category,
    pub tasks: Vec<&'a Task>,
}

/// Undated tasks compare greater than any dated one and equal to each other
fn cmp_optional<K: Ord>(a: Option<K>, b: Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn minute_of_day(task: &Task) -> Option<u32> {
    task.due.map(|due| due.hour() * 60 + due.minute())
}

/// Return the tasks ordered by `mode`
///
/// `slice::sort_by` is stable, so ties keep insertion order.
pub fn sort_tasks(tasks: &[Task], mode: SortMode) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();

    match mode {
        SortMode::Date => sorted.sort_by(|a, b| cmp_optional(a.due, b.due)),
        SortMode::Time => sorted.sort_by(|a, b| cmp_optional(minute_of_day(a), minute_of_day(b))),
        SortMode::Status => sorted.sort_by_key(|t| t.completed),
        SortMode::None => {}
    }

    sorted
}

/// Partition tasks by category, groups in first-seen order
pub fn group_by_category<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<TaskGroup<'a>> {
    let mut groups: Vec<TaskGroup<'a>> = Vec::new();

    for task in tasks {
        match groups.iter_mut().find(|g| g.category == task.category) {
            Some(group) => group.tasks.push(task),
            None => groups.push(TaskGroup {
                category: task.category,
                tasks: vec![task],
            }),
        }
    }

    groups
}

/// Sort then group; the read-only view shown to the user
pub fn grouped_view(tasks: &[Task], mode: SortMode) -> Vec<TaskGroup<'_>> {
    group_by_category(sort_tasks(tasks, mode))
}
