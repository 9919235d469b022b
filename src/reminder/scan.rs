use crate::todo::{Task, TaskId};
use chrono::{NaiveDateTime, TimeDelta};
use std::time::Duration;

/// A reminder decided by a scan, ready to be armed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub task_id: TaskId,
    pub due: NaiveDateTime,
    /// Time to wait before firing; zero means fire right away
    pub delay: Duration,
}

/// Whether a task should get a reminder armed at `now`
///
/// The task must have a due date inside `(now, now + lead]`, be open, and
/// not have had a reminder armed before.
pub fn is_eligible(task: &Task, now: NaiveDateTime, lead: TimeDelta) -> bool {
    let Some(due) = task.due else {
        return false;
    };
    !task.completed && !task.notification_scheduled && due > now && due - now <= lead
}

/// Delay until `due - lead`, clamped at zero
pub fn reminder_delay(due: NaiveDateTime, now: NaiveDateTime, lead: TimeDelta) -> Duration {
    (due - lead - now).to_std().unwrap_or(Duration::ZERO)
}

/// Pick every task that needs a reminder armed now
pub fn due_reminders(tasks: &[Task], now: NaiveDateTime, lead: TimeDelta) -> Vec<Reminder> {
    tasks
        .iter()
        .filter(|t| is_eligible(t, now, lead))
        .filter_map(|t| {
            let due = t.due?;
            Some(Reminder {
                task_id: t.id,
                due,
                delay: reminder_delay(due, now, lead),
            })
        })
        .collect()
}
