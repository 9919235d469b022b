//! Due-time reminders
//!
//! - `scan`: which tasks need a reminder right now, and when it should fire
//! - `scheduler`: the repeating scan and the one-shot reminder timers
//! - `notifier`: notification permission and delivery

mod notifier;
mod scan;
mod scheduler;

pub use notifier::{CommandNotifier, LogNotifier, Notification, Notifier, Permission};
pub use scan::{Reminder, due_reminders, is_eligible, reminder_delay};
pub use scheduler::{ReminderScheduler, ReminderSettings};
