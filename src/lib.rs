//! Todo Reminder MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a small
//! categorized todo list. Tasks can carry a due date and time; a background
//! scheduler raises a desktop notification shortly before a task comes due.
//! All state lives in memory for the lifetime of the server.
//!
//! # Architecture
//!
//! - **MCP Layer**: `TodoServerHandler` - tools for adding, completing,
//!   deleting, sorting and listing tasks, plus the date/time/category pickers
//! - **Domain Layer**: `todo` module - task model, task store, sort & group view
//! - **Due dates**: `due` module - merges a calendar date and a 12-hour clock time
//! - **Reminders**: `reminder` module - periodic scan, one-shot timers, notifiers
//!
//! # Example
//!
//! ```no_run
//! use todo_reminder::{Config, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::from_config(&Config::default());
//!     handler.mount();
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod due;
pub mod formatting;
mod handlers;
pub mod logging;
pub mod reminder;
pub mod todo;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use due::{Meridiem, TaskDraft};
pub use reminder::{Notification, Notifier, Permission, ReminderScheduler, ReminderSettings};
pub use todo::{
    Category, SortMode, Task, TaskGroup, TaskId, TodoList, group_by_category, grouped_view, sort_tasks,
};

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// MCP Server handler for the todo list
///
/// Owns the task store, the pending draft for the next task, the active sort
/// mode and the reminder scheduler. Dropping the handler stops the scheduler.
pub struct TodoServerHandler {
    pub(crate) list: Arc<Mutex<TodoList>>,
    pub(crate) draft: Mutex<TaskDraft>,
    pub(crate) sort: Mutex<SortMode>,
    pub(crate) reminders: ReminderScheduler,
}

impl TodoServerHandler {
    /// Create a handler with an empty task list
    ///
    /// # Arguments
    /// * `settings` - Reminder scan interval, lead time and notification text
    /// * `notifier` - Where reminders are delivered
    /// * `clock` - Wall-clock source for due-date comparisons
    pub fn new(settings: ReminderSettings, notifier: Arc<dyn Notifier>, clock: Arc<dyn Clock>) -> Self {
        let list = Arc::new(Mutex::new(TodoList::new()));
        let reminders = ReminderScheduler::new(Arc::clone(&list), notifier, clock, settings);
        Self {
            list,
            draft: Mutex::new(TaskDraft::new()),
            sort: Mutex::new(SortMode::None),
            reminders,
        }
    }

    /// Create a handler using the system clock and the configured notifier
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.reminder_settings(), config.notifier(), Arc::new(SystemClock))
    }

    /// Ask for notification permission and start the reminder scan
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&self) {
        self.reminders.request_permission();
        self.reminders.start();
    }

    /// Stop the reminder scan and cancel pending reminders
    pub fn unmount(&self) {
        self.reminders.stop();
    }

    pub fn reminders(&self) -> &ReminderScheduler {
        &self.reminders
    }

    /// Snapshot of all tasks in insertion order
    pub fn tasks(&self) -> Vec<Task> {
        lock(&self.list).tasks().to_vec()
    }

    /// Snapshot of a single task
    pub fn task(&self, id: TaskId) -> Option<Task> {
        lock(&self.list).get(id).cloned()
    }

    pub fn draft(&self) -> TaskDraft {
        lock(&self.draft).clone()
    }

    pub fn sort_mode(&self) -> SortMode {
        *lock(&self.sort)
    }
}

/// Todo list with categories, due dates and desktop reminders.
///
/// Workflow for adding a task:
/// 1. Optionally pick a category with `select_category` (Work, Personal,
///    Shopping, Health, Important, Other; default Other)
/// 2. Optionally pick a due date with `select_due_date`, then a time with
///    `select_time` (12-hour clock: hour 1-12, minute 0-59, am/pm)
/// 3. Call `add_task` with the text; the selections are used and then reset
///
/// Task IDs use the format #1, #2, #3. A notification is shown about ten
/// minutes before an open task comes due.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Add**: Create a task from the text plus the selected category, due date and time.
    /// Blank text adds nothing. Selections are reset after a successful add.
    #[tool]
    async fn add_task(
        &self,
        /// Task text (leading/trailing whitespace is trimmed)
        text: String,
    ) -> McpResult<String> {
        self.handle_add_task(text).await
    }

    /// **Pick category**: Category for the next task. Empty clears the selection.
    #[tool]
    async fn select_category(
        &self,
        /// Work/Personal/Shopping/Health/Important/Other; unknown names become Other
        category: Option<String>,
    ) -> McpResult<String> {
        self.handle_select_category(category).await
    }

    /// **Pick date**: Due date for the next task. The time defaults to midnight
    /// until a time is selected. Empty clears the due date.
    #[tool]
    async fn select_due_date(
        &self,
        /// Due date YYYY-MM-DD (optional)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_select_due_date(date).await
    }

    /// **Pick time**: Any of hour, minute and am/pm for the selected due date.
    /// The due time is set once all three have been given.
    #[tool]
    async fn select_time(
        &self,
        /// Hour 1-12 (optional)
        hour: Option<u32>,
        /// Minute 0-59 (optional)
        minute: Option<u32>,
        /// "am" or "pm" (optional)
        meridiem: Option<String>,
    ) -> McpResult<String> {
        self.handle_select_time(hour, minute, meridiem).await
    }

    /// **Complete/Reopen**: Toggle whether a task is done.
    #[tool]
    async fn toggle_task(
        &self,
        /// Task ID (e.g., "#3")
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_task(id).await
    }

    /// **Delete**: Remove a task for good. Its pending reminder is cancelled.
    #[tool]
    async fn delete_task(
        &self,
        /// Task ID (e.g., "#3")
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(id).await
    }

    /// **Sort**: date/time/status. Choosing the active mode again, or "none", turns sorting off.
    #[tool]
    async fn sort_by(
        &self,
        /// date, time, status or none
        mode: String,
    ) -> McpResult<String> {
        self.handle_sort_by(mode).await
    }

    /// **Review**: List all tasks grouped by category, in the active sort order,
    /// followed by the selections pending for the next task.
    #[tool]
    async fn list_tasks(&self) -> McpResult<String> {
        self.handle_list_tasks().await
    }

    /// **Notifications**: Ask for permission to show desktop notifications again.
    #[tool]
    async fn enable_notifications(&self) -> McpResult<String> {
        self.handle_enable_notifications().await
    }
}
