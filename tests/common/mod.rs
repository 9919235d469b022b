//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::sync::{Arc, Mutex};
use todo_reminder::{Clock, Notification, Notifier, Permission, ReminderSettings, TodoServerHandler};

/// A clock that only moves when told to
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}

/// Keeps every notification instead of showing it
pub struct RecordingNotifier {
    permission: Permission,
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn granted() -> Arc<Self> {
        Self::with_permission(Permission::Granted)
    }

    pub fn denied() -> Arc<Self> {
        Self::with_permission(Permission::Denied)
    }

    fn with_permission(permission: Permission) -> Arc<Self> {
        Arc::new(Self {
            permission,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn request_permission(&self) -> Permission {
        self.permission
    }

    fn notify(&self, notification: &Notification) {
        self.sent.lock().unwrap().push(notification.clone());
    }
}

/// Wednesday, 2025-03-05 12:00
pub fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Create a test handler with the default reminder settings
pub fn create_test_handler(
    notifier: Arc<RecordingNotifier>,
    clock: Arc<ManualClock>,
) -> TodoServerHandler {
    TodoServerHandler::new(ReminderSettings::default(), notifier, clock)
}

/// Create a test handler that never shows anything
pub fn create_quiet_handler() -> TodoServerHandler {
    create_test_handler(RecordingNotifier::granted(), ManualClock::new(base_time()))
}

/// Pick a date and 12-hour time through the draft tools, then add the task
pub async fn add_task_due_at(
    handler: &TodoServerHandler,
    text: &str,
    date: &str,
    hour: u32,
    minute: u32,
    meridiem: &str,
) -> String {
    handler
        .handle_select_due_date(Some(date.to_string()))
        .await
        .unwrap();
    handler
        .handle_select_time(Some(hour), Some(minute), Some(meridiem.to_string()))
        .await
        .unwrap();
    handler.handle_add_task(text.to_string()).await.unwrap()
}

/// Extract task ID from add_task() response message
/// Response format: "Task created with ID: #<n> (category: ...)"
pub fn extract_id_from_response(response: &str) -> String {
    let start = response.find("ID: ").map(|i| i + 4).unwrap_or(0);
    let rest = &response[start..];
    let end = rest.find(' ').unwrap_or(rest.len());
    rest[..end].to_string()
}
