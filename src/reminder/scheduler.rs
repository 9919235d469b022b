use super::notifier::{Notification, Notifier, Permission};
use super::scan::{Reminder, due_reminders};
use crate::clock::Clock;
use crate::lock;
use crate::todo::{TaskId, TodoList};
use chrono::TimeDelta;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Tuning for the reminder scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSettings {
    /// Time between two scans of the task list; zero disables the scan
    pub scan_interval: Duration,
    /// How long before the due time a reminder fires
    pub lead: TimeDelta,
    /// When false, permission is always denied
    pub notifications_enabled: bool,
    pub title: String,
    pub icon: String,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            scan_interval: Duration::from_secs(60),
            lead: TimeDelta::minutes(10),
            notifications_enabled: true,
            title: "Task Due Soon!".to_string(),
            icon: "appointment-soon".to_string(),
        }
    }
}

struct Shared {
    list: Arc<Mutex<TodoList>>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    settings: ReminderSettings,
    permission: Mutex<Permission>,
    /// One-shot timers that have not fired yet
    armed: Mutex<HashMap<TaskId, AbortHandle>>,
}

/// Periodic scan plus one-shot reminders for tasks coming due
///
/// `start` mounts the repeating scan, `stop` tears it down together with
/// every reminder still pending. Reminders are tracked by task ID so deleting
/// or completing a task can cancel its timer.
pub struct ReminderScheduler {
    shared: Arc<Shared>,
    scan_task: Mutex<Option<JoinHandle<()>>>,
}

impl ReminderScheduler {
    pub fn new(
        list: Arc<Mutex<TodoList>>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        settings: ReminderSettings,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                list,
                notifier,
                clock,
                settings,
                permission: Mutex::new(Permission::Default),
                armed: Mutex::new(HashMap::new()),
            }),
            scan_task: Mutex::new(None),
        }
    }

    pub fn settings(&self) -> &ReminderSettings {
        &self.shared.settings
    }

    pub fn permission(&self) -> Permission {
        *lock(&self.shared.permission)
    }

    /// Ask the notifier for permission and remember the answer
    ///
    /// The answer only gates delivery; scanning and arming go on regardless.
    pub fn request_permission(&self) -> Permission {
        let permission = if self.shared.settings.notifications_enabled {
            self.shared.notifier.request_permission()
        } else {
            Permission::Denied
        };
        *lock(&self.shared.permission) = permission;
        info!(%permission, "notification permission");
        permission
    }

    /// Spawn the repeating scan; the first scan runs one interval from now
    ///
    /// Must be called from within a tokio runtime. Does nothing if the scan
    /// is already running, or if the scan interval is zero.
    pub fn start(&self) {
        let mut scan_task = lock(&self.scan_task);
        if scan_task.is_some() {
            return;
        }

        let period = self.shared.settings.scan_interval;
        if period.is_zero() {
            warn!("reminder scan interval is zero, periodic scan not started");
            return;
        }

        let shared = Arc::clone(&self.shared);
        *scan_task = Some(tokio::spawn(async move {
            info!(interval_secs = period.as_secs(), "reminder scan started");
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                shared.scan();
            }
        }));
    }

    /// Stop the repeating scan and cancel every pending reminder
    pub fn stop(&self) {
        if let Some(handle) = lock(&self.scan_task).take() {
            handle.abort();
            info!("reminder scan stopped");
        }

        let mut armed = lock(&self.shared.armed);
        for (_, handle) in armed.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        lock(&self.scan_task).is_some()
    }

    /// Run one scan now and arm reminders for every eligible task
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Returns
    /// The number of reminders armed
    pub fn scan(&self) -> usize {
        self.shared.scan()
    }

    /// Cancel the pending reminder of a task
    ///
    /// # Returns
    /// `true` if a pending reminder was cancelled
    pub fn cancel(&self, task_id: TaskId) -> bool {
        match lock(&self.shared.armed).remove(&task_id) {
            Some(handle) => {
                handle.abort();
                debug!(task = %task_id, "reminder cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self, task_id: TaskId) -> bool {
        lock(&self.shared.armed).contains_key(&task_id)
    }

    pub fn armed_count(&self) -> usize {
        lock(&self.shared.armed).len()
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Shared {
    fn scan(self: &Arc<Self>) -> usize {
        let now = self.clock.now();

        // Flip the flags under the same lock as the selection so two
        // overlapping scans cannot both arm a task.
        let reminders = {
            let mut list = lock(&self.list);
            let reminders = due_reminders(list.tasks(), now, self.settings.lead);
            for reminder in &reminders {
                list.mark_notification_scheduled(reminder.task_id);
            }
            reminders
        };

        let count = reminders.len();
        debug!(armed = count, "reminder scan finished");
        for reminder in reminders {
            self.arm(reminder);
        }
        count
    }

    fn arm(self: &Arc<Self>, reminder: Reminder) {
        let task_id = reminder.task_id;
        let delay = reminder.delay;
        let reminder_due = reminder.due;

        // Hold the map while spawning; the timer removes its own entry when it fires.
        let mut armed = lock(&self.armed);
        let shared = Arc::clone(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(reminder.delay).await;
            shared.fire(&reminder);
        });
        armed.insert(task_id, handle.abort_handle());

        info!(task = %task_id, due = %reminder_due, delay_secs = delay.as_secs(), "reminder armed");
    }

    fn fire(&self, reminder: &Reminder) {
        lock(&self.armed).remove(&reminder.task_id);

        // Re-read the task; it may have been deleted or completed meanwhile.
        let text = {
            let list = lock(&self.list);
            match list.get(reminder.task_id) {
                None => {
                    debug!(task = %reminder.task_id, "reminder dropped, task no longer exists");
                    return;
                }
                Some(task) if task.completed => {
                    debug!(task = %reminder.task_id, "reminder suppressed, task completed");
                    return;
                }
                Some(task) => task.text.clone(),
            }
        };

        if *lock(&self.permission) != Permission::Granted {
            debug!(task = %reminder.task_id, "reminder suppressed, no notification permission");
            return;
        }

        self.notifier.notify(&self.notification_for(&text));
    }

    fn notification_for(&self, text: &str) -> Notification {
        Notification {
            title: self.settings.title.clone(),
            body: format!(
                "\"{}\" is due in {} minutes!",
                text,
                self.settings.lead.num_minutes()
            ),
            icon: self.settings.icon.clone(),
        }
    }
}
