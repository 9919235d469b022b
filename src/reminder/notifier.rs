//! Desktop notification delivery
//!
//! Delivery is best effort: no confirmation, no retries. Failures are logged
//! and otherwise swallowed.

use std::fmt;
use tracing::{debug, info, warn};

/// Whether the host lets us show notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    /// Not asked yet
    #[default]
    Default,
    Granted,
    Denied,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Default => f.write_str("not requested"),
            Permission::Granted => f.write_str("granted"),
            Permission::Denied => f.write_str("denied"),
        }
    }
}

/// A transient desktop notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: String,
}

pub trait Notifier: Send + Sync {
    /// Ask the host for permission to show notifications
    fn request_permission(&self) -> Permission;

    /// Show a notification, fire-and-forget
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn notify(&self, notification: &Notification) {
        info!(
            title = %notification.title,
            icon = %notification.icon,
            "{}",
            notification.body
        );
    }
}

/// Runs a `notify-send` compatible program
///
/// Invoked as `<program> --icon <icon> <title> <body>`.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
}

impl CommandNotifier {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Notifier for CommandNotifier {
    fn request_permission(&self) -> Permission {
        if self.program.trim().is_empty() {
            Permission::Denied
        } else {
            Permission::Granted
        }
    }

    fn notify(&self, notification: &Notification) {
        let spawned = tokio::process::Command::new(&self.program)
            .arg("--icon")
            .arg(&notification.icon)
            .arg(&notification.title)
            .arg(&notification.body)
            .spawn();

        match spawned {
            Ok(_) => debug!(program = %self.program, "notification command started"),
            Err(e) => warn!(program = %self.program, "failed to run notification command: {}", e),
        }
    }
}
