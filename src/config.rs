//! TOML configuration
//!
//! Every field has a default, so a missing file or an empty one both give a
//! working setup.
//!
//! ```toml
//! [reminders]
//! scan_interval_secs = 60
//! lead_minutes = 10
//!
//! [notifications]
//! enabled = true
//! command = "notify-send"
//! icon = "appointment-soon"
//! title = "Task Due Soon!"
//!
//! [logging]
//! filter = "info"
//! ```

use crate::reminder::{CommandNotifier, LogNotifier, Notifier, ReminderSettings};
use anyhow::{Context, Result, bail};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reminders: RemindersConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemindersConfig {
    /// Seconds between two scans for tasks coming due
    pub scan_interval_secs: u64,
    /// Minutes before the due time a reminder fires
    pub lead_minutes: u32,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            scan_interval_secs: 60,
            lead_minutes: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub enabled: bool,
    /// `notify-send` compatible program; notifications are logged when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub icon: String,
    pub title: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            icon: "appointment-soon".to_string(),
            title: "Task Due Soon!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from a TOML file
    ///
    /// A path that does not exist yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.reminders.scan_interval_secs == 0 {
            bail!("reminders.scan_interval_secs must be greater than zero");
        }
        if self.reminders.lead_minutes == 0 {
            bail!("reminders.lead_minutes must be greater than zero");
        }
        Ok(())
    }

    pub fn reminder_settings(&self) -> ReminderSettings {
        ReminderSettings {
            scan_interval: Duration::from_secs(self.reminders.scan_interval_secs),
            lead: TimeDelta::minutes(i64::from(self.reminders.lead_minutes)),
            notifications_enabled: self.notifications.enabled,
            title: self.notifications.title.clone(),
            icon: self.notifications.icon.clone(),
        }
    }

    /// The notifier the configuration asks for
    pub fn notifier(&self) -> Arc<dyn Notifier> {
        match &self.notifications.command {
            Some(program) => Arc::new(CommandNotifier::new(program.clone())),
            None => Arc::new(LogNotifier),
        }
    }
}
