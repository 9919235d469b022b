//! Due date composition
//!
//! A due date is picked in two independent steps: a calendar date, then a
//! 12-hour clock time (hour, minute, am/pm). `TaskDraft` holds the pending
//! selections for the next task and merges them into one local timestamp.

use crate::todo::Category;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

/// Half of the 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

impl FromStr for Meridiem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "am" => Ok(Meridiem::Am),
            "pm" => Ok(Meridiem::Pm),
            _ => Err(format!("Invalid meridiem '{}'. Use am or pm", s)),
        }
    }
}

/// Convert a 12-hour clock hour to 24-hour
///
/// 12 AM is midnight (0), 12 PM is noon (12).
pub fn to_24_hour(hour: u32, meridiem: Meridiem) -> u32 {
    match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    }
}

/// Combine a date with a 12-hour clock time, seconds zeroed
///
/// # Returns
/// `None` if the hour is outside 1..=12 or the minute outside 0..=59
pub fn compose(date: NaiveDate, hour: u32, minute: u32, meridiem: Meridiem) -> Option<NaiveDateTime> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let time = NaiveTime::from_hms_opt(to_24_hour(hour, meridiem), minute, 0)?;
    Some(date.and_time(time))
}

/// Partially filled 12-hour clock selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeSelection {
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub meridiem: Option<Meridiem>,
}

impl TimeSelection {
    pub fn is_empty(&self) -> bool {
        self.hour.is_none() && self.minute.is_none() && self.meridiem.is_none()
    }

    /// All three fields, once every one of them is set
    fn complete(&self) -> Option<(u32, u32, Meridiem)> {
        Some((self.hour?, self.minute?, self.meridiem?))
    }
}

/// Selections pending for the next task to be added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    due: Option<NaiveDateTime>,
    time: TimeSelection,
    time_open: bool,
    category: Option<Category>,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composed due date so far
    pub fn due(&self) -> Option<NaiveDateTime> {
        self.due
    }

    pub fn time_selection(&self) -> TimeSelection {
        self.time
    }

    /// Whether a time is still expected for the selected date
    pub fn awaiting_time(&self) -> bool {
        self.due.is_some() && self.time_open
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Pick a calendar date, or clear it
    ///
    /// The time defaults to midnight until a full time selection arrives.
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.due = date.map(|d| d.and_time(NaiveTime::MIN));
        self.time_open = self.due.is_some();
        self.apply_time();
    }

    pub fn select_hour(&mut self, hour: Option<u32>) {
        self.time.hour = hour;
        self.apply_time();
    }

    pub fn select_minute(&mut self, minute: Option<u32>) {
        self.time.minute = minute;
        self.apply_time();
    }

    pub fn select_meridiem(&mut self, meridiem: Option<Meridiem>) {
        self.time.meridiem = meridiem;
        self.apply_time();
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// Recompute the due date once a date and all three time fields are set
    ///
    /// On success the time selection is cleared and the composed due date
    /// stays on the draft.
    ///
    /// # Returns
    /// The composed due date if composition happened on this call
    fn apply_time(&mut self) -> Option<NaiveDateTime> {
        let date = self.due?.date();
        let (hour, minute, meridiem) = self.time.complete()?;
        let composed = compose(date, hour, minute, meridiem)?;

        self.due = Some(composed);
        self.time = TimeSelection::default();
        self.time_open = false;
        Some(composed)
    }

    /// Values to create the next task with: due date and resolved category
    pub fn pending(&self) -> (Option<NaiveDateTime>, Category) {
        (self.due, self.category.unwrap_or_default())
    }

    /// Forget every selection
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
