use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Identifier of a task in the todo list
///
/// Ids are handed out from a monotonically increasing counter and are never
/// reused within a session. They render as `#N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    /// Accepts both `#7` and `7`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| format!("Invalid task ID '{}'. Use the form #1 or 1", s))
    }
}

/// Category a task is filed under
///
/// The set is fixed; anything unrecognized lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Work,
    Personal,
    Shopping,
    Health,
    Important,
    #[default]
    Other,
}

impl Category {
    /// All categories in the order they are offered to the user
    pub const ALL: [Category; 6] = [
        Category::Work,
        Category::Personal,
        Category::Shopping,
        Category::Health,
        Category::Important,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Important => "Important",
            Category::Other => "Other",
        }
    }

    /// Resolve a free-form selection into a category
    ///
    /// Unset, blank or unknown selections fall back to `Other`.
    pub fn from_selection(selection: Option<&str>) -> Category {
        selection
            .and_then(|s| s.parse::<Category>().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Invalid category '{}'. Valid options are: Work, Personal, Shopping, Health, Important, Other",
                    s
                )
            })
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, assigned at creation
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
    /// Local due date-time; `None` means no deadline
    pub due: Option<NaiveDateTime>,
    /// Set once a reminder has been armed; never reset
    pub notification_scheduled: bool,
    pub category: Category,
}

impl Task {
    /// Build a new task, rejecting blank text
    ///
    /// # Returns
    /// `None` when `text` is empty or whitespace only
    pub fn new(
        id: TaskId,
        text: &str,
        due: Option<NaiveDateTime>,
        category: Category,
    ) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
            due,
            notification_scheduled: false,
            category,
        })
    }
}
