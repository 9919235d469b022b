use crate::todo::task::{Category, Task, TaskId};
use chrono::NaiveDateTime;

/// The in-memory task collection
///
/// Tasks are kept in a Vec in insertion order; the unsorted view and the
/// stable sorts in `view` both rely on that order. Every mutation either
/// applies fully or leaves the collection untouched.
#[derive(Debug, Default)]
pub struct TodoList {
    tasks: Vec<Task>,

    /// Counter for generating unique task IDs
    task_counter: u64,
}

impl TodoList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task ID
    fn generate_task_id(&mut self) -> TaskId {
        self.task_counter += 1;
        TaskId(self.task_counter)
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by its ID
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a new task
    ///
    /// # Arguments
    /// * `text` - Task text; trimmed before storing
    /// * `due` - Optional due date-time
    /// * `category` - Category the task is filed under
    ///
    /// # Returns
    /// The new task's ID, or `None` when the text is blank (nothing is added
    /// and no ID is consumed)
    pub fn add(
        &mut self,
        text: &str,
        due: Option<NaiveDateTime>,
        category: Category,
    ) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.generate_task_id();
        let task = Task::new(id, text, due, category)?;
        self.tasks.push(task);
        Some(id)
    }

    /// Flip the completed flag of a task
    ///
    /// # Returns
    /// The new completed state, or `None` if no task has this ID
    pub fn toggle_completed(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Remove a task and return it
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Record that a reminder has been armed for a task
    ///
    /// The flag only moves from false to true.
    ///
    /// # Returns
    /// `true` if the flag was flipped by this call, `false` if it was already
    /// set or the task does not exist
    pub fn mark_notification_scheduled(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) if !task.notification_scheduled => {
                task.notification_scheduled = true;
                true
            }
            _ => false,
        }
    }
}
