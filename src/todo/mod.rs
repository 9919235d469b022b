//! Todo domain models and business logic
//!
//! - `task`: the task record, its ID and category
//! - `todo_list`: the in-memory task store and its mutations
//! - `view`: sorting and category grouping for display

mod task;
mod todo_list;
mod view;

// Re-export all public types
pub use task::{Category, Task, TaskId};
pub use todo_list::TodoList;
pub use view::{SortMode, TaskGroup, group_by_category, grouped_view, sort_tasks};
