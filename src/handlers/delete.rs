//! Delete handler for the todo MCP server

use crate::validation;
use crate::{TodoServerHandler, lock};
use mcp_attr::Result as McpResult;
use tracing::info;

impl TodoServerHandler {
    /// Removes a task and cancels its pending reminder, if any.
    pub async fn handle_delete_task(&self, id: String) -> McpResult<String> {
        let task_id = validation::parse_task_id(&id)?;

        let removed = lock(&self.list).remove(task_id);
        let Some(task) = removed else {
            return Ok(format!("Task {} not found; nothing changed", task_id));
        };

        let cancelled = self.reminders.cancel(task_id);
        info!(task = %task_id, cancelled, "task deleted");
        Ok(format!("Deleted task {}: {}", task_id, task.text))
    }
}
