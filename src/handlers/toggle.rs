//! Toggle handler for the todo MCP server

use crate::validation;
use crate::{TodoServerHandler, lock};
use mcp_attr::Result as McpResult;
use tracing::info;

impl TodoServerHandler {
    /// Flips the completed flag of a task. Completing a task cancels its
    /// pending reminder; reopening it does not re-arm one.
    pub async fn handle_toggle_task(&self, id: String) -> McpResult<String> {
        let task_id = validation::parse_task_id(&id)?;

        let toggled = lock(&self.list).toggle_completed(task_id);
        match toggled {
            None => Ok(format!("Task {} not found; nothing changed", task_id)),
            Some(true) => {
                let cancelled = self.reminders.cancel(task_id);
                info!(task = %task_id, cancelled, "task completed");
                let mut response = format!("Task {} marked as completed", task_id);
                if cancelled {
                    response.push_str(" (pending reminder cancelled)");
                }
                Ok(response)
            }
            Some(false) => {
                info!(task = %task_id, "task reopened");
                Ok(format!("Task {} marked as not completed", task_id))
            }
        }
    }
}
