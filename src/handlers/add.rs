//! Add handler for the todo MCP server

use crate::formatting;
use crate::{TodoServerHandler, lock};
use mcp_attr::Result as McpResult;
use tracing::info;

impl TodoServerHandler {
    /// Creates a task from `text` and the pending draft selections.
    ///
    /// Blank text adds nothing and keeps the draft. On success the draft is
    /// reset and a reminder scan runs right away, so a task due within the
    /// reminder window is armed without waiting for the next periodic scan.
    pub async fn handle_add_task(&self, text: String) -> McpResult<String> {
        let mut draft = lock(&self.draft);
        let (due, category) = draft.pending();

        let added = lock(&self.list).add(&text, due, category);
        let Some(id) = added else {
            return Ok("Task text is empty; nothing was added".to_string());
        };

        draft.clear();
        drop(draft);

        info!(task = %id, %category, "task added");
        let armed = self.reminders.scan();

        let mut response = format!("Task created with ID: {} (category: {})", id, category);
        if let Some(due) = due {
            response.push_str(&format!("\nDue: {}", formatting::format_due(due)));
        }
        if armed > 0 {
            response.push_str(&format!(
                "\nReminder armed: due within {} minutes",
                self.reminders.settings().lead.num_minutes()
            ));
        }
        Ok(response)
    }
}
