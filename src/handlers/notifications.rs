//! Notification permission handler for the todo MCP server

use crate::TodoServerHandler;
use crate::reminder::Permission;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Asks for notification permission again.
    pub async fn handle_enable_notifications(&self) -> McpResult<String> {
        let permission = self.reminders.request_permission();
        Ok(match permission {
            Permission::Granted => "Notifications enabled".to_string(),
            _ => format!(
                "Notifications are {}; reminders are still tracked but will not be shown",
                permission
            ),
        })
    }
}
