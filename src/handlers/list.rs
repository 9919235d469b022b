//! List and sort handlers for the todo MCP server

use crate::formatting;
use crate::todo::grouped_view;
use crate::validation;
use crate::{TodoServerHandler, lock};
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Renders the grouped view with the active sort mode, followed by the
    /// pending draft.
    pub async fn handle_list_tasks(&self) -> McpResult<String> {
        let sort = *lock(&self.sort);

        let mut response = {
            let list = lock(&self.list);
            formatting::format_groups(&grouped_view(list.tasks(), sort), sort)
        };

        if let Some(draft) = formatting::format_draft(&lock(&self.draft)) {
            response.push_str("\n\n");
            response.push_str(&draft);
        }
        Ok(response)
    }

    /// Selects a sort mode. Requesting the active mode switches sorting off,
    /// "none" or "clear" always does.
    pub async fn handle_sort_by(&self, mode: String) -> McpResult<String> {
        let requested = validation::parse_sort_mode(&mode)?;

        let mut sort = lock(&self.sort);
        *sort = sort.toggle(requested);
        let active = *sort;
        drop(sort);

        Ok(format!("Sort mode: {}", active))
    }
}
