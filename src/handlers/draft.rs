//! Draft selection handlers for the todo MCP server
//!
//! These play the part of the category, date and time pickers: each call
//! changes one or more pending selections for the next `add_task`.

use crate::formatting;
use crate::todo::Category;
use crate::validation;
use crate::{TodoServerHandler, lock};
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    fn describe_draft(&self) -> String {
        formatting::format_draft(&lock(&self.draft))
            .unwrap_or_else(|| "No selections for the next task".to_string())
    }

    /// Selects the category of the next task; blank clears it. Unknown names
    /// are filed under Other.
    pub async fn handle_select_category(&self, category: Option<String>) -> McpResult<String> {
        let selection = validation::non_blank(category.as_deref());
        let resolved = selection.map(|s| Category::from_selection(Some(s)));
        lock(&self.draft).select_category(resolved);

        let mut response = self.describe_draft();
        if let (Some(input), Some(Category::Other)) = (selection, resolved)
            && !input.eq_ignore_ascii_case("other")
        {
            response = format!("Unknown category '{}', using Other\n{}", input, response);
        }
        Ok(response)
    }

    /// Selects the due date of the next task; blank clears it.
    pub async fn handle_select_due_date(&self, date: Option<String>) -> McpResult<String> {
        let date = match validation::non_blank(date.as_deref()) {
            Some(s) => Some(validation::parse_date(s)?),
            None => None,
        };
        lock(&self.draft).select_date(date);
        Ok(self.describe_draft())
    }

    /// Selects any of hour, minute and am/pm. All given fields are checked
    /// before any is applied; they are then applied in that order, and the due
    /// date is recomposed as soon as a date and all three fields are set.
    pub async fn handle_select_time(
        &self,
        hour: Option<u32>,
        minute: Option<u32>,
        meridiem: Option<String>,
    ) -> McpResult<String> {
        let hour = hour.map(validation::parse_hour).transpose()?;
        let minute = minute.map(validation::parse_minute).transpose()?;
        let meridiem = validation::non_blank(meridiem.as_deref())
            .map(validation::parse_meridiem)
            .transpose()?;

        let mut draft = lock(&self.draft);
        if hour.is_some() {
            draft.select_hour(hour);
        }
        if minute.is_some() {
            draft.select_minute(minute);
        }
        if meridiem.is_some() {
            draft.select_meridiem(meridiem);
        }
        let needs_date = draft.due().is_none() && !draft.time_selection().is_empty();
        drop(draft);

        let mut response = self.describe_draft();
        if needs_date {
            response.push_str("\nSelect a due date to apply this time");
        }
        Ok(response)
    }
}
