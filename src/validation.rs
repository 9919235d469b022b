//! Validation helper functions for the todo MCP server
//!
//! Tool arguments arrive as loose strings and numbers. These helpers turn
//! them into domain values or an INVALID_PARAMS error.

use crate::due::Meridiem;
use crate::todo::{SortMode, TaskId};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Treat a missing or blank optional argument as "clear the selection"
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a task ID such as "#3" or "3"
pub fn parse_task_id(id_str: &str) -> McpResult<TaskId> {
    id_str.parse::<TaskId>().map_err(invalid_params)
}

/// Parse a due date in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Check a 12-hour clock hour (1-12)
pub fn parse_hour(hour: u32) -> McpResult<u32> {
    if (1..=12).contains(&hour) {
        Ok(hour)
    } else {
        Err(invalid_params(format!(
            "Invalid hour '{}'. Use a value from 1 to 12",
            hour
        )))
    }
}

/// Check a minute (0-59)
pub fn parse_minute(minute: u32) -> McpResult<u32> {
    if minute <= 59 {
        Ok(minute)
    } else {
        Err(invalid_params(format!(
            "Invalid minute '{}'. Use a value from 0 to 59",
            minute
        )))
    }
}

pub fn parse_meridiem(meridiem_str: &str) -> McpResult<Meridiem> {
    meridiem_str.parse::<Meridiem>().map_err(invalid_params)
}

pub fn parse_sort_mode(mode_str: &str) -> McpResult<SortMode> {
    mode_str.parse::<SortMode>().map_err(invalid_params)
}
