//! MCP tool handlers for the todo server
//!
//! Each handler is in a separate file; the `#[tool]` methods in `lib.rs`
//! only delegate here.

pub mod add;
pub mod delete;
pub mod draft;
pub mod list;
pub mod notifications;
pub mod toggle;
