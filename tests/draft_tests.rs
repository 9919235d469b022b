//! Date, time and category selection tests
mod common;

use chrono::{NaiveDate, Timelike};
use common::*;
use todo_reminder::*;

#[tokio::test]
async fn test_time_composition_examples() {
    let handler = create_quiet_handler();

    for (hour, minute, meridiem, expected) in [
        (12, 30, "am", (0, 30)),
        (12, 0, "pm", (12, 0)),
        (5, 9, "pm", (17, 9)),
    ] {
        add_task_due_at(&handler, "Check", "2025-03-10", hour, minute, meridiem).await;
        let due = handler.tasks().last().unwrap().due.unwrap();
        assert_eq!((due.hour(), due.minute(), due.second()), (expected.0, expected.1, 0));
        assert_eq!(due.date(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }
}

#[tokio::test]
async fn test_time_fields_one_at_a_time() {
    let handler = create_quiet_handler();
    handler
        .handle_select_due_date(Some("2025-03-10".to_string()))
        .await
        .unwrap();

    let result = handler.handle_select_time(Some(9), None, None).await.unwrap();
    assert!(result.contains("Due: Mar 10, 2025, 12:00 AM"));
    assert!(result.contains("Time selection: 9:-- --"));

    handler.handle_select_time(None, Some(45), None).await.unwrap();
    let result = handler
        .handle_select_time(None, None, Some("am".to_string()))
        .await
        .unwrap();
    assert!(result.contains("Due: Mar 10, 2025, 9:45 AM"));
    assert!(!result.contains("Time selection"));

    // The selection is cleared, the composed due date stays
    let draft = handler.draft();
    assert!(draft.time_selection().is_empty());
    assert_eq!(draft.due().unwrap().hour(), 9);
}

#[tokio::test]
async fn test_time_before_date_waits_for_date() {
    let handler = create_quiet_handler();
    let result = handler
        .handle_select_time(Some(3), Some(15), Some("pm".to_string()))
        .await
        .unwrap();
    assert!(result.ends_with("Select a due date to apply this time"));
    assert_eq!(handler.draft().due(), None);

    let result = handler
        .handle_select_due_date(Some("2025-03-11".to_string()))
        .await
        .unwrap();
    assert!(result.contains("Due: Mar 11, 2025, 3:15 PM"));
}

#[tokio::test]
async fn test_invalid_time_fields_rejected_without_partial_apply() {
    let handler = create_quiet_handler();
    handler
        .handle_select_due_date(Some("2025-03-10".to_string()))
        .await
        .unwrap();

    assert!(handler.handle_select_time(Some(4), Some(60), None).await.is_err());
    assert!(handler.handle_select_time(Some(0), None, None).await.is_err());
    assert!(
        handler
            .handle_select_time(Some(4), None, Some("noon".to_string()))
            .await
            .is_err()
    );
    assert!(handler.draft().time_selection().is_empty());
}

#[tokio::test]
async fn test_invalid_date_rejected() {
    let handler = create_quiet_handler();
    assert!(
        handler
            .handle_select_due_date(Some("March 10".to_string()))
            .await
            .is_err()
    );
    assert_eq!(handler.draft().due(), None);
}

#[tokio::test]
async fn test_clearing_selections() {
    let handler = create_quiet_handler();
    handler
        .handle_select_due_date(Some("2025-03-10".to_string()))
        .await
        .unwrap();
    handler
        .handle_select_category(Some("Work".to_string()))
        .await
        .unwrap();

    handler.handle_select_due_date(Some("".to_string())).await.unwrap();
    let result = handler.handle_select_category(None).await.unwrap();
    assert_eq!(result, "No selections for the next task");

    handler.handle_add_task("Plain".to_string()).await.unwrap();
    let task = handler.tasks().pop().unwrap();
    assert_eq!(task.due, None);
    assert_eq!(task.category, Category::Other);
}

#[tokio::test]
async fn test_unknown_category_falls_back_to_other() {
    let handler = create_quiet_handler();
    let result = handler
        .handle_select_category(Some("Errands".to_string()))
        .await
        .unwrap();
    assert!(result.starts_with("Unknown category 'Errands', using Other"));

    handler.handle_add_task("Post office".to_string()).await.unwrap();
    assert_eq!(handler.tasks()[0].category, Category::Other);
}
