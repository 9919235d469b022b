//! Sorting, grouping and listing tests
mod common;

use common::*;
use todo_reminder::*;

async fn add_in_category(handler: &TodoServerHandler, text: &str, category: &str) {
    handler
        .handle_select_category(Some(category.to_string()))
        .await
        .unwrap();
    handler.handle_add_task(text.to_string()).await.unwrap();
}

#[tokio::test]
async fn test_grouped_view_first_seen_order() {
    let handler = create_quiet_handler();
    add_in_category(&handler, "Slides", "Work").await;
    add_in_category(&handler, "Gym", "Personal").await;
    add_in_category(&handler, "Budget", "Work").await;

    let tasks = handler.tasks();
    let groups = grouped_view(&tasks, SortMode::None);
    let names: Vec<Category> = groups.iter().map(|g| g.category).collect();
    assert_eq!(names, vec![Category::Work, Category::Personal]);
    assert_eq!(groups[0].tasks.len(), 2);
    assert_eq!(groups[1].tasks.len(), 1);

    let list = handler.handle_list_tasks().await.unwrap();
    assert_eq!(
        list,
        "WORK (2 tasks)\n- [ ] #1 Slides\n- [ ] #3 Budget\n\nPERSONAL (1 task)\n- [ ] #2 Gym"
    );
}

#[tokio::test]
async fn test_sort_by_date_puts_undated_last() {
    let handler = create_quiet_handler();
    handler.handle_add_task("No deadline".to_string()).await.unwrap();
    add_task_due_at(&handler, "Later", "2025-04-01", 9, 0, "am").await;
    handler.handle_add_task("Also no deadline".to_string()).await.unwrap();
    add_task_due_at(&handler, "Sooner", "2025-03-20", 9, 0, "am").await;

    let tasks = handler.tasks();
    let texts: Vec<&str> = sort_tasks(&tasks, SortMode::Date)
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(texts, vec!["Sooner", "Later", "No deadline", "Also no deadline"]);
}

#[tokio::test]
async fn test_sort_by_time_uses_time_of_day() {
    let handler = create_quiet_handler();
    add_task_due_at(&handler, "Evening", "2025-03-06", 7, 30, "pm").await;
    add_task_due_at(&handler, "Morning next month", "2025-04-10", 8, 0, "am").await;
    handler.handle_add_task("Whenever".to_string()).await.unwrap();

    let tasks = handler.tasks();
    let texts: Vec<&str> = sort_tasks(&tasks, SortMode::Time)
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(texts, vec!["Morning next month", "Evening", "Whenever"]);
}

#[tokio::test]
async fn test_sort_by_status_is_stable() {
    let handler = create_quiet_handler();
    handler.handle_add_task("A".to_string()).await.unwrap();
    handler.handle_add_task("Done".to_string()).await.unwrap();
    handler.handle_add_task("B".to_string()).await.unwrap();
    handler.handle_toggle_task("#2".to_string()).await.unwrap();

    handler.handle_sort_by("status".to_string()).await.unwrap();
    let list = handler.handle_list_tasks().await.unwrap();
    assert_eq!(
        list,
        "Sorted by: status\n\nOTHER (3 tasks)\n- [ ] #1 A\n- [ ] #3 B\n- [x] #2 Done"
    );

    // Listing never reorders the store itself
    let texts: Vec<String> = handler.tasks().into_iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["A", "Done", "B"]);
}

#[tokio::test]
async fn test_sort_by_toggles_like_buttons() {
    let handler = create_quiet_handler();
    assert_eq!(handler.sort_mode(), SortMode::None);

    let result = handler.handle_sort_by("date".to_string()).await.unwrap();
    assert_eq!(result, "Sort mode: date");
    let result = handler.handle_sort_by("date".to_string()).await.unwrap();
    assert_eq!(result, "Sort mode: none");

    handler.handle_sort_by("time".to_string()).await.unwrap();
    handler.handle_sort_by("status".to_string()).await.unwrap();
    assert_eq!(handler.sort_mode(), SortMode::Status);
    handler.handle_sort_by("clear".to_string()).await.unwrap();
    assert_eq!(handler.sort_mode(), SortMode::None);

    assert!(handler.handle_sort_by("priority".to_string()).await.is_err());
}

#[tokio::test]
async fn test_empty_list() {
    let handler = create_quiet_handler();
    let list = handler.handle_list_tasks().await.unwrap();
    assert_eq!(list, "No tasks yet. Add one above!");
}

#[tokio::test]
async fn test_list_shows_pending_draft() {
    let handler = create_quiet_handler();
    handler.handle_add_task("Existing".to_string()).await.unwrap();
    handler
        .handle_select_category(Some("Important".to_string()))
        .await
        .unwrap();

    let list = handler.handle_list_tasks().await.unwrap();
    assert!(list.ends_with("Next task:\n  Category: Important"));
}
