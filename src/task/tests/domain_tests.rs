//! Domain-focused tests for validated task values and query predicates.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::task::domain::{
    OrderDirection, OrderField, Priority, Task, TaskDetails, TaskDomainError, TaskOrdering,
    TaskQuery, TaskStatus, TaskTitle,
};
use chrono::Duration;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn title_trims_surrounding_whitespace() {
    let title = TaskTitle::new("  Write report  ").expect("valid title");
    assert_eq!(title.as_str(), "Write report");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_empty_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn title_rejects_values_over_the_column_width() {
    let raw = "x".repeat(TaskTitle::MAX_LENGTH + 1);
    assert_eq!(
        TaskTitle::new(raw),
        Err(TaskDomainError::TitleTooLong {
            limit: TaskTitle::MAX_LENGTH,
            length: TaskTitle::MAX_LENGTH + 1,
        })
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(50)]
#[case(100)]
fn priority_accepts_values_in_range(#[case] value: i32) {
    let priority = Priority::new(value).expect("valid priority");
    assert_eq!(priority.value(), value);
}

#[rstest]
#[case(-1)]
#[case(i32::MIN)]
fn priority_rejects_negative_values(#[case] value: i32) {
    assert_eq!(
        Priority::new(value),
        Err(TaskDomainError::NegativePriority(value))
    );
}

#[rstest]
#[case(101)]
#[case(i32::MAX)]
fn priority_rejects_values_over_one_hundred(#[case] value: i32) {
    assert_eq!(
        Priority::new(value),
        Err(TaskDomainError::PriorityTooHigh {
            limit: Priority::MAX,
            value,
        })
    );
}

#[rstest]
#[case("pending", TaskStatus::Pending)]
#[case("in_progress", TaskStatus::InProgress)]
#[case("completed", TaskStatus::Completed)]
#[case("cancelled", TaskStatus::Cancelled)]
#[case(" PENDING ", TaskStatus::Pending)]
#[case("Completed", TaskStatus::Completed)]
fn status_parses_known_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw).expect("valid status"), expected);
}

#[rstest]
fn status_rejects_unknown_values() {
    let result = TaskStatus::try_from("archived");
    assert!(result.is_err());
}

#[rstest]
fn new_task_defaults_to_pending_without_completion(clock: DefaultClock) {
    let details = TaskDetails::new(TaskTitle::new("Ship release").expect("valid title"));
    let task = Task::new(details, &clock);

    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.priority().value(), 0);
    assert!(task.completed_at().is_none());
    assert!(task.due_date().is_none());
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn query_status_filter_excludes_other_statuses(clock: DefaultClock) {
    let mut details = TaskDetails::new(TaskTitle::new("Ship release").expect("valid title"));
    details.status = TaskStatus::InProgress;
    let task = Task::new(details, &clock);

    let query = TaskQuery::new().with_status(TaskStatus::InProgress);
    assert!(query.matches(&task));

    let other = TaskQuery::new().with_status(TaskStatus::Pending);
    assert!(!other.matches(&task));
}

#[rstest]
fn query_search_matches_title_and_description_case_insensitively(clock: DefaultClock) {
    let mut details = TaskDetails::new(TaskTitle::new("Quarterly report").expect("valid title"));
    details.description = Some("Collect the budget numbers".to_owned());
    let task = Task::new(details, &clock);

    assert!(TaskQuery::new().with_search("REPORT").matches(&task));
    assert!(TaskQuery::new().with_search("budget").matches(&task));
    assert!(!TaskQuery::new().with_search("invoice").matches(&task));
}

#[rstest]
fn query_overdue_filter_requires_past_due_date(clock: DefaultClock) {
    let now = clock.utc();
    let mut details = TaskDetails::new(TaskTitle::new("Pay invoice").expect("valid title"));
    details.due_date = Some(now - Duration::days(1));
    let overdue_task = Task::new(details, &clock);

    let no_due_task = Task::new(
        TaskDetails::new(TaskTitle::new("Tidy backlog").expect("valid title")),
        &clock,
    );

    let query = TaskQuery::new().with_overdue_at(now);
    assert!(query.matches(&overdue_task));
    assert!(!query.matches(&no_due_task));
}

#[rstest]
#[case("priority", OrderField::Priority, OrderDirection::Ascending)]
#[case("-priority", OrderField::Priority, OrderDirection::Descending)]
#[case("title", OrderField::Title, OrderDirection::Ascending)]
#[case("-due_date", OrderField::DueDate, OrderDirection::Descending)]
#[case("created_at", OrderField::CreatedAt, OrderDirection::Ascending)]
#[case("-status", OrderField::Status, OrderDirection::Descending)]
fn ordering_parses_known_expressions(
    #[case] raw: &str,
    #[case] field: OrderField,
    #[case] direction: OrderDirection,
) {
    let ordering = TaskOrdering::parse(raw).expect("valid ordering");
    assert_eq!(ordering.field(), field);
    assert_eq!(ordering.direction(), direction);
}

#[rstest]
#[case("priority,title")]
#[case("unknown")]
#[case("--priority")]
fn ordering_rejects_unknown_expressions(#[case] raw: &str) {
    assert!(TaskOrdering::parse(raw).is_none());
}

#[rstest]
fn default_ordering_sorts_by_priority_descending(clock: DefaultClock) {
    let mut low = TaskDetails::new(TaskTitle::new("Low").expect("valid title"));
    low.priority = Priority::new(1).expect("valid priority");
    let mut high = TaskDetails::new(TaskTitle::new("High").expect("valid title"));
    high.priority = Priority::new(10).expect("valid priority");

    let low_task = Task::new(low, &clock);
    let high_task = Task::new(high, &clock);

    let ordering = TaskOrdering::default();
    assert_eq!(
        ordering.compare(&high_task, &low_task),
        std::cmp::Ordering::Less
    );
}

#[rstest]
fn due_date_ordering_sorts_missing_dates_last_ascending(clock: DefaultClock) {
    let mut dated = TaskDetails::new(TaskTitle::new("Dated").expect("valid title"));
    dated.due_date = Some(clock.utc() + Duration::days(3));
    let dated_task = Task::new(dated, &clock);
    let undated_task = Task::new(
        TaskDetails::new(TaskTitle::new("Undated").expect("valid title")),
        &clock,
    );

    let ascending = TaskOrdering::new(OrderField::DueDate, OrderDirection::Ascending);
    assert_eq!(
        ascending.compare(&dated_task, &undated_task),
        std::cmp::Ordering::Less
    );

    let descending = TaskOrdering::new(OrderField::DueDate, OrderDirection::Descending);
    assert_eq!(
        descending.compare(&undated_task, &dated_task),
        std::cmp::Ordering::Less
    );
}
