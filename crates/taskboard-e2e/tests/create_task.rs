// Task creation scenarios.
//
// Run with `cargo test -- --ignored`: the suite drives a real browser and
// needs installed Playwright browsers.

mod support;

use taskboard_e2e::{Error, IssuesPage, NewTask, Priority, Screen};

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn creates_a_task_with_required_fields() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let issues = IssuesPage::open(&ctx).await.expect("failed to open issues page");
    let before = issues.task_count().await.expect("failed to count tasks");

    let modal = issues
        .open_create_task_modal()
        .await
        .expect("failed to open create modal");
    assert!(modal.is_open().await.expect("failed to check modal"));

    modal.set_title("Оптимизация").await.expect("failed to set title");
    modal
        .select_project("Оптимизация производительности")
        .await
        .expect("failed to select project");
    modal
        .select_priority(Priority::High)
        .await
        .expect("failed to select priority");

    // Status is not editable at creation time.
    assert!(modal.is_status_locked().await.expect("failed to check status lock"));

    modal
        .select_assignee("Илья Романов")
        .await
        .expect("failed to select assignee");
    assert!(
        modal.is_create_enabled().await.expect("failed to check create button"),
        "create must be enabled once every required field is populated"
    );

    modal.submit().await.expect("failed to submit");
    assert!(
        issues
            .is_task_visible("Оптимизация")
            .await
            .expect("failed to look for the new task"),
        "the created task must appear in the list"
    );
    assert_eq!(
        issues.task_count().await.expect("failed to count tasks"),
        before + 1
    );

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn created_task_round_trips_title_and_description() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let issues = IssuesPage::open(&ctx).await.expect("failed to open issues page");
    let modal = issues
        .open_create_task_modal()
        .await
        .expect("failed to open create modal");

    let task = NewTask::new(
        "Рефакторинг эндпоинтов платежей",
        "Рефакторинг API",
        Priority::Medium,
        "Дмитрий Козлов",
    )
    .with_description("Привести API к единому стандарту");
    modal.create(&task).await.expect("failed to create the task");
    assert!(!modal.is_open().await.expect("failed to check modal"));

    let card = issues
        .open_task_card("Рефакторинг эндпоинтов платежей")
        .await
        .expect("failed to open the new task's card");
    assert_eq!(
        card.title().await.expect("failed to read title"),
        "Рефакторинг эндпоинтов платежей"
    );
    assert_eq!(
        card.description().await.expect("failed to read description"),
        "Привести API к единому стандарту"
    );
    // Status always reads back as the creation default.
    assert_eq!(card.status().await.expect("failed to read status"), "Backlog");
    card.close().await.expect("failed to close the card");

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn whitespace_title_keeps_create_disabled() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let issues = IssuesPage::open(&ctx).await.expect("failed to open issues page");
    let modal = issues
        .open_create_task_modal()
        .await
        .expect("failed to open create modal");

    modal
        .select_project("Переход на Kubernetes")
        .await
        .expect("failed to select project");
    modal
        .select_priority(Priority::Low)
        .await
        .expect("failed to select priority");
    modal
        .select_assignee("Ольга Новикова")
        .await
        .expect("failed to select assignee");

    // No title at all.
    assert!(!modal.is_create_enabled().await.expect("failed to check create button"));

    // Whitespace is not a title.
    modal.set_title("   ").await.expect("failed to set title");
    assert!(!modal.is_create_enabled().await.expect("failed to check create button"));

    // Any non-whitespace character flips it.
    modal.set_title("О").await.expect("failed to set title");
    assert!(modal.is_create_enabled().await.expect("failed to check create button"));

    modal.cancel().await.expect("failed to cancel");

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn status_is_fixed_to_backlog_at_creation() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let issues = IssuesPage::open(&ctx).await.expect("failed to open issues page");
    let modal = issues
        .open_create_task_modal()
        .await
        .expect("failed to open create modal");

    modal.set_title("Тестовая задача").await.expect("failed to set title");
    modal
        .select_project("Оптимизация производительности")
        .await
        .expect("failed to select project");
    modal
        .select_priority(Priority::High)
        .await
        .expect("failed to select priority");
    modal
        .select_assignee("Илья Романов")
        .await
        .expect("failed to select assignee");

    assert!(modal.is_status_locked().await.expect("failed to check status lock"));
    assert_eq!(
        modal.status_value().await.expect("failed to read status"),
        "Backlog"
    );

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn create_enables_only_once_the_form_is_complete() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let issues = IssuesPage::open(&ctx).await.expect("failed to open issues page");
    let modal = issues
        .open_create_task_modal()
        .await
        .expect("failed to open create modal");

    assert!(!modal.is_create_enabled().await.expect("failed to check create button"));

    modal.set_title("Новая задача Kubernetes").await.expect("failed to set title");
    assert!(!modal.is_create_enabled().await.expect("failed to check create button"));

    modal
        .select_project("Переход на Kubernetes")
        .await
        .expect("failed to select project");
    assert!(!modal.is_create_enabled().await.expect("failed to check create button"));

    modal
        .select_priority(Priority::High)
        .await
        .expect("failed to select priority");
    assert!(!modal.is_create_enabled().await.expect("failed to check create button"));

    modal
        .select_assignee("Максим Орлов")
        .await
        .expect("failed to select assignee");
    assert!(modal.is_create_enabled().await.expect("failed to check create button"));

    modal.submit().await.expect("failed to submit");
    assert!(!modal.is_open().await.expect("failed to check modal"));

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn submitting_an_incomplete_form_is_an_interaction_error() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let issues = IssuesPage::open(&ctx).await.expect("failed to open issues page");
    let modal = issues
        .open_create_task_modal()
        .await
        .expect("failed to open create modal");

    modal.set_title("Одно только название").await.expect("failed to set title");
    // The create action exists but stays disabled, so clicking it is an
    // interaction failure, not a silent no-op.
    let err = modal.submit().await.expect_err("submit must fail");
    assert!(matches!(err, Error::Interaction { .. }), "got {err}");

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}
