// Task-card scenarios: opening, navigation symmetry, editing.

mod support;

use taskboard_e2e::{BoardPage, Column, IssuesPage, Screen, Status};

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn opens_a_task_card_from_the_list() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let issues = IssuesPage::open(&ctx).await.expect("failed to open issues page");
    issues.search("Реализация").await.expect("failed to search");

    let card = issues
        .open_task_card("Реализация")
        .await
        .expect("failed to open the task card");

    assert!(card.is_open().await.expect("failed to check the card"));
    assert!(card.has_required_fields().await.expect("failed to check fields"));
    assert_eq!(
        card.title().await.expect("failed to read title"),
        "Реализация темной темы"
    );
    // Opened from the list, the card offers board navigation.
    assert!(card.has_go_to_board().await.expect("failed to check board action"));

    card.close().await.expect("failed to close the card");
    assert_eq!(issues.task_count().await.expect("failed to count tasks"), 1);

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn go_to_board_lands_on_the_tasks_board() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let issues = IssuesPage::open(&ctx).await.expect("failed to open issues page");
    let card = issues
        .open_task_card("Редизайн блока отзывов")
        .await
        .expect("failed to open the task card");

    let board = card.go_to_board().await.expect("failed to navigate to the board");

    assert!(board.current_url().contains("/board"));
    assert!(board.is_board_visible().await.expect("failed to check board"));
    assert!(board
        .is_task_in_column("Редизайн блока отзывов", Column::InProgress)
        .await
        .expect("failed to check column membership"));

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn card_opened_from_a_board_has_no_board_action() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let board = BoardPage::open(&ctx, "1").await.expect("failed to open board 1");
    let card = board
        .open_task_card("Рефакторинг эндпоинтов авторизации")
        .await
        .expect("failed to open the task card");

    assert!(card.is_open().await.expect("failed to check the card"));
    // Already on the board, so the action is meaningless and absent.
    assert!(!card.has_go_to_board().await.expect("failed to check board action"));

    card.close().await.expect("failed to close the card");

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}

#[tokio::test]
#[ignore = "requires installed Playwright browsers (npx playwright install chromium)"]
async fn editing_status_moves_the_card_between_columns() {
    let harness = support::start().await;
    let ctx = harness.session.new_context().await.expect("failed to create context");

    let board = BoardPage::open(&ctx, "1").await.expect("failed to open board 1");
    let title = "Оптимизация SQL-запросов списка заказов";
    assert!(board
        .is_task_in_column(title, Column::Todo)
        .await
        .expect("failed to check column membership"));

    let card = board.open_task_card(title).await.expect("failed to open the card");
    card.set_status(Status::Done).await.expect("failed to change status");
    card.save().await.expect("failed to save the card");

    assert!(board
        .is_task_in_column(title, Column::Done)
        .await
        .expect("failed to check column membership"));
    assert!(!board
        .is_task_in_column(title, Column::Todo)
        .await
        .expect("failed to check column membership"));

    ctx.close().await.expect("failed to close context");
    harness.finish().await;
}
