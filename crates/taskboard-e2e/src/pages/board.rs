//! Board screen: one project's kanban columns.

use crate::error::Result;
use crate::model::Column;
use crate::page::BasePage;
use crate::pages::{Screen, TaskCardModal};
use crate::selector::SelectorGroup;
use crate::session::TestContext;

fn board_container() -> SelectorGroup {
    SelectorGroup::new(
        "board",
        &["[data-testid='board']", ".kanban-board", ".board"],
    )
}

fn board_title() -> SelectorGroup {
    SelectorGroup::new(
        "board title",
        &["[data-testid='board-title']", ".board-title", "h1"],
    )
}

fn any_column() -> SelectorGroup {
    SelectorGroup::new(
        "board column",
        &["[data-testid='board-column']", ".board-column", ".column"],
    )
}

fn column(column: Column) -> SelectorGroup {
    // The "To Do" column goes by its backlog name on some deployments.
    match column {
        Column::Todo => SelectorGroup::new(
            "To Do column",
            &[
                "[data-testid='column-todo']",
                ".board-column:has-text('To Do')",
                ".column:has-text('To Do')",
                ".board-column:has-text('Backlog')",
            ],
        ),
        Column::InProgress => SelectorGroup::new(
            "In Progress column",
            &[
                "[data-testid='column-inprogress']",
                ".board-column:has-text('In Progress')",
                ".column:has-text('In Progress')",
            ],
        ),
        Column::Done => SelectorGroup::new(
            "Done column",
            &[
                "[data-testid='column-done']",
                ".board-column:has-text('Done')",
                ".column:has-text('Done')",
            ],
        ),
    }
}

fn task_card() -> SelectorGroup {
    SelectorGroup::new(
        "task card",
        &["[data-testid='task-card']", ".task-card", ".issue-card"],
    )
}

fn card_title() -> SelectorGroup {
    SelectorGroup::new("card title", &["[data-testid='card-title']", ".card-title"])
}

pub struct BoardPage {
    base: BasePage,
}

impl Screen for BoardPage {
    fn base(&self) -> &BasePage {
        &self.base
    }

    fn root() -> SelectorGroup {
        board_container()
    }
}

impl BoardPage {
    /// Navigates straight to `/board/{id}` and waits for the board.
    pub async fn open(ctx: &TestContext, board_id: &str) -> Result<Self> {
        let base = ctx.base().clone();
        base.goto(&format!("/board/{board_id}")).await?;
        base.wait_for_page_load().await?;
        BoardPage::attach(base).await
    }

    /// Binds to an already-navigated page, suspending until the board's
    /// root is visible.
    pub(crate) async fn attach(base: BasePage) -> Result<Self> {
        let board = BoardPage { base };
        board.base.wait_for_visible(&board_container()).await?;
        Ok(board)
    }

    pub async fn title(&self) -> Result<String> {
        self.base.text(&board_title()).await
    }

    /// Whether the named column is present. Absence is a valid negative.
    pub async fn has_column(&self, which: Column) -> Result<bool> {
        Ok(self.base.count(&column(which)).await? > 0)
    }

    pub async fn has_all_columns(&self) -> Result<bool> {
        for which in Column::ALL {
            if !self.has_column(which).await? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub async fn column_count(&self) -> Result<usize> {
        self.base.count(&any_column()).await
    }

    /// Titles of the cards in one column, top to bottom.
    pub async fn tasks_in(&self, which: Column) -> Result<Vec<String>> {
        self.base.texts(&card_title().inside(&column(which))).await
    }

    pub async fn task_count_in(&self, which: Column) -> Result<usize> {
        self.base.count(&task_card().inside(&column(which))).await
    }

    pub async fn total_task_count(&self) -> Result<usize> {
        self.base.count(&task_card()).await
    }

    pub async fn is_task_in_column(&self, title: &str, which: Column) -> Result<bool> {
        let card = task_card().containing(title).inside(&column(which));
        Ok(self.base.count(&card).await? > 0)
    }

    pub async fn is_task_visible(&self, title: &str) -> Result<bool> {
        Ok(self.base.count(&task_card().containing(title)).await? > 0)
    }

    pub async fn is_board_visible(&self) -> Result<bool> {
        if self.base.is_visible(&board_container()).await? {
            return Ok(true);
        }
        Ok(self.base.count(&any_column()).await? > 0)
    }

    /// Opens the named task's card. The returned modal has no board
    /// navigation action, since the board is already open.
    pub async fn open_task_card(&self, title: &str) -> Result<TaskCardModal> {
        self.base.click(&task_card().containing(title)).await?;
        TaskCardModal::attach(self.base.clone()).await
    }

    /// Opens the first card in the given column.
    pub async fn open_first_task_in(&self, which: Column) -> Result<TaskCardModal> {
        self.base.click(&task_card().inside(&column(which))).await?;
        TaskCardModal::attach(self.base.clone()).await
    }
}
