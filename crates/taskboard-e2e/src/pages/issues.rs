//! Issues screen: the searchable, filterable task list.

use crate::error::Result;
use crate::model::StatusFilter;
use crate::page::BasePage;
use crate::pages::{CreateTaskModal, Screen, TaskCardModal};
use crate::selector::SelectorGroup;
use crate::session::TestContext;

fn task_list() -> SelectorGroup {
    SelectorGroup::new(
        "task list",
        &["[data-testid='issues-list']", ".issue-list", ".task-list"],
    )
}

fn task_card() -> SelectorGroup {
    SelectorGroup::new(
        "task card",
        &["[data-testid='issue-card']", ".issue-card", ".task-card"],
    )
}

fn task_title() -> SelectorGroup {
    SelectorGroup::new("task title", &[".issue-title", ".task-title"]).inside(&task_card())
}

fn search_input() -> SelectorGroup {
    SelectorGroup::new(
        "search input",
        &["[data-testid='search-input']", "input[placeholder*='Поиск']"],
    )
}

fn status_filter() -> SelectorGroup {
    SelectorGroup::new(
        "status filter",
        &[
            "[data-testid='status-filter']",
            "select[name='status']",
            ".status-filter select",
        ],
    )
}

fn board_filter() -> SelectorGroup {
    SelectorGroup::new(
        "board filter",
        &[
            "[data-testid='board-filter']",
            "select[name='board']",
            ".board-filter select",
        ],
    )
}

fn create_task_button() -> SelectorGroup {
    SelectorGroup::new(
        "create task button",
        &[
            "[data-testid='create-issue-btn']",
            "button:has-text('Создать задачу')",
        ],
    )
}

fn no_tasks_message() -> SelectorGroup {
    SelectorGroup::new(
        "no tasks message",
        &[
            "[data-testid='no-issues']",
            ".no-issues",
            "p:has-text('Задачи не найдены')",
        ],
    )
}

pub struct IssuesPage {
    base: BasePage,
}

impl Screen for IssuesPage {
    fn base(&self) -> &BasePage {
        &self.base
    }

    fn root() -> SelectorGroup {
        task_list()
    }
}

impl IssuesPage {
    /// Navigates to `/issues` and waits for the page to load.
    pub async fn open(ctx: &TestContext) -> Result<Self> {
        let base = ctx.base().clone();
        base.goto("/issues").await?;
        base.wait_for_page_load().await?;
        Ok(IssuesPage { base })
    }

    /// Types a search query and lets the debounced list settle.
    pub async fn search(&self, query: &str) -> Result<()> {
        self.base.fill(&search_input(), query).await?;
        self.base.settle().await;
        Ok(())
    }

    pub async fn clear_search(&self) -> Result<()> {
        self.base.clear(&search_input()).await?;
        self.base.settle().await;
        Ok(())
    }

    pub async fn filter_by_status(&self, filter: StatusFilter) -> Result<()> {
        self.base.select(&status_filter(), filter.option_value()).await?;
        self.base.settle().await;
        Ok(())
    }

    /// Filters by board name; the reset option is the localized "Все".
    pub async fn filter_by_board(&self, board: &str) -> Result<()> {
        self.base.select(&board_filter(), board).await?;
        self.base.settle().await;
        Ok(())
    }

    /// Clears the search and resets both filters to their catch-alls.
    pub async fn reset_filters(&self) -> Result<()> {
        self.clear_search().await?;
        self.filter_by_status(StatusFilter::All).await?;
        self.filter_by_board("Все").await?;
        Ok(())
    }

    pub async fn task_titles(&self) -> Result<Vec<String>> {
        self.base.texts(&task_title()).await
    }

    pub async fn task_count(&self) -> Result<usize> {
        self.base.count(&task_card()).await
    }

    pub async fn is_task_visible(&self, title: &str) -> Result<bool> {
        Ok(self.base.count(&task_card().containing(title)).await? > 0)
    }

    pub async fn no_tasks_message_visible(&self) -> Result<bool> {
        self.base.is_visible(&no_tasks_message()).await
    }

    pub async fn is_search_visible(&self) -> Result<bool> {
        self.base.is_visible(&search_input()).await
    }

    /// Opens the create-task modal; returns once the modal is rendered.
    pub async fn open_create_task_modal(&self) -> Result<CreateTaskModal> {
        self.base.click(&create_task_button()).await?;
        CreateTaskModal::attach(self.base.clone()).await
    }

    /// Opens the named task's card from the list.
    pub async fn open_task_card(&self, title: &str) -> Result<TaskCardModal> {
        self.base.click(&task_card().containing(title)).await?;
        TaskCardModal::attach(self.base.clone()).await
    }
}
