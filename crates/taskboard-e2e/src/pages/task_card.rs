//! Task-card modal: viewing and editing an existing task.
//!
//! Reached from the issues list or from a board. Only the issues-list
//! variant offers the board navigation action; on a board the action is
//! absent, which `has_go_to_board` reports as a plain negative.

use crate::error::{Error, Result};
use crate::model::Status;
use crate::page::BasePage;
use crate::pages::{BoardPage, Screen};
use crate::selector::SelectorGroup;

fn modal_root() -> SelectorGroup {
    SelectorGroup::new(
        "task card modal",
        &["[data-testid='edit-issue-modal']", "[role='dialog']"],
    )
}

fn title_field() -> SelectorGroup {
    SelectorGroup::new(
        "task title",
        &["[data-testid='task-title']", ".task-title", "h2"],
    )
    .inside(&modal_root())
}

fn description_field() -> SelectorGroup {
    SelectorGroup::new(
        "task description",
        &["[data-testid='task-description']", ".task-description"],
    )
    .inside(&modal_root())
}

fn project_field() -> SelectorGroup {
    SelectorGroup::new(
        "task project",
        &["[data-testid='task-project']", ".task-project"],
    )
    .inside(&modal_root())
}

fn priority_field() -> SelectorGroup {
    SelectorGroup::new(
        "task priority",
        &["[data-testid='task-priority']", ".task-priority"],
    )
    .inside(&modal_root())
}

fn assignee_field() -> SelectorGroup {
    SelectorGroup::new(
        "task assignee",
        &["[data-testid='task-assignee']", ".task-assignee"],
    )
    .inside(&modal_root())
}

fn status_select() -> SelectorGroup {
    SelectorGroup::new(
        "status select",
        &["[data-testid='status-select']", "select[name='status']"],
    )
    .inside(&modal_root())
}

fn go_to_board_button() -> SelectorGroup {
    SelectorGroup::new(
        "go to board button",
        &[
            "[data-testid='go-to-board-btn']",
            "button:has-text('Перейти на доску')",
            "button:has-text('На доску')",
        ],
    )
    .inside(&modal_root())
}

fn update_button() -> SelectorGroup {
    SelectorGroup::new(
        "update button",
        &[
            "[data-testid='update-btn']",
            "button:has-text('Обновить')",
            "button:has-text('Сохранить')",
        ],
    )
    .inside(&modal_root())
}

fn close_button() -> SelectorGroup {
    SelectorGroup::new(
        "close button",
        &[
            "[data-testid='close-btn']",
            ".close-btn",
            "button:has-text('Закрыть')",
        ],
    )
    .inside(&modal_root())
}

pub struct TaskCardModal {
    base: BasePage,
}

impl Screen for TaskCardModal {
    fn base(&self) -> &BasePage {
        &self.base
    }

    fn root() -> SelectorGroup {
        modal_root()
    }
}

impl TaskCardModal {
    /// Binds to the modal, suspending until its root is visible.
    pub(crate) async fn attach(base: BasePage) -> Result<Self> {
        let modal = TaskCardModal { base };
        modal.base.wait_for_visible(&modal_root()).await?;
        Ok(modal)
    }

    // Reads are lenient: a field the deployment does not render reads as
    // empty rather than failing the scenario.

    pub async fn title(&self) -> Result<String> {
        self.base.text(&title_field()).await
    }

    pub async fn description(&self) -> Result<String> {
        self.base.text(&description_field()).await
    }

    pub async fn project(&self) -> Result<String> {
        self.base.text(&project_field()).await
    }

    pub async fn priority(&self) -> Result<String> {
        self.base.text(&priority_field()).await
    }

    pub async fn assignee(&self) -> Result<String> {
        self.base.text(&assignee_field()).await
    }

    pub async fn status(&self) -> Result<String> {
        if self.base.count(&status_select()).await? == 0 {
            return Ok(String::new());
        }
        self.base.input_value(&status_select()).await
    }

    pub async fn set_status(&self, status: Status) -> Result<()> {
        self.base.select(&status_select(), status.as_str()).await
    }

    /// Applies edits and waits for the modal to close.
    pub async fn save(&self) -> Result<()> {
        self.base.click(&update_button()).await?;
        self.base.wait_for_hidden(&modal_root()).await
    }

    /// Whether the card exposes the minimum fields a task card must show.
    pub async fn has_required_fields(&self) -> Result<bool> {
        Ok(self.base.count(&title_field()).await? > 0)
    }

    /// Whether the board navigation action is offered. Absent by design
    /// when the card was opened from a board.
    pub async fn has_go_to_board(&self) -> Result<bool> {
        if self.base.count(&go_to_board_button()).await? == 0 {
            return Ok(false);
        }
        self.base.is_visible(&go_to_board_button()).await
    }

    /// Navigates to the task's board. Strict: only valid where the action
    /// is offered.
    pub async fn go_to_board(self) -> Result<BoardPage> {
        self.base.click(&go_to_board_button()).await?;
        BoardPage::attach(self.base).await
    }

    /// Closes the card; the close button when present, Escape otherwise.
    /// The caller's previous screen object stays valid.
    pub async fn close(self) -> Result<()> {
        match self.base.click(&close_button()).await {
            Ok(()) => {}
            Err(Error::ElementNotFound { .. }) => self.base.press_key("Escape").await?,
            Err(other) => return Err(other),
        }
        self.base.wait_for_hidden(&modal_root()).await
    }
}
