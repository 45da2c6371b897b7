//! Create-task modal.
//!
//! Field selectors are scoped under the modal root: the screen behind the
//! overlay has its own "Создать" button and status control, and unscoped
//! text fallbacks would land on them.

use crate::error::Result;
use crate::model::{NewTask, Priority};
use crate::page::BasePage;
use crate::pages::Screen;
use crate::selector::SelectorGroup;

fn modal_root() -> SelectorGroup {
    SelectorGroup::new(
        "create task modal",
        &["[data-testid='create-issue-modal']", "[role='dialog']"],
    )
}

fn title_input() -> SelectorGroup {
    SelectorGroup::new(
        "title input",
        &[
            "[data-testid='title-input']",
            "input[name='title']",
            "input[placeholder*='Название']",
        ],
    )
    .inside(&modal_root())
}

fn description_input() -> SelectorGroup {
    SelectorGroup::new(
        "description input",
        &[
            "[data-testid='description-input']",
            "textarea[name='description']",
            "textarea[placeholder*='Описание']",
        ],
    )
    .inside(&modal_root())
}

fn project_select() -> SelectorGroup {
    SelectorGroup::new(
        "project select",
        &["[data-testid='project-select']", "select[name='project']"],
    )
    .inside(&modal_root())
}

fn priority_select() -> SelectorGroup {
    SelectorGroup::new(
        "priority select",
        &["[data-testid='priority-select']", "select[name='priority']"],
    )
    .inside(&modal_root())
}

fn assignee_select() -> SelectorGroup {
    SelectorGroup::new(
        "assignee select",
        &["[data-testid='assignee-select']", "select[name='assignee']"],
    )
    .inside(&modal_root())
}

fn status_field() -> SelectorGroup {
    SelectorGroup::new(
        "status field",
        &[
            "[data-testid='status-field']",
            "input[name='status']",
            ".status-field",
        ],
    )
    .inside(&modal_root())
}

fn create_button() -> SelectorGroup {
    SelectorGroup::new(
        "create button",
        &["[data-testid='create-btn']", "button:has-text('Создать')"],
    )
    .inside(&modal_root())
}

fn cancel_button() -> SelectorGroup {
    SelectorGroup::new(
        "cancel button",
        &["[data-testid='cancel-btn']", "button:has-text('Отмена')"],
    )
    .inside(&modal_root())
}

pub struct CreateTaskModal {
    base: BasePage,
}

impl Screen for CreateTaskModal {
    fn base(&self) -> &BasePage {
        &self.base
    }

    fn root() -> SelectorGroup {
        modal_root()
    }
}

impl CreateTaskModal {
    /// Binds to the modal, suspending until its root is visible. Never
    /// returns a handle to a not-yet-rendered modal.
    pub(crate) async fn attach(base: BasePage) -> Result<Self> {
        let modal = CreateTaskModal { base };
        modal.base.wait_for_visible(&modal_root()).await?;
        Ok(modal)
    }

    pub async fn set_title(&self, title: &str) -> Result<()> {
        self.base.fill(&title_input(), title).await
    }

    pub async fn set_description(&self, description: &str) -> Result<()> {
        self.base.fill(&description_input(), description).await
    }

    pub async fn select_project(&self, project: &str) -> Result<()> {
        self.base.select(&project_select(), project).await
    }

    pub async fn select_priority(&self, priority: Priority) -> Result<()> {
        self.base.select(&priority_select(), priority.as_str()).await
    }

    pub async fn select_assignee(&self, assignee: &str) -> Result<()> {
        self.base.select(&assignee_select(), assignee).await
    }

    /// The creation-time status. Always "Backlog" on a conforming build.
    pub async fn status_value(&self) -> Result<String> {
        self.base.input_value(&status_field()).await
    }

    /// Whether the status control rejects edits (disabled or readonly).
    pub async fn is_status_locked(&self) -> Result<bool> {
        if !self.base.is_enabled(&status_field()).await? {
            return Ok(true);
        }
        Ok(self.base.attribute(&status_field(), "readonly").await?.is_some())
    }

    pub async fn is_create_enabled(&self) -> Result<bool> {
        self.base.is_enabled(&create_button()).await
    }

    /// Clicks the create action and waits for the modal to close.
    ///
    /// Fails with an Interaction condition while required fields are
    /// missing, since the button stays disabled.
    pub async fn submit(&self) -> Result<()> {
        self.base.click(&create_button()).await?;
        self.base.wait_for_hidden(&modal_root()).await
    }

    /// Dismisses the form without creating anything.
    pub async fn cancel(self) -> Result<()> {
        self.base.click(&cancel_button()).await?;
        self.base.wait_for_hidden(&modal_root()).await
    }

    /// Fills the whole form and submits it.
    pub async fn create(&self, task: &NewTask) -> Result<()> {
        self.set_title(&task.title).await?;
        if let Some(description) = &task.description {
            self.set_description(description).await?;
        }
        self.select_project(&task.project).await?;
        self.select_priority(task.priority).await?;
        self.select_assignee(&task.assignee).await?;
        self.submit().await
    }
}
