//! Projects screen: the project catalog with per-project board links.

use crate::error::{Error, Result};
use crate::page::BasePage;
use crate::pages::{BoardPage, Screen};
use crate::selector::SelectorGroup;
use crate::session::TestContext;

fn project_list() -> SelectorGroup {
    SelectorGroup::new(
        "project list",
        &["[data-testid='projects-list']", ".project-list"],
    )
}

fn project_card() -> SelectorGroup {
    SelectorGroup::new(
        "project card",
        &["[data-testid='project-card']", ".project-card"],
    )
}

fn project_title() -> SelectorGroup {
    SelectorGroup::new("project title", &[".project-title", ".project-name", "h3"])
        .inside(&project_card())
}

fn go_to_board_button() -> SelectorGroup {
    SelectorGroup::new(
        "go to board button",
        &[
            "[data-testid='go-to-board']",
            "button:has-text('Перейти к доске')",
            "button:has-text('На доску')",
        ],
    )
}

pub struct ProjectsPage {
    base: BasePage,
}

impl Screen for ProjectsPage {
    fn base(&self) -> &BasePage {
        &self.base
    }

    fn root() -> SelectorGroup {
        project_list()
    }
}

impl ProjectsPage {
    /// Navigates to `/projects` and waits for the page to load.
    pub async fn open(ctx: &TestContext) -> Result<Self> {
        let base = ctx.base().clone();
        base.goto("/projects").await?;
        base.wait_for_page_load().await?;
        Ok(ProjectsPage { base })
    }

    pub async fn project_names(&self) -> Result<Vec<String>> {
        self.base.texts(&project_title()).await
    }

    pub async fn project_count(&self) -> Result<usize> {
        self.base.count(&project_card()).await
    }

    pub async fn is_project_visible(&self, name: &str) -> Result<bool> {
        Ok(self.base.count(&project_card().containing(name)).await? > 0)
    }

    /// Opens the named project's board, preferring the card's board button
    /// and falling back to the card itself.
    pub async fn go_to_project_board(&self, name: &str) -> Result<BoardPage> {
        let card = project_card().containing(name);
        let button = go_to_board_button().inside(&card);
        match self.base.click(&button).await {
            Ok(()) => {}
            Err(Error::ElementNotFound { .. }) => self.base.click(&card).await?,
            Err(other) => return Err(other),
        }
        BoardPage::attach(self.base.clone()).await
    }
}
