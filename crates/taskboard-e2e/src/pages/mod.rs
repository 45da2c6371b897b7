// Page objects, one per logical screen or overlay.
//
// The five screens are a variant set unified by a shared capability, not a
// class hierarchy: each one composes `BasePage` with its own selector
// table and exposes screen-specific operations. Navigation operations
// return the next screen's page object, modeling the UI as a state
// machine.

mod board;
mod create_task;
mod issues;
mod projects;
mod task_card;

pub use board::BoardPage;
pub use create_task::CreateTaskModal;
pub use issues::IssuesPage;
pub use projects::ProjectsPage;
pub use task_card::TaskCardModal;

use crate::error::Result;
use crate::page::BasePage;
use crate::selector::SelectorGroup;

/// Capability shared by every screen and modal.
#[allow(async_fn_in_trait)]
pub trait Screen {
    /// The primitives bound to this screen's page.
    fn base(&self) -> &BasePage;

    /// Selector group for the screen's root element.
    fn root() -> SelectorGroup;

    /// Whether the screen's root is currently visible. Lenient.
    async fn is_open(&self) -> Result<bool> {
        self.base().is_visible(&Self::root()).await
    }

    /// Current page URL. Non-suspending.
    fn current_url(&self) -> String {
        self.base().current_url()
    }
}
