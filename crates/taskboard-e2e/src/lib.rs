//! taskboard-e2e: page-object end-to-end suite for the task tracker UI.
//!
//! The crate is the abstraction layer between test scenarios and the
//! browser: selector fallback groups resolved against the live DOM, shared
//! page primitives, one page object per screen, and an explicit session
//! lifecycle. Scenarios live in `tests/` and run against the seeded
//! fixture application (`taskboard-fixture`) by default, or against a live
//! deployment via `TASKBOARD_BASE_URL`.
//!
//! # Example
//!
//! ```ignore
//! use taskboard_e2e::{IssuesPage, NewTask, Priority, Session, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() -> taskboard_e2e::Result<()> {
//!     let session = Session::launch(SessionConfig::from_env()).await?;
//!     let ctx = session.new_context().await?;
//!
//!     let issues = IssuesPage::open(&ctx).await?;
//!     let modal = issues.open_create_task_modal().await?;
//!     modal
//!         .create(&NewTask::new(
//!             "Оптимизация",
//!             "Оптимизация производительности",
//!             Priority::High,
//!             "Илья Романов",
//!         ))
//!         .await?;
//!     assert!(issues.is_task_visible("Оптимизация").await?);
//!
//!     ctx.close().await?;
//!     session.close().await?;
//!     Ok(())
//! }
//! ```

mod error;
mod model;
mod page;
mod pages;
mod selector;
mod session;

pub use error::{Error, Result};
pub use model::{Column, NewTask, Priority, Status, StatusFilter};
pub use page::BasePage;
pub use pages::{BoardPage, CreateTaskModal, IssuesPage, ProjectsPage, Screen, TaskCardModal};
pub use selector::{resolve, resolve_actionable, try_resolve, ElementProbe, SelectorGroup};
pub use session::{Session, SessionConfig, TestContext, DEFAULT_BASE_URL};
