// Domain vocabulary shared by the page objects and the scenarios.

use std::fmt;

/// Task lifecycle status as the application exposes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Backlog,
    InProgress,
    Done,
}

impl Status {
    /// Value attribute used by the application's status `<select>`s.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Backlog => "Backlog",
            Status::InProgress => "InProgress",
            Status::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board column. One column per status; `Backlog` tasks live in "To Do".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Todo,
    InProgress,
    Done,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    /// Column header as rendered on the board.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Todo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }

    /// The column a task with the given status is rendered in.
    pub fn for_status(status: Status) -> Column {
        match status {
            Status::Backlog => Column::Todo,
            Status::InProgress => Column::InProgress,
            Status::Done => Column::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Status filter on the issues screen. The reset option is localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    /// Value attribute of the corresponding filter option.
    pub fn option_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "Все",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

/// Input for the create-task form. Title is the single required free-text
/// field; status is not here at all — it is fixed to Backlog at creation.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub project: String,
    pub priority: Priority,
    pub assignee: String,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        project: impl Into<String>,
        priority: Priority,
        assignee: impl Into<String>,
    ) -> Self {
        NewTask {
            title: title.into(),
            description: None,
            project: project.into(),
            priority,
            assignee: assignee.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
