use serde::{Deserialize, Serialize};

/// Task status, one per board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::ToDo),
            "in-progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Column header text
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Board columns in display order
    pub fn columns() -> &'static [TaskStatus] {
        &[TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done]
    }

    /// Position of this status in `columns()`
    pub fn index(&self) -> usize {
        match self {
            TaskStatus::ToDo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }

    /// Next status in the ToDo -> InProgress -> Done -> ToDo cycle
    pub fn next(&self) -> Self {
        match self {
            TaskStatus::ToDo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::ToDo,
        }
    }

    /// Inverse of `next`
    pub fn prev(&self) -> Self {
        match self {
            TaskStatus::ToDo => TaskStatus::Done,
            TaskStatus::InProgress => TaskStatus::ToDo,
            TaskStatus::Done => TaskStatus::InProgress,
        }
    }
}

/// A task on the board. Its identity is its position in the owning column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub status: TaskStatus,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(status: TaskStatus, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn with_status(self, status: TaskStatus) -> Self {
        Self { status, ..self }
    }
}

/// Tasks shown on a fresh board, grouped by column in `TaskStatus::columns()` order
pub fn sample_tasks() -> [Vec<Task>; 3] {
    [
        vec![
            Task::new(TaskStatus::ToDo, "buy milk", "strawberry milk"),
            Task::new(TaskStatus::ToDo, "eat sushi", "negitoro roll, miso soup, and rice"),
            Task::new(TaskStatus::ToDo, "fold laundry", "or wear wrinkly clothes :)"),
        ],
        vec![Task::new(TaskStatus::InProgress, "write code", "don't worry, it's Go")],
        vec![Task::new(TaskStatus::Done, "stay cool", "as a cucumber")],
    ]
}
