use crate::model::{sample_tasks, Task, TaskList, TaskStatus};

use super::form::TaskForm;

/// Header line above the columns
pub const HEADER_HEIGHT: u16 = 1;
/// Footer box below the columns
pub const FOOTER_HEIGHT: u16 = 3;
/// Rows of the viewport not available to the columns
pub const COLUMN_MARGIN: u16 = HEADER_HEIGHT + FOOTER_HEIGHT;

/// State for the kanban board view
#[derive(Debug, Clone)]
pub struct BoardState {
    columns: [TaskList; 3],
    focused: TaskStatus,
    /// Row in the focused column being edited, consumed by the next completed form
    editing_index: Option<usize>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::with_tasks([vec![], vec![], vec![]])
    }

    /// Board seeded with the sample tasks
    pub fn sample() -> Self {
        Self::with_tasks(sample_tasks())
    }

    /// Build a board from per-column task lists in `TaskStatus::columns()` order.
    /// Each task takes the status of the column it is placed in.
    pub fn with_tasks(columns: [Vec<Task>; 3]) -> Self {
        let [todo, in_progress, done] = columns;
        let list = |tasks: Vec<Task>, status: TaskStatus| {
            TaskList::new(tasks.into_iter().map(|t| t.with_status(status)).collect())
        };
        Self {
            columns: [
                list(todo, TaskStatus::ToDo),
                list(in_progress, TaskStatus::InProgress),
                list(done, TaskStatus::Done),
            ],
            focused: TaskStatus::ToDo,
            editing_index: None,
        }
    }

    pub fn focused(&self) -> TaskStatus {
        self.focused
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    pub fn column(&self, status: TaskStatus) -> &TaskList {
        &self.columns[status.index()]
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut TaskList {
        &mut self.columns[status.index()]
    }

    pub fn focused_column(&self) -> &TaskList {
        self.column(self.focused)
    }

    /// Get the currently selected task in the focused column
    pub fn selected_task(&self) -> Option<&Task> {
        self.focused_column().selected()
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(TaskList::len).sum()
    }

    /// Focus the next column, wrapping from Done to To Do
    pub fn next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Focus the previous column, wrapping from To Do to Done
    pub fn prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn focus(&mut self, status: TaskStatus) {
        self.focused = status;
    }

    /// Select a row in the focused column
    pub fn select(&mut self, row: usize) {
        let status = self.focused;
        self.column_mut(status).select(row);
    }

    pub fn move_up(&mut self) {
        let status = self.focused;
        self.column_mut(status).select_prev();
    }

    pub fn move_down(&mut self) {
        let status = self.focused;
        self.column_mut(status).select_next();
    }

    /// Move the selected task to the end of the next status column.
    /// No-op when the focused column has no selection.
    pub fn move_to_next(&mut self) {
        let source = self.focused;
        let Some(index) = self.column(source).selected_index() else {
            return;
        };
        let Some(task) = self.column_mut(source).remove_at(index) else {
            return;
        };
        let destination = task.status.next();
        tracing::debug!(
            title = %task.title,
            from = source.as_str(),
            to = destination.as_str(),
            "advancing task"
        );
        self.column_mut(destination).push(task.with_status(destination));
    }

    /// Remove the selected task from the focused column
    pub fn delete_current(&mut self) -> Option<Task> {
        let status = self.focused;
        let index = self.column(status).selected_index()?;
        let removed = self.column_mut(status).remove_at(index);
        if let Some(task) = &removed {
            tracing::debug!(title = %task.title, column = status.as_str(), "deleted task");
        }
        removed
    }

    /// Form for a new task in the focused column
    pub fn begin_create(&mut self) -> TaskForm {
        self.editing_index = None;
        tracing::debug!(column = self.focused.as_str(), "opening create form");
        TaskForm::create(self.focused)
    }

    /// Form pre-filled with the selected task, remembering its row.
    /// None when the focused column is empty.
    pub fn begin_edit(&mut self) -> Option<TaskForm> {
        let column = self.focused_column();
        let index = column.selected_index()?;
        let task = column.items().get(index)?;
        let form = TaskForm::edit(task, index);
        tracing::debug!(column = self.focused.as_str(), index, "opening edit form");
        self.editing_index = Some(index);
        Some(form)
    }

    /// Take a completed task from the form: replace the edited row, or append
    pub fn receive_task(&mut self, task: Task) {
        let status = task.status;
        match self.editing_index.take() {
            Some(index) => {
                if let Err(task) = self.replace(status, index, task) {
                    tracing::warn!(index, column = status.as_str(), "edit target vanished, appending");
                    self.column_mut(status).push(task);
                }
            }
            None => {
                tracing::debug!(title = %task.title, column = status.as_str(), "created task");
                self.column_mut(status).push(task);
            }
        }
    }

    fn replace(&mut self, status: TaskStatus, index: usize, task: Task) -> Result<(), Task> {
        let column = self.column_mut(status);
        if index >= column.len() {
            return Err(task);
        }
        tracing::debug!(title = %task.title, column = status.as_str(), index, "updated task");
        column.replace_at(index, task);
        Ok(())
    }

    /// Forget any pending edit after the form was abandoned
    pub fn cancel_edit(&mut self) {
        self.editing_index = None;
    }

    /// Recompute column geometry for a new viewport size
    pub fn resize(&mut self, width: u16, height: u16) {
        let column_width = width / 3;
        let column_height = height.saturating_sub(COLUMN_MARGIN);
        for column in &mut self.columns {
            column.set_size(column_width, column_height);
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
