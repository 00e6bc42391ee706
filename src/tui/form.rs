use crate::model::{Task, TaskStatus};

use super::input::FormAction;
use super::text_field::TextField;

/// Which form field is accepting input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

/// Result of feeding one action to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Still collecting input
    Pending,
    /// Both fields confirmed
    Completed(Task),
    Aborted,
    Quit,
}

/// Two-step entry form for creating or editing a task
#[derive(Debug, Clone)]
pub struct TaskForm {
    target_status: TaskStatus,
    /// Row being edited in the target column, None when creating
    editing: Option<usize>,
    title: TextField,
    description: TextField,
    captured_title: String,
    active: FormField,
}

impl TaskForm {
    /// Empty form for a new task in `status`
    pub fn create(status: TaskStatus) -> Self {
        let mut title = TextField::new();
        title.focus();
        Self {
            target_status: status,
            editing: None,
            title,
            description: TextField::multiline(),
            captured_title: String::new(),
            active: FormField::Title,
        }
    }

    /// Form pre-filled from `task`, which sits at `index` in its column
    pub fn edit(task: &Task, index: usize) -> Self {
        let mut form = Self::create(task.status);
        form.editing = Some(index);
        form.title.set_value(task.title.clone());
        form.description.set_value(task.description.clone());
        form
    }

    pub fn target_status(&self) -> TaskStatus {
        self.target_status
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn active_field(&self) -> FormField {
        self.active
    }

    pub fn title(&self) -> &TextField {
        &self.title
    }

    pub fn description(&self) -> &TextField {
        &self.description
    }

    pub fn handle(&mut self, action: FormAction) -> FormOutcome {
        match action {
            FormAction::Confirm => self.confirm(),
            FormAction::Abort => FormOutcome::Aborted,
            FormAction::Quit => FormOutcome::Quit,
            FormAction::Edit(key) => {
                self.active_text_mut().handle_key(key);
                FormOutcome::Pending
            }
        }
    }

    /// Accept the active field. Empty text is a valid value.
    pub fn confirm(&mut self) -> FormOutcome {
        match self.active {
            FormField::Title => {
                self.captured_title = self.title.value().to_string();
                self.title.blur();
                self.description.focus();
                self.active = FormField::Description;
                FormOutcome::Pending
            }
            FormField::Description => {
                self.description.blur();
                FormOutcome::Completed(Task::new(
                    self.target_status,
                    std::mem::take(&mut self.captured_title),
                    self.description.value(),
                ))
            }
        }
    }

    fn active_text_mut(&mut self) -> &mut TextField {
        match self.active {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }
}
