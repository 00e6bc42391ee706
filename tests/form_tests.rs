use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kanban::model::{Task, TaskStatus};
use kanban::tui::form::{FormField, FormOutcome, TaskForm};
use kanban::tui::input::FormAction;

fn type_text(form: &mut TaskForm, text: &str) {
    for c in text.chars() {
        let outcome = form.handle(FormAction::Edit(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        assert_eq!(outcome, FormOutcome::Pending);
    }
}

#[test]
fn test_create_form_starts_on_title() {
    let form = TaskForm::create(TaskStatus::InProgress);

    assert_eq!(form.active_field(), FormField::Title);
    assert_eq!(form.target_status(), TaskStatus::InProgress);
    assert!(!form.is_editing());
    assert!(form.title().is_focused());
    assert!(!form.description().is_focused());
    assert_eq!(form.title().value(), "");
}

#[test]
fn test_confirm_title_moves_to_description() {
    let mut form = TaskForm::create(TaskStatus::ToDo);
    type_text(&mut form, "X");

    assert_eq!(form.confirm(), FormOutcome::Pending);

    assert_eq!(form.active_field(), FormField::Description);
    assert!(!form.title().is_focused());
    assert!(form.description().is_focused());
}

#[test]
fn test_full_create_flow_emits_task() {
    let mut form = TaskForm::create(TaskStatus::Done);
    type_text(&mut form, "X");
    form.handle(FormAction::Confirm);
    type_text(&mut form, "Y");

    let outcome = form.handle(FormAction::Confirm);

    assert_eq!(outcome, FormOutcome::Completed(Task::new(TaskStatus::Done, "X", "Y")));
}

#[test]
fn test_empty_fields_are_accepted() {
    let mut form = TaskForm::create(TaskStatus::ToDo);
    form.confirm();

    assert_eq!(form.confirm(), FormOutcome::Completed(Task::new(TaskStatus::ToDo, "", "")));
}

#[test]
fn test_typing_goes_to_active_field_only() {
    let mut form = TaskForm::create(TaskStatus::ToDo);
    type_text(&mut form, "title");
    form.confirm();
    type_text(&mut form, "desc");

    assert_eq!(form.title().value(), "title");
    assert_eq!(form.description().value(), "desc");
}

#[test]
fn test_edit_form_prefills_fields() {
    let task = Task::new(TaskStatus::InProgress, "write code", "don't worry");
    let mut form = TaskForm::edit(&task, 3);

    assert_eq!(form.editing_index(), Some(3));
    assert_eq!(form.target_status(), TaskStatus::InProgress);

    form.handle(FormAction::Edit(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE)));
    form.confirm();

    assert_eq!(
        form.confirm(),
        FormOutcome::Completed(Task::new(TaskStatus::InProgress, "write code!", "don't worry"))
    );
}

#[test]
fn test_abort_and_quit_outcomes() {
    let mut form = TaskForm::create(TaskStatus::ToDo);
    assert_eq!(form.handle(FormAction::Abort), FormOutcome::Aborted);
    assert_eq!(form.handle(FormAction::Quit), FormOutcome::Quit);

    form.confirm();
    assert_eq!(form.handle(FormAction::Abort), FormOutcome::Aborted);
}

#[test]
fn test_title_is_captured_on_confirm() {
    let mut form = TaskForm::create(TaskStatus::ToDo);
    type_text(&mut form, "first");
    form.confirm();
    type_text(&mut form, "d");

    match form.confirm() {
        FormOutcome::Completed(task) => assert_eq!(task.title, "first"),
        other => panic!("expected completed task, got {:?}", other),
    }
}

#[test]
fn test_multiline_description() {
    let mut form = TaskForm::create(TaskStatus::ToDo);
    form.confirm();
    type_text(&mut form, "a");
    form.handle(FormAction::Edit(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)));
    type_text(&mut form, "b");

    assert_eq!(form.confirm(), FormOutcome::Completed(Task::new(TaskStatus::ToDo, "", "a\nb")));
}
