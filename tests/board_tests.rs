use kanban::model::{Task, TaskStatus};
use kanban::tui::board::{BoardState, COLUMN_MARGIN, FOOTER_HEIGHT, HEADER_HEIGHT};

fn titles(board: &BoardState, status: TaskStatus) -> Vec<String> {
    board.column(status).items().iter().map(|t| t.title.clone()).collect()
}

fn columns_snapshot(board: &BoardState) -> Vec<Vec<Task>> {
    TaskStatus::columns()
        .iter()
        .map(|s| board.column(*s).items().to_vec())
        .collect()
}

fn task(status: TaskStatus, title: &str) -> Task {
    Task::new(status, title, format!("{} details", title))
}

// === BoardState Tests ===

#[test]
fn test_board_state_new() {
    let board = BoardState::new();

    assert_eq!(board.total_tasks(), 0);
    assert_eq!(board.focused(), TaskStatus::ToDo);
    assert!(board.editing_index().is_none());
    assert!(board.selected_task().is_none());
}

#[test]
fn test_board_state_default() {
    let board = BoardState::default();

    assert_eq!(board.total_tasks(), 0);
    assert_eq!(board.focused(), TaskStatus::ToDo);
}

#[test]
fn test_sample_board() {
    let board = BoardState::sample();

    assert_eq!(titles(&board, TaskStatus::ToDo), ["buy milk", "eat sushi", "fold laundry"]);
    assert_eq!(titles(&board, TaskStatus::InProgress), ["write code"]);
    assert_eq!(titles(&board, TaskStatus::Done), ["stay cool"]);
    assert_eq!(board.selected_task().unwrap().title, "buy milk");
}

#[test]
fn test_with_tasks_aligns_status_to_column() {
    let board = BoardState::with_tasks([
        vec![task(TaskStatus::Done, "misfiled")],
        vec![],
        vec![],
    ]);

    assert_eq!(board.column(TaskStatus::ToDo).items()[0].status, TaskStatus::ToDo);
}

// === Navigation Tests ===

#[test]
fn test_next_cycles_through_columns() {
    let mut board = BoardState::new();

    board.next();
    assert_eq!(board.focused(), TaskStatus::InProgress);
    board.next();
    assert_eq!(board.focused(), TaskStatus::Done);
    board.next();
    assert_eq!(board.focused(), TaskStatus::ToDo);
}

#[test]
fn test_prev_is_inverse_of_next() {
    for start in TaskStatus::columns() {
        let mut board = BoardState::new();
        board.focus(*start);

        board.next();
        board.prev();
        assert_eq!(board.focused(), *start);

        board.prev();
        board.next();
        assert_eq!(board.focused(), *start);
    }
}

#[test]
fn test_prev_wraps_from_todo_to_done() {
    let mut board = BoardState::new();

    board.prev();
    assert_eq!(board.focused(), TaskStatus::Done);
}

#[test]
fn test_move_up_and_down() {
    let mut board = BoardState::sample();

    board.move_down();
    board.move_down();
    assert_eq!(board.selected_task().unwrap().title, "fold laundry");

    // Should not go beyond last task
    board.move_down();
    assert_eq!(board.selected_task().unwrap().title, "fold laundry");

    board.move_up();
    board.move_up();
    board.move_up();
    assert_eq!(board.selected_task().unwrap().title, "buy milk");
}

#[test]
fn test_move_down_empty_column() {
    let mut board = BoardState::new();

    board.move_down();
    assert!(board.selected_task().is_none());
}

#[test]
fn test_selection_is_per_column() {
    let mut board = BoardState::sample();
    board.select(2);

    board.next();
    assert_eq!(board.selected_task().unwrap().title, "write code");

    board.prev();
    assert_eq!(board.selected_task().unwrap().title, "fold laundry");
}

// === Advance Tests ===

#[test]
fn test_advance_scenario() {
    let mut board = BoardState::sample();
    board.select(1);

    board.move_to_next();
    assert_eq!(titles(&board, TaskStatus::ToDo), ["buy milk", "fold laundry"]);
    assert_eq!(titles(&board, TaskStatus::InProgress), ["write code", "eat sushi"]);
    assert_eq!(titles(&board, TaskStatus::Done), ["stay cool"]);

    board.next();
    board.select(1);
    board.move_to_next();
    assert_eq!(titles(&board, TaskStatus::InProgress), ["write code"]);
    assert_eq!(titles(&board, TaskStatus::Done), ["stay cool", "eat sushi"]);

    board.next();
    board.select(1);
    board.move_to_next();
    assert_eq!(titles(&board, TaskStatus::Done), ["stay cool"]);
    assert_eq!(titles(&board, TaskStatus::ToDo), ["buy milk", "fold laundry", "eat sushi"]);
}

#[test]
fn test_advance_updates_status() {
    let mut board = BoardState::sample();

    board.move_to_next();

    let moved = board.column(TaskStatus::InProgress).items().last().unwrap();
    assert_eq!(moved.title, "buy milk");
    assert_eq!(moved.status, TaskStatus::InProgress);
}

#[test]
fn test_advance_preserves_total_count() {
    for start in TaskStatus::columns() {
        let mut board = BoardState::sample();
        board.focus(*start);
        let total = board.total_tasks();
        let source_len = board.column(*start).len();
        let dest_len = board.column(start.next()).len();

        board.move_to_next();

        assert_eq!(board.total_tasks(), total);
        assert_eq!(board.column(*start).len(), source_len - 1);
        assert_eq!(board.column(start.next()).len(), dest_len + 1);
    }
}

#[test]
fn test_advance_empty_column_is_noop() {
    let mut board = BoardState::with_tasks([vec![], vec![task(TaskStatus::InProgress, "a")], vec![]]);
    let before = columns_snapshot(&board);

    board.move_to_next();

    assert_eq!(columns_snapshot(&board), before);
}

#[test]
fn test_advance_last_task_clears_selection() {
    let mut board = BoardState::with_tasks([vec![task(TaskStatus::ToDo, "only")], vec![], vec![]]);

    board.move_to_next();

    assert!(board.column(TaskStatus::ToDo).is_empty());
    assert!(board.selected_task().is_none());
    assert_eq!(board.column(TaskStatus::InProgress).selected_index(), Some(0));
}

// === Delete Tests ===

#[test]
fn test_delete_removes_exactly_one() {
    let mut board = BoardState::sample();
    board.select(1);

    let removed = board.delete_current().unwrap();

    assert_eq!(removed.title, "eat sushi");
    assert_eq!(titles(&board, TaskStatus::ToDo), ["buy milk", "fold laundry"]);
    assert_eq!(board.selected_task().unwrap().title, "fold laundry");
    assert_eq!(board.total_tasks(), 4);
}

#[test]
fn test_delete_last_row_moves_selection_up() {
    let mut board = BoardState::sample();
    board.select(2);

    board.delete_current();

    assert_eq!(board.selected_task().unwrap().title, "eat sushi");
}

#[test]
fn test_delete_empty_column_is_noop() {
    let mut board = BoardState::new();

    assert!(board.delete_current().is_none());
    assert_eq!(board.total_tasks(), 0);
}

// === Hand-off Tests ===

#[test]
fn test_begin_create_targets_focused_column() {
    let mut board = BoardState::sample();
    board.next();

    let form = board.begin_create();

    assert_eq!(form.target_status(), TaskStatus::InProgress);
    assert!(!form.is_editing());
    assert!(board.editing_index().is_none());
}

#[test]
fn test_begin_edit_records_index() {
    let mut board = BoardState::sample();
    board.select(2);

    let form = board.begin_edit().unwrap();

    assert_eq!(board.editing_index(), Some(2));
    assert_eq!(form.editing_index(), Some(2));
    assert_eq!(form.title().value(), "fold laundry");
    assert_eq!(form.description().value(), "or wear wrinkly clothes :)");
}

#[test]
fn test_begin_edit_empty_column() {
    let mut board = BoardState::new();

    assert!(board.begin_edit().is_none());
    assert!(board.editing_index().is_none());
}

#[test]
fn test_receive_task_appends_when_creating() {
    let mut board = BoardState::sample();

    board.receive_task(Task::new(TaskStatus::Done, "X", "Y"));

    assert_eq!(
        board.column(TaskStatus::Done).items().last(),
        Some(&Task::new(TaskStatus::Done, "X", "Y"))
    );
    assert_eq!(board.column(TaskStatus::Done).len(), 2);
}

#[test]
fn test_receive_task_replaces_when_editing() {
    let mut board = BoardState::sample();
    board.select(1);
    board.begin_edit().unwrap();

    board.receive_task(Task::new(TaskStatus::ToDo, "eat ramen", "negitoro roll, miso soup, and rice"));

    assert_eq!(titles(&board, TaskStatus::ToDo), ["buy milk", "eat ramen", "fold laundry"]);
    assert!(board.editing_index().is_none());
}

#[test]
fn test_cancel_edit_clears_index() {
    let mut board = BoardState::sample();
    board.begin_edit().unwrap();

    board.cancel_edit();
    board.receive_task(Task::new(TaskStatus::ToDo, "new", ""));

    assert_eq!(titles(&board, TaskStatus::ToDo), ["buy milk", "eat sushi", "fold laundry", "new"]);
}

#[test]
fn test_begin_create_clears_stale_edit() {
    let mut board = BoardState::sample();
    board.begin_edit().unwrap();

    board.begin_create();

    assert!(board.editing_index().is_none());
}

// === Resize Tests ===

#[test]
fn test_resize_sets_column_geometry() {
    let mut board = BoardState::sample();

    board.resize(120, 40);

    for status in TaskStatus::columns() {
        assert_eq!(board.column(*status).size(), (40, 40 - COLUMN_MARGIN));
    }
}

#[test]
fn test_column_margin_matches_header_and_footer() {
    assert_eq!(COLUMN_MARGIN, HEADER_HEIGHT + FOOTER_HEIGHT);
}

#[test]
fn test_resize_keeps_tasks() {
    let mut board = BoardState::sample();
    let before = columns_snapshot(&board);

    board.resize(10, 3);

    assert_eq!(columns_snapshot(&board), before);
    assert_eq!(board.column(TaskStatus::ToDo).size(), (3, 0));
}
