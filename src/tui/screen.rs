use anyhow::Result;
use crossterm::event::KeyEvent;
use std::time::Duration;

use crate::events::{AppEvent, EventSource};

use super::board::BoardState;
use super::form::{FormOutcome, TaskForm};
use super::input::{board_action, form_action, BoardAction};

/// How long to wait for input before redrawing
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The active screen. While the form is open the board is held suspended inside it.
#[derive(Debug, Clone)]
pub enum Screen {
    Board(BoardState),
    Form { board: BoardState, form: TaskForm },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Board(BoardState::new())
    }
}

/// Routes events to whichever screen holds control
#[derive(Debug, Default)]
pub struct Controller {
    screen: Screen,
    should_quit: bool,
}

impl Controller {
    pub fn new(board: BoardState) -> Self {
        Self {
            screen: Screen::Board(board),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The board, whether active or suspended
    pub fn board(&self) -> &BoardState {
        match &self.screen {
            Screen::Board(board) | Screen::Form { board, .. } => board,
        }
    }

    pub fn form(&self) -> Option<&TaskForm> {
        match &self.screen {
            Screen::Board(_) => None,
            Screen::Form { form, .. } => Some(form),
        }
    }

    pub fn is_board_active(&self) -> bool {
        matches!(self.screen, Screen::Board(_))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(width, height) => self.resize(width, height),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.screen = match std::mem::take(&mut self.screen) {
            Screen::Board(board) => self.on_board_key(board, key),
            Screen::Form { board, form } => self.on_form_key(board, form, key),
        };
    }

    /// Column geometry follows the viewport even while the form is open
    pub fn resize(&mut self, width: u16, height: u16) {
        match &mut self.screen {
            Screen::Board(board) | Screen::Form { board, .. } => board.resize(width, height),
        }
    }

    /// Process events until quit, calling `redraw` before each poll
    pub fn drive<S, F>(&mut self, source: &mut S, mut redraw: F) -> Result<()>
    where
        S: EventSource + ?Sized,
        F: FnMut(&Controller) -> Result<()>,
    {
        while !self.should_quit {
            redraw(self)?;
            if source.poll(POLL_INTERVAL)? {
                if let Some(event) = AppEvent::from_terminal(source.read()?) {
                    self.handle(event);
                }
            }
        }
        tracing::info!("quit requested");
        Ok(())
    }

    fn on_board_key(&mut self, mut board: BoardState, key: KeyEvent) -> Screen {
        let Some(action) = board_action(key) else {
            return Screen::Board(board);
        };
        match action {
            BoardAction::Prev => board.prev(),
            BoardAction::Next => board.next(),
            BoardAction::SelectUp => board.move_up(),
            BoardAction::SelectDown => board.move_down(),
            BoardAction::Advance => board.move_to_next(),
            BoardAction::Delete => {
                board.delete_current();
            }
            BoardAction::NewTask => {
                let form = board.begin_create();
                return Screen::Form { board, form };
            }
            BoardAction::EditTask => {
                if let Some(form) = board.begin_edit() {
                    return Screen::Form { board, form };
                }
            }
            BoardAction::Quit => self.should_quit = true,
        }
        Screen::Board(board)
    }

    fn on_form_key(&mut self, mut board: BoardState, mut form: TaskForm, key: KeyEvent) -> Screen {
        match form.handle(form_action(key)) {
            FormOutcome::Pending => Screen::Form { board, form },
            FormOutcome::Completed(task) => {
                board.receive_task(task);
                Screen::Board(board)
            }
            FormOutcome::Aborted => {
                tracing::debug!(editing = form.is_editing(), "form aborted");
                board.cancel_edit();
                Screen::Board(board)
            }
            FormOutcome::Quit => {
                self.should_quit = true;
                Screen::Form { board, form }
            }
        }
    }
}
