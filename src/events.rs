//! Terminal event source, behind a trait so the event loop can be driven by mocks.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

/// Input the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

impl AppEvent {
    /// Keep key presses and resizes; drop releases, repeats, mouse and focus events
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
            _ => None,
        }
    }
}

/// Source of raw terminal events
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait EventSource {
    /// Wait up to `timeout` for an event to become available
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event, blocking until one arrives
    fn read(&mut self) -> Result<Event>;
}

/// Real implementation reading from crossterm
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        event::poll(timeout).context("Failed to poll terminal events")
    }

    fn read(&mut self) -> Result<Event> {
        event::read().context("Failed to read terminal event")
    }
}
