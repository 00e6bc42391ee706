use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, Stdout};

use crate::config::{GlobalConfig, ThemeConfig};
use crate::events::{CrosstermEvents, EventSource};
use crate::model::{Task, TaskList, TaskStatus, ROW_HEIGHT};

use super::board::{BoardState, FOOTER_HEIGHT, HEADER_HEIGHT};
use super::form::{FormField, TaskForm};
use super::screen::{Controller, Screen};
use super::text_field::TextField;

/// Helper to convert hex color string to ratatui Color
fn hex_to_color(hex: &str) -> Color {
    ThemeConfig::parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

/// Build footer help text for the active screen
pub fn build_footer_text(screen: &Screen) -> String {
    match screen {
        Screen::Board(_) => {
            " [←/h →/l] column  [↑/k ↓/j] select  [n] new  [e] edit  [m] advance  [d] delete  [q] quit "
                .to_string()
        }
        Screen::Form { form, .. } => match form.active_field() {
            FormField::Title => " Enter task title... [Esc] cancel [Enter] next ".to_string(),
            FormField::Description => {
                " Enter description... [Esc] cancel [Alt+Enter] newline [Enter] save ".to_string()
            }
        },
    }
}

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

pub struct App {
    terminal: Terminal,
    controller: Controller,
    events: Box<dyn EventSource>,
    theme: ThemeConfig,
}

impl App {
    pub fn new(config: &GlobalConfig, board: BoardState) -> Result<Self> {
        Self::with_events(config, board, Box::new(CrosstermEvents))
    }

    pub fn with_events(config: &GlobalConfig, board: BoardState, events: Box<dyn EventSource>) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to initialize terminal")?;

        Ok(Self {
            terminal,
            controller: Controller::new(board),
            events,
            theme: config.theme.clone(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        self.controller.resize(size.width, size.height);
        tracing::info!(width = size.width, height = size.height, "board started");

        let terminal = &mut self.terminal;
        let theme = &self.theme;
        self.controller.drive(self.events.as_mut(), |controller: &Controller| -> Result<()> {
            terminal.draw(|frame| render(frame, controller, theme))?;
            Ok(())
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

/// Draw the board, with the task form on top when it is open
pub fn render(frame: &mut Frame, controller: &Controller, theme: &ThemeConfig) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let board = controller.board();
    let header = Paragraph::new(format!(" Kanban  {} tasks ", board.total_tasks()))
        .style(Style::default().fg(hex_to_color(&theme.color_normal)).bold());
    frame.render_widget(header, chunks[0]);

    draw_board(frame, board, controller.is_board_active(), chunks[1], theme);

    let footer = Paragraph::new(build_footer_text(controller.screen()))
        .style(Style::default().fg(hex_to_color(&theme.color_dimmed)))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);

    if let Some(form) = controller.form() {
        draw_form(frame, form, area, theme);
    }
}

fn draw_board(frame: &mut Frame, board: &BoardState, active: bool, area: Rect, theme: &ThemeConfig) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (status, column_area) in TaskStatus::columns().iter().zip(columns.iter()) {
        let is_focused = active && board.focused() == *status;
        draw_column(frame, *status, board.column(*status), is_focused, *column_area, theme);
    }
}

fn draw_column(frame: &mut Frame, status: TaskStatus, list: &TaskList, is_focused: bool, area: Rect, theme: &ThemeConfig) {
    let title = format!(" {} ({}) ", status.title(), list.len());
    let (border_style, title_style) = if is_focused {
        (
            Style::default().fg(hex_to_color(&theme.color_selected)),
            Style::default().fg(hex_to_color(&theme.color_selected)).bold(),
        )
    } else {
        (
            Style::default().fg(hex_to_color(&theme.color_normal)),
            Style::default().fg(hex_to_color(&theme.color_column_header)),
        )
    };

    let column_block = Block::default()
        .title(title)
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = column_block.inner(area);
    frame.render_widget(column_block, area);

    if list.is_empty() {
        let empty = Paragraph::new("No tasks")
            .style(Style::default().fg(hex_to_color(&theme.color_dimmed)).italic());
        frame.render_widget(empty, inner);
        return;
    }

    let offset = list.scroll_offset();
    for (j, task) in list.items().iter().enumerate().skip(offset) {
        let y = inner.y + ((j - offset) as u16).saturating_mul(ROW_HEIGHT);
        if y + ROW_HEIGHT > inner.y + inner.height {
            break;
        }
        let card_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: ROW_HEIGHT,
        };
        let is_selected = is_focused && list.selected_index() == Some(j);
        draw_task_card(frame, task, card_area, is_selected, theme);
    }
}

fn draw_task_card(frame: &mut Frame, task: &Task, area: Rect, is_selected: bool, theme: &ThemeConfig) {
    let (border_style, border_type) = if is_selected {
        (Style::default().fg(hex_to_color(&theme.color_selected)), BorderType::Thick)
    } else {
        (Style::default().fg(hex_to_color(&theme.color_normal)), BorderType::Plain)
    };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .border_type(border_type);
    let inner = card_block.inner(area);
    frame.render_widget(card_block, area);

    // Truncate title to fit (char-safe for UTF-8)
    let max_len = inner.width as usize;
    let title = truncate(&task.title, max_len);
    let description = truncate(task.description.lines().next().unwrap_or(""), max_len);

    let lines = vec![
        Line::styled(title, Style::default().fg(hex_to_color(&theme.color_text)).bold()),
        Line::styled(description, Style::default().fg(hex_to_color(&theme.color_description)).italic()),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

fn draw_form(frame: &mut Frame, form: &TaskForm, area: Rect, theme: &ThemeConfig) {
    let popup = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup);

    let title = if form.is_editing() {
        format!(" Edit Task ({}) ", form.target_status().title())
    } else {
        format!(" New Task ({}) ", form.target_status().title())
    };
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(hex_to_color(&theme.color_popup_border)));
    let inner = outer.inner(popup);
    frame.render_widget(outer, popup);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(inner);

    let active = form.active_field();
    draw_field(frame, " Title ", form.title(), active == FormField::Title, fields[0], theme);
    draw_field(frame, " Description ", form.description(), active == FormField::Description, fields[1], theme);
}

fn draw_field(frame: &mut Frame, label: &str, field: &TextField, is_active: bool, area: Rect, theme: &ThemeConfig) {
    let text = if field.is_focused() {
        let (before, after) = field.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        field.value().to_string()
    };
    let border_color = if is_active { &theme.color_selected } else { &theme.color_dimmed };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(hex_to_color(&theme.color_text)))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(label.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(hex_to_color(border_color))),
        );
    frame.render_widget(paragraph, area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
