//! Identity entry screen: a 3-character arcade ID prompt.

use crate::identity::ID_LENGTH;
use crate::ui::help_line;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input buffer cap; validation enforces the real length rule on submit.
const MAX_INPUT_CHARS: usize = 16;

/// Editable state of the identity prompt.
pub struct IdEntryScreen {
    pub input: String,
    pub error: Option<String>,
}

impl IdEntryScreen {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            error: None,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_CHARS {
            self.input.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.input.pop();
    }
}

impl Default for IdEntryScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the identity entry screen.
pub fn render(frame: &mut Frame, area: Rect, screen: &IdEntryScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Rules
            Constraint::Length(2), // Error
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("FLAPPY RANK")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let prompt = Paragraph::new("Enter your player ID:");
    frame.render_widget(prompt, chunks[1]);

    let input_widget = Paragraph::new(format!("{}_", screen.input))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White));
    frame.render_widget(input_widget, chunks[2]);

    let rules = Paragraph::new(format!(
        "{} characters, letters and digits only (e.g. AB1)",
        ID_LENGTH
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(rules, chunks[3]);

    if let Some(message) = &screen.error {
        let error = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error, chunks[4]);
    }

    let help = Paragraph::new(help_line(&[
        ("[Enter]", "Confirm"),
        ("[Tab]", "Ranking"),
        ("[Esc]", "Quit"),
    ]));
    frame.render_widget(help, chunks[6]);
}
