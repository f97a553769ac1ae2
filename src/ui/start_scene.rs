//! Pre-game screen: signed-in ID and controls.

use crate::identity::UserId;
use crate::ui::help_line;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, user: &UserId) {
    let block = Block::default()
        .title(" Flappy Rank ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GET READY",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Player: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                user.as_str().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from("Flap to stay airborne and slip through the pipe gaps."),
        Line::from("Touching a pipe or the ground ends the run."),
        Line::from(""),
        help_line(&[
            ("[Space/Enter]", "Start"),
            ("[R]", "Ranking"),
            ("[Esc]", "Quit"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
