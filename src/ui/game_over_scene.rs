//! Game-over screen: final score, personal best, and what to do next.

use crate::game::GameOverSummary;
use crate::identity::UserId;
use crate::ui::help_line;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, summary: &GameOverSummary, user: Option<&UserId>) {
    let block = Block::default()
        .title(" Game Over ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let player = user.map(UserId::as_str).unwrap_or("---");
    let new_best = summary.final_score >= summary.best_score && summary.final_score > 0;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Player: ", Style::default().fg(Color::DarkGray)),
            Span::styled(player.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                summary.final_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                summary.best_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    if new_best {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "New personal best!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(help_line(&[
        ("[Space/Enter]", "Play again"),
        ("[R]", "Ranking"),
        ("[Esc]", "Sign out"),
    ]));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
