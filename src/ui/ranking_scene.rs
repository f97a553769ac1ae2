//! Leaderboard table: rank, ID, best score, highest first.

use crate::ranking::UserRecord;
use crate::ui::help_line;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the ranking view over records already sorted descending.
pub fn render(frame: &mut Frame, area: Rect, records: &[UserRecord]) {
    let block = Block::default()
        .title(" Ranking ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];

    if records.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores recorded yet.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("{:>4}   {:<4}  {:>7}", "#", "ID", "Score"),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )));
        for (index, record) in records.iter().enumerate() {
            let style = if index == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "{:>4}   {:<4}  {:>7}",
                    index + 1,
                    record.id.as_str(),
                    record.score
                ),
                style,
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(help_line(&[("[Esc]", "Back")]));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
