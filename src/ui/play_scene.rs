//! Live play area: bird, pipes, and the running score.

use crate::config::GameConfig;
use crate::game::GameSession;
use crate::ui::help_line;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the playing screen: the scaled field plus a status bar.
pub fn render(frame: &mut Frame, area: Rect, session: &GameSession, config: &GameConfig) {
    let block = Block::default()
        .title(" Flappy Rank ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    render_field(frame, chunks[0], session, config);

    let mut status_spans = vec![
        Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            session.score.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    status_spans.extend(help_line(&[("[Space/Up/Enter]", "Flap"), ("[R]", "Ranking")]).spans);
    frame.render_widget(Paragraph::new(Line::from(status_spans)), chunks[1]);
}

/// Map the float field onto terminal cells and paint bird and pipes.
///
/// Each cell samples the field at its center, so the picture stays correct
/// for any terminal size.
fn render_field(frame: &mut Frame, area: Rect, session: &GameSession, config: &GameConfig) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = config.field_width / width as f64;
    let y_scale = config.field_height / height as f64;

    let bird_left = config.bird_x;
    let bird_right = config.bird_x + config.bird_width;
    let bird_top = session.bird.y;
    let bird_bottom = session.bird.y + config.bird_height;

    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let pipe_style = Style::default().fg(Color::Green);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let field_y = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let field_x = (col as f64 + 0.5) * x_scale;

            if field_x >= bird_left
                && field_x < bird_right
                && field_y >= bird_top
                && field_y < bird_bottom
            {
                spans.push(Span::styled("█", bird_style));
                continue;
            }

            let mut in_pipe = false;
            for pipe in &session.pipes.pipes {
                if field_x >= pipe.x && field_x < pipe.x + config.pipe_width {
                    in_pipe = field_y < pipe.gap_top || field_y >= pipe.gap_bottom;
                    break;
                }
            }

            if in_pipe {
                spans.push(Span::styled("█", pipe_style));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
