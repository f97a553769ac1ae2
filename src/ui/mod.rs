//! Terminal rendering: one scene per screen.
//!
//! Scenes only read state and draw; every transition decision stays in the
//! screen state machine and the event loop.

pub mod game_over_scene;
pub mod id_entry_scene;
pub mod play_scene;
pub mod ranking_scene;
pub mod start_scene;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Build the standard bottom help line: `[Key] action` pairs.
pub(crate) fn help_line(keys: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, action) in keys {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{}  ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
