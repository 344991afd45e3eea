//! Key-hint bar widget.
//!
//! Renders the single-line hint bar at the bottom: bolded keys with dim
//! labels for the available actions.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::app::FormApp;

fn key(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

/// Renders the key-hint bar.
pub fn render_key_hints(app: &FormApp, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let line = if app.state.alert.is_some() {
        Line::from(vec![key(" Enter/Esc"), label(":dismiss")])
    } else {
        Line::from(vec![
            key(" Enter"),
            label(":generate "),
            key("c"),
            label(":clear "),
            key("Tab/↑↓"),
            label(":field "),
            key("←/→"),
            label(":tab "),
            key("Space"),
            label(":toggle "),
            key("j/k"),
            label(":scroll "),
            key("q"),
            label(":quit"),
        ])
    };

    Widget::render(line, area, buf);
}
