//! Form panel widget.
//!
//! Renders the active tab's numeric entries and feature toggles, with
//! the focused field highlighted and a block cursor on the focused
//! entry.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::app::FormApp;
use crate::state::fields_for;

/// Renders the form panel into the given area.
pub fn render_form(app: &FormApp, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(format!(" {} ", app.state.tab.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    let mut lines = Vec::new();
    for (i, &field) in fields_for(app.state.tab).iter().enumerate() {
        let focused = i == app.state.focused;

        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let value = if field.is_toggle() {
            let on = app.state.toggle_value(field).unwrap_or(false);
            (if on { "[x]" } else { "[ ]" }).to_string()
        } else {
            let text = app.state.entry(field).unwrap_or("");
            if focused {
                format!("{text}█")
            } else {
                text.to_string()
            }
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {:<26}", field.label()), label_style),
            Span::styled(value, Style::default().fg(Color::Cyan)),
        ]));
    }

    Widget::render(Paragraph::new(lines), inner, buf);
}
