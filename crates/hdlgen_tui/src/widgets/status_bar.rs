//! Status bar widget.
//!
//! Renders a single-line status bar showing the active tab and the most
//! recent status message.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::app::FormApp;

/// Renders the status bar into the given area.
pub fn render_status_bar(app: &FormApp, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let tab_style = Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let status_msg = if app.state.status_message.is_empty() {
        String::new()
    } else {
        format!(" | {}", app.state.status_message)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.state.tab.title()), tab_style),
        Span::styled(status_msg, Style::default().fg(Color::Cyan)),
    ]);

    // Fill the entire line with background color
    let bg_style = Style::default().bg(Color::DarkGray);
    for x in area.x..area.x + area.width {
        if x < buf.area().right() {
            buf.get_mut(x, area.y).set_style(bg_style);
        }
    }

    Widget::render(line, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.get(x, 0u16).symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn status_bar_shows_active_tab() {
        let app = FormApp::new();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(&app, area, &mut buf);
        assert!(row_text(&buf, 80).contains("Combinational"));
    }

    #[test]
    fn status_bar_shows_message() {
        let mut app = FormApp::new();
        app.state.status_message = "Generated 4-to-1 multiplexer".into();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(&app, area, &mut buf);
        assert!(row_text(&buf, 80).contains("Generated 4-to-1 multiplexer"));
    }

    #[test]
    fn status_bar_zero_height() {
        let app = FormApp::new();
        let area = Rect::new(0, 0, 80, 0);
        let mut buf = Buffer::empty(area);
        render_status_bar(&app, area, &mut buf);
        // Should not panic
    }
}
