//! Output panel widget.
//!
//! Renders the read-only view of the generated VHDL with vertical
//! scrolling.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::app::FormApp;

/// Renders the output panel into the given area.
pub fn render_output(app: &FormApp, area: Rect, buf: &mut Buffer) {
    let paragraph = Paragraph::new(app.state.output.as_str())
        .style(Style::default().fg(Color::Green))
        .scroll((app.state.output_scroll, 0))
        .block(
            Block::default()
                .title(" Generated VHDL ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
    Widget::render(paragraph, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer, width: u16, height: u16) -> String {
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push(buf.get(x, y).symbol().chars().next().unwrap_or(' '));
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn output_shows_generated_text() {
        let mut app = FormApp::new();
        app.state.output = "entity mux is".into();
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        render_output(&app, area, &mut buf);
        assert!(buffer_text(&buf, 40, 5).contains("entity mux is"));
    }

    #[test]
    fn output_scrolls_past_first_line() {
        let mut app = FormApp::new();
        app.state.output = "first line\nsecond line".into();
        app.state.output_scroll = 1;
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        render_output(&app, area, &mut buf);
        let text = buffer_text(&buf, 40, 3);
        assert!(text.contains("second line"));
        assert!(!text.contains("first line"));
    }

    #[test]
    fn output_empty_renders_frame_only() {
        let app = FormApp::new();
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        render_output(&app, area, &mut buf);
        assert!(buffer_text(&buf, 40, 5).contains("Generated VHDL"));
    }
}
