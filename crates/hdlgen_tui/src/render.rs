//! Top-level rendering logic.
//!
//! Assembles the TUI layout by splitting the terminal into panels and
//! delegating rendering to individual widget modules.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;
use ratatui::Frame;

use crate::app::FormApp;
use crate::state::Tab;
use crate::widgets::{form, key_hints, output, status_bar};

/// Renders the complete TUI layout into the given frame.
///
/// Layout:
/// ```text
/// ┌ Combinational │ Shift Registers ────┐
/// │ Form (40%)   │ Generated VHDL (60%) │
/// │              │                      │
/// ├──────────────┴──────────────────────┤
/// │ Status Bar                          │
/// ├─────────────────────────────────────┤
/// │ Key Hints                           │
/// └─────────────────────────────────────┘
/// ```
pub fn render(app: &FormApp, frame: &mut Frame) {
    let size = frame.size();

    // Main vertical split: tab bar + content area + status bar + hints
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tab bar
            Constraint::Min(3),    // main content
            Constraint::Length(1), // status bar
            Constraint::Length(1), // key hints
        ])
        .split(size);

    // Horizontal split: form + output
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // form
            Constraint::Percentage(60), // output
        ])
        .split(vertical[1]);

    render_tab_bar(app, frame, vertical[0]);
    form::render_form(app, horizontal[0], frame.buffer_mut());
    output::render_output(app, horizontal[1], frame.buffer_mut());
    status_bar::render_status_bar(app, vertical[2], frame.buffer_mut());
    key_hints::render_key_hints(app, vertical[3], frame.buffer_mut());

    // Blocking alert popup (if showing)
    if let Some(message) = &app.state.alert {
        render_alert_popup(frame, message);
    }
}

/// Renders the tab bar along the top.
fn render_tab_bar(app: &FormApp, frame: &mut Frame, area: Rect) {
    let selected = match app.state.tab {
        Tab::Combinational => 0,
        Tab::ShiftRegisters => 1,
    };
    let tabs = Tabs::new(vec![
        Tab::Combinational.title(),
        Tab::ShiftRegisters.title(),
    ])
    .select(selected)
    .style(Style::default().fg(Color::DarkGray))
    .highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(tabs, area);
}

/// Renders a centered blocking alert popup.
fn render_alert_popup(frame: &mut Frame, message: &str) {
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let area = frame.size();
    let popup_width = 50u16.min(area.width.saturating_sub(4));
    let popup_height = 6u16.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(message)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    frame.render_widget(popup, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_full_layout() {
        let app = FormApp::new();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(&app, f)).unwrap();
    }

    #[test]
    fn render_shift_tab_layout() {
        let mut app = FormApp::new();
        app.state.switch_tab();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(&app, f)).unwrap();
    }

    #[test]
    fn render_with_alert_popup() {
        let mut app = FormApp::new();
        app.state.alert = Some("number of inputs and outputs must be greater than 0".into());
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(&app, f)).unwrap();
    }

    #[test]
    fn render_with_generated_output() {
        let mut app = FormApp::new();
        app.state.inputs = "4".into();
        app.state.outputs = "1".into();
        app.state.select_signals = "2".into();
        app.handle_key(KeyCode::Enter);
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(&app, f)).unwrap();
    }

    #[test]
    fn render_small_terminal() {
        let app = FormApp::new();
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(&app, f)).unwrap();
    }
}
