//! Terminal form interface for the hdlgen VHDL block generator.
//!
//! Provides a ratatui-based form with two tabs — combinational blocks
//! (mux/demux/encoder/decoder) and PISO/SIPO shift registers — plus a
//! read-only output panel showing the generated VHDL.
//!
//! # Usage
//!
//! ```ignore
//! hdlgen_tui::run_tui()?;
//! ```
//!
//! # Layout
//!
//! - **Tab bar** — selects between the two parameter forms
//! - **Form** (left) — numeric entries and feature toggles
//! - **Output** (right) — the generated VHDL, scrollable
//! - **Status Bar** — active tab and last action result
//! - **Key Hints** — available keys

#![warn(missing_docs)]

pub mod app;
pub mod event;
pub mod render;
pub mod state;
pub mod terminal;
pub mod widgets;

use std::io;
use std::time::Duration;

use app::FormApp;
use event::{poll_event, TuiEvent};
use terminal::{init_terminal, install_panic_hook, restore_terminal};

/// Runs the form interface until the user quits.
///
/// Sets up the terminal, creates a [`FormApp`], and runs the main event
/// loop. Restores the terminal on exit (including on panic).
///
/// # Errors
///
/// Returns an `io::Error` if terminal setup or rendering fails.
pub fn run_tui() -> io::Result<()> {
    install_panic_hook();

    let mut terminal = init_terminal()?;
    let mut app = FormApp::new();

    let result = run_tui_loop(&mut app, &mut terminal);

    restore_terminal()?;
    result
}

/// The main event loop: draw, poll, dispatch.
fn run_tui_loop(app: &mut FormApp, terminal: &mut terminal::Tui) -> io::Result<()> {
    let tick_rate = Duration::from_millis(50);

    loop {
        terminal.draw(|frame| render::render(app, frame))?;

        match poll_event(tick_rate) {
            Ok(TuiEvent::Key(key)) => app.handle_key(key.code),
            Ok(TuiEvent::Tick) => {
                // Nothing runs in the background; ticks just redraw.
            }
            Ok(TuiEvent::Resize(_, _)) => {
                // Handled automatically by ratatui
            }
            Err(_) => {
                // I/O error — quit gracefully
                break;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn app_can_be_constructed() {
        let app = FormApp::new();
        assert!(!app.should_quit);
    }

    #[test]
    fn key_handling_does_not_panic() {
        let mut app = FormApp::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('c'));
    }
}
