//! TUI application core.
//!
//! [`FormApp`] owns the form state and translates key events into field
//! edits and the Generate/Clear actions. Generation itself is delegated
//! to `hdlgen_core`; any validation failure comes back as a blocking
//! alert and the form stays editable.

use crossterm::event::KeyCode;

use hdlgen_core::{classify, generate_comb, generate_shift, BlockKind, CombRequest, ShiftRequest};

use crate::state::{FormState, Tab};

/// The core TUI application state.
pub struct FormApp {
    /// Form state (tabs, entries, toggles, output, alert).
    pub state: FormState,
    /// Whether the application should quit.
    pub should_quit: bool,
}

impl FormApp {
    /// Creates a new application with an empty form.
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
            should_quit: false,
        }
    }

    /// Handles a key event.
    ///
    /// While an alert is showing, only dismissal (Esc/Enter) and quit
    /// are honored; the alert is blocking, as in the original dialogs.
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.state.alert.is_some() {
            match key {
                KeyCode::Esc | KeyCode::Enter => self.state.alert = None,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Tab => self.state.focus_next(),
            KeyCode::Up | KeyCode::BackTab => self.state.focus_prev(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('[') | KeyCode::Char(']') => {
                self.state.switch_tab();
            }
            KeyCode::Char(' ') => {
                let field = self.state.focused_field();
                self.state.flip_toggle(field);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.state.push_digit(c),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Enter | KeyCode::Char('g') => self.generate(),
            KeyCode::Char('c') => {
                self.state.clear();
                self.state.status_message = "Cleared".into();
            }
            KeyCode::Char('j') | KeyCode::PageDown => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::PageUp => self.state.scroll_up(),
            _ => {}
        }
    }

    /// Runs the Generate action for the active tab.
    ///
    /// On success the output panel is replaced and scrolled to the top;
    /// on failure the error becomes a blocking alert.
    pub fn generate(&mut self) {
        let result = match self.state.tab {
            Tab::Combinational => self.generate_combinational(),
            Tab::ShiftRegisters => self.generate_shift_register(),
        };
        match result {
            Ok((code, description)) => {
                self.state.output = code;
                self.state.output_scroll = 0;
                self.state.status_message = format!("Generated {description}");
            }
            Err(message) => self.state.alert = Some(message),
        }
    }

    fn generate_combinational(&self) -> Result<(String, String), String> {
        let inputs = parse_entry(&self.state.inputs, "Number of Inputs")?;
        let outputs = parse_entry(&self.state.outputs, "Number of Outputs")?;
        // The selector entry is only meaningful for mux/demux; an empty
        // entry reads as zero and the width check reports the mismatch.
        let selector_width = parse_optional_entry(&self.state.select_signals)?;

        let kind = classify(inputs, outputs).map_err(|e| e.to_string())?;
        let req = CombRequest {
            inputs,
            outputs,
            selector_width,
            enable: self.state.enable,
        };
        let code = generate_comb(&req).map_err(|e| e.to_string())?;
        Ok((code, describe(kind, inputs, outputs)))
    }

    fn generate_shift_register(&self) -> Result<(String, String), String> {
        let bits = parse_entry(&self.state.bits, "Number of Bits")?;
        let req = ShiftRequest {
            bits,
            clock: self.state.clock,
            reset: self.state.reset,
            mode: self.state.mode,
        };
        let code = generate_shift(&req).map_err(|e| e.to_string())?;
        let description = if self.state.mode {
            format!("{bits}-bit PISO shift register")
        } else {
            format!("{bits}-bit SIPO shift register")
        };
        Ok((code, description))
    }
}

impl Default for FormApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a required numeric entry.
fn parse_entry(text: &str, label: &str) -> Result<u32, String> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| format!("Please enter a valid integer for {label}."))
}

/// Parses an entry that may be left blank, reading blank as zero.
fn parse_optional_entry(text: &str) -> Result<u32, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| "Please enter a valid integer for Number of Select Signals.".to_string())
}

/// Describes the generated block for the status bar.
fn describe(kind: BlockKind, inputs: u32, outputs: u32) -> String {
    match kind {
        BlockKind::Mux => format!("{inputs}-to-1 multiplexer"),
        BlockKind::Demux => format!("1-to-{outputs} demultiplexer"),
        BlockKind::Decoder => format!("{inputs}x{outputs} decoder"),
        BlockKind::Encoder => format!("{inputs}x{outputs} encoder"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_mux_form() -> FormApp {
        let mut app = FormApp::new();
        app.state.inputs = "4".into();
        app.state.outputs = "1".into();
        app.state.select_signals = "2".into();
        app
    }

    #[test]
    fn generate_mux_fills_output() {
        let mut app = app_with_mux_form();
        app.generate();
        assert!(app.state.alert.is_none());
        assert!(app.state.output.contains("entity mux is"));
        assert_eq!(app.state.status_message, "Generated 4-to-1 multiplexer");
    }

    #[test]
    fn generate_decoder_without_selector_entry() {
        let mut app = FormApp::new();
        app.state.inputs = "3".into();
        app.state.outputs = "8".into();
        app.generate();
        assert!(app.state.alert.is_none());
        assert!(app.state.output.contains("entity Decoder_3x8 is"));
        assert_eq!(app.state.status_message, "Generated 3x8 decoder");
    }

    #[test]
    fn generate_encoder_description() {
        let mut app = FormApp::new();
        app.state.inputs = "8".into();
        app.state.outputs = "3".into();
        app.generate();
        assert!(app.state.output.contains("entity Encoder_8X3 is"));
        assert_eq!(app.state.status_message, "Generated 8x3 encoder");
    }

    #[test]
    fn selector_mismatch_raises_alert() {
        let mut app = app_with_mux_form();
        app.state.select_signals = "3".into();
        app.generate();
        let alert = app.state.alert.expect("mismatch should alert");
        assert!(alert.contains("selector width must be 2"));
        assert!(app.state.output.is_empty());
    }

    #[test]
    fn invalid_integer_raises_alert() {
        let mut app = FormApp::new();
        app.state.inputs = "four".into();
        app.state.outputs = "1".into();
        app.generate();
        assert_eq!(
            app.state.alert.as_deref(),
            Some("Please enter a valid integer for Number of Inputs.")
        );
    }

    #[test]
    fn empty_required_entry_raises_alert() {
        let mut app = FormApp::new();
        app.generate();
        assert!(app.state.alert.is_some());
    }

    #[test]
    fn unknown_configuration_raises_alert() {
        let mut app = FormApp::new();
        app.state.inputs = "3".into();
        app.state.outputs = "5".into();
        app.generate();
        assert_eq!(
            app.state.alert.as_deref(),
            Some("the configuration does not match any known block")
        );
    }

    #[test]
    fn shift_tab_generates_piso() {
        let mut app = FormApp::new();
        app.state.switch_tab();
        app.state.bits = "8".into();
        app.state.clock = true;
        app.state.reset = true;
        app.state.mode = true;
        app.generate();
        assert!(app.state.output.contains("entity PISO_REG is"));
        assert_eq!(app.state.status_message, "Generated 8-bit PISO shift register");
    }

    #[test]
    fn shift_tab_without_clock_alerts() {
        let mut app = FormApp::new();
        app.state.switch_tab();
        app.state.bits = "8".into();
        app.state.reset = true;
        app.generate();
        assert_eq!(
            app.state.alert.as_deref(),
            Some("clock and reset must be selected to generate a shift register")
        );
    }

    #[test]
    fn form_remains_usable_after_alert() {
        let mut app = app_with_mux_form();
        app.state.select_signals = "3".into();
        app.generate();
        assert!(app.state.alert.is_some());

        // Dismiss, fix the entry, and generate again.
        app.handle_key(KeyCode::Esc);
        assert!(app.state.alert.is_none());
        app.state.select_signals = "2".into();
        app.generate();
        assert!(app.state.output.contains("entity mux is"));
    }

    #[test]
    fn alert_blocks_other_keys() {
        let mut app = FormApp::new();
        app.state.alert = Some("boom".into());
        app.handle_key(KeyCode::Char('5'));
        assert!(app.state.inputs.is_empty());
        assert!(app.state.alert.is_some());
        app.handle_key(KeyCode::Enter);
        assert!(app.state.alert.is_none());
    }

    #[test]
    fn key_quit() {
        let mut app = FormApp::new();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn key_digits_and_backspace_edit_focused_entry() {
        let mut app = FormApp::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('6'));
        assert_eq!(app.state.inputs, "16");
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.state.inputs, "1");
    }

    #[test]
    fn key_space_flips_focused_toggle() {
        let mut app = FormApp::new();
        app.state.focused = 3; // ENABLE
        app.handle_key(KeyCode::Char(' '));
        assert!(app.state.enable);
    }

    #[test]
    fn key_clear_resets_form() {
        let mut app = app_with_mux_form();
        app.generate();
        app.handle_key(KeyCode::Char('c'));
        assert!(app.state.output.is_empty());
        assert!(app.state.inputs.is_empty());
        assert_eq!(app.state.status_message, "Cleared");
    }

    #[test]
    fn key_tab_switching() {
        let mut app = FormApp::new();
        app.handle_key(KeyCode::Right);
        assert_eq!(app.state.tab, Tab::ShiftRegisters);
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.state.tab, Tab::Combinational);
    }

    #[test]
    fn key_scroll_output() {
        let mut app = app_with_mux_form();
        app.generate();
        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.state.output_scroll, 1);
        app.handle_key(KeyCode::Char('k'));
        assert_eq!(app.state.output_scroll, 0);
    }

    #[test]
    fn generate_via_enter_key() {
        let mut app = app_with_mux_form();
        app.handle_key(KeyCode::Enter);
        assert!(app.state.output.contains("entity mux is"));
    }
}
