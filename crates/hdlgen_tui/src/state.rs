//! Form state management.
//!
//! Holds the transient contents of the two form tabs: numeric entry
//! buffers, feature toggles, the generated output text, and the current
//! alert. Everything here is reset by the Clear action.

/// The two form tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    /// Mux/demux/encoder/decoder parameters.
    Combinational,
    /// PISO/SIPO shift-register parameters.
    ShiftRegisters,
}

impl Tab {
    /// Returns the tab title shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Combinational => "Combinational",
            Tab::ShiftRegisters => "Shift Registers",
        }
    }

    /// Returns the other tab.
    pub fn toggle(self) -> Self {
        match self {
            Tab::Combinational => Tab::ShiftRegisters,
            Tab::ShiftRegisters => Tab::Combinational,
        }
    }
}

/// A single form field, across both tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Number of inputs (entry).
    Inputs,
    /// Number of outputs (entry).
    Outputs,
    /// Number of select signals (entry).
    SelectSignals,
    /// ENABLE port toggle.
    Enable,
    /// Register width in bits (entry).
    Bits,
    /// Clock toggle.
    Clock,
    /// Reset toggle.
    Reset,
    /// MODE toggle (PISO when set, SIPO otherwise).
    Mode,
}

impl Field {
    /// Returns the label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Inputs => "Number of Inputs",
            Field::Outputs => "Number of Outputs",
            Field::SelectSignals => "Number of Select Signals",
            Field::Enable => "ENABLE",
            Field::Bits => "Number of Bits",
            Field::Clock => "Clock",
            Field::Reset => "Reset",
            Field::Mode => "MODE",
        }
    }

    /// Whether this field is a boolean toggle rather than a numeric entry.
    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            Field::Enable | Field::Clock | Field::Reset | Field::Mode
        )
    }
}

/// Returns the fields shown on the given tab, in display order.
pub fn fields_for(tab: Tab) -> &'static [Field] {
    match tab {
        Tab::Combinational => &[
            Field::Inputs,
            Field::Outputs,
            Field::SelectSignals,
            Field::Enable,
        ],
        Tab::ShiftRegisters => &[Field::Bits, Field::Clock, Field::Reset, Field::Mode],
    }
}

/// Full form state.
#[derive(Clone, Debug)]
pub struct FormState {
    /// Active tab.
    pub tab: Tab,
    /// Index of the focused field within the active tab.
    pub focused: usize,
    /// "Number of Inputs" entry buffer.
    pub inputs: String,
    /// "Number of Outputs" entry buffer.
    pub outputs: String,
    /// "Number of Select Signals" entry buffer.
    pub select_signals: String,
    /// ENABLE toggle.
    pub enable: bool,
    /// "Number of Bits" entry buffer.
    pub bits: String,
    /// Clock toggle.
    pub clock: bool,
    /// Reset toggle.
    pub reset: bool,
    /// MODE toggle.
    pub mode: bool,
    /// Generated VHDL shown in the output panel.
    pub output: String,
    /// Vertical scroll offset of the output panel.
    pub output_scroll: u16,
    /// Status message shown in the status bar.
    pub status_message: String,
    /// Blocking alert text, if one is showing.
    pub alert: Option<String>,
}

impl FormState {
    /// Creates an empty form on the combinational tab.
    pub fn new() -> Self {
        Self {
            tab: Tab::Combinational,
            focused: 0,
            inputs: String::new(),
            outputs: String::new(),
            select_signals: String::new(),
            enable: false,
            bits: String::new(),
            clock: false,
            reset: false,
            mode: false,
            output: String::new(),
            output_scroll: 0,
            status_message: String::new(),
            alert: None,
        }
    }

    /// Returns the field currently holding focus.
    pub fn focused_field(&self) -> Field {
        let fields = fields_for(self.tab);
        fields[self.focused.min(fields.len() - 1)]
    }

    /// Moves focus to the next field on the active tab, wrapping.
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % fields_for(self.tab).len();
    }

    /// Moves focus to the previous field on the active tab, wrapping.
    pub fn focus_prev(&mut self) {
        let len = fields_for(self.tab).len();
        self.focused = (self.focused + len - 1) % len;
    }

    /// Switches to the other tab, resetting field focus.
    pub fn switch_tab(&mut self) {
        self.tab = self.tab.toggle();
        self.focused = 0;
    }

    /// Returns the entry buffer for a numeric field, if it is one.
    pub fn entry(&self, field: Field) -> Option<&str> {
        match field {
            Field::Inputs => Some(&self.inputs),
            Field::Outputs => Some(&self.outputs),
            Field::SelectSignals => Some(&self.select_signals),
            Field::Bits => Some(&self.bits),
            _ => None,
        }
    }

    /// Mutable access to the entry buffer for a numeric field.
    pub fn entry_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Inputs => Some(&mut self.inputs),
            Field::Outputs => Some(&mut self.outputs),
            Field::SelectSignals => Some(&mut self.select_signals),
            Field::Bits => Some(&mut self.bits),
            _ => None,
        }
    }

    /// Returns the value of a toggle field, if it is one.
    pub fn toggle_value(&self, field: Field) -> Option<bool> {
        match field {
            Field::Enable => Some(self.enable),
            Field::Clock => Some(self.clock),
            Field::Reset => Some(self.reset),
            Field::Mode => Some(self.mode),
            _ => None,
        }
    }

    /// Flips a toggle field; entries are left untouched.
    pub fn flip_toggle(&mut self, field: Field) {
        match field {
            Field::Enable => self.enable = !self.enable,
            Field::Clock => self.clock = !self.clock,
            Field::Reset => self.reset = !self.reset,
            Field::Mode => self.mode = !self.mode,
            _ => {}
        }
    }

    /// Appends a digit to the focused entry field.
    pub fn push_digit(&mut self, c: char) {
        let field = self.focused_field();
        if let Some(buf) = self.entry_mut(field) {
            buf.push(c);
        }
    }

    /// Removes the last character of the focused entry field.
    pub fn backspace(&mut self) {
        let field = self.focused_field();
        if let Some(buf) = self.entry_mut(field) {
            buf.pop();
        }
    }

    /// Scrolls the output panel down.
    pub fn scroll_down(&mut self) {
        self.output_scroll = self.output_scroll.saturating_add(1);
    }

    /// Scrolls the output panel up.
    pub fn scroll_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }

    /// Clears every entry, toggle, the output, and any alert.
    pub fn clear(&mut self) {
        let tab = self.tab;
        *self = Self::new();
        self.tab = tab;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
