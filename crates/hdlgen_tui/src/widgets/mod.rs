//! TUI widget modules.
//!
//! Each module contains a stateless rendering function that draws a
//! specific panel of the form interface into a ratatui buffer.

pub mod form;
pub mod key_hints;
pub mod output;
pub mod status_bar;
