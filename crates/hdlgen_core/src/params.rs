//! Request parameters for a single generate action.
//!
//! These are transient values read from the form fields. Nothing here
//! persists beyond one call into the generators.

use serde::{Deserialize, Serialize};

/// Parameters for the combinational tab (mux/demux/encoder/decoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombRequest {
    /// Number of input signals.
    pub inputs: u32,
    /// Number of output signals.
    pub outputs: u32,
    /// Declared selector width; must equal `ceil(log2(count))` for
    /// mux/demux requests.
    pub selector_width: u32,
    /// Whether to include an enable port.
    pub enable: bool,
}

/// Parameters for the shift-register tab (PISO/SIPO).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Register width in bits.
    pub bits: u32,
    /// Clock signal requested.
    pub clock: bool,
    /// Reset signal requested.
    pub reset: bool,
    /// Mode flag: `true` selects PISO, `false` selects SIPO.
    pub mode: bool,
}

/// Computes the selector width needed to address `count` signals,
/// i.e. `ceil(log2(count))`.
///
/// Returns 0 for counts below 2; callers only reach this with at least
/// two signals because classification requires more than one input or
/// output for a mux/demux.
pub fn selector_width_for(count: u32) -> u32 {
    if count <= 1 {
        return 0;
    }
    32 - (count - 1).leading_zeros()
}
