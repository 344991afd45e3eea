//! Block classification from the (inputs, outputs) pair.

use crate::error::GenError;

/// The block type inferred from an (inputs, outputs) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// 1-to-N demultiplexer.
    Demux,
    /// N-to-1 multiplexer.
    Mux,
    /// N-to-2^N decoder.
    Decoder,
    /// 2^N-to-N priority-free encoder.
    Encoder,
}

/// Returns `true` when `value == 2^exp` without overflowing.
fn is_power_with_exponent(value: u32, exp: u32) -> bool {
    exp < 64 && u64::from(value) == 1u64 << exp
}

/// Classifies the (inputs, outputs) pair into a block type.
///
/// Precedence follows the form semantics: a single input fanning out is a
/// demux, many inputs converging on one output is a mux, `2^inputs`
/// outputs is a decoder, `2^outputs` inputs is an encoder. Anything else
/// is rejected as an unknown configuration.
pub fn classify(inputs: u32, outputs: u32) -> Result<BlockKind, GenError> {
    if inputs == 0 || outputs == 0 {
        return Err(GenError::NonPositiveCount);
    }
    if inputs == 1 && outputs > 1 {
        Ok(BlockKind::Demux)
    } else if outputs == 1 && inputs > 1 {
        Ok(BlockKind::Mux)
    } else if is_power_with_exponent(outputs, inputs) {
        Ok(BlockKind::Decoder)
    } else if is_power_with_exponent(inputs, outputs) {
        Ok(BlockKind::Encoder)
    } else {
        Err(GenError::UnknownConfiguration)
    }
}
