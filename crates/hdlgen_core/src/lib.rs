//! Parameter model and VHDL template emitters for small digital-logic
//! building blocks.
//!
//! This crate is the pure half of hdlgen: it classifies an
//! (inputs, outputs) pair into a block type, validates the structural
//! parameters, and interpolates them into fixed VHDL templates for
//! multiplexers, demultiplexers, encoders, decoders, and PISO/SIPO shift
//! registers. No terminal, no I/O — every function here takes numbers
//! and flags and returns a `String` or a [`GenError`].

#![warn(missing_docs)]

pub mod classify;
pub mod decoder;
pub mod demux;
pub mod encoder;
pub mod error;
pub mod mux;
pub mod params;
pub mod pattern;
pub mod shift;

pub use classify::{classify, BlockKind};
pub use decoder::generate_decoder;
pub use demux::generate_demux;
pub use encoder::generate_encoder;
pub use error::GenError;
pub use mux::generate_mux;
pub use params::{selector_width_for, CombRequest, ShiftRequest};
pub use shift::{generate_piso, generate_shift, generate_sipo};

/// Maximum address width for decoder/encoder requests.
///
/// The one-hot patterns in those templates are `2^n` characters wide, so
/// the emitted text grows as `4^n`; 8 bits (256 branches) is already far
/// beyond any hand-instantiated block.
pub const MAX_ADDRESS_WIDTH: u32 = 8;

/// Maximum selector width for mux/demux requests, bounding the emitted
/// case list at `2^16` branches.
pub const MAX_SELECTOR_WIDTH: u32 = 16;

/// Classifies a combinational request and runs the matching generator.
///
/// The enable flag is threaded to the mux, demux, and encoder templates;
/// the decoder takes no feature ports.
pub fn generate_comb(req: &CombRequest) -> Result<String, GenError> {
    match classify(req.inputs, req.outputs)? {
        BlockKind::Demux => generate_demux(req.inputs, req.outputs, req.selector_width, req.enable),
        BlockKind::Mux => generate_mux(req.inputs, req.selector_width, req.enable),
        BlockKind::Decoder => generate_decoder(req.inputs),
        BlockKind::Encoder => generate_encoder(req.outputs, req.enable),
    }
}
