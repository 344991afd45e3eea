//! Error types for block generation.

/// Errors that can occur when validating parameters or generating a block.
///
/// Every variant is an input-validation failure surfaced to the user as a
/// blocking message; none is fatal and the form stays usable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    /// The input or output count is zero.
    #[error("number of inputs and outputs must be greater than 0")]
    NonPositiveCount,

    /// The shift-register bit width is zero.
    #[error("number of bits must be greater than 0")]
    NonPositiveBitWidth,

    /// The selector width does not match `ceil(log2(count))`.
    #[error("for {count} signals the selector width must be {expected}")]
    SelectorWidthMismatch {
        /// The input count (mux) or output count (demux) being addressed.
        count: u32,
        /// The required selector width.
        expected: u32,
    },

    /// The (inputs, outputs) pair matches no known block type.
    #[error("the configuration does not match any known block")]
    UnknownConfiguration,

    /// A decoder/encoder address width over the supported limit.
    #[error("address width exceeds the supported limit of {limit} bits")]
    WidthTooLarge {
        /// Maximum supported address width in bits.
        limit: u32,
    },

    /// A shift register was requested without both clock and reset.
    #[error("clock and reset must be selected to generate a shift register")]
    MissingClockReset,
}
