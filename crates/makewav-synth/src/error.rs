//! Error types for the synthesis core.

use thiserror::Error;

use crate::wav::EncoderState;

/// Result type for synthesis and encoding operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during wavetable generation or WAV encoding.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Square-wave generation needs an even table size.
    #[error("wavetable size {size} must be even to generate a square wave")]
    OddTableSize {
        /// The offending table size.
        size: usize,
    },

    /// Unsupported channel count.
    #[error("invalid channel count: {channels} (expected 1 or 2)")]
    InvalidChannelCount {
        /// The invalid channel count.
        channels: u16,
    },

    /// Unsupported sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Unsupported bit depth.
    #[error("invalid bit depth: {bits} (expected 16 or 32)")]
    InvalidBitDepth {
        /// The invalid bit depth.
        bits: u16,
    },

    /// Custom timbre with every harmonic amplitude at zero.
    #[error("custom timbre has no non-zero harmonic amplitudes")]
    EmptyTimbre,

    /// Harmonic amplitude outside the relative 0-100 range.
    #[error("harmonic {index} amplitude {value} is out of range (expected 0-100)")]
    AmplitudeOutOfRange {
        /// Index of the harmonic (0 = fundamental).
        index: usize,
        /// The rejected amplitude.
        value: u32,
    },

    /// More harmonic amplitudes than the synthesizer supports.
    #[error("too many harmonic amplitudes: {count} (at most {max})")]
    TooManyHarmonics {
        /// Number of amplitudes supplied.
        count: usize,
        /// Supported maximum.
        max: usize,
    },

    /// Pitch increment that cannot traverse the table.
    #[error("invalid pitch increment: {value}")]
    InvalidPitchIncrement {
        /// The rejected increment.
        value: f64,
    },

    /// Encoder method invoked out of its required state sequence.
    #[error("encoder cannot {operation} in state '{state}'")]
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The state the encoder was in.
        state: EncoderState,
    },

    /// I/O error. Fatal to the current encode; the partial file is invalid.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates a protocol error for an out-of-sequence encoder call.
    pub(crate) fn invalid_state(operation: &'static str, state: EncoderState) -> Self {
        Self::InvalidState { operation, state }
    }
}
