//! RIFF/WAVE encoding.
//!
//! This module turns a [`WaveTable`](crate::wavetable::WaveTable) and a
//! sequence of notes into a byte-exact PCM WAV file: format parameters,
//! sample quantization, and the encoder state machine that writes the
//! header, replicates per-note blocks, and backpatches the header sizes.

mod encoder;
mod format;
mod pcm;


// Re-export public API
pub use encoder::{EncoderState, WavEncoder, HEADER_SIZE};
pub use format::{WavFormat, SUPPORTED_SAMPLE_RATES};
pub use pcm::{encode_sample, sample_to_pcm16, sample_to_pcm32};
