//! makewav synthesis core
//!
//! This crate synthesizes audio from a fixed-size wavetable and serializes
//! the result into a byte-exact RIFF/WAVE (.wav) file.
//!
//! # Overview
//!
//! A [`WaveTable`] stores one period of a waveform as 400 normalized
//! samples, produced by one of three generators (sine, pseudo-square, or
//! additive custom timbre). The [`WavEncoder`] traverses the table at a
//! per-note rate, quantizes each sample to 16- or 32-bit PCM, and writes
//! the encoded period to disk repeatedly until the note's duration is
//! covered. One period is encoded exactly once per note and then
//! replicated, so the per-sample conversion cost is paid once per pitch
//! rather than once per output sample.
//!
//! # Example
//!
//! ```no_run
//! use makewav_synth::{WavEncoder, WavFormat, WaveTable};
//!
//! # fn main() -> makewav_synth::SynthResult<()> {
//! let table = WaveTable::sine();
//! let format = WavFormat::mono(44100, 16)?;
//!
//! let mut encoder = WavEncoder::create("a440.wav", format)?;
//! encoder.write_header()?;
//! encoder.compose_block(&table, 4.0)?; // A4 at the reference rate
//! encoder.write_block(1000)?;
//! encoder.finalize()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Structure
//!
//! - [`wavetable`] - Wavetable generators and nearest-neighbor lookup
//! - [`wav`] - Format parameters, PCM quantization, encoder state machine
//! - [`note`] - Note names, octaves, and durations for melody drivers
//! - [`error`] - Error taxonomy

pub mod error;
pub mod note;
pub mod wav;
pub mod wavetable;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use wav::{EncoderState, WavEncoder, WavFormat};
pub use wavetable::{WaveTable, TABLE_SIZE};
