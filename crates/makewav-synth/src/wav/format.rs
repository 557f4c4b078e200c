//! WAV file format parameters.

use crate::error::{SynthError, SynthResult};

/// Sample rates accepted by [`WavFormat::new`].
pub const SUPPORTED_SAMPLE_RATES: [u32; 4] = [22050, 32000, 44100, 48000];

/// Immutable per-file format parameters, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a validated format.
    ///
    /// # Errors
    /// Rejects channel counts other than 1 or 2, sample rates outside
    /// [`SUPPORTED_SAMPLE_RATES`], and bit depths other than 16 or 32.
    /// Nothing is partially applied on failure.
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> SynthResult<Self> {
        if channels != 1 && channels != 2 {
            return Err(SynthError::InvalidChannelCount { channels });
        }
        if !SUPPORTED_SAMPLE_RATES.contains(&sample_rate) {
            return Err(SynthError::InvalidSampleRate { rate: sample_rate });
        }
        if bits_per_sample != 16 && bits_per_sample != 32 {
            return Err(SynthError::InvalidBitDepth {
                bits: bits_per_sample,
            });
        }
        Ok(Self {
            channels,
            sample_rate,
            bits_per_sample,
        })
    }

    /// Creates a mono format.
    pub fn mono(sample_rate: u32, bits_per_sample: u16) -> SynthResult<Self> {
        Self::new(1, sample_rate, bits_per_sample)
    }

    /// Creates a stereo format.
    pub fn stereo(sample_rate: u32, bits_per_sample: u16) -> SynthResult<Self> {
        Self::new(2, sample_rate, bits_per_sample)
    }

    /// Number of channels (1 = mono, 2 = stereo).
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bits per sample (16 or 32).
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Bytes per sample, per channel.
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate (bytes per second of audio).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}
