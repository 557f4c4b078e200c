//! Wavetable generation.
//!
//! A [`WaveTable`] holds one period of a periodic signal as a fixed-length
//! sequence of normalized amplitude samples in `[-1.0, 1.0]`. The encoder
//! reads through the table at a rate proportional to the desired output
//! frequency, so a single stored period is enough to synthesize any pitch.
//!
//! Tables are immutable once constructed. Each generator is a constructor,
//! so a `WaveTable` in hand is always fully populated and a failed
//! generation produces no table at all.

use std::f64::consts::PI;

use crate::error::{SynthError, SynthResult};

/// Number of samples in every wavetable.
pub const TABLE_SIZE: usize = 400;

/// Maximum number of harmonics accepted by [`WaveTable::custom`].
pub const MAX_HARMONICS: usize = 32;

/// Square-wave amplitude, attenuated relative to the sine peak to avoid
/// clipping.
const SQUARE_AMPLITUDE: f64 = 0.15;

/// One period of a periodic signal, sampled at [`TABLE_SIZE`] points.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveTable {
    samples: Vec<f64>,
}

impl WaveTable {
    /// Generates a sine wave: `sample[i] = sin(2*PI * i / TABLE_SIZE)`.
    pub fn sine() -> Self {
        Self {
            samples: sine_table(TABLE_SIZE),
        }
    }

    /// Generates a pseudo-square wave: first half at a positive constant,
    /// second half at its negation.
    ///
    /// # Errors
    /// Returns [`SynthError::OddTableSize`] if the table size is odd.
    pub fn square() -> SynthResult<Self> {
        Ok(Self {
            samples: square_table(TABLE_SIZE)?,
        })
    }

    /// Synthesizes a custom timbre by additive harmonic synthesis.
    ///
    /// `harmonic_amplitudes` holds up to [`MAX_HARMONICS`] relative
    /// amplitudes in `[0, 100]`; index 0 is the fundamental and a zero
    /// entry means the harmonic is absent. Each harmonic samples a fresh
    /// sine table at a frequency multiple via modular indexing, so the
    /// sine period acts as the single oscillator for every partial. The
    /// result is normalized by the amplitude sum.
    ///
    /// # Errors
    /// * [`SynthError::TooManyHarmonics`] for more than 32 entries.
    /// * [`SynthError::AmplitudeOutOfRange`] for an amplitude above 100.
    /// * [`SynthError::EmptyTimbre`] when every amplitude is zero.
    pub fn custom(harmonic_amplitudes: &[u32]) -> SynthResult<Self> {
        Ok(Self {
            samples: custom_table(TABLE_SIZE, harmonic_amplitudes)?,
        })
    }

    /// Number of samples in the table.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Nearest-neighbor lookup at a fractional table position.
    ///
    /// The position is rounded to the nearest integer index, wrapping at
    /// the table end. No interpolation is performed; the rounding error is
    /// the dominant source of the synthesizer's inherent harmonic
    /// distortion at this table size.
    pub fn sample_at(&self, position: f64) -> f64 {
        self.samples[position.round() as usize % self.samples.len()]
    }

    /// Read-only view of the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[cfg(test)]
    pub(crate) fn from_samples(samples: Vec<f64>) -> Self {
        assert_eq!(samples.len(), TABLE_SIZE);
        Self { samples }
    }
}

fn sine_table(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| (i as f64 / size as f64 * 2.0 * PI).sin())
        .collect()
}

fn square_table(size: usize) -> SynthResult<Vec<f64>> {
    if size % 2 != 0 {
        return Err(SynthError::OddTableSize { size });
    }
    Ok((0..size)
        .map(|i| {
            if i < size / 2 {
                SQUARE_AMPLITUDE
            } else {
                -SQUARE_AMPLITUDE
            }
        })
        .collect())
}

fn custom_table(size: usize, harmonic_amplitudes: &[u32]) -> SynthResult<Vec<f64>> {
    if harmonic_amplitudes.len() > MAX_HARMONICS {
        return Err(SynthError::TooManyHarmonics {
            count: harmonic_amplitudes.len(),
            max: MAX_HARMONICS,
        });
    }
    if let Some((index, &value)) = harmonic_amplitudes
        .iter()
        .enumerate()
        .find(|(_, &value)| value > 100)
    {
        return Err(SynthError::AmplitudeOutOfRange { index, value });
    }
    let amplitude_sum: u32 = harmonic_amplitudes.iter().sum();
    if amplitude_sum == 0 {
        return Err(SynthError::EmptyTimbre);
    }

    // The sine period is the universal harmonic source: harmonic k samples
    // it at (k+1) times the fundamental rate via modular indexing.
    let sine = sine_table(size);
    let scale = amplitude_sum as f64 / 100.0;

    let mut table = vec![0.0; size];
    for (i, entry) in table.iter_mut().enumerate() {
        let mut accumulated = 0.0;
        for (k, &amplitude) in harmonic_amplitudes.iter().enumerate() {
            if amplitude == 0 {
                continue;
            }
            accumulated += (amplitude as f64 / 100.0) * sine[(k + 1) * i % size] / scale;
        }
        *entry = accumulated;
    }

    Ok(table)
}
