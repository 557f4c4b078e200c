//! Sample quantization and little-endian PCM packing.
//!
//! Quantization maps a normalized sample onto the *unsigned* bit-equivalent
//! of a signed two's-complement PCM value: non-negative inputs land in the
//! low half of the range and negative inputs in the high half, so the raw
//! bit pattern is already spec-correct PCM and byte packing never needs a
//! sign interpretation.

/// Converts a normalized sample to 16-bit PCM.
///
/// Inputs are saturated to `[-1.0, 1.0]` before conversion. The returned
/// `u16` is the unsigned bit-equivalent of the signed sample: `0.0` maps to
/// 0, `1.0` to 32767, and `-1.0` to 32768, which reinterprets as
/// `i16::MIN`.
pub fn sample_to_pcm16(sample: f64) -> u16 {
    let sample = sample.clamp(-1.0, 1.0);
    if sample >= 0.0 {
        (sample * 32767.0).round() as u16
    } else {
        ((sample + 1.0) * 32767.0 + 32768.0).round() as u16
    }
}

/// Converts a normalized sample to 32-bit PCM.
///
/// Same mapping as [`sample_to_pcm16`] with the 32-bit constants; inputs
/// are saturated to `[-1.0, 1.0]`.
pub fn sample_to_pcm32(sample: f64) -> u32 {
    let sample = sample.clamp(-1.0, 1.0);
    if sample >= 0.0 {
        (sample * 2_147_483_647.0).round() as u32
    } else {
        ((sample + 1.0) * 2_147_483_647.0 + 2_147_483_648.0).round() as u32
    }
}

/// Quantizes a sample at the given bit depth and appends it to `pcm` in
/// little-endian byte order.
///
/// `bits_per_sample` comes from a validated format and is 16 or 32.
pub fn encode_sample(pcm: &mut Vec<u8>, sample: f64, bits_per_sample: u16) {
    if bits_per_sample == 32 {
        pcm.extend_from_slice(&sample_to_pcm32(sample).to_le_bytes());
    } else {
        pcm.extend_from_slice(&sample_to_pcm16(sample).to_le_bytes());
    }
}
