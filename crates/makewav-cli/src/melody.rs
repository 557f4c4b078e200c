//! Melody string parsing for the non-interactive driver path.
//!
//! A melody is whitespace-separated `note[octave]:value` tokens, e.g.
//! `a3:1/4 c#4:1/8 bb3:1/2`. The octave digit is required here — unlike
//! the interactive loop there is no running octave state to fall back on.

use anyhow::{anyhow, bail, Result};

use makewav_synth::note::{Note, NoteValue, PitchClass, OCTAVE_MAX, OCTAVE_MIN};

/// Parses a whole melody string at the given tempo.
pub fn parse_melody(input: &str, tempo: u32) -> Result<Vec<Note>> {
    input
        .split_whitespace()
        .map(|token| parse_token(token, tempo))
        .collect()
}

fn parse_token(token: &str, tempo: u32) -> Result<Note> {
    if !token.is_ascii() {
        bail!("note '{token}' contains characters outside the note grammar");
    }
    let (pitch_part, value_part) = token
        .split_once(':')
        .ok_or_else(|| anyhow!("note '{token}' is missing a ':duration' part"))?;

    let (name, octave_digit) = pitch_part.split_at(pitch_part.len().saturating_sub(1));
    let octave: u32 = octave_digit
        .parse()
        .map_err(|_| anyhow!("note '{token}' is missing an octave digit"))?;
    if !(OCTAVE_MIN..=OCTAVE_MAX).contains(&octave) {
        bail!("note '{token}' octave must be between {OCTAVE_MIN} and {OCTAVE_MAX}");
    }

    let pitch = PitchClass::parse(name)
        .ok_or_else(|| anyhow!("unknown note name '{name}' in '{token}'"))?;
    let value = NoteValue::parse(value_part).ok_or_else(|| {
        anyhow!("unknown duration '{value_part}' in '{token}' (use 1, 1/2, ... 1/32)")
    })?;

    Ok(Note::from_pitch(pitch, octave, value, tempo))
}
