//! Interactive prompt loops for custom timbre and melody entry.
//!
//! Every prompt understands a small command language alongside its normal
//! input: `z` prints contextual help, `x` aborts the program, `w` ends
//! melody entry and writes the file, and `+`/`-` shift the working octave.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use colored::Colorize;

use makewav_synth::note::{Note, NoteValue, PitchClass, OCTAVE_MAX, OCTAVE_MIN};
use makewav_synth::wavetable::MAX_HARMONICS;

/// Prompts for up to 32 relative harmonic amplitudes for a custom timbre.
///
/// `s` synthesizes with the amplitudes entered so far (at least one must
/// be non-zero); values outside 0-100 re-prompt.
pub fn collect_harmonics() -> Result<Vec<u32>> {
    println!("\n{}", "---- synthesize a custom timbre ----".bold());
    println!("enter the relative amplitude (0-100) of each harmonic");
    println!("type 's' to synthesize, 'z' for info, 'x' to abort\n");

    let mut amplitudes: Vec<u32> = Vec::new();
    while amplitudes.len() < MAX_HARMONICS {
        let label = if amplitudes.is_empty() {
            "  fundamental: ".to_string()
        } else {
            format!("  harmonic {}: ", amplitudes.len())
        };
        let input = prompt(&label)?;
        match input.as_str() {
            "z" => print_timbre_help(),
            "x" => abort(),
            "s" => {
                if amplitudes.iter().all(|&a| a == 0) {
                    println!(
                        "{}",
                        "enter a non-zero amplitude for at least one harmonic".red()
                    );
                } else {
                    break;
                }
            }
            other => match other.parse::<u32>() {
                Ok(value) if value <= 100 => amplitudes.push(value),
                _ => println!("{}", "amplitude must be an integer between 0 and 100".red()),
            },
        }
    }
    Ok(amplitudes)
}

/// Prompts for a melody, one note and duration at a time, until `w`.
///
/// The working octave starts at 3 and moves with `+`/`-`, clamped to the
/// selectable range. Ending with `w` at a duration prompt discards the
/// note whose duration was never given.
pub fn collect_melody(tempo: u32) -> Result<Vec<Note>> {
    println!("\n{}", "---- write a melody ----".bold());
    println!("enter a note name, then its duration as a fraction of a whole note");
    println!("type '+'/'-' to shift octave, 'w' to write the file, 'z' for info, 'x' to abort\n");

    let mut octave: u32 = 3;
    println!("current octave = {octave}");

    let mut notes = Vec::new();
    loop {
        let pitch = loop {
            let input = prompt(" note: ")?;
            match input.as_str() {
                "+" => raise_octave(&mut octave),
                "-" => lower_octave(&mut octave),
                "w" => return Ok(notes),
                "z" => print_melody_help(),
                "x" => abort(),
                other => match PitchClass::parse(other) {
                    Some(pitch) => break pitch,
                    None => println!(
                        "{}",
                        "enter a note name such as 'a', 'c#', or 'bb' ('z' for an example)".red()
                    ),
                },
            }
        };

        let value = loop {
            let input = prompt("  duration: ")?;
            match input.as_str() {
                "+" => raise_octave(&mut octave),
                "-" => lower_octave(&mut octave),
                "w" => return Ok(notes),
                "z" => print_melody_help(),
                "x" => abort(),
                other => match NoteValue::parse(other) {
                    Some(value) => break value,
                    None => println!(
                        "{}",
                        "enter 1, 1/2, 1/4, 1/8, 1/16, or 1/32".red()
                    ),
                },
            }
        };

        notes.push(Note::from_pitch(pitch, octave, value, tempo));
    }
}

fn raise_octave(octave: &mut u32) {
    if *octave == OCTAVE_MAX {
        println!("already at highest octave");
    } else {
        *octave += 1;
        println!("octave = {octave}");
    }
}

fn lower_octave(octave: &mut u32) {
    if *octave == OCTAVE_MIN {
        println!("already at lowest octave");
    } else {
        *octave -= 1;
        println!("octave = {octave}");
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

fn abort() -> ! {
    println!("program aborted");
    std::process::exit(0);
}

fn print_timbre_help() {
    println!("\n{}", "custom timbre:".bold());
    println!("set the relative amplitude of each harmonic, up to the 31st.");
    println!("amplitudes are integers between 0 and 100; 0 means the harmonic");
    println!("is not included. when the highest harmonic you want is set,");
    println!("enter 's' to synthesize the waveform.\n");
}

fn print_melody_help() {
    println!("\n{}", "melody entry:".bold());
    println!("  note: a#            an A-sharp in the current octave...");
    println!("   duration: 1/8      ...for an eighth-note duration");
    println!("  note: cb            a C-flat in the current octave...");
    println!("   duration: 1        ...for a whole-note duration\n");
}
