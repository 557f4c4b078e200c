//! makewav CLI - wavetable melody synthesis to .wav files
//!
//! This binary collects file parameters from flags, a timbre and a melody
//! (from flags or interactive prompts), and drives the encoder in
//! `makewav-synth` to produce a RIFF/WAVE file playable by any standard
//! audio player.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;

use makewav_synth::note::{Note, TEMPO_MAX, TEMPO_MIN};
use makewav_synth::{WavEncoder, WavFormat, WaveTable};

mod interactive;
mod melody;

/// makewav - wavetable melody synthesis to .wav files
#[derive(Parser)]
#[command(name = "makewav")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output file path (must end in '.wav')
    #[arg(short, long)]
    output: String,

    /// Number of channels (1 = mono, 2 = stereo)
    #[arg(long, default_value_t = 2)]
    channels: u16,

    /// Sample rate in Hz (22050, 32000, 44100, or 48000)
    #[arg(long, default_value_t = 44100)]
    sample_rate: u32,

    /// Bits per sample (16 or 32)
    #[arg(long, default_value_t = 16)]
    bits: u16,

    /// Waveform used for wavetable synthesis
    #[arg(long, value_enum, default_value_t = Timbre::Sine)]
    timbre: Timbre,

    /// Harmonic amplitudes (0-100) for the custom timbre, fundamental
    /// first; prompted interactively when omitted
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    harmonics: Option<Vec<u32>>,

    /// Tempo in beats per minute (40-400)
    #[arg(long, default_value_t = 120)]
    tempo: u32,

    /// Melody as whitespace-separated 'note[octave]:value' tokens
    /// (e.g. "a3:1/4 c#4:1/8"); entered interactively when omitted
    #[arg(long)]
    melody: Option<String>,
}

/// Waveform selection for the wavetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Timbre {
    /// Pure sine wave
    Sine,
    /// Pseudo-square wave
    Square,
    /// Additive custom timbre from harmonic amplitudes
    Custom,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.output.ends_with(".wav") {
        bail!("output file name must end in '.wav'");
    }
    if !(TEMPO_MIN..=TEMPO_MAX).contains(&cli.tempo) {
        bail!("tempo must be between {TEMPO_MIN} and {TEMPO_MAX} beats/min");
    }
    let format = WavFormat::new(cli.channels, cli.sample_rate, cli.bits)?;
    let table = build_table(&cli)?;

    let notes: Vec<Note> = match &cli.melody {
        Some(input) => melody::parse_melody(input, cli.tempo)?,
        None => interactive::collect_melody(cli.tempo)?,
    };

    println!("{} {}", "writing".green().bold(), cli.output);
    let mut encoder = WavEncoder::create(&cli.output, format)
        .with_context(|| format!("cannot create '{}'", cli.output))?;
    encoder.write_header()?;
    for note in &notes {
        encoder.compose_block(&table, note.pitch_increment)?;
        encoder.write_block(note.duration_millis)?;
    }
    encoder.finalize()?;
    println!(
        "{} {} ({} notes)",
        "finished".green().bold(),
        cli.output,
        notes.len()
    );
    Ok(())
}

fn build_table(cli: &Cli) -> Result<WaveTable> {
    if cli.harmonics.is_some() && cli.timbre != Timbre::Custom {
        bail!("the --harmonics flag requires --timbre custom");
    }
    let table = match cli.timbre {
        Timbre::Sine => WaveTable::sine(),
        Timbre::Square => WaveTable::square()?,
        Timbre::Custom => match &cli.harmonics {
            Some(amplitudes) => WaveTable::custom(amplitudes)?,
            None => WaveTable::custom(&interactive::collect_harmonics()?)?,
        },
    };
    Ok(table)
}
