//! WAV encoder: header lifecycle, block composition, and backpatching.
//!
//! The encoder owns the output sink for the whole encode session and walks
//! a strict state sequence: write the 44-byte header, then for each note
//! compose one period's worth of encoded samples (a block) and replicate it
//! to the sink for the note's duration, and finally backpatch the two
//! header size fields that could not be known up front. Out-of-sequence
//! calls fail fast with a protocol error instead of corrupting the file.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{SynthError, SynthResult};
use crate::wavetable::WaveTable;

use super::format::WavFormat;
use super::pcm;

/// Sample rate at which a pitch increment of 1.0 traverses the table at
/// its nominal rate. Other rates scale the increment to preserve the same
/// audible frequency.
const REFERENCE_SAMPLE_RATE: f64 = 44100.0;

/// Byte offset of the RIFF ChunkSize field.
const CHUNK_SIZE_OFFSET: u64 = 4;

/// Byte offset of the data subchunk size field.
const DATA_SIZE_OFFSET: u64 = 40;

/// Size of the complete RIFF/WAVE header.
pub const HEADER_SIZE: u64 = 44;

/// Lifecycle states of a [`WavEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderState {
    /// Constructed; nothing written yet.
    Created,
    /// Header emitted; no block composed yet.
    HeaderWritten,
    /// A block is composed and ready to be written.
    BlockReady,
    /// Header sizes backpatched; the encoder is spent.
    Finalized,
}

impl fmt::Display for EncoderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::HeaderWritten => "header written",
            Self::BlockReady => "block ready",
            Self::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// Streaming WAV encoder over any seekable sink.
///
/// Writes are strictly sequential except for the two fixed-offset
/// backpatches in [`finalize`](Self::finalize). The sink must not be
/// shared with any other writer during the encode.
pub struct WavEncoder<W: Write + Seek> {
    sink: W,
    format: WavFormat,
    state: EncoderState,
    /// Byte offset of the next sequential write.
    cursor: u64,
    /// Encoded bytes of one waveform period at the current pitch.
    block: Vec<u8>,
    samples_per_block: usize,
}

impl WavEncoder<BufWriter<File>> {
    /// Creates the output file and an encoder that owns it until
    /// [`finalize`](Self::finalize).
    ///
    /// # Errors
    /// Any file creation failure is fatal to the encode.
    pub fn create<P: AsRef<Path>>(path: P, format: WavFormat) -> SynthResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), format))
    }
}

impl<W: Write + Seek> WavEncoder<W> {
    /// Wraps an open sink. The sink is assumed to be empty and positioned
    /// at its start.
    pub fn new(sink: W, format: WavFormat) -> Self {
        Self {
            sink,
            format,
            state: EncoderState::Created,
            cursor: 0,
            block: Vec::new(),
            samples_per_block: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EncoderState {
        self.state
    }

    /// Number of samples per channel in the current block.
    pub fn samples_per_block(&self) -> usize {
        self.samples_per_block
    }

    /// Total bytes written so far (header included).
    pub fn bytes_written(&self) -> u64 {
        self.cursor
    }

    /// Consumes the encoder and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Writes the 44-byte RIFF/WAVE header.
    ///
    /// The RIFF ChunkSize and data Subchunk2Size fields are left as
    /// placeholders until [`finalize`](Self::finalize), when the total
    /// byte count is known.
    ///
    /// # Errors
    /// Protocol error unless the encoder is freshly created.
    pub fn write_header(&mut self) -> SynthResult<()> {
        self.expect_state("write_header", &[EncoderState::Created])?;

        let channels = self.format.channels();
        let sample_rate = self.format.sample_rate();
        let byte_rate = self.format.byte_rate();
        let block_align = self.format.block_align();
        let bits_per_sample = self.format.bits_per_sample();

        // RIFF chunk descriptor.
        self.write_bytes(b"RIFF")?;
        self.write_bytes(&0u32.to_le_bytes())?; // ChunkSize placeholder
        self.write_bytes(b"WAVE")?;

        // fmt subchunk.
        self.write_bytes(b"fmt ")?;
        self.write_bytes(&16u32.to_le_bytes())?; // Subchunk1Size
        self.write_bytes(&1u16.to_le_bytes())?; // AudioFormat: PCM
        self.write_bytes(&channels.to_le_bytes())?;
        self.write_bytes(&sample_rate.to_le_bytes())?;
        self.write_bytes(&byte_rate.to_le_bytes())?;
        self.write_bytes(&block_align.to_le_bytes())?;
        self.write_bytes(&bits_per_sample.to_le_bytes())?;

        // data subchunk descriptor.
        self.write_bytes(b"data")?;
        self.write_bytes(&0u32.to_le_bytes())?; // Subchunk2Size placeholder

        self.state = EncoderState::HeaderWritten;
        Ok(())
    }

    /// Composes one period of the waveform at the given pitch into the
    /// block buffer. Touches no file state.
    ///
    /// The pitch increment is scaled by `44100 / sample_rate` so the same
    /// increment encodes the same audible frequency at every sample rate.
    /// When the scaled increment does not divide the table evenly the
    /// sample count is truncated, shortening the period by a fraction of a
    /// sample per block; the resulting pitch drift is a documented
    /// approximation of this synthesizer, not corrected here.
    ///
    /// Each sample is a nearest-neighbor table lookup; stereo output
    /// duplicates it to the right channel.
    ///
    /// # Errors
    /// * Protocol error before the header is written or after finalize.
    /// * [`SynthError::InvalidPitchIncrement`] for a non-positive or
    ///   non-finite increment, or one too large to fit a single sample
    ///   into the period.
    pub fn compose_block(&mut self, table: &WaveTable, pitch_increment: f64) -> SynthResult<()> {
        self.expect_state(
            "compose_block",
            &[EncoderState::HeaderWritten, EncoderState::BlockReady],
        )?;
        if !pitch_increment.is_finite() || pitch_increment <= 0.0 {
            return Err(SynthError::InvalidPitchIncrement {
                value: pitch_increment,
            });
        }

        let adjusted =
            REFERENCE_SAMPLE_RATE / f64::from(self.format.sample_rate()) * pitch_increment;
        let table_len = table.len() as f64;
        self.samples_per_block = if table_len % adjusted == 0.0 {
            (table_len / adjusted) as usize
        } else {
            (table_len / adjusted).trunc() as usize
        };
        if self.samples_per_block == 0 {
            return Err(SynthError::InvalidPitchIncrement {
                value: pitch_increment,
            });
        }

        let channels = self.format.channels();
        let bits_per_sample = self.format.bits_per_sample();
        self.block.clear();
        self.block.reserve(
            self.samples_per_block * usize::from(channels) * usize::from(bits_per_sample / 8),
        );

        let mut position = 0.0;
        for _ in 0..self.samples_per_block {
            let sample = table.sample_at(position);
            pcm::encode_sample(&mut self.block, sample, bits_per_sample);
            if channels == 2 {
                // Both channels read the same table position.
                pcm::encode_sample(&mut self.block, sample, bits_per_sample);
            }
            position += adjusted;
        }

        self.state = EncoderState::BlockReady;
        Ok(())
    }

    /// Replicates the current block to the sink until the requested
    /// duration is covered.
    ///
    /// The block count is `round(duration_millis / 1000 * sample_rate /
    /// samples_per_block)` and the block is written that many times plus
    /// one. The write loop is inclusive, so output always overshoots the
    /// requested duration by one block; callers that need exact durations
    /// must account for it.
    ///
    /// # Errors
    /// Protocol error unless a block has been composed; I/O failures are
    /// fatal and leave the file invalid.
    pub fn write_block(&mut self, duration_millis: u64) -> SynthResult<()> {
        self.expect_state("write_block", &[EncoderState::BlockReady])?;

        let blocks = (duration_millis as f64 * f64::from(self.format.sample_rate())
            / self.samples_per_block as f64
            / 1000.0)
            .round() as u64;

        for _ in 0..=blocks {
            self.sink.write_all(&self.block)?;
            self.cursor += self.block.len() as u64;
        }
        Ok(())
    }

    /// Backpatches the two header size fields and flushes the sink.
    ///
    /// ChunkSize (`total - 8`) lands at offset 4 and Subchunk2Size
    /// (`ChunkSize - 36`) at offset 40; these are the only writes that do
    /// not advance the cursor. A header-then-finalize sequence with no
    /// blocks is valid and produces an empty 44-byte file.
    ///
    /// # Errors
    /// Protocol error before the header is written or on a second call.
    pub fn finalize(&mut self) -> SynthResult<()> {
        self.expect_state(
            "finalize",
            &[EncoderState::HeaderWritten, EncoderState::BlockReady],
        )?;

        let chunk_size = self.cursor as u32 - 8;
        let data_size = chunk_size - 36;

        self.sink.seek(SeekFrom::Start(CHUNK_SIZE_OFFSET))?;
        self.sink.write_all(&chunk_size.to_le_bytes())?;
        self.sink.seek(SeekFrom::Start(DATA_SIZE_OFFSET))?;
        self.sink.write_all(&data_size.to_le_bytes())?;
        self.sink.flush()?;

        self.state = EncoderState::Finalized;
        Ok(())
    }

    fn expect_state(&self, operation: &'static str, allowed: &[EncoderState]) -> SynthResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(SynthError::invalid_state(operation, self.state))
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> SynthResult<()> {
        self.sink.write_all(bytes)?;
        self.cursor += bytes.len() as u64;
        Ok(())
    }
}
