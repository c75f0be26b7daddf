//! gcda stream encoder.
//!
//! Walks a [`GcovUnit`] in canonical order (file header, then per
//! function a function record followed by one counter record per active
//! kind) and emits the tagged word stream. A single traversal serves
//! three modes: pure size measurement ([`encoded_size`]), filling a
//! caller-owned buffer ([`encode_into`]), and producing an owned buffer
//! ([`GcdaEncoder`]).
//!
//! The intended two-pass protocol on a target is: measure, allocate the
//! destination out-of-band, fill, hand the bytes to the transport. The
//! measuring and filling passes make identical traversal decisions, so a
//! structurally unmodified unit fills exactly the measured byte count.

use gcov_buffers::WordWriter;

use crate::constants::{
    counter_record_length, tag_for_counter, GCOV_COUNTERS, GCOV_DATA_MAGIC, GCOV_TAG_FUNCTION,
    GCOV_TAG_FUNCTION_LENGTH, WORD_BYTES,
};
use crate::error::GcdaError;
use crate::types::GcovUnit;

/// Destination of one encoding pass.
trait WordSink {
    fn put(&mut self, word: u32);
}

/// Measuring pass: consumes no storage.
struct Measure;

impl WordSink for Measure {
    fn put(&mut self, _word: u32) {}
}

/// Filling pass into a caller-owned slice.
///
/// The destination length is checked against the measured size before the
/// pass starts; every write is in bounds from then on.
struct SliceSink<'a> {
    dest: &'a mut [u8],
    x: usize,
}

impl WordSink for SliceSink<'_> {
    fn put(&mut self, word: u32) {
        let x = self.x;
        self.dest[x..x + WORD_BYTES].copy_from_slice(&word.to_ne_bytes());
        self.x = x + WORD_BYTES;
    }
}

impl WordSink for WordWriter {
    fn put(&mut self, word: u32) {
        self.word(word);
    }
}

/// Writes one 32-bit number in the byte order of this machine.
///
/// Returns the number of words consumed (1).
fn put_word<S: WordSink>(sink: &mut S, v: u32) -> usize {
    sink.put(v);
    1
}

/// Writes a 32-bit tag followed by a 32-bit length.
///
/// Returns the number of words consumed (2). Also carries the leading
/// magic/version pair, where the length slot holds the format version
/// rather than a length.
fn put_pair<S: WordSink>(sink: &mut S, tag: u32, length: u32) -> usize {
    sink.put(tag);
    sink.put(length);
    2
}

/// Writes a 64-bit counter as two 32-bit words, low part first, each word
/// in the byte order of this machine.
///
/// Returns the number of words consumed (2). The split is word-granular
/// on every host; the halves are never byte-swapped toward a canonical
/// order, since the format is defined relative to the producing machine's
/// own word representation.
fn put_counter<S: WordSink>(sink: &mut S, v: u64) -> usize {
    sink.put(v as u32);
    sink.put((v >> 32) as u32);
    2
}

/// Emits the complete stream for `unit` into `sink`, invoking `keepalive`
/// once per function record. Returns the total word count.
fn write_unit<S: WordSink>(
    sink: &mut S,
    unit: &GcovUnit,
    mut keepalive: Option<&mut dyn FnMut()>,
) -> usize {
    let mut pos = 0;

    // File header.
    pos += put_pair(sink, GCOV_DATA_MAGIC, unit.version);
    pos += put_word(sink, unit.stamp);
    pos += put_word(sink, unit.checksum);

    for func in &unit.functions {
        if let Some(hook) = keepalive.as_deref_mut() {
            hook();
        }

        // Function record.
        pos += put_pair(sink, GCOV_TAG_FUNCTION, GCOV_TAG_FUNCTION_LENGTH);
        pos += put_word(sink, func.ident);
        pos += put_word(sink, func.lineno_checksum);
        pos += put_word(sink, func.cfg_checksum);

        // One counter record per active kind, inactive slots skipped
        // entirely; the n-th counter set of the function belongs to the
        // n-th active slot.
        let active_kinds = (0..GCOV_COUNTERS).filter(|&kind| unit.active[kind]);
        for (kind, set) in active_kinds.zip(&func.counters) {
            pos += put_pair(
                sink,
                tag_for_counter(kind),
                counter_record_length(set.values.len()),
            );
            for &value in &set.values {
                pos += put_counter(sink, value);
            }
        }
    }

    pos
}

/// Exact size in bytes of the encoded stream for `unit`.
///
/// Pure measurement: runs the same traversal as the fill pass and writes
/// nothing. For a structurally unmodified unit, a subsequent
/// [`encode_into`] consumes exactly this many bytes.
pub fn encoded_size(unit: &GcovUnit) -> usize {
    write_unit(&mut Measure, unit, None) * WORD_BYTES
}

/// Encodes `unit` into the caller-owned `dest`, returning the byte count
/// written.
///
/// `dest` must hold at least [`encoded_size`] bytes; shorter destinations
/// are rejected with [`GcdaError::DestinationTooSmall`] before anything
/// is written. The unit must not be structurally modified between the
/// size pass and this call; counter values incremented in between merely
/// show up as different value words.
pub fn encode_into(unit: &GcovUnit, dest: &mut [u8]) -> Result<usize, GcdaError> {
    encode_into_inner(unit, dest, None)
}

/// [`encode_into`] that additionally invokes `keepalive` once per
/// function record.
///
/// Lets long encode passes over large units service an external liveness
/// timer (watchdog). The hook has no effect on the output.
pub fn encode_into_with_keepalive(
    unit: &GcovUnit,
    dest: &mut [u8],
    mut keepalive: impl FnMut(),
) -> Result<usize, GcdaError> {
    encode_into_inner(unit, dest, Some(&mut keepalive))
}

fn encode_into_inner(
    unit: &GcovUnit,
    dest: &mut [u8],
    keepalive: Option<&mut dyn FnMut()>,
) -> Result<usize, GcdaError> {
    let need = encoded_size(unit);
    if dest.len() < need {
        return Err(GcdaError::DestinationTooSmall {
            need,
            have: dest.len(),
        });
    }
    let mut sink = SliceSink { dest, x: 0 };
    let words = write_unit(&mut sink, unit, keepalive);
    debug_assert_eq!(words * WORD_BYTES, need);
    Ok(words * WORD_BYTES)
}

/// gcda stream encoder producing an owned, exactly sized buffer.
///
/// The writer is reused across [`encode`](GcdaEncoder::encode) calls.
pub struct GcdaEncoder {
    pub writer: WordWriter,
}

impl Default for GcdaEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GcdaEncoder {
    pub fn new() -> Self {
        Self {
            writer: WordWriter::new(),
        }
    }

    pub fn with_writer(writer: WordWriter) -> Self {
        Self { writer }
    }

    /// Encodes `unit` and returns the stream bytes.
    pub fn encode(&mut self, unit: &GcovUnit) -> Vec<u8> {
        self.writer.reset();
        write_unit(&mut self.writer, unit, None);
        self.writer.flush()
    }
}
