//! gcda stream decoder.
//!
//! Host-side parser for streams produced by the encoder, used for
//! round-trip verification and for inspecting captured data. Words are
//! read in the byte order of this machine, so the decoder understands
//! streams from a machine with the same word representation only, which
//! is the convention the format itself is defined under.

use gcov_buffers::WordReader;

use crate::constants::{counter_kind_of_tag, GCOV_DATA_MAGIC, GCOV_TAG_FUNCTION, GCOV_TAG_FUNCTION_LENGTH};
use crate::error::GcdaError;

/// One decoded counter record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcdaCounterBlock {
    /// Activity-table slot the record's tag addresses.
    pub kind: usize,
    /// 64-bit values, in stream order.
    pub values: Vec<u64>,
}

/// One decoded function record with its counter records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcdaFunction {
    pub ident: u32,
    pub lineno_checksum: u32,
    pub cfg_checksum: u32,
    pub counters: Vec<GcdaCounterBlock>,
}

/// A fully decoded data stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcdaFile {
    pub version: u32,
    pub stamp: u32,
    pub checksum: u32,
    pub functions: Vec<GcdaFunction>,
}

/// gcda stream decoder.
///
/// Returns an error for every malformed-stream condition; never panics
/// on arbitrary input.
#[derive(Debug, Clone, Copy, Default)]
pub struct GcdaDecoder;

impl GcdaDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a complete stream.
    pub fn decode(&self, data: &[u8]) -> Result<GcdaFile, GcdaError> {
        let mut r = WordReader::new(data);

        if !r.has_words(4) {
            return Err(GcdaError::UnexpectedEof(r.word_index()));
        }
        let magic = r.word();
        if magic != GCOV_DATA_MAGIC {
            return Err(GcdaError::BadMagic(magic));
        }
        let version = r.word();
        let stamp = r.word();
        let checksum = r.word();

        let mut functions: Vec<GcdaFunction> = Vec::new();
        while r.has_words(1) {
            if !r.has_words(2) {
                // A tag with no length slot.
                return Err(GcdaError::UnexpectedEof(r.word_index()));
            }
            let at = r.word_index();
            let tag = r.word();
            let length = r.word();

            if tag == GCOV_TAG_FUNCTION {
                if length != GCOV_TAG_FUNCTION_LENGTH {
                    return Err(GcdaError::BadFunctionLength(length));
                }
                if !r.has_words(GCOV_TAG_FUNCTION_LENGTH as usize) {
                    return Err(GcdaError::UnexpectedEof(r.word_index()));
                }
                let ident = r.word();
                let lineno_checksum = r.word();
                let cfg_checksum = r.word();
                functions.push(GcdaFunction {
                    ident,
                    lineno_checksum,
                    cfg_checksum,
                    counters: Vec::new(),
                });
            } else if let Some(kind) = counter_kind_of_tag(tag) {
                if length % 2 != 0 {
                    return Err(GcdaError::OddCounterLength(length));
                }
                if !r.has_words(length as usize) {
                    return Err(GcdaError::TruncatedRecord { len: length, at });
                }
                let func = functions
                    .last_mut()
                    .ok_or(GcdaError::CounterOutsideFunction)?;
                let n = (length / 2) as usize;
                let mut values = Vec::with_capacity(n);
                for _ in 0..n {
                    // Low word first, then high word.
                    let lo = u64::from(r.word());
                    let hi = u64::from(r.word());
                    values.push(lo | (hi << 32));
                }
                func.counters.push(GcdaCounterBlock { kind, values });
            } else {
                return Err(GcdaError::UnknownTag { tag, at });
            }
        }

        if r.x != r.end {
            // Trailing bytes shorter than a word.
            return Err(GcdaError::UnexpectedEof(r.word_index()));
        }

        Ok(GcdaFile {
            version,
            stamp,
            checksum,
            functions,
        })
    }
}
