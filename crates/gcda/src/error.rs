//! gcda codec error type.

use thiserror::Error;

/// Error type for gcda encoding and decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GcdaError {
    #[error("destination too small: need {need} bytes, have {have}")]
    DestinationTooSmall { need: usize, have: usize },
    #[error("unexpected end of stream at word {0}")]
    UnexpectedEof(usize),
    #[error("bad data-file magic {0:#010x}")]
    BadMagic(u32),
    #[error("unknown record tag {tag:#010x} at word {at}")]
    UnknownTag { tag: u32, at: usize },
    #[error("function record length {0}, expected 3")]
    BadFunctionLength(u32),
    #[error("counter record of {len} payload words overruns the stream at word {at}")]
    TruncatedRecord { len: u32, at: usize },
    #[error("odd counter record length {0}")]
    OddCounterLength(u32),
    #[error("counter record before any function record")]
    CounterOutsideFunction,
    #[error("function {ident}: {found} counter sets for {expected} active slots")]
    CounterSetMismatch {
        ident: u32,
        expected: usize,
        found: usize,
    },
}
