//! Encoder for gcc coverage counter state into the `.gcda` binary stream
//! format.
//!
//! Compiler-instrumented programs on embedded targets accumulate coverage
//! counters in memory; this crate converts that state into the exact
//! byte-for-byte stream the gcov toolchain reads, so a transport can ship
//! it off-device as a `.gcda` file. The number format is gcc's: 32-bit
//! native-endian words, tag+length records, 64-bit counters split into
//! two words with the low part first.
//!
//! The encoder is two-pass: [`encoded_size`] measures, the caller
//! allocates, [`encode_into`] fills. Both passes share one traversal, so
//! a structurally unmodified [`GcovUnit`] fills exactly the measured
//! count. [`GcdaEncoder`] offers the single-call owned-buffer
//! alternative, and [`GcovUnit::reset_counters`] zeroes the counters
//! between capture windows.
//!
//! ```
//! use gcov_gcda::{encode_into, encoded_size, CounterValues, GcovFunction, GcovUnit};
//!
//! let mut active = [false; gcov_gcda::GCOV_COUNTERS];
//! active[0] = true; // arc counters only
//!
//! let unit = GcovUnit::new(0x4233_3043, 0x1700, 0xfeed, "main.gcda", active)
//!     .with_functions(vec![GcovFunction::new(7, 100, 200)
//!         .with_counters(vec![CounterValues::new(vec![1, 2, 3])])]);
//!
//! let mut buf = vec![0u8; encoded_size(&unit)];
//! let written = encode_into(&unit, &mut buf).unwrap();
//! assert_eq!(written, buf.len());
//! ```
//!
//! Counter values may still be incremented by the instrumented program
//! while an encode pass runs; the stream then carries a best-effort
//! snapshot. Structural fields must not change between the passes.

mod constants;
mod convert;
mod decoder;
mod encoder;
mod error;
mod types;

pub use constants::{
    counter_kind_of_tag, counter_record_length, tag_for_counter, CounterKind, GCOV_COUNTERS,
    GCOV_DATA_MAGIC, GCOV_TAG_COUNTER_BASE, GCOV_TAG_FUNCTION, GCOV_TAG_FUNCTION_LENGTH,
    WORD_BYTES,
};
pub use convert::gcda_to_json;
pub use decoder::{GcdaCounterBlock, GcdaDecoder, GcdaFile, GcdaFunction};
pub use encoder::{
    encode_into, encode_into_with_keepalive, encoded_size, GcdaEncoder,
};
pub use error::GcdaError;
pub use types::{CounterValues, GcovFunction, GcovUnit};
