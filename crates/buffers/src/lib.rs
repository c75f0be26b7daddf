//! Word-granularity binary buffer utilities for gcov-gcda.
//!
//! The gcda number format is defined in 32-bit unsigned units recorded in
//! the byte order of the machine producing the file. This crate provides
//! the word-level reading and writing primitives the codec is built on.
//!
//! # Overview
//!
//! - [`WordReader`] - Reads native-endian 32-bit words from a byte slice
//!   with cursor tracking
//! - [`WordWriter`] - Writes native-endian 32-bit words to an auto-growing
//!   buffer
//! - [`print_words`] - Formats a word stream as hex for debugging
//!
//! # Example
//!
//! ```
//! use gcov_buffers::{WordReader, WordWriter};
//!
//! // Write some words
//! let mut writer = WordWriter::new();
//! writer.word(0x6763_6461);
//! writer.word(0x0100_0000);
//! let data = writer.flush();
//!
//! // Read them back
//! let mut reader = WordReader::new(&data);
//! assert_eq!(reader.word(), 0x6763_6461);
//! assert_eq!(reader.word(), 0x0100_0000);
//! ```

mod print_words;
mod reader;
mod writer;

pub use print_words::{print_words, print_words_default};
pub use reader::WordReader;
pub use writer::WordWriter;
