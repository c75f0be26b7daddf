//! WordWriter/WordReader roundtrip matrix for the buffers crate.

use gcov_buffers::{print_words, print_words_default, WordReader, WordWriter};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_words() {
    let mut w = WordWriter::new();
    w.word(0);
    w.word(0x0102_0304);
    w.word(u32::MAX);
    let data = w.flush();
    let mut r = WordReader::new(&data);
    assert_eq!(r.word(), 0);
    assert_eq!(r.word(), 0x0102_0304);
    assert_eq!(r.word(), u32::MAX);
    assert!(!r.has_words(1));
}

#[test]
fn roundtrip_long_stream() {
    let mut w = WordWriter::with_capacity(8);
    for i in 0..1000u32 {
        w.word(i.wrapping_mul(0x9e37_79b9));
    }
    let data = w.flush();
    assert_eq!(data.len(), 4000);
    let mut r = WordReader::new(&data);
    for i in 0..1000u32 {
        assert_eq!(r.word(), i.wrapping_mul(0x9e37_79b9));
    }
}

#[test]
fn writer_reuse_after_flush() {
    let mut w = WordWriter::new();
    w.word(1);
    let first = w.flush();
    w.word(2);
    w.word(3);
    let second = w.flush();
    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 8);
    let mut r = WordReader::new(&second);
    assert_eq!(r.word(), 2);
    assert_eq!(r.word(), 3);
}

#[test]
fn reader_reset() {
    let a = 0xaaaa_aaaau32.to_ne_bytes();
    let b = 0xbbbb_bbbbu32.to_ne_bytes();
    let mut r = WordReader::new(&a);
    assert_eq!(r.word(), 0xaaaa_aaaa);
    r.reset(&b);
    assert_eq!(r.word_index(), 0);
    assert_eq!(r.word(), 0xbbbb_bbbb);
}

#[test]
fn native_byte_order_is_preserved() {
    let mut w = WordWriter::new();
    w.word(0x0102_0304);
    let data = w.flush();
    assert_eq!(data, 0x0102_0304u32.to_ne_bytes());
}

// ---------------------------------------------------------------------------
// Debug formatting
// ---------------------------------------------------------------------------

#[test]
fn print_words_matrix() {
    assert_eq!(print_words(&[], 16), "");
    assert_eq!(print_words(&[0xdead_beef], 16), "deadbeef");
    assert_eq!(
        print_words_default(&[0x6763_6461, 0x0100_0000, 3]),
        "67636461 01000000 00000003"
    );
    assert_eq!(print_words(&[1, 2, 3], 2), "00000001 00000002... (1 more)");
}
