//! Word-granularity buffer writer.

/// A binary buffer writer that appends native-endian 32-bit words to an
/// auto-growing buffer.
///
/// The gcda number format is defined in 32-bit units recorded in the byte
/// order of the producing machine, so the writer's primitive is a `u32`
/// word rather than a byte. The writer maintains a byte cursor; call
/// [`flush`](WordWriter::flush) to take the written bytes and rewind the
/// cursor for reuse.
///
/// # Example
///
/// ```
/// use gcov_buffers::WordWriter;
///
/// let mut writer = WordWriter::new();
/// writer.word(0x6763_6461);
/// writer.word(2);
/// let data = writer.flush();
/// assert_eq!(&data[..4], 0x6763_6461u32.to_ne_bytes());
/// assert_eq!(&data[4..], 2u32.to_ne_bytes());
/// ```
pub struct WordWriter {
    /// The underlying byte storage.
    pub uint8: Vec<u8>,
    /// Current cursor position in bytes.
    pub x: usize,
}

impl Default for WordWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordWriter {
    /// Creates a new writer with a small default capacity.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new writer pre-sized to `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: vec![0; capacity],
            x: 0,
        }
    }

    /// Rewinds the cursor without releasing storage.
    pub fn reset(&mut self) {
        self.x = 0;
    }

    /// Grows the storage so that `capacity` more bytes fit after the cursor.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let needed = self.x + capacity;
        if self.uint8.len() < needed {
            let grown = (self.uint8.len() * 2).max(needed);
            self.uint8.resize(grown, 0);
        }
    }

    /// Appends one 32-bit word in native byte order.
    pub fn word(&mut self, v: u32) {
        self.ensure_capacity(4);
        let x = self.x;
        self.uint8[x..x + 4].copy_from_slice(&v.to_ne_bytes());
        self.x = x + 4;
    }

    /// Number of whole words written since the last flush or reset.
    pub fn word_len(&self) -> usize {
        self.x / 4
    }

    /// Returns the written bytes and rewinds the cursor.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8[..self.x].to_vec();
        self.x = 0;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word() {
        let mut writer = WordWriter::new();
        writer.word(0x0102_0304);
        assert_eq!(writer.word_len(), 1);
        assert_eq!(writer.flush(), 0x0102_0304u32.to_ne_bytes());
    }

    #[test]
    fn test_flush_rewinds() {
        let mut writer = WordWriter::new();
        writer.word(1);
        writer.flush();
        writer.word(2);
        assert_eq!(writer.flush(), 2u32.to_ne_bytes());
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut writer = WordWriter::with_capacity(4);
        for i in 0..64 {
            writer.word(i);
        }
        assert_eq!(writer.word_len(), 64);
        let data = writer.flush();
        assert_eq!(data.len(), 256);
        assert_eq!(&data[252..], 63u32.to_ne_bytes());
    }

    #[test]
    fn test_reset() {
        let mut writer = WordWriter::new();
        writer.word(7);
        writer.reset();
        assert_eq!(writer.word_len(), 0);
        assert!(writer.flush().is_empty());
    }
}
