//! gcda format constants.
//!
//! The magic, tag values, record lengths, and counter-kind numbering are
//! defined by gcc (`gcc/gcov-io.h`, `gcc/gcov-counter.def`) and are reused
//! verbatim; the gcov toolchain rejects a stream in which any of them
//! drift.

/// Size of one stream word in bytes.
pub const WORD_BYTES: usize = 4;

/// Magic tag opening a data file: "gcda" packed into a word.
pub const GCOV_DATA_MAGIC: u32 = 0x6763_6461;

/// Tag opening a function record.
pub const GCOV_TAG_FUNCTION: u32 = 0x0100_0000;

/// Payload length of a function record, in words: ident plus two checksums.
pub const GCOV_TAG_FUNCTION_LENGTH: u32 = 3;

/// Base tag for counter records; the kind slot is folded in above bit 16.
pub const GCOV_TAG_COUNTER_BASE: u32 = 0x01a1_0000;

/// Number of counter-kind slots in the activity table (gcc >= 10 layout).
///
/// Must match the counter table of the compiler that instrumented the
/// program, or kind slots will not line up between producer and consumer.
pub const GCOV_COUNTERS: usize = 8;

/// Tag of the counter record for the given kind slot.
#[inline]
pub fn tag_for_counter(kind: usize) -> u32 {
    GCOV_TAG_COUNTER_BASE + ((kind as u32) << 17)
}

/// Payload length of a counter record holding `num` values, in words.
///
/// Each 64-bit value occupies two words.
#[inline]
pub fn counter_record_length(num: usize) -> u32 {
    (num as u32) * 2
}

/// Inverse of [`tag_for_counter`]: the kind slot a counter tag addresses,
/// or `None` for tags outside the counter range.
#[inline]
pub fn counter_kind_of_tag(tag: u32) -> Option<usize> {
    let offset = tag.checked_sub(GCOV_TAG_COUNTER_BASE)?;
    if offset & ((1 << 17) - 1) != 0 {
        return None;
    }
    let kind = (offset >> 17) as usize;
    if kind < GCOV_COUNTERS {
        Some(kind)
    } else {
        None
    }
}

/// Counter-kind slots of the activity table, in gcc's fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum CounterKind {
    /// Arc transition counts.
    Arcs = 0,
    /// Histogram of values in intervals.
    Interval = 1,
    /// Histogram of exact power-of-two values.
    Pow2 = 2,
    /// Most common values.
    TopN = 3,
    /// Most common indirect-call addresses.
    IndirectCall = 4,
    /// Running average of a value.
    Average = 5,
    /// Inclusive-or of a value.
    Ior = 6,
    /// First-run order of function visits.
    TimeProfile = 7,
}

impl CounterKind {
    /// The kind occupying the given activity-table slot.
    pub fn from_index(index: usize) -> Option<CounterKind> {
        match index {
            0 => Some(CounterKind::Arcs),
            1 => Some(CounterKind::Interval),
            2 => Some(CounterKind::Pow2),
            3 => Some(CounterKind::TopN),
            4 => Some(CounterKind::IndirectCall),
            5 => Some(CounterKind::Average),
            6 => Some(CounterKind::Ior),
            7 => Some(CounterKind::TimeProfile),
            _ => None,
        }
    }

    /// gcc's short name for the kind.
    pub fn name(self) -> &'static str {
        match self {
            CounterKind::Arcs => "arcs",
            CounterKind::Interval => "interval",
            CounterKind::Pow2 => "pow2",
            CounterKind::TopN => "topn",
            CounterKind::IndirectCall => "indirect_call",
            CounterKind::Average => "average",
            CounterKind::Ior => "ior",
            CounterKind::TimeProfile => "time_profiler",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_tags_roundtrip() {
        for kind in 0..GCOV_COUNTERS {
            assert_eq!(counter_kind_of_tag(tag_for_counter(kind)), Some(kind));
        }
    }

    #[test]
    fn test_arcs_tag_value() {
        // Slot 0 is the arc counter; its tag is the counter base itself.
        assert_eq!(tag_for_counter(0), 0x01a1_0000);
        assert_eq!(tag_for_counter(1), 0x01a3_0000);
    }

    #[test]
    fn test_non_counter_tags_rejected() {
        assert_eq!(counter_kind_of_tag(GCOV_TAG_FUNCTION), None);
        assert_eq!(counter_kind_of_tag(GCOV_DATA_MAGIC), None);
        assert_eq!(counter_kind_of_tag(GCOV_TAG_COUNTER_BASE + 1), None);
        assert_eq!(counter_kind_of_tag(tag_for_counter(GCOV_COUNTERS)), None);
    }
}
