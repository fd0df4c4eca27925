//! The fixed, read-only magic-constant table used by the `Magic` operator.
//!
//! Kept as module-level static data, the way the host project keeps its own
//! per-width magic arrays (`MAGIC32`/`MAGIC64` in the scalar generator) —
//! pure values with no lifecycle concerns. Each entry is a byte pattern of a
//! given width (1, 2, 4 or 8); widths wider than 1 additionally carry a
//! big-endian variant and its little-endian mirror, so the same boundary
//! value can land on the buffer under either interpretation of multi-byte
//! arithmetic the target might perform.

/// One magic-table entry: the first `width` bytes of `bytes` are significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicEntry {
    pub width: usize,
    pub bytes: [u8; 8],
}

impl MagicEntry {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.width]
    }
}

macro_rules! m1 {
    ($a:expr) => {
        MagicEntry { width: 1, bytes: [$a, 0, 0, 0, 0, 0, 0, 0] }
    };
}
macro_rules! m2 {
    ($a:expr, $b:expr) => {
        MagicEntry { width: 2, bytes: [$a, $b, 0, 0, 0, 0, 0, 0] }
    };
}
macro_rules! m4 {
    ($a:expr, $b:expr, $c:expr, $d:expr) => {
        MagicEntry { width: 4, bytes: [$a, $b, $c, $d, 0, 0, 0, 0] }
    };
}
macro_rules! m8 {
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr, $g:expr, $h:expr) => {
        MagicEntry { width: 8, bytes: [$a, $b, $c, $d, $e, $f, $g, $h] }
    };
}

/// The full, order-stable magic table: width 1 (26), width 2 (64), width 4
/// (64), width 8 (46) — 200 entries total.
pub static MAGIC_TABLE: &[MagicEntry] = &[
    // --- width 1: no endianness, 26 entries ---
    m1!(0x00), //
    m1!(0x01), //
    m1!(0x02), //
    m1!(0x03), //
    m1!(0x04), //
    m1!(0x05), //
    m1!(0x06), //
    m1!(0x07), //
    m1!(0x08), //
    m1!(0x09), //
    m1!(0x0A), //
    m1!(0x0B), //
    m1!(0x0C), //
    m1!(0x0D), //
    m1!(0x0E), //
    m1!(0x0F), //
    m1!(0x10), //
    m1!(0x20), // ' ', one-off with common buffer size
    m1!(0x40), // one-off with common buffer size
    m1!(0x7E), // overflow signed 8-bit when incremented
    m1!(0x7F), // max signed 8-bit
    m1!(0x80), // min signed 8-bit, overflow when decremented
    m1!(0x81), // one past min signed 8-bit
    m1!(0xC0), // one-off with common buffer size
    m1!(0xFE), // -2
    m1!(0xFF), // -1

    // --- width 2: 4 neutral-endian + 30 big-endian + 30 little-endian mirrors ---
    m2!(0x00, 0x00),
    m2!(0x01, 0x01),
    m2!(0x80, 0x80),
    m2!(0xFF, 0xFF),

    m2!(0x00, 0x01),
    m2!(0x00, 0x02),
    m2!(0x00, 0x03),
    m2!(0x00, 0x04),
    m2!(0x00, 0x05),
    m2!(0x00, 0x06),
    m2!(0x00, 0x07),
    m2!(0x00, 0x08),
    m2!(0x00, 0x09),
    m2!(0x00, 0x0A),
    m2!(0x00, 0x0B),
    m2!(0x00, 0x0C),
    m2!(0x00, 0x0D),
    m2!(0x00, 0x0E),
    m2!(0x00, 0x0F),
    m2!(0x00, 0x10),
    m2!(0x00, 0x20),
    m2!(0x00, 0x40),
    m2!(0x00, 0x7E),
    m2!(0x00, 0x7F),
    m2!(0x00, 0x80),
    m2!(0x00, 0x81),
    m2!(0x00, 0xC0),
    m2!(0x00, 0xFE),
    m2!(0x00, 0xFF),
    m2!(0x7E, 0xFF), // overflow signed 16-bit when incremented
    m2!(0x7F, 0xFF), // max signed 16-bit
    m2!(0x80, 0x00), // min signed 16-bit, overflow when decremented
    m2!(0x80, 0x01), // one past min signed 16-bit
    m2!(0xFF, 0xFE), // -2

    m2!(0x01, 0x00),
    m2!(0x02, 0x00),
    m2!(0x03, 0x00),
    m2!(0x04, 0x00),
    m2!(0x05, 0x00),
    m2!(0x06, 0x00),
    m2!(0x07, 0x00),
    m2!(0x08, 0x00),
    m2!(0x09, 0x00),
    m2!(0x0A, 0x00),
    m2!(0x0B, 0x00),
    m2!(0x0C, 0x00),
    m2!(0x0D, 0x00),
    m2!(0x0E, 0x00),
    m2!(0x0F, 0x00),
    m2!(0x10, 0x00),
    m2!(0x20, 0x00),
    m2!(0x40, 0x00),
    m2!(0x7E, 0x00),
    m2!(0x7F, 0x00),
    m2!(0x80, 0x00),
    m2!(0x81, 0x00),
    m2!(0xC0, 0x00),
    m2!(0xFE, 0x00),
    m2!(0xFF, 0x00),
    m2!(0xFF, 0x7E),
    m2!(0xFF, 0x7F),
    m2!(0x00, 0x80),
    m2!(0x01, 0x80),
    m2!(0xFE, 0xFF),

    // --- width 4: same shape scaled up, low byte carries 1..=16/boundary ---
    m4!(0x00, 0x00, 0x00, 0x00),
    m4!(0x01, 0x01, 0x01, 0x01),
    m4!(0x80, 0x80, 0x80, 0x80),
    m4!(0xFF, 0xFF, 0xFF, 0xFF),

    m4!(0x00, 0x00, 0x00, 0x01),
    m4!(0x00, 0x00, 0x00, 0x02),
    m4!(0x00, 0x00, 0x00, 0x03),
    m4!(0x00, 0x00, 0x00, 0x04),
    m4!(0x00, 0x00, 0x00, 0x05),
    m4!(0x00, 0x00, 0x00, 0x06),
    m4!(0x00, 0x00, 0x00, 0x07),
    m4!(0x00, 0x00, 0x00, 0x08),
    m4!(0x00, 0x00, 0x00, 0x09),
    m4!(0x00, 0x00, 0x00, 0x0A),
    m4!(0x00, 0x00, 0x00, 0x0B),
    m4!(0x00, 0x00, 0x00, 0x0C),
    m4!(0x00, 0x00, 0x00, 0x0D),
    m4!(0x00, 0x00, 0x00, 0x0E),
    m4!(0x00, 0x00, 0x00, 0x0F),
    m4!(0x00, 0x00, 0x00, 0x10),
    m4!(0x00, 0x00, 0x00, 0x20),
    m4!(0x00, 0x00, 0x00, 0x40),
    m4!(0x00, 0x00, 0x00, 0x7E),
    m4!(0x00, 0x00, 0x00, 0x7F),
    m4!(0x00, 0x00, 0x00, 0x80),
    m4!(0x00, 0x00, 0x00, 0x81),
    m4!(0x00, 0x00, 0x00, 0xC0),
    m4!(0x00, 0x00, 0x00, 0xFE),
    m4!(0x00, 0x00, 0x00, 0xFF),
    m4!(0x7E, 0xFF, 0xFF, 0xFF), // overflow signed 32-bit when incremented
    m4!(0x7F, 0xFF, 0xFF, 0xFF), // max signed 32-bit
    m4!(0x80, 0x00, 0x00, 0x00), // min signed 32-bit, overflow when decremented
    m4!(0x80, 0x00, 0x00, 0x01), // one past min signed 32-bit
    m4!(0xFF, 0xFF, 0xFF, 0xFE), // -2

    m4!(0x01, 0x00, 0x00, 0x00),
    m4!(0x02, 0x00, 0x00, 0x00),
    m4!(0x03, 0x00, 0x00, 0x00),
    m4!(0x04, 0x00, 0x00, 0x00),
    m4!(0x05, 0x00, 0x00, 0x00),
    m4!(0x06, 0x00, 0x00, 0x00),
    m4!(0x07, 0x00, 0x00, 0x00),
    m4!(0x08, 0x00, 0x00, 0x00),
    m4!(0x09, 0x00, 0x00, 0x00),
    m4!(0x0A, 0x00, 0x00, 0x00),
    m4!(0x0B, 0x00, 0x00, 0x00),
    m4!(0x0C, 0x00, 0x00, 0x00),
    m4!(0x0D, 0x00, 0x00, 0x00),
    m4!(0x0E, 0x00, 0x00, 0x00),
    m4!(0x0F, 0x00, 0x00, 0x00),
    m4!(0x10, 0x00, 0x00, 0x00),
    m4!(0x20, 0x00, 0x00, 0x00),
    m4!(0x40, 0x00, 0x00, 0x00),
    m4!(0x7E, 0x00, 0x00, 0x00),
    m4!(0x7F, 0x00, 0x00, 0x00),
    m4!(0x80, 0x00, 0x00, 0x00),
    m4!(0x81, 0x00, 0x00, 0x00),
    m4!(0xC0, 0x00, 0x00, 0x00),
    m4!(0xFE, 0x00, 0x00, 0x00),
    m4!(0xFF, 0x00, 0x00, 0x00),
    m4!(0xFF, 0xFF, 0xFF, 0x7E),
    m4!(0xFF, 0xFF, 0xFF, 0x7F),
    m4!(0x00, 0x00, 0x00, 0x80),
    m4!(0x01, 0x00, 0x00, 0x80),
    m4!(0xFE, 0xFF, 0xFF, 0xFF),

    // --- width 8: same shape, shorter boundary list (1..=10) to keep the
    // table around the ~200-entry design budget ---
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01),
    m8!(0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80),
    m8!(0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF),

    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0A),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x81),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE),
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF),
    m8!(0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF), // max signed 64-bit
    m8!(0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00), // min signed 64-bit

    m8!(0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0x81, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00),
    m8!(0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F), // max signed 64-bit
    m8!(0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80), // min signed 64-bit
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_two_hundred_entries() {
        assert_eq!(MAGIC_TABLE.len(), 200);
    }

    #[test]
    fn every_width_is_1_2_4_or_8() {
        for e in MAGIC_TABLE {
            assert!(matches!(e.width, 1 | 2 | 4 | 8));
            assert_eq!(e.as_slice().len(), e.width);
        }
    }

    #[test]
    fn width_counts_match_spec() {
        let count = |w: usize| MAGIC_TABLE.iter().filter(|e| e.width == w).count();
        assert_eq!(count(1), 26);
        assert_eq!(count(2), 64);
        assert_eq!(count(4), 64);
        assert_eq!(count(8), 46);
    }

    #[test]
    fn width2_le_mirrors_are_byte_reversed_be() {
        let width2: Vec<&MagicEntry> = MAGIC_TABLE.iter().filter(|e| e.width == 2).collect();
        let be = &width2[4..34];
        let le = &width2[34..64];
        for (b, l) in be.iter().zip(le.iter()) {
            assert_eq!(b.bytes[0], l.bytes[1]);
            assert_eq!(b.bytes[1], l.bytes[0]);
        }
    }
}
