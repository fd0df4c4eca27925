//! The three bounds-checked building blocks every operator is built from:
//! `overwrite`, `mv` (the spec's `move`), and `inflate`.

use crate::buffer::ByteBuffer;
use crate::rng::{rnd_buf, rnd_buf_printable, MangleRng};

/// Copies up to `src.len()` bytes from `src` into `buffer[off..]`, clamping
/// the copy length to `size - off`. Never grows the buffer.
///
/// The spec's general primitive allows `src` to alias the buffer (handled
/// with memmove semantics); every call site in this crate supplies `src` as
/// externally-owned bytes (a magic table entry, a dictionary entry, or a
/// freshly drawn random scratch buffer), so a disjoint-slice copy already
/// covers every real use and no `unsafe` aliasing helper is needed. Operators
/// that copy *within* the buffer use `mv` instead, which is the one primitive
/// that must tolerate overlap.
pub(crate) fn overwrite(buf: &mut dyn ByteBuffer, off: usize, src: &[u8]) {
    let size = buf.size();
    if off >= size {
        return;
    }
    let n = src.len().min(size - off);
    if n == 0 {
        return;
    }
    buf.as_mut_slice()[off..off + n].copy_from_slice(&src[..n]);
}

/// Copies `len` bytes from `buffer[from..]` to `buffer[to..]` in place,
/// overlap-safe. No-op if `from >= size` or `to >= size`. Otherwise `len` is
/// clamped to `min(size - from, size - to)` so neither the source nor the
/// destination run reaches past `size` — operators rely on this primitive to
/// shift a buffer's whole tail, last byte included, when making room for an
/// insertion or closing the gap a shrink leaves behind.
pub(crate) fn mv(buf: &mut dyn ByteBuffer, from: usize, to: usize, len: usize) {
    let size = buf.size();
    if from >= size || to >= size {
        return;
    }
    let max_len = (size - from).min(size - to);
    let len = len.min(max_len);
    if len == 0 {
        return;
    }
    buf.as_mut_slice().copy_within(from..from + len, to);
}

/// Grows the buffer by up to `len` bytes (clamped to `max_size - size`),
/// shifts `buffer[off..size_old)` rightward by the actual growth via `mv`,
/// and fills the freshly opened `buffer[off..off+grown)` with random bytes
/// (printable-projected if `printable`). No-op (returns `0`) if the buffer is
/// already at `max_size`, or if `off` is not a valid pre-growth offset.
///
/// Returns the number of bytes actually grown.
///
/// The internal `mv` call shifts the entire pre-growth tail
/// `buffer[off..size_old)` into `buffer[off+grown..size_old+grown)`, leaving
/// nothing behind in the region `mv` copied out of.
pub(crate) fn inflate(
    buf: &mut dyn ByteBuffer,
    rng: &mut MangleRng,
    off: usize,
    len: usize,
    printable: bool,
) -> usize {
    let size_old = buf.size();
    if off > size_old {
        return 0;
    }
    let max_size = buf.max_size();
    let grown = len.min(max_size.saturating_sub(size_old));
    if grown == 0 {
        return 0;
    }
    buf.set_size(size_old + grown);
    mv(buf, off, off + grown, size_old - off);
    let gap = &mut buf.as_mut_slice()[off..off + grown];
    if printable {
        rnd_buf_printable(rng, gap);
    } else {
        rnd_buf(rng, gap);
    }
    grown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::VecBuffer;
    use crate::rng::rng_from_seed;

    #[test]
    fn overwrite_clamps_to_tail() {
        let mut buf = VecBuffer::new(vec![0; 4], 8).unwrap();
        overwrite(&mut buf, 2, &[1, 2, 3, 4]);
        assert_eq!(buf.as_slice(), &[0, 0, 1, 2]);
    }

    #[test]
    fn overwrite_noop_past_end() {
        let mut buf = VecBuffer::new(vec![9; 4], 8).unwrap();
        overwrite(&mut buf, 10, &[1, 2]);
        assert_eq!(buf.as_slice(), &[9, 9, 9, 9]);
    }

    #[test]
    fn mv_shifts_overlapping_ranges() {
        let mut buf = VecBuffer::new(vec![1, 2, 3, 4, 5], 8).unwrap();
        // size=5: max_len = min(5-0, 5-2) = min(5,3) = 3
        mv(&mut buf, 0, 2, 10);
        assert_eq!(buf.as_slice(), &[1, 2, 1, 2, 3]);
    }

    #[test]
    fn mv_noop_out_of_range() {
        let mut buf = VecBuffer::new(vec![1, 2, 3], 8).unwrap();
        mv(&mut buf, 5, 0, 2);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn inflate_grows_and_fills_gap() {
        let mut buf = VecBuffer::new(b"abcd".to_vec(), 16).unwrap();
        let mut rng = rng_from_seed(3);
        let grown = inflate(&mut buf, &mut rng, 2, 4, false);
        assert_eq!(grown, 4);
        assert_eq!(buf.size(), 8);
        assert_eq!(&buf.as_slice()[..2], b"ab");
    }

    #[test]
    fn inflate_clamps_to_max_size() {
        let mut buf = VecBuffer::new(b"abcd".to_vec(), 5).unwrap();
        let mut rng = rng_from_seed(3);
        let grown = inflate(&mut buf, &mut rng, 0, 10, false);
        assert_eq!(grown, 1);
        assert_eq!(buf.size(), 5);
    }

    #[test]
    fn inflate_noop_at_max_size() {
        let mut buf = VecBuffer::new(b"abcd".to_vec(), 4).unwrap();
        let mut rng = rng_from_seed(3);
        let grown = inflate(&mut buf, &mut rng, 0, 10, false);
        assert_eq!(grown, 0);
        assert_eq!(buf.size(), 4);
    }
}
