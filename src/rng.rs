//! Random-number helpers shared by every operator, plus the concrete RNG type
//! the core is fixed to.
//!
//! The spec leaves "a random source" abstract; like the host project's own
//! `RngType` alias, this crate fixes it to one concrete, seedable `rand`
//! generator rather than threading a generic `R: Rng` through every operator
//! signature, which keeps the operator dispatch table a plain array of
//! function pointers.

use rand::{Rng, RngCore, SeedableRng};

use crate::printable::turn_to_printable;

/// The concrete random source every operator and the driver take.
pub type MangleRng = rand::rngs::SmallRng;

/// Builds a `MangleRng` seeded from the OS entropy source.
pub fn new_rng() -> MangleRng {
    MangleRng::from_entropy()
}

/// Builds a `MangleRng` from an explicit seed, for reproducible runs.
pub fn rng_from_seed(seed: u64) -> MangleRng {
    MangleRng::seed_from_u64(seed)
}

/// Uniform integer in the inclusive range `[lo, hi]`. Returns `lo` unchanged
/// if `lo >= hi` rather than panicking on an empty or inverted range.
#[inline]
pub fn rnd_get(rng: &mut MangleRng, lo: u64, hi: u64) -> u64 {
    if lo >= hi {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

/// Uniform 64-bit value.
#[inline]
pub fn rnd64(rng: &mut MangleRng) -> u64 {
    rng.next_u64()
}

/// Fills `dst` with uniform random bytes.
#[inline]
pub fn rnd_buf(rng: &mut MangleRng, dst: &mut [u8]) {
    rng.fill_bytes(dst);
}

/// Fills `dst` with random bytes projected onto `[0x20, 0x7E]`.
#[inline]
pub fn rnd_buf_printable(rng: &mut MangleRng, dst: &mut [u8]) {
    rng.fill_bytes(dst);
    turn_to_printable(dst);
}

/// One printable byte.
#[inline]
pub fn rnd_printable(rng: &mut MangleRng) -> u8 {
    let mut b = [0u8; 1];
    rnd_buf_printable(rng, &mut b);
    b[0]
}
