//! The top-level driver: one `Resize`, then `k` stacked operators drawn
//! uniformly from the operator table.

use crate::buffer::ByteBuffer;
use crate::config::MangleConfig;
use crate::dictionary::Dictionary;
use crate::operators::OPERATOR_TABLE;
use crate::rng::{rnd_buf, rnd_buf_printable, rnd_get, MangleRng};

/// Resizes the buffer per the spec's `v = rnd_get(0, 16)` partition:
/// `v=0` draws a fresh size uniform over the whole range; `v in [1,8]` grows
/// by `v`; `v in [9,16]` shrinks by `v - 8`. Always clamped to
/// `[1, max_size]`; a growth fills the new tail with random bytes.
fn resize(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, printable: bool) {
    let size = buf.size();
    let max_size = buf.max_size();
    let v = rnd_get(rng, 0, 16);
    let new_size = match v {
        0 => rnd_get(rng, 1, max_size as u64) as usize,
        1..=8 => size + v as usize,
        9..=16 => size.saturating_sub((v - 8) as usize),
        _ => {
            log::error!("resize: rnd_get(0, 16) produced out-of-range value {}", v);
            unreachable!("resize: rnd_get(0, 16) produced out-of-range value {}", v);
        }
    };
    let new_size = new_size.clamp(1, max_size);

    if new_size > size {
        buf.set_size(new_size);
        let tail = &mut buf.as_mut_slice()[size..new_size];
        if printable {
            rnd_buf_printable(rng, tail);
        } else {
            rnd_buf(rng, tail);
        }
    } else if new_size < size {
        buf.set_size(new_size);
    }
}

/// Runs one mangle pass over `buffer`: a single `Resize`, then `k` in
/// `[1, mutations_per_run]` operators drawn uniformly (with replacement) from
/// the 16-entry operator table. A `mutations_per_run` of `0` is a no-op.
pub fn mangle_content(
    buffer: &mut dyn ByteBuffer,
    rng: &mut MangleRng,
    dictionary: &Dictionary,
    config: &MangleConfig,
) {
    if config.mutations_per_run == 0 {
        return;
    }

    resize(buffer, rng, config.only_printable);

    let k = rnd_get(rng, 1, config.mutations_per_run as u64);
    for _ in 0..k {
        let idx = rnd_get(rng, 0, (OPERATOR_TABLE.len() - 1) as u64) as usize;
        OPERATOR_TABLE[idx](buffer, rng, dictionary, config.only_printable);
    }
}
