//! The sixteen stacked-mutation operators, plus the driver-only `Resize`
//! applied once per `mangle_content` call (see `driver`).
//!
//! Every operator takes the same shape — `(buffer, rng, dictionary,
//! only_printable)` — the way the host project's blob mutation operations all
//! share one `(ctx, rng, buf, range)` signature so they can sit in one
//! function-pointer table and be chosen uniformly at random.

use crate::buffer::ByteBuffer;
use crate::dictionary::Dictionary;
use crate::magic::MAGIC_TABLE;
use crate::primitives::{inflate, mv, overwrite};
use crate::printable::turn_to_printable_byte;
use crate::rng::{rnd64, rnd_buf, rnd_buf_printable, rnd_get, MangleRng};

/// Signature shared by every entry of `OPERATOR_TABLE`.
pub type Operator = fn(&mut dyn ByteBuffer, &mut MangleRng, &Dictionary, bool);

/// Flips one of the 8 bits of `buffer[off]`; projects the byte afterwards if
/// `printable`.
pub fn bit(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let bit = rnd_get(rng, 0, 7) as u32;
    let b = &mut buf.as_mut_slice()[off];
    *b ^= 1 << bit;
    if printable {
        *b = turn_to_printable_byte(*b);
    }
}

/// Draws an 8-byte random scratch and overwrites `1..=8` bytes at a random
/// offset with a prefix of it, clamped to the buffer's tail.
pub fn bytes(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let n = rnd_get(rng, 1, 8) as usize;
    let mut scratch = [0u8; 8];
    if printable {
        rnd_buf_printable(rng, &mut scratch);
    } else {
        rnd_buf(rng, &mut scratch);
    }
    overwrite(buf, off, &scratch[..n]);
}

/// Overwrites a random offset with one entry of the magic table.
pub fn magic(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let entry = &MAGIC_TABLE[rnd_get(rng, 0, (MAGIC_TABLE.len() - 1) as u64) as usize];
    let mut bytes = [0u8; 8];
    bytes[..entry.width].copy_from_slice(entry.as_slice());
    if printable {
        turn_to_printable(&mut bytes[..entry.width]);
    }
    overwrite(buf, off, &bytes[..entry.width]);
}

fn turn_to_printable(dst: &mut [u8]) {
    crate::printable::turn_to_printable(dst)
}

/// `+1` on `buffer[off]`, wrapping modularly inside `[0x20, 0x7E]` under
/// printable mode rather than wrapping at 256.
pub fn inc_byte(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let b = &mut buf.as_mut_slice()[off];
    *b = if printable {
        (((*b - 0x20) as u16 + 1) % 95) as u8 + 0x20
    } else {
        b.wrapping_add(1)
    };
}

/// `-1` on `buffer[off]`, same printable-mode modular treatment as `IncByte`.
pub fn dec_byte(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let b = &mut buf.as_mut_slice()[off];
    *b = if printable {
        (((*b - 0x20) as u16 + 94) % 95) as u8 + 0x20
    } else {
        b.wrapping_sub(1)
    };
}

/// Bitwise-complements `buffer[off]` (non-printable), or reflects it across
/// the midpoint of `[0x20, 0x7E]` (printable): `94 - (b-32) + 32`.
pub fn neg_byte(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let b = &mut buf.as_mut_slice()[off];
    *b = if printable {
        94 - (*b - 0x20) + 0x20
    } else {
        !*b
    };
}

trait VarInt: Sized + Copy {
    const LEN: usize;
    fn read(buf: &[u8], swap: bool) -> Self;
    fn write(self, buf: &mut [u8], swap: bool);
    fn wrapping_add_i64(self, delta: i64) -> Self;
    fn swap_bytes(self) -> Self;
}

macro_rules! impl_var_int {
    ($ty:ty) => {
        impl VarInt for $ty {
            const LEN: usize = std::mem::size_of::<$ty>();

            fn read(buf: &[u8], swap: bool) -> Self {
                let mut arr = [0u8; Self::LEN];
                arr.copy_from_slice(&buf[..Self::LEN]);
                let v = <$ty>::from_le_bytes(arr);
                if swap {
                    v.swap_bytes()
                } else {
                    v
                }
            }

            fn write(self, buf: &mut [u8], swap: bool) {
                let v = if swap { self.swap_bytes() } else { self };
                buf[..Self::LEN].copy_from_slice(&v.to_le_bytes());
            }

            fn wrapping_add_i64(self, delta: i64) -> Self {
                self.wrapping_add(delta as $ty)
            }

            fn swap_bytes(self) -> Self {
                <$ty>::swap_bytes(self)
            }
        }
    };
}

impl_var_int!(i8);
impl_var_int!(i16);
impl_var_int!(i32);
impl_var_int!(i64);

/// Reads a little-endian signed integer of width `w in {1,2,4,8}`, perturbs
/// it by a small delta (optionally through a byte-swap-add-swap-back
/// "foreign endianness" round trip), and writes it back.
pub fn add_sub(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let mut w = [1u64, 2, 4, 8][rnd_get(rng, 0, 3) as usize] as usize;
    if size - off < w {
        w = 1;
    }
    let delta = rnd_get(rng, 0, 8192) as i64 - 4096;
    let swap = rnd_get(rng, 0, 1) == 1;
    let slice = &mut buf.as_mut_slice()[off..off + w];

    macro_rules! apply {
        ($ty:ty) => {{
            let v = <$ty as VarInt>::read(slice, swap);
            let v = v.wrapping_add_i64(delta);
            v.write(slice, swap);
        }};
    }

    match w {
        1 => apply!(i8),
        2 => apply!(i16),
        4 => apply!(i32),
        8 => apply!(i64),
        _ => {
            log::error!("add_sub: rnd width draw produced out-of-range value {}", w);
            panic!("add_sub: unreachable integer width {}", w);
        }
    }

    if printable {
        turn_to_printable(slice);
    }
}

/// Swaps `buffer[off1]` and `buffer[off2]`.
pub fn clone_byte(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, _printable: bool) {
    let size = buf.size();
    let off1 = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let off2 = rnd_get(rng, 0, (size - 1) as u64) as usize;
    buf.as_mut_slice().swap(off1, off2);
}

/// `mv(off_from, off_to, len)` with `len` uniform in `[0, size]` — the draw
/// deliberately exceeds what `mv`'s own clamp allows; that is intentional
/// (see design notes) and must not be narrowed here.
pub fn mem_move(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, _printable: bool) {
    let size = buf.size();
    let off_from = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let off_to = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let len = rnd_get(rng, 0, size as u64) as usize;
    mv(buf, off_from, off_to, len);
}

/// Fills `[off, off+sz)` with one repeated byte value.
pub fn mem_set(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let sz = rnd_get(rng, 1, (size - off) as u64) as usize;
    let value = if printable {
        crate::rng::rnd_printable(rng)
    } else {
        rnd_get(rng, 0, 255) as u8
    };
    for b in &mut buf.as_mut_slice()[off..off + sz] {
        *b = value;
    }
}

/// Fills `[off, off+sz)` with fresh random (printable-projected) bytes.
pub fn random(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let sz = rnd_get(rng, 1, (size - off) as u64) as usize;
    let dst = &mut buf.as_mut_slice()[off..off + sz];
    if printable {
        rnd_buf_printable(rng, dst);
    } else {
        rnd_buf(rng, dst);
    }
}

/// Overwrites at a random offset with a dictionary entry's bytes, without
/// changing the buffer's size. Falls back to `Bit` if the dictionary is
/// empty.
pub fn dictionary(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, dict: &Dictionary, printable: bool) {
    if dict.is_empty() {
        return bit(buf, rng, dict, printable);
    }
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let i = rnd_get(rng, 0, (dict.len() - 1) as u64) as usize;
    overwrite(buf, off, dict.get(i));
}

/// Grows the buffer to make room, then splices a dictionary entry in at a
/// random offset. Falls back to `Bit` if the dictionary is empty.
pub fn dictionary_insert(
    buf: &mut dyn ByteBuffer,
    rng: &mut MangleRng,
    dict: &Dictionary,
    printable: bool,
) {
    if dict.is_empty() {
        return bit(buf, rng, dict, printable);
    }
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let i = rnd_get(rng, 0, (dict.len() - 1) as u64) as usize;
    let entry_len = dict.get(i).len();
    inflate(buf, rng, off, entry_len, printable);
    overwrite(buf, off, dict.get(i));
}

/// Grows the buffer by a random amount at a random offset.
pub fn expand(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let len = rnd_get(rng, 1, (size - off) as u64) as usize;
    inflate(buf, rng, off, len, printable);
}

/// Removes a random window from the buffer, shifting the tail leftward over
/// it. No-op if the buffer is already at its floor of 1 byte.
///
/// Mirrors `inflate`'s grow-then-shift-then-fill order in reverse: the shift
/// runs first, while the buffer still holds its pre-shrink size and content,
/// then `set_size` truncates the now-vacated tail away. Shifting after
/// truncating would have already discarded the bytes the shift needs to read.
pub fn shrink(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, _printable: bool) {
    let size = buf.size();
    if size <= 1 {
        return;
    }
    let len = rnd_get(rng, 1, (size - 1) as u64) as usize;
    let off = rnd_get(rng, 0, len as u64) as usize;
    mv(buf, off + len, off, size);
    buf.set_size(size - len);
}

/// Formats a signed 64-bit random value as decimal ASCII and overwrites at a
/// random offset with it, clamped to the buffer's tail.
pub fn ascii_val(buf: &mut dyn ByteBuffer, rng: &mut MangleRng, _dict: &Dictionary, _printable: bool) {
    let size = buf.size();
    let off = rnd_get(rng, 0, (size - 1) as u64) as usize;
    let v = rnd64(rng) as i64;
    let text = v.to_string();
    overwrite(buf, off, text.as_bytes());
}

/// The fixed, order-stable table of the sixteen stacked operators (excludes
/// the driver-only `Resize`). Uniform selection from this table gives each
/// operator probability `1/16` per stacked step.
pub static OPERATOR_TABLE: &[Operator] = &[
    bit,
    bytes,
    magic,
    inc_byte,
    dec_byte,
    neg_byte,
    add_sub,
    clone_byte,
    mem_move,
    mem_set,
    random,
    dictionary,
    dictionary_insert,
    expand,
    shrink,
    ascii_val,
];
