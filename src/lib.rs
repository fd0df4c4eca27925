//! Input-mangling core of a coverage-guided fuzzer: deterministic-given-a-
//! seed, randomized byte-buffer mutation operators that turn one candidate
//! input into another likely to exercise new program behavior.
//!
//! The public surface is deliberately small: [`mangle_content`] plus the
//! collaborator types it needs from its caller — a [`ByteBuffer`], a
//! [`MangleRng`], a [`Dictionary`], and a [`MangleConfig`]. Everything else
//! (the magic table, the operator table, the bounds-checked primitives) is
//! private; callers never need to reach past `mangle_content` to get
//! correct, reproducible mutation.

mod dictionary;
mod magic;
mod operators;
mod printable;
mod rng;

pub mod buffer;
pub mod config;
pub mod driver;
pub mod error;
mod primitives;

pub use buffer::{ByteBuffer, VecBuffer};
pub use config::MangleConfig;
pub use dictionary::Dictionary;
pub use driver::mangle_content;
pub use error::ConfigError;
pub use rng::{new_rng, rng_from_seed, MangleRng};
