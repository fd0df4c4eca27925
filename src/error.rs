//! Errors for the few fallible collaborator constructors.
//!
//! The mutation core itself never returns a `Result` (see ERROR_HANDLING): it
//! either clamps silently or aborts on a broken invariant. These errors cover
//! the one construction-time edge that sits outside that split: building a
//! [`crate::buffer::VecBuffer`] with an inconsistent size cap. `MangleConfig`
//! has no invalid states to reject — every `(mutations_per_run, only_printable)`
//! pair is meaningful — so it needs no fallible constructor of its own.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("buffer max_size must be at least 1")]
    ZeroMaxSize,
    #[error("initial buffer of {initial} bytes exceeds max_size {max_size}")]
    InitialLargerThanMax { initial: usize, max_size: usize },
}
