//! Run-wide constants for [`crate::mangle_content`], gathered into one small
//! `Copy` struct the way the host project gathers subsystem knobs into one
//! `Config`/`*Conf` value instead of threading loose arguments.

/// `mutations_per_run`/`only_printable` from the external interface.
///
/// `max_file_sz` is deliberately not here: it is a property of the concrete
/// [`crate::buffer::ByteBuffer`] a caller constructs (`max_size()`), not a
/// free-floating constant shared across buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MangleConfig {
    /// Ceiling on stacked operator applications per `mangle_content` call.
    /// The actual count is drawn uniformly from `[1, mutations_per_run]`.
    /// `0` is a legal, spec-defined no-op (see driver step 1).
    pub mutations_per_run: u32,
    /// When `true`, every newly written byte must land in `[0x20, 0x7E]`.
    pub only_printable: bool,
}

impl Default for MangleConfig {
    fn default() -> Self {
        Self {
            mutations_per_run: 6,
            only_printable: false,
        }
    }
}
