//! The buffer collaborator: a mutable, contiguous byte region with a current
//! logical size and a hard ceiling on how large it may ever grow.
//!
//! The core never owns a buffer. It borrows one through [`ByteBuffer`] for the
//! duration of a [`crate::mangle_content`] call and leaves allocation entirely
//! to the implementor's [`ByteBuffer::set_size`].

use crate::error::ConfigError;

/// A resizable byte region addressable on `[0, size())`.
///
/// Implementors are responsible for `set_size` actually making `[0, new_size)`
/// addressable; the core assumes it always succeeds for `new_size <= max_size()`
/// (see ERROR_HANDLING / `set_size` in the design notes).
pub trait ByteBuffer {
    /// Current logical size. Always in `1..=max_size()`.
    fn size(&self) -> usize;

    /// Hard ceiling on `size()`. Never changes for the lifetime of the buffer.
    fn max_size(&self) -> usize;

    /// Resize so that `[0, new_size)` is addressable and `size()` reports
    /// `new_size` afterwards. `new_size` is always `<= max_size()`.
    fn set_size(&mut self, new_size: usize);

    /// Immutable view of `[0, size())`.
    fn as_slice(&self) -> &[u8];

    /// Mutable view of `[0, size())`.
    fn as_mut_slice(&mut self) -> &mut [u8];
}

/// A `Vec<u8>`-backed [`ByteBuffer`], provided as the reference implementation
/// callers can use directly instead of writing their own.
///
/// This is not part of the mutation core proper — it is the harness a caller
/// would otherwise have to supply, kept here because the crate's own tests and
/// benchmarks need a concrete buffer to drive.
#[derive(Debug, Clone)]
pub struct VecBuffer {
    data: Vec<u8>,
    max_size: usize,
}

impl VecBuffer {
    /// Builds a buffer seeded with `initial` bytes, capped at `max_size`.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroMaxSize`] if `max_size == 0`, or
    /// [`ConfigError::InitialLargerThanMax`] if `initial.len() > max_size`.
    pub fn new(initial: Vec<u8>, max_size: usize) -> Result<Self, ConfigError> {
        if max_size == 0 {
            return Err(ConfigError::ZeroMaxSize);
        }
        if initial.len() > max_size {
            return Err(ConfigError::InitialLargerThanMax {
                initial: initial.len(),
                max_size,
            });
        }
        Ok(Self {
            data: initial,
            max_size,
        })
    }
}

impl ByteBuffer for VecBuffer {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn max_size(&self) -> usize {
        self.max_size
    }

    fn set_size(&mut self, new_size: usize) {
        debug_assert!(new_size <= self.max_size);
        self.data.resize_with(new_size, Default::default);
    }

    fn as_slice(&self) -> &[u8] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_max_size() {
        assert!(matches!(
            VecBuffer::new(vec![], 0),
            Err(ConfigError::ZeroMaxSize)
        ));
    }

    #[test]
    fn rejects_initial_larger_than_max() {
        assert!(matches!(
            VecBuffer::new(vec![0; 4], 2),
            Err(ConfigError::InitialLargerThanMax {
                initial: 4,
                max_size: 2
            })
        ));
    }

    #[test]
    fn set_size_grows_and_shrinks() {
        let mut buf = VecBuffer::new(vec![1, 2, 3], 16).unwrap();
        buf.set_size(6);
        assert_eq!(buf.size(), 6);
        assert_eq!(&buf.as_slice()[..3], &[1, 2, 3]);
        buf.set_size(1);
        assert_eq!(buf.size(), 1);
        assert_eq!(buf.as_slice(), &[1]);
    }
}
