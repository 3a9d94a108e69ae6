use core::any::type_name;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// A placement or view that a buffer cannot honor.
///
/// Returned by the operations whose checks can only run at call time:
/// runtime offsets on [`MemCast`](crate::MemCast), and every operation of
/// [`MemCastPtr`](crate::MemCastPtr). Checks run in the order null, size,
/// alignment, and the first failure is reported.
///
/// With the `debug` feature enabled, or in builds with `debug_assertions`,
/// every error is also logged at `warn` level when it is detected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MemCastError {
    #[error("Buffer pointer is null")]
    NullPointer,

    #[error(
        "Type {type_name} needs {required} bytes at offset {offset}, \
         but the buffer holds {available} bytes"
    )]
    Size {
        type_name: &'static str,
        required: usize,
        available: usize,
        offset: usize,
    },

    #[error("Address {address:#x} is not aligned to {required} bytes for type {type_name}")]
    Alignment {
        type_name: &'static str,
        address: usize,
        required: usize,
    },
}

impl MemCastError {
    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        panic!("{self}");
    }
}

// -----------------------------------------------------------------------------
// Checks

/// Returns `true` if a `T` placed `offset` bytes into a buffer of `len`
/// bytes stays within the buffer.
///
/// Used both in `const` assertions and at call time.
#[inline(always)]
pub(crate) const fn fits<T>(len: usize, offset: usize) -> bool {
    offset <= len && size_of::<T>() <= len - offset
}

/// Logs `error` at `warn` level in debug builds, then returns it.
#[inline]
pub(crate) fn report(error: MemCastError) -> MemCastError {
    #[cfg(any(feature = "debug", debug_assertions))]
    log::warn!("{error}");
    error
}

/// Computes the address of a `T` placed `offset` bytes after `base`.
///
/// `len` is the size of the buffer starting at `base`, `None` skips the
/// size check.
pub(crate) fn locate<T>(
    base: *mut u8,
    len: Option<usize>,
    offset: usize,
) -> Result<*mut T, MemCastError> {
    if base.is_null() {
        return Err(report(MemCastError::NullPointer));
    }

    if let Some(len) = len
        && !fits::<T>(len, offset)
    {
        return Err(report(MemCastError::Size {
            type_name: type_name::<T>(),
            required: size_of::<T>(),
            available: len,
            offset,
        }));
    }

    let target = base.wrapping_add(offset).cast::<T>();

    if !target.is_aligned() {
        return Err(report(MemCastError::Alignment {
            type_name: type_name::<T>(),
            address: target.addr(),
            required: align_of::<T>(),
        }));
    }

    Ok(target)
}
