//! Provide atomic types
//!
//! If the target platform does not have a 32-bit atomic type,
//! this will switch to `portable_atomic`.
//!
//! See the [standard library] for further details.
//!
//! [standard library]: https://doc.rust-lang.org/core/sync/atomic

pub use atomic_32::{AtomicI32, AtomicU32};
pub use core::sync::atomic::{Ordering, fence};

#[cfg(target_has_atomic = "32")]
use core::sync::atomic as atomic_32;

#[cfg(not(target_has_atomic = "32"))]
use portable_atomic as atomic_32;
