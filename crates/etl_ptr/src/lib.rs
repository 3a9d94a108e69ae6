//! Placement buffers that host values of different types in the same bytes.
//!
//! **MemCast**
//!
//! [`MemCast<SIZE, ALIGN>`] owns an inline, zero-initialized byte buffer of
//! `SIZE` bytes aligned to `ALIGN`. Values are written into it by
//! [`assign`](MemCast::assign) or [`emplace`](MemCast::emplace) and read back
//! through typed views. When the type and offset are known at compile time,
//! size and alignment are checked at compile time; runtime offsets are checked
//! at call time and reported as [`MemCastError`].
//!
//! **MemCastPtr**
//!
//! [`MemCastPtr<'a>`] applies the same operations to memory owned by someone
//! else. Its address may be null and its size may be unknown, so every check
//! happens at call time.
//!
//! # Trust the caller
//!
//! Neither type remembers what was written into it. Reading a `T` back is
//! `unsafe`: the buffer only guarantees that the bytes are in bounds and
//! suitably aligned, not that they hold a valid `T`. Values written into a
//! buffer are never dropped by it.
#![expect(unsafe_code, reason = "Placement and reinterpretation of raw bytes.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

#[cfg(test)]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod align;
mod error;
mod mem_cast;
mod mem_cast_ptr;

// -----------------------------------------------------------------------------
// Top-level exports

pub use align::{Align, Alignment};
pub use error::MemCastError;
pub use mem_cast::MemCast;
pub use mem_cast_ptr::MemCastPtr;

#[doc(hidden)]
pub use align::archetype;

#[doc(hidden)]
pub use etl_utils::Largest as __Largest;
