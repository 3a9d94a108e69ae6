//! Synchronization primitives.
//!
//! The library itself never blocks or spawns threads. The only shared
//! mutable state it offers is the atomic reference counter, so this module
//! is limited to atomics.
//!
//! ## atomic
//!
//! We detect whether 32-bit atomic operations are available on the target platform.
//! If supported, we use `core::sync::atomic`; otherwise, we fall back to `portable_atomic`.
//!
//! Note that the latter may expose additional APIs beyond the standard library,
//! and it's recommended only using interfaces available in the standard library.

pub mod atomic;
