//! Platform shims shared by the other `etl` crates.
//!
//! Only the pieces the containers need are provided: atomic integers
//! that fall back to [`portable_atomic`] on targets without native support.
//!
//! [`portable_atomic`]: https://docs.rs/portable-atomic
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

pub mod sync;
