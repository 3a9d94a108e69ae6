//! Fixed-capacity containers and small generic utilities.
//!
//! Nothing in this crate allocates. Capacities are const generic parameters,
//! and inserting into a full container hands the rejected value back.
//!
//! - [`collections::Lookup`]: parallel key / value arrays with linear or binary search.
//! - [`extra::Median`] and [`extra::MedianElement`]: median calculators.
//! - [`ref_count`]: objects carrying a reference count with a pluggable counter.
//! - [`tuple`]: a heterogeneous tuple built from single-element holders.
//! - [`largest::Largest`]: the largest size and alignment of a set of types.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

#[cfg(test)]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod macros;

pub mod collections;
pub mod extra;
pub mod largest;
pub mod ref_count;
pub mod tuple;
pub mod vec;

// -----------------------------------------------------------------------------
// Top-level exports

pub use largest::Largest;
