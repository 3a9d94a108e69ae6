//! Re-exports [`fastvec`]'s fixed-capacity vector.
//!
//! Only the stack-only container is exposed; the spilling variants
//! allocate and have no place in this crate.

// -----------------------------------------------------------------------------
// Stack Only

pub use fastvec::{StackVec, stack_vec};
