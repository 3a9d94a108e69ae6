//! Fixed-capacity associative containers.

// -----------------------------------------------------------------------------
// Modules

mod lookup;

// -----------------------------------------------------------------------------
// Exports

pub use lookup::Lookup;
