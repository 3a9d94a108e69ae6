//! Small statistics helpers over fixed-size sample sets.

// -----------------------------------------------------------------------------
// Modules

mod median;
mod median_element;

// -----------------------------------------------------------------------------
// Exports

pub use median::Median;
pub use median_element::MedianElement;
