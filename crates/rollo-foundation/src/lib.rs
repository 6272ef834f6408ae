//! Foundation elements for the Rollo carousel: pointer input and grid layout

pub mod grid;
pub mod touch;

pub use grid::{GridLayout, GridSize, Orientation, ScrollUnit};
pub use touch::{TouchInputs, TouchTracker};
