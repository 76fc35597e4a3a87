mod component;
mod render;
/// Bar snapshot and per-frame state.
pub mod state;
/// Sorting algorithms recorded as event traces.
pub mod trace;

pub use component::SortingVisualizer;
pub use state::{SortSnapshot, SortStats};
pub use trace::{SortAlgorithm, SortEvent, trace};
