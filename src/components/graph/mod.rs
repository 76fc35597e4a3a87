mod component;
/// Random graph generation and force-directed placement.
pub mod layout;
mod render;
/// Highlight snapshot and per-frame state.
pub mod state;
/// Search algorithms and their event traces.
pub mod trace;
/// Nodes, edges and adjacency.
pub mod types;

pub use component::GraphVisualizer;
pub use layout::{generate, settle};
pub use trace::{GraphAlgorithm, GraphEvent, SearchResult, search, trace};
pub use types::{Edge, Graph, GraphNode};
