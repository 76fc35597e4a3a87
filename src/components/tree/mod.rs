/// Owned binary search tree.
pub mod bst;
mod component;
/// Screen positions for tree nodes.
pub mod layout;
mod render;
/// Tree snapshot and per-frame state.
pub mod state;
/// Search and traversal traces.
pub mod trace;

pub use bst::{Bst, Link, TraversalOrder, TreeNode};
pub use component::TreeVisualizer;
pub use trace::{TreeEvent, search_trace, traversal_trace};
