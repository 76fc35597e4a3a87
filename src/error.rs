//! Error types shared by the visualizers and practice widgets.

use thiserror::Error;

/// Result type for visualizer operations.
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Errors raised by the pure algorithm and widget code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisualizerError {
	/// A run was requested while another one is still in flight.
	#[error("an animation is already running")]
	AlreadyRunning,

	/// The operation needs at least one element.
	#[error("collection is empty")]
	EmptyCollection,

	/// A node index does not exist in the current graph.
	#[error("node {index} is out of range for a graph of {len} nodes")]
	NodeOutOfRange {
		/// Requested node.
		index: usize,
		/// Number of nodes in the graph.
		len: usize,
	},

	/// Speed multipliers must be strictly positive.
	#[error("speed multiplier must be positive, got {0}")]
	InvalidMultiplier(f64),

	/// Every slot of the hash table is taken.
	#[error("hash table is full")]
	TableFull,

	/// Removal from an empty stack, queue or heap.
	#[error("{0} is empty")]
	EmptyStructure(&'static str),
}
