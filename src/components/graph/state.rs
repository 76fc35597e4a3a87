use super::trace::{GraphAlgorithm, GraphEvent, trace};
use super::types::Graph;
use crate::components::step_driver::StepDriver;
use crate::config::VisualizerConfig;
use crate::error::Result;

/// Fill role of a node, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
	/// Chosen start node.
	Start,
	/// Chosen target node.
	End,
	/// Expanded during the run.
	Visited,
	/// Not reached yet.
	Unvisited,
}

/// Highlight sets derived from the events seen so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphSnapshot {
	/// Expanded nodes in expansion order.
	pub visited: Vec<usize>,
	/// Most recently expanded node.
	pub current: Option<usize>,
	/// Edge indices on the final path.
	pub path: Vec<usize>,
	/// Set once the run has finished.
	pub finished: bool,
}

impl GraphSnapshot {
	/// Apply one event; ids outside `graph` are ignored.
	pub fn apply(&mut self, event: &GraphEvent, graph: &Graph) {
		match event {
			GraphEvent::Visit(node) => {
				if *node < graph.nodes.len() && !self.visited.contains(node) {
					self.visited.push(*node);
					self.current = Some(*node);
				}
			}
			GraphEvent::Path(edges) => {
				self.path = edges
					.iter()
					.copied()
					.filter(|&e| e < graph.edges.len())
					.collect();
			}
			GraphEvent::Finish => {
				self.current = None;
				self.finished = true;
			}
		}
	}
}

/// Everything the graph component mutates between frames.
pub struct GraphState {
	/// Graph being searched.
	pub graph: Graph,
	/// Highlights applied so far.
	pub snapshot: GraphSnapshot,
	/// Releases the trace at the configured pace.
	pub driver: StepDriver<GraphEvent>,
	/// Algorithm the next run uses.
	pub algorithm: GraphAlgorithm,
	/// Start node index.
	pub start: usize,
	/// Target node index.
	pub end: usize,
}

impl GraphState {
	/// Idle state over `graph`.
	pub fn new(graph: Graph, config: &VisualizerConfig) -> Self {
		let end = graph.len().saturating_sub(1).min(4);
		Self {
			graph,
			snapshot: GraphSnapshot::default(),
			// Graph steps linger twice as long as sorting steps.
			driver: StepDriver::new(config.default_speed * 2),
			algorithm: GraphAlgorithm::default(),
			start: 0,
			end,
		}
	}

	/// Fill role of `node`; endpoints win over visit state.
	pub fn role(&self, node: usize) -> NodeRole {
		if node == self.start {
			NodeRole::Start
		} else if node == self.end {
			NodeRole::End
		} else if self.snapshot.visited.contains(&node) {
			NodeRole::Visited
		} else {
			NodeRole::Unvisited
		}
	}

	/// Trace the selected search and queue it on the driver.
	pub fn start_search(&mut self) -> Result<()> {
		let events = trace(self.algorithm, &self.graph, self.start, self.end)?;
		self.driver.start(events)?;
		self.snapshot = GraphSnapshot::default();
		Ok(())
	}

	/// Apply every due event. Returns whether anything changed.
	pub fn tick(&mut self, now_ms: f64) -> bool {
		let mut changed = false;
		while let Some(event) = self.driver.poll(now_ms) {
			self.snapshot.apply(&event, &self.graph);
			changed = true;
		}
		changed
	}

	/// Swap in a new graph, cancelling any search in flight.
	pub fn replace(&mut self, graph: Graph) {
		self.driver.cancel();
		self.start = self.start.min(graph.len().saturating_sub(1));
		self.end = self.end.min(graph.len().saturating_sub(1));
		self.graph = graph;
		self.snapshot = GraphSnapshot::default();
	}

	/// Cancel the run and clear highlights.
	pub fn reset(&mut self) {
		self.driver.cancel();
		self.snapshot = GraphSnapshot::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph::types::{Edge, GraphNode};

	fn triangle() -> Graph {
		Graph {
			nodes: (0..3)
				.map(|i| GraphNode {
					id: i,
					x: 0.0,
					y: i as f64,
					label: i.to_string(),
				})
				.collect(),
			edges: vec![
				Edge { from: 0, to: 1, weight: 2 },
				Edge { from: 1, to: 2, weight: 2 },
				Edge { from: 0, to: 2, weight: 9 },
			],
		}
	}

	#[test]
	fn run_ends_with_shortest_path() {
		let mut state = GraphState::new(triangle(), &VisualizerConfig::default());
		state.end = 2;
		state.start_search().unwrap();
		let mut now = 0.0;
		while state.driver.is_running() {
			state.tick(now);
			now += 1000.0;
		}
		assert!(state.snapshot.finished);
		assert_eq!(state.snapshot.path, vec![0, 1]);
		assert_eq!(state.snapshot.visited, vec![0, 1, 2]);
		assert_eq!(state.role(1), NodeRole::Visited);
		assert_eq!(state.role(2), NodeRole::End);
	}

	#[test]
	fn snapshot_ignores_unknown_ids() {
		let graph = triangle();
		let mut snapshot = GraphSnapshot::default();
		snapshot.apply(&GraphEvent::Visit(9), &graph);
		snapshot.apply(&GraphEvent::Path(vec![1, 7]), &graph);
		assert!(snapshot.visited.is_empty());
		assert_eq!(snapshot.path, vec![1]);
	}

	#[test]
	fn replace_cancels_and_clamps_endpoints() {
		let mut state = GraphState::new(triangle(), &VisualizerConfig::default());
		state.end = 2;
		state.start_search().unwrap();
		let mut smaller = triangle();
		smaller.nodes.truncate(2);
		smaller.edges.truncate(1);
		state.replace(smaller);
		assert!(!state.driver.is_running());
		assert_eq!(state.end, 1);
		assert!(!state.tick(5000.0));
	}
}
