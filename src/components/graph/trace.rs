//! Path searches over a [`Graph`], recorded as visit order plus final path.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use super::types::Graph;
use crate::error::{Result, VisualizerError};

/// Search algorithms offered by the graph visualizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GraphAlgorithm {
	/// Shortest weighted path.
	#[default]
	Dijkstra,
	/// Breadth-first; fewest hops.
	Bfs,
	/// Depth-first; any path.
	Dfs,
	/// Best-first with a distance heuristic.
	AStar,
}

impl GraphAlgorithm {
	/// Every algorithm, in menu order.
	pub const ALL: [GraphAlgorithm; 4] = [
		GraphAlgorithm::Dijkstra,
		GraphAlgorithm::Bfs,
		GraphAlgorithm::Dfs,
		GraphAlgorithm::AStar,
	];

	/// Stable identifier used as the `<option>` value.
	pub fn id(self) -> &'static str {
		match self {
			GraphAlgorithm::Dijkstra => "dijkstra",
			GraphAlgorithm::Bfs => "bfs",
			GraphAlgorithm::Dfs => "dfs",
			GraphAlgorithm::AStar => "astar",
		}
	}

	/// Inverse of [`GraphAlgorithm::id`].
	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|a| a.id() == id)
	}

	/// Display name.
	pub fn name(self) -> &'static str {
		match self {
			GraphAlgorithm::Dijkstra => "Dijkstra's Algorithm",
			GraphAlgorithm::Bfs => "Breadth-First Search",
			GraphAlgorithm::Dfs => "Depth-First Search",
			GraphAlgorithm::AStar => "A* Algorithm",
		}
	}

	/// Short tag shown next to the name.
	pub fn kind(self) -> &'static str {
		match self {
			GraphAlgorithm::Dijkstra | GraphAlgorithm::AStar => "Shortest Path",
			GraphAlgorithm::Bfs | GraphAlgorithm::Dfs => "Graph Traversal",
		}
	}
}

/// One step of a graph search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphEvent {
	/// The node was expanded.
	Visit(usize),
	/// Edge indices of the discovered path, start to end.
	Path(Vec<usize>),
	/// Search over; no further events follow.
	Finish,
}

/// Outcome of a search, before it is turned into events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
	/// Nodes in expansion order.
	pub visit_order: Vec<usize>,
	/// Nodes from start to end; empty when `end` is unreachable.
	pub path_nodes: Vec<usize>,
	/// Edge indices along the found path.
	pub path_edges: Vec<usize>,
}

impl SearchResult {
	/// Summed weight of the path edges.
	pub fn path_weight(&self, graph: &Graph) -> u64 {
		self.path_edges
			.iter()
			.map(|&e| graph.edges[e].weight as u64)
			.sum()
	}
}

fn check_node(graph: &Graph, index: usize) -> Result<()> {
	if index >= graph.len() {
		return Err(VisualizerError::NodeOutOfRange {
			index,
			len: graph.len(),
		});
	}
	Ok(())
}

/// Run a search from `start` towards `end`, stopping once `end` is expanded.
pub fn search(
	algorithm: GraphAlgorithm,
	graph: &Graph,
	start: usize,
	end: usize,
) -> Result<SearchResult> {
	check_node(graph, start)?;
	check_node(graph, end)?;
	let (visit_order, previous) = match algorithm {
		GraphAlgorithm::Dijkstra => dijkstra(graph, start, end),
		GraphAlgorithm::Bfs => bfs(graph, start, end),
		GraphAlgorithm::Dfs => dfs(graph, start, end),
		GraphAlgorithm::AStar => astar(graph, start, end),
	};
	let path_nodes = reconstruct(&previous, start, end);
	let path_edges = path_nodes
		.windows(2)
		.filter_map(|pair| graph.edge_between(pair[0], pair[1]))
		.collect();
	Ok(SearchResult {
		visit_order,
		path_nodes,
		path_edges,
	})
}

/// Event trace for the step driver.
pub fn trace(
	algorithm: GraphAlgorithm,
	graph: &Graph,
	start: usize,
	end: usize,
) -> Result<Vec<GraphEvent>> {
	let result = search(algorithm, graph, start, end)?;
	let mut events: Vec<GraphEvent> = result.visit_order.into_iter().map(GraphEvent::Visit).collect();
	events.push(GraphEvent::Path(result.path_edges));
	events.push(GraphEvent::Finish);
	Ok(events)
}

fn reconstruct(previous: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
	if start == end {
		return vec![start];
	}
	let mut path = vec![end];
	let mut current = end;
	while let Some(prev) = previous[current] {
		path.push(prev);
		current = prev;
		if current == start || path.len() > previous.len() {
			break;
		}
	}
	if current != start {
		return Vec::new();
	}
	path.reverse();
	path
}

type Visits = (Vec<usize>, Vec<Option<usize>>);

fn dijkstra(graph: &Graph, start: usize, end: usize) -> Visits {
	let mut distance = vec![u64::MAX; graph.len()];
	let mut previous = vec![None; graph.len()];
	let mut visited = vec![false; graph.len()];
	let mut order = Vec::new();
	let mut queue = BinaryHeap::new();

	distance[start] = 0;
	queue.push(Reverse((0u64, start)));
	while let Some(Reverse((dist, current))) = queue.pop() {
		if visited[current] || dist > distance[current] {
			continue;
		}
		visited[current] = true;
		order.push(current);
		if current == end {
			break;
		}
		for n in graph.neighbors(current) {
			if visited[n.node] {
				continue;
			}
			let alt = dist + n.weight as u64;
			if alt < distance[n.node] {
				distance[n.node] = alt;
				previous[n.node] = Some(current);
				queue.push(Reverse((alt, n.node)));
			}
		}
	}
	(order, previous)
}

fn bfs(graph: &Graph, start: usize, end: usize) -> Visits {
	let mut previous = vec![None; graph.len()];
	let mut seen = vec![false; graph.len()];
	let mut order = Vec::new();
	let mut queue = VecDeque::from([start]);
	seen[start] = true;

	while let Some(current) = queue.pop_front() {
		order.push(current);
		if current == end {
			break;
		}
		for n in graph.neighbors(current) {
			if !seen[n.node] {
				seen[n.node] = true;
				previous[n.node] = Some(current);
				queue.push_back(n.node);
			}
		}
	}
	(order, previous)
}

fn dfs(graph: &Graph, start: usize, end: usize) -> Visits {
	let mut previous = vec![None; graph.len()];
	let mut visited = vec![false; graph.len()];
	let mut order = Vec::new();
	let mut stack = vec![start];

	while let Some(current) = stack.pop() {
		if visited[current] {
			continue;
		}
		visited[current] = true;
		order.push(current);
		if current == end {
			break;
		}
		// Reversed so the first neighbor is explored first.
		let neighbors: Vec<_> = graph.neighbors(current).collect();
		for n in neighbors.into_iter().rev() {
			if !visited[n.node] {
				previous[n.node] = Some(current);
				stack.push(n.node);
			}
		}
	}
	(order, previous)
}

fn astar(graph: &Graph, start: usize, end: usize) -> Visits {
	let mut g_score = vec![f64::INFINITY; graph.len()];
	let mut f_score = vec![f64::INFINITY; graph.len()];
	let mut previous = vec![None; graph.len()];
	let mut closed = HashSet::new();
	let mut order = Vec::new();
	let mut open = vec![start];

	g_score[start] = 0.0;
	f_score[start] = graph.distance(start, end);
	while !open.is_empty() {
		let (pos, &current) = open
			.iter()
			.enumerate()
			.min_by(|a, b| f_score[*a.1].total_cmp(&f_score[*b.1]))
			.unwrap_or((0, &start));
		open.swap_remove(pos);
		if !closed.insert(current) {
			continue;
		}
		order.push(current);
		if current == end {
			break;
		}
		for n in graph.neighbors(current) {
			if closed.contains(&n.node) {
				continue;
			}
			let tentative = g_score[current] + n.weight as f64;
			if tentative < g_score[n.node] {
				previous[n.node] = Some(current);
				g_score[n.node] = tentative;
				f_score[n.node] = tentative + graph.distance(n.node, end);
				if !open.contains(&n.node) {
					open.push(n.node);
				}
			}
		}
	}
	(order, previous)
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::graph::layout::generate;
	use crate::components::graph::types::{Edge, GraphNode};
	use crate::config::GraphConfig;

	fn line_graph() -> Graph {
		// A -1- B -1- C, plus a heavy shortcut A -10- C.
		let nodes = (0..3)
			.map(|i| GraphNode {
				id: i,
				x: i as f64 * 100.0,
				y: 0.0,
				label: String::new(),
			})
			.collect();
		Graph {
			nodes,
			edges: vec![
				Edge { from: 0, to: 1, weight: 1 },
				Edge { from: 1, to: 2, weight: 1 },
				Edge { from: 0, to: 2, weight: 10 },
			],
		}
	}

	// Floyd-Warshall over (hops, weights) for cross-checking.
	fn all_pairs(graph: &Graph, unit: bool) -> Vec<Vec<u64>> {
		let n = graph.len();
		let mut d = vec![vec![u64::MAX / 4; n]; n];
		for (i, row) in d.iter_mut().enumerate() {
			row[i] = 0;
		}
		for e in &graph.edges {
			let w = if unit { 1 } else { e.weight as u64 };
			d[e.from][e.to] = d[e.from][e.to].min(w);
			d[e.to][e.from] = d[e.to][e.from].min(w);
		}
		for k in 0..n {
			for i in 0..n {
				for j in 0..n {
					if d[i][k] + d[k][j] < d[i][j] {
						d[i][j] = d[i][k] + d[k][j];
					}
				}
			}
		}
		d
	}

	#[test]
	fn dijkstra_prefers_light_path() {
		let graph = line_graph();
		let result = search(GraphAlgorithm::Dijkstra, &graph, 0, 2).unwrap();
		assert_eq!(result.path_nodes, vec![0, 1, 2]);
		assert_eq!(result.path_weight(&graph), 2);
	}

	#[test]
	fn bfs_prefers_fewer_edges() {
		let graph = line_graph();
		let result = search(GraphAlgorithm::Bfs, &graph, 0, 2).unwrap();
		assert_eq!(result.path_edges, vec![2]);
	}

	#[test]
	fn random_graphs_match_reference_distances() {
		let config = GraphConfig::default();
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..50 {
			let graph = generate(&config, 600.0, 400.0, &mut rng);
			let hops = all_pairs(&graph, true);
			let weights = all_pairs(&graph, false);
			for end in 1..graph.len() {
				let bfs = search(GraphAlgorithm::Bfs, &graph, 0, end).unwrap();
				let dijkstra = search(GraphAlgorithm::Dijkstra, &graph, 0, end).unwrap();
				if hops[0][end] >= u64::MAX / 4 {
					assert!(bfs.path_nodes.is_empty());
					assert!(dijkstra.path_nodes.is_empty());
					continue;
				}
				assert_eq!(bfs.path_edges.len() as u64, hops[0][end]);
				assert_eq!(dijkstra.path_weight(&graph), weights[0][end]);
				for algorithm in [GraphAlgorithm::Dfs, GraphAlgorithm::AStar] {
					let result = search(algorithm, &graph, 0, end).unwrap();
					assert_eq!(result.path_nodes.first(), Some(&0));
					assert_eq!(result.path_nodes.last(), Some(&end));
					assert_eq!(result.path_edges.len() + 1, result.path_nodes.len());
				}
			}
		}
	}

	#[test]
	fn out_of_range_nodes_are_rejected() {
		let graph = line_graph();
		assert_eq!(
			search(GraphAlgorithm::Bfs, &graph, 0, 7),
			Err(VisualizerError::NodeOutOfRange { index: 7, len: 3 })
		);
	}

	#[test]
	fn same_start_and_end_yields_empty_path() {
		let graph = line_graph();
		let events = trace(GraphAlgorithm::Dfs, &graph, 1, 1).unwrap();
		assert_eq!(
			events,
			vec![GraphEvent::Visit(1), GraphEvent::Path(Vec::new()), GraphEvent::Finish]
		);
	}

	#[test]
	fn dfs_goes_deep_first() {
		let graph = line_graph();
		let result = search(GraphAlgorithm::Dfs, &graph, 0, 2).unwrap();
		assert_eq!(result.visit_order, vec![0, 1, 2]);
		assert_eq!(result.path_nodes, vec![0, 1, 2]);
	}
}
