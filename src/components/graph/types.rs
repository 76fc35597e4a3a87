/// A vertex placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Index into `Graph::nodes`.
	pub id: usize,
	/// Canvas x coordinate.
	pub x: f64,
	/// Canvas y coordinate.
	pub y: f64,
	/// Letter label.
	pub label: String,
}

/// An undirected weighted edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// One endpoint.
	pub from: usize,
	/// The other endpoint.
	pub to: usize,
	/// Cost of crossing the edge.
	pub weight: u32,
}

impl Edge {
	/// The endpoint opposite `node`, if `node` touches this edge.
	pub fn other(&self, node: usize) -> Option<usize> {
		if self.from == node {
			Some(self.to)
		} else if self.to == node {
			Some(self.from)
		} else {
			None
		}
	}
}

/// One step from a node to a neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
	/// Node on the far side of the edge.
	pub node: usize,
	/// Weight of the connecting edge.
	pub weight: u32,
	/// Index of the edge in `Graph::edges`.
	pub edge: usize,
}

/// Undirected weighted graph over indexed nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	/// Nodes, indexed by id.
	pub nodes: Vec<GraphNode>,
	/// Undirected edges.
	pub edges: Vec<Edge>,
}

impl Graph {
	/// Node count.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Neighbors of `node`, in edge insertion order.
	pub fn neighbors(&self, node: usize) -> impl Iterator<Item = Neighbor> + '_ {
		self.edges.iter().enumerate().filter_map(move |(edge, e)| {
			e.other(node).map(|other| Neighbor {
				node: other,
				weight: e.weight,
				edge,
			})
		})
	}

	/// Index of the edge joining `a` and `b`, in either direction.
	pub fn edge_between(&self, a: usize, b: usize) -> Option<usize> {
		self.edges
			.iter()
			.position(|e| (e.from == a && e.to == b) || (e.from == b && e.to == a))
	}

	/// Straight-line distance between two nodes on the canvas.
	pub fn distance(&self, a: usize, b: usize) -> f64 {
		let (na, nb) = (&self.nodes[a], &self.nodes[b]);
		(na.x - nb.x).hypot(na.y - nb.y)
	}
}

/// Spreadsheet-style labels: A..Z, then AA, AB, ...
pub fn node_label(mut index: usize) -> String {
	let mut label = Vec::new();
	loop {
		label.push(b'A' + (index % 26) as u8);
		if index < 26 {
			break;
		}
		index = index / 26 - 1;
	}
	label.reverse();
	String::from_utf8(label).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_follow_alphabet() {
		assert_eq!(node_label(0), "A");
		assert_eq!(node_label(7), "H");
		assert_eq!(node_label(25), "Z");
		assert_eq!(node_label(26), "AA");
		assert_eq!(node_label(27), "AB");
	}

	#[test]
	fn neighbors_cover_both_directions() {
		let graph = Graph {
			nodes: Vec::new(),
			edges: vec![
				Edge { from: 0, to: 1, weight: 3 },
				Edge { from: 2, to: 0, weight: 5 },
			],
		};
		let from_zero: Vec<_> = graph.neighbors(0).map(|n| (n.node, n.weight)).collect();
		assert_eq!(from_zero, vec![(1, 3), (2, 5)]);
		assert_eq!(graph.edge_between(0, 2), Some(1));
		assert_eq!(graph.edge_between(1, 2), None);
	}
}
