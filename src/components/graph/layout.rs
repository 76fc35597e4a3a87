use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use rand::Rng;

use super::types::{Edge, Graph, GraphNode, node_label};
use crate::config::GraphConfig;

const LAYOUT_TICKS: usize = 240;
const MARGIN: f64 = 30.0;

/// Nodes on a circle with random weighted edges between them.
pub fn generate(config: &GraphConfig, width: f64, height: f64, rng: &mut impl Rng) -> Graph {
	let n = config.node_count;
	let nodes = (0..n)
		.map(|i| {
			let angle = i as f64 * 2.0 * PI / n as f64;
			GraphNode {
				id: i,
				x: width / 2.0 + config.radius * angle.cos(),
				y: height / 2.0 + config.radius * angle.sin(),
				label: node_label(i),
			}
		})
		.collect();

	let mut edges = Vec::new();
	for from in 0..n {
		for to in from + 1..n {
			if rng.gen_bool(config.edge_probability.clamp(0.0, 1.0)) {
				edges.push(Edge {
					from,
					to,
					weight: rng.gen_range(config.weight_range.clone()),
				});
			}
		}
	}
	Graph { nodes, edges }
}

/// Relax node positions with a force simulation, then fit them to the canvas.
/// The circular placement is kept if the simulation diverges.
pub fn settle(graph: &mut Graph, width: f64, height: f64) {
	if graph.len() < 2 {
		return;
	}
	let mut sim: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	});
	let idx: Vec<_> = graph
		.nodes
		.iter()
		.map(|node| {
			sim.add_node(NodeData {
				x: node.x as f32,
				y: node.y as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: node.id,
			})
		})
		.collect();
	for edge in &graph.edges {
		sim.add_edge(idx[edge.from], idx[edge.to], EdgeData::default());
	}
	for _ in 0..LAYOUT_TICKS {
		sim.update(0.016);
	}

	let mut positions = vec![(0.0, 0.0); graph.len()];
	sim.visit_nodes(|node| {
		positions[node.data.user_data] = (node.x() as f64, node.y() as f64);
	});
	if positions.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
		return;
	}
	if let Some(fitted) = fit(&positions, width, height) {
		for (node, (x, y)) in graph.nodes.iter_mut().zip(fitted) {
			node.x = x;
			node.y = y;
		}
	}
}

// Uniformly scale and center points into the canvas minus a margin.
fn fit(points: &[(f64, f64)], width: f64, height: f64) -> Option<Vec<(f64, f64)>> {
	let (min_x, max_x) = points
		.iter()
		.fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.0), hi.max(p.0)));
	let (min_y, max_y) = points
		.iter()
		.fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)));
	let (span_x, span_y) = (max_x - min_x, max_y - min_y);
	if span_x < 1e-6 && span_y < 1e-6 {
		return None;
	}
	let (avail_x, avail_y) = (width - 2.0 * MARGIN, height - 2.0 * MARGIN);
	let scale = (avail_x / span_x.max(1e-6)).min(avail_y / span_y.max(1e-6));
	let (off_x, off_y) = (
		MARGIN + (avail_x - span_x * scale) / 2.0,
		MARGIN + (avail_y - span_y * scale) / 2.0,
	);
	Some(
		points
			.iter()
			.map(|&(x, y)| (off_x + (x - min_x) * scale, off_y + (y - min_y) * scale))
			.collect(),
	)
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn generate_respects_config() {
		let config = GraphConfig::default();
		let mut rng = StdRng::seed_from_u64(3);
		let graph = generate(&config, 600.0, 400.0, &mut rng);
		assert_eq!(graph.len(), 8);
		assert_eq!(graph.nodes[0].label, "A");
		for edge in &graph.edges {
			assert!(edge.from < edge.to);
			assert!(config.weight_range.contains(&edge.weight));
		}
	}

	#[test]
	fn fit_keeps_points_inside_canvas() {
		let points = [(-500.0, 10.0), (900.0, 20.0), (0.0, 700.0)];
		let fitted = fit(&points, 600.0, 400.0).unwrap();
		for (x, y) in fitted {
			assert!((MARGIN - 1e-9..=600.0 - MARGIN + 1e-9).contains(&x));
			assert!((MARGIN - 1e-9..=400.0 - MARGIN + 1e-9).contains(&y));
		}
		assert!(fit(&[(1.0, 1.0), (1.0, 1.0)], 600.0, 400.0).is_none());
	}
}
