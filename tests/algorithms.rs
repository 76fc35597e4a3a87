use dsa_canvas::components::graph::{Edge, Graph, GraphAlgorithm, GraphEvent, GraphNode, generate, search};
use dsa_canvas::components::lessons::greedy::{US_COINS, coin_change};
use dsa_canvas::components::problems::{catalogue, two_sum};
use dsa_canvas::components::sorting::{SortAlgorithm, SortEvent, SortSnapshot, trace};
use dsa_canvas::components::step_driver::StepDriver;
use dsa_canvas::components::tree::{Bst, TraversalOrder};
use dsa_canvas::config::VisualizerConfig;
use dsa_canvas::error::VisualizerError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn replay(values: &[u32], events: &[SortEvent]) -> SortSnapshot {
	let mut snapshot = SortSnapshot::new(values.to_vec());
	for event in events {
		snapshot.apply(event);
	}
	snapshot
}

#[test]
fn every_sort_yields_a_sorted_permutation() {
	let mut rng = StdRng::seed_from_u64(42);
	for len in [0, 1, 2, 17, 64] {
		let values: Vec<u32> = (0..len).map(|_| rng.gen_range(10..310)).collect();
		let mut expected = values.clone();
		expected.sort_unstable();
		for algorithm in SortAlgorithm::ALL {
			let events = trace(algorithm, &values);
			assert_eq!(events.last(), Some(&SortEvent::Finish));
			let snapshot = replay(&values, &events);
			assert_eq!(snapshot.values, expected, "{} on {len} values", algorithm.name());
			assert_eq!(snapshot.sorted.len(), len);
		}
	}
}

fn line_graph() -> Graph {
	// 0 -1- 1 -1- 2 -1- 3, plus a heavy shortcut 0 -10- 3
	let nodes = (0..4)
		.map(|i| GraphNode {
			id: i,
			x: i as f64 * 50.0,
			y: 0.0,
			label: i.to_string(),
		})
		.collect();
	let edges = vec![
		Edge { from: 0, to: 1, weight: 1 },
		Edge { from: 1, to: 2, weight: 1 },
		Edge { from: 2, to: 3, weight: 1 },
		Edge { from: 0, to: 3, weight: 10 },
	];
	Graph { nodes, edges }
}

#[test]
fn bfs_minimises_hops_and_dijkstra_minimises_weight() {
	let graph = line_graph();
	let bfs = search(GraphAlgorithm::Bfs, &graph, 0, 3).unwrap();
	assert_eq!(bfs.path_edges, vec![3]);
	let dijkstra = search(GraphAlgorithm::Dijkstra, &graph, 0, 3).unwrap();
	assert_eq!(dijkstra.path_edges, vec![0, 1, 2]);
	assert_eq!(dijkstra.path_weight(&graph), 3);
}

#[test]
fn graph_search_rejects_unknown_nodes() {
	let graph = line_graph();
	assert_eq!(
		search(GraphAlgorithm::Dfs, &graph, 0, 9).map(|_| ()),
		Err(VisualizerError::NodeOutOfRange { index: 9, len: 4 })
	);
}

#[test]
fn generated_graph_traces_end_with_finish() {
	let config = VisualizerConfig::default();
	let mut rng = StdRng::seed_from_u64(3);
	let graph = generate(&config.graph, config.canvas_width, config.canvas_height, &mut rng);
	assert_eq!(graph.nodes.len(), config.graph.node_count);
	for algorithm in GraphAlgorithm::ALL {
		let events = dsa_canvas::components::graph::trace(algorithm, &graph, 0, 4).unwrap();
		assert_eq!(events.last(), Some(&GraphEvent::Finish));
	}
}

#[test]
fn sample_tree_inorder() {
	assert_eq!(Bst::sample().traversal(TraversalOrder::InOrder), vec![20, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn greedy_change_for_67_cents() {
	let change = coin_change(67, &US_COINS);
	assert_eq!(change.counts, vec![(25, 2), (10, 1), (5, 1), (1, 2)]);
	assert_eq!(change.total_coins, 6);
}

#[test]
fn two_sum_reference() {
	assert_eq!(two_sum(&[2, 7, 11, 15], 9), vec![0, 1]);
	assert!(catalogue().iter().all(|p| p.check().iter().all(|o| o.passed)));
}

#[test]
fn second_start_leaves_the_run_alone() {
	let mut driver = StepDriver::new(100);
	driver.start(vec![1, 2, 3]).unwrap();
	assert_eq!(driver.poll(0.0), Some(1));
	assert_eq!(driver.start(vec![9, 9]), Err(VisualizerError::AlreadyRunning));
	assert_eq!(driver.poll(100.0), Some(2));
	assert_eq!(driver.poll(200.0), Some(3));
	assert_eq!(driver.poll(300.0), None);
	assert!(!driver.is_running());
}

#[test]
fn cancel_drops_pending_events() {
	let mut driver = StepDriver::new(100);
	driver.start(vec!['a', 'b', 'c']).unwrap();
	assert_eq!(driver.poll(0.0), Some('a'));
	driver.cancel();
	assert_eq!(driver.poll(10_000.0), None);
	assert!(driver.start(vec!['x']).is_ok());
	assert_eq!(driver.poll(10_000.0), Some('x'));
}
