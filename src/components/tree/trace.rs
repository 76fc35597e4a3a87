use super::bst::{Bst, TraversalOrder};

/// One visible step of a tree operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeEvent {
	/// Replace the highlighted values.
	Highlight(Vec<i64>),
	/// Append a value to the traversal output and highlight it alone.
	Emit(i64),
	/// Outcome of a search.
	Found(bool),
	/// Animation over; no further events follow.
	Finish,
}

/// Descend towards `target`, growing the highlighted path one node per step.
pub fn search_trace(tree: &Bst, target: i64) -> Vec<TreeEvent> {
	let (path, found) = tree.search_path(target);
	let mut events: Vec<_> = (1..=path.len())
		.map(|n| TreeEvent::Highlight(path[..n].to_vec()))
		.collect();
	events.push(TreeEvent::Found(found));
	events.push(TreeEvent::Finish);
	events
}

/// Emit each value in `order`, highlighting it as it is visited.
pub fn traversal_trace(tree: &Bst, order: TraversalOrder) -> Vec<TreeEvent> {
	tree.traversal(order)
		.into_iter()
		.map(TreeEvent::Emit)
		.chain(std::iter::once(TreeEvent::Finish))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn search_grows_path() {
		let events = search_trace(&Bst::sample(), 40);
		assert_eq!(
			events,
			vec![
				TreeEvent::Highlight(vec![50]),
				TreeEvent::Highlight(vec![50, 30]),
				TreeEvent::Highlight(vec![50, 30, 40]),
				TreeEvent::Found(true),
				TreeEvent::Finish,
			]
		);
	}

	#[test]
	fn search_on_empty_tree_misses() {
		assert_eq!(search_trace(&Bst::new(), 5), vec![TreeEvent::Found(false), TreeEvent::Finish]);
	}

	#[test]
	fn traversal_emits_each_value() {
		let events = traversal_trace(&Bst::sample(), TraversalOrder::PostOrder);
		assert_eq!(events.len(), 8);
		assert_eq!(events[0], TreeEvent::Emit(20));
		assert_eq!(events[6], TreeEvent::Emit(50));
		assert_eq!(events[7], TreeEvent::Finish);
	}
}
