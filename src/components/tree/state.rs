use log::debug;

use super::bst::{Bst, TraversalOrder};
use super::trace::{TreeEvent, search_trace, traversal_trace};
use crate::components::step_driver::StepDriver;
use crate::config::VisualizerConfig;
use crate::error::{Result, VisualizerError};

/// Highlights and traversal output accumulated from tree events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeSnapshot {
	/// Values on the current search path, or the node being visited.
	pub highlighted: Vec<i64>,
	/// Values emitted so far by a traversal.
	pub output: Vec<i64>,
	/// Search verdict once known.
	pub found: Option<bool>,
	/// Set once the animation has finished.
	pub finished: bool,
}

impl TreeSnapshot {
	/// Apply one event; values not in `tree` are ignored.
	pub fn apply(&mut self, event: &TreeEvent, tree: &Bst) {
		match event {
			TreeEvent::Highlight(values) => {
				self.highlighted = values.iter().copied().filter(|&v| tree.contains(v)).collect();
			}
			TreeEvent::Emit(value) => {
				if tree.contains(*value) {
					self.output.push(*value);
					self.highlighted = vec![*value];
				}
			}
			TreeEvent::Found(found) => self.found = Some(*found),
			TreeEvent::Finish => self.finished = true,
		}
	}
}

/// Everything the tree component mutates between frames.
pub struct TreeState {
	/// Tree being edited and searched.
	pub tree: Bst,
	/// Highlights applied so far.
	pub snapshot: TreeSnapshot,
	/// Releases events at the configured pace.
	pub driver: StepDriver<TreeEvent>,
	/// Order the next traversal uses.
	pub order: TraversalOrder,
}

impl TreeState {
	/// Start from the sample tree.
	pub fn new(config: &VisualizerConfig) -> Self {
		Self {
			tree: Bst::sample(),
			snapshot: TreeSnapshot::default(),
			driver: StepDriver::new(config.default_speed * 2),
			order: TraversalOrder::default(),
		}
	}

	fn ensure_idle(&self) -> Result<()> {
		if self.driver.is_running() {
			return Err(VisualizerError::AlreadyRunning);
		}
		Ok(())
	}

	/// Insert a value. The tree is frozen while an animation plays.
	pub fn insert(&mut self, value: i64) -> Result<bool> {
		self.ensure_idle()?;
		let inserted = self.tree.insert(value);
		debug!("Insert {value}: {inserted}");
		self.snapshot = TreeSnapshot::default();
		Ok(inserted)
	}

	/// Delete `value`; rejected while an animation runs.
	pub fn delete(&mut self, value: i64) -> Result<bool> {
		self.ensure_idle()?;
		let deleted = self.tree.delete(value);
		debug!("Delete {value}: {deleted}");
		self.snapshot = TreeSnapshot::default();
		Ok(deleted)
	}

	/// Animate the search for `value`, one level per step.
	pub fn start_search(&mut self, value: i64) -> Result<()> {
		if self.tree.is_empty() {
			return Err(VisualizerError::EmptyCollection);
		}
		self.driver.start(search_trace(&self.tree, value))?;
		self.snapshot = TreeSnapshot::default();
		Ok(())
	}

	/// Animate a traversal in `self.order`. Fails on an empty tree.
	pub fn start_traversal(&mut self) -> Result<()> {
		if self.tree.is_empty() {
			return Err(VisualizerError::EmptyCollection);
		}
		self.driver.start(traversal_trace(&self.tree, self.order))?;
		self.snapshot = TreeSnapshot::default();
		Ok(())
	}

	/// Apply every due event. Returns whether anything changed.
	pub fn tick(&mut self, now_ms: f64) -> bool {
		let mut changed = false;
		while let Some(event) = self.driver.poll(now_ms) {
			self.snapshot.apply(&event, &self.tree);
			changed = true;
		}
		changed
	}

	/// Empty the tree, cancelling any animation.
	pub fn clear(&mut self) {
		self.driver.cancel();
		self.tree.clear();
		self.snapshot = TreeSnapshot::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run(state: &mut TreeState) {
		let mut now = 0.0;
		while state.driver.is_running() {
			state.tick(now);
			now += 1000.0;
		}
	}

	#[test]
	fn traversal_collects_output() {
		let mut state = TreeState::new(&VisualizerConfig::default());
		state.start_traversal().unwrap();
		run(&mut state);
		assert_eq!(state.snapshot.output, vec![20, 30, 40, 50, 60, 70, 80]);
		assert_eq!(state.snapshot.highlighted, vec![80]);
		assert!(state.snapshot.finished);
	}

	#[test]
	fn search_reports_miss() {
		let mut state = TreeState::new(&VisualizerConfig::default());
		state.start_search(65).unwrap();
		run(&mut state);
		assert_eq!(state.snapshot.found, Some(false));
		assert_eq!(state.snapshot.highlighted, vec![50, 70, 60]);
	}

	#[test]
	fn tree_is_frozen_during_animation() {
		let mut state = TreeState::new(&VisualizerConfig::default());
		state.start_traversal().unwrap();
		assert_eq!(state.insert(1), Err(VisualizerError::AlreadyRunning));
		assert_eq!(state.start_search(1), Err(VisualizerError::AlreadyRunning));
		state.clear();
		assert_eq!(state.insert(1), Ok(true));
		assert_eq!(state.tree.len(), 1);
	}

	#[test]
	fn empty_tree_has_nothing_to_animate() {
		let mut state = TreeState::new(&VisualizerConfig::default());
		state.clear();
		assert_eq!(state.start_traversal(), Err(VisualizerError::EmptyCollection));
	}

	#[test]
	fn snapshot_ignores_missing_values() {
		let tree = Bst::sample();
		let mut snapshot = TreeSnapshot::default();
		snapshot.apply(&TreeEvent::Highlight(vec![50, 999]), &tree);
		snapshot.apply(&TreeEvent::Emit(999), &tree);
		assert_eq!(snapshot.highlighted, vec![50]);
		assert!(snapshot.output.is_empty());
	}
}
