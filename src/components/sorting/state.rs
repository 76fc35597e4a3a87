use std::collections::BTreeSet;

use rand::Rng;

use super::trace::{SortAlgorithm, SortEvent};
use crate::components::step_driver::StepDriver;
use crate::config::VisualizerConfig;

/// Counters shown under the bars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
	/// Comparison events applied.
	pub comparisons: usize,
	/// Swaps plus single-slot writes.
	pub swaps: usize,
}

/// Color role of a single bar, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarRole {
	/// Already in final position.
	Sorted,
	/// Touched by the latest swap or write.
	Swapping,
	/// Under comparison.
	Comparing,
	/// None of the above.
	Unsorted,
}

/// Renderable state of the array plus its highlight sets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortSnapshot {
	/// Current bar values.
	pub values: Vec<u32>,
	/// Indices under comparison.
	pub comparing: Vec<usize>,
	/// Indices touched by the latest swap or write.
	pub swapping: Vec<usize>,
	/// Indices in their final position.
	pub sorted: BTreeSet<usize>,
	/// Counters for the run so far.
	pub stats: SortStats,
}

impl SortSnapshot {
	/// Snapshot of `values` with nothing highlighted.
	pub fn new(values: Vec<u32>) -> Self {
		Self {
			values,
			..Self::default()
		}
	}

	/// Apply one event. Indices outside the array are ignored.
	pub fn apply(&mut self, event: &SortEvent) {
		let len = self.values.len();
		match event {
			SortEvent::Compare(indices) => {
				self.comparing = indices.iter().copied().filter(|&i| i < len).collect();
				self.swapping.clear();
				self.stats.comparisons += 1;
			}
			SortEvent::Swap(i, j) => {
				if *i < len && *j < len {
					self.values.swap(*i, *j);
					self.swapping = vec![*i, *j];
					self.stats.swaps += 1;
				}
			}
			SortEvent::Write { index, value } => {
				if let Some(slot) = self.values.get_mut(*index) {
					*slot = *value;
					self.swapping = vec![*index];
					self.stats.swaps += 1;
				}
			}
			SortEvent::MarkSorted(index) => {
				if *index < len {
					self.sorted.insert(*index);
				}
			}
			SortEvent::ClearHighlights => {
				self.comparing.clear();
				self.swapping.clear();
			}
			SortEvent::Finish => {
				self.comparing.clear();
				self.swapping.clear();
				self.sorted = (0..len).collect();
			}
		}
	}

	/// Color role of bar `index`.
	pub fn role(&self, index: usize) -> BarRole {
		if self.sorted.contains(&index) {
			BarRole::Sorted
		} else if self.swapping.contains(&index) {
			BarRole::Swapping
		} else if self.comparing.contains(&index) {
			BarRole::Comparing
		} else {
			BarRole::Unsorted
		}
	}
}

/// Everything the sorting component mutates between frames.
pub struct SortingState {
	/// Bars on screen.
	pub snapshot: SortSnapshot,
	/// Releases events at the configured pace.
	pub driver: StepDriver<SortEvent>,
	/// Algorithm the next run uses.
	pub algorithm: SortAlgorithm,
	/// Scale for bar heights.
	pub max_value: u32,
}

impl SortingState {
	/// Idle state over `values`.
	pub fn new(values: Vec<u32>, config: &VisualizerConfig) -> Self {
		Self {
			snapshot: SortSnapshot::new(values),
			driver: StepDriver::new(config.default_speed),
			algorithm: SortAlgorithm::default(),
			max_value: config.value_max,
		}
	}

	/// Trace the current algorithm over the displayed array and queue it.
	pub fn start(&mut self) -> crate::error::Result<()> {
		let events = super::trace::trace(self.algorithm, &self.snapshot.values);
		self.driver.start(events)?;
		self.snapshot = SortSnapshot::new(std::mem::take(&mut self.snapshot.values));
		Ok(())
	}

	/// Apply every event that is due at `now_ms`.
	pub fn tick(&mut self, now_ms: f64) -> bool {
		let mut changed = false;
		while let Some(event) = self.driver.poll(now_ms) {
			self.snapshot.apply(&event);
			changed = true;
		}
		changed
	}

	/// Stop any run and show a fresh array.
	pub fn replace(&mut self, values: Vec<u32>) {
		self.driver.cancel();
		self.snapshot = SortSnapshot::new(values);
	}

	/// Stop any run and clear highlights, keeping the current values.
	pub fn reset(&mut self) {
		self.driver.cancel();
		let values = std::mem::take(&mut self.snapshot.values);
		self.snapshot = SortSnapshot::new(values);
	}
}

/// Random bar heights in `value_min..value_max`.
pub fn random_values(len: usize, config: &VisualizerConfig, rng: &mut impl Rng) -> Vec<u32> {
	(0..len)
		.map(|_| rng.gen_range(config.value_min..config.value_max))
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::sorting::trace::trace;

	#[test]
	fn replay_ends_sorted_with_every_index_marked() {
		let config = VisualizerConfig::default();
		let mut rng = StdRng::seed_from_u64(7);
		for algorithm in SortAlgorithm::ALL {
			let input = random_values(40, &config, &mut rng);
			let mut snapshot = SortSnapshot::new(input.clone());
			for event in trace(algorithm, &input) {
				snapshot.apply(&event);
			}
			let mut expected = input;
			expected.sort_unstable();
			assert_eq!(snapshot.values, expected, "{}", algorithm.name());
			assert_eq!(snapshot.sorted.len(), 40);
			assert!(snapshot.comparing.is_empty());
		}
	}

	#[test]
	fn out_of_range_events_are_ignored() {
		let mut snapshot = SortSnapshot::new(vec![3, 1]);
		snapshot.apply(&SortEvent::Swap(0, 5));
		snapshot.apply(&SortEvent::Write { index: 9, value: 1 });
		snapshot.apply(&SortEvent::Compare(vec![1, 4]));
		snapshot.apply(&SortEvent::MarkSorted(2));
		assert_eq!(snapshot.values, vec![3, 1]);
		assert_eq!(snapshot.comparing, vec![1]);
		assert!(snapshot.sorted.is_empty());
		assert_eq!(snapshot.stats, SortStats { comparisons: 1, swaps: 0 });
	}

	#[test]
	fn roles_follow_priority() {
		let mut snapshot = SortSnapshot::new(vec![1, 2, 3]);
		snapshot.apply(&SortEvent::Compare(vec![0, 1]));
		assert_eq!(snapshot.role(0), BarRole::Comparing);
		snapshot.apply(&SortEvent::Swap(1, 2));
		assert_eq!(snapshot.role(1), BarRole::Swapping);
		assert_eq!(snapshot.role(2), BarRole::Swapping);
		// A swap keeps the comparison highlight alive.
		assert_eq!(snapshot.role(0), BarRole::Comparing);
		snapshot.apply(&SortEvent::MarkSorted(1));
		assert_eq!(snapshot.role(1), BarRole::Sorted);
		snapshot.apply(&SortEvent::ClearHighlights);
		assert_eq!(snapshot.role(0), BarRole::Unsorted);
		assert_eq!(snapshot.role(2), BarRole::Unsorted);
	}

	#[test]
	fn concurrent_start_keeps_first_run() {
		let config = VisualizerConfig::default();
		let mut state = SortingState::new(vec![5, 4, 3, 2, 1], &config);
		state.algorithm = SortAlgorithm::Bubble;
		state.start().unwrap();
		state.tick(0.0);
		state.algorithm = SortAlgorithm::Quick;
		assert!(state.start().is_err());
		let mut now = 0.0;
		while state.driver.is_running() {
			now += 1000.0;
			state.tick(now);
		}
		assert_eq!(state.snapshot.values, vec![1, 2, 3, 4, 5]);
		assert_eq!(state.snapshot.sorted.len(), 5);
	}

	#[test]
	fn reset_stops_run_and_keeps_values() {
		let config = VisualizerConfig::default();
		let mut state = SortingState::new(vec![2, 1], &config);
		state.start().unwrap();
		state.reset();
		assert!(!state.driver.is_running());
		assert!(!state.tick(10_000.0));
		assert_eq!(state.snapshot.values.len(), 2);
	}
}
