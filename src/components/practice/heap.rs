use crate::error::{Result, VisualizerError};

use super::scoreboard::Scoreboard;

/// Ordering the heap maintains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeapKind {
	/// Largest value on top.
	#[default]
	Max,
	/// Smallest value on top.
	Min,
}

impl HeapKind {
	/// Display name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Max => "Max",
			Self::Min => "Min",
		}
	}

	/// Whether `a` belongs above `b`.
	fn above(self, a: i64, b: i64) -> bool {
		match self {
			Self::Max => a > b,
			Self::Min => a < b,
		}
	}
}

/// Array-backed binary heap that can flip between max and min ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeapGame {
	/// Heap in array form.
	pub values: Vec<i64>,
	/// Ordering being kept.
	pub kind: HeapKind,
	/// Score and status.
	pub board: Scoreboard,
}

impl HeapGame {
	/// Insert `value` and sift it up.
	pub fn insert(&mut self, value: i64) {
		self.values.push(value);
		self.sift_up(self.values.len() - 1);
		self.board.award(10, format!("Inserted {value} into {} Heap", self.kind.name()));
	}

	/// Remove the root and sift the last value down.
	pub fn extract_root(&mut self) -> Result<i64> {
		if self.values.is_empty() {
			self.board.report("Heap is empty!");
			return Err(VisualizerError::EmptyStructure("heap"));
		}
		let root = self.values.swap_remove(0);
		self.sift_down(0);
		self.board.award(15, format!("Extracted {root} from {} Heap", self.kind.name()));
		Ok(root)
	}

	/// Switch ordering and rebuild the heap in place.
	pub fn set_kind(&mut self, kind: HeapKind) {
		if kind == self.kind {
			return;
		}
		self.kind = kind;
		for i in (0..self.values.len() / 2).rev() {
			self.sift_down(i);
		}
		self.board.report(format!("Switched to {} Heap", kind.name()));
	}

	/// Current root, if any.
	pub fn root(&self) -> Option<i64> {
		self.values.first().copied()
	}

	/// Empty the heap and scores, keeping its kind.
	pub fn reset(&mut self) {
		*self = Self {
			kind: self.kind,
			..Self::default()
		};
	}

	/// `(level, horizontal fraction)` of slot `index` in the drawn tree.
	pub fn position(index: usize) -> (u32, f64) {
		let level = (index + 1).ilog2();
		let first = (1usize << level) - 1;
		let width = (1usize << level) as f64;
		(level, ((index - first) as f64 + 0.5) / width)
	}

	fn sift_up(&mut self, mut i: usize) {
		while i > 0 {
			let parent = (i - 1) / 2;
			if !self.kind.above(self.values[i], self.values[parent]) {
				break;
			}
			self.values.swap(i, parent);
			i = parent;
		}
	}

	fn sift_down(&mut self, mut i: usize) {
		let len = self.values.len();
		loop {
			let mut target = i;
			for child in [2 * i + 1, 2 * i + 2] {
				if child < len && self.kind.above(self.values[child], self.values[target]) {
					target = child;
				}
			}
			if target == i {
				break;
			}
			self.values.swap(i, target);
			i = target;
		}
	}

	/// Every parent is ordered before its children.
	pub fn is_valid(&self) -> bool {
		(1..self.values.len()).all(|i| !self.kind.above(self.values[i], self.values[(i - 1) / 2]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn max_heap_extracts_in_descending_order() {
		let mut game = HeapGame::default();
		for v in [5, 3, 9, 1, 7] {
			game.insert(v);
			assert!(game.is_valid());
		}
		let drained: Vec<i64> = std::iter::from_fn(|| game.extract_root().ok()).collect();
		assert_eq!(drained, vec![9, 7, 5, 3, 1]);
		assert_eq!(game.board.score, 5 * 10 + 5 * 15);
		assert_eq!(game.board.moves, 10);
	}

	#[test]
	fn toggle_reheapifies() {
		let mut game = HeapGame::default();
		for v in [4, 8, 2, 6] {
			game.insert(v);
		}
		assert_eq!(game.root(), Some(8));
		game.set_kind(HeapKind::Min);
		assert!(game.is_valid());
		assert_eq!(game.root(), Some(2));
		assert_eq!(game.board.moves, 4);
	}

	#[test]
	fn empty_extract_reports() {
		let mut game = HeapGame::default();
		assert_eq!(game.extract_root(), Err(VisualizerError::EmptyStructure("heap")));
		assert_eq!(game.board.status, "Heap is empty!");
		assert_eq!(game.board.moves, 0);
	}

	#[test]
	fn reset_keeps_kind() {
		let mut game = HeapGame::default();
		game.set_kind(HeapKind::Min);
		game.insert(3);
		game.reset();
		assert_eq!(game.kind, HeapKind::Min);
		assert!(game.values.is_empty());
		assert_eq!(game.board, Scoreboard::default());
	}

	#[test]
	fn positions() {
		assert_eq!(HeapGame::position(0), (0, 0.5));
		assert_eq!(HeapGame::position(1), (1, 0.25));
		assert_eq!(HeapGame::position(6), (2, 0.875));
	}
}
