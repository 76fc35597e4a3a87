use std::collections::VecDeque;

use crate::error::{Result, VisualizerError};

use super::scoreboard::Scoreboard;

/// Which structure add and remove act on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Structure {
	/// Last in, first out.
	#[default]
	Stack,
	/// First in, first out.
	Queue,
}

/// A stack and a queue side by side; each operation is worth 5 points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackQueueGame {
	/// Stack contents, bottom first.
	pub stack: Vec<i64>,
	/// Queue contents, front first.
	pub queue: VecDeque<i64>,
	/// Structure the add and remove buttons act on.
	pub active: Structure,
	/// Score and status.
	pub board: Scoreboard,
}

impl StackQueueGame {
	/// Push onto the stack.
	pub fn push(&mut self, value: i64) {
		self.stack.push(value);
		self.board.award(5, format!("Pushed {value} to Stack"));
	}

	/// Pop the stack top.
	pub fn pop(&mut self) -> Result<i64> {
		let Some(value) = self.stack.pop() else {
			self.board.report("Stack is empty! Cannot pop.");
			return Err(VisualizerError::EmptyStructure("stack"));
		};
		self.board.award(5, format!("Popped {value} from Stack"));
		Ok(value)
	}

	/// Append to the queue.
	pub fn enqueue(&mut self, value: i64) {
		self.queue.push_back(value);
		self.board.award(5, format!("Enqueued {value} to Queue"));
	}

	/// Take the queue front.
	pub fn dequeue(&mut self) -> Result<i64> {
		let Some(value) = self.queue.pop_front() else {
			self.board.report("Queue is empty! Cannot dequeue.");
			return Err(VisualizerError::EmptyStructure("queue"));
		};
		self.board.award(5, format!("Dequeued {value} from Queue"));
		Ok(value)
	}

	/// Add to whichever structure is active.
	pub fn add(&mut self, value: i64) {
		match self.active {
			Structure::Stack => self.push(value),
			Structure::Queue => self.enqueue(value),
		}
	}

	/// Pop or dequeue, depending on the active structure.
	pub fn remove(&mut self) -> Result<i64> {
		match self.active {
			Structure::Stack => self.pop(),
			Structure::Queue => self.dequeue(),
		}
	}

	/// Empty both structures and the score.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lifo_and_fifo() {
		let mut game = StackQueueGame::default();
		for v in 1..=3 {
			game.push(v);
			game.enqueue(v);
		}
		assert_eq!(game.pop(), Ok(3));
		assert_eq!(game.dequeue(), Ok(1));
		assert_eq!(game.board.score, 40);
		assert_eq!(game.board.moves, 8);
	}

	#[test]
	fn active_structure_routes_operations() {
		let mut game = StackQueueGame {
			active: Structure::Queue,
			..Default::default()
		};
		game.add(4);
		game.add(5);
		assert_eq!(game.remove(), Ok(4));
		assert!(game.stack.is_empty());
	}

	#[test]
	fn empty_removals_report_without_scoring() {
		let mut game = StackQueueGame::default();
		assert_eq!(game.pop(), Err(VisualizerError::EmptyStructure("stack")));
		assert_eq!(game.dequeue(), Err(VisualizerError::EmptyStructure("queue")));
		assert_eq!(game.board.status, "Queue is empty! Cannot dequeue.");
		assert_eq!(game.board.score, 0);
		assert_eq!(game.board.moves, 0);
	}
}
