use rand::Rng;

use super::scoreboard::Scoreboard;

/// Longest list a level generates.
pub const MAX_NODES: usize = 10;

/// Walk a singly linked list from the head until the target value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkedListGame {
	/// List values, head first.
	pub nodes: Vec<u32>,
	/// Value to reach.
	pub target: u32,
	/// Index of the current node.
	pub position: usize,
	/// Moves taken this level.
	pub steps: u32,
	/// Current level, from one.
	pub level: u32,
	/// Whether the target was reached.
	pub complete: bool,
	/// Score and status.
	pub board: Scoreboard,
}

impl LinkedListGame {
	/// Level one with a random list.
	pub fn new(rng: &mut impl Rng) -> Self {
		let mut game = Self {
			nodes: Vec::new(),
			target: 0,
			position: 0,
			steps: 0,
			level: 1,
			complete: false,
			board: Scoreboard::default(),
		};
		game.generate(rng);
		game
	}

	/// Fill the list for the current level. The target is never the head,
	/// so every level needs at least one move.
	pub fn generate(&mut self, rng: &mut impl Rng) {
		let size = (5 + self.level as usize).min(MAX_NODES);
		self.nodes = (0..size).map(|_| rng.gen_range(1..=50)).collect();
		self.target = self.nodes[rng.gen_range(1..size)];
		self.restart();
	}

	/// Value at the current position.
	pub fn current(&self) -> Option<u32> {
		self.nodes.get(self.position).copied()
	}

	/// Follow the `next` pointer. Returns `true` when this move reaches the target.
	pub fn move_next(&mut self) -> bool {
		if self.complete || self.position + 1 >= self.nodes.len() {
			return false;
		}
		let steps_before = self.steps;
		self.position += 1;
		self.steps += 1;
		self.board.moves += 1;
		if self.nodes[self.position] != self.target {
			return false;
		}
		self.complete = true;
		let efficiency = (self.nodes.len() as u32).saturating_sub(steps_before);
		let points = 10 + efficiency + self.level * 5;
		self.board.score += points;
		self.board.report(format!("Found {} in {} steps! +{points}", self.target, self.steps));
		true
	}

	/// Back to the head of the same list.
	pub fn restart(&mut self) {
		self.position = 0;
		self.steps = 0;
		self.complete = false;
	}

	/// Advance a level with a fresh list.
	pub fn next_level(&mut self, rng: &mut impl Rng) {
		self.level += 1;
		self.generate(rng);
	}

	/// Back to level one with a fresh list and score.
	pub fn reset(&mut self, rng: &mut impl Rng) {
		*self = Self::new(rng);
	}
}
