/// Score, move count and last status line shared by every practice widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
	/// Points earned.
	pub score: u32,
	/// Operations performed.
	pub moves: u32,
	/// Feedback on the latest operation.
	pub status: String,
}

impl Scoreboard {
	/// Count a successful move worth `points`.
	pub fn award(&mut self, points: u32, status: impl Into<String>) {
		self.score += points;
		self.moves += 1;
		self.status = status.into();
	}

	/// Set the status without scoring.
	pub fn report(&mut self, status: impl Into<String>) {
		self.status = status.into();
	}
}
