use crate::error::{Result, VisualizerError};

use super::scoreboard::Scoreboard;

/// Number of slots.
pub const TABLE_SIZE: usize = 7;

/// Occupied slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
	/// Key as typed.
	pub key: String,
	/// Stored value.
	pub value: String,
	/// Home slot of the key.
	pub hash: usize,
}

/// How an insert landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
	/// Stored at `index`, `offset` slots past the home slot.
	Placed {
		/// Slot that now holds the entry.
		index: usize,
		/// Slots skipped past the home slot.
		offset: usize,
	},
	/// Key already present; its value was replaced.
	Updated {
		/// Slot holding the key.
		index: usize,
	},
	/// Blank key or value; nothing changed.
	Ignored,
}

/// Open-addressing table with linear stepping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashTableGame {
	/// Slot contents, `None` when free.
	pub slots: Vec<Option<Entry>>,
	/// Score and status.
	pub board: Scoreboard,
}

impl Default for HashTableGame {
	fn default() -> Self {
		Self {
			slots: vec![None; TABLE_SIZE],
			board: Scoreboard::default(),
		}
	}
}

impl HashTableGame {
	/// Sum of the key's UTF-16 code units modulo the table size.
	pub fn hash(&self, key: &str) -> usize {
		let sum: usize = key.encode_utf16().map(usize::from).sum();
		sum % self.slots.len()
	}

	/// Slots in search order, starting at the key's home slot.
	fn slots_from(&self, key: &str) -> impl Iterator<Item = usize> + use<> {
		let start = self.hash(key);
		let len = self.slots.len();
		(0..len).map(move |i| (start + i) % len)
	}

	/// Insert or update `key`, stepping linearly from its hash.
	pub fn insert(&mut self, key: &str, value: &str) -> Result<InsertOutcome> {
		let (key, value) = (key.trim(), value.trim());
		if key.is_empty() || value.is_empty() {
			return Ok(InsertOutcome::Ignored);
		}
		let hash = self.hash(key);
		let mut free = None;
		for (offset, index) in self.slots_from(key).enumerate() {
			match &self.slots[index] {
				Some(entry) if entry.key == key => {
					self.slots[index] = Some(Entry {
						key: key.to_string(),
						value: value.to_string(),
						hash,
					});
					self.board.award(0, format!("Key \"{key}\" already exists! Updated value."));
					return Ok(InsertOutcome::Updated { index });
				}
				Some(_) => {}
				None => {
					free = Some((index, offset));
					break;
				}
			}
		}
		let Some((index, offset)) = free else {
			self.board.report("Hash table is full!");
			return Err(VisualizerError::TableFull);
		};
		self.slots[index] = Some(Entry {
			key: key.to_string(),
			value: value.to_string(),
			hash,
		});
		if offset == 0 {
			self.board.award(10, "Perfect hash!");
		} else {
			self.board.award(5, format!("Collision resolved after {offset} steps!"));
		}
		Ok(InsertOutcome::Placed { index, offset })
	}

	/// Slot index holding `key`. A hit is worth 5 points.
	pub fn search(&mut self, key: &str) -> Option<usize> {
		let key = key.trim();
		if key.is_empty() {
			return None;
		}
		for index in self.slots_from(key) {
			match &self.slots[index] {
				Some(entry) if entry.key == key => {
					let status = format!("Found \"{key}\" at index {index} with value \"{}\"", entry.value);
					self.board.score += 5;
					self.board.report(status);
					return Some(index);
				}
				Some(_) => {}
				None => break,
			}
		}
		self.board.report(format!("Key \"{key}\" not found!"));
		None
	}

	/// Occupied slots.
	pub fn len(&self) -> usize {
		self.slots.iter().flatten().count()
	}

	/// Whether every slot is free.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Empty every slot and the score.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hash_is_char_code_sum() {
		let game = HashTableGame::default();
		// 'a' = 97, 97 % 7 = 6
		assert_eq!(game.hash("a"), 6);
		// 'a' + 'b' = 195, 195 % 7 = 6
		assert_eq!(game.hash("ab"), 6);
		assert_eq!(game.hash("ba"), 6);
	}

	#[test]
	fn collisions_shift_and_score_less() {
		let mut game = HashTableGame::default();
		assert_eq!(game.insert("ab", "1"), Ok(InsertOutcome::Placed { index: 6, offset: 0 }));
		assert_eq!(game.insert("ba", "2"), Ok(InsertOutcome::Placed { index: 0, offset: 1 }));
		assert_eq!(game.board.score, 15);
		assert_eq!(game.board.moves, 2);
		assert_eq!(game.board.status, "Collision resolved after 1 steps!");
	}

	#[test]
	fn updating_keeps_score() {
		let mut game = HashTableGame::default();
		game.insert("k", "1").unwrap();
		assert_eq!(game.insert("k", "2"), Ok(InsertOutcome::Updated { index: game.hash("k") }));
		assert_eq!(game.board.score, 10);
		assert_eq!(game.board.moves, 2);
		assert_eq!(game.len(), 1);
	}

	#[test]
	fn full_table_rejects_new_keys() {
		let mut game = HashTableGame::default();
		for key in ["a", "b", "c", "d", "e", "f", "g"] {
			game.insert(key, "x").unwrap();
		}
		assert_eq!(game.insert("h", "x"), Err(VisualizerError::TableFull));
		assert_eq!(game.board.status, "Hash table is full!");
		assert_eq!(game.board.moves, 7);
		assert!(matches!(game.insert("a", "y"), Ok(InsertOutcome::Updated { .. })));
	}

	#[test]
	fn search_scores_hits_only() {
		let mut game = HashTableGame::default();
		game.insert("ab", "1").unwrap();
		game.insert("ba", "2").unwrap();
		assert_eq!(game.search("ba"), Some(0));
		assert_eq!(game.board.score, 20);
		assert_eq!(game.search("zz"), None);
		assert_eq!(game.board.score, 20);
	}

	#[test]
	fn blank_input_is_a_no_op() {
		let mut game = HashTableGame::default();
		assert_eq!(game.insert("  ", "v"), Ok(InsertOutcome::Ignored));
		assert_eq!(game.search(""), None);
		assert_eq!(game, HashTableGame::default());
	}
}
