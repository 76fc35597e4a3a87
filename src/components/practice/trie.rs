use std::collections::BTreeMap;

/// Autocomplete shows at most this many words.
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct TrieNode {
	children: BTreeMap<char, TrieNode>,
	terminal: bool,
}

impl TrieNode {
	fn collect(&self, word: &mut String, out: &mut Vec<String>) {
		if self.terminal {
			out.push(word.clone());
		}
		for (c, child) in &self.children {
			word.push(*c);
			child.collect(word, out);
			word.pop();
		}
	}

	/// `None` when the word is absent; otherwise whether this node is now
	/// an empty, non-terminal leaf its parent should prune.
	fn remove(&mut self, word: &[char]) -> Option<bool> {
		match word.split_first() {
			None => {
				if !self.terminal {
					return None;
				}
				self.terminal = false;
			}
			Some((c, rest)) => {
				let child = self.children.get_mut(c)?;
				if child.remove(rest)? {
					self.children.remove(c);
				}
			}
		}
		Some(!self.terminal && self.children.is_empty())
	}

	fn count(&self) -> usize {
		self.children.values().map(|child| 1 + child.count()).sum()
	}
}

/// Prefix tree over lowercase words. Input is trimmed and lowercased.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trie {
	root: TrieNode,
	words: usize,
}

fn normalize(word: &str) -> String {
	word.trim().to_lowercase()
}

impl Trie {
	/// Add a word. Returns false for blank input or a word already present.
	pub fn insert(&mut self, word: &str) -> bool {
		let word = normalize(word);
		if word.is_empty() {
			return false;
		}
		let mut node = &mut self.root;
		for c in word.chars() {
			node = node.children.entry(c).or_default();
		}
		if node.terminal {
			return false;
		}
		node.terminal = true;
		self.words += 1;
		true
	}

	fn find(&self, prefix: &str) -> Option<&TrieNode> {
		prefix
			.chars()
			.try_fold(&self.root, |node, c| node.children.get(&c))
	}

	/// Whole-word lookup.
	pub fn contains(&self, word: &str) -> bool {
		self.find(&normalize(word)).is_some_and(|node| node.terminal)
	}

	/// Every stored word beginning with `prefix`, in alphabetical order.
	pub fn starts_with(&self, prefix: &str) -> Vec<String> {
		let mut word = normalize(prefix);
		let mut out = Vec::new();
		if let Some(node) = self.find(&word) {
			node.collect(&mut word, &mut out);
		}
		out
	}

	/// Autocomplete for a non-blank prefix, capped at [`MAX_SUGGESTIONS`].
	pub fn suggestions(&self, prefix: &str) -> Vec<String> {
		if prefix.trim().is_empty() {
			return Vec::new();
		}
		let mut words = self.starts_with(prefix);
		words.truncate(MAX_SUGGESTIONS);
		words
	}

	/// Remove a word, pruning branches no other word uses.
	pub fn remove(&mut self, word: &str) -> bool {
		let chars: Vec<char> = normalize(word).chars().collect();
		if chars.is_empty() || self.root.remove(&chars).is_none() {
			return false;
		}
		self.words -= 1;
		true
	}

	/// All stored words, alphabetically.
	pub fn words(&self) -> Vec<String> {
		self.starts_with("")
	}

	/// Number of stored words.
	pub fn len(&self) -> usize {
		self.words
	}

	/// Whether no words are stored.
	pub fn is_empty(&self) -> bool {
		self.words == 0
	}

	/// Nodes below the root.
	pub fn node_count(&self) -> usize {
		self.root.count()
	}

	/// Remove every word.
	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn trie(words: &[&str]) -> Trie {
		let mut trie = Trie::default();
		for word in words {
			trie.insert(word);
		}
		trie
	}

	#[test]
	fn prefix_lookup() {
		let trie = trie(&["cat", "car", "dog"]);
		assert_eq!(trie.starts_with("ca"), vec!["car", "cat"]);
		assert_eq!(trie.starts_with("CA "), vec!["car", "cat"]);
		assert!(trie.starts_with("x").is_empty());
		assert!(trie.contains("dog"));
		assert!(!trie.contains("do"));
		assert_eq!(trie.words(), vec!["car", "cat", "dog"]);
	}

	#[test]
	fn insert_normalizes_and_dedups() {
		let mut trie = Trie::default();
		assert!(trie.insert("  Apple "));
		assert!(!trie.insert("apple"));
		assert!(!trie.insert("   "));
		assert_eq!(trie.len(), 1);
		assert!(trie.contains("APPLE"));
	}

	#[test]
	fn suggestions_are_capped() {
		let trie = trie(&["a", "ab", "abc", "abd", "abe", "abf", "b"]);
		assert_eq!(trie.suggestions("a"), vec!["a", "ab", "abc", "abd", "abe"]);
		assert!(trie.suggestions("  ").is_empty());
	}

	#[test]
	fn remove_prunes_unused_branches() {
		let mut trie = trie(&["car", "cat", "ca"]);
		assert_eq!(trie.node_count(), 4);
		assert!(trie.remove("cat"));
		assert_eq!(trie.node_count(), 3);
		assert!(!trie.remove("cat"));
		assert!(!trie.remove("c"));
		assert!(trie.remove("car"));
		assert_eq!(trie.node_count(), 2);
		assert!(trie.contains("ca"));
		assert!(trie.remove("ca"));
		assert_eq!(trie.node_count(), 0);
		assert!(trie.is_empty());
	}

	#[test]
	fn clear_empties() {
		let mut trie = trie(&["one", "two"]);
		trie.clear();
		assert!(trie.is_empty());
		assert!(trie.words().is_empty());
	}
}
