mod component;
/// Open-addressing hash table game.
pub mod hash_table;
/// Binary heap game.
pub mod heap;
/// Linked-list walking game.
pub mod linked_list;
/// Score and status shared by the games.
pub mod scoreboard;
/// Stack and queue game.
pub mod stack_queue;
/// Prefix tree with autocomplete.
pub mod trie;

pub use component::{
	HashTablePractice, HeapPractice, LinkedListPractice, StackQueuePractice, TriePractice,
};
pub use hash_table::HashTableGame;
pub use heap::{HeapGame, HeapKind};
pub use linked_list::LinkedListGame;
pub use scoreboard::Scoreboard;
pub use stack_queue::{StackQueueGame, Structure};
pub use trie::Trie;
