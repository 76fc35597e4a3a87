//! Keyword matcher behind the mentor chat. No model is involved: each topic
//! has one canned answer, picked by the first rule whose keywords match.

/// Subjects the mentor has a prepared answer for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
	/// Big O and complexity analysis.
	Complexity,
	/// Linear and binary search.
	Searching,
	/// Stack and queue differences.
	StacksAndQueues,
	/// Memoization and tabulation.
	DynamicProgramming,
	/// Graph traversals.
	Graphs,
	/// Interview preparation.
	Interviewing,
	/// Sorting algorithms.
	Sorting,
	/// Nothing matched.
	Default,
}

/// A mentor answer with an optional code listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
	/// Topic the reply answers.
	pub topic: Topic,
	/// Answer text.
	pub content: &'static str,
	/// Rust listing shown under the answer.
	pub code_example: Option<&'static str>,
}

/// First message of every chat.
pub const GREETING: &str = "Hello! I'm your mentor for Data Structures and Algorithms. I can explain \
	concepts, analyze complexity, and give guidance on technical interviews. What would you like to \
	learn about today?";

/// Canned prompts offered as buttons.
pub const QUICK_QUESTIONS: [&str; 6] = [
	"Explain Big O notation",
	"How does binary search work?",
	"What's the difference between stack and queue?",
	"Help me with dynamic programming",
	"Explain graph traversal algorithms",
	"How to approach coding interviews?",
];

/// Rules in priority order.
const RULES: [(Topic, fn(&str) -> bool); 7] = [
	(Topic::Complexity, |m| m.contains("big o") || m.contains("complexity")),
	(Topic::Searching, |m| {
		m.contains("binary search") || (m.contains("search") && m.contains("algorithm"))
	}),
	(Topic::StacksAndQueues, |m| m.contains("stack") && m.contains("queue")),
	(Topic::DynamicProgramming, |m| {
		["dynamic programming", " dp ", "memoization", "tabulation"]
			.iter()
			.any(|k| m.contains(k))
	}),
	(Topic::Graphs, |m| {
		["graph", "bfs", "dfs", "traversal", "breadth first", "depth first"]
			.iter()
			.any(|k| m.contains(k))
	}),
	(Topic::Interviewing, |m| m.contains("interview")),
	(Topic::Sorting, |m| m.contains("sort")),
];

/// Topic of the first rule matching the trimmed, lowercased message.
pub fn classify(message: &str) -> Topic {
	let message = message.trim().to_lowercase();
	RULES
		.iter()
		.find(|(_, matches)| matches(&message))
		.map_or(Topic::Default, |(topic, _)| *topic)
}

/// Canned reply for the topic of `message`.
pub fn respond(message: &str) -> Reply {
	let topic = classify(message);
	let (content, code_example) = answer(topic);
	Reply {
		topic,
		content,
		code_example,
	}
}

fn answer(topic: Topic) -> (&'static str, Option<&'static str>) {
	match topic {
		Topic::Complexity => (
			"Big O notation describes how an algorithm's cost grows with input size, focusing on the \
			 worst case and the dominant term.\n\
			 • O(1): array indexing, hash lookups\n\
			 • O(log n): binary search, balanced tree operations\n\
			 • O(n): a single pass over the input\n\
			 • O(n log n): merge sort, heap sort\n\
			 • O(n²): nested loops, bubble sort\n\
			 • O(2ⁿ): naive recursive enumeration\n\
			 To estimate it, count the dominant operations, then drop constants and lower-order terms. \
			 Space complexity applies the same idea to memory, including the recursion stack.",
			Some(
				"// O(n): one pass\n\
				 fn max(values: &[i32]) -> Option<i32> {\n\
				 \x20   values.iter().copied().max()\n\
				 }\n\
				 \n\
				 // O(2^n): every call branches twice\n\
				 fn fib(n: u32) -> u64 {\n\
				 \x20   if n <= 1 { n as u64 } else { fib(n - 1) + fib(n - 2) }\n\
				 }",
			),
		),
		Topic::Searching => (
			"Binary search finds a value in a sorted array by halving the search range each step.\n\
			 1. Compare the target with the middle element.\n\
			 2. Stop if it matches.\n\
			 3. Otherwise continue in the half that can still contain it.\n\
			 It needs sorted data with random access. Time is O(log n); space is O(1) iteratively.",
			Some(
				"fn binary_search(values: &[i32], target: i32) -> Option<usize> {\n\
				 \x20   let (mut lo, mut hi) = (0, values.len());\n\
				 \x20   while lo < hi {\n\
				 \x20       let mid = lo + (hi - lo) / 2;\n\
				 \x20       match values[mid].cmp(&target) {\n\
				 \x20           Ordering::Equal => return Some(mid),\n\
				 \x20           Ordering::Less => lo = mid + 1,\n\
				 \x20           Ordering::Greater => hi = mid,\n\
				 \x20       }\n\
				 \x20   }\n\
				 \x20   None\n\
				 }",
			),
		),
		Topic::StacksAndQueues => (
			"Stacks and queues differ in which element leaves first.\n\
			 • Stack (LIFO): push and pop at the top. Used for call stacks, undo, expression \
			 evaluation and backtracking.\n\
			 • Queue (FIFO): enqueue at the rear, dequeue at the front. Used for BFS, scheduling \
			 and buffering.\n\
			 Both offer O(1) operations when backed by a growable array or a ring buffer.",
			Some(
				"let mut stack = vec![1, 2, 3];\n\
				 assert_eq!(stack.pop(), Some(3));\n\
				 \n\
				 let mut queue = VecDeque::from([1, 2, 3]);\n\
				 assert_eq!(queue.pop_front(), Some(1));",
			),
		),
		Topic::DynamicProgramming => (
			"Dynamic programming speeds up recursive problems by storing subproblem results.\n\
			 It applies when a problem has optimal substructure and overlapping subproblems.\n\
			 • Memoization (top-down): recurse and cache each answer.\n\
			 • Tabulation (bottom-up): fill a table from the base cases upward.\n\
			 Start by defining the state, write the recurrence, then decide the evaluation order.",
			Some(
				"fn fib(n: usize) -> u64 {\n\
				 \x20   let mut dp = vec![0u64; n.max(1) + 1];\n\
				 \x20   dp[1] = 1;\n\
				 \x20   for i in 2..=n {\n\
				 \x20       dp[i] = dp[i - 1] + dp[i - 2];\n\
				 \x20   }\n\
				 \x20   dp[n]\n\
				 }",
			),
		),
		Topic::Graphs => (
			"Graph traversal visits every reachable vertex.\n\
			 • Depth-first search goes as deep as possible before backtracking, using a stack or \
			 recursion. Good for cycle detection and topological sort.\n\
			 • Breadth-first search explores level by level with a queue, and finds shortest paths \
			 in unweighted graphs.\n\
			 Both run in O(V + E). For weighted shortest paths use Dijkstra's algorithm.",
			Some(
				"fn bfs(adj: &[Vec<usize>], start: usize) -> Vec<usize> {\n\
				 \x20   let mut seen = vec![false; adj.len()];\n\
				 \x20   let mut order = Vec::new();\n\
				 \x20   let mut queue = VecDeque::from([start]);\n\
				 \x20   seen[start] = true;\n\
				 \x20   while let Some(node) = queue.pop_front() {\n\
				 \x20       order.push(node);\n\
				 \x20       for &next in &adj[node] {\n\
				 \x20           if !seen[next] {\n\
				 \x20               seen[next] = true;\n\
				 \x20               queue.push_back(next);\n\
				 \x20           }\n\
				 \x20       }\n\
				 \x20   }\n\
				 \x20   order\n\
				 }",
			),
		),
		Topic::Interviewing => (
			"A steady approach to coding interviews:\n\
			 1. Clarify the problem and its constraints before coding.\n\
			 2. Work through a small example by hand.\n\
			 3. State a brute-force solution, then improve it.\n\
			 4. Talk through your reasoning while you code.\n\
			 5. Test with edge cases and state the complexity.\n\
			 Practise common patterns such as two pointers, sliding windows and BFS/DFS.",
			None,
		),
		Topic::Sorting => (
			"The sorting algorithms worth knowing:\n\
			 • Merge sort: O(n log n) always, stable, needs O(n) extra space.\n\
			 • Quick sort: O(n log n) on average, O(n²) worst case, in place.\n\
			 • Heap sort: O(n log n) always, in place, not stable.\n\
			 • Insertion sort: O(n²), but fast on small or nearly sorted input.\n\
			 • Radix and bucket sort: linear time for suitably bounded keys.",
			Some(
				"fn insertion_sort(values: &mut [i32]) {\n\
				 \x20   for i in 1..values.len() {\n\
				 \x20       let mut j = i;\n\
				 \x20       while j > 0 && values[j - 1] > values[j] {\n\
				 \x20           values.swap(j - 1, j);\n\
				 \x20           j -= 1;\n\
				 \x20       }\n\
				 \x20   }\n\
				 }",
			),
		),
		Topic::Default => (
			"I can help with data structures (arrays, linked lists, stacks, queues, trees, graphs, \
			 heaps, hash tables), algorithms (sorting, searching, graph traversal, dynamic \
			 programming, greedy), complexity analysis and interview preparation. Try asking about \
			 one of those.",
			None,
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quick_questions_hit_their_topics() {
		let topics: Vec<Topic> = QUICK_QUESTIONS.iter().map(|q| classify(q)).collect();
		assert_eq!(
			topics,
			vec![
				Topic::Complexity,
				Topic::Searching,
				Topic::StacksAndQueues,
				Topic::DynamicProgramming,
				Topic::Graphs,
				Topic::Interviewing,
			]
		);
	}

	#[test]
	fn earlier_rules_win() {
		assert_eq!(classify("What is the complexity of merge sort?"), Topic::Complexity);
		assert_eq!(classify("Which search algorithm for graphs?"), Topic::Searching);
		assert_eq!(classify("sorting interview tips"), Topic::Interviewing);
	}

	#[test]
	fn matching_is_case_insensitive() {
		assert_eq!(classify("  BIG O please  "), Topic::Complexity);
		assert_eq!(classify("How does BFS work"), Topic::Graphs);
		assert_eq!(classify("QuickSort?"), Topic::Sorting);
	}

	#[test]
	fn dp_needs_surrounding_spaces() {
		assert_eq!(classify("explain dp please"), Topic::DynamicProgramming);
		assert_eq!(classify("dp"), Topic::Default);
	}

	#[test]
	fn a_single_structure_is_not_enough() {
		assert_eq!(classify("how does a stack work"), Topic::Default);
		assert_eq!(classify("search"), Topic::Default);
	}

	#[test]
	fn respond_carries_code_for_technical_topics() {
		let reply = respond("explain memoization");
		assert_eq!(reply.topic, Topic::DynamicProgramming);
		assert!(reply.code_example.is_some());
		assert!(respond("hello").code_example.is_none());
	}
}
