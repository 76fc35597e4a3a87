use super::dynamic::{self, DpOutcome};
use super::greedy;
use super::recursion::{self, Recursion};

/// Lesson groups, one player each on the lessons page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
	/// Locally optimal choices.
	Greedy,
	/// Tabulated subproblems.
	Dynamic,
	/// Problems reduced to smaller copies of themselves.
	Recursion,
}

/// Every walkthrough the lessons page can play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lesson {
	/// Greedy change-making with US coins.
	#[default]
	CoinChange,
	/// Earliest-finish activity scheduling.
	ActivitySelection,
	/// Knapsack that may take part of an item.
	FractionalKnapsack,
	/// Prefix-free codes from symbol frequencies.
	Huffman,
	/// Bottom-up Fibonacci table.
	Fibonacci,
	/// 0/1 knapsack table.
	Knapsack,
	/// Longest common subsequence table.
	Lcs,
	/// Levenshtein distance table.
	EditDistance,
	/// `n!` through its call stack.
	Factorial,
	/// Top-down Fibonacci with a memo.
	MemoFibonacci,
	/// Tower of Hanoi move list.
	Hanoi,
	/// Recursive halving of a sorted array.
	BinarySearch,
}

/// A finished lesson run: one-line result plus the steps to narrate.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonRun {
	/// Result line shown under the steps.
	pub summary: String,
	/// Narration, played one entry at a time.
	pub steps: Vec<String>,
	/// DP table rows; empty for lessons without one.
	pub table: Vec<Vec<u64>>,
}

impl Lesson {
	/// Every lesson, grouped by family.
	pub const ALL: [Self; 12] = [
		Self::CoinChange,
		Self::ActivitySelection,
		Self::FractionalKnapsack,
		Self::Huffman,
		Self::Fibonacci,
		Self::Knapsack,
		Self::Lcs,
		Self::EditDistance,
		Self::Factorial,
		Self::MemoFibonacci,
		Self::Hanoi,
		Self::BinarySearch,
	];

	/// Lessons belonging to `family`, in catalogue order.
	pub fn of(family: Family) -> impl Iterator<Item = Self> {
		Self::ALL.into_iter().filter(move |l| l.family() == family)
	}

	/// Group this lesson is played in.
	pub fn family(self) -> Family {
		match self {
			Self::CoinChange | Self::ActivitySelection | Self::FractionalKnapsack | Self::Huffman => {
				Family::Greedy
			}
			Self::Fibonacci | Self::Knapsack | Self::Lcs | Self::EditDistance => Family::Dynamic,
			Self::Factorial | Self::MemoFibonacci | Self::Hanoi | Self::BinarySearch => {
				Family::Recursion
			}
		}
	}

	/// Stable identifier used as the `<option>` value.
	pub fn id(self) -> &'static str {
		match self {
			Self::CoinChange => "coin-change",
			Self::ActivitySelection => "activity-selection",
			Self::FractionalKnapsack => "fractional-knapsack",
			Self::Huffman => "huffman",
			Self::Fibonacci => "fibonacci",
			Self::Knapsack => "knapsack",
			Self::Lcs => "lcs",
			Self::EditDistance => "edit-distance",
			Self::Factorial => "factorial",
			Self::MemoFibonacci => "memo-fibonacci",
			Self::Hanoi => "tower-of-hanoi",
			Self::BinarySearch => "binary-search",
		}
	}

	/// Inverse of [`Lesson::id`].
	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|l| l.id() == id)
	}

	/// Display name.
	pub fn name(self) -> &'static str {
		match self {
			Self::CoinChange => "Coin Change",
			Self::ActivitySelection => "Activity Selection",
			Self::FractionalKnapsack => "Fractional Knapsack",
			Self::Huffman => "Huffman Coding",
			Self::Fibonacci => "Fibonacci DP",
			Self::Knapsack => "0/1 Knapsack",
			Self::Lcs => "Longest Common Subsequence",
			Self::EditDistance => "Edit Distance",
			Self::Factorial => "Factorial",
			Self::MemoFibonacci => "Fibonacci",
			Self::Hanoi => "Tower of Hanoi",
			Self::BinarySearch => "Binary Search",
		}
	}

	/// One-line summary of what the lesson computes.
	pub fn description(self) -> &'static str {
		match self {
			Self::CoinChange => "Find minimum coins needed",
			Self::ActivitySelection => "Select maximum non-overlapping activities",
			Self::FractionalKnapsack => "Maximize value with weight constraint",
			Self::Huffman => "Optimal prefix-free coding",
			Self::Fibonacci => "Calculate Fibonacci with memoization",
			Self::Knapsack => "Maximize value with weight constraint",
			Self::Lcs => "Find LCS of two strings",
			Self::EditDistance => "Minimum operations to transform strings",
			Self::Factorial => "Calculate n! recursively",
			Self::MemoFibonacci => "Calculate Fibonacci numbers",
			Self::Hanoi => "Solve Tower of Hanoi puzzle",
			Self::BinarySearch => "Search in sorted array",
		}
	}

	/// Label of the numeric input, for lessons that take one.
	pub fn input_label(self) -> Option<&'static str> {
		match self {
			Self::CoinChange => Some("Amount (cents)"),
			Self::Fibonacci | Self::Factorial | Self::MemoFibonacci => Some("n"),
			Self::Hanoi => Some("Disks"),
			Self::BinarySearch => Some("Target"),
			_ => None,
		}
	}

	/// Input the lesson starts with.
	pub fn default_input(self) -> u32 {
		match self {
			Self::CoinChange => 67,
			Self::Fibonacci => 8,
			Self::Factorial | Self::MemoFibonacci | Self::Hanoi | Self::BinarySearch => 5,
			_ => 0,
		}
	}

	/// Run the lesson. `input` is ignored by lessons with fixed data.
	pub fn run(self, input: u32) -> LessonRun {
		match self {
			Self::CoinChange => {
				let change = greedy::coin_change(input, &greedy::US_COINS);
				LessonRun {
					summary: format!("Total coins: {}", change.total_coins),
					steps: change.steps,
					table: Vec::new(),
				}
			}
			Self::ActivitySelection => {
				let result = greedy::activity_selection(&greedy::ACTIVITIES);
				LessonRun {
					summary: format!("Selected activities: {}", result.selected.len()),
					steps: result.steps,
					table: Vec::new(),
				}
			}
			Self::FractionalKnapsack => {
				let result =
					greedy::fractional_knapsack(&greedy::KNAPSACK_ITEMS, greedy::KNAPSACK_CAPACITY);
				LessonRun {
					summary: format!("Total value: {:.1}", result.total_value),
					steps: result.steps,
					table: Vec::new(),
				}
			}
			Self::Huffman => {
				let result = greedy::huffman(&greedy::HUFFMAN_FREQUENCIES);
				LessonRun {
					summary: format!("Symbols encoded: {}", result.codes.len()),
					steps: result.steps,
					table: Vec::new(),
				}
			}
			Self::Fibonacci => dp_run(dynamic::fibonacci(input as usize)),
			Self::Knapsack => dp_run(dynamic::knapsack(
				&dynamic::KNAPSACK_WEIGHTS,
				&dynamic::KNAPSACK_VALUES,
				dynamic::KNAPSACK_CAPACITY,
			)),
			Self::Lcs => dp_run(dynamic::longest_common_subsequence("ABCDGH", "AEDFHR")),
			Self::EditDistance => dp_run(dynamic::edit_distance("SUNDAY", "SATURDAY")),
			Self::Factorial => {
				let n = u64::from(input).min(recursion::MAX_FACTORIAL);
				recursion_run(recursion::factorial(n), |r| format!("{n}! = {r}"))
			}
			Self::MemoFibonacci => {
				let n = u64::from(input).min(recursion::MAX_FIBONACCI);
				recursion_run(recursion::fibonacci(n), |r| format!("Fibonacci({n}) = {r}"))
			}
			Self::Hanoi => recursion_run(recursion::hanoi(input), |r| format!("{r} moves required")),
			Self::BinarySearch => {
				let target = i64::from(input);
				recursion_run(
					recursion::binary_search(&recursion::SEARCH_VALUES, target),
					|found| match found {
						Some(index) => format!("Found at index {index}"),
						None => format!("{target} not found"),
					},
				)
			}
		}
	}
}

fn recursion_run<T>(outcome: Recursion<T>, summary: impl FnOnce(T) -> String) -> LessonRun {
	LessonRun {
		summary: summary(outcome.answer),
		steps: outcome.steps,
		table: Vec::new(),
	}
}

fn dp_run(outcome: DpOutcome) -> LessonRun {
	LessonRun {
		summary: format!("Result: {}", outcome.answer),
		steps: outcome.steps,
		table: outcome.table,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn families_partition_lessons() {
		assert_eq!(Lesson::of(Family::Greedy).count(), 4);
		assert_eq!(Lesson::of(Family::Dynamic).count(), 4);
		assert_eq!(Lesson::of(Family::Recursion).count(), 4);
		for lesson in Lesson::ALL {
			assert_eq!(Lesson::from_id(lesson.id()), Some(lesson));
		}
	}

	#[test]
	fn every_lesson_narrates() {
		for lesson in Lesson::ALL {
			let run = lesson.run(lesson.default_input());
			assert!(!run.steps.is_empty(), "{} has no steps", lesson.name());
		}
		assert_eq!(Lesson::CoinChange.run(67).summary, "Total coins: 6");
		assert_eq!(Lesson::Knapsack.run(0).summary, "Result: 9");
		assert_eq!(Lesson::Fibonacci.run(10).summary, "Result: 55");
	}

	#[test]
	fn recursion_summaries() {
		assert_eq!(Lesson::Factorial.run(5).summary, "5! = 120");
		assert_eq!(Lesson::Factorial.run(40).summary, "20! = 2432902008176640000");
		assert_eq!(Lesson::MemoFibonacci.run(10).summary, "Fibonacci(10) = 55");
		assert_eq!(Lesson::Hanoi.run(3).summary, "7 moves required");
		assert_eq!(Lesson::Hanoi.run(3).steps.len(), 7);
		assert_eq!(Lesson::BinarySearch.run(12).summary, "Found at index 6");
		assert_eq!(Lesson::BinarySearch.run(5).summary, "5 not found");
	}
}
