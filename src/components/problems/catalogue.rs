use std::fmt;

use super::solutions::{inorder_traversal, tree_from_level_order, two_sum, valid_parentheses};

/// Problem difficulty label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
	/// Warm-up problem.
	Easy,
	/// Needs a known technique.
	Medium,
}

impl fmt::Display for Difficulty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Easy => "Easy",
			Self::Medium => "Medium",
		})
	}
}

/// Arguments of one test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseInput {
	/// Numbers and the sum two of them must reach.
	TwoSum {
		/// Candidate numbers.
		nums: Vec<i64>,
		/// Sum to reach.
		target: i64,
	},
	/// String of brackets to validate.
	Brackets(&'static str),
	/// Level-order tree, `None` for a missing node.
	Tree(Vec<Option<i64>>),
}

/// A value a solution can return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
	/// Index pairs, as two sum returns.
	Indices(Vec<usize>),
	/// Yes or no.
	Bool(bool),
	/// Values in traversal order.
	Values(Vec<i64>),
}

fn list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
	f.write_str("[")?;
	for (i, item) in items.iter().enumerate() {
		if i > 0 {
			f.write_str(",")?;
		}
		write!(f, "{item}")?;
	}
	f.write_str("]")
}

impl fmt::Display for CaseInput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::TwoSum { nums, target } => {
				f.write_str("nums = ")?;
				list(f, nums.as_slice())?;
				write!(f, ", target = {target}")
			}
			Self::Brackets(s) => write!(f, "s = \"{s}\""),
			Self::Tree(values) => {
				let shown: Vec<String> = values
					.iter()
					.map(|v| v.map_or_else(|| "null".to_string(), |v| v.to_string()))
					.collect();
				f.write_str("root = ")?;
				list(f, &shown)
			}
		}
	}
}

impl fmt::Display for Answer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Indices(v) => list(f, v.as_slice()),
			Self::Bool(b) => write!(f, "{b}"),
			Self::Values(v) => list(f, v.as_slice()),
		}
	}
}

/// One input with its expected answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
	/// Arguments passed to the solution.
	pub input: CaseInput,
	/// Answer the solution must return.
	pub expected: Answer,
}

/// Result of running the reference solution on one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseOutcome {
	/// 1-based case number.
	pub index: usize,
	/// Arguments passed to the solution.
	pub input: CaseInput,
	/// Answer the solution should have returned.
	pub expected: Answer,
	/// What the reference solution returned.
	pub actual: Answer,
	/// Whether `actual` equals `expected`.
	pub passed: bool,
}

/// A problem statement with its hidden test cases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
	/// Short name.
	pub title: &'static str,
	/// Difficulty label.
	pub difficulty: Difficulty,
	/// Statement shown to the user.
	pub description: &'static str,
	/// Worked example.
	pub example: &'static str,
	/// Nudge towards the approach.
	pub hint: &'static str,
	/// Rust listing of the reference solution, shown on request.
	pub solution: &'static str,
	/// Hidden test cases.
	pub cases: Vec<TestCase>,
}

impl Problem {
	/// Run the reference solution against every case.
	pub fn check(&self) -> Vec<CaseOutcome> {
		self.cases
			.iter()
			.enumerate()
			.map(|(i, case)| {
				let actual = solve(&case.input);
				CaseOutcome {
					index: i + 1,
					input: case.input.clone(),
					passed: actual == case.expected,
					expected: case.expected.clone(),
					actual,
				}
			})
			.collect()
	}
}

fn solve(input: &CaseInput) -> Answer {
	match input {
		CaseInput::TwoSum { nums, target } => Answer::Indices(two_sum(nums, *target)),
		CaseInput::Brackets(s) => Answer::Bool(valid_parentheses(s)),
		CaseInput::Tree(values) => Answer::Values(inorder_traversal(&tree_from_level_order(values))),
	}
}

fn two_sum_case(nums: &[i64], target: i64, expected: [usize; 2]) -> TestCase {
	TestCase {
		input: CaseInput::TwoSum {
			nums: nums.to_vec(),
			target,
		},
		expected: Answer::Indices(expected.to_vec()),
	}
}

fn brackets_case(s: &'static str, expected: bool) -> TestCase {
	TestCase {
		input: CaseInput::Brackets(s),
		expected: Answer::Bool(expected),
	}
}

fn tree_case(values: &[Option<i64>], expected: &[i64]) -> TestCase {
	TestCase {
		input: CaseInput::Tree(values.to_vec()),
		expected: Answer::Values(expected.to_vec()),
	}
}

/// The problems offered on the practice page.
pub fn catalogue() -> Vec<Problem> {
	vec![
		Problem {
			title: "Two Sum",
			difficulty: Difficulty::Easy,
			description: "Given an array of integers nums and an integer target, return indices of \
				the two numbers such that they add up to target.",
			example: "Input: nums = [2,7,11,15], target = 9\nOutput: [0,1]",
			hint: "Use a hash map to store numbers and their indices as you iterate through the array.",
			solution: "fn two_sum(nums: &[i64], target: i64) -> Vec<usize> {\n\
				\x20   let mut seen = HashMap::new();\n\
				\x20   for (i, &n) in nums.iter().enumerate() {\n\
				\x20       if let Some(&j) = seen.get(&(target - n)) {\n\
				\x20           return vec![j, i];\n\
				\x20       }\n\
				\x20       seen.insert(n, i);\n\
				\x20   }\n\
				\x20   Vec::new()\n\
				}",
			cases: vec![
				two_sum_case(&[2, 7, 11, 15], 9, [0, 1]),
				two_sum_case(&[3, 2, 4], 6, [1, 2]),
				two_sum_case(&[3, 3], 6, [0, 1]),
			],
		},
		Problem {
			title: "Valid Parentheses",
			difficulty: Difficulty::Easy,
			description: "Given a string s containing just the characters '(', ')', '{', '}', '[' \
				and ']', determine if the input string is valid.",
			example: "Input: s = \"()[]{}\"\nOutput: true",
			hint: "Use a stack to keep track of opening brackets and match them with closing brackets.",
			solution: "fn is_valid(s: &str) -> bool {\n\
				\x20   let mut stack = Vec::new();\n\
				\x20   for c in s.chars() {\n\
				\x20       let open = match c {\n\
				\x20           ')' => '(',\n\
				\x20           ']' => '[',\n\
				\x20           '}' => '{',\n\
				\x20           _ => { stack.push(c); continue; }\n\
				\x20       };\n\
				\x20       if stack.pop() != Some(open) {\n\
				\x20           return false;\n\
				\x20       }\n\
				\x20   }\n\
				\x20   stack.is_empty()\n\
				}",
			cases: vec![
				brackets_case("()", true),
				brackets_case("()[]{}", true),
				brackets_case("(]", false),
			],
		},
		Problem {
			title: "Binary Tree Inorder Traversal",
			difficulty: Difficulty::Medium,
			description: "Given the root of a binary tree, return the inorder traversal of its nodes' values.",
			example: "Input: root = [1,null,2,3]\nOutput: [1,3,2]",
			hint: "Use recursion: visit left subtree, process current node, then visit right subtree.",
			solution: "fn inorder(node: &Option<Box<TreeNode>>, out: &mut Vec<i64>) {\n\
				\x20   if let Some(node) = node {\n\
				\x20       inorder(&node.left, out);\n\
				\x20       out.push(node.value);\n\
				\x20       inorder(&node.right, out);\n\
				\x20   }\n\
				}",
			cases: vec![
				tree_case(&[], &[]),
				tree_case(&[Some(1)], &[1]),
				tree_case(&[Some(1), None, Some(2), Some(3)], &[1, 3, 2]),
			],
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_reference_solution_passes() {
		for problem in catalogue() {
			let outcomes = problem.check();
			assert_eq!(outcomes.len(), problem.cases.len());
			assert!(outcomes.iter().all(|o| o.passed), "{} failed: {outcomes:?}", problem.title);
		}
	}

	#[test]
	fn two_sum_first_case() {
		let problems = catalogue();
		let outcome = &problems[0].check()[0];
		assert_eq!(outcome.index, 1);
		assert_eq!(outcome.actual, Answer::Indices(vec![0, 1]));
		assert_eq!(outcome.input.to_string(), "nums = [2,7,11,15], target = 9");
	}

	#[test]
	fn mismatches_are_reported() {
		let problem = Problem {
			cases: vec![brackets_case("(]", true)],
			..catalogue().remove(1)
		};
		let outcome = &problem.check()[0];
		assert!(!outcome.passed);
		assert_eq!(outcome.actual.to_string(), "false");
	}

	#[test]
	fn tree_inputs_render_nulls() {
		let input = CaseInput::Tree(vec![Some(1), None, Some(2)]);
		assert_eq!(input.to_string(), "root = [1,null,2]");
	}
}
