//! Tabulated dynamic-programming walkthroughs.

/// Final answer, the filled table, and one narrated step per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpOutcome {
	/// Value of the optimal solution.
	pub answer: u64,
	/// Filled table, row by row.
	pub table: Vec<Vec<u64>>,
	/// One line per filled cell.
	pub steps: Vec<String>,
}

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI: usize = 93;

/// Bottom-up Fibonacci, `n` capped at [`MAX_FIBONACCI`].
pub fn fibonacci(n: usize) -> DpOutcome {
	let n = n.min(MAX_FIBONACCI);
	let mut dp = vec![0u64; n + 1];
	let mut steps = vec!["Initializing DP table...".to_string()];
	if n == 0 {
		steps.push("dp[0] = 0".to_string());
	} else {
		dp[1] = 1;
		steps.push("dp[0] = 0, dp[1] = 1".to_string());
	}
	for i in 2..=n {
		dp[i] = dp[i - 1] + dp[i - 2];
		steps.push(format!(
			"dp[{i}] = dp[{}] + dp[{}] = {} + {} = {}",
			i - 1,
			i - 2,
			dp[i - 1],
			dp[i - 2],
			dp[i]
		));
	}
	DpOutcome {
		answer: dp[n],
		table: vec![dp],
		steps,
	}
}

/// Item weights of the sample knapsack.
pub const KNAPSACK_WEIGHTS: [usize; 4] = [1, 3, 4, 5];
/// Item values of the sample knapsack.
pub const KNAPSACK_VALUES: [u64; 4] = [1, 4, 5, 7];
/// Capacity of the sample knapsack.
pub const KNAPSACK_CAPACITY: usize = 7;

/// 0/1 knapsack. Extra weights or values beyond the shorter slice are ignored.
pub fn knapsack(weights: &[usize], values: &[u64], capacity: usize) -> DpOutcome {
	let n = weights.len().min(values.len());
	let join = |xs: Vec<String>| xs.join(", ");
	let mut steps = vec![
		format!(
			"Items: weights=[{}], values=[{}]",
			join(weights[..n].iter().map(ToString::to_string).collect()),
			join(values[..n].iter().map(ToString::to_string).collect())
		),
		format!("Knapsack capacity: {capacity}"),
		"Building DP table...".to_string(),
	];
	let mut dp = vec![vec![0u64; capacity + 1]; n + 1];
	for i in 1..=n {
		let (weight, value) = (weights[i - 1], values[i - 1]);
		for w in 1..=capacity {
			if weight <= w {
				let include = value + dp[i - 1][w - weight];
				let exclude = dp[i - 1][w];
				dp[i][w] = include.max(exclude);
				let choice = if include > exclude { "include" } else { "exclude" };
				steps.push(format!(
					"dp[{i}][{w}] = max(include={include}, exclude={exclude}) = {} ({choice} item {i})",
					dp[i][w]
				));
			} else {
				dp[i][w] = dp[i - 1][w];
				steps.push(format!("dp[{i}][{w}] = {} (item {i} too heavy)", dp[i][w]));
			}
		}
	}
	DpOutcome {
		answer: dp[n][capacity],
		table: dp,
		steps,
	}
}

/// Length of the longest common subsequence of `a` and `b`.
pub fn longest_common_subsequence(a: &str, b: &str) -> DpOutcome {
	let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
	let (m, n) = (a.len(), b.len());
	let mut steps = vec![
		format!("String 1: \"{}\"", a.iter().collect::<String>()),
		format!("String 2: \"{}\"", b.iter().collect::<String>()),
		"Building LCS table...".to_string(),
	];
	let mut dp = vec![vec![0u64; n + 1]; m + 1];
	for i in 1..=m {
		for j in 1..=n {
			let (x, y) = (a[i - 1], b[j - 1]);
			if x == y {
				dp[i][j] = dp[i - 1][j - 1] + 1;
				steps.push(format!(
					"{x} == {y}: dp[{i}][{j}] = dp[{}][{}] + 1 = {}",
					i - 1,
					j - 1,
					dp[i][j]
				));
			} else {
				dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
				steps.push(format!(
					"{x} != {y}: dp[{i}][{j}] = max(dp[{}][{j}], dp[{i}][{}]) = {}",
					i - 1,
					j - 1,
					dp[i][j]
				));
			}
		}
	}
	DpOutcome {
		answer: dp[m][n],
		table: dp,
		steps,
	}
}

/// Levenshtein distance with unit-cost replace, insert and delete.
pub fn edit_distance(from: &str, to: &str) -> DpOutcome {
	let (a, b): (Vec<char>, Vec<char>) = (from.chars().collect(), to.chars().collect());
	let (m, n) = (a.len(), b.len());
	let mut steps = vec![
		format!("Transform \"{from}\" to \"{to}\""),
		"Initializing base cases...".to_string(),
	];
	let mut dp = vec![vec![0u64; n + 1]; m + 1];
	for (i, row) in dp.iter_mut().enumerate() {
		row[0] = i as u64;
	}
	for (j, cell) in dp[0].iter_mut().enumerate() {
		*cell = j as u64;
	}
	steps.push("Base cases: dp[i][0] = i (deletions), dp[0][j] = j (insertions)".to_string());
	for i in 1..=m {
		for j in 1..=n {
			let (x, y) = (a[i - 1], b[j - 1]);
			if x == y {
				dp[i][j] = dp[i - 1][j - 1];
				steps.push(format!(
					"{x} == {y}: dp[{i}][{j}] = dp[{}][{}] = {} (no operation)",
					i - 1,
					j - 1,
					dp[i][j]
				));
			} else {
				let replace = dp[i - 1][j - 1] + 1;
				let insert = dp[i][j - 1] + 1;
				let remove = dp[i - 1][j] + 1;
				dp[i][j] = replace.min(insert).min(remove);
				steps.push(format!(
					"{x} != {y}: dp[{i}][{j}] = min(replace={replace}, insert={insert}, delete={remove}) = {}",
					dp[i][j]
				));
			}
		}
	}
	DpOutcome {
		answer: dp[m][n],
		table: dp,
		steps,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fibonacci_table() {
		let outcome = fibonacci(8);
		assert_eq!(outcome.answer, 21);
		assert_eq!(outcome.table[0], vec![0, 1, 1, 2, 3, 5, 8, 13, 21]);
		assert_eq!(outcome.steps.last().map(String::as_str), Some("dp[8] = dp[7] + dp[6] = 13 + 8 = 21"));
		assert_eq!(fibonacci(0).answer, 0);
		assert_eq!(fibonacci(1).answer, 1);
	}

	#[test]
	fn fibonacci_caps_before_overflow() {
		assert_eq!(fibonacci(500).answer, 12_200_160_415_121_876_738);
	}

	#[test]
	fn knapsack_classic() {
		let outcome = knapsack(&KNAPSACK_WEIGHTS, &KNAPSACK_VALUES, KNAPSACK_CAPACITY);
		assert_eq!(outcome.answer, 9);
		assert_eq!(outcome.table.len(), 5);
		assert_eq!(outcome.steps.len(), 3 + 4 * 7);
	}

	#[test]
	fn knapsack_zero_capacity() {
		assert_eq!(knapsack(&KNAPSACK_WEIGHTS, &KNAPSACK_VALUES, 0).answer, 0);
	}

	#[test]
	fn lcs_classic() {
		assert_eq!(longest_common_subsequence("ABCDGH", "AEDFHR").answer, 3);
		assert_eq!(longest_common_subsequence("", "ABC").answer, 0);
	}

	#[test]
	fn edit_distance_classic() {
		assert_eq!(edit_distance("SUNDAY", "SATURDAY").answer, 3);
		assert_eq!(edit_distance("", "abc").answer, 3);
		assert_eq!(edit_distance("kitten", "kitten").answer, 0);
	}
}
