//! Recursive walkthroughs, narrated in call order as the recursion unwinds.

use std::collections::HashMap;

/// Largest `n` whose factorial fits in `u64`.
pub const MAX_FACTORIAL: u64 = 20;
/// Largest memoized Fibonacci index that fits in `u64`.
pub const MAX_FIBONACCI: u64 = 93;
/// Tower of Hanoi is kept small enough to read move by move.
pub const MAX_DISKS: u32 = 4;
/// Sorted array searched by the binary search walkthrough.
pub const SEARCH_VALUES: [i64; 10] = [0, 2, 4, 6, 8, 10, 12, 14, 16, 18];

/// Result of a recursive walkthrough plus its narrated calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recursion<T> {
	/// Value returned by the outermost call.
	pub answer: T,
	/// One line per call, base case or combination.
	pub steps: Vec<String>,
}

/// `n!`, with `n` capped at [`MAX_FACTORIAL`].
pub fn factorial(n: u64) -> Recursion<u64> {
	let mut steps = Vec::new();
	let answer = factorial_call(n.min(MAX_FACTORIAL), &mut steps);
	Recursion { answer, steps }
}

fn factorial_call(n: u64, steps: &mut Vec<String>) -> u64 {
	steps.push(format!("factorial({n})"));
	if n <= 1 {
		steps.push(format!("Base case: factorial({n}) = 1"));
		return 1;
	}
	let inner = factorial_call(n - 1, steps);
	let result = n * inner;
	steps.push(format!(
		"factorial({n}) = {n} × factorial({}) = {n} × {inner} = {result}",
		n - 1
	));
	result
}

/// Top-down Fibonacci with a memo, `n` capped at [`MAX_FIBONACCI`].
pub fn fibonacci(n: u64) -> Recursion<u64> {
	let mut steps = Vec::new();
	let mut memo = HashMap::new();
	let answer = fibonacci_call(n.min(MAX_FIBONACCI), &mut memo, &mut steps);
	Recursion { answer, steps }
}

fn fibonacci_call(n: u64, memo: &mut HashMap<u64, u64>, steps: &mut Vec<String>) -> u64 {
	steps.push(format!("fib({n})"));
	if let Some(&known) = memo.get(&n) {
		steps.push(format!("Memoized: fib({n}) = {known}"));
		return known;
	}
	if n <= 1 {
		memo.insert(n, n);
		steps.push(format!("Base case: fib({n}) = {n}"));
		return n;
	}
	let a = fibonacci_call(n - 1, memo, steps);
	let b = fibonacci_call(n - 2, memo, steps);
	let result = a + b;
	memo.insert(n, result);
	steps.push(format!(
		"fib({n}) = fib({}) + fib({}) = {a} + {b} = {result}",
		n - 1,
		n - 2
	));
	result
}

/// Moves that shift `disks` disks from peg A to peg C. The answer is the
/// move count; `disks` is clamped to `1..=MAX_DISKS`.
pub fn hanoi(disks: u32) -> Recursion<u64> {
	let mut steps = Vec::new();
	hanoi_call(disks.clamp(1, MAX_DISKS), 'A', 'C', 'B', &mut steps);
	Recursion {
		answer: steps.len() as u64,
		steps,
	}
}

fn hanoi_call(n: u32, from: char, to: char, via: char, moves: &mut Vec<String>) {
	if n == 0 {
		return;
	}
	hanoi_call(n - 1, from, via, to, moves);
	moves.push(format!("Move disk {n} from {from} to {to}"));
	hanoi_call(n - 1, via, to, from, moves);
}

/// Recursive binary search over a sorted slice.
pub fn binary_search(values: &[i64], target: i64) -> Recursion<Option<usize>> {
	let mut steps = Vec::new();
	let answer = search_call(values, target, 0, values.len(), &mut steps);
	Recursion { answer, steps }
}

// `end` is exclusive; ranges are narrated inclusively.
fn search_call(
	values: &[i64],
	target: i64,
	start: usize,
	end: usize,
	steps: &mut Vec<String>,
) -> Option<usize> {
	if start >= end {
		steps.push(format!("Element {target} not found in array"));
		return None;
	}
	let last = end - 1;
	let mid = (start + last) / 2;
	let value = values[mid];
	steps.push(format!(
		"Searching range [{start}, {last}], mid = {mid}, arr[{mid}] = {value}"
	));
	if value == target {
		steps.push(format!("Found {target} at index {mid}"));
		Some(mid)
	} else if value > target {
		steps.push(format!("{value} > {target}, search left half"));
		search_call(values, target, start, mid, steps)
	} else {
		steps.push(format!("{value} < {target}, search right half"));
		search_call(values, target, mid + 1, end, steps)
	}
}
