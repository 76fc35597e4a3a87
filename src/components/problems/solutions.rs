//! Reference solutions the checker runs against each problem's cases.

use std::collections::HashMap;

use crate::components::tree::{Link, TreeNode};

/// Indices of the first pair summing to `target`, or empty if none exists.
pub fn two_sum(nums: &[i64], target: i64) -> Vec<usize> {
	let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
	for (i, &n) in nums.iter().enumerate() {
		if let Some(&j) = seen.get(&(target - n)) {
			return vec![j, i];
		}
		seen.insert(n, i);
	}
	Vec::new()
}

/// Whether every bracket in `s` is closed in order.
pub fn valid_parentheses(s: &str) -> bool {
	let mut stack = Vec::new();
	for c in s.chars() {
		let open = match c {
			')' => '(',
			']' => '[',
			'}' => '{',
			_ => {
				stack.push(c);
				continue;
			}
		};
		if stack.pop() != Some(open) {
			return false;
		}
	}
	stack.is_empty()
}

/// Values of the tree at `root`, left subtree first.
pub fn inorder_traversal(root: &Link) -> Vec<i64> {
	fn visit(link: &Link, out: &mut Vec<i64>) {
		if let Some(node) = link {
			visit(&node.left, out);
			out.push(node.value);
			visit(&node.right, out);
		}
	}
	let mut out = Vec::new();
	visit(root, &mut out);
	out
}

/// Build a tree from level-order values where `None` marks a missing child.
pub fn tree_from_level_order(values: &[Option<i64>]) -> Link {
	let leaf = |value: i64| {
		Box::new(TreeNode {
			value,
			left: None,
			right: None,
		})
	};
	let mut values = values.iter().copied();
	let mut root = values.next().flatten().map(leaf);
	let mut level: Vec<&mut Box<TreeNode>> = root.iter_mut().collect();
	while !level.is_empty() {
		let mut next = Vec::new();
		for node in level {
			let TreeNode { left, right, .. } = &mut **node;
			*left = values.next().flatten().map(leaf);
			*right = values.next().flatten().map(leaf);
			next.extend(left.iter_mut());
			next.extend(right.iter_mut());
		}
		level = next;
	}
	root
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn two_sum_examples() {
		assert_eq!(two_sum(&[2, 7, 11, 15], 9), vec![0, 1]);
		assert_eq!(two_sum(&[3, 2, 4], 6), vec![1, 2]);
		assert_eq!(two_sum(&[3, 3], 6), vec![0, 1]);
		assert!(two_sum(&[1, 2], 7).is_empty());
	}

	#[test]
	fn parentheses() {
		assert!(valid_parentheses("()[]{}"));
		assert!(valid_parentheses("{[()]}"));
		assert!(valid_parentheses(""));
		assert!(!valid_parentheses("(]"));
		assert!(!valid_parentheses("(("));
		assert!(!valid_parentheses(")"));
	}

	#[test]
	fn level_order_round_trips_through_inorder() {
		let tree = tree_from_level_order(&[Some(1), None, Some(2), Some(3)]);
		assert_eq!(inorder_traversal(&tree), vec![1, 3, 2]);
		assert!(tree_from_level_order(&[]).is_none());
		assert!(tree_from_level_order(&[None]).is_none());
	}
}
