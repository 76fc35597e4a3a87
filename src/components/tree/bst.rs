use std::cmp::Ordering;

/// One node of a [`Bst`]; children are owned by their parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
	/// Key stored at this node.
	pub value: i64,
	/// Subtree of smaller values.
	pub left: Link,
	/// Subtree of larger values.
	pub right: Link,
}

/// Owned, possibly empty subtree.
pub type Link = Option<Box<TreeNode>>;

impl TreeNode {
	fn leaf(value: i64) -> Box<Self> {
		Box::new(Self {
			value,
			left: None,
			right: None,
		})
	}
}

/// Depth-first visiting orders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalOrder {
	/// Left, node, right.
	#[default]
	InOrder,
	/// Node, left, right.
	PreOrder,
	/// Left, right, node.
	PostOrder,
}

impl TraversalOrder {
	/// Every order, in menu order.
	pub const ALL: [Self; 3] = [Self::InOrder, Self::PreOrder, Self::PostOrder];

	/// Stable identifier used as the `<option>` value.
	pub fn id(self) -> &'static str {
		match self {
			Self::InOrder => "inorder",
			Self::PreOrder => "preorder",
			Self::PostOrder => "postorder",
		}
	}

	/// Inverse of [`TraversalOrder::id`].
	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|o| o.id() == id)
	}

	/// Display name.
	pub fn name(self) -> &'static str {
		match self {
			Self::InOrder => "In-order Traversal",
			Self::PreOrder => "Pre-order Traversal",
			Self::PostOrder => "Post-order Traversal",
		}
	}
}

/// Binary search tree of distinct integers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bst {
	/// Top of the tree; `None` when empty.
	pub root: Link,
}

impl Bst {
	/// Empty tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert `values` in order, skipping duplicates.
	pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
		let mut tree = Self::new();
		for value in values {
			tree.insert(value);
		}
		tree
	}

	/// The tree every visualizer session starts with.
	pub fn sample() -> Self {
		Self::from_values([50, 30, 70, 20, 40, 60, 80])
	}

	/// Insert `value`; returns `false` if it was already present.
	pub fn insert(&mut self, value: i64) -> bool {
		let mut link = &mut self.root;
		while let Some(node) = link {
			link = match value.cmp(&node.value) {
				Ordering::Less => &mut node.left,
				Ordering::Greater => &mut node.right,
				Ordering::Equal => return false,
			};
		}
		*link = Some(TreeNode::leaf(value));
		true
	}

	/// Remove `value`; returns `false` if it was not present.
	pub fn delete(&mut self, value: i64) -> bool {
		delete_from(&mut self.root, value)
	}

	/// Whether `value` is stored.
	pub fn contains(&self, value: i64) -> bool {
		self.search_path(value).1
	}

	/// Values visited while descending towards `value`, and whether it was found.
	pub fn search_path(&self, value: i64) -> (Vec<i64>, bool) {
		let mut path = Vec::new();
		let mut link = &self.root;
		while let Some(node) = link {
			path.push(node.value);
			link = match value.cmp(&node.value) {
				Ordering::Less => &node.left,
				Ordering::Greater => &node.right,
				Ordering::Equal => return (path, true),
			};
		}
		(path, false)
	}

	/// Values in `order`.
	pub fn traversal(&self, order: TraversalOrder) -> Vec<i64> {
		let mut out = Vec::with_capacity(self.len());
		walk(&self.root, order, &mut out);
		out
	}

	/// Remove every node.
	pub fn clear(&mut self) {
		self.root = None;
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		count(&self.root)
	}

	/// Whether the tree has no nodes.
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Number of levels; an empty tree has height 0.
	pub fn height(&self) -> usize {
		height(&self.root)
	}
}

fn delete_from(link: &mut Link, value: i64) -> bool {
	let Some(node) = link else {
		return false;
	};
	match value.cmp(&node.value) {
		Ordering::Less => delete_from(&mut node.left, value),
		Ordering::Greater => delete_from(&mut node.right, value),
		Ordering::Equal => {
			match (node.left.take(), node.right.take()) {
				(None, child) | (child, None) => *link = child,
				(Some(left), Some(right)) => {
					node.left = Some(left);
					node.right = Some(right);
					let successor = min_value(&node.right).unwrap_or(node.value);
					node.value = successor;
					delete_from(&mut node.right, successor);
				}
			}
			true
		}
	}
}

fn min_value(link: &Link) -> Option<i64> {
	let mut node = link.as_deref()?;
	while let Some(left) = node.left.as_deref() {
		node = left;
	}
	Some(node.value)
}

fn walk(link: &Link, order: TraversalOrder, out: &mut Vec<i64>) {
	let Some(node) = link else {
		return;
	};
	if order == TraversalOrder::PreOrder {
		out.push(node.value);
	}
	walk(&node.left, order, out);
	if order == TraversalOrder::InOrder {
		out.push(node.value);
	}
	walk(&node.right, order, out);
	if order == TraversalOrder::PostOrder {
		out.push(node.value);
	}
}

fn count(link: &Link) -> usize {
	link.as_ref()
		.map_or(0, |node| 1 + count(&node.left) + count(&node.right))
}

fn height(link: &Link) -> usize {
	link.as_ref()
		.map_or(0, |node| 1 + height(&node.left).max(height(&node.right)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_traversals() {
		let tree = Bst::sample();
		assert_eq!(tree.traversal(TraversalOrder::InOrder), vec![20, 30, 40, 50, 60, 70, 80]);
		assert_eq!(tree.traversal(TraversalOrder::PreOrder), vec![50, 30, 20, 40, 70, 60, 80]);
		assert_eq!(tree.traversal(TraversalOrder::PostOrder), vec![20, 40, 30, 60, 80, 70, 50]);
		assert_eq!(tree.len(), 7);
		assert_eq!(tree.height(), 3);
	}

	#[test]
	fn duplicates_are_ignored() {
		let mut tree = Bst::sample();
		assert!(!tree.insert(40));
		assert_eq!(tree.len(), 7);
		assert!(tree.insert(45));
		assert_eq!(tree.search_path(45), (vec![50, 30, 40, 45], true));
	}

	#[test]
	fn delete_two_children_uses_successor() {
		let mut tree = Bst::sample();
		assert!(tree.delete(50));
		assert_eq!(tree.root.as_ref().map(|n| n.value), Some(60));
		assert_eq!(tree.traversal(TraversalOrder::InOrder), vec![20, 30, 40, 60, 70, 80]);
		assert!(!tree.contains(50));
	}

	#[test]
	fn delete_leaf_and_single_child() {
		let mut tree = Bst::sample();
		assert!(tree.delete(20));
		assert!(tree.delete(30));
		assert_eq!(tree.traversal(TraversalOrder::PreOrder), vec![50, 40, 70, 60, 80]);
		assert!(!tree.delete(999));
	}

	#[test]
	fn search_miss_reports_path() {
		let tree = Bst::sample();
		assert_eq!(tree.search_path(65), (vec![50, 70, 60], false));
		assert_eq!(Bst::new().search_path(1), (vec![], false));
	}

	#[test]
	fn clear_empties() {
		let mut tree = Bst::sample();
		tree.clear();
		assert!(tree.is_empty());
		assert_eq!(tree.height(), 0);
		assert!(tree.traversal(TraversalOrder::InOrder).is_empty());
	}
}
