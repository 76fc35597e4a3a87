use super::bst::{Bst, Link};

/// Y coordinate of the root.
pub const TOP_MARGIN: f64 = 50.0;
/// Vertical distance between tree levels.
pub const LEVEL_HEIGHT: f64 = 60.0;

/// Canvas position of one tree node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placed {
	/// Value drawn in the node.
	pub value: i64,
	/// Canvas x coordinate.
	pub x: f64,
	/// Canvas y coordinate.
	pub y: f64,
	/// Parent position, for drawing the edge up.
	pub parent: Option<(f64, f64)>,
}

/// Root at the top centre; each level halves the horizontal offset.
pub fn layout(tree: &Bst, width: f64) -> Vec<Placed> {
	let mut out = Vec::with_capacity(tree.len());
	place(&tree.root, width / 2.0, TOP_MARGIN, width / 4.0, None, &mut out);
	out
}

fn place(link: &Link, x: f64, y: f64, offset: f64, parent: Option<(f64, f64)>, out: &mut Vec<Placed>) {
	let Some(node) = link else {
		return;
	};
	out.push(Placed {
		value: node.value,
		x,
		y,
		parent,
	});
	let here = Some((x, y));
	place(&node.left, x - offset, y + LEVEL_HEIGHT, offset / 2.0, here, out);
	place(&node.right, x + offset, y + LEVEL_HEIGHT, offset / 2.0, here, out);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_layout() {
		let placed = layout(&Bst::sample(), 600.0);
		assert_eq!(placed.len(), 7);
		let root = placed[0];
		assert_eq!((root.value, root.x, root.y, root.parent), (50, 300.0, 50.0, None));
		let left = placed.iter().find(|p| p.value == 30).copied();
		assert_eq!(left.map(|p| (p.x, p.y, p.parent)), Some((150.0, 110.0, Some((300.0, 50.0)))));
		let deepest = placed.iter().find(|p| p.value == 80).copied();
		assert_eq!(deepest.map(|p| (p.x, p.y)), Some((525.0, 170.0)));
	}
}
