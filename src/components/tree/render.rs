use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::bst::Bst;
use super::layout::layout;
use super::state::TreeSnapshot;
use crate::components::palette;

const NODE_RADIUS: f64 = 25.0;

pub fn render(
	tree: &Bst,
	snapshot: &TreeSnapshot,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str(palette::BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);

	let placed = layout(tree, width);
	ctx.set_stroke_style_str(palette::GRAY);
	ctx.set_line_width(2.0);
	for node in &placed {
		if let Some((px, py)) = node.parent {
			ctx.begin_path();
			ctx.move_to(px, py);
			ctx.line_to(node.x, node.y);
			ctx.stroke();
		}
	}

	ctx.set_font("bold 14px sans-serif");
	ctx.set_text_align("center");
	for node in &placed {
		let lit = snapshot.highlighted.contains(&node.value);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if lit { palette::GREEN } else { palette::PURPLE });
		ctx.fill();
		ctx.set_stroke_style_str(palette::WHITE);
		ctx.stroke();

		ctx.set_fill_style_str(palette::WHITE);
		let _ = ctx.fill_text(&node.value.to_string(), node.x, node.y + 5.0);
	}
}
