use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{GraphState, NodeRole};
use crate::components::palette;

pub const NODE_RADIUS: f64 = 20.0;

fn node_color(role: NodeRole) -> &'static str {
	match role {
		NodeRole::Start => palette::GREEN,
		NodeRole::End => palette::RED,
		NodeRole::Visited => palette::AMBER,
		NodeRole::Unvisited => palette::PURPLE,
	}
}

pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(palette::BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	let nodes = &state.graph.nodes;
	ctx.set_text_align("center");
	ctx.set_font("12px sans-serif");
	for (i, edge) in state.graph.edges.iter().enumerate() {
		let (Some(a), Some(b)) = (nodes.get(edge.from), nodes.get(edge.to)) else {
			continue;
		};
		let on_path = state.snapshot.path.contains(&i);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.set_stroke_style_str(if on_path { palette::GREEN } else { palette::GRAY });
		ctx.set_line_width(if on_path { 3.0 } else { 1.0 });
		ctx.stroke();

		ctx.set_fill_style_str(palette::WHITE);
		let _ = ctx.fill_text(&edge.weight.to_string(), (a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
	}
}

fn draw_nodes(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("bold 14px sans-serif");
	for (i, node) in state.graph.nodes.iter().enumerate() {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node_color(state.role(i)));
		ctx.fill();
		let is_current = state.snapshot.current == Some(i);
		ctx.set_stroke_style_str(if is_current { palette::YELLOW } else { palette::WHITE });
		ctx.set_line_width(if is_current { 4.0 } else { 2.0 });
		ctx.stroke();

		ctx.set_fill_style_str(palette::WHITE);
		let _ = ctx.fill_text(&node.label, node.x, node.y + 5.0);
	}
}
