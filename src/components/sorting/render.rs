use web_sys::CanvasRenderingContext2d;

use super::state::{BarRole, SortSnapshot};
use crate::components::palette;

const GAP: f64 = 2.0;

fn bar_color(role: BarRole) -> &'static str {
	match role {
		BarRole::Sorted => palette::GREEN,
		BarRole::Swapping => palette::RED,
		BarRole::Comparing => palette::YELLOW,
		BarRole::Unsorted => palette::PURPLE,
	}
}

pub fn render(
	snapshot: &SortSnapshot,
	max_value: u32,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str(palette::BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);

	let n = snapshot.values.len();
	if n == 0 || max_value == 0 {
		return;
	}
	let slot = width / n as f64;
	let bar_width = (slot - GAP).max(1.0);

	for (i, &value) in snapshot.values.iter().enumerate() {
		let bar_height = (value as f64 / max_value as f64).min(1.0) * (height - 10.0);
		ctx.set_fill_style_str(bar_color(snapshot.role(i)));
		ctx.fill_rect(i as f64 * slot + GAP / 2.0, height - bar_height, bar_width, bar_height);
	}
}
