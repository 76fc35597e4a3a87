//! Small presentational pieces reused across pages.

use leptos::prelude::*;

/// Color legend for a canvas.
#[component]
pub fn Legend(entries: Vec<(&'static str, &'static str)>) -> impl IntoView {
	view! {
		<div class="legend">
			{entries
				.into_iter()
				.map(|(color, label)| {
					view! {
						<span class="legend-entry">
							<span class="swatch" style=format!("background: {color};")></span>
							{label}
						</span>
					}
				})
				.collect_view()}
		</div>
	}
}

/// A labelled counter.
#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
	view! {
		<div class="stat-card">
			<div class="stat-value">{move || value.get()}</div>
			<div class="stat-label">{label}</div>
		</div>
	}
}
