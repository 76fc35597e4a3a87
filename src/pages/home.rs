use leptos::prelude::*;

use crate::components::graph::GraphVisualizer;
use crate::components::sorting::SortingVisualizer;
use crate::components::tree::TreeVisualizer;
use crate::config::{PLAYBACK_RATES, parse_int, use_config};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
	Sorting,
	Graph,
	Tree,
}

impl Tab {
	const ALL: [Self; 3] = [Self::Sorting, Self::Graph, Self::Tree];

	fn title(self) -> &'static str {
		match self {
			Self::Sorting => "Sorting",
			Self::Graph => "Graph",
			Self::Tree => "Tree",
		}
	}
}

/// Landing page: the algorithm visualizers under one speed and playback control.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_config();
	let (speed_min, speed_max) = (
		config.speed_range.start().to_string(),
		config.speed_range.end().to_string(),
	);
	let tab = RwSignal::new(Tab::Sorting);
	let speed = RwSignal::new(config.default_speed);
	let rate = RwSignal::new(1.0_f64);

	let on_speed = move |ev: leptos::ev::Event| {
		if let Some(ms) = parse_int(&event_target_value(&ev)) {
			speed.set(config.clamp_speed(ms.clamp(0, i64::from(u32::MAX)) as u32));
		}
	};

	let on_rate = move |ev: leptos::ev::Event| {
		if let Ok(r) = event_target_value(&ev).parse::<f64>() {
			rate.set(r);
		}
	};

	view! {
		<section class="page visualizers">
			<h1>"Algorithm Visualizer"</h1>
			<div class="tabs">
				{Tab::ALL
					.into_iter()
					.map(|t| {
						view! {
							<button class:active=move || tab.get() == t on:click=move |_| tab.set(t)>
								{t.title()}
							</button>
						}
					})
					.collect_view()}
			</div>
			<label class="speed">
				"Step delay: "
				<input
					type="range"
					min=speed_min
					max=speed_max
					prop:value=move || speed.get().to_string()
					on:input=on_speed
				/>
				{move || format!("{} ms", speed.get())}
			</label>
			<label class="speed">
				"Playback: "
				<select on:change=on_rate>
					{PLAYBACK_RATES
						.into_iter()
						.map(|r| {
							view! {
								<option value=r.to_string() selected=move || rate.get() == r>
									{format!("{r}×")}
								</option>
							}
						})
						.collect_view()}
				</select>
			</label>
			{move || match tab.get() {
				Tab::Sorting => view! { <SortingVisualizer speed=speed rate=rate /> }.into_any(),
				Tab::Graph => view! { <GraphVisualizer speed=speed rate=rate /> }.into_any(),
				Tab::Tree => view! { <TreeVisualizer speed=speed rate=rate /> }.into_any(),
			}}
		</section>
	}
}
