use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::render;
use super::state::{SortStats, SortingState, random_values};
use super::trace::SortAlgorithm;
use crate::components::canvas::{animation_loop, context_2d};
use crate::components::controls::{Legend, StatCard};
use crate::components::palette;
use crate::config::{parse_int, use_config};

/// Bar-chart view of a sorting run.
#[component]
pub fn SortingVisualizer(
	#[prop(into)] speed: Signal<u32>,
	#[prop(into)] rate: Signal<f64>,
) -> impl IntoView {
	let config = use_config();
	let (width, height) = (config.canvas_width, config.canvas_height);
	let (size_min, size_max) = (
		config.array_size_range.start().to_string(),
		config.array_size_range.end().to_string(),
	);
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
	let initial = random_values(config.default_array_size, &config, &mut *rng.borrow_mut());
	let state = Rc::new(RefCell::new(SortingState::new(initial, &config)));

	let algorithm = RwSignal::new(SortAlgorithm::default());
	let size = RwSignal::new(config.default_array_size);
	let stats = RwSignal::new(SortStats::default());
	let sorted_count = RwSignal::new(0usize);
	let running = RwSignal::new(false);
	let paused = RwSignal::new(false);
	let status = RwSignal::new(String::new());

	let state_speed = state.clone();
	Effect::new(move |_| {
		state_speed.borrow_mut().driver.set_delay(speed.get());
	});

	let state_rate = state.clone();
	Effect::new(move |_| {
		if let Err(e) = state_rate.borrow_mut().driver.set_multiplier(rate.get()) {
			warn!("Playback rate ignored: {e}");
		}
	});

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas, width, height) else {
			return;
		};
		let state_anim = state_init.clone();
		animation_loop(move |now| {
			let mut s = state_anim.borrow_mut();
			if s.tick(now) {
				stats.set(s.snapshot.stats);
				sorted_count.set(s.snapshot.sorted.len());
			}
			let is_running = s.driver.is_running();
			if running.get_untracked() != is_running {
				running.set(is_running);
				if !is_running {
					paused.set(false);
				}
			}
			render::render(&s.snapshot, s.max_value, &ctx, width, height);
		});
	});

	let state_start = state.clone();
	let on_start = move |_| {
		let mut s = state_start.borrow_mut();
		s.algorithm = algorithm.get_untracked();
		match s.start() {
			Ok(()) => {
				info!("Sorting {} values with {}", s.snapshot.values.len(), s.algorithm.name());
				stats.set(SortStats::default());
				sorted_count.set(0);
				running.set(s.driver.is_running());
				status.set(String::new());
			}
			Err(e) => {
				warn!("Sort not started: {e}");
				status.set(e.to_string());
			}
		}
	};

	let state_pause = state.clone();
	let on_pause = move |_| {
		let mut s = state_pause.borrow_mut();
		if paused.get_untracked() {
			s.driver.resume(js_sys::Date::now());
			paused.set(false);
		} else if s.driver.is_running() {
			s.driver.pause();
			paused.set(true);
		}
	};

	let state_reset = state.clone();
	let on_reset = move |_| {
		state_reset.borrow_mut().reset();
		stats.set(SortStats::default());
		sorted_count.set(0);
		running.set(false);
		paused.set(false);
	};

	let shuffle = {
		let state = state.clone();
		let config = config.clone();
		move || {
			let values = random_values(size.get_untracked(), &config, &mut *rng.borrow_mut());
			state.borrow_mut().replace(values);
			stats.set(SortStats::default());
			sorted_count.set(0);
			running.set(false);
			paused.set(false);
		}
	};
	let shuffle_click = shuffle.clone();
	let on_size = move |ev: leptos::ev::Event| {
		if let Some(n) = parse_int(&event_target_value(&ev)) {
			size.set(config.clamp_array_size(n.max(0) as usize));
			shuffle();
		}
	};

	view! {
		<div class="visualizer sorting">
			<div class="controls">
				<select
					disabled=move || running.get()
					on:change=move |ev| {
						if let Some(a) = SortAlgorithm::from_id(&event_target_value(&ev)) {
							algorithm.set(a);
						}
					}
				>
					{SortAlgorithm::ALL
						.into_iter()
						.map(|a| {
							view! {
								<option value=a.id() selected=move || algorithm.get() == a>
									{format!("{} - {}", a.name(), a.complexity())}
								</option>
							}
						})
						.collect_view()}
				</select>
				<label>
					"Elements: "
					<input
						type="range"
						min=size_min
						max=size_max
						prop:value=move || size.get().to_string()
						disabled=move || running.get()
						on:change=on_size
					/>
					{move || size.get()}
				</label>
				<button disabled=move || running.get() on:click=move |_| shuffle_click()>
					"Shuffle"
				</button>
				<button disabled=move || running.get() on:click=on_start>
					"Start"
				</button>
				<button disabled=move || !running.get() on:click=on_pause>
					{move || if paused.get() { "Resume" } else { "Pause" }}
				</button>
				<button on:click=on_reset>"Reset"</button>
			</div>
			<Legend entries=vec![
				(palette::PURPLE, "Unsorted"),
				(palette::YELLOW, "Comparing"),
				(palette::RED, "Swapping"),
				(palette::GREEN, "Sorted"),
			] />
			<canvas node_ref=canvas_ref class="visualizer-canvas" />
			<p class="status">{move || status.get()}</p>
			<div class="stats">
				<StatCard label="Elements" value=Signal::derive(move || size.get().to_string()) />
				<StatCard
					label="Comparisons"
					value=Signal::derive(move || stats.get().comparisons.to_string())
				/>
				<StatCard label="Swaps" value=Signal::derive(move || stats.get().swaps.to_string()) />
				<StatCard label="Sorted" value=Signal::derive(move || sorted_count.get().to_string()) />
			</div>
		</div>
	}
}
