use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::layout::{generate, settle};
use super::render;
use super::state::GraphState;
use super::trace::GraphAlgorithm;
use super::types::Graph;
use crate::components::canvas::{animation_loop, context_2d};
use crate::components::controls::{Legend, StatCard};
use crate::components::palette;
use crate::config::{VisualizerConfig, use_config};

fn fresh_graph(config: &VisualizerConfig, rng: &mut StdRng) -> Graph {
	let mut graph = generate(&config.graph, config.canvas_width, config.canvas_height, rng);
	settle(&mut graph, config.canvas_width, config.canvas_height);
	graph
}

/// Node-link view of a graph search.
#[component]
pub fn GraphVisualizer(
	#[prop(into)] speed: Signal<u32>,
	#[prop(into)] rate: Signal<f64>,
) -> impl IntoView {
	let config = use_config();
	let (width, height) = (config.canvas_width, config.canvas_height);
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
	let graph = fresh_graph(&config, &mut rng.borrow_mut());
	let state = Rc::new(RefCell::new(GraphState::new(graph, &config)));

	let algorithm = RwSignal::new(GraphAlgorithm::default());
	let labels = RwSignal::new(Vec::<String>::new());
	let start = RwSignal::new(state.borrow().start);
	let end = RwSignal::new(state.borrow().end);
	let edge_count = RwSignal::new(0usize);
	let visited = RwSignal::new(0usize);
	let path_len = RwSignal::new(0usize);
	let running = RwSignal::new(false);
	let paused = RwSignal::new(false);
	let status = RwSignal::new(String::new());

	let sync_graph = move |s: &GraphState| {
		labels.set(s.graph.nodes.iter().map(|n| n.label.clone()).collect());
		edge_count.set(s.graph.edges.len());
		start.set(s.start);
		end.set(s.end);
		visited.set(0);
		path_len.set(0);
		running.set(false);
		paused.set(false);
	};
	sync_graph(&state.borrow());

	let state_speed = state.clone();
	Effect::new(move |_| {
		state_speed.borrow_mut().driver.set_delay(speed.get() * 2);
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
				visited.set(s.snapshot.visited.len());
				path_len.set(s.snapshot.path.len());
			}
			let is_running = s.driver.is_running();
			if running.get_untracked() != is_running {
				running.set(is_running);
				if !is_running {
					paused.set(false);
				}
			}
			render::render(&s, &ctx, width, height);
		});
	});

	let state_start = state.clone();
	let on_start = move |_| {
		let mut s = state_start.borrow_mut();
		s.algorithm = algorithm.get_untracked();
		s.start = start.get_untracked();
		s.end = end.get_untracked();
		match s.start_search() {
			Ok(()) => {
				info!("Running {} from {} to {}", s.algorithm.name(), s.start, s.end);
				visited.set(0);
				path_len.set(0);
				running.set(s.driver.is_running());
				status.set(String::new());
			}
			Err(e) => {
				warn!("Search not started: {e}");
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
		visited.set(0);
		path_len.set(0);
		running.set(false);
		paused.set(false);
	};

	let state_new = state.clone();
	let on_new_graph = move |_| {
		let graph = fresh_graph(&config, &mut rng.borrow_mut());
		info!("Generated graph with {} edges", graph.edges.len());
		let mut s = state_new.borrow_mut();
		s.replace(graph);
		sync_graph(&s);
	};

	let node_options = move |selected: RwSignal<usize>, prefix: &'static str| {
		labels
			.get()
			.into_iter()
			.enumerate()
			.map(|(i, label)| {
				view! {
					<option value=i.to_string() selected=move || selected.get() == i>
						{format!("{prefix}: {label}")}
					</option>
				}
			})
			.collect_view()
	};
	let pick = move |target: RwSignal<usize>| {
		move |ev: leptos::ev::Event| {
			if let Ok(i) = event_target_value(&ev).parse::<usize>() {
				target.set(i);
			}
		}
	};

	view! {
		<div class="visualizer graph">
			<div class="controls">
				<select
					disabled=move || running.get()
					on:change=move |ev| {
						if let Some(a) = GraphAlgorithm::from_id(&event_target_value(&ev)) {
							algorithm.set(a);
						}
					}
				>
					{GraphAlgorithm::ALL
						.into_iter()
						.map(|a| {
							view! {
								<option value=a.id() selected=move || algorithm.get() == a>
									{format!("{} - {}", a.name(), a.kind())}
								</option>
							}
						})
						.collect_view()}
				</select>
				<select disabled=move || running.get() on:change=pick(start)>
					{move || node_options(start, "Start")}
				</select>
				<select disabled=move || running.get() on:change=pick(end)>
					{move || node_options(end, "End")}
				</select>
				<button disabled=move || running.get() on:click=on_new_graph>
					"New Graph"
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
				(palette::GREEN, "Start"),
				(palette::RED, "End"),
				(palette::AMBER, "Visited"),
				(palette::PURPLE, "Unvisited"),
			] />
			<canvas node_ref=canvas_ref class="visualizer-canvas" />
			<p class="status">{move || status.get()}</p>
			<div class="stats">
				<StatCard label="Nodes" value=Signal::derive(move || labels.get().len().to_string()) />
				<StatCard label="Edges" value=Signal::derive(move || edge_count.get().to_string()) />
				<StatCard label="Visited" value=Signal::derive(move || visited.get().to_string()) />
				<StatCard label="Path Length" value=Signal::derive(move || path_len.get().to_string()) />
			</div>
		</div>
	}
}
