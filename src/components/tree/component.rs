use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};

use super::bst::TraversalOrder;
use super::render;
use super::state::TreeState;
use crate::components::canvas::{animation_loop, context_2d};
use crate::components::controls::{Legend, StatCard};
use crate::components::palette;
use crate::config::{parse_int, use_config};

/// Binary search tree editor with animated search and traversals.
#[component]
pub fn TreeVisualizer(
	#[prop(into)] speed: Signal<u32>,
	#[prop(into)] rate: Signal<f64>,
) -> impl IntoView {
	let config = use_config();
	let (width, height) = (config.canvas_width, config.canvas_height);
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = Rc::new(RefCell::new(TreeState::new(&config)));

	let order = RwSignal::new(TraversalOrder::default());
	let value_input = RwSignal::new(String::new());
	let search_input = RwSignal::new(String::new());
	let size = RwSignal::new(state.borrow().tree.len());
	let depth = RwSignal::new(state.borrow().tree.height());
	let output = RwSignal::new(Vec::<i64>::new());
	let running = RwSignal::new(false);
	let status = RwSignal::new(String::new());

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
				output.set(s.snapshot.output.clone());
				if let Some(found) = s.snapshot.found {
					status.set(if found { "Found".into() } else { "Not found".into() });
				}
			}
			let is_running = s.driver.is_running();
			if running.get_untracked() != is_running {
				running.set(is_running);
			}
			render::render(&s.tree, &s.snapshot, &ctx, width, height);
		});
	});

	let sync = move |s: &TreeState| {
		size.set(s.tree.len());
		depth.set(s.tree.height());
		output.set(Vec::new());
	};

	let state_insert = state.clone();
	let on_insert = move |_| {
		let Some(value) = parse_int(&value_input.get_untracked()) else {
			return;
		};
		let mut s = state_insert.borrow_mut();
		match s.insert(value) {
			Ok(inserted) => {
				status.set(if inserted {
					format!("Inserted {value}")
				} else {
					format!("{value} is already in the tree")
				});
				value_input.set(String::new());
				sync(&s);
			}
			Err(e) => {
				warn!("Insert rejected: {e}");
				status.set(e.to_string());
			}
		}
	};

	let state_delete = state.clone();
	let on_delete = move |_| {
		let Some(value) = parse_int(&value_input.get_untracked()) else {
			return;
		};
		let mut s = state_delete.borrow_mut();
		match s.delete(value) {
			Ok(deleted) => {
				status.set(if deleted {
					format!("Deleted {value}")
				} else {
					format!("{value} is not in the tree")
				});
				value_input.set(String::new());
				sync(&s);
			}
			Err(e) => {
				warn!("Delete rejected: {e}");
				status.set(e.to_string());
			}
		}
	};

	let state_search = state.clone();
	let on_search = move |_| {
		let Some(value) = parse_int(&search_input.get_untracked()) else {
			return;
		};
		let mut s = state_search.borrow_mut();
		match s.start_search(value) {
			Ok(()) => {
				info!("Searching for {value}");
				output.set(Vec::new());
				running.set(s.driver.is_running());
				status.set(format!("Searching for {value}..."));
			}
			Err(e) => {
				warn!("Search not started: {e}");
				status.set(e.to_string());
			}
		}
	};

	let state_traverse = state.clone();
	let on_traverse = move |_| {
		let mut s = state_traverse.borrow_mut();
		s.order = order.get_untracked();
		match s.start_traversal() {
			Ok(()) => {
				info!("Running {}", s.order.name());
				output.set(Vec::new());
				running.set(s.driver.is_running());
				status.set(String::new());
			}
			Err(e) => {
				warn!("Traversal not started: {e}");
				status.set(e.to_string());
			}
		}
	};

	let state_clear = state.clone();
	let on_clear = move |_| {
		let mut s = state_clear.borrow_mut();
		s.clear();
		sync(&s);
		running.set(false);
		status.set(String::new());
	};

	view! {
		<div class="visualizer tree">
			<div class="controls">
				<select
					disabled=move || running.get()
					on:change=move |ev| {
						if let Some(o) = TraversalOrder::from_id(&event_target_value(&ev)) {
							order.set(o);
						}
					}
				>
					{TraversalOrder::ALL
						.into_iter()
						.map(|o| {
							view! {
								<option value=o.id() selected=move || order.get() == o>
									{o.name()}
								</option>
							}
						})
						.collect_view()}
				</select>
				<button disabled=move || running.get() on:click=on_traverse>
					"Traverse"
				</button>
				<input
					type="number"
					placeholder="Value"
					prop:value=move || value_input.get()
					on:input=move |ev| value_input.set(event_target_value(&ev))
				/>
				<button disabled=move || running.get() on:click=on_insert>
					"Insert"
				</button>
				<button disabled=move || running.get() on:click=on_delete>
					"Delete"
				</button>
				<input
					type="number"
					placeholder="Search"
					prop:value=move || search_input.get()
					on:input=move |ev| search_input.set(event_target_value(&ev))
				/>
				<button disabled=move || running.get() on:click=on_search>
					"Search"
				</button>
				<button on:click=on_clear>"Clear"</button>
			</div>
			<Legend entries=vec![(palette::PURPLE, "Node"), (palette::GREEN, "Highlighted")] />
			<canvas node_ref=canvas_ref class="visualizer-canvas" />
			<p class="status">{move || status.get()}</p>
			<p class="traversal-output">
				{move || {
					let values = output.get();
					if values.is_empty() {
						String::new()
					} else {
						let joined: Vec<String> = values.iter().map(i64::to_string).collect();
						format!("Order: {}", joined.join(" → "))
					}
				}}
			</p>
			<div class="stats">
				<StatCard label="Nodes" value=Signal::derive(move || size.get().to_string()) />
				<StatCard label="Height" value=Signal::derive(move || depth.get().to_string()) />
				<StatCard label="Visited" value=Signal::derive(move || output.get().len().to_string()) />
			</div>
		</div>
	}
}
