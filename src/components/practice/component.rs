use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::hash_table::HashTableGame;
use super::heap::{HeapGame, HeapKind};
use super::linked_list::LinkedListGame;
use super::scoreboard::Scoreboard;
use super::stack_queue::{StackQueueGame, Structure};
use super::trie::Trie;
use crate::components::controls::StatCard;
use crate::config::parse_int;

#[component]
fn ScoreRow(#[prop(into)] board: Signal<Scoreboard>) -> impl IntoView {
	view! {
		<div class="stats">
			<StatCard label="Score" value=Signal::derive(move || board.get().score.to_string()) />
			<StatCard label="Operations" value=Signal::derive(move || board.get().moves.to_string()) />
		</div>
		<p class="status">{move || board.get().status}</p>
	}
}

fn input_box(signal: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
	view! {
		<input
			type="text"
			placeholder=placeholder
			prop:value=move || signal.get()
			on:input=move |ev| signal.set(event_target_value(&ev))
		/>
	}
}

/// Hash table insert and search with scoring.
#[component]
pub fn HashTablePractice() -> impl IntoView {
	let game = RwSignal::new(HashTableGame::default());
	let key = RwSignal::new(String::new());
	let value = RwSignal::new(String::new());
	let lookup = RwSignal::new(String::new());

	let on_insert = move |_| {
		let result = game.try_update(|g| g.insert(&key.get_untracked(), &value.get_untracked()));
		match result {
			Some(Ok(outcome)) => {
				debug!("Hash insert: {outcome:?}");
				key.set(String::new());
				value.set(String::new());
			}
			Some(Err(e)) => warn!("Hash insert failed: {e}"),
			None => {}
		}
	};
	let on_search = move |_| {
		game.update(|g| {
			g.search(&lookup.get_untracked());
		});
		lookup.set(String::new());
	};

	view! {
		<div class="practice hash-table">
			<h3>"Hash Table Challenge"</h3>
			<ScoreRow board=Signal::derive(move || game.get().board) />
			<ol class="slots" start="0">
				{move || {
					game.get()
						.slots
						.into_iter()
						.map(|slot| match slot {
							Some(e) => {
								let text = format!("\"{}\" → \"{}\" (hash {})", e.key, e.value, e.hash);
								view! { <li>{text}</li> }.into_any()
							}
							None => view! { <li class="empty">"empty"</li> }.into_any(),
						})
						.collect_view()
				}}
			</ol>
			<div class="controls">
				{input_box(key, "Key")}
				{input_box(value, "Value")}
				<button on:click=on_insert>"Insert"</button>
				{input_box(lookup, "Search key")}
				<button on:click=on_search>"Search"</button>
				<button on:click=move |_| game.update(HashTableGame::reset)>"Reset"</button>
			</div>
		</div>
	}
}

/// Max or min heap insert and extract, drawn as a tree.
#[component]
pub fn HeapPractice() -> impl IntoView {
	let game = RwSignal::new(HeapGame::default());
	let input = RwSignal::new(String::new());

	let on_insert = move |_| {
		if let Some(v) = parse_int(&input.get_untracked()) {
			game.update(|g| g.insert(v));
			input.set(String::new());
		}
	};
	let on_extract = move |_| {
		if let Some(Err(e)) = game.try_update(HeapGame::extract_root) {
			debug!("Extract rejected: {e}");
		}
	};

	view! {
		<div class="practice heap">
			<h3>"Heap Challenge"</h3>
			<ScoreRow board=Signal::derive(move || game.get().board) />
			<div class="controls">
				{[HeapKind::Max, HeapKind::Min]
					.into_iter()
					.map(|kind| {
						view! {
							<button
								class:active=move || game.get().kind == kind
								on:click=move |_| game.update(|g| g.set_kind(kind))
							>
								{format!("{} Heap", kind.name())}
							</button>
						}
					})
					.collect_view()}
			</div>
			<div class="heap-tree">
				{move || {
					game.get()
						.values
						.iter()
						.enumerate()
						.map(|(i, v)| {
							let (level, x) = HeapGame::position(i);
							let style = format!("left: {:.1}%; top: {}px;", x * 100.0, level * 60);
							view! { <span class="heap-node" style=style>{*v}</span> }
						})
						.collect_view()
				}}
			</div>
			<p class="heap-array">{move || format!("Array: {:?}", game.get().values)}</p>
			<div class="controls">
				{input_box(input, "Value")}
				<button on:click=on_insert>"Insert"</button>
				<button on:click=on_extract>"Extract Root"</button>
				<button on:click=move |_| game.update(HeapGame::reset)>"Reset"</button>
			</div>
		</div>
	}
}

/// Push, pop, enqueue and dequeue with scoring.
#[component]
pub fn StackQueuePractice() -> impl IntoView {
	let game = RwSignal::new(StackQueueGame::default());
	let input = RwSignal::new(String::new());

	let on_add = move |_| {
		if let Some(v) = parse_int(&input.get_untracked()) {
			game.update(|g| g.add(v));
			input.set(String::new());
		}
	};
	let on_remove = move |_| {
		if let Some(Err(e)) = game.try_update(StackQueueGame::remove) {
			debug!("Removal rejected: {e}");
		}
	};
	let pick = move |s: Structure| game.update(|g| g.active = s);

	view! {
		<div class="practice stack-queue">
			<h3>"Stack & Queue Challenge"</h3>
			<ScoreRow board=Signal::derive(move || game.get().board) />
			<div class="controls">
				<button
					class:active=move || game.get().active == Structure::Stack
					on:click=move |_| pick(Structure::Stack)
				>
					"Stack (LIFO)"
				</button>
				<button
					class:active=move || game.get().active == Structure::Queue
					on:click=move |_| pick(Structure::Queue)
				>
					"Queue (FIFO)"
				</button>
			</div>
			<div class="structures">
				<div class="stack">
					<h4>"Stack"</h4>
					{move || {
						game.get()
							.stack
							.into_iter()
							.rev()
							.map(|v| view! { <div class="cell">{v}</div> })
							.collect_view()
					}}
				</div>
				<div class="queue">
					<h4>"Queue"</h4>
					{move || {
						game.get()
							.queue
							.into_iter()
							.map(|v| view! { <div class="cell">{v}</div> })
							.collect_view()
					}}
				</div>
			</div>
			<div class="controls">
				{input_box(input, "Value")}
				<button on:click=on_add>
					{move || match game.get().active {
						Structure::Stack => "Push",
						Structure::Queue => "Enqueue",
					}}
				</button>
				<button on:click=on_remove>
					{move || match game.get().active {
						Structure::Stack => "Pop",
						Structure::Queue => "Dequeue",
					}}
				</button>
				<button on:click=move |_| game.update(StackQueueGame::reset)>"Reset"</button>
			</div>
		</div>
	}
}

/// Walk a linked list node by node to the target value.
#[component]
pub fn LinkedListPractice() -> impl IntoView {
	let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
	let game = RwSignal::new(LinkedListGame::new(&mut *rng.borrow_mut()));

	let rng_next = rng.clone();
	let on_next_level = move |_| game.update(|g| g.next_level(&mut *rng_next.borrow_mut()));
	let on_reset = move |_| game.update(|g| g.reset(&mut *rng.borrow_mut()));

	view! {
		<div class="practice linked-list">
			<h3>"Linked List Traversal"</h3>
			<div class="stats">
				<StatCard label="Level" value=Signal::derive(move || game.get().level.to_string()) />
				<StatCard label="Score" value=Signal::derive(move || game.get().board.score.to_string()) />
				<StatCard label="Steps" value=Signal::derive(move || game.get().steps.to_string()) />
				<StatCard label="Target" value=Signal::derive(move || game.get().target.to_string()) />
			</div>
			<div class="list">
				<span class="head">"HEAD →"</span>
				{move || {
					let g = game.get();
					g.nodes
						.iter()
						.enumerate()
						.map(|(i, v)| {
							view! {
								<span
									class="list-node"
									class:current={i == g.position}
									class:target={*v == g.target}
								>
									{*v}
								</span>
								" → "
							}
						})
						.collect_view()
				}}
				<span class="null">"NULL"</span>
			</div>
			<p class="status">
				{move || {
					let g = game.get();
					if g.complete {
						g.board.status
					} else {
						format!("Current value: {}", g.current().unwrap_or_default())
					}
				}}
			</p>
			<div class="controls">
				<button
					disabled=move || {
						let g = game.get();
						g.complete || g.position + 1 >= g.nodes.len()
					}
					on:click=move |_| {
						game.update(|g| {
							g.move_next();
						})
					}
				>
					"Next →"
				</button>
				<button on:click=move |_| game.update(LinkedListGame::restart)>"Restart"</button>
				<button disabled=move || !game.get().complete on:click=on_next_level>
					"Next Level"
				</button>
				<button on:click=on_reset>"New Game"</button>
			</div>
		</div>
	}
}

/// Insert, search, autocomplete and delete on a prefix tree.
#[component]
pub fn TriePractice() -> impl IntoView {
	let trie = RwSignal::new(Trie::default());
	let word = RwSignal::new(String::new());
	let query = RwSignal::new(String::new());
	let result = RwSignal::new(None::<(String, bool)>);

	let on_insert = move |_| {
		let w = word.get_untracked();
		if trie.try_update(|t| t.insert(&w)).unwrap_or(false) {
			debug!("Trie insert: {}", w.trim());
		}
		word.set(String::new());
	};
	let on_search = move |_| {
		let q = query.get_untracked().trim().to_string();
		if q.is_empty() {
			return;
		}
		let found = trie.with_untracked(|t| t.contains(&q));
		result.set(Some((q, found)));
	};
	let on_clear = move |_| {
		trie.update(Trie::clear);
		result.set(None);
	};

	view! {
		<div class="practice trie">
			<h3>"Trie (Prefix Tree)"</h3>
			<div class="stats">
				<StatCard label="Words" value=Signal::derive(move || trie.with(Trie::len).to_string()) />
				<StatCard
					label="Nodes"
					value=Signal::derive(move || trie.with(Trie::node_count).to_string())
				/>
			</div>
			<div class="controls">
				{input_box(word, "Enter word")}
				<button on:click=on_insert>"Insert Word"</button>
				{input_box(query, "Search word or prefix")}
				<button on:click=on_search>"Search Word"</button>
				<button on:click=on_clear>"Clear All"</button>
			</div>
			<p class="status">
				{move || {
					result
						.get()
						.map(|(w, found)| {
							if found { format!("\"{w}\" found in Trie") } else { format!("\"{w}\" not found") }
						})
						.unwrap_or_default()
				}}
			</p>
			<ul class="suggestions">
				{move || {
					trie.with(|t| t.suggestions(&query.get()))
						.into_iter()
						.map(|s| view! { <li>{s}</li> })
						.collect_view()
				}}
			</ul>
			<ul class="words">
				{move || {
					trie.with(Trie::words)
						.into_iter()
						.map(|w| {
							let target = w.clone();
							view! {
								<li>
									{w}
									<button on:click=move |_| {
										trie.update(|t| {
											t.remove(&target);
										});
									}>"×"</button>
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</div>
	}
}
