use leptos::prelude::*;
use log::{info, warn};

use super::lesson::{Family, Lesson, LessonRun};
use super::playback::Playback;
use crate::components::canvas::animation_loop;
use crate::config::{parse_int, use_config};

/// Plays the narrated steps of one lesson family one at a time.
#[component]
pub fn LessonPlayer(family: Family) -> impl IntoView {
	let config = use_config();
	let delay = match family {
		Family::Recursion => config.recursion_delay,
		Family::Greedy | Family::Dynamic => config.lesson_delay,
	};
	let first = Lesson::of(family).next().unwrap_or_default();
	let lesson = RwSignal::new(first);
	let input = RwSignal::new(first.default_input());
	let run = RwSignal::new(first.run(first.default_input()));
	let current = RwSignal::new(None::<usize>);
	let playing = RwSignal::new(false);
	let playback = StoredValue::new(Playback::new(delay));

	animation_loop(move |now| {
		let Some((moved, step, is_playing)) =
			playback.try_update_value(|p| (p.tick(now), p.current(), p.is_playing()))
		else {
			return;
		};
		if moved {
			current.set(step);
		}
		if playing.get_untracked() != is_playing {
			playing.set(is_playing);
		}
	});

	let rerun = move || {
		playback.update_value(Playback::reset);
		run.set(lesson.get_untracked().run(input.get_untracked()));
		current.set(None);
		playing.set(false);
	};

	let on_play = move |_| {
		let steps = run.with_untracked(|r: &LessonRun| r.steps.len());
		match playback.try_update_value(|p| p.play(steps).map(|()| p.is_playing())) {
			Some(Ok(is_playing)) => {
				info!("Playing {} ({steps} steps)", lesson.get_untracked().name());
				current.set(None);
				playing.set(is_playing);
			}
			Some(Err(e)) => warn!("Lesson not started: {e}"),
			None => {}
		}
	};

	let on_skip = move |_| {
		if let Some(step) = playback.try_update_value(Playback::skip).flatten() {
			current.set(Some(step));
		}
		playing.set(false);
	};

	view! {
		<div class="lesson-player">
			<div class="controls">
				<select
					disabled=move || playing.get()
					on:change=move |ev| {
						if let Some(l) = Lesson::from_id(&event_target_value(&ev)) {
							lesson.set(l);
							input.set(l.default_input());
							rerun();
						}
					}
				>
					{Lesson::of(family)
						.map(|l| {
							view! {
								<option value=l.id() selected=move || lesson.get() == l>
									{l.name()}
								</option>
							}
						})
						.collect_view()}
				</select>
				{move || {
					lesson
						.get()
						.input_label()
						.map(|label| {
							view! {
								<label>
									{label} ": "
									<input
										type="number"
										min="0"
										prop:value=move || input.get().to_string()
										disabled=move || playing.get()
										on:change=move |ev| {
											if let Some(n) = parse_int(&event_target_value(&ev)) {
												input.set(n.clamp(0, i64::from(u16::MAX)) as u32);
												rerun();
											}
										}
									/>
								</label>
							}
						})
				}}
				<button disabled=move || playing.get() on:click=on_play>
					"Play"
				</button>
				<button disabled=move || !playing.get() on:click=on_skip>
					"Skip"
				</button>
				<button on:click=move |_| rerun()>"Reset"</button>
			</div>
			<p class="lesson-description">{move || lesson.get().description()}</p>
			<ol class="lesson-steps">
				{move || {
					let shown = current.get();
					run.get()
						.steps
						.into_iter()
						.enumerate()
						.map(|(i, text)| {
							let class = match shown {
								Some(s) if s == i => "step current",
								Some(s) if i < s => "step done",
								_ => "step",
							};
							view! { <li class=class>{text}</li> }
						})
						.collect_view()
				}}
			</ol>
			<LessonTable run=run />
			<p class="lesson-summary">{move || run.get().summary}</p>
		</div>
	}
}

/// DP table of the current run; empty for greedy lessons.
#[component]
fn LessonTable(run: RwSignal<LessonRun>) -> impl IntoView {
	view! {
		<table class="dp-table">
			{move || {
				run.with(|r| {
					r.table
						.iter()
						.map(|row| {
							let cells = row.iter().map(|v| view! { <td>{*v}</td> }).collect_view();
							view! { <tr>{cells}</tr> }
						})
						.collect_view()
				})
			}}
		</table>
	}
}
