use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use log::debug;

use super::matcher::{GREETING, QUICK_QUESTIONS, respond};
use crate::config::use_config;

#[derive(Clone, Debug, PartialEq)]
struct Message {
	id: usize,
	from_user: bool,
	content: String,
	code: Option<&'static str>,
}

/// Chat with the scripted mentor.
#[component]
pub fn MentorChat() -> impl IntoView {
	let config = use_config();
	let delay = Duration::from_millis(config.mentor_delay.into());
	let messages = RwSignal::new(vec![Message {
		id: 0,
		from_user: false,
		content: GREETING.to_string(),
		code: None,
	}]);
	let draft = RwSignal::new(String::new());
	let typing = RwSignal::new(false);

	let send = move |text: String| {
		let text = text.trim().to_string();
		if text.is_empty() || typing.get_untracked() {
			return;
		}
		let reply = respond(&text);
		debug!("Mentor topic {:?} for {text:?}", reply.topic);
		messages.update(|m| {
			let id = m.len();
			m.push(Message {
				id,
				from_user: true,
				content: text,
				code: None,
			});
		});
		draft.set(String::new());
		typing.set(true);
		set_timeout(
			move || {
				messages.update(|m| {
					let id = m.len();
					m.push(Message {
						id,
						from_user: false,
						content: reply.content.to_string(),
						code: reply.code_example,
					});
				});
				typing.set(false);
			},
			delay,
		);
	};

	view! {
		<div class="mentor">
			<div class="messages">
				<For each=move || messages.get() key=|m| m.id let:message>
					<div class="message" class:user=message.from_user class:mentor={!message.from_user}>
						{message
							.content
							.lines()
							.map(|line| view! { <p>{line.to_string()}</p> })
							.collect_view()}
						{message.code.map(|code| view! { <pre class="code-example">{code}</pre> })}
					</div>
				</For>
				<Show when=move || typing.get()>
					<div class="message mentor typing">"Mentor is typing..."</div>
				</Show>
			</div>
			<div class="quick-questions">
				{QUICK_QUESTIONS
					.into_iter()
					.map(|q| {
						view! {
							<button disabled=move || typing.get() on:click=move |_| send(q.to_string())>
								{q}
							</button>
						}
					})
					.collect_view()}
			</div>
			<form on:submit=move |ev| {
				ev.prevent_default();
				send(draft.get_untracked());
			}>
				<input
					type="text"
					placeholder="Ask about data structures or algorithms..."
					prop:value=move || draft.get()
					on:input=move |ev| draft.set(event_target_value(&ev))
				/>
				<button type="submit" disabled=move || typing.get() || draft.get().trim().is_empty()>
					"Send"
				</button>
			</form>
		</div>
	}
}
