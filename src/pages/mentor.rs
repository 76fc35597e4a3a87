use leptos::prelude::*;

use crate::components::mentor::MentorChat;

#[component]
pub fn Mentor() -> impl IntoView {
	view! {
		<section class="page mentor">
			<h1>"DSA Mentor"</h1>
			<MentorChat />
		</section>
	}
}
