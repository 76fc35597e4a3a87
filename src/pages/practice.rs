use leptos::prelude::*;

use crate::components::practice::{
	HashTablePractice, HeapPractice, LinkedListPractice, StackQueuePractice, TriePractice,
};

#[component]
pub fn Practice() -> impl IntoView {
	view! {
		<section class="page practice">
			<h1>"Practice"</h1>
			<HashTablePractice />
			<HeapPractice />
			<StackQueuePractice />
			<LinkedListPractice />
			<TriePractice />
		</section>
	}
}
