use leptos::prelude::*;

use crate::components::lessons::{Family, LessonPlayer};

#[component]
pub fn Lessons() -> impl IntoView {
	view! {
		<section class="page lessons">
			<h2>"Greedy Algorithms"</h2>
			<p>"Explore greedy algorithms that make locally optimal choices."</p>
			<LessonPlayer family=Family::Greedy />
			<h2>"Dynamic Programming"</h2>
			<p>"Solve complex problems by breaking them into overlapping subproblems."</p>
			<LessonPlayer family=Family::Dynamic />
			<h2>"Recursion"</h2>
			<p>"Explore recursive algorithms and understand how they break down problems."</p>
			<LessonPlayer family=Family::Recursion />
		</section>
	}
}
