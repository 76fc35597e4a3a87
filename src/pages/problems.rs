use leptos::prelude::*;

use crate::components::problems::ProblemSolver;

#[component]
pub fn Problems() -> impl IntoView {
	view! {
		<section class="page problems">
			<h1>"Interview Problems"</h1>
			<ProblemSolver />
		</section>
	}
}
