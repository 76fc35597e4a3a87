use leptos::prelude::*;
use log::info;

use super::catalogue::{CaseOutcome, catalogue};

/// Problem browser that runs the reference solution against each test case.
#[component]
pub fn ProblemSolver() -> impl IntoView {
	let problems = StoredValue::new(catalogue());
	let selected = RwSignal::new(0usize);
	let outcomes = RwSignal::new(Vec::<CaseOutcome>::new());
	let show_hint = RwSignal::new(false);
	let show_solution = RwSignal::new(false);

	let current = move || problems.with_value(|p| p.get(selected.get()).cloned());

	let select = move |i: usize| {
		selected.set(i);
		outcomes.set(Vec::new());
		show_hint.set(false);
		show_solution.set(false);
	};

	let on_check = move |_| {
		let Some(problem) = problems.with_value(|p| p.get(selected.get_untracked()).cloned()) else {
			return;
		};
		let results = problem.check();
		let passed = results.iter().filter(|o| o.passed).count();
		info!("{}: {passed}/{} cases passed", problem.title, results.len());
		outcomes.set(results);
	};

	view! {
		<div class="problems">
			<ul class="problem-list">
				{problems
					.with_value(|p| {
						p.iter()
							.enumerate()
							.map(|(i, problem)| {
								let title = problem.title;
								let difficulty = problem.difficulty.to_string();
								view! {
									<li class:active=move || selected.get() == i on:click=move |_| select(i)>
										{title}
										<span class="difficulty">{difficulty}</span>
									</li>
								}
							})
							.collect_view()
					})}
			</ul>
			{move || {
				current()
					.map(|problem| {
						let (hint, solution) = (problem.hint, problem.solution);
						view! {
							<div class="problem">
								<h3>{problem.title}</h3>
								<p>{problem.description}</p>
								<pre class="example">{problem.example}</pre>
								<div class="controls">
									<button on:click=on_check>"Run Tests"</button>
									<button on:click=move |_| show_hint.update(|v| *v = !*v)>"Hint"</button>
									<button on:click=move |_| {
										show_solution.update(|v| *v = !*v)
									}>"Solution"</button>
								</div>
								<Show when=move || show_hint.get()>
									<p class="hint">{hint}</p>
								</Show>
								<Show when=move || show_solution.get()>
									<pre class="code-example">{solution}</pre>
								</Show>
							</div>
						}
					})
			}}
			<ul class="test-results">
				{move || {
					outcomes
						.get()
						.into_iter()
						.map(|o| {
							view! {
								<li class:passed=o.passed class:failed={!o.passed}>
									{format!(
										"Test {}: {} | input: {} | expected: {} | got: {}",
										o.index,
										if o.passed { "passed" } else { "failed" },
										o.input,
										o.expected,
										o.actual,
									)}
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</div>
	}
}
