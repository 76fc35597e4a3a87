//! Leptos client-side app wiring and routes.

use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod components;
pub mod config;
pub mod error;
mod pages;

// Top-Level pages
use crate::config::VisualizerConfig;
use crate::pages::home::Home;
use crate::pages::lessons::Lessons;
use crate::pages::mentor::Mentor;
use crate::pages::not_found::NotFound;
use crate::pages::practice::Practice;
use crate::pages::problems::Problems;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router over the visualizer, lessons, practice, mentor and problem pages.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(VisualizerConfig::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="DSA Canvas" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<nav class="navbar">
				<A href="/">"Visualizer"</A>
				<A href="/lessons">"Lessons"</A>
				<A href="/practice">"Practice"</A>
				<A href="/problems">"Problems"</A>
				<A href="/mentor">"Mentor"</A>
			</nav>
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/lessons") view=Lessons />
					<Route path=path!("/practice") view=Practice />
					<Route path=path!("/problems") view=Problems />
					<Route path=path!("/mentor") view=Mentor />
				</Routes>
			</main>
		</Router>
	}
}
