//! Drawing-surface plumbing shared by the visualizer components.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Size the canvas and fetch its 2d context. `None` means there is nothing to
/// draw on, which callers treat as a silent no-op.
pub fn context_2d(
	canvas: &HtmlCanvasElement,
	width: f64,
	height: f64,
) -> Option<CanvasRenderingContext2d> {
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
	if ctx.is_none() {
		debug!("Canvas has no 2d context; skipping rendering");
	}
	ctx
}

/// Call `frame` with the current time on every animation frame until the
/// owning reactive scope is cleaned up.
pub fn animation_loop(mut frame: impl FnMut(f64) + 'static) {
	let alive = Arc::new(AtomicBool::new(true));
	let alive_cleanup = alive.clone();
	on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();
	*animate.borrow_mut() = Some(Closure::new(move || {
		if !retain_while_alive(&alive, &*animate_inner) {
			return;
		}
		frame(js_sys::Date::now());
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let (Some(window), Some(cb)) = (web_sys::window(), animate.borrow().as_ref()) {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

/// Whether the frame callback in `slot` should run again. Once the loop is
/// dead the callback is dropped, breaking its self-reference.
fn retain_while_alive<T>(alive: &AtomicBool, slot: &RefCell<Option<T>>) -> bool {
	if alive.load(Ordering::Relaxed) {
		return true;
	}
	let _ = slot.borrow_mut().take();
	false
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dead_loop_releases_its_callback() {
		let alive = AtomicBool::new(true);
		let captured = Rc::new(());
		let slot = RefCell::new(Some(captured.clone()));
		assert!(retain_while_alive(&alive, &slot));
		assert_eq!(Rc::strong_count(&captured), 2);

		alive.store(false, Ordering::Relaxed);
		assert!(!retain_while_alive(&alive, &slot));
		assert!(slot.borrow().is_none());
		assert_eq!(Rc::strong_count(&captured), 1);
	}
}
