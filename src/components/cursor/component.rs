//! Leptos component for the dot-and-ring cursor.
//!
//! Pointer position is recorded on every `mousemove`, but the DOM is only
//! written once per display refresh. Hover state is derived from `mouseover`
//! on the document, so interactive elements added after mount are picked up
//! too.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use leptos::prelude::*;
use log::{debug, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use super::state::{CursorState, INTERACTIVE_SELECTOR, ShapeStyle};
use crate::components::frame_loop::FrameLoop;

const DOT_STYLE: &str = "width: 5px; height: 5px; background: #ffffff; border-radius: 50%; position: fixed; top: 0; left: 0; \
	opacity: 0; pointer-events: none; user-select: none; z-index: 9999; mix-blend-mode: difference; \
	transition: width 0.3s ease, height 0.3s ease, transform 0.1s ease, opacity 0.3s ease;";

const RING_STYLE: &str = "width: 20px; height: 20px; border: 1px solid rgba(255, 255, 255, 0.5); border-radius: 50%; \
	position: fixed; top: 0; left: 0; opacity: 0; pointer-events: none; user-select: none; z-index: 9998; \
	mix-blend-mode: difference; transition: transform 0.3s ease, opacity 0.3s ease;";

struct Mounted {
	frame_loop: FrameLoop,
	listeners: Vec<EventListener>,
}

impl Mounted {
	fn teardown(self) {
		self.frame_loop.stop();
		drop(self.listeners);
		debug!("cursor: unmounted");
	}
}

/// Replaces the pointer with a small dot trailed by a ring.
///
/// Hide the native cursor with CSS (`cursor: none`) on the page for the
/// intended look.
#[component]
pub fn CustomCursor() -> impl IntoView {
	let dot_ref = NodeRef::<leptos::html::Div>::new();
	let ring_ref = NodeRef::<leptos::html::Div>::new();
	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));
	let mounted_init = mounted.clone();

	Effect::new(move |_| {
		let (Some(dot), Some(ring)) = (dot_ref.get(), ring_ref.get()) else {
			return;
		};

		if let Some(previous) = mounted_init.borrow_mut().take() {
			previous.teardown();
		}
		*mounted_init.borrow_mut() = mount(dot.into(), ring.into());
	});

	let mounted = SendWrapper::new(mounted);
	on_cleanup(move || {
		if let Some(m) = mounted.borrow_mut().take() {
			m.teardown();
		}
	});

	view! {
		<div node_ref=dot_ref class="cursor-dot" style=DOT_STYLE />
		<div node_ref=ring_ref class="cursor-ring" style=RING_STYLE />
	}
}

fn mount(dot: HtmlElement, ring: HtmlElement) -> Option<Mounted> {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("cursor: document unavailable");
		return None;
	};
	let state = Rc::new(RefCell::new(CursorState::default()));

	let state_move = state.clone();
	let on_move = EventListener::new(&document, "mousemove", move |event| {
		let Some(event) = event.dyn_ref::<MouseEvent>() else {
			return;
		};
		state_move
			.borrow_mut()
			.on_pointer_move(event.client_x() as f64, event.client_y() as f64);
	});

	let state_over = state.clone();
	let on_over = EventListener::new(&document, "mouseover", move |event| {
		let interactive = event
			.target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
			.is_some();
		state_over.borrow_mut().set_hovering(interactive);
	});

	// Both shapes mount transparent; the first frame writes their opacity,
	// which the CSS transition turns into a fade-in.
	let mut applied_hover: Option<bool> = None;
	let frame_loop = FrameLoop::start(move |_| {
		let cursor = state.borrow();
		let _ = dot.style().set_property("transform", &cursor.dot_transform());
		let _ = ring.style().set_property("transform", &cursor.ring_transform());

		if applied_hover != Some(cursor.is_hovering()) {
			apply_shape(&dot, cursor.dot());
			apply_shape(&ring, cursor.ring());
			applied_hover = Some(cursor.is_hovering());
		}
	});

	Some(Mounted {
		frame_loop,
		listeners: vec![on_move, on_over],
	})
}

fn apply_shape(el: &HtmlElement, shape: ShapeStyle) {
	let style = el.style();
	let size = format!("{}px", shape.size);
	let _ = style.set_property("width", &size);
	let _ = style.set_property("height", &size);
	let _ = style.set_property("opacity", &shape.opacity.to_string());
}
