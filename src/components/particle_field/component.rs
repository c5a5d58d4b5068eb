//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a full-viewport canvas, subscribes to window
//! `mousemove` and `resize`, and runs the field once per display refresh via
//! [`FrameLoop`]. Unmounting stops the loop, detaches the listeners and tears
//! the field down.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use leptos::prelude::*;
use log::{debug, info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::state::ParticleField;
use crate::components::frame_loop::FrameLoop;

/// The field together with the canvas it draws on.
struct FieldHost {
	field: ParticleField,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

/// Resources held while the canvas is mounted.
struct Mounted {
	host: Rc<RefCell<FieldHost>>,
	frame_loop: FrameLoop,
	listeners: Vec<EventListener>,
}

impl Mounted {
	fn teardown(self) {
		self.frame_loop.stop();
		drop(self.listeners);
		self.host.borrow_mut().field.teardown();
		debug!("particle-field: unmounted");
	}
}

/// Renders the pointer-reactive particle field behind the page content.
///
/// The canvas is fixed to the viewport and re-populated whenever the window
/// is resized. Pass a `config` to override density, physics or colours.
#[component]
pub fn ParticleFieldCanvas(#[prop(optional)] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));
	let mounted_init = mounted.clone();

	let container_style = format!(
		"position: fixed; top: 0; left: 0; width: 100%; height: 100vh; overflow: hidden; z-index: 1; background: {};",
		config.theme.background.to_css()
	);
	let overlay_style = format!(
		"position: absolute; top: 0; left: 0; width: 100%; height: 100%; background: {};",
		config.theme.overlay_css()
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		if let Some(previous) = mounted_init.borrow_mut().take() {
			previous.teardown();
		}
		*mounted_init.borrow_mut() = mount(canvas, config.clone());
	});

	let mounted = SendWrapper::new(mounted);
	on_cleanup(move || {
		if let Some(m) = mounted.borrow_mut().take() {
			m.teardown();
		}
	});

	view! {
		<div class="particle-field" style=container_style>
			<canvas
				node_ref=canvas_ref
				class="particle-field-canvas"
				style="position: absolute; top: 0; left: 0; width: 100%; height: 100%;"
			/>
			<div class="particle-field-overlay" style=overlay_style />
		</div>
	}
}

fn mount(canvas: HtmlCanvasElement, config: FieldConfig) -> Option<Mounted> {
	let window: Window = web_sys::window()?;
	let Some((w, h)) = viewport_size(&window) else {
		warn!("particle-field: viewport size unavailable");
		return None;
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let Some(ctx) = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
	else {
		warn!("particle-field: 2d canvas context unavailable");
		return None;
	};

	let mut field = ParticleField::new(config);
	field.initialize(w, h);
	info!(
		"particle-field: mounted {} particles on {}x{}",
		field.particles().len(),
		w,
		h
	);

	let host = Rc::new(RefCell::new(FieldHost { field, canvas, ctx }));

	let host_move = host.clone();
	let on_move = EventListener::new(&window, "mousemove", move |event| {
		let Some(event) = event.dyn_ref::<MouseEvent>() else {
			return;
		};
		host_move
			.borrow_mut()
			.field
			.on_pointer_move(event.client_x() as f64, event.client_y() as f64);
	});

	let host_resize = host.clone();
	let on_resize = EventListener::new(&window, "resize", move |_| {
		let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
			return;
		};
		let mut host = host_resize.borrow_mut();
		host.canvas.set_width(nw as u32);
		host.canvas.set_height(nh as u32);
		host.field.on_resize(nw, nh);
	});

	let host_frame = host.clone();
	let frame_loop = FrameLoop::start(move |_| {
		let mut host = host_frame.borrow_mut();
		let FieldHost { field, ctx, .. } = &mut *host;
		field.step(ctx);
	});

	Some(Mounted {
		host,
		frame_loop,
		listeners: vec![on_move, on_resize],
	})
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}
