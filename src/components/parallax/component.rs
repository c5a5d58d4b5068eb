//! Leptos component for the scroll-driven glow layers.

use gloo::events::EventListener;
use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;

use super::layers::{ParallaxLayer, default_layers, layer_transform, scroll_offset};
use crate::components::particle_field::Color;

const CONTAINER_STYLE: &str =
	"position: fixed; top: 0; left: 0; width: 100%; height: 100vh; z-index: 1; pointer-events: none;";

const LAYER_STYLE: &str = "position: absolute; width: 100%; height: 100%; display: flex; \
	justify-content: center; align-items: center;";

/// Layers of blurred circles drifting upward at different rates on scroll.
///
/// Defaults to three violet layers; pass `layers` and `color` to restyle.
#[component]
pub fn ParallaxBackground(
	#[prop(optional)] layers: Option<Vec<ParallaxLayer>>,
	#[prop(optional)] color: Option<Color>,
) -> impl IntoView {
	let layers = layers.unwrap_or_else(default_layers);
	let color = color.unwrap_or(Color::rgb(139, 92, 246));
	let scroll_y = RwSignal::new(0.0_f64);

	let listener = web_sys::window().map(|window| {
		EventListener::new(&window, "scroll", move |_| {
			if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
				scroll_y.set(y);
			}
		})
	});
	let listener = SendWrapper::new(listener);
	on_cleanup(move || {
		drop(listener);
		debug!("parallax: unmounted");
	});

	let layer_views = layers
		.into_iter()
		.map(|layer| {
			let travel = layer.travel;
			let circles = layer
				.circles
				.iter()
				.map(|circle| view! { <div class="parallax-circle" style=circle.css(color) /> })
				.collect_view();
			let style = move || {
				format!(
					"{LAYER_STYLE} transform: {};",
					layer_transform(scroll_offset(travel, scroll_y.get()))
				)
			};

			view! { <div class="parallax-layer" style=style>{circles}</div> }
		})
		.collect_view();

	view! { <div class="parallax" style=CONTAINER_STYLE>{layer_views}</div> }
}
