//! pointer-field: animated portfolio backgrounds for Leptos.
//!
//! This crate provides WASM-rendered background widgets: a pointer-reactive
//! particle field drawn on a canvas, a dot-and-ring custom cursor, and
//! scroll-driven parallax glow layers.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;

pub use components::cursor::CustomCursor;
pub use components::parallax::ParallaxBackground;
pub use components::particle_field::{FieldConfig, FieldTheme, ParticleField, ParticleFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("pointer-field: logging initialized");
}

/// Load the field config from a script element with id="field-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`] fields.
pub fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"pointer-field: loaded config (density {}, link distance {})",
				config.density, config.link_distance
			);
			Some(config)
		}
		Err(e) => {
			warn!("pointer-field: failed to parse field config: {}", e);
			None
		}
	}
}

/// Demo page: every background widget stacked under a short heading.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="pointer-field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas config=config />
		<ParallaxBackground />
		<CustomCursor />
		<main class="hero" style="position: relative; z-index: 2; cursor: none;">
			<h1>"Hello there"</h1>
			<p class="subtitle">"Move the pointer through the field. Links and buttons grow the cursor ring."</p>
			<a href="#contact" role="button">"Get in touch"</a>
		</main>
	}
}
