//! Tunable parameters for the particle field.
//!
//! Every field has a default matching the portfolio background, so a JSON
//! config only needs to name the values it overrides:
//!
//! ```json
//! { "density": 9000, "link_distance": 120, "theme": { "particle": { "r": 255, "g": 255, "b": 255, "a": 0.6 } } }
//! ```

use serde::Deserialize;

use super::theme::FieldTheme;

/// Physics, population and styling parameters for a [`ParticleField`].
///
/// [`ParticleField`]: super::ParticleField
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Surface area (px²) per particle.
	pub density: f64,
	/// Pointer distance below which particles are pushed away.
	pub interaction_radius: f64,
	/// Fraction of the pointer offset applied per frame at full force.
	pub repel_strength: f64,
	/// Fraction of the remaining distance to rest covered per frame.
	pub return_ease: f64,
	/// Maximum distance at which two particles are linked.
	pub link_distance: f64,
	/// Opacity of a link between coincident particles.
	pub link_opacity: f64,
	/// Stroke width of links.
	pub link_width: f64,
	/// Particle radius range, sampled uniformly.
	pub radius_min: f64,
	/// See `radius_min`.
	pub radius_max: f64,
	/// Particle speed range, sampled uniformly.
	pub speed_min: f64,
	/// See `speed_min`.
	pub speed_max: f64,
	/// Start each particle on its resting position instead of an independent
	/// random point, which skips the settling drift after every resize.
	pub spawn_at_rest: bool,
	/// Colours for particles, links and backdrop.
	pub theme: FieldTheme,
}

impl FieldConfig {
	/// Parse a (possibly partial) JSON config.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			density: 15_000.0,
			interaction_radius: 150.0,
			repel_strength: 0.02,
			return_ease: 0.05,
			link_distance: 100.0,
			link_opacity: 0.2,
			link_width: 0.5,
			radius_min: 0.5,
			radius_max: 1.5,
			speed_min: 0.2,
			speed_max: 0.7,
			spawn_at_rest: false,
			theme: FieldTheme::default(),
		}
	}
}
