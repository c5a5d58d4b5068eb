//! Glow layers and their scroll-driven offsets.

use crate::components::particle_field::Color;

/// Scroll distance (px) over which every layer completes its travel.
pub const SCROLL_RANGE: f64 = 1000.0;

/// A soft blurred disc positioned relative to its layer.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowCircle {
	/// Diameter in pixels.
	pub size: f64,
	/// Alpha applied to the layer colour.
	pub opacity: f64,
	/// Blur radius in pixels.
	pub blur: f64,
	/// Offset from the layer's top edge, in percent.
	pub top: f64,
	/// Offset from the layer's left edge, in percent.
	pub left: f64,
}

impl GlowCircle {
	/// Circle of diameter `size` at (`top`%, `left`%).
	pub const fn new(size: f64, opacity: f64, blur: f64, top: f64, left: f64) -> Self {
		Self {
			size,
			opacity,
			blur,
			top,
			left,
		}
	}

	/// Inline style for the circle tinted with `color`.
	pub fn css(&self, color: Color) -> String {
		format!(
			"position: absolute; width: {size}px; height: {size}px; border-radius: 50%; \
			 background: {}; filter: blur({}px); top: {}%; left: {}%;",
			color.with_alpha(self.opacity).to_css(),
			self.blur,
			self.top,
			self.left,
			size = self.size,
		)
	}
}

/// A full-viewport layer that moves up by `travel` px as the page scrolls.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxLayer {
	/// Vertical displacement (px) reached at [`SCROLL_RANGE`]; negative moves up.
	pub travel: f64,
	/// Circles drawn on this layer.
	pub circles: Vec<GlowCircle>,
}

impl ParallaxLayer {
	/// Translation for the current scroll position.
	pub fn offset(&self, scroll_y: f64) -> f64 {
		scroll_offset(self.travel, scroll_y)
	}
}

/// Linear map of `scroll_y` over `[0, SCROLL_RANGE]` onto `[0, travel]`,
/// clamped at both ends.
pub fn scroll_offset(travel: f64, scroll_y: f64) -> f64 {
	if !scroll_y.is_finite() {
		return 0.0;
	}
	travel * (scroll_y / SCROLL_RANGE).clamp(0.0, 1.0)
}

/// CSS transform for a layer displaced by `offset` px.
pub fn layer_transform(offset: f64) -> String {
	format!("translateY({offset}px)")
}

/// Background layers: large faint circles that move most, down to small
/// brighter circles in front that move least.
pub fn default_layers() -> Vec<ParallaxLayer> {
	vec![
		ParallaxLayer {
			travel: -50.0,
			circles: vec![
				GlowCircle::new(400.0, 0.03, 70.0, 10.0, 10.0),
				GlowCircle::new(500.0, 0.02, 80.0, 70.0, 80.0),
			],
		},
		ParallaxLayer {
			travel: -30.0,
			circles: vec![
				GlowCircle::new(300.0, 0.04, 50.0, 30.0, 20.0),
				GlowCircle::new(250.0, 0.05, 40.0, 60.0, 70.0),
				GlowCircle::new(200.0, 0.04, 45.0, 20.0, 90.0),
			],
		},
		ParallaxLayer {
			travel: -20.0,
			circles: vec![
				GlowCircle::new(150.0, 0.06, 30.0, 40.0, 30.0),
				GlowCircle::new(100.0, 0.07, 25.0, 80.0, 40.0),
				GlowCircle::new(120.0, 0.06, 35.0, 15.0, 60.0),
			],
		},
	]
}
