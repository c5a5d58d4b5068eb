//! Colours for the particle field and its backdrop.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in [0, 1]; omitted in JSON means opaque.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same colour with its alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS colour: `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Visual style of the field.
///
/// `link` only contributes its RGB channels; the alpha of each connection line
/// is derived from the distance between its endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldTheme {
	/// Fill colour of every particle.
	pub particle: Color,
	/// Base colour of connection lines.
	pub link: Color,
	/// Solid colour behind the canvas.
	pub background: Color,
	/// Inner stop of the radial overlay drawn above the canvas.
	pub overlay_inner: Color,
	/// Outer stop of the radial overlay drawn above the canvas.
	pub overlay_outer: Color,
}

impl FieldTheme {
	/// Violet particles over near-black, the portfolio's house style (default).
	pub fn violet() -> Self {
		Self {
			particle: Color::rgba(139, 92, 246, 0.8),
			link: Color::rgb(139, 92, 246),
			background: Color::rgb(15, 15, 15),
			overlay_inner: Color::rgba(15, 15, 15, 0.5),
			overlay_outer: Color::rgba(15, 15, 15, 0.8),
		}
	}

	/// CSS `background` value for the overlay that softens the field edges.
	pub fn overlay_css(&self) -> String {
		format!(
			"radial-gradient(circle at 50% 50%, {} 0%, {} 100%)",
			self.overlay_inner.to_css(),
			self.overlay_outer.to_css()
		)
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::violet()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(139, 92, 246).to_css(), "#8b5cf6");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(
			Color::rgb(139, 92, 246).with_alpha(0.1).to_css(),
			"rgba(139, 92, 246, 0.1)"
		);
	}

	#[test]
	fn overlay_uses_both_stops() {
		let css = FieldTheme::violet().overlay_css();
		assert!(css.starts_with("radial-gradient(circle at 50% 50%"));
		assert!(css.contains("rgba(15, 15, 15, 0.5) 0%"));
		assert!(css.contains("rgba(15, 15, 15, 0.8) 100%"));
	}
}
