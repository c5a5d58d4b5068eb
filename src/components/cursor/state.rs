//! Cursor follower geometry.

/// Elements over which the cursor switches to its hover style.
pub const INTERACTIVE_SELECTOR: &str = r#"a, button, input, textarea, [role="button"]"#;

const DOT_SIZE: f64 = 5.0;
const DOT_SIZE_HOVER: f64 = 8.0;
const RING_SIZE: f64 = 20.0;
const RING_SIZE_HOVER: f64 = 30.0;
const RING_OPACITY_HOVER: f64 = 0.2;

/// Size and opacity of one cursor shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
	/// Width and height in pixels.
	pub size: f64,
	/// CSS opacity in [0, 1].
	pub opacity: f64,
}

/// Pointer position and hover state driving the dot and ring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursorState {
	/// Last pointer position in viewport pixels.
	pub x: f64,
	/// See `x`.
	pub y: f64,
	hovering: bool,
}

impl CursorState {
	/// Record the pointer position.
	pub fn on_pointer_move(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}

	/// Enter or leave the hover style.
	pub fn set_hovering(&mut self, hovering: bool) {
		self.hovering = hovering;
	}

	/// Whether the pointer is over an interactive element.
	pub fn is_hovering(&self) -> bool {
		self.hovering
	}

	/// Current dot style.
	pub fn dot(&self) -> ShapeStyle {
		ShapeStyle {
			size: if self.hovering { DOT_SIZE_HOVER } else { DOT_SIZE },
			opacity: 1.0,
		}
	}

	/// Current ring style.
	pub fn ring(&self) -> ShapeStyle {
		if self.hovering {
			ShapeStyle {
				size: RING_SIZE_HOVER,
				opacity: RING_OPACITY_HOVER,
			}
		} else {
			ShapeStyle {
				size: RING_SIZE,
				opacity: 1.0,
			}
		}
	}

	/// CSS transform centring the dot on the pointer.
	pub fn dot_transform(&self) -> String {
		self.centred(self.dot().size)
	}

	/// CSS transform centring the ring on the pointer.
	pub fn ring_transform(&self) -> String {
		self.centred(self.ring().size)
	}

	fn centred(&self, size: f64) -> String {
		let half = size / 2.0;
		format!("translate3d({}px, {}px, 0)", self.x - half, self.y - half)
	}
}
