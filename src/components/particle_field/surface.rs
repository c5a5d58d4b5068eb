//! Drawing surface abstraction.
//!
//! The field never owns its surface; each frame it issues a short list of
//! primitive commands against whatever implements [`Surface`]. In the browser
//! that is the canvas 2D context; in tests a [`DrawList`] records the commands.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// A 2D target the field can draw on.
pub trait Surface {
	/// Clear a `width` x `height` region anchored at the origin.
	fn clear(&mut self, width: f64, height: f64);

	/// Fill a circle centred on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

	/// Stroke a straight segment between two points.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// A recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	/// [`Surface::clear`]
	Clear {
		/// Cleared width.
		width: f64,
		/// Cleared height.
		height: f64,
	},
	/// [`Surface::fill_circle`]
	Circle {
		/// Centre x.
		x: f64,
		/// Centre y.
		y: f64,
		/// Circle radius.
		radius: f64,
		/// Fill colour.
		color: Color,
	},
	/// [`Surface::stroke_line`]
	Line {
		/// Start point.
		from: (f64, f64),
		/// End point.
		to: (f64, f64),
		/// Stroke width.
		width: f64,
		/// Stroke colour.
		color: Color,
	},
}

/// Surface that records commands instead of drawing them.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
	/// Every command in the order it was issued.
	pub commands: Vec<DrawCommand>,
}

impl DrawList {
	/// Empty recording.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether nothing has been drawn.
	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Recorded circle fills, in draw order.
	pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
		self.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Circle { .. }))
	}

	/// Recorded line strokes, in draw order.
	pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
		self.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. }))
	}
}

impl Surface for DrawList {
	fn clear(&mut self, width: f64, height: f64) {
		self.commands.push(DrawCommand::Clear { width, height });
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.commands.push(DrawCommand::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.commands.push(DrawCommand::Line {
			from,
			to,
			width,
			color,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn draw_list_records_in_order() {
		let mut list = DrawList::new();
		let color = Color::rgb(1, 2, 3);

		list.clear(10.0, 20.0);
		list.fill_circle(1.0, 2.0, 0.5, color);
		list.stroke_line((0.0, 0.0), (3.0, 4.0), 0.5, color);

		assert_eq!(
			list.commands,
			vec![
				DrawCommand::Clear {
					width: 10.0,
					height: 20.0
				},
				DrawCommand::Circle {
					x: 1.0,
					y: 2.0,
					radius: 0.5,
					color
				},
				DrawCommand::Line {
					from: (0.0, 0.0),
					to: (3.0, 4.0),
					width: 0.5,
					color
				},
			]
		);
		assert_eq!(list.circles().count(), 1);
		assert_eq!(list.lines().count(), 1);
	}
}
