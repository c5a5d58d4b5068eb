//! Field particles: spawning and per-frame motion.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::FieldConfig;

/// A single point in the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Current position.
	pub x: f64,
	/// See `x`.
	pub y: f64,
	/// Resting position the particle drifts back to.
	pub rest_x: f64,
	/// See `rest_x`.
	pub rest_y: f64,
	/// Drawn radius in pixels.
	pub radius: f64,
	/// Per-particle drift speed; carried for variation, not read by the force model.
	pub speed: f64,
	/// Phase offset in [0, 2π); carried for variation, not read by the force model.
	pub phase: f64,
}

impl Particle {
	/// Advance one frame.
	///
	/// Inside the interaction radius the particle is pushed away from the
	/// pointer with linear falloff; otherwise it eases toward rest.
	pub fn advance(&mut self, (px, py): (f64, f64), config: &FieldConfig) {
		let (dx, dy) = (px - self.x, py - self.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance < config.interaction_radius {
			let force = repulsion_force(distance, config.interaction_radius);
			self.x -= dx * force * config.repel_strength;
			self.y -= dy * force * config.repel_strength;
			return;
		}

		self.x += (self.rest_x - self.x) * config.return_ease;
		self.y += (self.rest_y - self.y) * config.return_ease;
	}

	/// Distance from the current position to the resting position.
	pub fn distance_to_rest(&self) -> f64 {
		let (dx, dy) = (self.rest_x - self.x, self.rest_y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Linear falloff: 1.0 at the pointer, 0.0 at `radius` and beyond.
pub fn repulsion_force(distance: f64, radius: f64) -> f64 {
	if radius <= 0.0 {
		return 0.0;
	}
	((radius - distance) / radius).clamp(0.0, 1.0)
}

/// Upper bound on the population of a single field.
///
/// Linking is quadratic in the particle count, so anything past this would
/// stall the frame loop long before it ran out of memory.
pub const MAX_PARTICLES: usize = 5_000;

/// Population for a surface: one particle per `density` square pixels,
/// capped at [`MAX_PARTICLES`].
///
/// Non-finite or non-positive geometry yields zero.
pub fn particle_count(width: f64, height: f64, density: f64) -> usize {
	let valid = |v: f64| v.is_finite() && v > 0.0;
	if !(valid(width) && valid(height) && density > 0.0) {
		return 0;
	}
	let count = (width * height / density).floor();
	if count >= MAX_PARTICLES as f64 {
		MAX_PARTICLES
	} else {
		count as usize
	}
}

/// Spawn a fresh population for a `width` x `height` surface.
pub fn spawn<R: Rng>(width: f64, height: f64, config: &FieldConfig, rng: &mut R) -> Vec<Particle> {
	let count = particle_count(width, height, config.density);
	let mut particles = Vec::with_capacity(count);

	for _ in 0..count {
		let (x, y) = (uniform(rng, 0.0, width), uniform(rng, 0.0, height));
		let radius = uniform(rng, config.radius_min, config.radius_max);
		let (rest_x, rest_y) = (uniform(rng, 0.0, width), uniform(rng, 0.0, height));
		let speed = uniform(rng, config.speed_min, config.speed_max);
		let phase = uniform(rng, 0.0, TAU);

		let (x, y) = if config.spawn_at_rest {
			(rest_x, rest_y)
		} else {
			(x, y)
		};

		particles.push(Particle {
			x,
			y,
			rest_x,
			rest_y,
			radius,
			speed,
			phase,
		});
	}

	particles
}

/// Uniform sample in `[min, max)`, collapsing to `min` for an empty range.
fn uniform<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
	if max > min {
		rng.gen_range(min..max)
	} else {
		min
	}
}
