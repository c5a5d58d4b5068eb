//! Particle field lifecycle and per-frame update.
//!
//! A [`ParticleField`] is either `Inactive` (no particles, ignores input) or
//! `Active` (populated, updated and drawn once per frame). Every entry point
//! is safe to call in either state; calls that make no sense while inactive
//! are silently ignored so a late event after teardown cannot touch a
//! disposed surface.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::particles::{self, Particle};
use super::render;
use super::surface::Surface;

/// Lifecycle of a [`ParticleField`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
	/// No particles; input and frames are ignored.
	Inactive,
	/// Populated and drawn every frame.
	Active,
}

/// Pointer position assumed until the first pointer event.
const ORIGIN: (f64, f64) = (0.0, 0.0);

/// Pointer-reactive particle field.
///
/// Until the first pointer event the pointer sits at the surface origin, so
/// particles near the top-left corner are pushed away from the first frame.
pub struct ParticleField {
	config: FieldConfig,
	particles: Vec<Particle>,
	pointer: (f64, f64),
	width: f64,
	height: f64,
	lifecycle: Lifecycle,
	rng: SmallRng,
}

impl ParticleField {
	/// Create an inactive field seeded from OS entropy.
	pub fn new(config: FieldConfig) -> Self {
		Self::with_rng(config, SmallRng::from_entropy())
	}

	/// Create an inactive field with a fixed seed, for reproducible layouts.
	pub fn with_seed(config: FieldConfig, seed: u64) -> Self {
		Self::with_rng(config, SmallRng::seed_from_u64(seed))
	}

	fn with_rng(config: FieldConfig, rng: SmallRng) -> Self {
		Self {
			config,
			particles: Vec::new(),
			pointer: ORIGIN,
			width: 0.0,
			height: 0.0,
			lifecycle: Lifecycle::Inactive,
			rng,
		}
	}

	/// Populate the field for a `width` x `height` surface and activate it.
	///
	/// Invalid dimensions (zero, negative, NaN) activate an empty field.
	pub fn initialize(&mut self, width: f64, height: f64) {
		self.width = sanitize_extent(width);
		self.height = sanitize_extent(height);
		self.particles = particles::spawn(self.width, self.height, &self.config, &mut self.rng);
		self.lifecycle = Lifecycle::Active;
		debug!(
			"particle-field: {} particles for {}x{}",
			self.particles.len(),
			self.width,
			self.height
		);
	}

	/// Record the latest pointer position. Ignored while inactive.
	pub fn on_pointer_move(&mut self, x: f64, y: f64) {
		if self.lifecycle == Lifecycle::Active {
			self.pointer = (x, y);
		}
	}

	/// Replace the whole population for the new surface size. Ignored while inactive.
	pub fn on_resize(&mut self, width: f64, height: f64) {
		if self.lifecycle == Lifecycle::Active {
			self.initialize(width, height);
		}
	}

	/// Advance every particle one frame and draw the result.
	///
	/// Each particle is moved, drawn, then linked to its neighbours before the
	/// next particle moves, so links from later particles see earlier ones at
	/// their updated positions.
	pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		if self.lifecycle == Lifecycle::Inactive || self.particles.is_empty() {
			return;
		}

		surface.clear(self.width, self.height);

		for i in 0..self.particles.len() {
			self.particles[i].advance(self.pointer, &self.config);
			render::draw_particle(surface, &self.particles[i], &self.config);
			render::draw_links(surface, &self.particles, i, &self.config);
		}
	}

	/// Drop all particles, reset the pointer to the origin and return to `Inactive`.
	///
	/// Idempotent, and harmless on a field that was never initialized.
	pub fn teardown(&mut self) {
		if self.lifecycle == Lifecycle::Active {
			debug!("particle-field: teardown");
		}
		self.particles.clear();
		self.pointer = ORIGIN;
		self.lifecycle = Lifecycle::Inactive;
	}

	/// Current lifecycle state.
	pub fn lifecycle(&self) -> Lifecycle {
		self.lifecycle
	}

	/// Whether the field is `Active`.
	pub fn is_active(&self) -> bool {
		self.lifecycle == Lifecycle::Active
	}

	/// Current population, empty while inactive.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Last observed pointer position, or the origin before any move.
	pub fn pointer(&self) -> (f64, f64) {
		self.pointer
	}

	/// Surface extent as `(width, height)` after sanitizing.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Parameters this field was built with.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}
}

fn sanitize_extent(value: f64) -> f64 {
	if value.is_finite() && value > 0.0 {
		value
	} else {
		0.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::surface::{DrawCommand, DrawList};

	const FAR_AWAY: (f64, f64) = (-10_000.0, -10_000.0);

	fn active_field(width: f64, height: f64) -> ParticleField {
		let mut field = ParticleField::with_seed(FieldConfig::default(), 42);
		field.initialize(width, height);
		field
	}

	#[test]
	fn starts_inactive_and_activates_on_initialize() {
		let mut field = ParticleField::with_seed(FieldConfig::default(), 1);
		assert_eq!(field.lifecycle(), Lifecycle::Inactive);
		assert!(field.particles().is_empty());

		field.initialize(1920.0, 1080.0);

		assert_eq!(field.lifecycle(), Lifecycle::Active);
		assert_eq!(field.particles().len(), 138);
		assert_eq!(field.size(), (1920.0, 1080.0));
	}

	#[test]
	fn resting_positions_lie_within_the_surface() {
		let field = active_field(1024.0, 768.0);

		for p in field.particles() {
			assert!(p.rest_x >= 0.0 && p.rest_x < 1024.0);
			assert!(p.rest_y >= 0.0 && p.rest_y < 768.0);
		}
	}

	#[test]
	fn invalid_geometry_activates_an_empty_field() {
		for (w, h) in [(0.0, 600.0), (-5.0, 600.0), (f64::NAN, f64::NAN), (100.0, 100.0)] {
			let mut field = active_field(w, h);
			let mut list = DrawList::new();

			field.step(&mut list);

			assert!(field.is_active());
			assert!(field.particles().is_empty());
			assert!(list.is_empty());
		}
	}

	#[test]
	fn resize_replaces_the_population() {
		let mut field = active_field(1920.0, 1080.0);
		assert_eq!(field.particles().len(), 138);

		field.on_resize(400.0, 300.0);

		assert_eq!(field.particles().len(), 8);
		assert_eq!(field.size(), (400.0, 300.0));
		for p in field.particles() {
			assert!(p.rest_x < 400.0 && p.rest_y < 300.0);
		}

		field.on_resize(1920.0, 1080.0);
		assert_eq!(field.particles().len(), 138);
	}

	#[test]
	fn particles_converge_to_rest_with_distant_pointer() {
		let mut field = active_field(800.0, 600.0);
		field.on_pointer_move(FAR_AWAY.0, FAR_AWAY.1);
		let mut list = DrawList::new();

		let initial: Vec<f64> = field.particles().iter().map(Particle::distance_to_rest).collect();
		let mut previous = initial.clone();

		for frame in 1..=300 {
			field.step(&mut list);
			for (i, p) in field.particles().iter().enumerate() {
				let d = p.distance_to_rest();
				if previous[i] > 1e-9 {
					assert!(d < previous[i], "particle {i} did not approach rest at frame {frame}");
				}
				if frame == 10 {
					let expected = initial[i] * 0.95_f64.powi(10);
					assert!((d - expected).abs() <= 1e-9 * initial[i].max(1.0));
				}
				previous[i] = d;
			}
		}

		assert!(previous.iter().all(|&d| d < 0.01));
	}

	#[test]
	fn pointer_on_a_particle_applies_saturated_force() {
		let mut field = active_field(800.0, 600.0);
		let first = field.particles()[0].clone();
		field.on_pointer_move(first.x, first.y);
		let mut list = DrawList::new();

		field.step(&mut list);

		// dx = dy = 0, so the saturated displacement -(0, 0) * 1.0 * 0.02 leaves
		// the particle in place instead of easing it toward rest.
		let moved = &field.particles()[0];
		assert_eq!((moved.x, moved.y), (first.x, first.y));
		assert_ne!((moved.x, moved.y), (first.rest_x, first.rest_y));
	}

	#[test]
	fn nearby_pointer_pushes_particles_outward() {
		let mut field = active_field(800.0, 600.0);
		let first = field.particles()[0].clone();
		field.on_pointer_move(first.x + 60.0, first.y);
		let mut list = DrawList::new();

		field.step(&mut list);

		// force = (150 - 60) / 150 = 0.6; dx = 60 -> x -= 60 * 0.6 * 0.02
		let moved = &field.particles()[0];
		assert!((moved.x - (first.x - 0.72)).abs() < 1e-9);
		assert!((moved.y - first.y).abs() < 1e-9);
	}

	#[test]
	fn step_clears_then_draws_every_particle() {
		let mut field = active_field(800.0, 600.0);
		let mut list = DrawList::new();

		field.step(&mut list);

		assert_eq!(
			list.commands.first(),
			Some(&DrawCommand::Clear {
				width: 800.0,
				height: 600.0
			})
		);
		assert_eq!(list.circles().count(), field.particles().len());
		for line in list.lines() {
			let DrawCommand::Line { color, .. } = line else {
				unreachable!()
			};
			assert!(color.a > 0.0 && color.a <= 0.2);
		}
	}

	#[test]
	fn teardown_is_idempotent_and_safe_before_initialize() {
		let mut field = ParticleField::with_seed(FieldConfig::default(), 5);
		field.teardown();
		field.teardown();
		assert_eq!(field.lifecycle(), Lifecycle::Inactive);

		field.initialize(800.0, 600.0);
		field.teardown();
		field.teardown();
		assert_eq!(field.lifecycle(), Lifecycle::Inactive);
		assert!(field.particles().is_empty());
	}

	#[test]
	fn inactive_field_ignores_input_and_draws_nothing() {
		let mut field = active_field(800.0, 600.0);
		field.on_pointer_move(10.0, 10.0);
		field.teardown();
		let mut list = DrawList::new();

		for _ in 0..5 {
			field.on_pointer_move(100.0, 100.0);
			field.on_resize(1920.0, 1080.0);
			field.step(&mut list);
		}

		assert!(list.is_empty());
		assert_eq!(field.pointer(), (0.0, 0.0));
		assert!(field.particles().is_empty());
	}

	#[test]
	fn field_can_be_reinitialized_after_teardown() {
		let mut field = active_field(800.0, 600.0);
		field.teardown();

		field.initialize(1200.0, 500.0);

		assert!(field.is_active());
		assert_eq!(field.particles().len(), 40);
	}

	#[test]
	fn pointer_outside_the_surface_is_accepted() {
		let mut field = active_field(800.0, 600.0);

		field.on_pointer_move(-50.0, 9000.0);

		assert_eq!(field.pointer(), (-50.0, 9000.0));
	}

	#[test]
	fn corner_particle_is_repelled_before_any_pointer_move() {
		let mut field = active_field(800.0, 600.0);
		assert_eq!(field.pointer(), (0.0, 0.0));
		field.particles[0] = Particle {
			x: 10.0,
			y: 10.0,
			rest_x: 400.0,
			rest_y: 300.0,
			radius: 1.0,
			speed: 0.5,
			phase: 0.0,
		};
		let mut list = DrawList::new();

		field.step(&mut list);

		// Pushed away from the origin instead of easing to (29.5, 24.5).
		let p = &field.particles()[0];
		assert!(p.x > 10.0 && p.x < 10.2, "x = {}", p.x);
		assert!(p.y > 10.0 && p.y < 10.2, "y = {}", p.y);
	}

	#[test]
	fn pointer_is_kept_across_resize_and_reset_by_teardown() {
		let mut field = active_field(800.0, 600.0);
		field.on_pointer_move(120.0, 80.0);

		field.on_resize(1024.0, 768.0);
		assert_eq!(field.pointer(), (120.0, 80.0));

		field.teardown();
		assert_eq!(field.pointer(), (0.0, 0.0));
	}

	#[test]
	fn tiny_density_config_is_capped_instead_of_aborting() {
		let config = FieldConfig::from_json(r#"{"density": 1e-12}"#).unwrap();
		let mut field = ParticleField::with_seed(config, 9);

		field.initialize(1920.0, 1080.0);

		assert!(field.is_active());
		assert_eq!(field.particles().len(), particles::MAX_PARTICLES);
	}
}
