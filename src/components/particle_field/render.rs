//! Drawing for the particle field.
//!
//! Particles are filled circles; each particle is linked to every other
//! particle closer than the link distance by a line whose alpha fades out
//! linearly with distance. Links are drawn from both ends, so every pair is
//! stroked twice per frame.

use super::config::FieldConfig;
use super::particles::Particle;
use super::surface::Surface;

/// Alpha of a link between two particles `distance` apart, or `None` when
/// they are too far apart to be linked.
pub fn link_opacity(distance: f64, config: &FieldConfig) -> Option<f64> {
	if distance < config.link_distance {
		Some(config.link_opacity * (1.0 - distance / config.link_distance))
	} else {
		None
	}
}

/// Fill one particle as a circle of its own radius.
pub fn draw_particle<S: Surface + ?Sized>(surface: &mut S, particle: &Particle, config: &FieldConfig) {
	surface.fill_circle(
		particle.x,
		particle.y,
		particle.radius,
		config.theme.particle,
	);
}

/// Link `particles[index]` to every other particle in range.
pub fn draw_links<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	index: usize,
	config: &FieldConfig,
) {
	let Some(p) = particles.get(index) else {
		return;
	};

	for (j, other) in particles.iter().enumerate() {
		if j == index {
			continue;
		}
		let (dx, dy) = (p.x - other.x, p.y - other.y);
		let distance = (dx * dx + dy * dy).sqrt();

		if let Some(alpha) = link_opacity(distance, config) {
			surface.stroke_line(
				(p.x, p.y),
				(other.x, other.y),
				config.link_width,
				config.theme.link.with_alpha(alpha),
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::surface::{DrawCommand, DrawList};

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			rest_x: x,
			rest_y: y,
			radius: 1.0,
			speed: 0.5,
			phase: 0.0,
		}
	}

	#[test]
	fn opacity_fades_linearly_with_distance() {
		let config = FieldConfig::default();

		assert_eq!(link_opacity(0.0, &config), Some(0.2));
		let half = link_opacity(50.0, &config).unwrap();
		assert!((half - 0.1).abs() < 1e-12);
		assert_eq!(link_opacity(100.0, &config), None);
		assert_eq!(link_opacity(250.0, &config), None);
	}

	#[test]
	fn links_only_particles_in_range() {
		let config = FieldConfig::default();
		let particles = vec![
			particle_at(0.0, 0.0),
			particle_at(30.0, 40.0),
			particle_at(200.0, 0.0),
		];
		let mut list = DrawList::new();

		draw_links(&mut list, &particles, 0, &config);

		assert_eq!(list.commands.len(), 1);
		let DrawCommand::Line {
			from,
			to,
			width,
			color,
		} = &list.commands[0]
		else {
			panic!("expected a line");
		};
		assert_eq!(*from, (0.0, 0.0));
		assert_eq!(*to, (30.0, 40.0));
		assert_eq!(*width, 0.5);
		assert!((color.a - 0.1).abs() < 1e-12);
		assert_eq!((color.r, color.g, color.b), (139, 92, 246));
	}

	#[test]
	fn particle_is_drawn_with_its_radius() {
		let config = FieldConfig::default();
		let mut p = particle_at(12.0, 34.0);
		p.radius = 1.25;
		let mut list = DrawList::new();

		draw_particle(&mut list, &p, &config);

		assert_eq!(
			list.commands,
			vec![DrawCommand::Circle {
				x: 12.0,
				y: 34.0,
				radius: 1.25,
				color: config.theme.particle
			}]
		);
	}

	#[test]
	fn out_of_range_index_draws_nothing() {
		let config = FieldConfig::default();
		let mut list = DrawList::new();

		draw_links(&mut list, &[particle_at(0.0, 0.0)], 3, &config);

		assert!(list.is_empty());
	}
}
