//! Parallax glow background.
//!
//! Three full-viewport layers of soft violet circles. Each layer translates
//! upward as the page scrolls, back layers faster than front ones, which gives
//! the backdrop a little depth behind the particle field.

mod component;
pub mod layers;

pub use component::ParallaxBackground;
pub use layers::{GlowCircle, ParallaxLayer, default_layers};
