//! Pointer-reactive particle field.
//!
//! A fixed population of faint particles drifts back toward random resting
//! positions while the pointer pushes nearby particles away. Particles closer
//! than the link distance are joined by lines that fade with distance, giving
//! a loose mesh that parts around the cursor.
//!
//! The simulation ([`ParticleField`]) is independent of the browser and draws
//! through the [`Surface`] trait; [`ParticleFieldCanvas`] binds it to a
//! full-viewport canvas, window listeners and the frame loop.
//!
//! # Example
//!
//! ```ignore
//! use pointer_field::{FieldConfig, ParticleFieldCanvas};
//!
//! view! { <ParticleFieldCanvas config=FieldConfig::default() /> }
//! ```

mod component;
pub mod config;
pub mod particles;
pub mod render;
mod state;
pub mod surface;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use particles::Particle;
pub use state::{Lifecycle, ParticleField};
pub use surface::{DrawCommand, DrawList, Surface};
pub use theme::{Color, FieldTheme};
