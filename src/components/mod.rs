//! Animated background widgets.

pub mod cursor;
pub mod frame_loop;
pub mod parallax;
pub mod particle_field;
