//! Custom cursor: a dot that tracks the pointer and a ring around it that
//! grows and fades over links, buttons and form fields.

mod component;
mod state;

pub use component::CustomCursor;
pub use state::{CursorState, INTERACTIVE_SELECTOR, ShapeStyle};
