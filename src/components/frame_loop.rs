//! Cancellable `requestAnimationFrame` loop.
//!
//! The browser only ever runs one frame callback at a time, and each callback
//! requests the next one. Stopping clears the running flag and drops the
//! pending [`AnimationFrame`], which cancels it; the flag is re-checked before
//! every reschedule so a callback already in flight cannot revive the loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};

struct Shared {
	running: Cell<bool>,
	pending: RefCell<Option<AnimationFrame>>,
	tick: RefCell<Box<dyn FnMut(f64)>>,
}

/// A per-display-refresh callback loop. Stops when dropped.
pub struct FrameLoop {
	shared: Rc<Shared>,
}

impl FrameLoop {
	/// Start calling `tick` with the frame timestamp (ms) once per refresh.
	pub fn start(tick: impl FnMut(f64) + 'static) -> Self {
		let shared = Rc::new(Shared {
			running: Cell::new(true),
			pending: RefCell::new(None),
			tick: RefCell::new(Box::new(tick)),
		});
		schedule(&shared);
		Self { shared }
	}

	/// Cancel the pending frame. No tick runs after this returns.
	pub fn stop(&self) {
		self.shared.running.set(false);
		self.shared.pending.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}

fn schedule(shared: &Rc<Shared>) {
	if !shared.running.get() {
		return;
	}
	let next = Rc::clone(shared);
	let handle = request_animation_frame(move |timestamp| {
		if !next.running.get() {
			return;
		}
		{
			let mut tick = next.tick.borrow_mut();
			(*tick)(timestamp);
		}
		schedule(&next);
	});
	*shared.pending.borrow_mut() = Some(handle);
}
